pub mod books;
pub mod circulation;
pub mod errors;
pub mod members;

use libris_kernel::{settings::Settings, ModuleRegistry};

use crate::catalog::SharedCatalog;

/// Register all catalog modules with the registry
pub fn register_all(registry: &mut ModuleRegistry, catalog: &SharedCatalog, settings: &Settings) {
    registry.register(books::create_module(catalog.clone()));
    registry.register(members::create_module(catalog.clone()));
    registry.register(circulation::create_module(
        catalog.clone(),
        settings.server.status_policy,
    ));
}

/// Registry holding every catalog module over one shared catalog
pub fn registry(catalog: &SharedCatalog, settings: &Settings) -> ModuleRegistry {
    let mut registry = ModuleRegistry::new();
    register_all(&mut registry, catalog, settings);
    registry
}
