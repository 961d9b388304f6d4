//! Core traits, settings, and the module registry shared by every Libris crate.

pub mod endpoint;
pub mod module;
pub mod registry;
pub mod settings;

pub use endpoint::{Endpoint, EndpointSet, Method};
pub use module::{InitCtx, Module};
pub use registry::ModuleRegistry;
