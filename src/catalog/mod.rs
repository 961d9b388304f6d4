//! In-memory library catalog: books, members, and the operations over them.

pub mod circulation;
pub mod error;
pub mod filter;
pub mod lookup;
pub mod model;
mod seed;

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::RwLock;

pub use error::{CatalogError, CatalogResult, Entity};
pub use model::{Book, BookStatus, Member, NO_BOOK_HELD};

/// Catalog shared between request handlers. Lookups take the read lock;
/// issue and return hold the write lock for the whole check-then-mutate step.
pub type SharedCatalog = Arc<RwLock<Catalog>>;

/// Owner of the book and member collections, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    books: Vec<Book>,
    members: Vec<Member>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ISBNs or UIDs.
    pub fn new(books: Vec<Book>, members: Vec<Member>) -> CatalogResult<Self> {
        if let Some(key) = first_duplicate(books.iter().map(|book| book.isbn.as_str())) {
            return Err(CatalogError::DuplicateKey {
                entity: Entity::Book,
                key,
            });
        }
        if let Some(key) = first_duplicate(members.iter().map(|member| member.uid.as_str())) {
            return Err(CatalogError::DuplicateKey {
                entity: Entity::Member,
                key,
            });
        }

        Ok(Self { books, members })
    }

    /// The demo catalog every process starts with.
    pub fn seeded() -> Self {
        Self {
            books: seed::books(),
            members: seed::members(),
        }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub(crate) fn book_mut(&mut self, index: usize) -> &mut Book {
        &mut self.books[index]
    }

    pub(crate) fn member_mut(&mut self, index: usize) -> &mut Member {
        &mut self.members[index]
    }

    /// Wrap the catalog for sharing across handlers.
    pub fn into_shared(self) -> SharedCatalog {
        Arc::new(RwLock::new(self))
    }
}

fn first_duplicate<'a>(keys: impl Iterator<Item = &'a str>) -> Option<String> {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Some(key.to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_catalog_keeps_seed_order() {
        let catalog = Catalog::seeded();
        let isbns: Vec<_> = catalog.books().iter().map(|b| b.isbn.as_str()).collect();
        assert_eq!(isbns, ["0001", "0002", "0003", "0004"]);
        assert_eq!(catalog.members().len(), 4);
    }

    #[test]
    fn seeded_catalog_passes_key_validation() {
        let seeded = Catalog::seeded();
        let rebuilt = Catalog::new(seeded.books().to_vec(), seeded.members().to_vec()).unwrap();
        assert_eq!(rebuilt, seeded);
    }

    #[test]
    fn duplicate_isbn_is_rejected() {
        let books = vec![
            Book::new("0001", "A", "X", BookStatus::Available),
            Book::new("0001", "B", "Y", BookStatus::Issued),
        ];
        assert_eq!(
            Catalog::new(books, Vec::new()),
            Err(CatalogError::DuplicateKey {
                entity: Entity::Book,
                key: "0001".into()
            })
        );
    }

    #[test]
    fn duplicate_uid_is_rejected() {
        let member = Catalog::seeded().members()[0].clone();
        let members = vec![member.clone(), member];
        assert!(matches!(
            Catalog::new(Vec::new(), members),
            Err(CatalogError::DuplicateKey {
                entity: Entity::Member,
                ..
            })
        ));
    }
}
