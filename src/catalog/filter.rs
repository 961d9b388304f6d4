//! Status filters over the book collection. Each call re-scans the catalog.

use super::model::{Book, BookStatus};
use super::Catalog;

/// Books in the given state, in catalog order.
pub fn books_with_status(
    catalog: &Catalog,
    status: BookStatus,
) -> impl Iterator<Item = &Book> + '_ {
    catalog
        .books()
        .iter()
        .filter(move |book| book.status == status)
}

pub fn available_books(catalog: &Catalog) -> impl Iterator<Item = &Book> + '_ {
    books_with_status(catalog, BookStatus::Available)
}

pub fn issued_books(catalog: &Catalog) -> impl Iterator<Item = &Book> + '_ {
    books_with_status(catalog, BookStatus::Issued)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::circulation::{issue_book, return_book};

    fn isbns<'a>(books: impl Iterator<Item = &'a Book>) -> Vec<&'a str> {
        books.map(|book| book.isbn.as_str()).collect()
    }

    #[test]
    fn seed_set_filters() {
        let catalog = Catalog::seeded();
        assert_eq!(isbns(available_books(&catalog)), ["0002", "0003"]);
        assert_eq!(isbns(issued_books(&catalog)), ["0001", "0004"]);
    }

    #[test]
    fn filters_partition_the_catalog_after_any_transitions() {
        let mut catalog = Catalog::seeded();
        let steps: [(&str, bool); 7] = [
            ("0002", true),
            ("0001", false),
            ("0002", true),
            ("0003", true),
            ("0004", false),
            ("0009", true),
            ("0003", false),
        ];

        for (isbn, issue) in steps {
            // Rejected transitions are part of the sequence too.
            let _ = if issue {
                issue_book(&mut catalog, isbn)
            } else {
                return_book(&mut catalog, isbn)
            };

            let available = isbns(available_books(&catalog));
            let issued = isbns(issued_books(&catalog));
            assert_eq!(available.len() + issued.len(), catalog.books().len());
            assert!(available.iter().all(|isbn| !issued.contains(isbn)));
        }
    }

    #[test]
    fn filters_reflect_the_current_state() {
        let mut catalog = Catalog::seeded();
        issue_book(&mut catalog, "0003").unwrap();
        assert_eq!(isbns(available_books(&catalog)), ["0002"]);
        assert_eq!(isbns(issued_books(&catalog)), ["0001", "0003", "0004"]);
    }
}
