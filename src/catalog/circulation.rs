//! Issue and return: the only operations that change book availability.
//!
//! Every operation validates all of its preconditions before it touches the
//! catalog, so a rejected call leaves the catalog exactly as it found it.

use super::error::{CatalogError, CatalogResult};
use super::lookup::{book_index, member_index};
use super::model::{Book, BookStatus, NO_BOOK_HELD};
use super::Catalog;

/// Index of the book if it can move to `target`.
fn check_transition(catalog: &Catalog, isbn: &str, target: BookStatus) -> CatalogResult<usize> {
    let index = book_index(catalog, isbn)?;
    let current = catalog.books()[index].status;
    if current == target {
        return Err(CatalogError::InvalidTransition {
            isbn: isbn.to_string(),
            status: current,
        });
    }
    Ok(index)
}

fn apply(catalog: &mut Catalog, index: usize, target: BookStatus) -> Book {
    let book = catalog.book_mut(index);
    book.status = target;
    tracing::info!(isbn = %book.isbn, status = %target, "book status changed");
    book.clone()
}

/// Mark an available book as issued and return the updated book.
pub fn issue_book(catalog: &mut Catalog, isbn: &str) -> CatalogResult<Book> {
    let index = check_transition(catalog, isbn, BookStatus::Issued)?;
    Ok(apply(catalog, index, BookStatus::Issued))
}

/// Mark an issued book as available and return the updated book.
pub fn return_book(catalog: &mut Catalog, isbn: &str) -> CatalogResult<Book> {
    let index = check_transition(catalog, isbn, BookStatus::Available)?;
    Ok(apply(catalog, index, BookStatus::Available))
}

/// Whether `reference` names a catalog book that is currently out on loan.
fn is_on_loan(catalog: &Catalog, reference: &str) -> bool {
    book_index(catalog, reference)
        .map(|index| catalog.books()[index].status == BookStatus::Issued)
        .unwrap_or(false)
}

/// Issue a book and record it as the member's currently held book.
///
/// A member holds at most one issued book. A held reference that no longer
/// names an issued book is moved into the member's history first.
pub fn issue_book_to(catalog: &mut Catalog, isbn: &str, uid: &str) -> CatalogResult<Book> {
    let book_idx = check_transition(catalog, isbn, BookStatus::Issued)?;
    let member_idx = member_index(catalog, uid)?;
    let held = catalog.members()[member_idx].status.clone();
    if is_on_loan(catalog, &held) {
        return Err(CatalogError::AlreadyHolding {
            uid: uid.to_string(),
            held,
        });
    }

    let book = apply(catalog, book_idx, BookStatus::Issued);
    let member = catalog.member_mut(member_idx);
    if held != NO_BOOK_HELD {
        member.history.push(held);
    }
    member.status = isbn.to_string();
    tracing::info!(uid = %member.uid, isbn, "book issued to member");
    Ok(book)
}

/// Return a book the member currently holds, moving it into their history.
pub fn return_book_from(catalog: &mut Catalog, isbn: &str, uid: &str) -> CatalogResult<Book> {
    let book_idx = check_transition(catalog, isbn, BookStatus::Available)?;
    let member_idx = member_index(catalog, uid)?;
    if catalog.members()[member_idx].status != isbn {
        return Err(CatalogError::NotHeld {
            uid: uid.to_string(),
            isbn: isbn.to_string(),
        });
    }

    let book = apply(catalog, book_idx, BookStatus::Available);
    let member = catalog.member_mut(member_idx);
    member.history.push(isbn.to_string());
    member.status = NO_BOOK_HELD.to_string();
    tracing::info!(uid = %member.uid, isbn, "book returned by member");
    Ok(book)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::lookup::{book_by_isbn, member_by_uid};
    use crate::catalog::Entity;

    #[test]
    fn issue_then_reissue() {
        let mut catalog = Catalog::seeded();

        let issued = issue_book(&mut catalog, "0002").unwrap();
        assert_eq!(issued.status, BookStatus::Issued);
        assert_eq!(
            book_by_isbn(&catalog, "0002").unwrap().status,
            BookStatus::Issued
        );

        assert_eq!(
            issue_book(&mut catalog, "0002"),
            Err(CatalogError::InvalidTransition {
                isbn: "0002".into(),
                status: BookStatus::Issued
            })
        );
        assert_eq!(
            book_by_isbn(&catalog, "0002").unwrap().status,
            BookStatus::Issued
        );
    }

    #[test]
    fn returning_an_available_book_is_rejected() {
        let mut catalog = Catalog::seeded();
        let before = catalog.clone();

        assert!(matches!(
            return_book(&mut catalog, "0003"),
            Err(CatalogError::InvalidTransition {
                status: BookStatus::Available,
                ..
            })
        ));
        assert_eq!(catalog, before);
    }

    #[test]
    fn issue_then_return_restores_status() {
        let mut catalog = Catalog::seeded();
        let before = book_by_isbn(&catalog, "0003").unwrap().clone();

        issue_book(&mut catalog, "0003").unwrap();
        let returned = return_book(&mut catalog, "0003").unwrap();

        assert_eq!(returned, before);
        assert_eq!(catalog, Catalog::seeded());
    }

    #[test]
    fn unknown_isbn_is_not_found() {
        let mut catalog = Catalog::seeded();
        assert_eq!(
            issue_book(&mut catalog, "4242"),
            Err(CatalogError::NotFound {
                entity: Entity::Book,
                key: "4242".into()
            })
        );
        assert!(return_book(&mut catalog, "4242").is_err());
    }

    #[test]
    fn plain_transitions_leave_members_untouched() {
        let mut catalog = Catalog::seeded();
        issue_book(&mut catalog, "0002").unwrap();
        return_book(&mut catalog, "0001").unwrap();
        assert_eq!(catalog.members(), Catalog::seeded().members());
    }

    #[test]
    fn linked_issue_and_return_update_the_member() {
        let mut catalog = Catalog::seeded();

        issue_book_to(&mut catalog, "0002", "0001").unwrap();
        let member = member_by_uid(&catalog, "0001").unwrap();
        assert_eq!(member.status, "0002");
        assert_eq!(member.history, ["BOOK2", "BOOK3", "BOOK4", "BOOK1"]);

        let returned = return_book_from(&mut catalog, "0002", "0001").unwrap();
        assert_eq!(returned.status, BookStatus::Available);
        let member = member_by_uid(&catalog, "0001").unwrap();
        assert_eq!(member.status, NO_BOOK_HELD);
        assert_eq!(member.history, ["BOOK2", "BOOK3", "BOOK4", "BOOK1", "0002"]);
    }

    #[test]
    fn second_linked_issue_to_the_same_member_is_rejected() {
        let mut catalog = Catalog::seeded();
        issue_book_to(&mut catalog, "0002", "0001").unwrap();
        let before = catalog.clone();

        assert_eq!(
            issue_book_to(&mut catalog, "0003", "0001"),
            Err(CatalogError::AlreadyHolding {
                uid: "0001".into(),
                held: "0002".into()
            })
        );
        assert_eq!(catalog, before);

        return_book_from(&mut catalog, "0002", "0001").unwrap();
        issue_book_to(&mut catalog, "0003", "0001").unwrap();
        let member = member_by_uid(&catalog, "0001").unwrap();
        assert_eq!(member.status, "0003");
        assert_eq!(member.history.last().map(String::as_str), Some("0002"));
    }

    #[test]
    fn held_book_returned_without_the_member_is_archived_on_next_issue() {
        let mut catalog = Catalog::seeded();
        issue_book_to(&mut catalog, "0002", "0001").unwrap();
        return_book(&mut catalog, "0002").unwrap();

        issue_book_to(&mut catalog, "0003", "0001").unwrap();
        let member = member_by_uid(&catalog, "0001").unwrap();
        assert_eq!(member.status, "0003");
        assert_eq!(member.history, ["BOOK2", "BOOK3", "BOOK4", "BOOK1", "0002"]);
    }

    #[test]
    fn linked_issue_to_unknown_member_changes_nothing() {
        let mut catalog = Catalog::seeded();
        assert_eq!(
            issue_book_to(&mut catalog, "0002", "0099"),
            Err(CatalogError::NotFound {
                entity: Entity::Member,
                key: "0099".into()
            })
        );
        assert_eq!(catalog, Catalog::seeded());
    }

    #[test]
    fn linked_return_requires_the_member_to_hold_the_book() {
        let mut catalog = Catalog::seeded();
        assert_eq!(
            return_book_from(&mut catalog, "0001", "0002"),
            Err(CatalogError::NotHeld {
                uid: "0002".into(),
                isbn: "0001".into()
            })
        );
        assert_eq!(catalog, Catalog::seeded());
    }
}
