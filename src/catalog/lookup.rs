//! Exact-match lookups. Each scans its collection in order and returns the
//! first entity whose field equals the key, case-sensitively.

use super::error::{CatalogError, CatalogResult};
use super::model::{Book, Member};
use super::Catalog;

fn find_book<'a>(
    catalog: &'a Catalog,
    key: &str,
    field: impl Fn(&Book) -> &str,
) -> CatalogResult<&'a Book> {
    catalog
        .books()
        .iter()
        .find(|book| field(book) == key)
        .ok_or_else(|| CatalogError::book_not_found(key))
}

fn find_member<'a>(
    catalog: &'a Catalog,
    key: &str,
    field: impl Fn(&Member) -> &str,
) -> CatalogResult<&'a Member> {
    catalog
        .members()
        .iter()
        .find(|member| field(member) == key)
        .ok_or_else(|| CatalogError::member_not_found(key))
}

pub fn book_by_isbn<'a>(catalog: &'a Catalog, isbn: &str) -> CatalogResult<&'a Book> {
    find_book(catalog, isbn, |book| book.isbn.as_str())
}

pub fn book_by_title<'a>(catalog: &'a Catalog, title: &str) -> CatalogResult<&'a Book> {
    find_book(catalog, title, |book| book.title.as_str())
}

pub fn book_by_author<'a>(catalog: &'a Catalog, author: &str) -> CatalogResult<&'a Book> {
    find_book(catalog, author, |book| book.author.as_str())
}

pub fn member_by_uid<'a>(catalog: &'a Catalog, uid: &str) -> CatalogResult<&'a Member> {
    find_member(catalog, uid, |member| member.uid.as_str())
}

pub fn member_by_name<'a>(catalog: &'a Catalog, name: &str) -> CatalogResult<&'a Member> {
    find_member(catalog, name, |member| member.name.as_str())
}

pub fn member_by_contact_num<'a>(
    catalog: &'a Catalog,
    contact_num: &str,
) -> CatalogResult<&'a Member> {
    find_member(catalog, contact_num, |member| member.contact_num.as_str())
}

/// Position of the book with this ISBN, for callers that go on to mutate it.
pub(crate) fn book_index(catalog: &Catalog, isbn: &str) -> CatalogResult<usize> {
    catalog
        .books()
        .iter()
        .position(|book| book.isbn == isbn)
        .ok_or_else(|| CatalogError::book_not_found(isbn))
}

pub(crate) fn member_index(catalog: &Catalog, uid: &str) -> CatalogResult<usize> {
    catalog
        .members()
        .iter()
        .position(|member| member.uid == uid)
        .ok_or_else(|| CatalogError::member_not_found(uid))
}
