use std::fmt;

use serde::{Deserialize, Serialize};

/// Member status value meaning no book is currently held.
pub const NO_BOOK_HELD: &str = "NONE";

/// Availability of a single book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookStatus {
    Available,
    Issued,
}

impl BookStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::Available => "available",
            BookStatus::Issued => "issued",
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog book, keyed by ISBN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub status: BookStatus,
}

impl Book {
    pub fn new(
        isbn: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        status: BookStatus,
    ) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            status,
        }
    }
}

/// A library member, keyed by UID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub uid: String,
    pub name: String,
    /// Opaque date token as supplied at registration.
    #[serde(rename = "datejoined")]
    pub date_joined: String,
    #[serde(rename = "contactnum")]
    pub contact_num: String,
    /// Reference of the currently held book, or [`NO_BOOK_HELD`].
    pub status: String,
    /// Previously held book references, oldest first.
    pub history: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_serializes_with_lowercase_status() {
        let book = Book::new("0002", "RANDOM2", "PETER", BookStatus::Available);
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "isbn": "0002",
                "title": "RANDOM2",
                "author": "PETER",
                "status": "available"
            })
        );
    }

    #[test]
    fn member_uses_flat_lowercase_keys() {
        let member = Member {
            uid: "0001".into(),
            name: "ME".into(),
            date_joined: "04082004".into(),
            contact_num: "9136125577".into(),
            status: NO_BOOK_HELD.into(),
            history: vec!["BOOK2".into()],
        };
        let json = serde_json::to_value(&member).unwrap();
        assert_eq!(json["datejoined"], "04082004");
        assert_eq!(json["contactnum"], "9136125577");
        assert_eq!(json["history"], serde_json::json!(["BOOK2"]));
        assert_eq!(json["status"], "NONE");
    }
}
