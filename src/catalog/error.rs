use std::fmt;

use thiserror::Error;

use super::model::BookStatus;

/// Which collection a failed lookup ran against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Book,
    Member,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Book => f.write_str("book"),
            Entity::Member => f.write_str("member"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("{entity} not found: {key}")]
    NotFound { entity: Entity, key: String },

    /// The book is already in the state the operation would move it to.
    #[error("book {isbn} is already {status}")]
    InvalidTransition { isbn: String, status: BookStatus },

    #[error("member {uid} does not hold book {isbn}")]
    NotHeld { uid: String, isbn: String },

    /// The member still has `held` out on loan.
    #[error("member {uid} still holds book {held}")]
    AlreadyHolding { uid: String, held: String },

    #[error("duplicate {entity} key: {key}")]
    DuplicateKey { entity: Entity, key: String },
}

impl CatalogError {
    pub(crate) fn book_not_found(isbn: &str) -> Self {
        Self::NotFound {
            entity: Entity::Book,
            key: isbn.to_string(),
        }
    }

    pub(crate) fn member_not_found(key: &str) -> Self {
        Self::NotFound {
            entity: Entity::Member,
            key: key.to_string(),
        }
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;
