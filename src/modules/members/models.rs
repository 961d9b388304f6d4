use serde::{Deserialize, Serialize};

use crate::catalog::Member;

/// Book a member currently holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentBook {
    pub uid: String,
    /// Held book reference, or `NONE`.
    pub status: String,
}

impl From<&Member> for CurrentBook {
    fn from(member: &Member) -> Self {
        Self {
            uid: member.uid.clone(),
            status: member.status.clone(),
        }
    }
}

/// Books a member held in the past.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorrowHistory {
    pub uid: String,
    pub history: Vec<String>,
    /// Number of entries in `history`.
    pub total: usize,
}

impl From<&Member> for BorrowHistory {
    fn from(member: &Member) -> Self {
        Self {
            uid: member.uid.clone(),
            history: member.history.clone(),
            total: member.history.len(),
        }
    }
}
