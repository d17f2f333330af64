//! Strongly typed record identifiers.

use serde::{Deserialize, Serialize};

/// Server-assigned identifier of a user record.
///
/// Identifiers are unique within a roster and immutable once assigned; the
/// client never fabricates one. The wire representation is the bare number.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl UserId {
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(raw: i64) -> Self {
        UserId(raw)
    }
}
