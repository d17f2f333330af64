//! User record types.

use serde::{Deserialize, Serialize};

use crate::ids::UserId;

/// One user record as served by the directory endpoint.
///
/// The `password` field is stored and displayed in cleartext because that is
/// the contract of the upstream service; treat it as an opaque secret value,
/// not a credential this client is responsible for protecting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique, server-assigned identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Contact address.
    pub email: String,
    /// Secret value, served in cleartext.
    pub password: String,
}

/// The editable fields of a record, without an identifier.
///
/// Used for the insert mutation (the server assigns the id) and as the
/// payload of the update mutation. Fields are unvalidated and may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl User {
    /// The record's editable fields as a draft.
    pub fn draft(&self) -> UserDraft {
        UserDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}
