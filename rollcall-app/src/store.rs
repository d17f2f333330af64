//! UserStore - single source of truth for the fetched roster.
//!
//! The store owns the one client-side cache of user records and the merge
//! rules that keep it consistent: identifiers stay unique, pre-existing
//! records keep their insertion order, new records are prepended, and
//! updates replace fields in place without moving the record.

use rollcall_model::{User, UserId};

/// Ordered store of user records.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    users: Vec<User>,
}

impl UserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self { users: Vec::new() }
    }

    /// Replace the whole roster with a freshly fetched list.
    ///
    /// The server list is taken as-is; it is trusted to carry unique
    /// identifiers in its own order.
    pub fn replace_all(&mut self, users: Vec<User>) {
        log::debug!("UserStore: replacing roster with {} records", users.len());
        self.users = users;
    }

    /// Merge a newly created record into the roster without a re-fetch.
    ///
    /// The record becomes the first element. If its identifier is already
    /// present (a refetch landed the record first), the existing entry is
    /// refreshed in place instead of inserted again, so identifiers stay
    /// unique and positions stable.
    pub fn prepend(&mut self, user: User) {
        if let Some(existing) = self.users.iter_mut().find(|u| u.id == user.id) {
            log::debug!("UserStore: {} already present, refreshing in place", user.id);
            *existing = user;
            return;
        }
        log::debug!("UserStore: prepending new record {}", user.id);
        self.users.insert(0, user);
    }

    /// Replace the non-identifier fields of the record matched by id.
    ///
    /// Position and identifier are untouched. Returns `false` when the
    /// identifier is unknown, which callers treat as a stale result to
    /// ignore rather than an error.
    pub fn apply_update(&mut self, user: User) -> bool {
        match self.users.iter_mut().find(|u| u.id == user.id) {
            Some(existing) => {
                existing.name = user.name;
                existing.email = user.email;
                existing.password = user.password;
                true
            }
            None => false,
        }
    }

    /// The roster, in display order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Look up one record by identifier.
    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
