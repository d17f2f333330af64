//! Shared fixtures for application tests.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use rollcall_app::state::State;
use rollcall_client::UserDirectoryService;
use rollcall_model::{User, UserDraft, UserId};

/// Directory stub with canned data; never touches the network.
pub struct StubDirectory {
    pub users: Vec<User>,
}

impl StubDirectory {
    pub fn empty() -> Self {
        Self { users: Vec::new() }
    }
}

#[async_trait]
impl UserDirectoryService for StubDirectory {
    async fn list_users(&self) -> Result<Vec<User>> {
        Ok(self.users.clone())
    }

    async fn add_user(&self, draft: UserDraft) -> Result<User> {
        Ok(User {
            id: UserId(99),
            name: draft.name,
            email: draft.email,
            password: draft.password,
        })
    }

    async fn update_user(&self, id: UserId, draft: UserDraft) -> Result<User> {
        Ok(User {
            id,
            name: draft.name,
            email: draft.email,
            password: draft.password,
        })
    }
}

/// A record with derived email and a fixed secret.
pub fn user(id: i64, name: &str) -> User {
    User {
        id: UserId(id),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        password: "secret".to_string(),
    }
}

/// State around an empty stub directory.
pub fn fresh_state() -> State {
    State::new(Arc::new(StubDirectory::empty()))
}
