//! The directory service consumed by the application.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use rollcall_model::{User, UserDraft, UserId};

use crate::client::GraphQlClient;
use crate::wire::{
    ADD_USER_MUTATION, AddUserData, AddUserVariables, UPDATE_USER_MUTATION, USERS_QUERY,
    UpdateUserData, UpdateUserVariables, UsersData,
};

/// The three operations the directory endpoint exposes.
///
/// The application holds this trait behind an `Arc` so tests can substitute
/// a stub without any network.
#[async_trait]
pub trait UserDirectoryService: Send + Sync {
    /// Fetch the full roster, in server order.
    async fn list_users(&self) -> Result<Vec<User>>;

    /// Create a record from a draft; the returned record carries the
    /// server-assigned identifier.
    async fn add_user(&self, draft: UserDraft) -> Result<User>;

    /// Replace the non-identifier fields of the record matched by `id`.
    async fn update_user(&self, id: UserId, draft: UserDraft) -> Result<User>;
}

/// [`UserDirectoryService`] adapter over the GraphQL endpoint.
#[derive(Clone, Debug)]
pub struct GraphQlUserDirectory {
    client: Arc<GraphQlClient>,
}

impl GraphQlUserDirectory {
    pub fn new(client: Arc<GraphQlClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserDirectoryService for GraphQlUserDirectory {
    async fn list_users(&self) -> Result<Vec<User>> {
        let data: UsersData = self.client.execute::<(), _>(USERS_QUERY, None).await?;
        Ok(data.users)
    }

    async fn add_user(&self, draft: UserDraft) -> Result<User> {
        let variables = AddUserVariables {
            name: &draft.name,
            email: &draft.email,
            password: &draft.password,
        };
        let data: AddUserData = self
            .client
            .execute(ADD_USER_MUTATION, Some(variables))
            .await?;
        Ok(data.add_user)
    }

    async fn update_user(&self, id: UserId, draft: UserDraft) -> Result<User> {
        let variables = UpdateUserVariables {
            id,
            name: &draft.name,
            email: &draft.email,
            password: &draft.password,
        };
        let data: UpdateUserData = self
            .client
            .execute(UPDATE_USER_MUTATION, Some(variables))
            .await?;
        Ok(data.update_user)
    }
}
