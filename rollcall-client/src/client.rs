//! HTTP transport for GraphQL requests.

use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::ClientError;
use crate::wire::{GraphQlRequest, GraphQlResponse};

/// GraphQL-over-HTTP client bound to one endpoint.
///
/// Built once per process and shared behind an `Arc`; `reqwest::Client`
/// pools connections internally, so cloning the handle is cheap.
#[derive(Clone, Debug)]
pub struct GraphQlClient {
    http: Client,
    endpoint: Url,
}

impl GraphQlClient {
    /// Create a client for the given endpoint URL.
    pub fn new(endpoint: Url) -> Self {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        log::info!("[GraphQlClient] Creating client for endpoint: {endpoint}");

        Self { http, endpoint }
    }

    /// The endpoint this client posts to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Execute one GraphQL operation and unwrap its `data` payload.
    ///
    /// Failures map onto the [`ClientError`] taxonomy: transport errors from
    /// the HTTP layer, non-success statuses, server-reported GraphQL errors,
    /// and a well-formed response with no data.
    pub async fn execute<V, T>(
        &self,
        query: &'static str,
        variables: Option<V>,
    ) -> Result<T, ClientError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        log::debug!("[GraphQlClient] POST {}", self.endpoint);

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&GraphQlRequest { query, variables })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }

        let envelope: GraphQlResponse<T> = response.json().await?;
        if !envelope.errors.is_empty() {
            return Err(ClientError::Server(
                envelope.errors.into_iter().map(|e| e.message).collect(),
            ));
        }

        envelope.data.ok_or(ClientError::MissingData)
    }
}
