//! Boot configuration and initial state.

use std::sync::Arc;

use iced::Task;
use rollcall_client::{GraphQlClient, GraphQlUserDirectory};
use url::Url;

use crate::message::Message;
use crate::state::State;

/// Endpoint used when `ROLLCALL_ENDPOINT` is unset.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/graphql";

/// Process-level configuration. The endpoint URL is the only knob.
#[derive(Clone, Debug)]
pub struct AppConfig {
    endpoint: Url,
}

impl AppConfig {
    pub fn new(endpoint: Url) -> Self {
        Self { endpoint }
    }

    /// Read the endpoint from the environment, falling back to the default.
    ///
    /// An unparsable value is reported and replaced by the default rather
    /// than aborting; the failure then surfaces through the normal fetch
    /// error path.
    pub fn from_environment() -> Self {
        let raw = std::env::var("ROLLCALL_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());

        let endpoint = Url::parse(&raw).unwrap_or_else(|err| {
            log::warn!("Invalid ROLLCALL_ENDPOINT {raw:?} ({err}), using {DEFAULT_ENDPOINT}");
            Url::parse(DEFAULT_ENDPOINT).expect("default endpoint parses")
        });

        Self { endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// Initial state and task for the running application.
///
/// The directory service is created here, once, and injected into state;
/// nothing else in the application constructs a client.
pub fn runtime_boot(config: &AppConfig) -> (State, Task<Message>) {
    let client = Arc::new(GraphQlClient::new(config.endpoint.clone()));
    let directory = Arc::new(GraphQlUserDirectory::new(client));
    let state = State::new(directory);

    // First roster fetch goes through the normal handler.
    (state, Task::done(Message::LoadUsers))
}
