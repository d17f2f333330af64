//! GraphQL client for the Rollcall user directory endpoint.
//!
//! The endpoint speaks GraphQL over HTTP POST: one JSON request envelope
//! carrying a query document plus variables, one JSON response envelope
//! carrying `data` and/or `errors`. This crate owns the wire types, the
//! HTTP transport, and the [`UserDirectoryService`] trait the application
//! consumes. The client is constructed once per process from configuration
//! and passed down explicitly.

pub mod client;
pub mod directory;
pub mod error;
pub mod wire;

pub use client::GraphQlClient;
pub use directory::{GraphQlUserDirectory, UserDirectoryService};
pub use error::ClientError;
