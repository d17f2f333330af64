//! Shared data model for the Rollcall user directory client.
//!
//! This crate holds the record types exchanged with the directory endpoint
//! and used by the desktop application. It carries no I/O; serialization
//! derives match the wire field names exactly.

pub mod ids;
pub mod user;

pub use ids::UserId;
pub use user::{User, UserDraft};
