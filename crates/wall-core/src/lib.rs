//! Core types and plumbing for hackwall: the message model, the JSON data
//! loader, the search filter, configuration, and the error taxonomy.

pub mod config;
pub mod error;
pub mod loader;
pub mod search;
pub mod types;

pub use config::AppConfig;
pub use error::{Result, WallError};
pub use loader::{MessageStore, SourceKind};
pub use types::Message;
