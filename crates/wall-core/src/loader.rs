//! Message loading from a local file or a remote URL.
//!
//! The source kind is probed once at startup; the selected strategy is not
//! re-checked per call. The external document is a JSON array of records
//! with `message`/`name`/`date` fields, kept in insertion order.

use crate::error::{Result, WallError};
use crate::types::{Message, RawRecord};
use std::path::PathBuf;

/// Which loading strategy applies to a configured source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceKind {
    /// Read from the local filesystem.
    File(PathBuf),
    /// Fetch over HTTP(S).
    Remote(String),
}

impl SourceKind {
    /// Probe a configured source string. `http://` and `https://` prefixes
    /// select the remote strategy; anything else is a filesystem path.
    pub fn detect(source: &str) -> Self {
        let trimmed = source.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Self::Remote(trimmed.to_string())
        } else {
            Self::File(PathBuf::from(trimmed))
        }
    }
}

/// Owns the loaded message list. Messages are immutable after load, so the
/// store can be shared freely without locks.
#[derive(Debug)]
pub struct MessageStore {
    messages: Vec<Message>,
}

impl MessageStore {
    /// Load messages from a configured source string.
    pub async fn load(source: &str) -> Result<Self> {
        let kind = SourceKind::detect(source);
        let body = match &kind {
            SourceKind::File(path) => std::fs::read_to_string(path).map_err(|e| {
                WallError::DataLoad(format!("{}: {}", path.display(), e))
            })?,
            SourceKind::Remote(url) => fetch_remote(url).await?,
        };
        let store = Self::from_json(&body)?;
        tracing::info!(
            "Loaded {} messages from {:?}",
            store.len(),
            kind
        );
        Ok(store)
    }

    /// Parse a JSON document into a store.
    ///
    /// A document whose top level is not an array is a contract violation
    /// and is rejected, not coerced.
    pub fn from_json(body: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(body)
            .map_err(|e| WallError::DataLoad(format!("invalid JSON: {}", e)))?;
        if !value.is_array() {
            return Err(WallError::DataLoad(
                "expected a JSON array of message records".into(),
            ));
        }
        let records: Vec<RawRecord> = serde_json::from_value(value)?;
        Ok(Self::from_messages(
            records.into_iter().map(Message::from).collect(),
        ))
    }

    /// Build a store from an already-materialized list.
    pub fn from_messages(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    /// The full message list, in insertion order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

async fn fetch_remote(url: &str) -> Result<String> {
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .user_agent("hackwall/0.1")
        .redirect(reqwest::redirect::Policy::limited(5))
        .build()?;

    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(WallError::DataLoad(format!(
            "{} returned HTTP {}",
            url,
            status.as_u16()
        )));
    }
    Ok(response.text().await?)
}
