use thiserror::Error;

#[derive(Error, Debug)]
pub enum WallError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load messages: {0}")]
    DataLoad(String),

    #[error("Failed to create issue '{title}': {message}")]
    IssueCreate { title: String, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, WallError>;
