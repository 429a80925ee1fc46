// Error types for blogstore.
// Every variant is a flavour of "remote fetch failed" except config, IO and page errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlogError {
    #[error("Blog API request failed: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Post not found: {0}")]
    NotFound(String),

    #[error("HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid page number {0}: pages start at 1")]
    InvalidPage(u32),
}

pub type Result<T> = std::result::Result<T, BlogError>;
