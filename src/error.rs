//! Error types for the LinkedIn post generator

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Article search failed with status {status}: {message}")]
    SearchApi { status: u16, message: String },

    #[error("Chat completion failed with status {status}: {message}")]
    ChatApi { status: u16, message: String },

    #[error("Chat response contained no choices")]
    EmptyChatResponse,

    #[error("Chat response shape not recognized")]
    UnrecognizedChatResponse,

    #[error("Invalid article count: {count}. Must be at least 1")]
    InvalidCount { count: usize },

    #[error("Article index {index} out of range: {available} articles available")]
    ArticleOutOfRange { index: usize, available: usize },

    #[error("Could not read sample posts file: {}", path.display())]
    SamplePostsUnreadable { path: PathBuf },
}
