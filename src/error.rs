//! Error types for balisage operations.

use thiserror::Error;

/// Errors that can occur while building, parsing or saving HTML.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid attribute name: {0:?}")]
    InvalidAttribute(String),

    #[error("Invalid class name: {0:?}")]
    InvalidClassName(String),

    #[error("Invalid tag name: {0:?}")]
    InvalidTagName(String),

    /// Void elements (`br`, `img`, ...) never hold children.
    #[error("<{0}> is a void element and cannot have children")]
    VoidElement(String),

    #[error("Child index {index} out of range for {len} children")]
    ChildIndex { index: usize, len: usize },

    #[error("Unknown encoding: {0}")]
    UnknownEncoding(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "json")]
    #[error("Invalid table data: {0}")]
    InvalidFrame(String),
}

pub type Result<T> = std::result::Result<T, Error>;
