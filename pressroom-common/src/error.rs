//! Common error types for Pressroom

use thiserror::Error;

/// Common result type for Pressroom operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the Pressroom crates
#[derive(Error, Debug)]
pub enum Error {
    /// Network/backend unreachable or non-2xx from the Content API
    #[error("Transport error: {0}")]
    Transport(String),

    /// Content API returned a non-success status
    #[error("API error {0}: {1}")]
    Api(u16, String),

    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error (wraps serde_json::Error)
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Requested resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
