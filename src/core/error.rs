//! Custom error types for the SDK

use thiserror::Error;

/// Main error type for the SDK
#[derive(Error, Debug)]
pub enum Error {
    /// No session token is available; the user must log in
    #[error("No session found: please log in first")]
    NoSession,

    /// The session has no resolvable user identity
    #[error("User information not found: please log in again")]
    MissingUser,

    /// Input validation failed before any request was sent
    #[error("Invalid input: {0}")]
    Validation(String),

    /// The cart has no lines to submit
    #[error("Cart is empty: add at least one item before ordering")]
    EmptyCart,

    /// Business error reported by the backend, surfaced verbatim
    #[error("{0}")]
    Server(String),

    /// Network or transport failure
    #[error("Network error: {0}")]
    Network(String),

    /// Serialization or deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Network(e.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Server(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Server(s.to_string())
    }
}
