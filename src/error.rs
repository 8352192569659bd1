//! Error types for the Pokedex client
//!
//! Provides unified error handling using thiserror. The cache itself has no
//! error type: a miss is an ordinary `None`.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for API calls and command execution.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Request could not be sent or its body could not be read
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON
    #[error("Failed to parse JSON response: {0}")]
    Decode(#[from] serde_json::Error),

    /// API answered with a non-success status other than 404
    #[error("Unexpected status {status} from {url}")]
    Status { url: String, status: u16 },

    /// API has no such resource
    #[error("Not found: {0}")]
    NotFound(String),

    /// First word of the input is not a known command
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Command needs an argument that was not given
    #[error("Usage: {command} <{argument}>")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    /// Terminal I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex client.
pub type Result<T> = std::result::Result<T, PokedexError>;
