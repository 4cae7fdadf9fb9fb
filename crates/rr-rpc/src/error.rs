//! Protocol-level errors.

use thiserror::Error;

/// Result type for protocol operations.
pub type RpcResult<T> = Result<T, RpcError>;

/// Errors reported on the top-level `error` channel.
///
/// These are transport and protocol failures only. Bad integers, oversized
/// ranges, and empty label sets never surface here; the core converts them
/// to usage outcomes inside a successful response.
#[derive(Debug, Error)]
pub enum RpcError {
    /// The request payload was not valid JSON.
    #[error("Invalid JSON request: {0}")]
    InvalidRequest(#[from] serde_json::Error),

    /// The request named a method this plugin does not implement.
    #[error("Unknown method: {0}")]
    UnknownMethod(String),

    /// No request payload was delivered at all.
    #[error("No JSON-RPC request provided")]
    NoRequest,
}
