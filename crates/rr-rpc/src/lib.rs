//! Launcher protocol layer for Randroll.
//!
//! Decodes JSON-RPC-style requests, dispatches the `query` method to the
//! roll core, and encodes responses in the launcher's result format.
//! Every failure on this layer becomes an `{"error": ...}` document;
//! nothing here panics on malformed input. Query-level validation never
//! reaches the error channel — the core downgrades it to usage outcomes
//! inside a successful result list.

pub mod dispatch;
pub mod error;
pub mod request;
pub mod response;

pub use dispatch::{dispatch, dispatch_or_missing};
pub use error::{RpcError, RpcResult};
pub use request::PluginRequest;
pub use response::{ICON_PATH, JsonRpcAction, PluginResponse, ResultItem};
