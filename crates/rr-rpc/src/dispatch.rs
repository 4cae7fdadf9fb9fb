//! Request decoding and method dispatch.

use rand::rngs::StdRng;

use rr_core::{RollSettings, handle_query};

use crate::error::RpcError;
use crate::request::PluginRequest;
use crate::response::PluginResponse;

/// Decode one raw request and produce its response document.
///
/// Malformed payloads and unknown methods become error documents. Query
/// validation problems stay on the success channel as usage outcomes.
pub fn dispatch(raw: &str, rng: &mut StdRng) -> PluginResponse {
    let request: PluginRequest = match serde_json::from_str(raw) {
        Ok(request) => request,
        Err(e) => return PluginResponse::error(RpcError::InvalidRequest(e)),
    };

    match request.method.as_str() {
        "query" => {
            let settings = RollSettings::resolve(&request.settings);
            PluginResponse::success(handle_query(request.query_text(), &settings, rng))
        }
        other => PluginResponse::error(RpcError::UnknownMethod(other.to_string())),
    }
}

/// Like [`dispatch`], for transports that may deliver no payload at all.
pub fn dispatch_or_missing(raw: Option<&str>, rng: &mut StdRng) -> PluginResponse {
    match raw {
        Some(raw) => dispatch(raw, rng),
        None => PluginResponse::error(RpcError::NoRequest),
    }
}
