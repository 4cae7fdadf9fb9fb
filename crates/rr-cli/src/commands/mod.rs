pub mod handle;
pub mod roll;
pub mod serve;

use std::panic::{self, AssertUnwindSafe};

use rand::rngs::StdRng;

use rr_rpc::{PluginResponse, dispatch_or_missing};

/// Run one dispatch behind a panic boundary and encode the response.
///
/// The host only reads JSON documents from stdout; an unexpected internal
/// failure must surface as an error document, never as a crash.
pub fn respond(raw: Option<&str>, rng: &mut StdRng) -> String {
    panic::catch_unwind(AssertUnwindSafe(|| dispatch_or_missing(raw, rng)))
        .unwrap_or_else(|_| PluginResponse::error("Unexpected internal error"))
        .to_json()
}
