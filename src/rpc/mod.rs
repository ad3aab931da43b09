//! JSON-RPC 2.0 plumbing for the conformance suite.
//!
//! The client performs exactly one HTTP POST per call and hands the decoded
//! body back untouched. A JSON-RPC `error` member is ordinary data here;
//! only transport problems become `Err`.

mod client;
mod types;

pub use client::RpcClient;
pub use types::{RpcErrorObject, RpcRequest, RpcResponse};

use thiserror::Error;

/// Failures surfaced by [`RpcClient::call`].
#[derive(Debug, Error)]
pub enum RpcError {
    /// The HTTP exchange failed or the body was not valid JSON. The message
    /// names the method that was in flight.
    #[error("error calling {method}: {source}")]
    Transport {
        method: String,
        #[source]
        source: reqwest::Error,
    },
}
