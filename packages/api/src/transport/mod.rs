//! # Transport: how requests reach the backend
//!
//! [`crate::ApiClient`] builds an [`ApiRequest`] (method, path, optional bearer
//! token, optional JSON body) and hands it to a [`Transport`]. The transport
//! only moves bytes: it reports the status and JSON body it got back, or a
//! [`ApiError::Transport`] when nothing came back at all. Interpreting the
//! status is the client's job.
//!
//! | Implementation | Used by |
//! |----------------|---------|
//! | [`HttpTransport`] | The running application (`reqwest`, which uses `fetch` on WASM). |
//! | [`MemoryTransport`] | Tests: replays scripted responses and records every request. |

use std::future::Future;

use serde_json::Value;

use crate::ApiError;

mod http;
mod memory;

pub use http::HttpTransport;
pub use memory::MemoryTransport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

/// A request ready to be sent.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path below the configured base URL, starting with `/api/`.
    pub path: String,
    /// Bearer token for the `Authorization` header.
    pub bearer: Option<String>,
    pub body: Option<Value>,
}

/// What the backend answered.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    /// Parsed JSON body; `Null` when empty, a JSON string when not JSON.
    pub body: Value,
}

impl ApiResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Async trait for sending requests to the backend.
pub trait Transport {
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = Result<ApiResponse, ApiError>>;
}
