use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use serde_json::Value;

use super::{ApiRequest, ApiResponse, Transport};
use crate::ApiError;

/// In-memory Transport that replays scripted responses, in order.
///
/// Every request is recorded, including those that find the script empty
/// (they fail with [`ApiError::Transport`]). Clones share the script and the
/// record, so a test can keep a handle after moving one into a client.
#[derive(Clone, Debug, Default)]
pub struct MemoryTransport {
    script: Rc<RefCell<VecDeque<Result<ApiResponse, ApiError>>>>,
    requests: Rc<RefCell<Vec<ApiRequest>>>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with the given status and JSON body.
    pub fn respond(self, status: u16, body: Value) -> Self {
        self.script
            .borrow_mut()
            .push_back(Ok(ApiResponse::new(status, body)));
        self
    }

    /// Queue a connection failure.
    pub fn fail(self, reason: &str) -> Self {
        self.script
            .borrow_mut()
            .push_back(Err(ApiError::Transport(reason.to_string())));
        self
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl Transport for MemoryTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.script
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted response".to_string())))
    }
}
