//! Scripted transport for unit tests.

use crate::models::{ApiRequest, RawResponse};
use crate::transport::{Transport, TransportError};
use std::cell::RefCell;
use std::collections::VecDeque;

/// Replays queued results and records every request it receives.
#[derive(Default)]
pub(crate) struct MockTransport {
    results: RefCell<VecDeque<Result<RawResponse, TransportError>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn returning(result: Result<RawResponse, TransportError>) -> Self {
        let transport = Self::new();
        transport.push(result);
        transport
    }

    pub(crate) fn push(&self, result: Result<RawResponse, TransportError>) {
        self.results.borrow_mut().push_back(result);
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl Transport for MockTransport {
    fn send(&self, request: &ApiRequest) -> Result<RawResponse, TransportError> {
        self.requests.borrow_mut().push(request.clone());
        self.results
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no scripted response".to_string())))
    }
}
