//! Scripted transport for protocol tests.
//!
//! Tests enqueue wire-level outcomes in order; every request pops the next
//! one and is recorded so assertions can check exactly what went out.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::net::http::{ApiError, HttpResponse, PreparedRequest, Transport};

pub(crate) struct StubTransport {
    script: RefCell<VecDeque<Result<HttpResponse, ApiError>>>,
    seen: RefCell<Vec<PreparedRequest>>,
    /// Runs once, just before request number `.0` (0-based) returns, to
    /// model work (e.g. a logout) interleaving with an in-flight exchange.
    interrupt: RefCell<Option<(usize, Box<dyn FnOnce()>)>>,
}

impl StubTransport {
    pub(crate) fn new() -> Self {
        Self {
            script: RefCell::new(VecDeque::new()),
            seen: RefCell::new(Vec::new()),
            interrupt: RefCell::new(None),
        }
    }

    pub(crate) fn push_ok(&self, status: u16, body: serde_json::Value) {
        self.script.borrow_mut().push_back(Ok(HttpResponse { status, body }));
    }

    pub(crate) fn push_err(&self, error: ApiError) {
        self.script.borrow_mut().push_back(Err(error));
    }

    pub(crate) fn interrupt_before(&self, index: usize, action: impl FnOnce() + 'static) {
        *self.interrupt.borrow_mut() = Some((index, Box::new(action)));
    }

    /// Requests observed so far, in order.
    pub(crate) fn requests(&self) -> Vec<PreparedRequest> {
        self.seen.borrow().clone()
    }
}

impl Transport for StubTransport {
    async fn perform(&self, request: &PreparedRequest) -> Result<HttpResponse, ApiError> {
        self.seen.borrow_mut().push(request.clone());
        let current = self.seen.borrow().len() - 1;
        let due = self.interrupt.borrow().as_ref().is_some_and(|(index, _)| *index == current);
        if due {
            if let Some((_, action)) = self.interrupt.borrow_mut().take() {
                action();
            }
        }
        self.script
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("stub script exhausted".to_owned())))
    }
}
