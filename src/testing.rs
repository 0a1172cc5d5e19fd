//! Stub dispatcher for facade tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::dispatch::{Dispatch, Method};
use crate::error::FreshdeskError;
use crate::models::{Query, Record};

/// One recorded `request` call.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Call {
    pub method: Method,
    pub endpoint: String,
    pub body: Option<Record>,
    pub query: Option<Query>,
}

impl Call {
    pub fn new(method: Method, endpoint: &str, body: Option<Record>, query: Option<Query>) -> Self {
        Self {
            method,
            endpoint: endpoint.to_string(),
            body,
            query,
        }
    }
}

/// Records every call. Answers with queued responses first, then echoes
/// the request body back (or `null` when there is none).
#[derive(Default)]
pub(crate) struct RecordingDispatcher {
    calls: Mutex<Vec<Call>>,
    responses: Mutex<VecDeque<Result<Value, FreshdeskError>>>,
}

impl RecordingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond_with(&self, response: Result<Value, FreshdeskError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_call(&self) -> Call {
        self.calls().pop().expect("no request was dispatched")
    }
}

#[async_trait]
impl Dispatch for RecordingDispatcher {
    async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Record>,
        query: Option<&Query>,
    ) -> Result<Value, FreshdeskError> {
        self.calls.lock().unwrap().push(Call {
            method,
            endpoint: endpoint.to_string(),
            body: body.cloned(),
            query: query.cloned(),
        });

        if let Some(response) = self.responses.lock().unwrap().pop_front() {
            return response;
        }

        Ok(body.cloned().map(Value::Object).unwrap_or(Value::Null))
    }
}
