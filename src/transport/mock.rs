//! In-memory transport for unit tests

use super::{Transport, TransportRequest, TransportResponse};
use crate::{Error, Result};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

#[derive(Debug)]
enum Queued {
    Reply(Result<TransportResponse>),
    /// Never resolves; the caller has to give up on the request
    Stall,
}

/// Replays queued responses and records every request it sees
#[derive(Debug, Default)]
pub(crate) struct RecordingTransport {
    responses: Mutex<VecDeque<Queued>>,
    requests: Mutex<Vec<TransportRequest>>,
}

impl RecordingTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push_json(&self, status: u16, body: serde_json::Value) -> &Self {
        self.push(Queued::Reply(Ok(TransportResponse::new(status, body.to_string()))))
    }

    pub(crate) fn push_status(&self, status: u16) -> &Self {
        self.push(Queued::Reply(Ok(TransportResponse::new(status, Vec::new()))))
    }

    pub(crate) fn push_failure(&self, message: &str) -> &Self {
        self.push(Queued::Reply(Err(Error::transport(message))))
    }

    pub(crate) fn push_stall(&self) -> &Self {
        self.push(Queued::Stall)
    }

    fn push(&self, response: Queued) -> &Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    pub(crate) fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn last_request(&self) -> TransportRequest {
        self.requests.lock().unwrap().last().cloned().unwrap()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse> {
        self.requests.lock().unwrap().push(request);
        let next = self.responses.lock().unwrap().pop_front();
        match next {
            Some(Queued::Reply(response)) => response,
            Some(Queued::Stall) => std::future::pending().await,
            None => Err(Error::transport("no response queued")),
        }
    }
}
