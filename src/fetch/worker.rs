//! Fetch worker thread
//!
//! Runs a single-threaded tokio runtime in a background thread. Each
//! request is spawned as its own task, so requests are never cancelled
//! once sent and their responses may come back in any order. The UI
//! drains responses with [`FetchWorker::try_recv`].

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::JoinHandle;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio_util::sync::CancellationToken;

use super::backend::Backend;
use crate::error::TypeaheadError;
use crate::suggestion::Suggestion;
use crate::typeahead::FetchRequest;

/// Outcome of one request, tagged with the request it answers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub id: u64,
    pub query: String,
    pub outcome: Result<Vec<Suggestion>, TypeaheadError>,
}

/// Handle to a running worker; dropping it shuts the worker down
pub struct FetchWorker {
    request_tx: UnboundedSender<FetchRequest>,
    response_rx: Receiver<FetchResponse>,
    cancel: CancellationToken,
    thread: Option<JoinHandle<()>>,
}

/// Spawn the fetch worker thread
pub fn spawn_worker(backend: Backend) -> Result<FetchWorker, TypeaheadError> {
    let (request_tx, request_rx) = unbounded_channel();
    let (response_tx, response_rx) = mpsc::channel();
    let cancel = CancellationToken::new();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let token = cancel.clone();
    let thread = std::thread::Builder::new()
        .name("typeahead-fetch".to_string())
        .spawn(move || {
            runtime.block_on(worker_loop(backend, request_rx, response_tx, token));
            log::debug!("Fetch worker thread shutting down");
        })?;

    Ok(FetchWorker {
        request_tx,
        response_rx,
        cancel,
        thread: Some(thread),
    })
}

async fn worker_loop(
    backend: Backend,
    mut request_rx: UnboundedReceiver<FetchRequest>,
    response_tx: Sender<FetchResponse>,
    cancel: CancellationToken,
) {
    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            request = request_rx.recv() => {
                let Some(request) = request else { break };
                log::debug!("Fetching suggestions for request {} ({:?})", request.id, request.query);
                tokio::spawn(fetch_one(
                    backend.clone(),
                    request,
                    response_tx.clone(),
                    cancel.clone(),
                ));
            }
        }
    }
}

async fn fetch_one(
    backend: Backend,
    request: FetchRequest,
    response_tx: Sender<FetchResponse>,
    cancel: CancellationToken,
) {
    tokio::select! {
        _ = cancel.cancelled() => {
            log::debug!("Dropped request {} at shutdown", request.id);
        }
        outcome = backend.fetch(&request.query) => {
            let response = FetchResponse {
                id: request.id,
                query: request.query,
                outcome,
            };
            // UI side gone: nothing left to deliver to
            let _ = response_tx.send(response);
        }
    }
}

impl FetchWorker {
    /// Queue a request; returns false if the worker has stopped
    pub fn send(&self, request: FetchRequest) -> bool {
        self.request_tx.send(request).is_ok()
    }

    /// Non-blocking poll for the next finished request
    pub fn try_recv(&self) -> Option<FetchResponse> {
        match self.response_rx.try_recv() {
            Ok(response) => Some(response),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => None,
        }
    }

    pub fn shutdown(&mut self) {
        self.cancel.cancel();
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                log::warn!("Fetch worker thread panicked");
            }
        }
    }
}

impl Drop for FetchWorker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
