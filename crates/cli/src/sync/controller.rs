// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sync controller: owns the message list and the connection lifecycle.
//!
//! On start it spawns the notification channel and performs one fetch. Each
//! trigger from the channel dispatches another fetch. The list is replaced
//! wholesale by whichever fetch resolves last; overlapping fetches are not
//! reordered. A failed fetch keeps the cached list.
//!
//! Sends go through the validator and the [`Api`] but never refetch: the
//! server's notification for the new message drives the update.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use futures_util::stream::{FuturesUnordered, StreamExt};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::{CancellationToken, DropGuard};
use tracing::{debug, warn};

use murmur_core::message::same_list;
use murmur_core::{sort_chronological, validate_draft, Draft, Message, ValidationError};

use super::api::{Api, ApiResult, SendError};
use super::channel::{ChannelEvent, ConnectionState, NotificationChannel};
use super::transport::Transport;

const EVENT_BUFFER: usize = 64;

/// Why a submit did not go through.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// Rejected locally; the backend was not contacted.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// Rejected by the backend, or the backend was unreachable.
    #[error(transparent)]
    Send(#[from] SendError),
}

/// Controller behavior switches.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    /// Sort each fetched list by timestamp instead of keeping server order.
    pub sort_by_timestamp: bool,
}

/// Handle to a running sync core.
///
/// Dropping the handle stops the channel and the driver.
pub struct SyncController<A: Api> {
    api: Arc<A>,
    messages: watch::Receiver<Vec<Message>>,
    status: watch::Receiver<ConnectionState>,
    cancel: CancellationToken,
    tasks: Vec<JoinHandle<()>>,
    _guard: DropGuard,
}

impl<A: Api + 'static> SyncController<A> {
    /// Open the notification channel and perform the initial fetch.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start<T: Transport + 'static>(
        api: A,
        channel: NotificationChannel<T>,
        options: SyncOptions,
    ) -> Self {
        let api = Arc::new(api);
        let (messages_tx, messages) = watch::channel(Vec::new());
        let (status_tx, status) = watch::channel(ConnectionState::Disconnected);
        let (events_tx, events_rx) = mpsc::channel(EVENT_BUFFER);
        let cancel = CancellationToken::new();

        let mut driver = Driver {
            api: Arc::clone(&api),
            messages_tx,
            status_tx,
            in_flight: FuturesUnordered::new(),
            dispatched: 0,
            options,
        };
        // Baseline before the channel reports anything, so a push that lands
        // before Connected is not missed.
        driver.dispatch_fetch();

        let channel_task = tokio::spawn(channel.run(events_tx, cancel.child_token()));
        let driver_task = tokio::spawn(driver.run(events_rx, cancel.clone()));

        SyncController {
            api,
            messages,
            status,
            _guard: cancel.clone().drop_guard(),
            cancel,
            tasks: vec![channel_task, driver_task],
        }
    }

    /// The current message list.
    pub fn messages(&self) -> Vec<Message> {
        self.messages.borrow().clone()
    }

    /// Observe the message list.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Message>> {
        self.messages.clone()
    }

    /// The current connection state.
    pub fn status(&self) -> ConnectionState {
        *self.status.borrow()
    }

    /// Observe the connection state.
    pub fn subscribe_status(&self) -> watch::Receiver<ConnectionState> {
        self.status.clone()
    }

    /// Validate and send a message.
    ///
    /// Validation happens immediately; the returned future only performs the
    /// send, so callers can keep handling input while it is in flight. On
    /// success the normalized draft is returned and the caller may clear its
    /// input.
    pub fn submit(
        &self,
        author: &str,
        body: &str,
    ) -> impl Future<Output = Result<Draft, SubmitError>> + Send + 'static {
        let api = Arc::clone(&self.api);
        let validated = validate_draft(author, body);
        async move { send_draft(api.as_ref(), validated?).await }
    }

    /// Stop the channel and driver and wait for both to finish.
    pub async fn shutdown(mut self) {
        self.cancel.cancel();
        for task in std::mem::take(&mut self.tasks) {
            let _ = task.await;
        }
    }
}

/// Validate and send one message without running a controller.
pub async fn submit_once<A: Api + ?Sized>(
    api: &A,
    author: &str,
    body: &str,
) -> Result<Draft, SubmitError> {
    let draft = validate_draft(author, body)?;
    send_draft(api, draft).await
}

async fn send_draft<A: Api + ?Sized>(api: &A, draft: Draft) -> Result<Draft, SubmitError> {
    api.send(draft.clone()).await?;
    debug!(author = %draft.author, "message accepted");
    Ok(draft)
}

type FetchFuture = Pin<Box<dyn Future<Output = (u64, ApiResult<Vec<Message>>)> + Send>>;

/// Owns the published state; the only writer of the list and status.
struct Driver<A: Api> {
    api: Arc<A>,
    messages_tx: watch::Sender<Vec<Message>>,
    status_tx: watch::Sender<ConnectionState>,
    in_flight: FuturesUnordered<FetchFuture>,
    dispatched: u64,
    options: SyncOptions,
}

impl<A: Api + 'static> Driver<A> {
    async fn run(mut self, mut events: mpsc::Receiver<ChannelEvent>, cancel: CancellationToken) {
        let mut channel_open = true;
        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                event = events.recv(), if channel_open => match event {
                    Some(ChannelEvent::Trigger) => self.on_notification(),
                    Some(ChannelEvent::State(state)) => {
                        debug!(?state, "connection state changed");
                        self.status_tx.send_replace(state);
                    }
                    None => {
                        debug!("notification channel ended");
                        channel_open = false;
                    }
                },
                Some((seq, result)) = self.in_flight.next(), if !self.in_flight.is_empty() => {
                    self.apply(seq, result);
                }
            }
        }
    }

    fn on_notification(&mut self) {
        self.dispatch_fetch();
    }

    fn dispatch_fetch(&mut self) {
        self.dispatched += 1;
        let seq = self.dispatched;
        let api = Arc::clone(&self.api);
        debug!(seq, "fetch dispatched");
        self.in_flight
            .push(Box::pin(async move { (seq, api.fetch_all().await) }));
    }

    fn apply(&mut self, seq: u64, result: ApiResult<Vec<Message>>) {
        match result {
            Ok(mut messages) => {
                if self.options.sort_by_timestamp {
                    sort_chronological(&mut messages);
                }
                debug!(seq, count = messages.len(), "resync complete");
                self.messages_tx.send_if_modified(|current| {
                    if same_list(current, &messages) {
                        return false;
                    }
                    *current = messages;
                    true
                });
            }
            Err(e) => {
                warn!(seq, error = %e, "fetch failed, keeping cached messages");
            }
        }
    }
}
