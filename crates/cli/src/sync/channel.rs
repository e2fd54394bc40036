// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Notification channel: the push half of the sync protocol.
//!
//! Holds one WebSocket connection to the push endpoint and turns every
//! well-formed frame into a [`ChannelEvent::Trigger`]. The connection cycles
//! `Disconnected -> Connecting -> Connected -> Disconnected` for as long as
//! the controller lives. After every disconnect, including a failed attempt,
//! the next attempt starts after a fixed delay. There is no backoff and no
//! retry limit.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use murmur_core::Notification;

use super::transport::{Transport, TransportError};

/// Delay between a disconnect and the next connection attempt.
pub const DEFAULT_RECONNECT_DELAY: Duration = Duration::from_millis(2000);

/// Connection state of the push channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// No connection and none in progress.
    Disconnected,
    /// Connection attempt in progress.
    Connecting,
    /// Receiving notifications.
    Connected,
}

/// Events sent from the channel task to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelEvent {
    /// The connection state changed.
    State(ConnectionState),
    /// A notification arrived; the message list should be fetched again.
    Trigger,
}

/// Transition function for the push connection.
///
/// Every attempt is stamped with an epoch. Events carrying an older epoch
/// belong to an abandoned connection and are ignored, so at most one
/// connection is live and a close can schedule at most one retry.
#[derive(Debug)]
pub struct ConnectionMachine {
    state: ConnectionState,
    epoch: u64,
    reconnect_delay: Duration,
}

impl ConnectionMachine {
    pub fn new(reconnect_delay: Duration) -> Self {
        ConnectionMachine {
            state: ConnectionState::Disconnected,
            epoch: 0,
            reconnect_delay,
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// Epoch of the most recent attempt. Zero before the first attempt.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// `Disconnected -> Connecting`.
    ///
    /// Returns the epoch of the new attempt, or `None` if an attempt or
    /// connection is already live.
    pub fn begin_attempt(&mut self) -> Option<u64> {
        if self.state != ConnectionState::Disconnected {
            return None;
        }
        self.epoch += 1;
        self.state = ConnectionState::Connecting;
        Some(self.epoch)
    }

    /// `Connecting -> Connected` for the attempt stamped `epoch`.
    ///
    /// Returns false for a stale epoch or when no attempt is in progress.
    pub fn connected(&mut self, epoch: u64) -> bool {
        if epoch != self.epoch || self.state != ConnectionState::Connecting {
            return false;
        }
        self.state = ConnectionState::Connected;
        true
    }

    /// `Connecting | Connected -> Disconnected` for the attempt stamped
    /// `epoch`, whether it closed cleanly, errored, or never connected.
    ///
    /// Returns the delay before the next attempt. Returns `None` for a stale
    /// epoch or a repeated close, which must not schedule another retry.
    pub fn closed(&mut self, epoch: u64) -> Option<Duration> {
        if epoch != self.epoch || self.state == ConnectionState::Disconnected {
            return None;
        }
        self.state = ConnectionState::Disconnected;
        Some(self.reconnect_delay)
    }
}

/// Why a connection session ended.
#[derive(Debug)]
enum SessionEnd {
    Closed,
    Failed(TransportError),
    ControllerGone,
}

/// The push channel: one transport driven by a [`ConnectionMachine`].
pub struct NotificationChannel<T: Transport> {
    url: String,
    transport: T,
    machine: ConnectionMachine,
}

impl<T: Transport> NotificationChannel<T> {
    pub fn new(url: impl Into<String>, transport: T, reconnect_delay: Duration) -> Self {
        NotificationChannel {
            url: url.into(),
            transport,
            machine: ConnectionMachine::new(reconnect_delay),
        }
    }

    /// Run the connect/receive/reconnect loop until `cancel` fires or the
    /// event receiver is dropped.
    pub async fn run(mut self, events: mpsc::Sender<ChannelEvent>, cancel: CancellationToken) {
        while let Some(epoch) = self.machine.begin_attempt() {
            if !emit(&events, ChannelEvent::State(ConnectionState::Connecting)).await {
                break;
            }
            debug!(url = %self.url, epoch, "connecting to notification channel");

            let end = tokio::select! {
                _ = cancel.cancelled() => break,
                end = self.session(epoch, &events) => end,
            };

            let _ = self.transport.disconnect().await;
            match end {
                SessionEnd::ControllerGone => break,
                SessionEnd::Closed => warn!(epoch, "notification channel closed"),
                SessionEnd::Failed(e) => warn!(epoch, error = %e, "notification channel failed"),
            }

            if let Some(delay) = self.machine.closed(epoch) {
                if !emit(&events, ChannelEvent::State(ConnectionState::Disconnected)).await {
                    break;
                }
                debug!(delay_ms = delay.as_millis() as u64, "reconnect scheduled");
                tokio::select! {
                    _ = cancel.cancelled() => break,
                    _ = tokio::time::sleep(delay) => {}
                }
            }
        }

        let _ = self.transport.disconnect().await;
        debug!("notification channel stopped");
    }

    /// Connect, then forward triggers until the connection ends.
    async fn session(&mut self, epoch: u64, events: &mpsc::Sender<ChannelEvent>) -> SessionEnd {
        if let Err(e) = self.transport.connect(&self.url).await {
            return SessionEnd::Failed(e);
        }
        if self.machine.connected(epoch) {
            info!(url = %self.url, "notification channel connected");
            if !emit(events, ChannelEvent::State(ConnectionState::Connected)).await {
                return SessionEnd::ControllerGone;
            }
        }

        loop {
            match self.transport.recv().await {
                Ok(Some(frame)) => match Notification::from_json(&frame) {
                    Ok(_) => {
                        debug!("notification received");
                        if !emit(events, ChannelEvent::Trigger).await {
                            return SessionEnd::ControllerGone;
                        }
                    }
                    Err(e) => {
                        warn!(error = %e, frame = %frame, "ignoring malformed notification");
                    }
                },
                Ok(None) => return SessionEnd::Closed,
                Err(e) => return SessionEnd::Failed(e),
            }
        }
    }
}

async fn emit(events: &mpsc::Sender<ChannelEvent>, event: ChannelEvent) -> bool {
    events.send(event).await.is_ok()
}
