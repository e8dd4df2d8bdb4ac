//! Outward signals of the search container.
//!
//! State and events travel on separate primitives. State is a `watch` value:
//! every subscriber starts from the current snapshot and then sees later ones,
//! possibly skipping intermediate values. Toggle events are a `broadcast`: a
//! subscriber only receives events emitted after it subscribed.

use search_core::SearchState;
use search_logging::search_warn;
use tokio::sync::broadcast::error::{RecvError, TryRecvError};
use tokio::sync::{broadcast, watch};

use crate::ToggleEvent;

const EVENT_CAPACITY: usize = 64;

pub struct NotificationChannel {
    state_tx: watch::Sender<SearchState>,
    event_tx: broadcast::Sender<ToggleEvent>,
}

impl NotificationChannel {
    pub fn new(initial: SearchState) -> Self {
        let (state_tx, _) = watch::channel(initial);
        let (event_tx, _) = broadcast::channel(EVENT_CAPACITY);
        Self { state_tx, event_tx }
    }

    /// Replace the current snapshot and wake every state subscriber.
    pub fn publish_state(&self, state: SearchState) {
        self.state_tx.send_replace(state);
    }

    /// Emit an event to the subscribers listening right now.
    ///
    /// Returns how many subscribers it reached; zero is not an error.
    pub fn emit(&self, event: ToggleEvent) -> usize {
        self.event_tx.send(event).unwrap_or(0)
    }

    pub fn current(&self) -> SearchState {
        self.state_tx.borrow().clone()
    }

    pub fn subscribe_state(&self) -> StateStream {
        let mut rx = self.state_tx.subscribe();
        // Replay the current snapshot on the first `changed()`.
        rx.mark_changed();
        StateStream { rx }
    }

    pub fn subscribe_events(&self) -> EventStream {
        EventStream {
            rx: self.event_tx.subscribe(),
        }
    }
}

impl Default for NotificationChannel {
    fn default() -> Self {
        Self::new(SearchState::default())
    }
}

pub struct StateStream {
    rx: watch::Receiver<SearchState>,
}

impl StateStream {
    pub fn current(&self) -> SearchState {
        self.rx.borrow().clone()
    }

    /// Waits for the next snapshot. The first call yields the snapshot that was
    /// current at subscription time. Returns `None` once the channel is gone.
    pub async fn changed(&mut self) -> Option<SearchState> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }
}

pub struct EventStream {
    rx: broadcast::Receiver<ToggleEvent>,
}

impl EventStream {
    /// Waits for the next event. Returns `None` once the channel is gone.
    pub async fn recv(&mut self) -> Option<ToggleEvent> {
        loop {
            match self.rx.recv().await {
                Ok(event) => return Some(event),
                Err(RecvError::Lagged(skipped)) => {
                    search_warn!("toggle event subscriber lagged, skipped {skipped} events");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }

    pub fn try_recv(&mut self) -> Option<ToggleEvent> {
        loop {
            match self.rx.try_recv() {
                Ok(event) => return Some(event),
                Err(TryRecvError::Lagged(skipped)) => {
                    search_warn!("toggle event subscriber lagged, skipped {skipped} events");
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => return None,
            }
        }
    }
}
