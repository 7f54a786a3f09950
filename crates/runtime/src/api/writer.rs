//! Submission of document writes.
//!
//! Writes are fire-and-forget: `submit` returns immediately, the caller never
//! learns whether the write landed, and nothing is retried.

use std::sync::{Mutex, PoisonError};

use rules_core::DocumentUpdate;
use tokio::sync::mpsc;
use tracing::warn;

use crate::workers::Command;

/// Accepts sparse document writes on behalf of the host's document store.
pub trait DocumentWriter: Send + Sync {
    fn submit(&self, update: DocumentUpdate);
}

/// Forwards writes to the background writer worker.
#[derive(Clone)]
pub struct ChannelWriter {
    tx: mpsc::UnboundedSender<Command>,
}

impl ChannelWriter {
    pub(crate) fn new(tx: mpsc::UnboundedSender<Command>) -> Self {
        Self { tx }
    }
}

impl DocumentWriter for ChannelWriter {
    fn submit(&self, update: DocumentUpdate) {
        if let Err(error) = self.tx.send(Command::Apply(update)) {
            let Command::Apply(update) = error.0 else {
                return;
            };
            warn!(
                target: "runtime::writer",
                target_document = ?update.target,
                fields = update.len(),
                "document writer closed, dropping update"
            );
        }
    }
}

/// Records submitted writes in order. Useful for tests and dry runs.
#[derive(Default)]
pub struct UpdateLog {
    updates: Mutex<Vec<DocumentUpdate>>,
}

impl UpdateLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every write submitted so far.
    pub fn snapshot(&self) -> Vec<DocumentUpdate> {
        self.updates
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drains the recorded writes.
    pub fn take(&self) -> Vec<DocumentUpdate> {
        std::mem::take(&mut *self.updates.lock().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn len(&self) -> usize {
        self.updates
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DocumentWriter for UpdateLog {
    fn submit(&self, update: DocumentUpdate) {
        self.updates
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(update);
    }
}
