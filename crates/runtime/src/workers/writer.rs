//! Document writer worker.
//!
//! Drains [`Command::Apply`] requests in submission order and applies each to
//! the actor repository. A failed write is logged and skipped; the submitter
//! has already moved on and nothing is retried.

use std::sync::Arc;

use rules_core::{DocumentUpdate, RulesError};
use serde::Serialize;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info, warn};

use crate::repository::ActorRepository;

/// Commands accepted by the writer worker.
pub enum Command {
    /// Apply a document write.
    Apply(DocumentUpdate),

    /// Reply once every write submitted before this command has been handled.
    Flush { reply: oneshot::Sender<WriteSummary> },
}

/// Running totals of handled writes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct WriteSummary {
    /// Updates applied to the repository.
    pub applied: usize,
    /// Updates the repository rejected.
    pub rejected: usize,
    /// Individual fields written across all applied updates.
    pub fields: usize,
}

/// Background worker that applies document writes.
pub struct WriterWorker {
    repository: Arc<dyn ActorRepository>,
    command_rx: mpsc::UnboundedReceiver<Command>,
    summary: WriteSummary,
}

impl WriterWorker {
    pub fn new(
        repository: Arc<dyn ActorRepository>,
        command_rx: mpsc::UnboundedReceiver<Command>,
    ) -> Self {
        Self {
            repository,
            command_rx,
            summary: WriteSummary::default(),
        }
    }

    /// Main worker loop. Ends when every sender has been dropped.
    pub async fn run(mut self) -> WriteSummary {
        debug!(target: "runtime::writer", "WriterWorker started");

        while let Some(command) = self.command_rx.recv().await {
            match command {
                Command::Apply(update) => self.apply(&update),
                Command::Flush { reply } => {
                    let _ = reply.send(self.summary);
                }
            }
        }

        info!(
            target: "runtime::writer",
            applied = self.summary.applied,
            rejected = self.summary.rejected,
            fields = self.summary.fields,
            "WriterWorker stopped"
        );
        self.summary
    }

    fn apply(&mut self, update: &DocumentUpdate) {
        match self.repository.apply(update) {
            Ok(fields) => {
                self.summary.applied += 1;
                self.summary.fields += fields;
                debug!(
                    target: "runtime::writer",
                    document = ?update.target,
                    fields,
                    "applied document update"
                );
            }
            Err(err) => {
                self.summary.rejected += 1;
                if err.severity().is_internal() {
                    error!(
                        target: "runtime::writer",
                        document = ?update.target,
                        code = err.error_code(),
                        error = %err,
                        "document store failed"
                    );
                } else {
                    warn!(
                        target: "runtime::writer",
                        document = ?update.target,
                        code = err.error_code(),
                        error = %err,
                        "document update rejected"
                    );
                }
            }
        }
    }
}
