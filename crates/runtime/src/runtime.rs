//! Runtime orchestrator: a session plus the worker that persists its writes.
//!
//! The runtime owns the writer worker and hands its channel to the
//! [`Session`] as the document writer.

use std::sync::Arc;

use rules_core::RulesConfig;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::info;

use crate::api::{ChannelWriter, DocumentWriter, Result, RuntimeError};
use crate::hooks::{HookRegistry, PreparationHook};
use crate::oracle::OracleManager;
use crate::repository::ActorRepository;
use crate::session::Session;
use crate::workers::{Command, WriteSummary, WriterWorker};

/// Runtime configuration.
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    pub rules: RulesConfig,
}

/// Sheet runtime: a [`Session`] whose writes land in an actor repository.
pub struct Runtime {
    session: Session,
    command_tx: mpsc::UnboundedSender<Command>,
    writer_handle: JoinHandle<WriteSummary>,
}

impl Runtime {
    /// Starts a builder with default rules and hooks.
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Waits until every write submitted so far has been handled.
    pub async fn flush(&self) -> Result<WriteSummary> {
        let (reply, rx) = oneshot::channel();
        self.command_tx
            .send(Command::Flush { reply })
            .map_err(|_| RuntimeError::WriterClosed)?;
        rx.await.map_err(|_| RuntimeError::WriterClosed)
    }

    /// Shutdown the runtime gracefully, draining pending writes.
    pub async fn shutdown(self) -> Result<WriteSummary> {
        drop(self.session);
        drop(self.command_tx);

        let summary = self
            .writer_handle
            .await
            .map_err(RuntimeError::WorkerJoin)?;
        info!(
            target: "runtime",
            applied = summary.applied,
            rejected = summary.rejected,
            "runtime stopped"
        );
        Ok(summary)
    }
}

/// Wires oracles, a repository and hooks into a [`Runtime`].
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    oracles: Option<OracleManager>,
    repository: Option<Arc<dyn ActorRepository>>,
    hooks: Option<HookRegistry>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            oracles: None,
            repository: None,
            hooks: None,
        }
    }

    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn oracles(mut self, oracles: OracleManager) -> Self {
        self.oracles = Some(oracles);
        self
    }

    pub fn repository(mut self, repository: Arc<dyn ActorRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Replace the default hook registry.
    pub fn with_hooks(mut self, hooks: HookRegistry) -> Self {
        self.hooks = Some(hooks);
        self
    }

    /// Add a hook on top of the current registry.
    pub fn add_hook(mut self, hook: Arc<dyn PreparationHook>) -> Self {
        let hooks = self.hooks.take().unwrap_or_default();
        self.hooks = Some(hooks.with_hook(hook));
        self
    }

    /// Build the runtime and start the writer worker.
    pub async fn build(self) -> Result<Runtime> {
        let oracles = self.oracles.ok_or(RuntimeError::MissingOracles)?;
        let repository = self.repository.ok_or(RuntimeError::MissingRepository)?;

        let (command_tx, command_rx) = mpsc::unbounded_channel::<Command>();
        let worker = WriterWorker::new(repository, command_rx);
        let writer_handle = tokio::spawn(worker.run());

        let writer: Arc<dyn DocumentWriter> = Arc::new(ChannelWriter::new(command_tx.clone()));
        let session = Session::new(
            Arc::new(self.config.rules),
            oracles,
            self.hooks.unwrap_or_default(),
            writer,
        );

        Ok(Runtime {
            session,
            command_tx,
            writer_handle,
        })
    }
}
