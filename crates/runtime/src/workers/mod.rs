//! Worker tasks that back the runtime.
//!
//! The writer worker applies submitted document writes to the repository off
//! the preparation path, so rule evaluation never waits on storage.

mod writer;

pub use writer::{Command, WriteSummary, WriterWorker};
