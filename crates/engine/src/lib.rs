//! Order lifecycle engine.
//!
//! Orchestrates one order end-to-end through the document chain, evaluates
//! the status rule table, and runs batches or single orders against the
//! persisted dataset. Deterministic, single-threaded, one-shot: a run either
//! completes or fails synchronously; there are no retries.

pub mod audit;
pub mod processor;
pub mod runner;

pub use audit::{AuditSink, MemorySink, WriterSink};
pub use processor::{OrderRequest, process_order};
pub use runner::{MergeMode, RunError, run_batch, run_single};
