//! Dataset store.
//!
//! The accumulated tabular history of all processed orders, persisted as a
//! single CSV file between invocations. Read at run start, written at run
//! end; read-modify-write, not transactional. A single caller driving one
//! run at a time is assumed — concurrent runs against the same file race.

pub mod dataset;

pub use dataset::{Dataset, StoreError};
