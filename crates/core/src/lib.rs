//! `mtoflow-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! prefixed document identifiers, the domain error model, order-date
//! normalization and monetary rounding.

pub mod date;
pub mod error;
pub mod id;
pub mod money;

pub use date::OrderDate;
pub use error::{DomainError, DomainResult};
pub use id::{DocumentId, DocumentKind};
pub use money::round2;
