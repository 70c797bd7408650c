//! Order documents domain module.
//!
//! This crate contains the five business documents of the make-to-order
//! chain and their derivation functions, implemented purely as deterministic
//! domain logic (no IO, no storage).

pub mod documents;
pub mod record;

pub use documents::{
    Billing, BillingStatus, Delivery, DocumentChain, PlannedOrder, ProductionOrder, SalesOrder,
};
pub use record::OrderRecord;
