//! Status rule table.
//!
//! A fixed, declarative mapping from the normalized status keyword on the
//! originating order to the outcome triple driving confirmation, delivery and
//! billing downstream. The table is immutable: every order processed in the
//! same run sees the same rule set.

pub mod table;

pub use table::{BillingOutcome, DeliveryOutcome, OutcomeTriple, StatusKeyword};
