//! The five business documents and their derivation functions.
//!
//! The chain is strictly linear and one-directional:
//! sales order → planned order → production order → delivery → billing.
//! Documents are value records linked by identifier, not live references;
//! each one is created exactly once per processed order, and the only fields
//! written after creation are the forward links noted on the types.

use mtoflow_core::{DocumentId, DocumentKind, OrderDate, round2};
use mtoflow_rules::{BillingOutcome, DeliveryOutcome};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Originating customer order; head of the document chain.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesOrder {
    pub id: DocumentId,
    pub customer: String,
    pub product: String,
    pub quantity: u32,
    /// Unit price, rounded to two decimals at construction.
    pub unit_price: f64,
    pub order_date: OrderDate,
    /// Raw status text as received; normalization happens at rule evaluation.
    pub status: String,
    /// Link to the derived planned order. Written once, at derivation.
    pub planned_order: Option<DocumentId>,
}

impl SalesOrder {
    pub fn new(
        customer: impl Into<String>,
        product: impl Into<String>,
        quantity: u32,
        unit_price: f64,
        order_date: OrderDate,
        status: impl Into<String>,
    ) -> Self {
        Self {
            id: DocumentId::generate(DocumentKind::SalesOrder),
            customer: customer.into(),
            product: product.into(),
            quantity,
            unit_price: round2(unit_price),
            order_date,
            status: status.into(),
            planned_order: None,
        }
    }
}

/// Planning document derived from a sales order.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedOrder {
    pub id: DocumentId,
    /// Back-reference to the sales order this was derived from.
    pub sales_order: DocumentId,
    pub product: String,
    pub quantity: u32,
    /// Status copied verbatim from the sales order.
    pub status: String,
    /// Link to the derived production order. Written once, at derivation.
    pub production_order: Option<DocumentId>,
}

impl PlannedOrder {
    /// Derive from a sales order, copying product, quantity and status.
    pub fn derive(sales: &SalesOrder) -> Self {
        Self {
            id: DocumentId::generate(DocumentKind::PlannedOrder),
            sales_order: sales.id.clone(),
            product: sales.product.clone(),
            quantity: sales.quantity,
            status: sales.status.clone(),
            production_order: None,
        }
    }
}

/// Shop-floor document derived from a planned order.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductionOrder {
    pub id: DocumentId,
    /// Back-reference to the planned order this was derived from.
    pub planned_order: DocumentId,
    pub product: String,
    pub quantity: u32,
    /// Status copied verbatim from the planned order.
    pub status: String,
    /// Production authorization. Written once, by rule evaluation.
    pub confirmed: bool,
}

impl ProductionOrder {
    /// Derive from a planned order. Starts unconfirmed.
    pub fn derive(planned: &PlannedOrder) -> Self {
        Self {
            id: DocumentId::generate(DocumentKind::ProductionOrder),
            planned_order: planned.id.clone(),
            product: planned.product.clone(),
            quantity: planned.quantity,
            status: planned.status.clone(),
            confirmed: false,
        }
    }
}

/// Outbound delivery derived from a production order.
#[derive(Debug, Clone, PartialEq)]
pub struct Delivery {
    pub id: DocumentId,
    /// Back-reference to the production order this was derived from.
    pub production_order: DocumentId,
    pub customer: String,
    /// Delivery status from the rule table. Set once, never revisited.
    pub status: DeliveryOutcome,
}

impl Delivery {
    /// Derive from a production order with the rule table's delivery outcome.
    pub fn derive(production: &ProductionOrder, customer: &str, status: DeliveryOutcome) -> Self {
        Self {
            id: DocumentId::generate(DocumentKind::Delivery),
            production_order: production.id.clone(),
            customer: customer.to_string(),
            status,
        }
    }
}

/// Invoice settlement status, derived from the billing outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BillingStatus {
    Paid,
    Unpaid,
}

impl From<BillingOutcome> for BillingStatus {
    /// `Paid` iff the rule table's billing outcome is `Processed`.
    fn from(outcome: BillingOutcome) -> Self {
        match outcome {
            BillingOutcome::Processed => Self::Paid,
            BillingOutcome::NotProcessed => Self::Unpaid,
        }
    }
}

impl fmt::Display for BillingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Paid => "Paid",
            Self::Unpaid => "Unpaid",
        })
    }
}

/// Invoice derived from a delivery.
#[derive(Debug, Clone, PartialEq)]
pub struct Billing {
    pub id: DocumentId,
    /// Back-reference to the delivery this was derived from.
    pub delivery: DocumentId,
    /// Invoice amount, rounded to two decimals at construction.
    pub amount: f64,
    /// Settlement status. Set once, never revisited.
    pub status: BillingStatus,
}

impl Billing {
    /// Derive from a delivery with the computed amount and billing outcome.
    pub fn derive(delivery: &Delivery, amount: f64, outcome: BillingOutcome) -> Self {
        Self {
            id: DocumentId::generate(DocumentKind::Billing),
            delivery: delivery.id.clone(),
            amount: round2(amount),
            status: outcome.into(),
        }
    }
}

/// All five documents produced for one processed order.
///
/// Lives only for the duration of one processing pass; the dataset retains
/// the flattened [`crate::OrderRecord`], not this graph.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentChain {
    pub sales: SalesOrder,
    pub planned: PlannedOrder,
    pub production: ProductionOrder,
    pub delivery: Delivery,
    pub billing: Billing,
}
