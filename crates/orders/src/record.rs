//! Flattened per-order result record.
//!
//! This is the row schema of the persisted dataset and the contract consumed
//! by every presentation collaborator (tables, KPIs, exports). Field names
//! serialize to the exact column headers those consumers expect.

use serde::{Deserialize, Serialize};

use crate::documents::DocumentChain;

/// One processed order, flattened from its document chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    #[serde(rename = "Order Date")]
    pub order_date: String,
    #[serde(rename = "Customer")]
    pub customer: String,
    #[serde(rename = "Product")]
    pub product: String,
    #[serde(rename = "Qty")]
    pub quantity: u32,
    #[serde(rename = "Sales Order")]
    pub sales_order: String,
    #[serde(rename = "Planned Order")]
    pub planned_order: String,
    #[serde(rename = "Production Order")]
    pub production_order: String,
    #[serde(rename = "Confirmed")]
    pub confirmed: bool,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Delivery")]
    pub delivery: String,
    #[serde(rename = "Invoice")]
    pub invoice: String,
    #[serde(rename = "Billing Status")]
    pub billing_status: String,
    #[serde(rename = "Amount")]
    pub amount: f64,
}

impl OrderRecord {
    /// Flatten a completed document chain into one dataset row.
    pub fn from_chain(chain: &DocumentChain) -> Self {
        Self {
            order_date: chain.sales.order_date.to_string(),
            customer: chain.sales.customer.clone(),
            product: chain.sales.product.clone(),
            quantity: chain.sales.quantity,
            sales_order: chain.sales.id.to_string(),
            planned_order: chain.planned.id.to_string(),
            production_order: chain.production.id.to_string(),
            confirmed: chain.production.confirmed,
            status: chain.sales.status.clone(),
            delivery: chain.delivery.status.to_string(),
            invoice: chain.billing.id.to_string(),
            billing_status: chain.billing.status.to_string(),
            amount: chain.billing.amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documents::{Billing, Delivery, PlannedOrder, ProductionOrder, SalesOrder};
    use mtoflow_core::OrderDate;
    use mtoflow_rules::{BillingOutcome, DeliveryOutcome};

    fn sample_chain() -> DocumentChain {
        let mut sales = SalesOrder::new(
            "ACME Corp",
            "Widget A",
            10,
            15.0,
            OrderDate::parse("2023-01-05"),
            "Shipped",
        );
        let mut planned = PlannedOrder::derive(&sales);
        sales.planned_order = Some(planned.id.clone());
        let mut production = ProductionOrder::derive(&planned);
        planned.production_order = Some(production.id.clone());
        production.confirmed = true;
        let delivery = Delivery::derive(&production, &sales.customer, DeliveryOutcome::InTransit);
        let billing = Billing::derive(&delivery, 150.0, BillingOutcome::Processed);
        DocumentChain {
            sales,
            planned,
            production,
            delivery,
            billing,
        }
    }

    #[test]
    fn from_chain_flattens_every_column() {
        let chain = sample_chain();
        let record = OrderRecord::from_chain(&chain);

        assert_eq!(record.order_date, "2023-01-05");
        assert_eq!(record.customer, "ACME Corp");
        assert_eq!(record.product, "Widget A");
        assert_eq!(record.quantity, 10);
        assert_eq!(record.sales_order, chain.sales.id.to_string());
        assert_eq!(record.planned_order, chain.planned.id.to_string());
        assert_eq!(record.production_order, chain.production.id.to_string());
        assert!(record.confirmed);
        assert_eq!(record.status, "Shipped");
        assert_eq!(record.delivery, "In Transit");
        assert_eq!(record.invoice, chain.billing.id.to_string());
        assert_eq!(record.billing_status, "Paid");
        assert_eq!(record.amount, 150.0);
    }
}
