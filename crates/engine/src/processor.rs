//! Order processor: one order through the full document chain.

use mtoflow_core::{DomainError, DomainResult, OrderDate, round2};
use mtoflow_orders::{
    Billing, Delivery, DocumentChain, OrderRecord, PlannedOrder, ProductionOrder, SalesOrder,
};
use mtoflow_rules::StatusKeyword;

use crate::audit::AuditSink;

/// Raw input for one order, prior to any document creation.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRequest {
    pub customer: String,
    pub product: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub order_date: String,
    pub status: String,
}

/// Process one order end-to-end and return its flattened record.
///
/// Builds the five-document chain in sequence, evaluates the status rule
/// table after the production order exists, and appends a human-readable
/// trace of every step plus a summary block to `sink`.
///
/// Never partially applies: malformed numeric input fails here, before any
/// document is created. An unknown status keyword is not an error — it
/// degrades to the rule table's fallback triple.
pub fn process_order(
    request: &OrderRequest,
    sink: &mut dyn AuditSink,
) -> DomainResult<OrderRecord> {
    validate(request)?;

    let order_date = OrderDate::parse(&request.order_date);
    tracing::debug!(
        customer = %request.customer,
        product = %request.product,
        quantity = request.quantity,
        "processing order"
    );

    sink.append(&format!(
        "\n[{order_date}] Sales Order created for {}: {} x {} @ {:.2}",
        request.customer, request.quantity, request.product, request.unit_price
    ));
    let mut sales = SalesOrder::new(
        request.customer.clone(),
        request.product.clone(),
        request.quantity,
        request.unit_price,
        order_date,
        request.status.clone(),
    );

    sink.append(&format!(
        "Planned Order generated from Sales Order {}",
        sales.id
    ));
    let mut planned = PlannedOrder::derive(&sales);
    sales.planned_order = Some(planned.id.clone());

    sink.append(&format!(
        "Production Order created from Planned Order {}",
        planned.id
    ));
    let mut production = ProductionOrder::derive(&planned);
    planned.production_order = Some(production.id.clone());

    // Rule evaluation happens once the production order exists; its verdict
    // is written exactly once into the remaining documents.
    let outcome = StatusKeyword::normalize(&sales.status).outcome();
    production.confirmed = outcome.confirmed;

    let delivery = Delivery::derive(&production, &sales.customer, outcome.delivery);
    let amount = round2(sales.unit_price * f64::from(sales.quantity));
    let billing = Billing::derive(&delivery, amount, outcome.billing);

    let chain = DocumentChain {
        sales,
        planned,
        production,
        delivery,
        billing,
    };
    append_summary(sink, &chain);

    Ok(OrderRecord::from_chain(&chain))
}

fn validate(request: &OrderRequest) -> DomainResult<()> {
    if request.quantity == 0 {
        return Err(DomainError::validation("quantity must be positive"));
    }
    if !request.unit_price.is_finite() || request.unit_price < 0.0 {
        return Err(DomainError::validation(
            "unit price must be a non-negative number",
        ));
    }
    Ok(())
}

/// Per-order summary block mirroring the audit trail consumers' layout.
fn append_summary(sink: &mut dyn AuditSink, chain: &DocumentChain) {
    sink.append("\n--- Process Summary ---");
    sink.append(&format!("Order Date: {}", chain.sales.order_date));
    sink.append(&format!("Sales Order ID: {}", chain.sales.id));
    sink.append(&format!("Status: {}", chain.sales.status));
    sink.append(&format!("Planned Order ID: {}", chain.planned.id));
    sink.append(&format!(
        "Production Order ID: {}, Confirmed: {}",
        chain.production.id, chain.production.confirmed
    ));
    sink.append(&format!(
        "Sales Order to Production Order Linkage: {} -> {} -> {}",
        chain.sales.id, chain.planned.id, chain.production.id
    ));
    sink.append(&format!("Delivery Status: {}", chain.delivery.status));
    sink.append(&format!("Invoice: {}", chain.billing.id));
    sink.append(&format!(
        "Billing Status: {}, Amount: {:.2}",
        chain.billing.status, chain.billing.amount
    ));
    sink.append(&"-".repeat(50));
}
