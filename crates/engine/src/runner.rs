//! Batch and single run modes.
//!
//! A run is one pass: read the input, process orders in order, merge the
//! results into the persisted dataset. Results are returned explicitly; no
//! accumulator survives between invocations.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use mtoflow_core::DomainError;
use mtoflow_orders::OrderRecord;
use mtoflow_store::{Dataset, StoreError};

use crate::audit::AuditSink;
use crate::processor::{OrderRequest, process_order};

/// How a batch's records combine with the persisted dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeMode {
    /// Replace the persisted dataset with this batch's records.
    Overwrite,
    /// Concatenate after the existing rows; no deduplication.
    Append,
}

/// Errors raised by a batch or single run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// Structural failure reading the batch input (framing, missing columns).
    #[error("batch input: {0}")]
    Input(#[from] csv::Error),

    /// A numeric field in a batch row failed coercion.
    #[error("batch row {row}: cannot parse {field} from '{value}'")]
    Coercion {
        row: usize,
        field: &'static str,
        value: String,
    },
}

/// One raw row of the batch input file.
///
/// Numeric fields stay textual here so a bad value can be reported with its
/// row number instead of failing inside the CSV deserializer.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchRow {
    #[serde(rename = "CUSTOMERNAME")]
    pub customer: String,
    #[serde(rename = "PRODUCTLINE")]
    pub product: String,
    #[serde(rename = "QUANTITYORDERED")]
    pub quantity: String,
    #[serde(rename = "PRICEEACH")]
    pub price: String,
    #[serde(rename = "ORDERDATE")]
    pub order_date: String,
    #[serde(rename = "STATUS")]
    pub status: String,
}

fn coerce_row(row: BatchRow, row_no: usize) -> Result<OrderRequest, RunError> {
    let quantity: u32 = row.quantity.trim().parse().map_err(|_| RunError::Coercion {
        row: row_no,
        field: "QUANTITYORDERED",
        value: row.quantity.clone(),
    })?;
    let unit_price: f64 = row.price.trim().parse().map_err(|_| RunError::Coercion {
        row: row_no,
        field: "PRICEEACH",
        value: row.price.clone(),
    })?;

    Ok(OrderRequest {
        customer: row.customer,
        product: row.product,
        quantity,
        unit_price,
        order_date: row.order_date,
        status: row.status,
    })
}

/// Process every row of `input` in order, then persist per `mode`.
///
/// Fail-fast policy: the first unreadable or uncoercible row aborts the
/// whole batch and nothing is persisted. An empty batch leaves the dataset
/// file untouched.
pub fn run_batch<R: Read>(
    input: R,
    mode: MergeMode,
    dataset_path: &Path,
    sink: &mut dyn AuditSink,
) -> Result<Vec<OrderRecord>, RunError> {
    let mut reader = csv::Reader::from_reader(input);

    let mut records = Vec::new();
    for (index, row) in reader.deserialize::<BatchRow>().enumerate() {
        let row_no = index + 1; // 1-based, header excluded
        let request = coerce_row(row?, row_no)?;
        records.push(process_order(&request, sink)?);
    }
    tracing::info!(rows = records.len(), mode = ?mode, "batch processed");

    if records.is_empty() {
        return Ok(records);
    }

    let dataset = match mode {
        MergeMode::Overwrite => Dataset::from_records(records.clone()),
        MergeMode::Append => {
            let mut existing = Dataset::load(dataset_path)?;
            existing.append(records.iter().cloned());
            existing
        }
    };
    dataset.save(dataset_path)?;

    Ok(records)
}

/// Process one order and append its record to the persisted dataset.
///
/// A missing dataset file counts as an empty existing dataset, so the first
/// single run creates a one-row dataset.
pub fn run_single(
    request: &OrderRequest,
    dataset_path: &Path,
    sink: &mut dyn AuditSink,
) -> Result<OrderRecord, RunError> {
    let record = process_order(request, sink)?;

    let mut dataset = Dataset::load(dataset_path)?;
    dataset.append(std::iter::once(record.clone()));
    dataset.save(dataset_path)?;

    tracing::info!(sales_order = %record.sales_order, rows = dataset.len(), "single order merged");
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::MemorySink;

    const HEADER: &str = "CUSTOMERNAME,PRODUCTLINE,QUANTITYORDERED,PRICEEACH,ORDERDATE,STATUS";

    fn batch_csv(rows: &[&str]) -> String {
        let mut csv = String::from(HEADER);
        for row in rows {
            csv.push('\n');
            csv.push_str(row);
        }
        csv
    }

    fn acme_request() -> OrderRequest {
        OrderRequest {
            customer: "ACME Corp".to_string(),
            product: "Widget A".to_string(),
            quantity: 10,
            unit_price: 15.0,
            order_date: "2023-01-05".to_string(),
            status: "Shipped".to_string(),
        }
    }

    #[test]
    fn batch_overwrite_replaces_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataset.csv");
        let mut sink = MemorySink::new();

        let first = batch_csv(&["Old Co,Widget,1,1.0,2023-01-01,Shipped"]);
        run_batch(first.as_bytes(), MergeMode::Overwrite, &path, &mut sink).unwrap();

        let second = batch_csv(&[
            "ACME Corp,Widget A,10,15.00,2023-01-05,Shipped",
            "Globex,Widget B,2,9.50,2023-01-06,On Hold",
        ]);
        let records =
            run_batch(second.as_bytes(), MergeMode::Overwrite, &path, &mut sink).unwrap();
        assert_eq!(records.len(), 2);

        let dataset = Dataset::load(&path).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records()[0].customer, "ACME Corp");
        assert_eq!(dataset.records()[1].customer, "Globex");
    }

    #[test]
    fn batch_append_keeps_existing_rows_first() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataset.csv");
        let mut sink = MemorySink::new();

        let first = batch_csv(&[
            "A,Widget,1,1.0,2023-01-01,Shipped",
            "B,Widget,2,2.0,2023-01-02,Resolved",
        ]);
        run_batch(first.as_bytes(), MergeMode::Overwrite, &path, &mut sink).unwrap();
        let existing = Dataset::load(&path).unwrap().records().to_vec();

        let second = batch_csv(&["C,Widget,3,3.0,2023-01-03,On Hold"]);
        run_batch(second.as_bytes(), MergeMode::Append, &path, &mut sink).unwrap();

        let merged = Dataset::load(&path).unwrap();
        assert_eq!(merged.len(), 3);
        assert_eq!(&merged.records()[..2], &existing[..]);
        assert_eq!(merged.records()[2].customer, "C");
    }

    #[test]
    fn bad_quantity_aborts_batch_with_row_number() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataset.csv");
        let mut sink = MemorySink::new();

        let input = batch_csv(&[
            "A,Widget,1,1.0,2023-01-01,Shipped",
            "B,Widget,lots,2.0,2023-01-02,Shipped",
        ]);
        let err = run_batch(input.as_bytes(), MergeMode::Overwrite, &path, &mut sink).unwrap_err();

        match err {
            RunError::Coercion { row, field, value } => {
                assert_eq!(row, 2);
                assert_eq!(field, "QUANTITYORDERED");
                assert_eq!(value, "lots");
            }
            other => panic!("expected coercion error, got {other:?}"),
        }
        assert!(!path.exists(), "aborted batch must not persist");
    }

    #[test]
    fn bad_price_aborts_batch() {
        let mut sink = MemorySink::new();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataset.csv");

        let input = batch_csv(&["A,Widget,1,free,2023-01-01,Shipped"]);
        let err = run_batch(input.as_bytes(), MergeMode::Overwrite, &path, &mut sink).unwrap_err();
        assert!(matches!(
            err,
            RunError::Coercion {
                field: "PRICEEACH",
                ..
            }
        ));
    }

    #[test]
    fn empty_batch_leaves_dataset_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataset.csv");
        let mut sink = MemorySink::new();

        let records = run_batch(
            batch_csv(&[]).as_bytes(),
            MergeMode::Overwrite,
            &path,
            &mut sink,
        )
        .unwrap();
        assert!(records.is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn single_run_without_dataset_creates_one_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataset.csv");
        let mut sink = MemorySink::new();

        let record = run_single(&acme_request(), &path, &mut sink).unwrap();

        let dataset = Dataset::load(&path).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records()[0], record);
    }

    #[test]
    fn single_run_appends_to_existing_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataset.csv");
        let mut sink = MemorySink::new();

        run_single(&acme_request(), &path, &mut sink).unwrap();
        let first = Dataset::load(&path).unwrap().records().to_vec();

        let mut second_request = acme_request();
        second_request.customer = "Globex".to_string();
        run_single(&second_request, &path, &mut sink).unwrap();

        let dataset = Dataset::load(&path).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records()[0], first[0]);
        assert_eq!(dataset.records()[1].customer, "Globex");
    }

    #[test]
    fn whitespace_around_numeric_fields_is_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataset.csv");
        let mut sink = MemorySink::new();

        let input = batch_csv(&["A,Widget, 4 , 2.50 ,2023-01-01,Shipped"]);
        let records =
            run_batch(input.as_bytes(), MergeMode::Overwrite, &path, &mut sink).unwrap();
        assert_eq!(records[0].quantity, 4);
        assert_eq!(records[0].amount, 10.0);
    }
}
