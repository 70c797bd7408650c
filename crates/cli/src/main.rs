use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use mtoflow_engine::{MergeMode, OrderRequest, WriterSink, run_batch, run_single};

#[derive(Parser)]
#[command(name = "mtoflow")]
#[command(about = "Make-to-order fulfillment pipeline", long_about = None)]
struct Cli {
    /// Persisted dataset file (the accumulated order history).
    #[arg(long, global = true, default_value = "dashboard_data.csv")]
    dataset: PathBuf,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a CSV of orders as one batch run.
    Batch {
        /// Input CSV with columns CUSTOMERNAME, PRODUCTLINE, QUANTITYORDERED,
        /// PRICEEACH, ORDERDATE, STATUS.
        input: PathBuf,

        /// Merge into the existing dataset instead of replacing it.
        #[arg(long, default_value_t = false)]
        append: bool,

        /// Audit log file.
        #[arg(long, default_value = "mto_batch_flow_log.txt")]
        log: PathBuf,
    },

    /// Process one manually-entered order and append it to the dataset.
    Single {
        #[arg(long)]
        customer: String,

        #[arg(long)]
        product: String,

        #[arg(long)]
        qty: u32,

        /// Price per unit.
        #[arg(long)]
        price: f64,

        /// Order date (e.g. 2023-01-05); unparseable input is kept verbatim.
        #[arg(long)]
        date: String,

        /// Order status keyword (e.g. Shipped, On Hold).
        #[arg(long, default_value = "Shipped")]
        status: String,

        /// Audit log file.
        #[arg(long, default_value = "mto_input_flow_log.txt")]
        log: PathBuf,
    },
}

fn main() -> Result<()> {
    mtoflow_observability::init();

    let cli = Cli::parse();
    match cli.cmd {
        Commands::Batch { input, append, log } => {
            let file = File::open(&input)
                .with_context(|| format!("open batch input {}", input.display()))?;
            let audit = File::create(&log)
                .with_context(|| format!("create audit log {}", log.display()))?;
            let mut sink = WriterSink::new(audit);

            let mode = if append {
                MergeMode::Append
            } else {
                MergeMode::Overwrite
            };
            let records = run_batch(file, mode, &cli.dataset, &mut sink)
                .context("batch run failed")?;

            tracing::info!(
                orders = records.len(),
                dataset = %cli.dataset.display(),
                "batch run complete"
            );
        }
        Commands::Single {
            customer,
            product,
            qty,
            price,
            date,
            status,
            log,
        } => {
            let audit = File::create(&log)
                .with_context(|| format!("create audit log {}", log.display()))?;
            let mut sink = WriterSink::new(audit);

            let request = OrderRequest {
                customer,
                product,
                quantity: qty,
                unit_price: price,
                order_date: date,
                status,
            };
            let record = run_single(&request, &cli.dataset, &mut sink)
                .context("single run failed")?;

            tracing::info!(
                sales_order = %record.sales_order,
                invoice = %record.invoice,
                amount = record.amount,
                "order processed"
            );
        }
    }

    Ok(())
}
