use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use thiserror::Error;

use mtoflow_orders::OrderRecord;

/// Errors from loading or persisting the dataset file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("dataset io: {0}")]
    Io(#[from] std::io::Error),

    #[error("dataset csv: {0}")]
    Csv(#[from] csv::Error),
}

/// Ordered, column-named record set persisted as one CSV file.
///
/// Rows keep insertion order. Appending never deduplicates and never
/// reconciles schemas; callers are responsible for writing records with the
/// canonical column set of [`OrderRecord`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<OrderRecord>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<OrderRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[OrderRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Load the dataset from `path`.
    ///
    /// A missing file is an empty dataset, not an error.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no dataset file, starting empty");
                return Ok(Self::new());
            }
            Err(err) => return Err(err.into()),
        };

        let mut reader = csv::Reader::from_reader(file);
        let mut records = Vec::new();
        for row in reader.deserialize() {
            records.push(row?);
        }
        Ok(Self { records })
    }

    /// Write header and all rows to `path`, replacing any previous file.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let mut writer = csv::Writer::from_path(path)?;
        for record in &self.records {
            writer.serialize(record)?;
        }
        writer.flush()?;
        tracing::debug!(path = %path.display(), rows = self.records.len(), "dataset saved");
        Ok(())
    }

    /// Row-wise concatenation: existing rows keep their order, new rows
    /// follow. No deduplication, no key-based upsert.
    pub fn append<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = OrderRecord>,
    {
        self.records.extend(records);
    }
}
