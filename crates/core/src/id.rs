//! Prefixed document identifiers.
//!
//! Every business document carries a short identifier of the form
//! `<PREFIX>-<hex suffix>` where the prefix is fixed per document kind, so
//! the kind of a document is recognizable from its identifier alone.

use std::collections::HashSet;
use std::fmt;
use std::sync::{Mutex, OnceLock};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Document kinds in the make-to-order chain, in derivation order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    SalesOrder,
    PlannedOrder,
    ProductionOrder,
    Delivery,
    Billing,
}

impl DocumentKind {
    /// Type-specific identifier prefix.
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::SalesOrder => "SO",
            Self::PlannedOrder => "PL",
            Self::ProductionOrder => "PO",
            Self::Delivery => "DLV",
            Self::Billing => "INV",
        }
    }

    fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "SO" => Some(Self::SalesOrder),
            "PL" => Some(Self::PlannedOrder),
            "PO" => Some(Self::ProductionOrder),
            "DLV" => Some(Self::Delivery),
            "INV" => Some(Self::Billing),
            _ => None,
        }
    }
}

/// Length of the random hex suffix.
const SUFFIX_LEN: usize = 12;

/// A short prefixed identifier, e.g. `SO-9f86d081a3b4`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

fn issued() -> &'static Mutex<HashSet<String>> {
    static ISSUED: OnceLock<Mutex<HashSet<String>>> = OnceLock::new();
    ISSUED.get_or_init(|| Mutex::new(HashSet::new()))
}

impl DocumentId {
    /// Generate a fresh identifier for `kind`.
    ///
    /// No two calls return the same value within a process lifetime: the
    /// suffix comes from UUIDv4 entropy and is redrawn on the (vanishingly
    /// rare) collision with an already-issued identifier.
    pub fn generate(kind: DocumentKind) -> Self {
        let mut seen = issued().lock().unwrap_or_else(|e| e.into_inner());
        loop {
            let uuid = Uuid::new_v4().simple().to_string();
            let id = format!("{}-{}", kind.prefix(), &uuid[..SUFFIX_LEN]);
            if seen.insert(id.clone()) {
                return Self(id);
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The kind encoded in the prefix, if recognized.
    pub fn kind(&self) -> Option<DocumentKind> {
        let (prefix, _) = self.0.split_once('-')?;
        DocumentKind::from_prefix(prefix)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
