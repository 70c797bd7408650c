use std::fmt;

use serde::{Deserialize, Serialize};

/// Normalized status keyword from the originating order.
///
/// `Unrecognized` is a first-class variant rather than a lookup miss, so the
/// safe-degrade branch is visible at the type level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKeyword {
    Shipped,
    Disputed,
    InProcess,
    OnHold,
    Resolved,
    Cancelled,
    Unrecognized,
}

/// Delivery-side outcome of rule evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryOutcome {
    InTransit,
    NotInTransit,
    Delivered,
    Unknown,
}

/// Billing-side outcome of rule evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BillingOutcome {
    Processed,
    NotProcessed,
}

/// The outcome triple for one status keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutcomeTriple {
    /// Production is authorized to proceed to delivery.
    pub confirmed: bool,
    pub delivery: DeliveryOutcome,
    pub billing: BillingOutcome,
}

impl StatusKeyword {
    /// Case-insensitive, trimmed parse of a free-form status string.
    ///
    /// Total: anything outside the known keyword set maps to
    /// [`StatusKeyword::Unrecognized`]. Never fails.
    pub fn normalize(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "shipped" => Self::Shipped,
            "disputed" => Self::Disputed,
            "in process" => Self::InProcess,
            "on hold" => Self::OnHold,
            "resolved" => Self::Resolved,
            "cancelled" => Self::Cancelled,
            _ => Self::Unrecognized,
        }
    }

    /// Rule-table lookup, one arm per table row.
    ///
    /// `Unrecognized` degrades to {false, Unknown, Not Processed} rather than
    /// erroring.
    pub const fn outcome(self) -> OutcomeTriple {
        use BillingOutcome::{NotProcessed, Processed};
        use DeliveryOutcome::{Delivered, InTransit, NotInTransit, Unknown};

        match self {
            Self::Shipped => OutcomeTriple {
                confirmed: true,
                delivery: InTransit,
                billing: Processed,
            },
            Self::Disputed => OutcomeTriple {
                confirmed: true,
                delivery: NotInTransit,
                billing: NotProcessed,
            },
            Self::InProcess => OutcomeTriple {
                confirmed: true,
                delivery: NotInTransit,
                billing: NotProcessed,
            },
            Self::OnHold => OutcomeTriple {
                confirmed: false,
                delivery: NotInTransit,
                billing: NotProcessed,
            },
            Self::Resolved => OutcomeTriple {
                confirmed: true,
                delivery: Delivered,
                billing: Processed,
            },
            Self::Cancelled => OutcomeTriple {
                confirmed: true,
                delivery: NotInTransit,
                billing: NotProcessed,
            },
            Self::Unrecognized => OutcomeTriple {
                confirmed: false,
                delivery: Unknown,
                billing: NotProcessed,
            },
        }
    }
}

impl fmt::Display for DeliveryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InTransit => "In Transit",
            Self::NotInTransit => "Not in Transit",
            Self::Delivered => "Delivered",
            Self::Unknown => "Unknown",
        })
    }
}

impl fmt::Display for BillingOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Processed => "Processed",
            Self::NotProcessed => "Not Processed",
        })
    }
}
