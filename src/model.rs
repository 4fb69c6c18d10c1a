//! Core data model.
//!
//! A pick is one unit of physical work: fetch the good `code` for order
//! `ordernum` from `location`. The inventory system creates and deletes
//! rows; this crate only lists them and flips their state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reserved order reference meaning "not a real order". Rows carrying it are
/// free stock: never listed, never claimable, regardless of state.
pub const FREE_STOCK_SENTINEL: &str = "#FREE";

/// Default label when brand/supplier attributes are absent.
pub const UNKNOWN_LABEL: &str = "Unknown";

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Lifecycle state of a pick. Stored as an integer qty column:
/// 1 = open (to be picked), 0 = claimed (picked).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickState {
    Open,
    Claimed,
}

impl PickState {
    /// The qty column encoding of this state.
    pub fn qty(self) -> i32 {
        match self {
            PickState::Open => 1,
            PickState::Claimed => 0,
        }
    }

    /// Decode a qty value. Returns `None` for anything outside {0, 1};
    /// such rows are not part of the pick workflow.
    pub fn from_qty(qty: i32) -> Option<Self> {
        match qty {
            1 => Some(PickState::Open),
            0 => Some(PickState::Claimed),
            _ => None,
        }
    }

    /// Human-readable status label used in transition receipts.
    pub fn status_label(self) -> &'static str {
        match self {
            PickState::Open => "to be picked",
            PickState::Claimed => "picked",
        }
    }
}

impl std::fmt::Display for PickState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PickState::Open => "open",
            PickState::Claimed => "claimed",
        };
        write!(f, "{s}")
    }
}

// ---------------------------------------------------------------------------
// Action
// ---------------------------------------------------------------------------

/// Transition intent: claim an open pick, or release a claimed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickAction {
    Pick,
    Unpick,
}

impl PickAction {
    /// The state the item must currently be in for this action to apply.
    pub fn required_state(self) -> PickState {
        match self {
            PickAction::Pick => PickState::Open,
            PickAction::Unpick => PickState::Claimed,
        }
    }

    /// The state the item ends up in when this action succeeds.
    pub fn target_state(self) -> PickState {
        match self {
            PickAction::Pick => PickState::Claimed,
            PickAction::Unpick => PickState::Open,
        }
    }

    /// Past-tense verb for confirmation messages.
    pub fn past_tense(self) -> &'static str {
        match self {
            PickAction::Pick => "picked",
            PickAction::Unpick => "unpicked",
        }
    }
}

impl std::str::FromStr for PickAction {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> crate::error::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pick" => Ok(PickAction::Pick),
            "unpick" => Ok(PickAction::Unpick),
            other => Err(crate::error::Error::InvalidAction(other.to_string())),
        }
    }
}

impl std::fmt::Display for PickAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PickAction::Pick => "pick",
            PickAction::Unpick => "unpick",
        };
        write!(f, "{s}")
    }
}

// ---------------------------------------------------------------------------
// Catalog entry
// ---------------------------------------------------------------------------

/// One open pick as returned by the catalog: the stock row joined with its
/// descriptive attributes, absent values already defaulted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenPick {
    pub id: String,
    pub code: String,
    pub ordernum: String,
    pub location: String,
    pub groupid: Option<String>,
    /// Brand label, `"Unknown"` when the stock row has none.
    pub brand: String,
    /// Supplier label from the attribute table, `"Unknown"` when missing.
    pub supplier: String,
    pub qty: i32,
    /// Traversal hint within a location, 0 when the row has none.
    pub pickorder: i32,
}

// ---------------------------------------------------------------------------
// Transition receipt
// ---------------------------------------------------------------------------

/// Post-transition projection returned by the coordinator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickReceipt {
    pub id: String,
    pub code: String,
    pub ordernum: String,
    pub location: String,
    pub qty: i32,
    /// Human-readable status derived from the new state.
    pub status: String,
}

impl PickReceipt {
    /// The receipt's state as decoded from its qty.
    pub fn state(&self) -> Option<PickState> {
        PickState::from_qty(self.qty)
    }
}

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// Verified picker identity. Opaque to the catalog and coordinator; the
/// transport layer gates access on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    /// The picker's PIN, doubling as the subject identifier.
    pub subject_id: i32,
    pub display_name: String,
    pub issued_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qty_encoding_round_trips() {
        assert_eq!(PickState::Open.qty(), 1);
        assert_eq!(PickState::Claimed.qty(), 0);
        assert_eq!(PickState::from_qty(1), Some(PickState::Open));
        assert_eq!(PickState::from_qty(0), Some(PickState::Claimed));
        assert_eq!(PickState::from_qty(2), None);
        assert_eq!(PickState::from_qty(-1), None);
    }

    #[test]
    fn action_parsing_is_trimmed_and_case_insensitive() {
        assert_eq!("pick".parse::<PickAction>().unwrap(), PickAction::Pick);
        assert_eq!("  UNPICK ".parse::<PickAction>().unwrap(), PickAction::Unpick);
        assert!("repick".parse::<PickAction>().is_err());
        assert!("".parse::<PickAction>().is_err());
    }

    #[test]
    fn pick_claims_and_unpick_releases() {
        assert_eq!(PickAction::Pick.required_state(), PickState::Open);
        assert_eq!(PickAction::Pick.target_state(), PickState::Claimed);
        assert_eq!(PickAction::Unpick.required_state(), PickState::Claimed);
        assert_eq!(PickAction::Unpick.target_state(), PickState::Open);
    }

    #[test]
    fn status_labels() {
        assert_eq!(PickState::Open.status_label(), "to be picked");
        assert_eq!(PickState::Claimed.status_label(), "picked");
    }
}
