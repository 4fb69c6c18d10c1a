//! Response envelope contract.
//!
//! Every response a transport hands to a client carries a `return_code`
//! from a small closed vocabulary plus a human-readable message; success
//! payloads additionally carry the operation's data. The mapping from
//! `Error` to code is total, so no error path escapes the vocabulary.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::model::{OpenPick, PickAction, PickReceipt};

/// Closed vocabulary of response discriminators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReturnCode {
    Success,
    MissingFields,
    InvalidAction,
    ItemNotFound,
    ItemNotPickable,
    DatabaseError,
    ServerError,
    Unauthorized,
    Forbidden,
    InvalidPin,
}

impl ReturnCode {
    /// Map a core error to its wire discriminator.
    ///
    /// `UpdateVerification` maps with the lost-race code: the caller's
    /// remedy (refresh the listing) is the same.
    pub fn for_error(err: &Error) -> Self {
        match err {
            Error::InvalidRequest(_) => ReturnCode::MissingFields,
            Error::InvalidAction(_) => ReturnCode::InvalidAction,
            Error::NotFound(_) => ReturnCode::ItemNotFound,
            Error::InvalidTransition { .. } => ReturnCode::ItemNotPickable,
            Error::UpdateVerification(_) => ReturnCode::ItemNotPickable,
            Error::InvalidPin => ReturnCode::InvalidPin,
            Error::Storage(_) => ReturnCode::DatabaseError,
            Error::Config(_) | Error::Other(_) => ReturnCode::ServerError,
        }
    }
}

impl std::fmt::Display for ReturnCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ReturnCode::Success => "SUCCESS",
            ReturnCode::MissingFields => "MISSING_FIELDS",
            ReturnCode::InvalidAction => "INVALID_ACTION",
            ReturnCode::ItemNotFound => "ITEM_NOT_FOUND",
            ReturnCode::ItemNotPickable => "ITEM_NOT_PICKABLE",
            ReturnCode::DatabaseError => "DATABASE_ERROR",
            ReturnCode::ServerError => "SERVER_ERROR",
            ReturnCode::Unauthorized => "UNAUTHORIZED",
            ReturnCode::Forbidden => "FORBIDDEN",
            ReturnCode::InvalidPin => "INVALID_PIN",
        };
        write!(f, "{s}")
    }
}

/// Successful listing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickListResponse {
    pub return_code: ReturnCode,
    pub picks: Vec<OpenPick>,
    pub total_picks: usize,
}

impl PickListResponse {
    pub fn new(picks: Vec<OpenPick>) -> Self {
        Self {
            return_code: ReturnCode::Success,
            total_picks: picks.len(),
            picks,
        }
    }
}

/// Successful transition response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionResponse {
    pub return_code: ReturnCode,
    pub message: String,
    pub item: PickReceipt,
}

impl TransitionResponse {
    pub fn new(action: PickAction, item: PickReceipt) -> Self {
        Self {
            return_code: ReturnCode::Success,
            message: format!("Item successfully {}", action.past_tense()),
            item,
        }
    }
}

/// Error response, same shape for every failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub return_code: ReturnCode,
    pub message: String,
}

impl From<&Error> for ErrorResponse {
    fn from(err: &Error) -> Self {
        Self {
            return_code: ReturnCode::for_error(err),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PickAction, PickState};

    #[test]
    fn return_codes_serialize_screaming_snake() {
        let json = serde_json::to_string(&ReturnCode::ItemNotPickable).unwrap();
        assert_eq!(json, "\"ITEM_NOT_PICKABLE\"");
        let json = serde_json::to_string(&ReturnCode::Success).unwrap();
        assert_eq!(json, "\"SUCCESS\"");
    }

    #[test]
    fn domain_errors_map_to_distinct_codes() {
        assert_eq!(
            ReturnCode::for_error(&Error::NotFound("x".into())),
            ReturnCode::ItemNotFound
        );
        assert_eq!(
            ReturnCode::for_error(&Error::InvalidTransition {
                action: PickAction::Pick,
                required: PickState::Open,
                found: 0,
            }),
            ReturnCode::ItemNotPickable
        );
    }

    #[test]
    fn verification_failure_maps_as_lost_race() {
        assert_eq!(
            ReturnCode::for_error(&Error::UpdateVerification("x".into())),
            ReturnCode::ItemNotPickable
        );
    }

    #[test]
    fn input_errors_map_before_storage_codes() {
        assert_eq!(
            ReturnCode::for_error(&Error::InvalidRequest("id is required".into())),
            ReturnCode::MissingFields
        );
        assert_eq!(
            ReturnCode::for_error(&Error::InvalidAction("repick".into())),
            ReturnCode::InvalidAction
        );
    }

    #[test]
    fn listing_response_counts_picks() {
        let resp = PickListResponse::new(vec![]);
        assert_eq!(resp.return_code, ReturnCode::Success);
        assert_eq!(resp.total_picks, 0);
    }
}
