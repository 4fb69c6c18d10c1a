//! Error types for the picklist core.
//!
//! Three families: input errors (rejected before touching storage), domain
//! errors (expected outcomes like a lost claim race), and infrastructure
//! errors (transient storage failures — reads are safe to retry, transitions
//! only after re-checking current state).

use thiserror::Error;

use crate::model::{PickAction, PickState};

#[derive(Debug, Error)]
pub enum Error {
    /// Malformed input, rejected before any storage access.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Transition intent that is neither "pick" nor "unpick".
    #[error("invalid action {0:?}: must be \"pick\" or \"unpick\"")]
    InvalidAction(String),

    /// No eligible row: missing, soft-deleted, or sentinel order reference.
    #[error("pick item not found: {0}")]
    NotFound(String),

    /// The item was not in the state the action requires. Includes the
    /// lost-race case where a concurrent caller transitioned it first.
    #[error("{action} requires state {required}, item has qty {found}")]
    InvalidTransition {
        action: PickAction,
        required: PickState,
        found: i32,
    },

    /// The conditional update returned a row that does not reflect the
    /// requested state. Callers treat this the same as a lost race.
    #[error("update verification failed for item {0}")]
    UpdateVerification(String),

    /// PIN not present in the picker directory.
    #[error("invalid pin")]
    InvalidPin,

    #[error("config error: {0}")]
    Config(String),

    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;
