//! Picker identity: PIN verification against the picker directory.
//!
//! The catalog and coordinator never interpret an identity; the transport
//! layer gates access on one. Token issuance and expiry belong to the
//! external auth collaborator, not here.

use crate::db::Db;
use crate::error::{Error, Result};
use crate::model::Identity;

/// Looks up pickers by PIN. Depends only on storage.
#[derive(Clone)]
pub struct PinDirectory {
    db: Db,
}

impl PinDirectory {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// Verify a PIN, yielding the picker's identity claim.
    pub async fn verify_pin(&self, pin: i32) -> Result<Identity> {
        let row: Option<(i32, String)> =
            sqlx::query_as("SELECT pin, name FROM pickpin WHERE pin = $1")
                .bind(pin)
                .fetch_optional(self.db.pool())
                .await?;

        let (pin, name) = row.ok_or(Error::InvalidPin)?;

        tracing::debug!(subject = pin, "pin verified");
        Ok(Identity {
            subject_id: pin,
            display_name: name,
            issued_at: chrono::Utc::now(),
        })
    }
}
