//! Claim coordinator: atomic pick/unpick state transitions.
//!
//! The precondition check and the state flip are a single conditional
//! UPDATE whose filter expresses the required current state. The row count
//! coming back is the sole source of truth: exactly one of any set of
//! concurrent competing transitions on the same id can match the filter,
//! the rest observe zero rows and lose the race. No in-process lock is
//! held across the storage call; correctness is delegated entirely to the
//! store's row-level atomicity.

use crate::db::Db;
use crate::error::{Error, Result};
use crate::model::{FREE_STOCK_SENTINEL, PickAction, PickReceipt, PickState};
use crate::telemetry::metrics;
use opentelemetry::KeyValue;

/// Executes state transitions for single pick items. Depends only on storage.
#[derive(Clone)]
pub struct ClaimCoordinator {
    db: Db,
}

impl ClaimCoordinator {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// Transition one item: `Pick` claims an open item, `Unpick` releases a
    /// claimed one. Returns the post-transition projection.
    ///
    /// A concurrent competing transition on the same id makes this return
    /// `InvalidTransition` — an expected outcome the caller should answer
    /// with a listing refresh, not a retry loop.
    pub async fn transition(&self, id: &str, action: PickAction) -> Result<PickReceipt> {
        let id = id.trim();
        if id.is_empty() {
            return Err(Error::InvalidRequest("id is required".to_string()));
        }

        let required = action.required_state();
        let target = action.target_state();

        // Compare-and-swap: the WHERE clause carries the full eligibility
        // predicate plus the required current state, so check and mutation
        // are one atomic statement. `updated` moves only on confirmed
        // success, in the same statement.
        let row: Option<ReceiptRow> = sqlx::query_as(
            "UPDATE localstock
             SET qty = $1, updated = now()
             WHERE id = $2
             AND qty = $3
             AND ordernum <> $4
             AND (deleted IS NULL OR deleted = 0)
             RETURNING id, code, ordernum, location, qty",
        )
        .bind(target.qty())
        .bind(id)
        .bind(required.qty())
        .bind(FREE_STOCK_SENTINEL)
        .fetch_optional(self.db.pool())
        .await?;

        let row = match row {
            Some(row) => row,
            None => {
                let err = self.classify_rejection(id, action, required).await?;
                metrics::pick_transitions().add(
                    1,
                    &[
                        KeyValue::new("action", action.to_string()),
                        KeyValue::new("result", rejection_label(&err)),
                    ],
                );
                tracing::debug!(id, %action, %err, "transition rejected");
                return Err(err);
            }
        };

        // The returned row must reflect the state we asked for; anything
        // else means the update cannot be trusted and the caller should
        // re-verify before acting.
        if PickState::from_qty(row.qty) != Some(target) {
            return Err(Error::UpdateVerification(id.to_string()));
        }

        metrics::pick_transitions().add(
            1,
            &[
                KeyValue::new("action", action.to_string()),
                KeyValue::new("result", "ok"),
            ],
        );
        tracing::info!(id, %action, to = %target, "pick transition applied");

        Ok(row.into_receipt(target))
    }

    /// Zero rows matched the conditional update. Probe the row to tell the
    /// caller why; read-only, never a second chance to write.
    async fn classify_rejection(
        &self,
        id: &str,
        action: PickAction,
        required: PickState,
    ) -> Result<Error> {
        let current: Option<(i32,)> = sqlx::query_as(
            "SELECT qty FROM localstock
             WHERE id = $1
             AND ordernum <> $2
             AND (deleted IS NULL OR deleted = 0)",
        )
        .bind(id)
        .bind(FREE_STOCK_SENTINEL)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(match current {
            None => Error::NotFound(id.to_string()),
            Some((qty,)) => Error::InvalidTransition {
                action,
                required,
                found: qty,
            },
        })
    }
}

fn rejection_label(err: &Error) -> &'static str {
    match err {
        Error::NotFound(_) => "not_found",
        Error::InvalidTransition { .. } => "not_pickable",
        _ => "error",
    }
}

/// Internal row type for sqlx::FromRow.
#[derive(sqlx::FromRow)]
struct ReceiptRow {
    id: String,
    code: String,
    ordernum: String,
    location: String,
    qty: i32,
}

impl ReceiptRow {
    fn into_receipt(self, state: PickState) -> PickReceipt {
        PickReceipt {
            id: self.id,
            code: self.code,
            ordernum: self.ordernum,
            location: self.location,
            qty: self.qty,
            status: state.status_label().to_string(),
        }
    }
}
