//! Pick catalog: the ordered, filtered view of open work.
//!
//! Pure read path. The result is a point-in-time snapshot; a row listed as
//! open may already be claimed by the time the caller acts on it, and the
//! coordinator is responsible for rejecting that stale claim.

use crate::db::Db;
use crate::error::Result;
use crate::model::{FREE_STOCK_SENTINEL, OpenPick, UNKNOWN_LABEL};
use crate::telemetry::metrics;
use opentelemetry::KeyValue;

/// Selection predicate shared by both query variants: open state, real
/// order, not soft-deleted.
const OPEN_PICKS_BASE: &str = "SELECT l.id, l.code, l.ordernum, l.location, l.groupid, l.brand, l.qty, l.pickorder, s.supplier
     FROM localstock l
     LEFT JOIN skusummary s ON l.groupid = s.groupid
     WHERE l.ordernum <> $1
     AND l.qty = 1
     AND (l.deleted IS NULL OR l.deleted = 0)";

/// Total order over the result: pickers walk locations in sequence, so the
/// ordering must be deterministic across repeated calls. Absent pickorder
/// sorts as 0.
const OPEN_PICKS_ORDER: &str = " ORDER BY l.location ASC, COALESCE(l.pickorder, 0) ASC, l.code ASC";

/// Produces the listing of currently open picks. Depends only on storage.
#[derive(Clone)]
pub struct PickCatalog {
    db: Db,
}

impl PickCatalog {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// List all open picks, optionally restricted to locations containing
    /// the filter text (case-insensitive; blank filter means no filter).
    ///
    /// Results are ordered by (location, pickorder, code) and carry their
    /// descriptive attributes, with `"Unknown"` standing in for missing
    /// brand/supplier rows.
    pub async fn list_open(&self, location_filter: Option<&str>) -> Result<Vec<OpenPick>> {
        let filter = location_filter.map(str::trim).filter(|f| !f.is_empty());

        let start = std::time::Instant::now();
        let rows: Vec<OpenPickRow> = match filter {
            Some(f) => {
                let sql = format!("{OPEN_PICKS_BASE} AND l.location ILIKE $2{OPEN_PICKS_ORDER}");
                sqlx::query_as(&sql)
                    .bind(FREE_STOCK_SENTINEL)
                    .bind(format!("%{f}%"))
                    .fetch_all(self.db.pool())
                    .await?
            }
            None => {
                let sql = format!("{OPEN_PICKS_BASE}{OPEN_PICKS_ORDER}");
                sqlx::query_as(&sql)
                    .bind(FREE_STOCK_SENTINEL)
                    .fetch_all(self.db.pool())
                    .await?
            }
        };

        let picks: Vec<OpenPick> = rows.into_iter().map(OpenPickRow::into_open_pick).collect();

        metrics::catalog_queries().add(
            1,
            &[KeyValue::new("filtered", filter.is_some())],
        );
        metrics::catalog_query_ms().record(
            start.elapsed().as_secs_f64() * 1000.0,
            &[],
        );
        tracing::debug!(
            total = picks.len(),
            filtered = filter.is_some(),
            "listed open picks"
        );

        Ok(picks)
    }
}

/// Internal row type for sqlx::FromRow.
#[derive(sqlx::FromRow)]
struct OpenPickRow {
    id: String,
    code: String,
    ordernum: String,
    location: String,
    groupid: Option<String>,
    brand: Option<String>,
    qty: i32,
    pickorder: Option<i32>,
    supplier: Option<String>,
}

impl OpenPickRow {
    fn into_open_pick(self) -> OpenPick {
        OpenPick {
            id: self.id,
            code: self.code,
            ordernum: self.ordernum,
            location: self.location,
            groupid: self.groupid,
            brand: self.brand.unwrap_or_else(|| UNKNOWN_LABEL.to_string()),
            supplier: self.supplier.unwrap_or_else(|| UNKNOWN_LABEL.to_string()),
            qty: self.qty,
            pickorder: self.pickorder.unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_attributes_default_to_unknown() {
        let row = OpenPickRow {
            id: "p1".into(),
            code: "SHOE123".into(),
            ordernum: "BC001234".into(),
            location: "C3-Front-Rack-01".into(),
            groupid: None,
            brand: None,
            qty: 1,
            pickorder: None,
            supplier: None,
        };
        let pick = row.into_open_pick();
        assert_eq!(pick.brand, "Unknown");
        assert_eq!(pick.supplier, "Unknown");
        assert_eq!(pick.pickorder, 0);
    }
}
