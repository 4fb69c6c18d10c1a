//! Metric instrument factories.
//!
//! Uses the OTel Meter API with the globally-registered `MeterProvider`.
//! Instruments are created lazily from the `"picklist"` meter.

use opentelemetry::metrics::{Counter, Histogram, Meter};

/// Returns the shared meter for picklist instruments.
fn meter() -> Meter {
    opentelemetry::global::meter("picklist")
}

/// Counter: catalog listings served.
/// Labels: `filtered` (location filter supplied or not).
pub fn catalog_queries() -> Counter<u64> {
    meter()
        .u64_counter("picklist.catalog.queries")
        .with_description("Number of open-pick listings served")
        .build()
}

/// Histogram: catalog query duration in milliseconds.
pub fn catalog_query_ms() -> Histogram<f64> {
    meter()
        .f64_histogram("picklist.catalog.query_ms")
        .with_description("Catalog query duration in milliseconds")
        .with_unit("ms")
        .build()
}

/// Counter: pick/unpick transition attempts.
/// Labels: `action` ("pick" | "unpick"),
/// `result` ("ok" | "not_found" | "not_pickable" | "error").
pub fn pick_transitions() -> Counter<u64> {
    meter()
        .u64_counter("picklist.transitions")
        .with_description("Number of pick state transition attempts")
        .build()
}
