//! Tally Engine - billing view derivation
//!
//! Turns the flat bill list fetched from the backend into the derived,
//! read-only views the admin panel pages render: filtered bill list,
//! per-customer rollups, product rankings, payment breakdowns, revenue
//! trend, and period statistics.
//!
//! Every operation is a pure function of `(bills, params)`: no I/O, no
//! async, no state between invocations. Inputs are never mutated and
//! outputs are freshly allocated, so the engine is safely callable from
//! concurrent contexts without locking.
//!
//! Defaulting contract: missing or malformed numeric fields coerce to 0,
//! missing strings match as empty, and malformed individual records are
//! skipped or field-defaulted with a `tracing` event. A single corrupt
//! record never aborts a computation.

pub mod filter;
pub mod params;
pub mod ranking;
pub mod rollup;
pub mod summary;
pub mod time;

pub use params::{DEFAULT_RANKING_LIMIT, StatusFilter, TimeRange, ViewParams};

use shared::models::{Bill, BillingViews};

/// Derive every view a page needs from one bill sequence
///
/// Applies the time-range filter, then the text/status/counter filter,
/// then computes all projections over the filtered set.
pub fn derive_views(bills: &[Bill], params: &ViewParams) -> BillingViews {
    let windowed = filter::filter_by_range(bills, &params.range, params.now);
    let filtered = filter::filter_by_search(
        &windowed,
        &params.query,
        params.status,
        params.counter.as_deref(),
    );

    let rankings = ranking::product_rankings(&filtered);
    BillingViews {
        customers: rollup::customer_rollup(&filtered),
        top_products: ranking::top_selling(&rankings, params.ranking_limit),
        less_products: ranking::less_selling(&rankings, params.ranking_limit),
        payments: summary::payment_breakdown(&filtered),
        trend: summary::revenue_trend(&filtered, &params.range),
        summary: summary::period_summary(&filtered),
        bills: filtered,
    }
}
