//! Derived view types
//!
//! Read-only projections computed by `tally-engine` from a filtered bill
//! sequence. Created fresh on every invocation, never persisted. Missing
//! source values stay as raw `None` markers: display copy ("Walk-in
//! Customer", "Unknown Product") belongs to the presentation layer.

use serde::{Deserialize, Serialize};

use super::bill::Bill;

/// Key identifying one customer rollup bucket
///
/// Walk-in bills get a synthesized per-bill key so two unidentified
/// customers are never silently merged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomerKey {
    /// Registered customer id
    Registered(String),
    /// Synthesized key derived from the bill itself
    WalkIn(String),
}

/// Per-customer rollup over the filtered bill set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerSummary {
    pub key: CustomerKey,
    pub name: Option<String>,
    pub contact: Option<String>,
    pub total_amount: f64,
    pub paid_amount: f64,
    pub pending_amount: f64,
    /// Contributing bills in first-appearance order
    pub bills: Vec<Bill>,
}

/// Per-product-name sales totals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRanking {
    /// Exact product name; `None` when the line carried no name
    pub name: Option<String>,
    pub quantity: f64,
    pub total_amount: f64,
    /// Distinct counters the product was sold at, first-appearance order
    pub counters: Vec<String>,
    /// Count of distinct contributing bills, not line occurrences
    pub bills: u64,
}

/// Aggregate statistics over the filtered bill set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodSummary {
    pub total_bills: u64,
    pub total_amount: f64,
    /// Distinct registered customer ids; walk-ins are not counted
    pub total_customers: u64,
    pub average_bill: f64,
}

/// Per-payment-method totals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentBreakdown {
    /// Raw method value; `None` groups bills without one
    pub method: Option<String>,
    pub amount: f64,
    pub count: u64,
}

/// Revenue trend data point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Bucket label: `YYYY-MM-DD`, or `HH:00` for single-day ranges
    pub time: String,
    pub value: f64,
}

/// Everything a page needs, computed in one pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillingViews {
    /// The filtered bill list, input order preserved
    pub bills: Vec<Bill>,
    pub customers: Vec<CustomerSummary>,
    pub top_products: Vec<ProductRanking>,
    pub less_products: Vec<ProductRanking>,
    pub payments: Vec<PaymentBreakdown>,
    pub trend: Vec<TrendPoint>,
    pub summary: PeriodSummary,
}
