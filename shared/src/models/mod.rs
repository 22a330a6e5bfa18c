//! Data models
//!
//! `bill` holds the backend-owned record shape; `views` holds the
//! read-only projections derived from it.

pub mod bill;
pub mod views;

pub use bill::{Bill, BillCashier, BillCustomer, BillProduct};
pub use views::{
    BillingViews, CustomerKey, CustomerSummary, PaymentBreakdown, PeriodSummary, ProductRanking,
    TrendPoint,
};
