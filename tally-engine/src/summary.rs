//! Period summary, payment breakdown, and revenue trend

use std::collections::{BTreeMap, HashMap, HashSet};

use shared::models::{Bill, PaymentBreakdown, PeriodSummary, TrendPoint};

use crate::params::TimeRange;
use crate::time::parse_bill_date;

/// Aggregate statistics over a filtered bill sequence
///
/// `total_customers` counts distinct registered ids only; walk-ins are
/// deliberately not counted, unlike the rollup's key scheme which only
/// exists to keep distinct walk-ins from merging.
pub fn period_summary(bills: &[Bill]) -> PeriodSummary {
    let total_bills = bills.len() as u64;
    let total_amount: f64 = bills.iter().map(Bill::total).sum();
    let customers: HashSet<&str> = bills.iter().filter_map(Bill::customer_id).collect();
    let average_bill = if total_bills > 0 {
        total_amount / total_bills as f64
    } else {
        0.0
    };
    PeriodSummary {
        total_bills,
        total_amount,
        total_customers: customers.len() as u64,
        average_bill,
    }
}

/// Group the filtered set by raw payment method
///
/// Bills without a method share the `None` group. Sorted by amount
/// descending, stable.
pub fn payment_breakdown(bills: &[Bill]) -> Vec<PaymentBreakdown> {
    let mut index: HashMap<Option<String>, usize> = HashMap::new();
    let mut groups: Vec<PaymentBreakdown> = Vec::new();

    for bill in bills {
        let idx = *index.entry(bill.payment_method.clone()).or_insert_with(|| {
            groups.push(PaymentBreakdown {
                method: bill.payment_method.clone(),
                amount: 0.0,
                count: 0,
            });
            groups.len() - 1
        });
        groups[idx].amount += bill.paid();
        groups[idx].count += 1;
    }

    groups.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    groups
}

/// Revenue per time bucket, ascending bucket order
///
/// Buckets are calendar days (`%Y-%m-%d`), or hours (`%H:00`) when the
/// range mode is `Day`. Both label formats sort chronologically as
/// plain strings. Bills without a usable date are skipped and logged.
pub fn revenue_trend(bills: &[Bill], range: &TimeRange) -> Vec<TrendPoint> {
    let hourly = matches!(range, TimeRange::Day);
    let mut buckets: BTreeMap<String, f64> = BTreeMap::new();

    for bill in bills {
        let Some(date) = bill.date.as_deref().and_then(parse_bill_date) else {
            tracing::warn!(bill_id = ?bill.id, "skipping bill without usable date in trend");
            continue;
        };
        let label = if hourly {
            date.format("%H:00").to_string()
        } else {
            date.format("%Y-%m-%d").to_string()
        };
        *buckets.entry(label).or_insert(0.0) += bill.total();
    }

    buckets
        .into_iter()
        .map(|(time, value)| TrendPoint { time, value })
        .collect()
}
