//! Bill sequence filters
//!
//! Pure and order-preserving: the output is always a subsequence of the
//! input, freshly allocated, input untouched.

use chrono::{DateTime, Utc};
use shared::models::Bill;

use crate::params::{StatusFilter, TimeRange};
use crate::time::{parse_bill_date, resolve_window};

/// Select bills whose date falls inside the resolved window
///
/// Bills with a missing or unparseable date are excluded under any
/// windowed mode and logged at warn level, never treated as fatal.
pub fn filter_by_range(bills: &[Bill], range: &TimeRange, now: DateTime<Utc>) -> Vec<Bill> {
    let Some((start, end)) = resolve_window(range, now) else {
        return bills.to_vec();
    };
    bills
        .iter()
        .filter(|bill| match bill.date.as_deref().and_then(parse_bill_date) {
            Some(date) => start <= date && date < end,
            None => {
                tracing::warn!(
                    bill_id = ?bill.id,
                    raw_date = ?bill.date,
                    "skipping bill with missing or unparseable date"
                );
                false
            }
        })
        .cloned()
        .collect()
}

/// Narrow by text query, payment status, and counter
///
/// The query matches case-insensitively against customer name, customer
/// contact, bill id, and bill number, OR-combined per field. Missing
/// fields match as empty strings. An empty or whitespace query applies
/// no text filtering; the status and counter filters still do.
pub fn filter_by_search(
    bills: &[Bill],
    query: &str,
    status: Option<StatusFilter>,
    counter: Option<&str>,
) -> Vec<Bill> {
    let query = query.trim().to_lowercase();
    bills
        .iter()
        .filter(|bill| {
            matches_query(bill, &query)
                && matches_status(bill, status)
                && matches_counter(bill, counter)
        })
        .cloned()
        .collect()
}

fn matches_query(bill: &Bill, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let customer = bill.customer.as_ref();
    [
        customer.and_then(|c| c.name.as_deref()),
        customer.and_then(|c| c.contact.as_deref()),
        bill.id.as_deref(),
        bill.bill_number.as_deref(),
    ]
    .iter()
    .any(|field| field.unwrap_or("").to_lowercase().contains(query))
}

fn matches_status(bill: &Bill, status: Option<StatusFilter>) -> bool {
    match status {
        None => true,
        Some(StatusFilter::Pending) => bill.unpaid() > 0.0,
        Some(StatusFilter::Paid) => bill.unpaid() <= 0.0,
    }
}

/// Bills without a counter only pass when no counter filter is set
fn matches_counter(bill: &Bill, counter: Option<&str>) -> bool {
    match counter {
        None => true,
        Some(c) => bill.effective_counter() == Some(c),
    }
}
