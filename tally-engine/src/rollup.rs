//! Per-customer rollup

use std::collections::HashMap;

use shared::models::{Bill, CustomerKey, CustomerSummary};

/// Reduce a filtered bill sequence into one summary per customer key
///
/// Output is sorted by pending amount descending; the sort is stable,
/// so ties keep first-appearance order.
pub fn customer_rollup(bills: &[Bill]) -> Vec<CustomerSummary> {
    let mut index: HashMap<CustomerKey, usize> = HashMap::new();
    let mut summaries: Vec<CustomerSummary> = Vec::new();

    for (pos, bill) in bills.iter().enumerate() {
        let key = customer_key(bill, pos);
        let idx = *index.entry(key.clone()).or_insert_with(|| {
            let customer = bill.customer.as_ref();
            summaries.push(CustomerSummary {
                key,
                name: customer.and_then(|c| c.name.clone()),
                contact: customer.and_then(|c| c.contact.clone()),
                total_amount: 0.0,
                paid_amount: 0.0,
                pending_amount: 0.0,
                bills: Vec::new(),
            });
            summaries.len() - 1
        });
        let summary = &mut summaries[idx];
        summary.total_amount += bill.total();
        summary.paid_amount += bill.paid();
        summary.pending_amount += bill.unpaid();
        summary.bills.push(bill.clone());
    }

    summaries.sort_by(|a, b| b.pending_amount.total_cmp(&a.pending_amount));
    summaries
}

/// Registered id when present and non-empty, else a key unique to this
/// bill so distinct walk-ins never merge
fn customer_key(bill: &Bill, pos: usize) -> CustomerKey {
    match bill.customer_id() {
        Some(id) => CustomerKey::Registered(id.to_string()),
        None => CustomerKey::WalkIn(bill.id.clone().unwrap_or_else(|| format!("#{pos}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bill(id: &str, customer_id: Option<&str>, total: f64, paid: f64) -> Bill {
        Bill {
            id: Some(id.to_string()),
            customer: customer_id.map(|cid| shared::models::BillCustomer {
                id: Some(cid.to_string()),
                name: Some(format!("Customer {cid}")),
                contact: None,
            }),
            grand_total: Some(total),
            paid_amount: Some(paid),
            ..Default::default()
        }
    }

    #[test]
    fn test_same_customer_accumulates() {
        let bills = vec![
            bill("b1", Some("C1"), 100.0, 40.0),
            bill("b2", Some("C1"), 50.0, 50.0),
        ];
        let summaries = customer_rollup(&bills);
        assert_eq!(summaries.len(), 1);
        let c1 = &summaries[0];
        assert_eq!(c1.key, CustomerKey::Registered("C1".to_string()));
        assert_eq!(c1.total_amount, 150.0);
        assert_eq!(c1.paid_amount, 90.0);
        assert_eq!(c1.pending_amount, 60.0);
        assert_eq!(c1.bills.len(), 2);
        assert_eq!(c1.bills[0].id.as_deref(), Some("b1"));
    }

    #[test]
    fn test_walk_ins_never_merge() {
        let bills = vec![bill("b1", None, 10.0, 0.0), bill("b2", None, 20.0, 0.0)];
        let summaries = customer_rollup(&bills);
        assert_eq!(summaries.len(), 2);
        assert_ne!(summaries[0].key, summaries[1].key);
    }

    #[test]
    fn test_walk_in_without_bill_id_still_distinct() {
        let bills = vec![Bill::default(), Bill::default()];
        let summaries = customer_rollup(&bills);
        assert_eq!(summaries.len(), 2);
    }

    #[test]
    fn test_sorted_by_pending_descending_stable() {
        let bills = vec![
            bill("b1", Some("A"), 100.0, 100.0), // pending 0
            bill("b2", Some("B"), 100.0, 20.0),  // pending 80
            bill("b3", Some("C"), 100.0, 20.0),  // pending 80, after B
        ];
        let summaries = customer_rollup(&bills);
        let keys: Vec<_> = summaries.iter().map(|s| s.key.clone()).collect();
        assert_eq!(
            keys,
            vec![
                CustomerKey::Registered("B".to_string()),
                CustomerKey::Registered("C".to_string()),
                CustomerKey::Registered("A".to_string()),
            ]
        );
    }

    #[test]
    fn test_missing_total_contributes_zero() {
        let sparse = Bill {
            id: Some("b1".to_string()),
            paid_amount: Some(30.0),
            ..Default::default()
        };
        let summaries = customer_rollup(&[sparse]);
        assert_eq!(summaries[0].total_amount, 0.0);
        assert_eq!(summaries[0].paid_amount, 30.0);
        assert_eq!(summaries[0].pending_amount, 0.0);
        assert!(summaries[0].total_amount.is_finite());
    }

    #[test]
    fn test_empty_input() {
        assert!(customer_rollup(&[]).is_empty());
    }
}
