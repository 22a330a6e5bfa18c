//! Product ranking

use std::collections::HashMap;

use shared::models::{Bill, ProductRanking};

/// Accumulate per-product-name totals across the filtered set
///
/// Keys are exact, case-sensitive names; lines without a name share the
/// `None` bucket. Output is in first-appearance order, which the sorted
/// views below rely on for stable tie-breaking.
pub fn product_rankings(bills: &[Bill]) -> Vec<ProductRanking> {
    let mut index: HashMap<Option<String>, usize> = HashMap::new();
    let mut rankings: Vec<ProductRanking> = Vec::new();
    // last bill position per product, to count distinct bills rather
    // than line occurrences
    let mut last_bill: Vec<Option<usize>> = Vec::new();

    for (pos, bill) in bills.iter().enumerate() {
        for product in &bill.products {
            let idx = *index.entry(product.name.clone()).or_insert_with(|| {
                rankings.push(ProductRanking {
                    name: product.name.clone(),
                    quantity: 0.0,
                    total_amount: 0.0,
                    counters: Vec::new(),
                    bills: 0,
                });
                last_bill.push(None);
                rankings.len() - 1
            });
            let entry = &mut rankings[idx];
            entry.quantity += product.qty();
            entry.total_amount += product.line_total();
            if last_bill[idx] != Some(pos) {
                entry.bills += 1;
                last_bill[idx] = Some(pos);
            }
            if let Some(counter) = bill.effective_counter() {
                if !entry.counters.iter().any(|c| c == counter) {
                    entry.counters.push(counter.to_string());
                }
            }
        }
    }
    rankings
}

/// Top sellers: quantity descending, stable, first `limit` entries
pub fn top_selling(rankings: &[ProductRanking], limit: usize) -> Vec<ProductRanking> {
    let mut sorted = rankings.to_vec();
    sorted.sort_by(|a, b| b.quantity.total_cmp(&a.quantity));
    sorted.truncate(limit);
    sorted
}

/// Less sellers: quantity ascending, stable, first `limit` entries
pub fn less_selling(rankings: &[ProductRanking], limit: usize) -> Vec<ProductRanking> {
    let mut sorted = rankings.to_vec();
    sorted.sort_by(|a, b| a.quantity.total_cmp(&b.quantity));
    sorted.truncate(limit);
    sorted
}
