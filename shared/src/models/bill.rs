//! Bill Model

use serde::{Deserialize, Serialize};

/// Customer reference embedded in a bill
///
/// `id` is absent for walk-in customers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BillCustomer {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
}

/// Cashier reference embedded in a bill
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillCashier {
    #[serde(default)]
    pub counter_num: Option<String>,
}

/// One product line on a bill
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BillProduct {
    #[serde(default)]
    pub name: Option<String>,
    /// Unit price in currency unit
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub quantity: Option<f64>,
}

impl BillProduct {
    /// Quantity with the missing-value default applied
    pub fn qty(&self) -> f64 {
        num(self.quantity)
    }

    /// `price * quantity`, 0-defaulted per field
    pub fn line_total(&self) -> f64 {
        num(self.price) * num(self.quantity)
    }
}

/// Bill entity as returned by the backend
///
/// Every field is defensively optional: the payload is untrusted input
/// and a missing or malformed field must never abort a page's
/// computation. Unknown wire fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    /// Human-readable receipt number
    #[serde(default)]
    pub bill_number: Option<String>,
    /// Transaction timestamp (RFC 3339 or `YYYY-MM-DD`), kept raw
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub customer: Option<BillCustomer>,
    #[serde(default)]
    pub products: Vec<BillProduct>,
    /// Total amount in currency unit
    #[serde(default)]
    pub grand_total: Option<f64>,
    /// Paid amount in currency unit
    #[serde(default)]
    pub paid_amount: Option<f64>,
    /// Unpaid remainder, when the backend supplies it precomputed
    #[serde(default)]
    pub unpaid_amount: Option<f64>,
    /// Point-of-sale counter identifier
    #[serde(default)]
    pub counter_num: Option<String>,
    #[serde(default)]
    pub cashier: Option<BillCashier>,
    #[serde(default)]
    pub payment_method: Option<String>,
}

impl Bill {
    /// Grand total with the missing-value default applied
    pub fn total(&self) -> f64 {
        num(self.grand_total)
    }

    /// Paid amount with the missing-value default applied
    pub fn paid(&self) -> f64 {
        num(self.paid_amount)
    }

    /// Unpaid remainder: the backend-supplied value when present,
    /// otherwise `max(0, grand_total - paid_amount)`
    pub fn unpaid(&self) -> f64 {
        match self.unpaid_amount {
            Some(v) if v.is_finite() => v.max(0.0),
            _ => (self.total() - self.paid()).max(0.0),
        }
    }

    /// Registered customer id, if present and non-empty
    pub fn customer_id(&self) -> Option<&str> {
        self.customer
            .as_ref()
            .and_then(|c| c.id.as_deref())
            .filter(|id| !id.is_empty())
    }

    /// Effective point-of-sale counter: `counter_num` wins over the
    /// cashier's counter when both are present
    pub fn effective_counter(&self) -> Option<&str> {
        self.counter_num
            .as_deref()
            .or_else(|| self.cashier.as_ref().and_then(|c| c.counter_num.as_deref()))
    }
}

/// Missing and non-finite numeric fields coerce to 0 before arithmetic
fn num(v: Option<f64>) -> f64 {
    match v {
        Some(x) if x.is_finite() => x,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpaid_derived_when_absent() {
        let bill = Bill {
            grand_total: Some(100.0),
            paid_amount: Some(40.0),
            ..Default::default()
        };
        assert_eq!(bill.unpaid(), 60.0);
    }

    #[test]
    fn test_unpaid_never_negative() {
        let bill = Bill {
            grand_total: Some(50.0),
            paid_amount: Some(80.0),
            ..Default::default()
        };
        assert_eq!(bill.unpaid(), 0.0);
    }

    #[test]
    fn test_unpaid_prefers_supplied_value() {
        let bill = Bill {
            grand_total: Some(100.0),
            paid_amount: Some(40.0),
            unpaid_amount: Some(25.0),
            ..Default::default()
        };
        assert_eq!(bill.unpaid(), 25.0);
    }

    #[test]
    fn test_missing_numbers_default_to_zero() {
        let bill = Bill::default();
        assert_eq!(bill.total(), 0.0);
        assert_eq!(bill.paid(), 0.0);
        assert_eq!(bill.unpaid(), 0.0);
    }

    #[test]
    fn test_nan_total_defaults_to_zero() {
        let bill = Bill {
            grand_total: Some(f64::NAN),
            paid_amount: Some(10.0),
            ..Default::default()
        };
        assert_eq!(bill.total(), 0.0);
        assert_eq!(bill.unpaid(), 0.0);
    }

    #[test]
    fn test_empty_customer_id_is_walk_in() {
        let bill = Bill {
            customer: Some(BillCustomer {
                id: Some(String::new()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(bill.customer_id(), None);
    }

    #[test]
    fn test_effective_counter_prefers_bill_level() {
        let bill = Bill {
            counter_num: Some("C2".to_string()),
            cashier: Some(BillCashier {
                counter_num: Some("C7".to_string()),
            }),
            ..Default::default()
        };
        assert_eq!(bill.effective_counter(), Some("C2"));

        let fallback = Bill {
            cashier: Some(BillCashier {
                counter_num: Some("C7".to_string()),
            }),
            ..Default::default()
        };
        assert_eq!(fallback.effective_counter(), Some("C7"));
    }

    #[test]
    fn test_deserialize_mongo_style_payload() {
        let json = r#"{
            "_id": "b1",
            "billNumber": "INV-0042",
            "date": "2024-06-01T10:30:00Z",
            "customer": {"_id": "c1", "name": "Asha", "contact": "555-0101"},
            "products": [{"name": "Rice", "price": 20.0, "quantity": 3}],
            "grandTotal": 60.0,
            "paidAmount": 60.0,
            "paymentMethod": "cash",
            "extraneous": true
        }"#;
        let bill: Bill = serde_json::from_str(json).unwrap();
        assert_eq!(bill.id.as_deref(), Some("b1"));
        assert_eq!(bill.bill_number.as_deref(), Some("INV-0042"));
        assert_eq!(bill.customer_id(), Some("c1"));
        assert_eq!(bill.products.len(), 1);
        assert_eq!(bill.products[0].line_total(), 60.0);
    }

    #[test]
    fn test_deserialize_sparse_payload() {
        let bill: Bill = serde_json::from_str("{}").unwrap();
        assert!(bill.id.is_none());
        assert!(bill.products.is_empty());
        assert_eq!(bill.total(), 0.0);
    }
}
