//! Typed payload shapes for every endpoint and report.
//!
//! Wire names are camelCase to match the original JSON, except the join
//! rows which were snake_case on the wire and stay that way. All read
//! payloads default missing fields so the renderer degrades to zeros
//! instead of refusing partial data.

use serde::{Deserialize, Serialize};

/// Entity counts shown on both summary cards. Fabricated per request,
/// never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Summary {
    pub users: u64,
    pub products: u64,
    pub orders: u64,
    pub payments: u64,
}

/// No relationship between the fields is enforced; `average_order` is
/// not required to equal `total_revenue / total_orders`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SalesReport {
    pub total_revenue: f64,
    pub total_orders: u64,
    pub average_order: f64,
}

/// Sequence position is display rank; the server does not guarantee the
/// list is sorted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductRanking {
    pub product_name: String,
    pub total_sold: u64,
    pub revenue: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomerSummary {
    pub customer_name: String,
    pub total_orders: u64,
    pub total_spent: f64,
    pub last_purchase: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StockStatus {
    #[default]
    Low,
    Critical,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StockAlert {
    pub product_name: String,
    pub current_stock: u64,
    pub status: StockStatus,
}

// ---- family B (mysql) demo payloads ----

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JoinRow {
    pub customer_name: String,
    pub order_id: u64,
    pub total: f64,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JoinsDemo {
    pub description: String,
    pub results: Vec<JoinRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriggersDemo {
    pub triggers: Vec<String>,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProceduresDemo {
    pub procedures: Vec<String>,
    pub example: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserManagementDemo {
    pub users: Vec<String>,
    pub implementation: String,
}

// ---- family C (synthetic reports, client-side) ----

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonthlySales {
    pub month: String,
    pub revenue: f64,
    pub orders: u64,
    pub growth: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SalesOverview {
    pub total_revenue: f64,
    pub total_orders: u64,
    pub average_order_value: f64,
    pub best_performing_month: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SalesAnalytics {
    pub title: String,
    pub monthly_sales: Vec<MonthlySales>,
    pub summary: SalesOverview,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Segment {
    pub segment: String,
    pub count: u64,
    pub avg_spend: f64,
    pub characteristics: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Segmentation {
    pub title: String,
    pub segments: Vec<Segment>,
    pub insights: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasketPattern {
    pub items: Vec<String>,
    pub support: String,
    pub confidence: String,
    pub lift: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BasketAnalysis {
    pub title: String,
    pub frequent_patterns: Vec<BasketPattern>,
    pub business_impact: String,
}

// ---- write requests ----
//
// Every field is optional: the server echoes whatever arrived instead of
// validating shape, so a missing field simply stays off the echo.

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Forms post strings, scripted callers post numbers; the server
    /// echoes either untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    #[serde(default)]
    pub product_skus: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn stock_status_uses_uppercase_wire_names() {
        assert_eq!(serde_json::to_value(StockStatus::Low).unwrap(), json!("LOW"));
        assert_eq!(
            serde_json::to_value(StockStatus::Critical).unwrap(),
            json!("CRITICAL")
        );
    }

    #[test]
    fn read_payloads_default_missing_fields() {
        let report: SalesReport = serde_json::from_value(json!({"totalOrders": 4})).unwrap();
        assert_eq!(report.total_orders, 4);
        assert_eq!(report.total_revenue, 0.0);
    }

    #[test]
    fn new_order_skus_default_empty() {
        let order: NewOrder =
            serde_json::from_value(json!({"customerEmail": "a@b.com"})).unwrap();
        assert_eq!(order.customer_email.as_deref(), Some("a@b.com"));
        assert!(order.product_skus.is_empty());
    }

    #[test]
    fn absent_write_fields_stay_off_the_echo() {
        let user = NewUser {
            name: Some("Alice".into()),
            email: None,
            role: None,
        };
        let wire = serde_json::to_value(&user).unwrap();
        assert_eq!(wire, json!({"name": "Alice"}));
    }
}
