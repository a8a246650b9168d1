//! # View renderer
//!
//! Pure function from `(family, kind tag, payload)` to an HTML fragment.
//! Dispatch is an exhaustive match over [`ViewKind`]; a tag outside the
//! closed set, or a payload the kind cannot decode, falls back to a
//! labeled dump of the raw data. The renderer holds no state and never
//! mutates its input, so repeated renders are independent.

use dashboard_model::{
    kind::{Family, ViewKind},
    payloads::{
        BasketAnalysis, CustomerSummary, JoinsDemo, ProceduresDemo, ProductRanking, SalesAnalytics,
        SalesReport, Segmentation, StockAlert, StockStatus, Summary, TriggersDemo,
        UserManagementDemo,
    },
};
use serde_json::Value;

use crate::regions::Fragment;

pub fn render(family: Family, kind: &str, data: &Value) -> Fragment {
    if is_absent(data) {
        return Fragment::Error(format!("No {} data available", family.label()));
    }

    let Some(parsed) = ViewKind::parse(family, kind) else {
        return Fragment::Success(dump(family, data));
    };

    match render_kind(parsed, data) {
        Some(html) => Fragment::Success(html),
        None => Fragment::Success(dump(family, data)),
    }
}

/// Null or an empty object counts as "nothing to show". Empty sequences
/// are left to the per-kind arms, which each have their own message.
fn is_absent(data: &Value) -> bool {
    match data {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

fn dump(family: Family, data: &Value) -> String {
    let pretty = serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string());
    format!("<strong>{} Data:</strong><br>{pretty}", family.label())
}

fn item(body: &str) -> String {
    format!("<div class=\"data-item\">{body}</div>")
}

fn decode<T: serde::de::DeserializeOwned>(data: &Value) -> Option<T> {
    serde_json::from_value(data.clone()).ok()
}

fn render_kind(kind: ViewKind, data: &Value) -> Option<String> {
    let html = match kind {
        ViewKind::MongoSummary => {
            summary_block(&decode::<Summary>(data)?, "MongoDB", "NoSQL Document Store")
        }
        ViewKind::MysqlSummary => summary_block(
            &decode::<Summary>(data)?,
            "MySQL",
            "Relational Database Management System",
        ),
        ViewKind::SalesReport => {
            let report: SalesReport = decode(data)?;
            format!(
                "<strong>💰 MongoDB Sales Report</strong><br><br>\
                 💵 <strong>Total Revenue:</strong> ${:.2}<br>\
                 📈 <strong>Total Orders:</strong> {}<br>\
                 📊 <strong>Average Order:</strong> ${:.2}<br><br>\
                 <em>Aggregation Pipeline Result</em>",
                report.total_revenue, report.total_orders, report.average_order
            )
        }
        ViewKind::TopProducts => {
            let products: Vec<ProductRanking> = decode(data)?;
            if products.is_empty() {
                return Some("No product data available in MongoDB".into());
            }
            let mut html = String::from("<strong>🏆 Top Selling Products (MongoDB)</strong><br><br>");
            for (index, product) in products.iter().enumerate() {
                html.push_str(&item(&format!(
                    "<strong>{}. {}</strong><br>📦 Sold: {} units<br>💰 Revenue: ${:.2}",
                    index + 1,
                    product.product_name,
                    product.total_sold,
                    product.revenue
                )));
            }
            html
        }
        ViewKind::CustomerSummary => {
            let customers: Vec<CustomerSummary> = decode(data)?;
            if customers.is_empty() {
                return Some("No customer data available in MongoDB".into());
            }
            let mut html = String::from("<strong>👥 Customer Analytics (MongoDB)</strong><br><br>");
            for customer in &customers {
                html.push_str(&item(&format!(
                    "<strong>👤 {}</strong><br>🛒 Orders: {}<br>💵 Total Spent: ${:.2}<br>📅 Last Purchase: {}",
                    customer.customer_name,
                    customer.total_orders,
                    customer.total_spent,
                    customer.last_purchase
                )));
            }
            html
        }
        ViewKind::LowStock => {
            let alerts: Vec<StockAlert> = decode(data)?;
            if alerts.is_empty() {
                return Some("✅ All products have sufficient stock in MongoDB".into());
            }
            let mut html = String::from("<strong>📦 Low Stock Alerts (MongoDB)</strong><br><br>");
            for alert in &alerts {
                let (icon, status) = match alert.status {
                    StockStatus::Critical => ("🚨", "CRITICAL"),
                    StockStatus::Low => ("⚠️", "LOW"),
                };
                html.push_str(&item(&format!(
                    "{icon} <strong>{}</strong><br>📊 Current Stock: {} units<br>🚩 Status: {status}",
                    alert.product_name, alert.current_stock
                )));
            }
            html
        }
        ViewKind::Joins => {
            let joins: JoinsDemo = decode(data)?;
            let mut html = format!(
                "<strong>🔗 SQL Joins Demonstration</strong><br><br>\
                 <strong>{}</strong><br><br>",
                joins.description
            );
            for row in &joins.results {
                html.push_str(&item(&format!(
                    "👤 {}<br>🛒 Order #{}<br>💰 ${} - {}",
                    row.customer_name, row.order_id, row.total, row.status
                )));
            }
            html.push_str("<em>Relational integrity with foreign keys</em>");
            html
        }
        ViewKind::Triggers => {
            let demo: TriggersDemo = decode(data)?;
            let mut html = String::from("<strong>⚡ SQL Triggers Implementation</strong><br><br>");
            for trigger in &demo.triggers {
                html.push_str(&format!("✅ {trigger}<br>"));
            }
            html.push_str(&format!(
                "<br>{}<br><br><em>Automated data integrity checks</em>",
                demo.status
            ));
            html
        }
        ViewKind::StoredProcedures => {
            let demo: ProceduresDemo = decode(data)?;
            let mut html = String::from("<strong>💾 Stored Procedures</strong><br><br>");
            for procedure in &demo.procedures {
                html.push_str(&format!("✅ {procedure}<br>"));
            }
            html.push_str(&format!(
                "<br>{}<br><br><em>Pre-compiled SQL logic</em>",
                demo.example
            ));
            html
        }
        ViewKind::UserManagement => {
            let demo: UserManagementDemo = decode(data)?;
            let mut html = String::from(
                "<strong>👤 User Role Management</strong><br><br>\
                 🔐 <strong>Role-Based Access Control</strong><br><br>",
            );
            for user in &demo.users {
                html.push_str(&item(user));
            }
            html.push_str(&format!(
                "<br>{}<br><br><em>Database security implementation</em>",
                demo.implementation
            ));
            html
        }
        ViewKind::SalesAnalytics => {
            let report: SalesAnalytics = decode(data)?;
            if report.monthly_sales.is_empty() {
                return Some("No monthly sales data available".into());
            }
            let mut html = String::from(
                "<strong>📈 Sales Analytics Report</strong><br><br>\
                 <strong>Monthly Performance:</strong><br>",
            );
            for month in &report.monthly_sales {
                html.push_str(&item(&format!(
                    "<strong>{}</strong><br>💰 Revenue: ${}<br>🛒 Orders: {}<br>📊 Growth: {}",
                    month.month, month.revenue, month.orders, month.growth
                )));
            }
            html.push_str(&format!(
                "<br><strong>Summary:</strong><br>\
                 Total Revenue: ${}<br>Total Orders: {}<br>Average Order: ${}<br>Best Month: {}<br><br>\
                 <em>Data Mining: Time Series Analysis</em>",
                report.summary.total_revenue,
                report.summary.total_orders,
                report.summary.average_order_value,
                report.summary.best_performing_month
            ));
            html
        }
        ViewKind::Segmentation => {
            let report: Segmentation = decode(data)?;
            if report.segments.is_empty() {
                return Some("No customer segments available".into());
            }
            let mut html =
                String::from("<strong>🎯 Customer Segmentation Analysis</strong><br><br>");
            for segment in &report.segments {
                html.push_str(&item(&format!(
                    "<strong>{}</strong><br>👥 Count: {} customers<br>💰 Avg Spend: ${}<br>📝 {}<br>💡 {}",
                    segment.segment,
                    segment.count,
                    segment.avg_spend,
                    segment.characteristics,
                    segment.recommendation
                )));
            }
            html.push_str(&format!(
                "<br><strong>Key Insight:</strong><br>{}<br><br>\
                 <em>Data Mining: Customer Clustering</em>",
                report.insights
            ));
            html
        }
        ViewKind::Association => {
            let report: BasketAnalysis = decode(data)?;
            if report.frequent_patterns.is_empty() {
                return Some("No frequent patterns found".into());
            }
            let mut html = String::from(
                "<strong>🔄 Market Basket Analysis</strong><br><br>\
                 <strong>Frequently Bought Together:</strong><br>",
            );
            for pattern in &report.frequent_patterns {
                html.push_str(&item(&format!(
                    "<strong>🛍️ {}</strong><br>📊 Support: {}<br>🎯 Confidence: {}<br>📈 Lift: {}<br>💡 {}",
                    pattern.items.join(" + "),
                    pattern.support,
                    pattern.confidence,
                    pattern.lift,
                    pattern.recommendation
                )));
            }
            html.push_str(&format!(
                "<br><strong>Business Impact:</strong><br>{}<br><br>\
                 <em>Data Mining: Association Rule Mining</em>",
                report.business_impact
            ));
            html
        }
    };

    Some(html)
}

fn summary_block(summary: &Summary, label: &str, caption: &str) -> String {
    format!(
        "<strong>📊 {label} Database Summary</strong><br><br>\
         👥 <strong>Users:</strong> {}<br>\
         📦 <strong>Products:</strong> {}<br>\
         🛒 <strong>Orders:</strong> {}<br>\
         💳 <strong>Payments:</strong> {}<br><br>\
         <em>{caption}</em>",
        summary.users, summary.products, summary.orders, summary.payments
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn count_items(fragment: &Fragment) -> usize {
        fragment.text().matches("<div class=\"data-item\">").count()
    }

    #[test]
    fn absent_data_renders_the_family_no_data_message() {
        for kind in ViewKind::server_backed() {
            for value in [Value::Null, json!({})] {
                let fragment = render(kind.family(), kind.name(), &value);
                assert_eq!(
                    fragment,
                    Fragment::Error(format!("No {} data available", kind.family().label())),
                    "{kind:?}"
                );
            }
        }
    }

    #[test]
    fn summary_renders_every_counter() {
        let data = json!({"users": 8, "products": 6, "orders": 4, "payments": 3});
        let fragment = render(Family::Mongo, "summary", &data);
        let text = fragment.text().to_string();
        for expected in ["Users:</strong> 8", "Products:</strong> 6", "Orders:</strong> 4", "Payments:</strong> 3"] {
            assert!(text.contains(expected), "{expected} in {text}");
        }
        assert!(text.contains("NoSQL Document Store"));
    }

    #[test]
    fn mysql_summary_has_its_own_caption() {
        let data = json!({"users": 5, "products": 3, "orders": 2, "payments": 1});
        let fragment = render(Family::Mysql, "summary", &data);
        assert!(fragment.text().contains("MySQL Database Summary"));
        assert!(fragment.text().contains("Relational Database Management System"));
    }

    #[test]
    fn partial_summary_degrades_to_zeros() {
        let fragment = render(Family::Mongo, "summary", &json!({"users": 8}));
        assert!(fragment.text().contains("Products:</strong> 0"));
    }

    #[test]
    fn sequences_render_one_block_per_entry_in_order() {
        let data = json!([
            {"productName": "Laptop Pro 14", "totalSold": 2, "revenue": 2400},
            {"productName": "Smartphone", "totalSold": 2, "revenue": 1398},
            {"productName": "Programming Book", "totalSold": 3, "revenue": 135}
        ]);
        let fragment = render(Family::Mongo, "top-products", &data);
        assert_eq!(count_items(&fragment), 3);

        let text = fragment.text();
        let laptop = text.find("Laptop Pro 14").unwrap();
        let phone = text.find("Smartphone").unwrap();
        let book = text.find("Programming Book").unwrap();
        assert!(laptop < phone && phone < book, "input order preserved");
        assert!(text.contains("1. Laptop Pro 14"));
    }

    #[test]
    fn empty_sequences_have_distinct_kind_messages() {
        let empty = json!([]);
        let products = render(Family::Mongo, "top-products", &empty);
        let customers = render(Family::Mongo, "customer-summary", &empty);
        let stock = render(Family::Mongo, "low-stock", &empty);

        assert_eq!(
            products,
            Fragment::Success("No product data available in MongoDB".into())
        );
        assert_eq!(
            customers,
            Fragment::Success("No customer data available in MongoDB".into())
        );
        assert_eq!(
            stock,
            Fragment::Success("✅ All products have sufficient stock in MongoDB".into())
        );
    }

    #[test]
    fn low_stock_picks_the_icon_from_the_status() {
        let data = json!([
            {"productName": "Headphones", "currentStock": 5, "status": "LOW"},
            {"productName": "Cable", "currentStock": 1, "status": "CRITICAL"}
        ]);
        let fragment = render(Family::Mongo, "low-stock", &data);
        assert!(fragment.text().contains("⚠️ <strong>Headphones"));
        assert!(fragment.text().contains("🚨 <strong>Cable"));
    }

    #[test]
    fn joins_render_rows_from_the_results_field() {
        let data = json!({
            "description": "INNER JOIN: Customers with their orders",
            "results": [
                {"customer_name": "Bob Customer", "order_id": 1, "total": 1899, "status": "Confirmed"},
                {"customer_name": "Bob Customer", "order_id": 2, "total": 90, "status": "Paid"}
            ]
        });
        let fragment = render(Family::Mysql, "joins", &data);
        assert_eq!(count_items(&fragment), 2);
        assert!(fragment.text().contains("Order #1"));
    }

    #[test]
    fn unknown_kind_dumps_every_key() {
        let data = json!({"alpha": 1, "beta": [2, 3], "gamma": {"delta": true}});
        let fragment = render(Family::Mongo, "aggregates", &data);
        let text = fragment.text();
        assert!(text.contains("MongoDB Data:"));
        for key in ["alpha", "beta", "gamma", "delta"] {
            assert!(text.contains(key), "{key} in dump");
        }
    }

    #[test]
    fn undecodable_payload_falls_back_to_the_dump() {
        // top-products expects a sequence; hand it a scalar-bearing object
        let data = json!({"surprise": "not a list"});
        let fragment = render(Family::Mongo, "top-products", &data);
        assert!(fragment.text().contains("surprise"));
    }

    #[test]
    fn report_kinds_render_through_the_same_path() {
        let sales = serde_json::to_value(crate::reports::sales_analytics()).unwrap();
        let fragment = render(Family::Reports, "sales", &sales);
        assert_eq!(count_items(&fragment), 3);
        assert!(fragment.text().contains("Best Month: March"));

        let segmentation = serde_json::to_value(crate::reports::segmentation()).unwrap();
        let fragment = render(Family::Reports, "segmentation", &segmentation);
        assert_eq!(count_items(&fragment), 3);
        assert!(fragment
            .text()
            .contains("VIP customers (18%) drive 45% of total revenue"));

        let baskets = serde_json::to_value(crate::reports::basket_analysis()).unwrap();
        let fragment = render(Family::Reports, "association", &baskets);
        assert_eq!(count_items(&fragment), 3);
        assert!(fragment.text().contains("Laptop + Wireless Mouse"));
    }

    #[test]
    fn render_is_idempotent_and_does_not_mutate_data() {
        let data = json!([{"productName": "Laptop", "totalSold": 1, "revenue": 10.0}]);
        let snapshot = data.clone();
        let first = render(Family::Mongo, "top-products", &data);
        let second = render(Family::Mongo, "top-products", &data);
        assert_eq!(first, second);
        assert_eq!(data, snapshot);
    }
}
