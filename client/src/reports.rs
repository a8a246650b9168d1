//! Fabricated business reports (family C).
//!
//! These never touch the network; the dispatcher builds them locally
//! and pushes them through the same render path as server data.

use dashboard_model::{
    kind::ViewKind,
    payloads::{
        BasketAnalysis, BasketPattern, MonthlySales, SalesAnalytics, SalesOverview, Segment,
        Segmentation,
    },
};
use serde_json::Value;

/// Report payload for a family-C kind, `None` for everything else.
pub fn payload(kind: ViewKind) -> Option<Value> {
    let value = match kind {
        ViewKind::SalesAnalytics => serde_json::to_value(sales_analytics()),
        ViewKind::Segmentation => serde_json::to_value(segmentation()),
        ViewKind::Association => serde_json::to_value(basket_analysis()),
        _ => return None,
    };
    Some(value.unwrap_or(Value::Null))
}

pub fn sales_analytics() -> SalesAnalytics {
    SalesAnalytics {
        title: "Sales Analytics Report".into(),
        monthly_sales: vec![
            MonthlySales {
                month: "January".into(),
                revenue: 4500.0,
                orders: 12,
                growth: "+8%".into(),
            },
            MonthlySales {
                month: "February".into(),
                revenue: 5200.0,
                orders: 15,
                growth: "+15%".into(),
            },
            MonthlySales {
                month: "March".into(),
                revenue: 6100.0,
                orders: 18,
                growth: "+17%".into(),
            },
        ],
        summary: SalesOverview {
            total_revenue: 15800.0,
            total_orders: 45,
            average_order_value: 351.0,
            best_performing_month: "March".into(),
        },
    }
}

pub fn segmentation() -> Segmentation {
    Segmentation {
        title: "Customer Segmentation Analysis".into(),
        segments: vec![
            Segment {
                segment: "VIP Customers".into(),
                count: 45,
                avg_spend: 1200.0,
                characteristics: "High frequency, high value orders".into(),
                recommendation: "Offer exclusive deals and early access".into(),
            },
            Segment {
                segment: "Regular Customers".into(),
                count: 120,
                avg_spend: 450.0,
                characteristics: "Moderate frequency, consistent spending".into(),
                recommendation: "Loyalty programs and personalized offers".into(),
            },
            Segment {
                segment: "New Customers".into(),
                count: 85,
                avg_spend: 180.0,
                characteristics: "First-time buyers, testing products".into(),
                recommendation: "Welcome discounts and educational content".into(),
            },
        ],
        insights: "VIP customers (18%) drive 45% of total revenue".into(),
    }
}

pub fn basket_analysis() -> BasketAnalysis {
    BasketAnalysis {
        title: "Market Basket Analysis".into(),
        frequent_patterns: vec![
            BasketPattern {
                items: vec!["Laptop".into(), "Wireless Mouse".into()],
                support: "65%".into(),
                confidence: "72%".into(),
                lift: "2.1".into(),
                recommendation: "Create laptop + mouse bundle deal".into(),
            },
            BasketPattern {
                items: vec!["Smartphone".into(), "Protective Case".into()],
                support: "45%".into(),
                confidence: "68%".into(),
                lift: "1.8".into(),
                recommendation: "Cross-sell cases at smartphone checkout".into(),
            },
            BasketPattern {
                items: vec!["Programming Book".into(), "Notebook".into()],
                support: "30%".into(),
                confidence: "55%".into(),
                lift: "1.5".into(),
                recommendation: "Suggest notebooks to book buyers".into(),
            },
        ],
        business_impact: "These associations can increase average order value by 15-20%".into(),
    }
}
