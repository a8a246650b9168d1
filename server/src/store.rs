//! # Store capability
//!
//! Handlers never hold payloads of their own; they ask the store. The
//! trait is the seam where a real MongoDB/MySQL collaborator would plug
//! in. The demo ships [`MockStore`], which fabricates every read from
//! constants and acknowledges every write without keeping anything,
//! which is why mutations never move the summary numbers.

use async_trait::async_trait;
use dashboard_model::payloads::{
    CustomerSummary, JoinRow, JoinsDemo, NewOrder, NewProduct, NewUser, ProceduresDemo,
    ProductRanking, SalesReport, StockAlert, StockStatus, Summary, TriggersDemo,
    UserManagementDemo,
};
use serde_json::{json, Value};
use tracing::info;

use crate::{error::AppError, ids::IdGenerator};

/// Price every ordered SKU is billed at. Placeholder business logic, not
/// derived from any per-product price.
pub const UNIT_PRICE: f64 = 99.99;

/// Read-side resources, one per GET endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadResource {
    MongoSummary,
    SalesReport,
    TopProducts,
    CustomerSummary,
    LowStock,
    MysqlSummary,
    Joins,
    Triggers,
    StoredProcedures,
    UserManagement,
}

/// Write-side resources, one per POST endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResource {
    Users,
    Products,
    Orders,
}

#[async_trait]
pub trait Store: Send + Sync {
    async fn read(&self, resource: ReadResource) -> Result<Value, AppError>;
    async fn write(&self, resource: WriteResource, payload: Value) -> Result<Value, AppError>;
}

#[derive(Debug, Default)]
pub struct MockStore {
    ids: IdGenerator,
}

#[async_trait]
impl Store for MockStore {
    async fn read(&self, resource: ReadResource) -> Result<Value, AppError> {
        let data = match resource {
            ReadResource::MongoSummary => serde_json::to_value(Summary {
                users: 8,
                products: 6,
                orders: 4,
                payments: 3,
            }),
            ReadResource::SalesReport => serde_json::to_value(SalesReport {
                total_revenue: 2589.0,
                total_orders: 4,
                average_order: 647.25,
            }),
            ReadResource::TopProducts => serde_json::to_value(vec![
                ProductRanking {
                    product_name: "Laptop Pro 14".into(),
                    total_sold: 2,
                    revenue: 2400.0,
                },
                ProductRanking {
                    product_name: "Smartphone".into(),
                    total_sold: 2,
                    revenue: 1398.0,
                },
                ProductRanking {
                    product_name: "Programming Book".into(),
                    total_sold: 3,
                    revenue: 135.0,
                },
            ]),
            ReadResource::CustomerSummary => serde_json::to_value(vec![
                CustomerSummary {
                    customer_name: "Bob Customer".into(),
                    total_orders: 2,
                    total_spent: 1989.0,
                    last_purchase: "2024-01-15".into(),
                },
                CustomerSummary {
                    customer_name: "Sample Customer".into(),
                    total_orders: 1,
                    total_spent: 600.0,
                    last_purchase: "2024-01-10".into(),
                },
            ]),
            ReadResource::LowStock => serde_json::to_value(vec![
                StockAlert {
                    product_name: "Headphones".into(),
                    current_stock: 5,
                    status: StockStatus::Low,
                },
                StockAlert {
                    product_name: "Tablet".into(),
                    current_stock: 8,
                    status: StockStatus::Low,
                },
            ]),
            ReadResource::MysqlSummary => serde_json::to_value(Summary {
                users: 5,
                products: 3,
                orders: 2,
                payments: 1,
            }),
            ReadResource::Joins => serde_json::to_value(JoinsDemo {
                description: "INNER JOIN: Customers with their orders".into(),
                results: vec![
                    JoinRow {
                        customer_name: "Bob Customer".into(),
                        order_id: 1,
                        total: 1899.0,
                        status: "Confirmed".into(),
                    },
                    JoinRow {
                        customer_name: "Bob Customer".into(),
                        order_id: 2,
                        total: 90.0,
                        status: "Paid".into(),
                    },
                ],
            }),
            ReadResource::Triggers => serde_json::to_value(TriggersDemo {
                triggers: vec![
                    "AFTER INSERT - Auto-updates inventory when orders are placed".into(),
                    "BEFORE UPDATE - Prevents negative stock values".into(),
                    "AFTER DELETE - Logs deleted orders to audit table".into(),
                ],
                status: "All triggers implemented in MySQL database".into(),
            }),
            ReadResource::StoredProcedures => serde_json::to_value(ProceduresDemo {
                procedures: vec![
                    "GetSalesSummary() - No parameters, returns overall metrics".into(),
                    "GetCustomerOrders(IN customer_id) - With parameters, returns customer history"
                        .into(),
                ],
                example: "CALL GetSalesSummary() returns total revenue, orders, and averages"
                    .into(),
            }),
            ReadResource::UserManagement => serde_json::to_value(UserManagementDemo {
                users: vec![
                    "customer_user - SELECT privileges only".into(),
                    "seller_user - SELECT, INSERT, UPDATE privileges".into(),
                    "admin_user - ALL PRIVILEGES on ecommerce database".into(),
                ],
                implementation: "User roles created with GRANT commands in MySQL".into(),
            }),
        };

        data.map_err(|e| AppError::Internal(Box::new(e)))
    }

    async fn write(&self, resource: WriteResource, payload: Value) -> Result<Value, AppError> {
        match resource {
            WriteResource::Users => {
                let user: NewUser = lenient(payload);
                info!(name = ?user.name, email = ?user.email, role = ?user.role, "Adding user");

                Ok(json!({
                    "message": "User added successfully!",
                    "userId": self.ids.next("user"),
                    "userDetails": user,
                }))
            }
            WriteResource::Products => {
                let product: NewProduct = lenient(payload);
                info!(name = ?product.name, sku = ?product.sku, "Adding product");

                // The echo leaves the description out, as the original did.
                let mut details =
                    serde_json::to_value(&product).map_err(|e| AppError::Internal(Box::new(e)))?;
                if let Some(map) = details.as_object_mut() {
                    map.remove("description");
                }

                Ok(json!({
                    "message": "Product added successfully!",
                    "productId": self.ids.next("prod"),
                    "productDetails": details,
                }))
            }
            WriteResource::Orders => {
                let order: NewOrder = lenient(payload);
                info!(customer = ?order.customer_email, skus = order.product_skus.len(), "Creating order");

                let total = order.product_skus.len() as f64 * UNIT_PRICE;

                Ok(json!({
                    "message": "Order created successfully!",
                    "orderId": self.ids.next("order"),
                    "total": total,
                    "customerEmail": order.customer_email,
                    "products": order.product_skus,
                }))
            }
        }
    }
}

/// Write bodies are never rejected for shape; anything undecodable
/// collapses to the all-absent request and gets echoed as such.
fn lenient<T: Default + serde::de::DeserializeOwned>(payload: Value) -> T {
    serde_json::from_value(payload).unwrap_or_default()
}
