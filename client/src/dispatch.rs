//! # Action dispatcher
//!
//! Maps each named user action to at most one HTTP call, shows a loading
//! placeholder while it is in flight, and hands the result to the
//! renderer for the action's region. Structured failures render the
//! server's message verbatim; transport failures render a connection
//! message naming the backend family. A re-triggered action supersedes
//! the in-flight one via the region generation token, so the slower
//! response is discarded rather than winning the region.
//!
//! No retries, no timeouts, no cancellation anywhere.

use std::sync::{Arc, Mutex};

use dashboard_model::{
    envelope::Envelope,
    kind::{Family, ViewKind},
    payloads::{NewOrder, NewProduct, NewUser, Summary},
};
use serde_json::{json, Value};
use tracing::warn;

use crate::{
    api::{Api, TransportError},
    regions::{Fragment, LiveStats, RegionId, Regions},
    render::render,
    reports,
};

/// One user-initiated action. Write actions submit the current form
/// draft, the way a browser submits current form contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Load(ViewKind),
    SubmitUser,
    SubmitProduct,
    SubmitOrder,
    RefreshLive,
    AddSampleData,
    RunSelfTest,
    ClearForms,
}

/// Draft state of the three entry forms.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Forms {
    pub user: NewUser,
    pub product: NewProduct,
    pub order: NewOrder,
}

pub struct Dispatcher {
    api: Arc<dyn Api>,
    pub regions: Regions,
    forms: Mutex<Forms>,
}

impl Dispatcher {
    pub fn new(api: Arc<dyn Api>) -> Self {
        Self {
            api,
            regions: Regions::default(),
            forms: Mutex::new(Forms::default()),
        }
    }

    pub fn set_user_form(&self, user: NewUser) {
        self.forms.lock().unwrap().user = user;
    }

    pub fn set_product_form(&self, product: NewProduct) {
        self.forms.lock().unwrap().product = product;
    }

    pub fn set_order_form(&self, order: NewOrder) {
        self.forms.lock().unwrap().order = order;
    }

    pub fn forms(&self) -> Forms {
        self.forms.lock().unwrap().clone()
    }

    pub async fn dispatch(&self, action: Action) {
        match action {
            Action::Load(kind) => self.load(kind).await,
            Action::SubmitUser => self.submit_user().await,
            Action::SubmitProduct => self.submit_product().await,
            Action::SubmitOrder => self.submit_order().await,
            Action::RefreshLive => self.refresh_live().await,
            Action::AddSampleData => self.add_sample_data().await,
            Action::RunSelfTest => self.run_self_test().await,
            Action::ClearForms => self.clear_forms(),
        }
    }

    async fn load(&self, kind: ViewKind) {
        let region = RegionId::View(kind);
        let family = kind.family();

        // Family C is fabricated locally, no network involved.
        if let Some(data) = reports::payload(kind) {
            let token = self
                .regions
                .begin(region, "Generating business report... 📊");
            let fragment = render(family, kind.name(), &data);
            self.apply(region, token, fragment);
            return;
        }

        let token = self
            .regions
            .begin(region, format!("Loading {} data... ⏳", family.label()));

        let fragment = match self.api.get(family, kind.name()).await {
            Ok(envelope) => rendered(family, kind.name(), envelope),
            Err(err) => Fragment::Error(connection_error(family, &err)),
        };
        self.apply(region, token, fragment);
    }

    async fn submit_user(&self) {
        let user = self.forms.lock().unwrap().user.clone();
        let region = RegionId::UserResult;
        let token = self.regions.begin(region, "Adding user... 👤");

        match self.post("users", &user).await {
            Ok(env) if env.success => {
                let data = env.data.unwrap_or(Value::Null);
                let html = format!(
                    "✅ User added successfully!<br>\
                     Name: {}<br>Email: {}<br>Role: {}<br>User ID: {}",
                    text(&user.name),
                    text(&user.email),
                    text(&user.role),
                    data["userId"].as_str().unwrap_or_default()
                );
                self.apply(region, token, Fragment::Success(html));
                self.forms.lock().unwrap().user = NewUser::default();
                self.refresh_live().await;
            }
            Ok(env) => self.apply(region, token, server_error(env)),
            Err(err) => self.apply(
                region,
                token,
                Fragment::Error(format!("Failed to add user: {}", err.0)),
            ),
        }
    }

    async fn submit_product(&self) {
        let product = self.forms.lock().unwrap().product.clone();
        let region = RegionId::ProductResult;
        let token = self.regions.begin(region, "Adding product... 📦");

        match self.post("products", &product).await {
            Ok(env) if env.success => {
                let data = env.data.unwrap_or(Value::Null);
                let html = format!(
                    "✅ Product added successfully!<br>\
                     Name: {}<br>Price: ${}<br>SKU: {}<br>Product ID: {}",
                    text(&product.name),
                    price_text(&product.price),
                    text(&product.sku),
                    data["productId"].as_str().unwrap_or_default()
                );
                self.apply(region, token, Fragment::Success(html));
                self.forms.lock().unwrap().product = NewProduct::default();
                self.refresh_live().await;
            }
            Ok(env) => self.apply(region, token, server_error(env)),
            Err(err) => self.apply(
                region,
                token,
                Fragment::Error(format!("Failed to add product: {}", err.0)),
            ),
        }
    }

    async fn submit_order(&self) {
        let order = self.forms.lock().unwrap().order.clone();
        let region = RegionId::OrderResult;

        // Local guard: an empty selection never reaches the server.
        if order.product_skus.is_empty() {
            self.regions.set(
                region,
                Fragment::Error("Please select at least one product".into()),
            );
            return;
        }

        let token = self.regions.begin(region, "Creating order... 🛒");

        match self.post("orders", &order).await {
            Ok(env) if env.success => {
                let data = env.data.unwrap_or(Value::Null);
                let html = format!(
                    "✅ Order created successfully!<br>\
                     Customer: {}<br>Products: {}<br>Total: ${}<br>Order ID: {}",
                    text(&order.customer_email),
                    order.product_skus.join(", "),
                    data["total"].as_f64().unwrap_or_default(),
                    data["orderId"].as_str().unwrap_or_default()
                );
                self.apply(region, token, Fragment::Success(html));
                self.forms.lock().unwrap().order = NewOrder::default();
                self.refresh_live().await;
            }
            Ok(env) => self.apply(region, token, server_error(env)),
            Err(err) => self.apply(
                region,
                token,
                Fragment::Error(format!("Failed to create order: {}", err.0)),
            ),
        }
    }

    async fn refresh_live(&self) {
        let region = RegionId::LiveUpdates;
        let token = self.regions.begin(region, "Refreshing live data... 🔄");

        match self.api.get(Family::Mongo, "summary").await {
            Ok(env) if env.success => {
                let summary: Summary =
                    serde_json::from_value(env.data.unwrap_or(Value::Null)).unwrap_or_default();
                self.regions.set_live(LiveStats {
                    users: summary.users,
                    products: summary.products,
                    orders: summary.orders,
                });
                self.apply(
                    region,
                    token,
                    Fragment::Success(
                        "✅ Live data updated!<br>\
                         Database statistics refreshed in real-time.<br>\
                         Try adding more data to see changes instantly!"
                            .into(),
                    ),
                );
            }
            Ok(env) => self.apply(
                region,
                token,
                Fragment::Error(format!(
                    "Failed to refresh data: {}",
                    env.error.unwrap_or_default()
                )),
            ),
            Err(err) => self.apply(
                region,
                token,
                Fragment::Error(format!("Connection error: {}", err.0)),
            ),
        }
    }

    async fn add_sample_data(&self) {
        let region = RegionId::LiveUpdates;
        let token = self.regions.begin(region, "Adding sample data... 🎯");

        let sample_user = NewUser {
            name: Some("Sample Customer".into()),
            email: Some("sample@customer.com".into()),
            role: Some("customer".into()),
        };
        let sample_product = NewProduct {
            name: Some("Sample Product".into()),
            description: Some("This is a sample product for demonstration".into()),
            price: Some(json!(29.99)),
            sku: Some("SMP-001".into()),
        };

        let posted = async {
            self.post("users", &sample_user).await?;
            self.post("products", &sample_product).await?;
            Ok::<_, TransportError>(())
        }
        .await;

        match posted {
            Ok(()) => {
                self.apply(
                    region,
                    token,
                    Fragment::Success(
                        "✅ Sample data added successfully!<br>\
                         • Added \"Sample Customer\" (customer)<br>\
                         • Added \"Sample Product\" ($29.99)<br>\
                         Refresh to see updated statistics!"
                            .into(),
                    ),
                );
                self.refresh_live().await;
            }
            Err(err) => self.apply(
                region,
                token,
                Fragment::Error(format!("Failed to add sample data: {}", err.0)),
            ),
        }
    }

    async fn run_self_test(&self) {
        let region = RegionId::LiveUpdates;
        let token = self.regions.begin(region, "Testing all features... 🧪");

        let mongo = self.api.get(Family::Mongo, "summary").await;
        let mysql = self.api.get(Family::Mysql, "summary").await;

        let fragment = match (mongo, mysql) {
            (Ok(mongo), Ok(mysql)) => {
                let results = [
                    if mongo.success {
                        "✅ MongoDB connected"
                    } else {
                        "❌ MongoDB failed"
                    },
                    if mysql.success {
                        "✅ MySQL connected"
                    } else {
                        "❌ MySQL failed"
                    },
                ];
                Fragment::Success(format!(
                    "<strong>System Test Results:</strong><br>{}<br><br>\
                     All systems are ready for demonstration!",
                    results.join("<br>")
                ))
            }
            (Err(err), _) | (_, Err(err)) => {
                Fragment::Error(format!("Test failed: {}", err.0))
            }
        };
        self.apply(region, token, fragment);
    }

    fn clear_forms(&self) {
        *self.forms.lock().unwrap() = Forms::default();
        for region in [
            RegionId::UserResult,
            RegionId::ProductResult,
            RegionId::OrderResult,
        ] {
            self.regions.set(region, Fragment::Empty);
        }
        self.regions.set(
            RegionId::LiveUpdates,
            Fragment::Success("All forms cleared! Ready for new data entry.".into()),
        );
    }

    async fn post<T: serde::Serialize>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> Result<Envelope, TransportError> {
        let body = serde_json::to_value(body).unwrap_or(Value::Null);
        self.api.post(Family::Mongo, endpoint, body).await
    }

    fn apply(&self, region: RegionId, token: u64, fragment: Fragment) {
        if !self.regions.apply(region, token, fragment) {
            warn!(?region, "Discarding response superseded by a newer request");
        }
    }
}

fn rendered(family: Family, kind: &str, envelope: Envelope) -> Fragment {
    if envelope.success {
        render(family, kind, &envelope.data.unwrap_or(Value::Null))
    } else {
        Fragment::Error(format!("Error: {}", envelope.error.unwrap_or_default()))
    }
}

fn connection_error(family: Family, err: &TransportError) -> String {
    match family {
        Family::Mongo => "MongoDB Connection failed: Make sure MongoDB is running".into(),
        Family::Mysql => format!("MySQL Connection error: {}", err.0),
        Family::Reports => format!("Report generation failed: {}", err.0),
    }
}

fn server_error(envelope: Envelope) -> Fragment {
    Fragment::Error(format!("Error: {}", envelope.error.unwrap_or_default()))
}

fn text(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("")
}

fn price_text(price: &Option<Value>) -> String {
    match price {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}
