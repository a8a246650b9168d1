//! Scripted walk through every dashboard action against a running
//! server. Start the server first, then:
//!
//! ```sh
//! DASHBOARD_URL=http://localhost:3000 cargo run -p dashboard-client
//! ```

use std::{env, sync::Arc};

use dashboard_model::{
    kind::ViewKind,
    payloads::{NewOrder, NewUser},
};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use dashboard_client::{
    api::HttpApi,
    dispatch::{Action, Dispatcher},
    regions::RegionId,
};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let base = env::var("DASHBOARD_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
    info!("Dashboard client targeting {base}");

    let dispatcher = Dispatcher::new(Arc::new(HttpApi::new(base)));

    dispatcher.dispatch(Action::RunSelfTest).await;
    print_region(&dispatcher, "self-test", RegionId::LiveUpdates);

    for kind in ViewKind::server_backed() {
        dispatcher.dispatch(Action::Load(kind)).await;
        print_region(&dispatcher, kind.name(), RegionId::View(kind));
    }

    for kind in [
        ViewKind::SalesAnalytics,
        ViewKind::Segmentation,
        ViewKind::Association,
    ] {
        dispatcher.dispatch(Action::Load(kind)).await;
        print_region(&dispatcher, kind.name(), RegionId::View(kind));
    }

    dispatcher.set_user_form(NewUser {
        name: Some("Demo User".into()),
        email: Some("demo@example.com".into()),
        role: Some("customer".into()),
    });
    dispatcher.dispatch(Action::SubmitUser).await;
    print_region(&dispatcher, "add user", RegionId::UserResult);

    dispatcher.set_order_form(NewOrder {
        customer_email: Some("demo@example.com".into()),
        product_skus: vec!["LP-14".into(), "SP-01".into()],
    });
    dispatcher.dispatch(Action::SubmitOrder).await;
    print_region(&dispatcher, "create order", RegionId::OrderResult);

    let live = dispatcher.regions.live();
    println!(
        "live stats: {} users, {} products, {} orders",
        live.users, live.products, live.orders
    );
}

fn print_region(dispatcher: &Dispatcher, title: &str, region: RegionId) {
    println!("==== {title} ====");
    println!("{}", dispatcher.regions.fragment(region).text());
    println!();
}
