#[tokio::main]
async fn main() {
    dashboard_server::start_server().await;
}
