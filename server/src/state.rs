use std::sync::Arc;

use tracing::info;

use crate::{
    config::Config,
    store::{MockStore, Store},
};

pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn Store>,
}

impl AppState {
    pub fn new() -> Arc<Self> {
        let config = Config::load();

        info!(
            mongo_url = %config.mongo_url,
            mysql_host = %config.mysql_host,
            "Real store collaborators configured but not dialed; serving mock data"
        );

        Arc::new(Self {
            config,
            store: Arc::new(MockStore::default()),
        })
    }

    /// State over an arbitrary store, used by the endpoint tests.
    pub fn with_store(store: Arc<dyn Store>) -> Arc<Self> {
        Arc::new(Self {
            config: Config::load(),
            store,
        })
    }
}
