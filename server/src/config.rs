use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

pub struct Config {
    pub port: u16,
    /// Connection parameters for the real store collaborators. The mock
    /// store never dials them; they exist so a real backend can be
    /// dropped in without a config change.
    pub mongo_url: String,
    pub mysql_host: String,
    pub mysql_user: String,
    pub mysql_database: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("DASHBOARD_PORT", "3000"),
            mongo_url: try_load("MONGO_URL", "mongodb://localhost:27017"),
            mysql_host: try_load("MYSQL_HOST", "localhost"),
            mysql_user: try_load("MYSQL_USER", "root"),
            mysql_database: try_load("MYSQL_DATABASE", "ecommerce"),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
