use async_trait::async_trait;
use dashboard_model::{envelope::Envelope, kind::Family};
use serde_json::Value;
use thiserror::Error;

/// Transport failure: the call itself failed rather than the server
/// answering with `success:false`. The dispatcher renders these as a
/// connection-failure message naming the backend family.
#[derive(Error, Debug, Clone)]
#[error("transport failure: {0}")]
pub struct TransportError(pub String);

#[async_trait]
pub trait Api: Send + Sync {
    async fn get(&self, family: Family, endpoint: &str) -> Result<Envelope, TransportError>;
    async fn post(
        &self,
        family: Family,
        endpoint: &str,
        body: Value,
    ) -> Result<Envelope, TransportError>;
}

/// Production transport over reqwest. One fire-and-forget request per
/// call, no retries, no timeout beyond reqwest's defaults.
pub struct HttpApi {
    base: String,
    http: reqwest::Client,
}

impl HttpApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, family: Family, endpoint: &str) -> String {
        format!("{}{}/{}", self.base, family.base_path(), endpoint)
    }
}

#[async_trait]
impl Api for HttpApi {
    async fn get(&self, family: Family, endpoint: &str) -> Result<Envelope, TransportError> {
        self.http
            .get(self.url(family, endpoint))
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?
            .json()
            .await
            .map_err(|e| TransportError(e.to_string()))
    }

    async fn post(
        &self,
        family: Family,
        endpoint: &str,
        body: Value,
    ) -> Result<Envelope, TransportError> {
        self.http
            .post(self.url(family, endpoint))
            .json(&body)
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?
            .json()
            .await
            .map_err(|e| TransportError(e.to_string()))
    }
}
