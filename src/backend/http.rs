use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::{debug, instrument};

use super::VendorBackend;
use crate::domain::VendorProductCreate;
use crate::error::BackendError;

/// [`VendorBackend`] over the platform's REST API.
///
/// Session cookies, auth headers and timeouts belong to the injected
/// [`reqwest::Client`].
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn read_json(response: Response) -> Result<Value, BackendError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(BackendError::Status {
            status: status.as_u16(),
            body,
        });
    }
    response.json::<Value>().await.map_err(|e| BackendError::Decode(e.to_string()))
}

#[async_trait]
impl VendorBackend for HttpBackend {
    #[instrument(skip(self))]
    async fn fetch_base_product(&self, id: u64) -> Result<Value, BackendError> {
        debug!("Sending request");
        let response = self.client.get(self.url(&format!("/products/{}", id))).send().await?;
        read_json(response).await
    }

    #[instrument(skip(self))]
    async fn list_vendor_products(&self, limit: usize) -> Result<Value, BackendError> {
        debug!("Sending request");
        let response = self
            .client
            .get(self.url("/vendor/products"))
            .query(&[("limit", limit)])
            .send()
            .await?;
        read_json(response).await
    }

    #[instrument(
        fields(base_product_id = payload.base_product_id, design_id = payload.design_id),
        skip(self, payload)
    )]
    async fn create_vendor_product(&self, payload: &VendorProductCreate) -> Result<Value, BackendError> {
        debug!("Sending request");
        let response = self.client.post(self.url("/vendor/products")).json(payload).send().await?;
        read_json(response).await
    }
}
