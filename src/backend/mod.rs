//! Remote collaborators of the resolver.
//!
//! The backend hands back raw JSON; shaping it into domain types is the
//! resolver's job, since the platform does not name its fields consistently.

mod http;

pub use http::HttpBackend;

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::VendorProductCreate;
use crate::error::BackendError;

/// The three remote calls a resolution may issue.
#[async_trait]
pub trait VendorBackend: Send + Sync + 'static {
    /// `GET /products/{id}`
    async fn fetch_base_product(&self, id: u64) -> Result<Value, BackendError>;

    /// `GET /vendor/products?limit={limit}`
    async fn list_vendor_products(&self, limit: usize) -> Result<Value, BackendError>;

    /// `POST /vendor/products`
    async fn create_vendor_product(&self, payload: &VendorProductCreate) -> Result<Value, BackendError>;
}
