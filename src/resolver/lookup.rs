use serde_json::Value;
use tracing::{debug, instrument};

use super::fields::{at_path, first_id};
use crate::backend::VendorBackend;
use crate::domain::{ResolutionKey, VendorProductId, VendorProductSummary};
use crate::error::BackendError;

/// Where the listing array may sit in the response, in priority order.
/// An empty path means the response itself.
const LISTING_FIELDS: &[&str] = &["data.products", "products", "data", ""];
const BASE_PRODUCT_FIELDS: &[&str] = &["baseProductId", "adminProductId", "baseProduct.id"];
const DESIGN_FIELDS: &[&str] = &["designId", "design.id"];
const ID_FIELDS: &[&str] = &["id"];

/// Result of looking for an existing vendor product.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Found(VendorProductId),
    NotFound,
    /// The listing could not be obtained or read. Resolution carries on as if
    /// nothing was found.
    LookupFailed(BackendError),
}

impl LookupOutcome {
    /// The existing id, if any. `LookupFailed` counts as not found.
    pub fn existing(&self) -> Option<VendorProductId> {
        match self {
            LookupOutcome::Found(id) => Some(*id),
            LookupOutcome::NotFound | LookupOutcome::LookupFailed(_) => None,
        }
    }
}

/// Lists up to `limit` vendor products and looks for one matching `key`.
///
/// Never fails: listing or decoding errors come back as
/// [`LookupOutcome::LookupFailed`].
#[instrument(fields(key = %key), skip(backend, key))]
pub async fn lookup_existing(backend: &dyn VendorBackend, limit: usize, key: &ResolutionKey) -> LookupOutcome {
    let summaries = match backend.list_vendor_products(limit).await.and_then(|response| parse_listing(&response)) {
        Ok(summaries) => summaries,
        Err(e) => return LookupOutcome::LookupFailed(e),
    };
    debug!(listed = summaries.len(), "Scanning vendor products");

    match find_match(&summaries, key) {
        Some(id) => LookupOutcome::Found(id),
        None => LookupOutcome::NotFound,
    }
}

/// Reads a listing response into summaries. Entries without an id are skipped.
///
/// # Errors
/// Returns [`BackendError::Decode`] when no known envelope holds an array.
pub fn parse_listing(response: &Value) -> Result<Vec<VendorProductSummary>, BackendError> {
    let entries = LISTING_FIELDS
        .iter()
        .filter_map(|path| if path.is_empty() { Some(response) } else { at_path(response, path) })
        .find_map(Value::as_array)
        .ok_or_else(|| BackendError::Decode("Unrecognized vendor product listing".to_string()))?;

    Ok(entries
        .iter()
        .filter_map(|entry| {
            Some(VendorProductSummary {
                id: VendorProductId(first_id(entry, ID_FIELDS)?),
                base_product_id: first_id(entry, BASE_PRODUCT_FIELDS),
                design_id: first_id(entry, DESIGN_FIELDS),
            })
        })
        .collect())
}

/// Exact match on both back-references; no fuzzy matching.
pub fn find_match(summaries: &[VendorProductSummary], key: &ResolutionKey) -> Option<VendorProductId> {
    summaries
        .iter()
        .find(|summary| {
            summary.base_product_id == Some(key.base_product_id) && summary.design_id == Some(key.design_id)
        })
        .map(|summary| summary.id)
}
