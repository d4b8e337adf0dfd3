//! Find-or-create of vendor products.
//!
//! [`VendorProductResolver::resolve`] runs lookup, structure build and
//! creation as one computation per [`ResolutionKey`], shared through the
//! injected [`ResolverCache`].

pub mod cache;
pub mod creation;
mod fields;
pub mod lookup;
pub mod structure;

pub use cache::{PendingResolution, ResolveOutcome, ResolverCache};
pub use creation::extract_created_id;
pub use lookup::{lookup_existing, LookupOutcome};
pub use structure::{build_product_structure, normalize_product};

use std::sync::Arc;

use tracing::{error, info, instrument, warn, Instrument};

use crate::backend::VendorBackend;
use crate::domain::{ResolutionKey, VendorProductCreate, VendorProductId};

pub const DEFAULT_LISTING_LIMIT: usize = 1000;
pub const DEFAULT_PLACEHOLDER_PRICE: u64 = 25000;

/// Knobs of a resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolverSettings {
    /// Page size of the existence check.
    pub listing_limit: usize,
    /// `vendorPrice` of newly created vendor products.
    pub placeholder_price: u64,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            listing_limit: DEFAULT_LISTING_LIMIT,
            placeholder_price: DEFAULT_PLACEHOLDER_PRICE,
        }
    }
}

/// Maps a base product and design to a vendor product id, creating the
/// vendor product on first use.
#[derive(Clone)]
pub struct VendorProductResolver {
    backend: Arc<dyn VendorBackend>,
    cache: ResolverCache,
    settings: ResolverSettings,
}

impl VendorProductResolver {
    pub fn new(backend: Arc<dyn VendorBackend>, cache: ResolverCache, settings: ResolverSettings) -> Self {
        Self {
            backend,
            cache,
            settings,
        }
    }

    pub fn cache(&self) -> &ResolverCache {
        &self.cache
    }

    pub fn settings(&self) -> ResolverSettings {
        self.settings
    }

    /// Returns the vendor product for `(base_product_id, design_id)`.
    ///
    /// Concurrent calls for the same pair share one lookup/creation sequence
    /// and get the same outcome. Nothing is retained once it completes.
    ///
    /// # Errors
    /// - [`ResolveError::Backend`](crate::error::ResolveError::Backend) when the
    ///   base product fetch or the creation call fails
    /// - [`ResolveError::MissingVendorProductId`](crate::error::ResolveError::MissingVendorProductId)
    ///   when the creation response carries no id
    #[instrument(skip(self))]
    pub async fn resolve(&self, base_product_id: u64, design_id: u64) -> ResolveOutcome {
        let key = ResolutionKey::new(base_product_id, design_id);
        let backend = Arc::clone(&self.backend);
        let settings = self.settings;

        self.cache
            .acquire(key, move || run_resolution(backend, settings, key).in_current_span())
            .wait()
            .await
    }
}

async fn run_resolution(backend: Arc<dyn VendorBackend>, settings: ResolverSettings, key: ResolutionKey) -> ResolveOutcome {
    // Step 1: Existence check
    match lookup_existing(backend.as_ref(), settings.listing_limit, &key).await {
        LookupOutcome::Found(id) => {
            info!(vendor_product_id = %id, "Existing vendor product found");
            flag_id_convention(id);
            return Ok(id);
        }
        LookupOutcome::NotFound => info!("No existing vendor product, creating one"),
        LookupOutcome::LookupFailed(e) => {
            warn!(error = %e, "Existence check failed, creating anyway");
        }
    }

    // Step 2: Structure
    let structure = build_product_structure(backend.as_ref(), key.base_product_id)
        .await
        .inspect_err(|e| error!(error = %e, "Base product fetch failed"))?;

    // Step 3: Creation
    let payload = VendorProductCreate::with_defaults(
        key.base_product_id,
        key.design_id,
        structure,
        settings.placeholder_price,
    );
    let response = backend
        .create_vendor_product(&payload)
        .await
        .inspect_err(|e| error!(error = %e, "Vendor product creation failed"))?;

    let id = extract_created_id(&response).inspect_err(|e| error!(error = %e, "Unusable creation response"))?;
    info!(vendor_product_id = %id, "Vendor product created");
    flag_id_convention(id);
    Ok(id)
}

fn flag_id_convention(id: VendorProductId) {
    if !id.follows_vendor_convention() {
        warn!(vendor_product_id = %id, "Id below the vendor product range");
    }
}
