use std::fmt;

/// Lowest id the platform hands out to vendor products. Ids below are
/// reserved for non-vendor entities.
pub const VENDOR_ID_FLOOR: u64 = 60;

/// Identifies one resolution: a base product combined with a design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolutionKey {
    pub base_product_id: u64,
    pub design_id: u64,
}

impl ResolutionKey {
    pub fn new(base_product_id: u64, design_id: u64) -> Self {
        Self {
            base_product_id,
            design_id,
        }
    }
}

impl fmt::Display for ResolutionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "base_product={} design={}", self.base_product_id, self.design_id)
    }
}

/// Server-side id of a vendor product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VendorProductId(pub u64);

impl VendorProductId {
    /// Whether the id sits in the range reserved for vendor products.
    ///
    /// Only reported, never enforced: nothing downstream is known to rely on it.
    pub fn follows_vendor_convention(&self) -> bool {
        self.0 >= VENDOR_ID_FLOOR
    }
}

impl fmt::Display for VendorProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
