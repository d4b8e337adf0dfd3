use serde::Serialize;

use super::{ColorVariation, ProductSize, ProductStructure, VendorProductId};

pub const PLACEHOLDER_COLOR_NAME: &str = "Par défaut";
pub const PLACEHOLDER_COLOR_CODE: &str = "#FFFFFF";
pub const PLACEHOLDER_SIZE_NAME: &str = "TU";

/// One entry of the vendor product listing, with its back-references.
#[derive(Debug, Clone, PartialEq)]
pub struct VendorProductSummary {
    pub id: VendorProductId,
    pub base_product_id: Option<u64>,
    pub design_id: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedColor {
    pub id: u64,
    pub name: String,
    pub color_code: String,
}

impl SelectedColor {
    pub fn placeholder() -> Self {
        Self {
            id: 0,
            name: PLACEHOLDER_COLOR_NAME.to_string(),
            color_code: PLACEHOLDER_COLOR_CODE.to_string(),
        }
    }
}

impl From<&ColorVariation> for SelectedColor {
    fn from(color: &ColorVariation) -> Self {
        Self {
            id: color.id,
            name: color.name.clone(),
            color_code: color.color_code.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedSize {
    pub id: u64,
    pub size_name: String,
}

impl SelectedSize {
    pub fn placeholder() -> Self {
        Self {
            id: 0,
            size_name: PLACEHOLDER_SIZE_NAME.to_string(),
        }
    }
}

impl From<&ProductSize> for SelectedSize {
    fn from(size: &ProductSize) -> Self {
        Self {
            id: size.id,
            size_name: size.size_name.clone(),
        }
    }
}

/// Body of `POST /vendor/products`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorProductCreate {
    pub base_product_id: u64,
    pub design_id: u64,
    pub product_structure: ProductStructure,
    pub vendor_name: String,
    /// Left empty so the backend does not generate a description of its own.
    pub vendor_description: String,
    pub vendor_price: u64,
    pub vendor_stock: u32,
    pub selected_colors: Vec<SelectedColor>,
    pub selected_sizes: Vec<SelectedSize>,
}

impl VendorProductCreate {
    /// Builds the default creation payload for a base product and design.
    ///
    /// # Notes
    /// Every color and size of the structure is selected. When the structure
    /// has none, a single placeholder entry stands in so the backend always
    /// receives at least one of each.
    pub fn with_defaults(
        base_product_id: u64,
        design_id: u64,
        product_structure: ProductStructure,
        placeholder_price: u64,
    ) -> Self {
        let snapshot = &product_structure.admin_product;

        let mut selected_colors: Vec<SelectedColor> =
            snapshot.color_variations.iter().map(SelectedColor::from).collect();
        if selected_colors.is_empty() {
            selected_colors.push(SelectedColor::placeholder());
        }

        let mut selected_sizes: Vec<SelectedSize> =
            snapshot.sizes.iter().map(SelectedSize::from).collect();
        if selected_sizes.is_empty() {
            selected_sizes.push(SelectedSize::placeholder());
        }

        Self {
            base_product_id,
            design_id,
            product_structure,
            vendor_name: format!("Produit auto-généré {}", base_product_id),
            vendor_description: String::new(),
            vendor_price: placeholder_price,
            vendor_stock: 0,
            selected_colors,
            selected_sizes,
        }
    }
}
