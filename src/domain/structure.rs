use serde::Serialize;

/// Scale applied to a design when it is placed on a base product.
pub const DESIGN_SCALE: f64 = 0.6;
/// Placement of a design on a base product.
pub const DESIGN_POSITIONING: &str = "CENTER";

/// Read-only snapshot of a base product plus the fixed design placement.
///
/// Built fresh for every resolution and sent along with the creation request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductStructure {
    pub admin_product: BaseProductSnapshot,
    pub design_application: DesignApplication,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseProductSnapshot {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub color_variations: Vec<ColorVariation>,
    pub sizes: Vec<ProductSize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorVariation {
    pub id: u64,
    pub name: String,
    pub color_code: String,
    pub images: Vec<ProductImage>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSize {
    pub id: u64,
    pub size_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignApplication {
    pub positioning: String,
    pub scale: f64,
}

impl Default for DesignApplication {
    fn default() -> Self {
        Self {
            positioning: DESIGN_POSITIONING.to_string(),
            scale: DESIGN_SCALE,
        }
    }
}
