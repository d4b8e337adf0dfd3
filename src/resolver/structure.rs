//! Structure builder: reshapes an upstream product record into a
//! [`ProductStructure`].
//!
//! # Field priority
//!
//! | Target           | Source keys, first match wins  | Default      |
//! |------------------|--------------------------------|--------------|
//! | envelope         | `data`, then the record itself | -            |
//! | product id       | `id`                           | requested id |
//! | name             | `name`                         | `""`         |
//! | description      | `description`                  | `""`         |
//! | price            | `price`                        | `0.0`        |
//! | color variations | `colorVariations`, `colors`    | `[]`         |
//! | color name       | `name`                         | `""`         |
//! | color code       | `colorCode`, `hexCode`         | `#FFFFFF`    |
//! | images           | `images`                       | `[]`         |
//! | image url        | `url`, `imageUrl`, `src`       | image dropped|
//! | image view       | `view`, `viewType`             | none         |
//! | sizes            | `sizes`                        | `[]`         |
//! | size name        | `sizeName`, `name`             | `""`         |

use serde_json::Value;
use tracing::{debug, instrument};

use super::fields::{first_array, first_id, first_number, first_str};
use crate::backend::VendorBackend;
use crate::domain::{
    BaseProductSnapshot, ColorVariation, DesignApplication, ProductImage, ProductSize,
    ProductStructure, PLACEHOLDER_COLOR_CODE,
};
use crate::error::BackendError;

const ENVELOPE_FIELDS: &[&str] = &["data"];
const ID_FIELDS: &[&str] = &["id"];
const NAME_FIELDS: &[&str] = &["name"];
const DESCRIPTION_FIELDS: &[&str] = &["description"];
const PRICE_FIELDS: &[&str] = &["price"];
const COLOR_VARIATION_FIELDS: &[&str] = &["colorVariations", "colors"];
const COLOR_CODE_FIELDS: &[&str] = &["colorCode", "hexCode"];
const IMAGE_FIELDS: &[&str] = &["images"];
const IMAGE_URL_FIELDS: &[&str] = &["url", "imageUrl", "src"];
const IMAGE_VIEW_FIELDS: &[&str] = &["view", "viewType"];
const SIZE_FIELDS: &[&str] = &["sizes"];
const SIZE_NAME_FIELDS: &[&str] = &["sizeName", "name"];

/// Fetches base product `base_product_id` and normalizes it.
///
/// # Errors
/// Transport and status errors of the fetch are returned as-is; there is no retry.
#[instrument(skip(backend))]
pub async fn build_product_structure(
    backend: &dyn VendorBackend,
    base_product_id: u64,
) -> Result<ProductStructure, BackendError> {
    let record = backend.fetch_base_product(base_product_id).await?;
    let structure = normalize_product(base_product_id, &record);
    debug!(
        colors = structure.admin_product.color_variations.len(),
        sizes = structure.admin_product.sizes.len(),
        "Product structure built"
    );
    Ok(structure)
}

/// Applies the field priority table to a raw product record. Never fails.
pub fn normalize_product(requested_id: u64, record: &Value) -> ProductStructure {
    let product = ENVELOPE_FIELDS
        .iter()
        .filter_map(|key| record.get(*key))
        .find(|value| value.is_object())
        .unwrap_or(record);

    let color_variations = objects(first_array(product, COLOR_VARIATION_FIELDS))
        .map(normalize_color)
        .collect();
    let sizes = objects(first_array(product, SIZE_FIELDS)).map(normalize_size).collect();

    ProductStructure {
        admin_product: BaseProductSnapshot {
            id: first_id(product, ID_FIELDS).unwrap_or(requested_id),
            name: text(product, NAME_FIELDS),
            description: text(product, DESCRIPTION_FIELDS),
            price: first_number(product, PRICE_FIELDS).unwrap_or(0.0),
            color_variations,
            sizes,
        },
        design_application: DesignApplication::default(),
    }
}

fn objects(items: Option<&Vec<Value>>) -> impl Iterator<Item = &Value> {
    items.into_iter().flatten().filter(|item| item.is_object())
}

fn text(record: &Value, keys: &[&str]) -> String {
    first_str(record, keys).unwrap_or_default().to_string()
}

fn normalize_color(color: &Value) -> ColorVariation {
    ColorVariation {
        id: first_id(color, ID_FIELDS).unwrap_or(0),
        name: text(color, NAME_FIELDS),
        color_code: first_str(color, COLOR_CODE_FIELDS)
            .unwrap_or(PLACEHOLDER_COLOR_CODE)
            .to_string(),
        images: objects(first_array(color, IMAGE_FIELDS))
            .filter_map(normalize_image)
            .collect(),
    }
}

fn normalize_image(image: &Value) -> Option<ProductImage> {
    let url = first_str(image, IMAGE_URL_FIELDS)?;
    Some(ProductImage {
        id: first_id(image, ID_FIELDS),
        url: url.to_string(),
        view: first_str(image, IMAGE_VIEW_FIELDS).map(str::to_string),
    })
}

fn normalize_size(size: &Value) -> ProductSize {
    ProductSize {
        id: first_id(size, ID_FIELDS).unwrap_or(0),
        size_name: text(size, SIZE_NAME_FIELDS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_heterogeneous_field_names() {
        let record = json!({
            "id": 4,
            "name": "Mug",
            "description": "Céramique",
            "price": "3500",
            "colors": [
                {
                    "id": 11,
                    "name": "Rouge",
                    "hexCode": "#FF0000",
                    "images": [
                        { "id": 1, "imageUrl": "https://cdn/front.png", "viewType": "Front" },
                        { "src": "https://cdn/back.png" },
                        { "id": 3 }
                    ]
                },
                "not-an-object"
            ],
            "sizes": [{ "id": 2, "name": "Standard" }]
        });

        let structure = normalize_product(4, &record);
        let product = &structure.admin_product;

        assert_eq!(product.name, "Mug");
        assert_eq!(product.price, 3500.0);
        assert_eq!(product.color_variations.len(), 1);

        let color = &product.color_variations[0];
        assert_eq!(color.color_code, "#FF0000");
        assert_eq!(color.images.len(), 2);
        assert_eq!(color.images[0].url, "https://cdn/front.png");
        assert_eq!(color.images[0].view.as_deref(), Some("Front"));
        assert_eq!(color.images[1].id, None);

        assert_eq!(product.sizes, vec![ProductSize { id: 2, size_name: "Standard".to_string() }]);
    }

    #[test]
    fn test_primary_keys_beat_fallbacks() {
        let record = json!({
            "id": 4,
            "colorVariations": [{ "id": 1, "name": "Bleu", "colorCode": "#0000FF", "hexCode": "#000000" }],
            "colors": [{ "id": 9 }],
            "sizes": [{ "id": 5, "sizeName": "XL", "name": "Extra large" }]
        });

        let product = normalize_product(4, &record).admin_product;
        assert_eq!(product.color_variations[0].id, 1);
        assert_eq!(product.color_variations[0].color_code, "#0000FF");
        assert_eq!(product.sizes[0].size_name, "XL");
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let product = normalize_product(8, &json!({})).admin_product;

        assert_eq!(product.id, 8);
        assert_eq!(product.name, "");
        assert_eq!(product.price, 0.0);
        assert!(product.color_variations.is_empty());
        assert!(product.sizes.is_empty());
    }

    #[test]
    fn test_data_envelope_is_unwrapped() {
        let record = json!({ "data": { "id": 5, "name": "Casquette" } });
        let structure = normalize_product(5, &record);

        assert_eq!(structure.admin_product.name, "Casquette");
        assert_eq!(structure.design_application, DesignApplication::default());
    }
}
