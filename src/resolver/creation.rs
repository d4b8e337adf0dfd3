use serde_json::Value;

use super::fields::first_id;
use crate::domain::VendorProductId;
use crate::error::ResolveError;

/// Places the new id may appear in a creation response, in priority order.
const CREATED_ID_FIELDS: &[&str] = &["productId", "data.productId", "id", "data.id"];

/// Pulls the new vendor product id out of a creation response.
///
/// # Errors
/// [`ResolveError::MissingVendorProductId`] when no accepted shape carries an id.
pub fn extract_created_id(response: &Value) -> Result<VendorProductId, ResolveError> {
    first_id(response, CREATED_ID_FIELDS)
        .map(VendorProductId)
        .ok_or_else(|| ResolveError::MissingVendorProductId {
            response: response.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepted_shapes() {
        assert_eq!(extract_created_id(&json!({ "productId": 71 })), Ok(VendorProductId(71)));
        assert_eq!(
            extract_created_id(&json!({ "success": true, "data": { "productId": 72 } })),
            Ok(VendorProductId(72))
        );
        assert_eq!(extract_created_id(&json!({ "id": "73" })), Ok(VendorProductId(73)));
    }

    #[test]
    fn test_top_level_product_id_wins() {
        let response = json!({ "id": 5, "productId": 74, "data": { "productId": 75 } });
        assert_eq!(extract_created_id(&response), Ok(VendorProductId(74)));
    }

    #[test]
    fn test_unrecognized_shape_is_descriptive() {
        let response = json!({ "success": true, "message": "Produit créé" });
        match extract_created_id(&response) {
            Err(ResolveError::MissingVendorProductId { response }) => {
                assert!(response.contains("Produit créé"));
            }
            other => panic!("Unexpected result: {:?}", other),
        }
    }
}
