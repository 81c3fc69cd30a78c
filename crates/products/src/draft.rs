//! Editor draft for the product form.

use serde::Serialize;

use stockdeck_core::{int_or_zero, ClientError, ClientResult, EntityId};

use crate::product::Product;

/// Draft state behind the add/edit product form.
///
/// Numeric fields stay free-form text until submit; coercion happens in
/// [`ProductDraft::payload`], not while the user types.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductDraft {
    pub name: String,
    pub sku: String,
    pub stock: String,
    pub reorder_level: String,
    pub supplier_id: String,
}

/// Request body for product create/update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductPayload {
    pub name: String,
    pub sku: String,
    pub stock: i64,
    pub reorder_level: i64,
    pub supplier_id: Option<EntityId>,
}

impl ProductDraft {
    /// Pre-fill for editing, resolving the supplier reference from whichever
    /// field the cached product carries.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            sku: product.sku.clone(),
            stock: product.stock.to_string(),
            reorder_level: product.reorder_level.to_string(),
            supplier_id: product
                .effective_supplier_id()
                .map(|id| id.to_string())
                .unwrap_or_default(),
        }
    }

    /// Required-field check. Blocks before any network call.
    pub fn validate(&self) -> ClientResult<()> {
        if self.name.is_empty() || self.sku.is_empty() {
            return Err(ClientError::validation("product name and SKU are required"));
        }
        Ok(())
    }

    /// Build the request body. Numeric fields coerce with a zero fallback;
    /// an empty supplier field becomes a null foreign key.
    pub fn payload(&self) -> ProductPayload {
        ProductPayload {
            name: self.name.clone(),
            sku: self.sku.clone(),
            stock: int_or_zero(&self.stock),
            reorder_level: int_or_zero(&self.reorder_level),
            supplier_id: self.supplier_id.parse::<EntityId>().ok(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::SupplierRef;

    fn filled_draft() -> ProductDraft {
        ProductDraft {
            name: "Laptop".to_string(),
            sku: "LPT-001".to_string(),
            stock: "12".to_string(),
            reorder_level: "3".to_string(),
            supplier_id: "5".to_string(),
        }
    }

    #[test]
    fn validate_requires_name_and_sku() {
        let mut draft = filled_draft();
        draft.name.clear();
        assert!(matches!(
            draft.validate(),
            Err(ClientError::Validation(_))
        ));

        let mut draft = filled_draft();
        draft.sku.clear();
        assert!(draft.validate().is_err());

        assert!(filled_draft().validate().is_ok());
    }

    #[test]
    fn payload_coerces_numeric_fields() {
        let mut draft = filled_draft();
        draft.stock = String::new();
        draft.reorder_level = "oops".to_string();

        let payload = draft.payload();
        assert_eq!(payload.stock, 0);
        assert_eq!(payload.reorder_level, 0);
    }

    #[test]
    fn payload_serializes_empty_stock_as_zero() {
        let mut draft = filled_draft();
        draft.stock = String::new();

        let json = serde_json::to_value(draft.payload()).unwrap();
        assert_eq!(json["stock"], serde_json::json!(0));
    }

    #[test]
    fn empty_supplier_becomes_null() {
        let mut draft = filled_draft();
        draft.supplier_id = String::new();

        let payload = draft.payload();
        assert_eq!(payload.supplier_id, None);

        let json = serde_json::to_value(payload).unwrap();
        assert_eq!(json["supplier_id"], serde_json::Value::Null);
    }

    #[test]
    fn prefill_resolves_embedded_supplier() {
        let product = Product {
            id: EntityId::new(3),
            name: "Desk".to_string(),
            sku: "DSK-9".to_string(),
            stock: 4,
            reorder_level: 2,
            supplier_id: None,
            supplier: Some(SupplierRef {
                id: EntityId::new(8),
                name: None,
            }),
        };

        let draft = ProductDraft::from_product(&product);
        assert_eq!(draft.supplier_id, "8");
        assert_eq!(draft.stock, "4");
    }

    #[test]
    fn reset_returns_to_empty_shape() {
        let mut draft = filled_draft();
        draft.reset();
        assert_eq!(draft, ProductDraft::default());
    }
}
