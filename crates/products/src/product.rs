//! The Product entity as served by `/products/`.

use serde::{Deserialize, Serialize};

use stockdeck_core::{EntityId, Keyed};

/// Supplier reference as denormalized into product responses.
///
/// The backend may embed the full supplier object; only the id (for the
/// editor) and the name (for display) matter here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierRef {
    pub id: EntityId,
    #[serde(default)]
    pub name: Option<String>,
}

/// A product row. The local copy is a cache: every successful mutation
/// response replaces it wholesale, embedded supplier object included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: EntityId,
    pub name: String,
    pub sku: String,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub reorder_level: i64,
    #[serde(default)]
    pub supplier_id: Option<EntityId>,
    #[serde(default)]
    pub supplier: Option<SupplierRef>,
}

impl Product {
    /// Stock at or below the reorder level.
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.reorder_level
    }

    /// The supplier reference, whichever form the server sent it in.
    ///
    /// Fresh loads carry an embedded `supplier` object; some mutation
    /// responses carry a bare `supplier_id`. The bare id wins when both are
    /// present.
    pub fn effective_supplier_id(&self) -> Option<EntityId> {
        self.supplier_id.or_else(|| self.supplier.as_ref().map(|s| s.id))
    }

    /// Case-insensitive substring match on name or SKU; the empty query
    /// matches everything.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query) || self.sku.to_lowercase().contains(&query)
    }
}

impl Keyed for Product {
    fn key(&self) -> EntityId {
        self.id
    }
}
