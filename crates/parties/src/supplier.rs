//! The Supplier entity as served by `/suppliers/`.

use serde::{Deserialize, Serialize};

use stockdeck_core::{ClientError, ClientResult, EntityId, Keyed};

/// A supplier row. Products reference suppliers by id; suppliers do not own
/// products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub email: String,
}

impl Keyed for Supplier {
    fn key(&self) -> EntityId {
        self.id
    }
}

/// Draft behind the supplier form.
///
/// One form serves both create and update: a draft carrying an id submits
/// as an update of that supplier, an id-less draft submits as a create.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SupplierDraft {
    pub id: Option<EntityId>,
    pub name: String,
    pub contact: String,
    pub email: String,
}

/// Request body for supplier create/update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupplierPayload {
    pub name: String,
    pub contact: String,
    pub email: String,
}

impl SupplierDraft {
    /// Pre-fill for editing an existing supplier.
    pub fn from_supplier(supplier: &Supplier) -> Self {
        Self {
            id: Some(supplier.id),
            name: supplier.name.clone(),
            contact: supplier.contact.clone(),
            email: supplier.email.clone(),
        }
    }

    pub fn is_update(&self) -> bool {
        self.id.is_some()
    }

    /// Required-field check. Blocks before any network call.
    pub fn validate(&self) -> ClientResult<()> {
        if self.name.is_empty() {
            return Err(ClientError::validation("supplier name is required"));
        }
        Ok(())
    }

    pub fn payload(&self) -> SupplierPayload {
        SupplierPayload {
            name: self.name.clone(),
            contact: self.contact.clone(),
            email: self.email.clone(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
