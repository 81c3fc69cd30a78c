//! The Order entity as served by `/orders/`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockdeck_core::{int_or_zero, ClientError, ClientResult, EntityId, Keyed};

/// Order status lifecycle.
///
/// Anything the server sends outside the three known states deserializes as
/// `Unknown` instead of failing the whole list load; unknown orders are
/// excluded from every status count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Completed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Unknown => "unknown",
        }
    }
}

/// An order row. Orders are create-only from this client; the list shows
/// newest first, so fresh inserts go to the front of the cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: EntityId,
    pub order_number: String,
    pub product_id: EntityId,
    pub quantity: i64,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Keyed for Order {
    fn key(&self) -> EntityId {
        self.id
    }
}

/// Draft behind the new-order form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    pub order_number: String,
    pub product_id: String,
    pub quantity: String,
    pub status: OrderStatus,
}

impl Default for OrderDraft {
    fn default() -> Self {
        Self {
            order_number: String::new(),
            product_id: String::new(),
            quantity: String::new(),
            status: OrderStatus::Pending,
        }
    }
}

/// Request body for order create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderPayload {
    pub order_number: String,
    pub product_id: i64,
    pub quantity: i64,
    pub status: OrderStatus,
}

impl OrderDraft {
    /// Required-field check. Blocks before any network call.
    pub fn validate(&self) -> ClientResult<()> {
        if self.order_number.is_empty() || self.product_id.is_empty() || self.quantity.is_empty() {
            return Err(ClientError::validation(
                "order number, product and quantity are required",
            ));
        }
        Ok(())
    }

    pub fn payload(&self) -> OrderPayload {
        OrderPayload {
            order_number: self.order_number.clone(),
            product_id: int_or_zero(&self.product_id),
            quantity: int_or_zero(&self.quantity),
            status: self.status,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
