//! Overview aggregates and filtered views.

use stockdeck_parties::Supplier;
use stockdeck_products::Product;
use stockdeck_sales::{Order, OrderStatus};

/// The overview tiles: counts, stock totals, and the order-status partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub total_products: usize,
    pub total_suppliers: usize,
    pub total_stock_qty: i64,
    pub low_stock_count: usize,
    pub pending_orders: usize,
    pub completed_orders: usize,
    pub cancelled_orders: usize,
}

impl DashboardStats {
    /// Recompute everything from the current collections.
    ///
    /// Orders with a status outside the three known states are counted in
    /// none of the partitions.
    pub fn compute(products: &[Product], suppliers: &[Supplier], orders: &[Order]) -> Self {
        let mut stats = Self {
            total_products: products.len(),
            total_suppliers: suppliers.len(),
            ..Self::default()
        };

        for product in products {
            stats.total_stock_qty += product.stock;
            if product.is_low_stock() {
                stats.low_stock_count += 1;
            }
        }

        for order in orders {
            match order.status {
                OrderStatus::Pending => stats.pending_orders += 1,
                OrderStatus::Completed => stats.completed_orders += 1,
                OrderStatus::Cancelled => stats.cancelled_orders += 1,
                OrderStatus::Unknown => {}
            }
        }

        stats
    }
}

/// Products matching the search box, in collection order.
///
/// Case-insensitive substring match against name or SKU; the empty query
/// returns the full list unchanged.
pub fn filter_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    products.iter().filter(|p| p.matches_query(query)).collect()
}

/// The last `n` items, newest first — the "recent activity" panel.
pub fn recent<T>(items: &[T], n: usize) -> Vec<&T> {
    items.iter().rev().take(n).collect()
}
