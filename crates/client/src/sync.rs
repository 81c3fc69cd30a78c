//! Collection synchronizer: bulk reload and cache maintenance.
//!
//! The three list fetches go out together and are joined before anything is
//! committed — the reload is all-or-nothing. A 401 on any of the three
//! invalidates the whole batch and signals session teardown; any other
//! failure leaves the existing collections untouched.

use stockdeck_core::{ClientError, ClientResult};
use stockdeck_parties::Supplier;
use stockdeck_products::Product;
use stockdeck_sales::Order;

use crate::collection::Collection;
use crate::gateway::{parse_json, Gateway};

/// One consistent result of the three parallel list fetches.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub products: Vec<Product>,
    pub suppliers: Vec<Supplier>,
    pub orders: Vec<Order>,
}

/// Fan out the three list GETs, join them, and validate the batch.
///
/// Succeeds only when all three came back 2xx and parsed; the first 401
/// seen anywhere wins over every other outcome.
pub async fn fetch_snapshot(gateway: &Gateway) -> ClientResult<Snapshot> {
    let (products, suppliers, orders) = tokio::join!(
        gateway.get("/products/"),
        gateway.get("/suppliers/"),
        gateway.get("/orders/"),
    );
    let (products, suppliers, orders) = (products?, suppliers?, orders?);

    let statuses = [products.status(), suppliers.status(), orders.status()];
    if statuses.iter().any(|s| s.as_u16() == 401) {
        return Err(ClientError::SessionExpired);
    }
    if let Some(status) = statuses.iter().find(|s| !s.is_success()) {
        return Err(ClientError::api(status.as_u16(), "bulk reload failed"));
    }

    Ok(Snapshot {
        products: parse_json(products).await?,
        suppliers: parse_json(suppliers).await?,
        orders: parse_json(orders).await?,
    })
}

/// The three entity caches plus the reload bookkeeping.
pub struct Synchronizer {
    products: Collection<Product>,
    suppliers: Collection<Supplier>,
    orders: Collection<Order>,
    reload_seq: u64,
}

impl Synchronizer {
    pub fn new() -> Self {
        Self {
            products: Collection::appending(),
            suppliers: Collection::appending(),
            orders: Collection::prepending(),
            reload_seq: 0,
        }
    }

    pub fn products(&self) -> &Collection<Product> {
        &self.products
    }

    pub fn suppliers(&self) -> &Collection<Supplier> {
        &self.suppliers
    }

    pub fn orders(&self) -> &Collection<Order> {
        &self.orders
    }

    pub fn products_mut(&mut self) -> &mut Collection<Product> {
        &mut self.products
    }

    pub fn suppliers_mut(&mut self) -> &mut Collection<Supplier> {
        &mut self.suppliers
    }

    pub fn orders_mut(&mut self) -> &mut Collection<Order> {
        &mut self.orders
    }

    /// Stamp a reload about to be issued. Only the latest stamp may commit.
    pub fn stamp_reload(&mut self) -> u64 {
        self.reload_seq += 1;
        self.reload_seq
    }

    /// Commit a completed reload batch, unless a newer reload has been
    /// stamped since this one was issued — a stale batch is discarded so a
    /// fast logout/login cycle can never overwrite fresh state with old
    /// responses. Returns whether the snapshot was applied.
    pub fn commit_reload(&mut self, stamp: u64, snapshot: Snapshot) -> bool {
        if stamp != self.reload_seq {
            tracing::debug!(stamp, latest = self.reload_seq, "discarding stale reload");
            return false;
        }

        self.products.replace(snapshot.products);
        self.suppliers.replace(snapshot.suppliers);
        self.orders.replace(snapshot.orders);
        tracing::info!(
            products = self.products.len(),
            suppliers = self.suppliers.len(),
            orders = self.orders.len(),
            "collections reloaded"
        );
        true
    }

    /// Stamp, fetch, commit. The usual path; the split pieces exist for
    /// callers that interleave reloads.
    pub async fn reload_all(&mut self, gateway: &Gateway) -> ClientResult<()> {
        let stamp = self.stamp_reload();
        let snapshot = fetch_snapshot(gateway).await?;
        self.commit_reload(stamp, snapshot);
        Ok(())
    }

    /// Session teardown: empty all three caches.
    pub fn clear_all(&mut self) {
        self.products.clear();
        self.suppliers.clear();
        self.orders.clear();
    }
}

impl Default for Synchronizer {
    fn default() -> Self {
        Self::new()
    }
}
