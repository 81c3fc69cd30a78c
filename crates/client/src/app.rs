//! The dashboard aggregate: session, gateway, caches, and editors wired
//! together.
//!
//! Control flow follows the session: signing in (or restoring a persisted
//! session) triggers the bulk reload, every successful mutation splices the
//! server's response into the caches, and a 401 anywhere tears the whole
//! session down. One transient banner carries the most recent failure;
//! successful operations clear it.

use stockdeck_auth::{
    Credential, Profile, Role, SessionStore, SessionTransition, SessionVault, UserAccount,
};
use stockdeck_core::{ApiConfig, ClientError, ClientResult, EntityId};
use stockdeck_dashboard::{filter_products, DashboardStats};
use stockdeck_parties::{Supplier, SupplierDraft};
use stockdeck_products::{Product, ProductDraft};
use stockdeck_sales::{Order, OrderDraft};

use crate::account::{self, RegisterForm, Registration};
use crate::gateway::{expect_success, parse_json, Gateway};
use crate::sync::Synchronizer;

const LOAD_FAILURE: &str = "Failed to load data. Check that the backend server is running.";
const ADMIN_DOWNGRADE_WARNING: &str =
    "Account created but admin key was not accepted — account created as User.";

pub struct Dashboard<V> {
    session: SessionStore<V>,
    gateway: Gateway,
    sync: Synchronizer,
    banner: Option<String>,

    product_draft: ProductDraft,
    supplier_draft: SupplierDraft,
    order_draft: OrderDraft,
    editing_product: Option<EntityId>,
}

impl<V: SessionVault> Dashboard<V> {
    /// Restore any persisted session from the vault. Call [`Dashboard::resume`]
    /// afterwards to load data for a restored session.
    pub fn new(config: ApiConfig, vault: V) -> Self {
        let session = SessionStore::restore(vault);
        let mut gateway = Gateway::new(config);
        if let Some(token) = session.token() {
            gateway.set_token(token.to_string());
        }

        Self {
            session,
            gateway,
            sync: Synchronizer::new(),
            banner: None,
            product_draft: ProductDraft::default(),
            supplier_draft: SupplierDraft::default(),
            order_draft: OrderDraft::default(),
            editing_product: None,
        }
    }

    /// Load collections for a session restored from the vault; no-op when
    /// logged out.
    pub async fn resume(&mut self) -> ClientResult<()> {
        if !self.session.is_authenticated() {
            return Ok(());
        }
        self.reload_all().await
    }

    // ---------------- session ----------------

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn username(&self) -> Option<&str> {
        self.session.username()
    }

    pub fn role(&self) -> Role {
        self.session.role()
    }

    /// The most recent failure message, if any.
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    /// POST `/auth/login/`, install the credential, and load data.
    ///
    /// Returns `Ok` once authenticated; a failed initial load leaves the
    /// user signed in with the failure on the banner.
    pub async fn login(&mut self, username: &str, password: &str) -> ClientResult<()> {
        match account::login(&self.gateway, username, password).await {
            Ok(credential) => {
                self.banner = None;
                self.install_credential(credential).await
            }
            Err(err) => {
                self.banner = Some(auth_failure_text(&err));
                Err(err)
            }
        }
    }

    /// POST `/auth/register/`, install the credential, and load data.
    ///
    /// When Admin was requested but not granted, the downgrade warning lands
    /// on the banner even though registration succeeded.
    pub async fn register(&mut self, form: &RegisterForm) -> ClientResult<Registration> {
        match account::register(&self.gateway, form).await {
            Ok(registration) => {
                self.banner = None;
                self.install_credential(registration.credential.clone()).await?;
                if registration.downgraded {
                    self.banner = Some(ADMIN_DOWNGRADE_WARNING.to_string());
                }
                Ok(registration)
            }
            Err(err @ ClientError::Validation(_)) => Err(err),
            Err(err) => {
                self.banner = Some(auth_failure_text(&err));
                Err(err)
            }
        }
    }

    /// Best-effort server-side logout, then unconditional local teardown.
    pub async fn logout(&mut self) {
        if self.gateway.has_token() {
            account::logout(&self.gateway).await;
        }
        self.teardown_session();
    }

    async fn install_credential(&mut self, credential: Credential) -> ClientResult<()> {
        self.gateway.set_token(credential.token().to_string());
        let transition = self.session.set_credential(credential)?;

        // Signing in (or swapping credentials) triggers the bulk reload.
        // Load failures land on the banner and leave the user signed in.
        if matches!(
            transition,
            SessionTransition::SignedIn | SessionTransition::Renewed
        ) && self.reload_all().await.is_err()
        {
            tracing::warn!("initial load after sign-in failed");
        }
        Ok(())
    }

    /// Forced logout: clear the vault, the token, the caches, and any edit
    /// in progress.
    fn teardown_session(&mut self) {
        if let Err(err) = self.session.clear() {
            tracing::warn!("failed to clear persisted session: {err}");
        }
        self.gateway.clear_token();
        self.sync.clear_all();
        self.editing_product = None;
    }

    /// Route a finished operation's outcome into the banner, and turn any
    /// 401 into session teardown. Validation failures block at the form and
    /// never touch the banner.
    fn settle<T>(&mut self, result: ClientResult<T>, failure: &str) -> ClientResult<T> {
        match &result {
            Ok(_) => self.banner = None,
            Err(ClientError::SessionExpired) => self.teardown_session(),
            Err(ClientError::Validation(_)) => {}
            Err(_) => self.banner = Some(failure.to_string()),
        }
        result
    }

    // ---------------- data ----------------

    pub fn products(&self) -> &[Product] {
        self.sync.products().items()
    }

    pub fn suppliers(&self) -> &[Supplier] {
        self.sync.suppliers().items()
    }

    pub fn orders(&self) -> &[Order] {
        self.sync.orders().items()
    }

    /// Overview aggregates, recomputed from the current caches.
    pub fn stats(&self) -> DashboardStats {
        DashboardStats::compute(self.products(), self.suppliers(), self.orders())
    }

    /// Products matching the search box.
    pub fn filtered_products(&self, query: &str) -> Vec<&Product> {
        filter_products(self.products(), query)
    }

    /// Reload all three collections in one all-or-nothing batch.
    pub async fn reload_all(&mut self) -> ClientResult<()> {
        let result = self.sync.reload_all(&self.gateway).await;
        self.settle(result, LOAD_FAILURE)
    }

    // ---------------- product editor ----------------

    pub fn product_draft(&self) -> &ProductDraft {
        &self.product_draft
    }

    pub fn product_draft_mut(&mut self) -> &mut ProductDraft {
        &mut self.product_draft
    }

    pub fn editing_product(&self) -> Option<EntityId> {
        self.editing_product
    }

    /// Pre-fill the product form from the cache. Returns false when the id
    /// is not cached (stale quick-list click).
    pub fn begin_product_edit(&mut self, id: EntityId) -> bool {
        match self.sync.products().get(id) {
            Some(product) => {
                self.product_draft = ProductDraft::from_product(product);
                self.editing_product = Some(id);
                true
            }
            None => false,
        }
    }

    pub fn cancel_product_edit(&mut self) {
        self.editing_product = None;
        self.product_draft.reset();
    }

    /// Submit the product form: POST when adding, PUT when editing.
    pub async fn submit_product(&mut self) -> ClientResult<()> {
        let updating = self.editing_product.is_some();
        let result = self.submit_product_inner().await;
        let failure = if updating {
            "Could not update product."
        } else {
            "Could not create product."
        };
        self.settle(result, failure)
    }

    async fn submit_product_inner(&mut self) -> ClientResult<()> {
        self.product_draft.validate()?;
        let payload = self.product_draft.payload();

        match self.editing_product {
            None => {
                let resp = self.gateway.post("/products/", &payload).await?;
                let resp = expect_success(resp).await?;
                let product: Product = parse_json(resp).await?;
                self.sync.products_mut().insert(product);
            }
            Some(id) => {
                let resp = self.gateway.put(&format!("/products/{id}/"), &payload).await?;
                let resp = expect_success(resp).await?;
                let product: Product = parse_json(resp).await?;
                self.sync.products_mut().apply_update(product);
                self.editing_product = None;
            }
        }

        self.product_draft.reset();
        Ok(())
    }

    /// DELETE a product and drop it from the cache.
    pub async fn delete_product(&mut self, id: EntityId) -> ClientResult<()> {
        let result = self.delete_product_inner(id).await;
        self.settle(result, "Could not delete product.")
    }

    async fn delete_product_inner(&mut self, id: EntityId) -> ClientResult<()> {
        let resp = self.gateway.delete(&format!("/products/{id}/")).await?;
        expect_success(resp).await?;
        self.sync.products_mut().remove(id);
        Ok(())
    }

    // ---------------- supplier editor ----------------

    pub fn supplier_draft(&self) -> &SupplierDraft {
        &self.supplier_draft
    }

    pub fn supplier_draft_mut(&mut self) -> &mut SupplierDraft {
        &mut self.supplier_draft
    }

    /// Pre-fill the supplier form from the cache; the draft carries the id,
    /// turning the next submit into an update.
    pub fn begin_supplier_edit(&mut self, id: EntityId) -> bool {
        match self.sync.suppliers().get(id) {
            Some(supplier) => {
                self.supplier_draft = SupplierDraft::from_supplier(supplier);
                true
            }
            None => false,
        }
    }

    /// Submit the supplier form: one form serves create and update.
    pub async fn submit_supplier(&mut self) -> ClientResult<()> {
        let updating = self.supplier_draft.is_update();
        let result = self.submit_supplier_inner().await;
        let failure = if updating {
            "Could not update supplier."
        } else {
            "Could not create supplier."
        };
        self.settle(result, failure)
    }

    async fn submit_supplier_inner(&mut self) -> ClientResult<()> {
        self.supplier_draft.validate()?;
        let payload = self.supplier_draft.payload();

        match self.supplier_draft.id {
            Some(id) => {
                let resp = self.gateway.put(&format!("/suppliers/{id}/"), &payload).await?;
                let resp = expect_success(resp).await?;
                let supplier: Supplier = parse_json(resp).await?;
                self.sync.suppliers_mut().apply_update(supplier);
            }
            None => {
                let resp = self.gateway.post("/suppliers/", &payload).await?;
                let resp = expect_success(resp).await?;
                let supplier: Supplier = parse_json(resp).await?;
                self.sync.suppliers_mut().insert(supplier);
            }
        }

        self.supplier_draft.reset();
        Ok(())
    }

    // ---------------- order editor ----------------

    pub fn order_draft(&self) -> &OrderDraft {
        &self.order_draft
    }

    pub fn order_draft_mut(&mut self) -> &mut OrderDraft {
        &mut self.order_draft
    }

    /// Submit the new-order form. Orders are create-only; fresh rows go to
    /// the front of the cache for newest-first display.
    pub async fn submit_order(&mut self) -> ClientResult<()> {
        let result = self.submit_order_inner().await;
        self.settle(result, "Could not create order.")
    }

    async fn submit_order_inner(&mut self) -> ClientResult<()> {
        self.order_draft.validate()?;
        let payload = self.order_draft.payload();

        let resp = self.gateway.post("/orders/", &payload).await?;
        let resp = expect_success(resp).await?;
        let order: Order = parse_json(resp).await?;
        self.sync.orders_mut().insert(order);

        self.order_draft.reset();
        Ok(())
    }

    // ---------------- profile & users ----------------

    pub async fn fetch_profile(&mut self) -> ClientResult<Profile> {
        let result = account::fetch_profile(&self.gateway).await;
        self.settle(result, "Failed to load profile.")
    }

    pub async fn save_profile(&mut self, profile: &Profile) -> ClientResult<String> {
        let result = account::update_profile(&self.gateway, profile).await;
        self.settle(result, "Failed to update profile.")
    }

    pub async fn change_password(
        &mut self,
        old_password: &str,
        new_password: &str,
    ) -> ClientResult<String> {
        let result = account::change_password(&self.gateway, old_password, new_password).await;
        self.settle(result, "Failed to change password.")
    }

    pub async fn list_users(&mut self) -> ClientResult<Vec<UserAccount>> {
        let result = account::list_users(&self.gateway).await;
        let failure = match &result {
            Err(ClientError::Forbidden) => "You are not allowed to view users.",
            _ => "Failed to load users.",
        };
        self.settle(result, failure)
    }
}

/// Banner text for a failed login/register: the server's own message when it
/// sent one, otherwise a generic line.
fn auth_failure_text(err: &ClientError) -> String {
    match err {
        ClientError::Api { body, .. } if !body.is_empty() => body.clone(),
        ClientError::Network(_) => "Could not reach server.".to_string(),
        _ => "Invalid username or password.".to_string(),
    }
}
