//! # Checkout Gateway
//!
//! Port definition and HTTP adapter for the external checkout service.
//!
//! The checkout service owns the order form and is the engine's single
//! source of truth and only mutation point. The [`CheckoutGateway`] trait is
//! the seam the application layer depends on; [`HttpCheckoutGateway`] is its
//! REST adapter.

use crate::config::Settings;
use crate::infrastructure::checkout::error::CheckoutResult;
use crate::infrastructure::checkout::http_client::HttpClient;
use crate::infrastructure::checkout::types::{
    AssemblyOptionsBody, OrderFormSnapshot, SimulationRequest,
};
use crate::domain::value_objects::OrderFormId;
use async_trait::async_trait;

/// Port for checkout service operations consumed by the engine.
#[async_trait]
pub trait CheckoutGateway: Send + Sync {
    /// Prices a candidate tree without persisting anything.
    ///
    /// # Errors
    ///
    /// Returns a [`CheckoutError`](crate::infrastructure::checkout::CheckoutError)
    /// on network or service failures; simulation errors are never
    /// swallowed here.
    async fn simulate(&self, request: &SimulationRequest) -> CheckoutResult<OrderFormSnapshot>;

    /// Persists one slot's composition on the item at `item_index`.
    ///
    /// # Errors
    ///
    /// Fails independently per call; callers on the write path decide
    /// whether to swallow.
    async fn add_assembly_options(
        &self,
        order_form_id: &OrderFormId,
        item_index: usize,
        slot_key: &str,
        body: &AssemblyOptionsBody,
    ) -> CheckoutResult<OrderFormSnapshot>;

    /// Detaches one slot's composition from the item at `item_index`.
    ///
    /// # Errors
    ///
    /// Fails independently per call, symmetric to
    /// [`CheckoutGateway::add_assembly_options`].
    async fn remove_assembly_options(
        &self,
        order_form_id: &OrderFormId,
        item_index: usize,
        slot_key: &str,
        body: &AssemblyOptionsBody,
    ) -> CheckoutResult<OrderFormSnapshot>;
}

/// REST adapter for the checkout service.
#[derive(Debug, Clone)]
pub struct HttpCheckoutGateway {
    http: HttpClient,
    base_url: String,
}

impl HttpCheckoutGateway {
    /// Creates a gateway from engine settings.
    ///
    /// # Errors
    ///
    /// Returns a [`CheckoutError`](crate::infrastructure::checkout::CheckoutError)
    /// if the underlying HTTP client cannot be created.
    pub fn new(settings: &Settings) -> CheckoutResult<Self> {
        Ok(Self {
            http: HttpClient::new(settings.timeout_ms)?,
            base_url: settings.checkout_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a gateway that forwards the given default headers (session
    /// cookies, account headers) on every request.
    ///
    /// # Errors
    ///
    /// Returns a [`CheckoutError`](crate::infrastructure::checkout::CheckoutError)
    /// if the underlying HTTP client cannot be created.
    pub fn with_headers(
        settings: &Settings,
        headers: reqwest::header::HeaderMap,
    ) -> CheckoutResult<Self> {
        Ok(Self {
            http: HttpClient::with_headers(settings.timeout_ms, headers)?,
            base_url: settings.checkout_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn simulation_url(&self) -> String {
        format!("{}/pub/orderForms/simulation", self.base_url)
    }

    fn assembly_options_url(
        &self,
        order_form_id: &OrderFormId,
        item_index: usize,
        slot_key: &str,
    ) -> String {
        format!(
            "{}/pub/orderForm/{}/items/{}/assemblyOptions/{}",
            self.base_url, order_form_id, item_index, slot_key
        )
    }
}

#[async_trait]
impl CheckoutGateway for HttpCheckoutGateway {
    async fn simulate(&self, request: &SimulationRequest) -> CheckoutResult<OrderFormSnapshot> {
        tracing::debug!(items = request.items.len(), "submitting simulation");
        self.http.post(&self.simulation_url(), request).await
    }

    async fn add_assembly_options(
        &self,
        order_form_id: &OrderFormId,
        item_index: usize,
        slot_key: &str,
        body: &AssemblyOptionsBody,
    ) -> CheckoutResult<OrderFormSnapshot> {
        tracing::debug!(%order_form_id, item_index, slot_key, "adding assembly options");
        let url = self.assembly_options_url(order_form_id, item_index, slot_key);
        self.http.post(&url, body).await
    }

    async fn remove_assembly_options(
        &self,
        order_form_id: &OrderFormId,
        item_index: usize,
        slot_key: &str,
        body: &AssemblyOptionsBody,
    ) -> CheckoutResult<OrderFormSnapshot> {
        tracing::debug!(%order_form_id, item_index, slot_key, "removing assembly options");
        let url = self.assembly_options_url(order_form_id, item_index, slot_key);
        self.http.delete(&url, body).await
    }
}
