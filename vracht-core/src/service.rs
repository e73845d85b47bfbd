//! High-level service facade combining all carrier providers.

use std::sync::Arc;

use crate::model::{CarrierId, Dispatch, Order, Picking, RateQuote};
use crate::plugin::CarrierRegistry;
use crate::ports::CarrierError;

/// Public entry point for rating, sending, and tracking shipments.
pub struct DeliveryService {
    registry: Arc<CarrierRegistry>,
}

impl DeliveryService {
    /// Create a new service bound to the provided registry.
    #[must_use]
    pub fn new(registry: Arc<CarrierRegistry>) -> Self {
        Self { registry }
    }

    /// List all available carriers and their display names.
    #[must_use]
    pub fn carriers(&self) -> Vec<(CarrierId, String)> {
        self.registry
            .carriers()
            .into_iter()
            .map(|meta| (meta.id, meta.name))
            .collect()
    }

    /// Estimate the shipping price of an order with the given carrier.
    ///
    /// # Errors
    ///
    /// Returns a [`CarrierError`] if the carrier is unsupported. Rating itself
    /// does not fail; degraded estimates carry a warning on the quote.
    pub fn rate(&self, carrier: &CarrierId, order: &Order) -> Result<RateQuote, CarrierError> {
        let plugin = self.registry.plugin(carrier)?;
        Ok(plugin.rating_port.rate(order))
    }

    /// Submit pickings to the given carrier, strictly in order.
    ///
    /// # Errors
    ///
    /// Returns a [`CarrierError`] if the carrier is unsupported, unconfigured,
    /// an address fails validation, or the carrier API call fails. The first
    /// failing picking aborts the remainder of the batch.
    pub async fn send(
        &self,
        carrier: &CarrierId,
        pickings: &[Picking],
    ) -> Result<Vec<Dispatch>, CarrierError> {
        let plugin = self.registry.plugin(carrier)?;
        plugin.shipping_port.send(pickings).await
    }

    /// Build a customer-facing tracking URL for a dispatched picking.
    ///
    /// # Errors
    ///
    /// Returns a [`CarrierError`] if the carrier is unsupported. An empty
    /// string means the link cannot be derived from the available data.
    pub fn tracking_link(
        &self,
        carrier: &CarrierId,
        picking: &Picking,
    ) -> Result<String, CarrierError> {
        let plugin = self.registry.plugin(carrier)?;
        Ok(plugin.shipping_port.tracking_link(picking))
    }

    /// Cancel previously submitted pickings with the given carrier.
    ///
    /// # Errors
    ///
    /// Returns a [`CarrierError`] if the carrier is unsupported or, like
    /// PostNL, has no cancel operation in its API.
    pub fn cancel(&self, carrier: &CarrierId, pickings: &[Picking]) -> Result<(), CarrierError> {
        let plugin = self.registry.plugin(carrier)?;
        plugin.shipping_port.cancel(pickings)
    }
}
