//! Registry for all carrier plugins and their ports.

use std::collections::HashMap;
use std::sync::Arc;

use crate::model::{CarrierId, CarrierMeta};
use crate::ports::{CarrierError, RatingPort, ShippingPort};

/// Collection of ports implementing a provider for a single carrier.
pub struct CarrierPlugin {
    /// Static metadata describing the carrier.
    pub meta: CarrierMeta,
    /// Implementation for estimating shipping prices.
    pub rating_port: Arc<dyn RatingPort>,
    /// Implementation for submitting and tracking shipments.
    pub shipping_port: Arc<dyn ShippingPort>,
}

/// Registry that resolves plugins by carrier identifier.
pub struct CarrierRegistry {
    plugins: HashMap<CarrierId, CarrierPlugin>,
}

impl CarrierRegistry {
    /// Build a registry from the provided plugin list.
    #[must_use]
    pub fn new(plugins: Vec<CarrierPlugin>) -> Self {
        let plugins_map = plugins
            .into_iter()
            .map(|plugin| (plugin.meta.id.clone(), plugin))
            .collect();
        Self {
            plugins: plugins_map,
        }
    }

    /// Return metadata for all registered carriers.
    #[must_use]
    pub fn carriers(&self) -> Vec<CarrierMeta> {
        self.plugins
            .values()
            .map(|plugin| plugin.meta.clone())
            .collect()
    }

    /// Iterator over carrier metadata.
    pub fn carriers_iter(&self) -> impl Iterator<Item = &CarrierMeta> {
        self.plugins.values().map(|plugin| &plugin.meta)
    }

    /// Look up a plugin for the given carrier.
    ///
    /// # Errors
    ///
    /// Returns [`CarrierError::UnsupportedCarrier`] when no plugin is registered.
    pub fn plugin(&self, carrier: &CarrierId) -> Result<&CarrierPlugin, CarrierError> {
        self.plugins
            .get(carrier)
            .ok_or(CarrierError::UnsupportedCarrier)
    }
}

#[cfg(test)]
mod tests {
    use super::CarrierRegistry;
    use crate::model::CarrierId;
    use crate::ports::CarrierError;

    #[test]
    fn empty_registry_reports_unsupported_carrier() {
        let registry = CarrierRegistry::new(Vec::new());
        let missing = registry.plugin(&CarrierId(String::from("postnl")));
        assert!(matches!(missing, Err(CarrierError::UnsupportedCarrier)));
    }
}
