//! Carrier provider for PostNL, using the Shipping API for booking and labels.
//!
//! PostNL has no rate or cancel API: prices come from the host's weight-tier
//! catalog and cancellation is rejected as unsupported.

use std::sync::Arc;

use reqwest::Client;

use vracht_core::{
    model::{CarrierId, CarrierMeta, Carriers, MassUnit},
    plugin::CarrierPlugin,
    ports::{CurrencyConverter, LabelSink, ParamStore, PriceCatalog},
};

mod address;
mod client;
mod payload;
mod rate;

pub use client::PostnlShippingPort;
pub use rate::PostnlRatingPort;

/// Parameter naming the Shipping API endpoint for production credentials.
pub const PARAM_SHIPPING_API_PROD_URL: &str = "postnl_shipping_api_prod_url";
/// Parameter naming the Shipping API endpoint for sandbox credentials.
pub const PARAM_SHIPPING_API_TEST_URL: &str = "postnl_shipping_api_test_url";
/// Parameter naming the customer-facing tracking base URL. No default:
/// tracking links stay empty until the host configures one.
pub const PARAM_TRACKING_BASE_URL: &str = "postnl_tracking_base_url";

#[derive(Debug, Clone)]
/// Credentials and per-deployment settings for the PostNL integration.
///
/// Supplied by host configuration and treated as opaque input by the ports.
pub struct PostnlConfig {
    /// API key sent in the `apikey` header. Sending fails with a
    /// configuration error when unset or empty.
    pub api_key: Option<String>,
    /// PostNL customer code.
    pub customer_code: String,
    /// PostNL customer number.
    pub customer_number: String,
    /// Whether to use the production endpoint instead of the sandbox.
    pub prod_environment: bool,
    /// Whether submitted shipments are final rather than label previews.
    pub confirm_shipment: bool,
    /// House number used in the sender address block. The upstream
    /// integration always sent a fixed value instead of deriving it from the
    /// sender address, so it stays an explicit setting here.
    // TODO: derive this from the sender's `Party::house_number` once host
    // company records carry a split-out house number.
    pub sender_house_number: String,
}

impl Default for PostnlConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            customer_code: String::new(),
            customer_number: String::new(),
            prod_environment: false,
            confirm_shipment: true,
            sender_house_number: String::from("42"),
        }
    }
}

/// Build the plugin bundle for the PostNL provider.
#[must_use]
pub fn plugin(
    client: Client,
    config: PostnlConfig,
    mass_unit: MassUnit,
    params: Arc<dyn ParamStore>,
    catalog: Arc<dyn PriceCatalog>,
    currency: Option<Arc<dyn CurrencyConverter>>,
    labels: Arc<dyn LabelSink>,
) -> CarrierPlugin {
    let rating_port = Arc::new(PostnlRatingPort::new(catalog, currency, mass_unit));
    let shipping_port = Arc::new(PostnlShippingPort::new(
        client, config, params, labels, mass_unit,
    ));

    CarrierPlugin {
        meta: carrier_meta(),
        rating_port,
        shipping_port,
    }
}

fn carrier_meta() -> CarrierMeta {
    CarrierMeta {
        id: CarrierId::from(Carriers::PostNl),
        name: String::from("PostNL"),
    }
}
