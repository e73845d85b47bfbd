//! Traits describing carrier capabilities, host collaborators, and errors.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Error as ReqwestError;

use crate::model::{
    CarrierMeta, CurrencyCode, Dispatch, Label, Order, Picking, RateQuote, WeightTier,
};

#[derive(thiserror::Error, Debug)]
/// Reasons a destination address is rejected before a request is built.
///
/// Checks run in a fixed order and the first failing one is reported;
/// validation never aggregates multiple problems.
pub enum AddressError {
    /// The address has no country set.
    #[error("Destination address does not have a country set")]
    MissingCountry,
    /// The country is set but the carrier does not ship there.
    #[error("Shipments to {0} are not supported by this carrier")]
    UnsupportedCountry(String),
    /// The address has no city.
    #[error("Destination address does not have mandatory information - city")]
    MissingCity,
    /// The address has no postal code.
    #[error("Destination address does not have mandatory information - zip")]
    MissingZip,
}

#[derive(thiserror::Error, Debug)]
/// Failures while talking to a carrier backend.
pub enum ApiError {
    /// The carrier rejected the configured API key.
    #[error("Carrier rejected the configured API key")]
    Unauthenticated,
    /// Transport failure or non-success HTTP status.
    #[error("Carrier request failed: {0}")]
    Http(#[from] ReqwestError),
    /// The response body did not have the expected shape.
    #[error("Carrier returned an invalid response: {0}")]
    MalformedResponse(String),
}

#[derive(thiserror::Error, Debug)]
/// Errors surfaced to the host by carrier operations.
///
/// Every variant halts the triggering workflow step; nothing here is retried
/// or swallowed by the framework.
pub enum CarrierError {
    /// The carrier is missing credentials or configuration.
    #[error("Carrier is not configured: {0}")]
    Configuration(String),
    /// The destination address failed validation.
    #[error(transparent)]
    Address(#[from] AddressError),
    /// The carrier API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),
    /// No plugin is registered for the requested carrier.
    #[error("Unsupported carrier")]
    UnsupportedCarrier,
    /// The carrier has no API for the requested operation.
    #[error("{0}")]
    Unsupported(String),
}

/// Trait for carrier-specific price estimation.
///
/// Rating is infallible by contract: carriers without a pricing API degrade to
/// a quote carrying an advisory warning instead of an error.
pub trait RatingPort: Send + Sync {
    /// Metadata describing the carrier handled by this port.
    fn carrier(&self) -> &CarrierMeta;

    /// Estimate the shipping price for an order.
    fn rate(&self, order: &Order) -> RateQuote;
}

#[async_trait]
/// Trait for carrier-specific shipment submission and tracking.
pub trait ShippingPort: Send + Sync {
    /// Metadata describing the carrier handled by this port.
    fn carrier(&self) -> &CarrierMeta;

    /// Submit the given pickings to the carrier, strictly in order.
    ///
    /// The first failing picking aborts the remainder of the batch; there is
    /// no partial-success state.
    ///
    /// # Errors
    ///
    /// Returns a [`CarrierError`] when the carrier is unconfigured, an address
    /// fails validation, or the API call fails.
    async fn send(&self, pickings: &[Picking]) -> Result<Vec<Dispatch>, CarrierError>;

    /// Build a customer-facing tracking URL for a dispatched picking.
    ///
    /// Returns an empty string when the link cannot be derived, e.g. when no
    /// tracking base URL is configured or the picking has no tracking ref.
    fn tracking_link(&self, picking: &Picking) -> String;

    /// Cancel previously submitted pickings.
    ///
    /// # Errors
    ///
    /// Returns [`CarrierError::Unsupported`] for carriers whose API has no
    /// cancel operation.
    fn cancel(&self, pickings: &[Picking]) -> Result<(), CarrierError>;
}

/// Host-owned store of named configuration parameters.
///
/// Providers document the keys they read and fall back to built-in defaults
/// when a key is absent.
pub trait ParamStore: Send + Sync {
    /// Look up a parameter by name.
    fn get(&self, key: &str) -> Option<String>;
}

/// Host-owned catalog of flat-rate prices per weight tier.
pub trait PriceCatalog: Send + Sync {
    /// List price for the tier, in the carrier's native currency.
    ///
    /// Returns `None` when the host has no catalog entry for the tier.
    fn list_price(&self, tier: WeightTier) -> Option<f64>;
}

/// Host-owned currency conversion service.
pub trait CurrencyConverter: Send + Sync {
    /// Convert an amount between currencies at the rate of the given date.
    fn convert(&self, amount: f64, from: &CurrencyCode, to: &CurrencyCode, on: NaiveDate) -> f64;
}

/// Host-owned sink that persists labels against a picking.
pub trait LabelSink: Send + Sync {
    /// Assign the host's default package to the picking, if none is set.
    fn assign_default_package(&self, picking: &Picking);

    /// Attach one label to the picking.
    ///
    /// # Errors
    ///
    /// Returns a [`CarrierError`] when the host cannot store the label.
    fn attach(&self, picking: &Picking, label: &Label) -> Result<(), CarrierError>;
}
