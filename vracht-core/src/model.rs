//! Domain data structures for carriers, shipments, and rate quotes.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Built-in carriers supported by the application.
pub enum Carriers {
    /// PostNL, Netherlands.
    PostNl,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Identifier for a carrier known to vracht.
pub struct CarrierId(pub String);

impl fmt::Display for Carriers {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slug = match self {
            Carriers::PostNl => "postnl",
        };
        write!(formatter, "{slug}")
    }
}

impl From<Carriers> for CarrierId {
    fn from(carrier: Carriers) -> Self {
        CarrierId(carrier.to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Metadata describing a carrier and its human-friendly name.
pub struct CarrierMeta {
    /// Unique identifier.
    pub id: CarrierId,
    /// Localized display name.
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Identifier of a picking in the host system, stable per shipment.
pub struct PickingId(pub String);

impl fmt::Display for PickingId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
/// A shipping party: either the sending company or the receiving customer.
///
/// Fields the host may not have filled in are optional; carriers validate the
/// subset they require before building a request.
pub struct Party {
    /// Display name of the party.
    pub name: String,
    /// Street name, possibly including the house number.
    pub street: Option<String>,
    /// House number, when tracked separately from the street.
    pub house_number: Option<String>,
    /// House number extension such as “A” or “bis”.
    pub house_number_ext: Option<String>,
    /// City name.
    pub city: Option<String>,
    /// Postal code.
    pub zip: Option<String>,
    /// ISO 3166-1 alpha-2 country code.
    pub country_code: Option<String>,
    /// Contact e-mail address.
    pub email: Option<String>,
    /// Landline phone number.
    pub phone: Option<String>,
    /// Mobile phone number.
    pub mobile: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// One outbound parcel as tracked by the host warehouse.
pub struct Picking {
    /// Host identifier, used as the carrier message id.
    pub id: PickingId,
    /// Human-readable reference such as “WH/OUT/00042”.
    pub name: String,
    /// The shipping company.
    pub sender: Party,
    /// The destination customer.
    pub recipient: Party,
    /// Total shipping weight in the host's configured mass unit.
    pub shipping_weight: f64,
    /// Carrier tracking reference, set by the host after a successful send.
    pub tracking_ref: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// ISO 4217 currency code.
pub struct CurrencyCode(pub String);

impl fmt::Display for CurrencyCode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// One order line relevant for weight-based rating.
pub struct OrderLine {
    /// Weight of a single unit, in the host's configured mass unit.
    pub unit_weight: f64,
    /// Ordered quantity.
    pub quantity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// A sales order to be rated before booking a shipment.
pub struct Order {
    /// Lines contributing to the total shipping weight.
    pub lines: Vec<OrderLine>,
    /// Currency the quote should be expressed in.
    pub currency: CurrencyCode,
    /// Date used for currency conversion.
    pub date: NaiveDate,
}

impl Order {
    /// Total weight of the order in the host's configured mass unit.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.lines
            .iter()
            .map(|line| line.unit_weight * line.quantity)
            .sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// The host's configured unit of measure for product weights.
pub enum MassUnit {
    /// Kilograms.
    Kilogram,
    /// Grams.
    Gram,
    /// Avoirdupois pounds.
    Pound,
    /// Avoirdupois ounces.
    Ounce,
}

impl MassUnit {
    /// Convert a quantity expressed in this unit into kilograms.
    #[must_use]
    pub fn to_kilograms(self, quantity: f64) -> f64 {
        match self {
            MassUnit::Kilogram => quantity,
            MassUnit::Gram => quantity / 1000.0,
            MassUnit::Pound => quantity * 0.453_592_37,
            MassUnit::Ounce => quantity * 0.028_349_523_125,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Fixed weight bands used for flat-rate parcel pricing.
pub enum WeightTier {
    /// Parcels up to and including 2 kg.
    UpTo2Kg,
    /// Parcels over 2 kg, up to and including 10 kg.
    UpTo10Kg,
    /// Parcels over 10 kg.
    Over10Kg,
}

impl WeightTier {
    /// Select the tier for a total weight in kilograms.
    ///
    /// Bands are contiguous and right-inclusive: [0, 2], (2, 10], (10, ∞).
    #[must_use]
    pub fn from_kilograms(kilograms: f64) -> Self {
        if kilograms <= 2.0 {
            WeightTier::UpTo2Kg
        } else if kilograms <= 10.0 {
            WeightTier::UpTo10Kg
        } else {
            WeightTier::Over10Kg
        }
    }

    /// Stable key used to look the tier up in the host's price catalog.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            WeightTier::UpTo2Kg => "2kg",
            WeightTier::UpTo10Kg => "10kg",
            WeightTier::Over10Kg => "23kg",
        }
    }
}

impl fmt::Display for WeightTier {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.key())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// A shipping document returned by a carrier, decoded to its binary content.
pub struct Label {
    /// Display name, taken from the picking reference.
    pub name: String,
    /// Decoded document bytes.
    pub content: Vec<u8>,
    /// Declared file type, e.g. “pdf”.
    pub file_type: String,
    /// Suggested file name including the type suffix.
    pub filename: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Result of one submitted shipment. Immutable once returned.
pub struct Dispatch {
    /// Carrier-assigned tracking identifier, unique per shipment.
    pub tracking_number: String,
    /// Labels returned by the carrier, in response order.
    pub labels: Vec<Label>,
    /// Cost reported by the carrier; 0.0 for carriers that do not report one.
    pub exact_price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Price estimate for shipping an order. Computed on demand, not stored.
pub struct RateQuote {
    /// Weight band the order falls into.
    pub tier: WeightTier,
    /// Catalog price in the carrier's native currency.
    pub unit_price: f64,
    /// Price converted into the requested currency.
    pub price: f64,
    /// Currency of [`RateQuote::price`].
    pub currency: CurrencyCode,
    /// Advisory message, e.g. that catalog prices may be stale.
    pub warning: Option<String>,
}
