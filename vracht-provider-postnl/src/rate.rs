//! Weight-tiered price estimation for PostNL parcels.
//!
//! PostNL has no rate API; prices come from the host's catalog per weight
//! tier, so every quote carries a staleness warning instead of a failure
//! path.

use std::sync::Arc;

use vracht_core::model::{CarrierMeta, CurrencyCode, MassUnit, Order, RateQuote, WeightTier};
use vracht_core::ports::{CurrencyConverter, PriceCatalog, RatingPort};

/// Currency PostNL quotes its catalog prices in.
pub(crate) const NATIVE_CURRENCY: &str = "EUR";

const STALE_PRICE_WARNING: &str =
    "Please make sure to have the latest PostNL product prices, as the PostNL API does not retrieve them.";

/// Price estimation implementation for PostNL.
pub struct PostnlRatingPort {
    catalog: Arc<dyn PriceCatalog>,
    currency: Option<Arc<dyn CurrencyConverter>>,
    mass_unit: MassUnit,
    meta: CarrierMeta,
}

impl PostnlRatingPort {
    /// Create a new rating port bound to the host's catalog and converter.
    #[must_use]
    pub fn new(
        catalog: Arc<dyn PriceCatalog>,
        currency: Option<Arc<dyn CurrencyConverter>>,
        mass_unit: MassUnit,
    ) -> Self {
        Self {
            catalog,
            currency,
            mass_unit,
            meta: crate::carrier_meta(),
        }
    }
}

impl RatingPort for PostnlRatingPort {
    fn carrier(&self) -> &CarrierMeta {
        &self.meta
    }

    fn rate(&self, order: &Order) -> RateQuote {
        let kilograms = self.mass_unit.to_kilograms(order.total_weight());
        let tier = WeightTier::from_kilograms(kilograms);

        // A missing catalog entry degrades to a zero price, not an error.
        let unit_price = self.catalog.list_price(tier).unwrap_or(0.0);

        let native = CurrencyCode(String::from(NATIVE_CURRENCY));
        let price = match self.currency.as_ref() {
            Some(converter) if order.currency != native => {
                converter.convert(unit_price, &native, &order.currency, order.date)
            }
            _ => unit_price,
        };

        RateQuote {
            tier,
            unit_price,
            price,
            currency: order.currency.clone(),
            warning: Some(String::from(STALE_PRICE_WARNING)),
        }
    }
}
