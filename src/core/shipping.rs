use crate::config::ChannelSettings;
use crate::core::resolver::ZoneResolver;
use crate::domain::model::{Coordinate, ShippingQuote};
use crate::domain::ports::ZoneStore;
use crate::utils::error::Result;

/// The two entry points the shipping subsystem calls per order.
///
/// The resolver and channel settings are injected at construction; there is
/// no process-wide state to initialize. Both calls are read-only, so
/// concurrent order evaluations need no coordination — each fetches its own
/// snapshot. Absent coordinates and no-match both collapse to "not eligible"
/// / zero price; only a store failure crosses this boundary as an error, so
/// the caller can tell "no zone" from "could not determine".
pub struct ZoneShipping<S: ZoneStore> {
    resolver: ZoneResolver<S>,
    channel: ChannelSettings,
}

impl<S: ZoneStore> ZoneShipping<S> {
    pub fn new(resolver: ZoneResolver<S>, channel: ChannelSettings) -> Self {
        Self { resolver, channel }
    }

    /// Shipping is available only when the destination falls inside a zone.
    /// An address without coordinates is not eligible; the store is not
    /// consulted for it.
    pub async fn check_eligibility(&self, destination: Option<Coordinate>) -> Result<bool> {
        let Some(point) = destination else {
            return Ok(false);
        };
        Ok(self.resolver.resolve(point).await?.is_some())
    }

    /// Price of the first zone containing the destination, or a zero quote
    /// when the address has no coordinates or no zone matches. The
    /// tax-inclusion flag comes from the channel configuration in every
    /// case; this component never computes taxes.
    pub async fn calculate_price(&self, destination: Option<Coordinate>) -> Result<ShippingQuote> {
        let Some(point) = destination else {
            return Ok(ShippingQuote::zero(self.channel.prices_include_tax));
        };

        let price = self
            .resolver
            .resolve(point)
            .await?
            .map(|zone| zone.price)
            .unwrap_or(0);

        Ok(ShippingQuote {
            price,
            price_includes_tax: self.channel.prices_include_tax,
            tax_rate: 0.0,
        })
    }
}
