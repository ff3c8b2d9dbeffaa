use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A geographic point as latitude/longitude degrees.
///
/// Ranges are assumed, not enforced: an out-of-range value flows through the
/// containment test like any other and will not fall inside a realistic zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A delivery zone record as transported and stored.
///
/// `coordinates` carries the boundary in its stored form, a JSON-encoded
/// list of `[latitude, longitude]` pairs; it is decoded at resolution time
/// so one corrupt record only costs itself, not the whole snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    pub id: String,
    pub name: String,
    pub coordinates: String,
    /// Flat delivery price in the smallest currency unit.
    pub price: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Write-path input for creating a zone.
#[derive(Debug, Clone)]
pub struct CreateZoneInput {
    pub name: String,
    pub boundary: Vec<Coordinate>,
    pub price: u32,
}

/// Write-path input for updating a zone. Only the provided fields change.
#[derive(Debug, Clone, Default)]
pub struct UpdateZoneInput {
    pub name: Option<String>,
    pub boundary: Option<Vec<Coordinate>>,
    pub price: Option<u32>,
}

/// Result shape of the shipping price calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingQuote {
    pub price: u32,
    pub price_includes_tax: bool,
    pub tax_rate: f64,
}

impl ShippingQuote {
    /// The quote for "no delivery here": zero price, zero tax rate. The
    /// tax-inclusion flag still reflects the channel configuration.
    pub fn zero(price_includes_tax: bool) -> Self {
        Self {
            price: 0,
            price_includes_tax,
            tax_rate: 0.0,
        }
    }
}
