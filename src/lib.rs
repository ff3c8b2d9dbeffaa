pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{file::JsonFileZoneStore, http::HttpZoneStore, memory::InMemoryZoneStore};
pub use crate::config::{AppConfig, ChannelSettings};
pub use crate::core::{resolver::ZoneResolver, shipping::ZoneShipping};
pub use crate::domain::model::{Coordinate, CreateZoneInput, ShippingQuote, UpdateZoneInput, Zone};
pub use crate::domain::ports::ZoneStore;
pub use crate::utils::error::{Result, ZoneError};
