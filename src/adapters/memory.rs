use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::core::boundary;
use crate::domain::model::{CreateZoneInput, UpdateZoneInput, Zone};
use crate::domain::ports::ZoneStore;
use crate::utils::error::{Result, ZoneError};

/// Zone store held in process memory, in insertion order.
///
/// Also carries the write path an administrative layer would call: create
/// and update run the boundary validator before anything is persisted, so
/// every stored zone is resolvable. Reads take the lock shared; only the
/// admin write path takes it exclusively.
#[derive(Debug, Clone)]
pub struct InMemoryZoneStore {
    zones: Arc<RwLock<Vec<Zone>>>,
    next_id: Arc<AtomicU64>,
}

impl InMemoryZoneStore {
    pub fn new() -> Self {
        Self {
            zones: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    pub async fn create(&self, input: CreateZoneInput) -> Result<Zone> {
        if input.name.trim().is_empty() {
            return Err(ZoneError::ValidationError {
                message: "zone name cannot be empty".to_string(),
            });
        }
        let ring = boundary::validate(&input.boundary)?;
        let now = Utc::now();
        let zone = Zone {
            id: self.next_id.fetch_add(1, Ordering::Relaxed).to_string(),
            name: input.name,
            coordinates: boundary::encode(&ring)?,
            price: input.price,
            created_at: Some(now),
            updated_at: Some(now),
        };

        self.zones.write().await.push(zone.clone());
        tracing::info!("Created zone {} ({})", zone.id, zone.name);
        Ok(zone)
    }

    pub async fn update(&self, id: &str, input: UpdateZoneInput) -> Result<Zone> {
        // Validate outside the lock; a rejected boundary must not leave a
        // half-patched record behind.
        let coordinates = match &input.boundary {
            Some(vertices) => Some(boundary::encode(&boundary::validate(vertices)?)?),
            None => None,
        };
        if let Some(name) = &input.name {
            if name.trim().is_empty() {
                return Err(ZoneError::ValidationError {
                    message: "zone name cannot be empty".to_string(),
                });
            }
        }

        let mut zones = self.zones.write().await;
        let zone = zones
            .iter_mut()
            .find(|zone| zone.id == id)
            .ok_or_else(|| ZoneError::ZoneNotFound { id: id.to_string() })?;

        if let Some(name) = input.name {
            zone.name = name;
        }
        if let Some(price) = input.price {
            zone.price = price;
        }
        if let Some(coordinates) = coordinates {
            zone.coordinates = coordinates;
        }
        zone.updated_at = Some(Utc::now());

        tracing::info!("Updated zone {}", zone.id);
        Ok(zone.clone())
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let mut zones = self.zones.write().await;
        let before = zones.len();
        zones.retain(|zone| zone.id != id);
        if zones.len() == before {
            return Err(ZoneError::ZoneNotFound { id: id.to_string() });
        }
        tracing::info!("Deleted zone {}", id);
        Ok(())
    }

    pub async fn find_one(&self, id: &str) -> Option<Zone> {
        self.zones
            .read()
            .await
            .iter()
            .find(|zone| zone.id == id)
            .cloned()
    }
}

impl Default for InMemoryZoneStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ZoneStore for InMemoryZoneStore {
    async fn list_all(&self) -> Result<Vec<Zone>> {
        Ok(self.zones.read().await.clone())
    }
}
