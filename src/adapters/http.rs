use async_trait::async_trait;
use reqwest::Client;

use crate::domain::model::Zone;
use crate::domain::ports::ZoneStore;
use crate::utils::error::{Result, ZoneError};

/// Zone store behind an HTTP endpoint that returns a JSON array of zone
/// records, e.g. the admin API of the commerce backend.
///
/// Every failure mode — connect, status, body shape — maps to
/// `StorageUnavailable`: callers only need to know the snapshot could not be
/// fetched, and the kind must stay distinguishable from "no zone matched".
#[derive(Debug, Clone)]
pub struct HttpZoneStore {
    endpoint: String,
    client: Client,
}

impl HttpZoneStore {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }
}

#[async_trait]
impl ZoneStore for HttpZoneStore {
    async fn list_all(&self) -> Result<Vec<Zone>> {
        tracing::debug!("Fetching zones from {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await.map_err(|err| {
            ZoneError::StorageUnavailable {
                reason: format!("request to {} failed: {}", self.endpoint, err),
            }
        })?;

        let status = response.status();
        tracing::debug!("Zone endpoint response status: {}", status);
        if !status.is_success() {
            return Err(ZoneError::StorageUnavailable {
                reason: format!("{} returned {}", self.endpoint, status),
            });
        }

        let zones: Vec<Zone> =
            response
                .json()
                .await
                .map_err(|err| ZoneError::StorageUnavailable {
                    reason: format!("invalid zone list from {}: {}", self.endpoint, err),
                })?;
        tracing::debug!("Fetched {} zones", zones.len());
        Ok(zones)
    }
}
