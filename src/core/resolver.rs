use crate::core::{boundary, geometry};
use crate::domain::model::{Coordinate, Zone};
use crate::domain::ports::ZoneStore;
use crate::utils::error::{Result, ZoneError};

/// Finds the zone containing a coordinate.
///
/// Each resolution pulls a fresh snapshot from the store and walks it in
/// store order; the first zone whose boundary contains the point wins, which
/// is also the documented precedence when zones overlap. A record whose
/// stored boundary does not decode to a usable ring is logged and skipped —
/// one corrupt zone never blocks resolution against the rest. Only a failed
/// snapshot read aborts the resolution.
pub struct ZoneResolver<S: ZoneStore> {
    store: S,
}

impl<S: ZoneStore> ZoneResolver<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn resolve(&self, point: Coordinate) -> Result<Option<Zone>> {
        let zones = self.store.list_all().await?;
        tracing::debug!(
            "Resolving ({}, {}) against {} zones",
            point.latitude,
            point.longitude,
            zones.len()
        );

        for zone in zones {
            let ring = match boundary::decode(&zone.coordinates) {
                Ok(ring) if ring.len() >= 4 => ring,
                Ok(ring) => {
                    skip_zone(&zone, format!("ring has {} vertices", ring.len()));
                    continue;
                }
                Err(err) => {
                    skip_zone(&zone, err.to_string());
                    continue;
                }
            };

            if geometry::contains(&ring, point) {
                tracing::debug!("Matched zone {} ({})", zone.id, zone.name);
                return Ok(Some(zone));
            }
        }

        Ok(None)
    }
}

fn skip_zone(zone: &Zone, reason: String) {
    let err = ZoneError::MalformedBoundary {
        zone_id: zone.id.clone(),
        reason,
    };
    tracing::warn!("⚠️ Skipping zone during resolution: {}", err);
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct StubStore {
        zones: Vec<Zone>,
    }

    #[async_trait]
    impl ZoneStore for StubStore {
        async fn list_all(&self) -> Result<Vec<Zone>> {
            Ok(self.zones.clone())
        }
    }

    struct DownStore;

    #[async_trait]
    impl ZoneStore for DownStore {
        async fn list_all(&self) -> Result<Vec<Zone>> {
            Err(ZoneError::StorageUnavailable {
                reason: "connection refused".to_string(),
            })
        }
    }

    fn zone(id: &str, ring: &[(f64, f64)], price: u32) -> Zone {
        let vertices: Vec<Coordinate> = ring
            .iter()
            .map(|&(lat, lng)| Coordinate::new(lat, lng))
            .collect();
        Zone {
            id: id.to_string(),
            name: format!("zone {}", id),
            coordinates: boundary::encode(&vertices).unwrap(),
            price,
            created_at: None,
            updated_at: None,
        }
    }

    fn unit_square(id: &str, lat0: f64, lng0: f64, side: f64, price: u32) -> Zone {
        zone(
            id,
            &[
                (lat0, lng0),
                (lat0, lng0 + side),
                (lat0 + side, lng0 + side),
                (lat0 + side, lng0),
                (lat0, lng0),
            ],
            price,
        )
    }

    #[tokio::test]
    async fn returns_first_containing_zone() {
        let store = StubStore {
            zones: vec![
                unit_square("west", 0.0, 0.0, 2.0, 100),
                unit_square("east", 0.0, 10.0, 2.0, 200),
            ],
        };
        let resolver = ZoneResolver::new(store);

        let hit = resolver.resolve(Coordinate::new(1.0, 11.0)).await.unwrap();
        assert_eq!(hit.unwrap().id, "east");
    }

    #[tokio::test]
    async fn overlapping_zones_resolve_to_store_order_winner() {
        // Both squares contain (1, 1); the snapshot lists "first" first.
        let store = StubStore {
            zones: vec![
                unit_square("first", 0.0, 0.0, 2.0, 100),
                unit_square("second", 0.0, 0.0, 3.0, 999),
            ],
        };
        let resolver = ZoneResolver::new(store);

        let hit = resolver.resolve(Coordinate::new(1.0, 1.0)).await.unwrap();
        assert_eq!(hit.unwrap().id, "first");
    }

    #[tokio::test]
    async fn resolution_is_deterministic_for_a_fixed_snapshot() {
        let store = StubStore {
            zones: vec![
                unit_square("a", 0.0, 0.0, 2.0, 100),
                unit_square("b", 0.0, 0.0, 2.0, 200),
            ],
        };
        let resolver = ZoneResolver::new(store);
        let point = Coordinate::new(0.5, 0.5);

        let first = resolver.resolve(point).await.unwrap().unwrap();
        let second = resolver.resolve(point).await.unwrap().unwrap();
        assert_eq!(first.id, second.id);
    }

    #[tokio::test]
    async fn malformed_zone_is_skipped_and_resolution_continues() {
        let mut corrupt = unit_square("corrupt", 0.0, 0.0, 2.0, 100);
        corrupt.coordinates = "not a boundary".to_string();

        let store = StubStore {
            zones: vec![corrupt, unit_square("good", 0.0, 0.0, 2.0, 200)],
        };
        let resolver = ZoneResolver::new(store);

        let hit = resolver.resolve(Coordinate::new(1.0, 1.0)).await.unwrap();
        assert_eq!(hit.unwrap().id, "good");
    }

    #[tokio::test]
    async fn degenerate_ring_is_skipped() {
        let store = StubStore {
            zones: vec![
                zone("line", &[(0.0, 0.0), (2.0, 2.0)], 100),
                unit_square("good", 0.0, 0.0, 2.0, 200),
            ],
        };
        let resolver = ZoneResolver::new(store);

        let hit = resolver.resolve(Coordinate::new(1.0, 1.0)).await.unwrap();
        assert_eq!(hit.unwrap().id, "good");
    }

    #[tokio::test]
    async fn no_match_and_empty_store_return_none() {
        let resolver = ZoneResolver::new(StubStore {
            zones: vec![unit_square("far", 40.0, 40.0, 1.0, 100)],
        });
        assert!(resolver
            .resolve(Coordinate::new(0.0, 0.0))
            .await
            .unwrap()
            .is_none());

        let resolver = ZoneResolver::new(StubStore { zones: vec![] });
        assert!(resolver
            .resolve(Coordinate::new(0.0, 0.0))
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn store_failure_propagates() {
        let resolver = ZoneResolver::new(DownStore);
        let err = resolver
            .resolve(Coordinate::new(0.0, 0.0))
            .await
            .unwrap_err();
        assert!(err.is_storage_unavailable());
    }
}
