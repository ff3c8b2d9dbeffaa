use crate::domain::model::Zone;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Outbound port to wherever zone records live.
///
/// Returns the current snapshot of all zones in store order, with no
/// filtering or pagination; resolution precedence among overlapping zones
/// follows that order. A store that cannot be reached fails with
/// `ZoneError::StorageUnavailable`, which is fatal for the in-flight
/// resolution — retries belong to the caller.
#[async_trait]
pub trait ZoneStore: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Zone>>;
}
