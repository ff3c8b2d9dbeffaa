use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::model::Zone;
use crate::domain::ports::ZoneStore;
use crate::utils::error::{Result, ZoneError};

/// Zone store backed by a JSON document on disk: an array of zone records in
/// the transport shape. The file is re-read on every call, so edits show up
/// without a restart; document order is store order.
#[derive(Debug, Clone)]
pub struct JsonFileZoneStore {
    path: PathBuf,
}

impl JsonFileZoneStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl ZoneStore for JsonFileZoneStore {
    async fn list_all(&self) -> Result<Vec<Zone>> {
        let raw = std::fs::read_to_string(&self.path).map_err(|err| {
            ZoneError::StorageUnavailable {
                reason: format!("cannot read {}: {}", self.path.display(), err),
            }
        })?;
        // An unreadable document means the whole snapshot is gone, unlike a
        // single zone's bad boundary.
        let zones: Vec<Zone> =
            serde_json::from_str(&raw).map_err(|err| ZoneError::StorageUnavailable {
                reason: format!("cannot parse {}: {}", self.path.display(), err),
            })?;
        Ok(zones)
    }
}
