use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZoneError {
    #[error("Zone store unavailable: {reason}")]
    StorageUnavailable { reason: String },

    #[error("Zone {zone_id} has a malformed boundary: {reason}")]
    MalformedBoundary { zone_id: String, reason: String },

    #[error("Boundary needs at least 3 distinct vertices, got {count}")]
    TooFewVertices { count: usize },

    #[error("Zone not found: {id}")]
    ZoneNotFound { id: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Config file error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error in {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

impl ZoneError {
    /// Fatal for an in-flight resolution, as opposed to the per-zone kinds
    /// the resolver recovers from by skipping.
    pub fn is_storage_unavailable(&self) -> bool {
        matches!(self, ZoneError::StorageUnavailable { .. })
    }
}

pub type Result<T> = std::result::Result<T, ZoneError>;
