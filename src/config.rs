//! Loader Configuration

/// Default payload entry name fragment
pub const DEFAULT_PAYLOAD_NAME: &str = "model.json";

/// Default ceiling on the payload's uncompressed size (1 GiB)
pub const DEFAULT_MAX_PAYLOAD_BYTES: u64 = 1 << 30;

/// Model loader configuration
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Substring an archive entry name must contain to be read as the payload
    pub payload_name: String,

    /// Maximum uncompressed payload size in bytes
    pub max_payload_bytes: u64,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            payload_name: DEFAULT_PAYLOAD_NAME.to_string(),
            max_payload_bytes: DEFAULT_MAX_PAYLOAD_BYTES,
        }
    }
}

impl LoaderConfig {
    /// Set the payload entry name fragment
    pub fn with_payload_name(mut self, name: impl Into<String>) -> Self {
        self.payload_name = name.into();
        self
    }

    /// Set the payload size limit
    pub fn with_max_payload_bytes(mut self, limit: u64) -> Self {
        self.max_payload_bytes = limit;
        self
    }
}
