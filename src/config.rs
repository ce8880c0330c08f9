use std::time::Duration;

use serde::Deserialize;

use crate::error::CheckError;
use crate::resolver::PortSpec;

const DEFAULT_TIMEOUT: u64 = 15;
const DEFAULT_NUM_RETRIES: u32 = 2;

/// Check configuration with defaults applied once at deserialization.
/// `port` is the only required key; a config mapping without it is rejected
/// before a check can be built.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckConfig {
    pub port: PortSpec,
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    #[serde(default = "default_num_retries")]
    pub num_retries: u32,
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT
}

fn default_num_retries() -> u32 {
    DEFAULT_NUM_RETRIES
}

impl CheckConfig {
    pub fn new(port: PortSpec) -> Self {
        Self {
            port,
            timeout: DEFAULT_TIMEOUT,
            num_retries: DEFAULT_NUM_RETRIES,
        }
    }

    /// Builds the config from an externally loaded mapping, e.g.
    /// `{"port": 8080, "timeout": 5}`.
    pub fn from_value(value: serde_json::Value) -> Result<Self, CheckError> {
        serde_json::from_value(value).map_err(|e| CheckError::InvalidCheckConfig(e.to_string()))
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout = secs;
        self
    }

    pub fn with_num_retries(mut self, num_retries: u32) -> Self {
        self.num_retries = num_retries;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}
