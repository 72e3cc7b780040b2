//! # Engine Configuration
//!
//! Deployment-tunable parameters for the attestation engine. Everything
//! security-relevant (thresholds, hash formats) is a released constant,
//! not configuration; only capacity and credential lifetime live here.

use vigil_crypto::DEFAULT_CIRCUIT_SIZE;

/// Default bearer credential lifetime in days.
pub const DEFAULT_CREDENTIAL_VALIDITY_DAYS: i64 = 30;

/// Tunable engine parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Width of the exported circuit input vector.
    pub circuit_size: usize,
    /// Days until an issued bearer credential expires.
    pub credential_validity_days: i64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            circuit_size: DEFAULT_CIRCUIT_SIZE,
            credential_validity_days: DEFAULT_CREDENTIAL_VALIDITY_DAYS,
        }
    }
}

impl EngineConfig {
    /// Read configuration from `VIGIL_CIRCUIT_SIZE` and
    /// `VIGIL_CREDENTIAL_VALIDITY_DAYS`, falling back to defaults for
    /// unset or unparseable values (with a warning, never a failure).
    pub fn from_environment() -> Self {
        let mut config = EngineConfig::default();
        if let Ok(raw) = std::env::var("VIGIL_CIRCUIT_SIZE") {
            match raw.trim().parse() {
                Ok(size) => config.circuit_size = size,
                Err(_) => {
                    tracing::warn!(value = %raw, "ignoring unparseable VIGIL_CIRCUIT_SIZE");
                }
            }
        }
        if let Ok(raw) = std::env::var("VIGIL_CREDENTIAL_VALIDITY_DAYS") {
            match raw.trim().parse() {
                Ok(days) => config.credential_validity_days = days,
                Err(_) => {
                    tracing::warn!(value = %raw, "ignoring unparseable VIGIL_CREDENTIAL_VALIDITY_DAYS");
                }
            }
        }
        config
    }
}
