//! Pool configuration.
//!
//! The pool size is always passed in explicitly; [`PoolConfig::default`] is the one place that
//! looks at the host's parallelism.

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_CALL_TIMEOUT_MS: u64 = 5_000;

/// Errors raised by [`PoolConfig::validate`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Pool size must be at least 1")]
    ZeroPoolSize,
    #[error("Call timeout must be greater than zero")]
    ZeroTimeout,
}

/// Settings for a worker pool.
///
/// Missing fields take their defaults when deserialized, so a document containing only
/// `{"size": 4}` is a complete configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Number of workers. Defaults to the host's available parallelism.
    pub size: usize,
    /// How long a result lookup waits for its worker, in milliseconds.
    pub call_timeout_ms: u64,
    /// Build one prime table per batch and share it with every worker.
    pub share_primes: bool,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            size: default_parallelism(),
            call_timeout_ms: DEFAULT_CALL_TIMEOUT_MS,
            share_primes: true,
        }
    }
}

impl PoolConfig {
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn with_call_timeout(mut self, timeout: Duration) -> Self {
        self.call_timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_shared_primes(mut self, share: bool) -> Self {
        self.share_primes = share;
        self
    }

    pub fn call_timeout(&self) -> Duration {
        Duration::from_millis(self.call_timeout_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::ZeroPoolSize);
        }
        if self.call_timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}

/// Hardware threads available to this process, or 1 if that can't be determined.
pub fn default_parallelism() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PoolConfig::default();
        assert_eq!(config.size, default_parallelism());
        assert!(config.size >= 1);
        assert_eq!(config.call_timeout(), Duration::from_secs(5));
        assert!(config.share_primes);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_builder() {
        let config = PoolConfig::default()
            .with_size(3)
            .with_call_timeout(Duration::from_millis(250))
            .with_shared_primes(false);
        assert_eq!(config.size, 3);
        assert_eq!(config.call_timeout_ms, 250);
        assert!(!config.share_primes);
    }

    #[test]
    fn test_validate_rejects_zeroes() {
        assert_eq!(
            PoolConfig::default().with_size(0).validate(),
            Err(ConfigError::ZeroPoolSize)
        );
        assert_eq!(
            PoolConfig::default().with_call_timeout(Duration::ZERO).validate(),
            Err(ConfigError::ZeroTimeout)
        );
    }

    #[test]
    fn test_partial_document_fills_defaults() {
        let config: PoolConfig = serde_json::from_str(r#"{"size": 4}"#).unwrap();
        assert_eq!(config.size, 4);
        assert_eq!(config.call_timeout_ms, DEFAULT_CALL_TIMEOUT_MS);
        assert!(config.share_primes);

        let json = serde_json::to_string(&config).unwrap();
        let back: PoolConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
