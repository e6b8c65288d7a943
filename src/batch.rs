//! # Batch Client
//!
//! The entry point: factor a whole batch on a fresh pool.
//!
//! A batch runs in three phases:
//! 1. **Spawn** - start a [`WorkerPool`] sized by the [`PoolConfig`]
//! 2. **Distribute** - cast every item to its round-robin owner
//! 3. **Collect** - call each owner for its result, then shut the pool down
//!
//! Because every cast is queued before the first call, and the batch is the only sender to
//! its workers, each worker has handled all of its items before it answers the first lookup.
//!
//! ```rust
//! use factor_pool::batch;
//! use factor_pool::config::PoolConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), batch::BatchError> {
//!     let config = PoolConfig::default().with_size(2);
//!     let results = batch::factorize(&[7, 10, 99], &config).await?;
//!     assert_eq!(results[&99], vec![3, 3, 11]);
//!     Ok(())
//! }
//! ```

use crate::compute::{Factors, PrimeTable};
use crate::config::{ConfigError, PoolConfig};
use crate::lifecycle::{LifecycleError, WorkerPool};
use crate::model::BatchReport;
use crate::worker_actor::WorkerError;
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, instrument};

/// Batch-level failures. Per-item failures are not errors; see [`BatchReport::failures`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BatchError {
    #[error("Invalid work item: {0} (items must be at least 2)")]
    InvalidItem(u64),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Dispatch(#[from] WorkerError),

    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),

    #[error("Worker task panicked: {0}")]
    WorkerPanicked(String),
}

/// Factors every item and returns `item -> factors`.
///
/// Items whose result could not be collected are logged and left out of the map.
pub async fn factorize(items: &[u64], config: &PoolConfig) -> Result<BTreeMap<u64, Factors>, BatchError> {
    Ok(factorize_report(items, config).await?.results)
}

/// Like [`factorize`], but also returns the items that failed and why.
#[instrument(skip_all, fields(items = items.len(), size = config.size))]
pub async fn factorize_report(items: &[u64], config: &PoolConfig) -> Result<BatchReport, BatchError> {
    validate_items(items)?;
    config.validate()?;
    if items.is_empty() {
        debug!("Empty batch");
        return Ok(BatchReport::default());
    }

    let pool = if config.share_primes {
        let primes = Arc::new(PrimeTable::for_items(items));
        debug!(limit = primes.limit(), primes = primes.primes().len(), "Prime table built");
        WorkerPool::with_primes(config, primes)?
    } else {
        WorkerPool::new(config)?
    };

    run(pool, items).await
}

/// Runs the distribute and collect phases on an existing pool, then shuts it down.
pub async fn run(pool: WorkerPool, items: &[u64]) -> Result<BatchReport, BatchError> {
    let ownership = match pool.submit_all(items) {
        Ok(ownership) => ownership,
        Err(e) => {
            pool.shutdown().await?;
            return Err(e.into());
        }
    };

    let report = pool.collect_all(&ownership).await;
    pool.shutdown().await?;

    info!(
        items = items.len(),
        completed = report.results.len(),
        failed = report.failures.len(),
        "Batch complete"
    );
    Ok(report)
}

/// Rejects the first item below 2.
pub fn validate_items(items: &[u64]) -> Result<(), BatchError> {
    match items.iter().find(|&&n| n < 2) {
        Some(&bad) => Err(BatchError::InvalidItem(bad)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_items() {
        assert_eq!(validate_items(&[2, 3, 4]), Ok(()));
        assert_eq!(validate_items(&[]), Ok(()));
        assert_eq!(validate_items(&[5, 1, 0]), Err(BatchError::InvalidItem(1)));
    }

    #[tokio::test]
    async fn test_empty_batch() {
        let report = factorize_report(&[], &PoolConfig::default()).await.unwrap();
        assert!(report.results.is_empty());
        assert!(report.is_complete());
    }

    #[tokio::test]
    async fn test_bad_config_is_rejected_before_spawning() {
        let config = PoolConfig::default().with_size(0);
        assert_eq!(
            factorize(&[4], &config).await,
            Err(BatchError::Config(ConfigError::ZeroPoolSize))
        );
    }
}
