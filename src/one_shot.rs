//! One-shot dispatch: a blocking task per chunk of the batch, no actors.
//!
//! Items are dealt round-robin into at most `config.size` chunks, the same assignment a
//! [`WorkerPool`](crate::lifecycle::WorkerPool) uses. Each chunk is factored by one task that
//! exits when its chunk is done, so there is nothing to shut down and nothing to look up later.

use crate::batch::{validate_items, BatchError};
use crate::compute::{Factors, PrimeTable};
use crate::config::PoolConfig;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, info, instrument};

/// Factors every item and returns `item -> factors`, one blocking task per chunk.
#[instrument(skip_all, fields(items = items.len(), size = config.size))]
pub async fn factorize(items: &[u64], config: &PoolConfig) -> Result<BTreeMap<u64, Factors>, BatchError> {
    validate_items(items)?;
    config.validate()?;

    let primes = Arc::new(if config.share_primes {
        PrimeTable::for_items(items)
    } else {
        PrimeTable::new(0)
    });

    let mut tasks = JoinSet::new();
    for (slot, chunk) in deal(items, config.size).into_iter().enumerate() {
        let primes = Arc::clone(&primes);
        tasks.spawn_blocking(move || {
            let factored: Vec<(u64, Factors)> = chunk.into_iter().map(|n| (n, primes.factor(n))).collect();
            (slot, factored)
        });
    }

    let mut results = BTreeMap::new();
    while let Some(joined) = tasks.join_next().await {
        let (slot, factored) = joined.map_err(|e| BatchError::WorkerPanicked(e.to_string()))?;
        debug!(slot, items = factored.len(), "Chunk finished");
        results.extend(factored);
    }

    info!(items = items.len(), completed = results.len(), "One-shot batch complete");
    Ok(results)
}

/// Splits `items` into `min(size, len)` chunks; item `i` goes to chunk `i mod size`.
fn deal(items: &[u64], size: usize) -> Vec<Vec<u64>> {
    let chunks = size.min(items.len());
    let mut dealt = vec![Vec::new(); chunks];
    for (index, &item) in items.iter().enumerate() {
        dealt[index % chunks].push(item);
    }
    dealt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_round_robin() {
        assert_eq!(deal(&[1, 2, 3, 4, 5], 2), vec![vec![1, 3, 5], vec![2, 4]]);
        assert_eq!(deal(&[9, 8], 4), vec![vec![9], vec![8]]);
        assert!(deal(&[], 3).is_empty());
    }

    #[tokio::test]
    async fn test_one_shot_factorize() {
        let config = PoolConfig::default().with_size(3);
        let results = factorize(&[7, 10, 20, 30, 99], &config).await.unwrap();
        assert_eq!(results[&7], vec![7]);
        assert_eq!(results[&20], vec![2, 2, 5]);
        assert_eq!(results[&30], vec![2, 3, 5]);
        assert_eq!(results.len(), 5);
    }

    #[tokio::test]
    async fn test_one_shot_rejects_invalid_items() {
        let config = PoolConfig::default().with_size(2);
        assert_eq!(
            factorize(&[12, 0], &config).await,
            Err(BatchError::InvalidItem(0))
        );
    }
}
