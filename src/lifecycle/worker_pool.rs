use crate::clients::{ActorClient, WorkerClient};
use crate::compute::PrimeTable;
use crate::config::{ConfigError, PoolConfig};
use crate::model::{BatchReport, ItemFailure, Ownership};
use crate::worker_actor::{self, FactorWorker, WorkerArgs, WorkerError};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument, warn};

/// Errors raised while tearing a pool down.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum LifecycleError {
    #[error("Worker task failed: {0}")]
    TaskFailed(String),
}

/// A fixed-size pool of factorization workers addressed by round robin.
///
/// `WorkerPool` is responsible for:
/// - **Lifecycle Management**: Starting every worker up front and stopping them all at the end
/// - **Dispatch**: Assigning item `i` of a batch to worker `i mod size`, nothing else
/// - **Collection**: Asking each item's owner for its result
///
/// Assignment ignores how expensive an item is. One slow item holds up its worker while the
/// others sit idle; there is no work stealing.
///
/// # Example
///
/// ```ignore
/// let pool = WorkerPool::new(&PoolConfig::default().with_size(4))?;
///
/// let ownership = pool.submit_all(&[7, 10, 20])?;
/// let report = pool.collect_all(&ownership).await;
///
/// // Stop every worker when done
/// pool.shutdown().await?;
/// ```
pub struct WorkerPool {
    workers: Vec<WorkerClient>,

    /// Task handles for the workers this pool started (used for shutdown)
    handles: Vec<JoinHandle<FactorWorker>>,
}

impl WorkerPool {
    /// Starts `config.size` workers, each generating its own primes.
    pub fn new(config: &PoolConfig) -> Result<Self, ConfigError> {
        Self::start(config, WorkerArgs::default())
    }

    /// Starts `config.size` workers that share one read-only prime table.
    pub fn with_primes(config: &PoolConfig, primes: Arc<PrimeTable>) -> Result<Self, ConfigError> {
        Self::start(
            config,
            WorkerArgs {
                primes: Some(primes),
            },
        )
    }

    fn start(config: &PoolConfig, args: WorkerArgs) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut workers = Vec::with_capacity(config.size);
        let mut handles = Vec::with_capacity(config.size);
        for slot in 0..config.size {
            let (server, client) = worker_actor::new(format!("worker-{slot}"), config.call_timeout());
            handles.push(tokio::spawn(server.run(args.clone())));
            workers.push(client);
        }

        info!(
            size = config.size,
            shared_primes = args.primes.is_some(),
            "Pool started"
        );
        Ok(Self { workers, handles })
    }

    /// Builds a pool over workers started elsewhere (for example mock actors).
    ///
    /// [`WorkerPool::shutdown`] stops these workers but has no task handles to wait on.
    pub fn from_workers(workers: Vec<WorkerClient>) -> Result<Self, ConfigError> {
        if workers.is_empty() {
            return Err(ConfigError::ZeroPoolSize);
        }
        Ok(Self {
            workers,
            handles: Vec::new(),
        })
    }

    pub fn size(&self) -> usize {
        self.workers.len()
    }

    pub fn workers(&self) -> &[WorkerClient] {
        &self.workers
    }

    /// Slot that owns the item at `index` in a batch.
    pub fn slot(&self, index: usize) -> usize {
        index % self.workers.len()
    }

    /// Worker that owns the item at `index` in a batch.
    pub fn assign(&self, index: usize) -> &WorkerClient {
        &self.workers[self.slot(index)]
    }

    /// Casts every item to its worker, in batch order, and records who owns it.
    ///
    /// Nothing waits for the computations; this returns once every request is queued.
    #[instrument(skip_all, fields(items = items.len(), size = self.size()))]
    pub fn submit_all(&self, items: &[u64]) -> Result<Ownership, WorkerError> {
        let mut ownership = Ownership::new();
        for (index, &item) in items.iter().enumerate() {
            let slot = self.slot(index);
            self.workers[slot].factorize(item)?;
            ownership.insert(item, slot);
        }
        debug!("All items submitted");
        Ok(ownership)
    }

    /// Asks each item's owner for its result.
    ///
    /// Failures (not found, timed out, worker gone) are logged and listed in the report; they
    /// never abort the collection of the other items.
    #[instrument(skip_all, fields(items = ownership.len()))]
    pub async fn collect_all(&self, ownership: &Ownership) -> BatchReport {
        let mut report = BatchReport::default();
        for (&item, &slot) in ownership {
            let worker = &self.workers[slot];
            match worker.get_result(item).await {
                Ok(factors) => {
                    report.results.insert(item, factors);
                }
                Err(error) => {
                    warn!(item, worker = worker.name(), %error, "Dropping item");
                    report.failures.push(ItemFailure { item, error });
                }
            }
        }
        debug!(
            completed = report.results.len(),
            failed = report.failures.len(),
            "Collection finished"
        );
        report
    }

    /// Stops every worker and waits for the ones this pool started.
    ///
    /// Each worker finishes whatever is already queued before it exits.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all workers shut down cleanly
    /// - `Err(LifecycleError)` if any worker task failed or panicked
    pub async fn shutdown(self) -> Result<(), LifecycleError> {
        info!(size = self.size(), "Shutting down pool...");

        for worker in &self.workers {
            if let Err(e) = worker.stop() {
                debug!(worker = worker.name(), error = %e, "Worker already stopped");
            }
        }
        drop(self.workers);

        // Every handle is awaited, even after a failure; the first failure is reported.
        let mut first_failure = None;
        for handle in self.handles {
            match handle.await {
                Ok(state) => debug!(completed = state.results().len(), "Worker finished"),
                Err(e) => {
                    error!("Worker task failed: {:?}", e);
                    first_failure.get_or_insert(LifecycleError::TaskFailed(e.to_string()));
                }
            }
        }

        match first_failure {
            Some(failure) => Err(failure),
            None => {
                info!("Pool shutdown complete.");
                Ok(())
            }
        }
    }
}
