use factor_pool::batch;
use factor_pool::clients::{ActorClient, WorkerClient};
use factor_pool::config::PoolConfig;
use factor_pool::framework::mock::MockActor;
use factor_pool::lifecycle::WorkerPool;
use factor_pool::model::ItemFailure;
use factor_pool::worker_actor::{self, FactorWorker, WorkerArgs, WorkerCast, WorkerError};
use std::time::Duration;

/// For mocks that are scripted never to answer.
const TIMEOUT: Duration = Duration::from_millis(50);
/// For real workers, which always answer; generous so a loaded host cannot fail them.
const WORKER_TIMEOUT: Duration = Duration::from_secs(5);

/// A worker that never answers costs only its own items; the rest of the batch still arrives.
#[tokio::test]
async fn test_silent_worker_only_loses_its_own_items() {
    let (real, handle) = worker_actor::spawn("worker-0", WORKER_TIMEOUT, WorkerArgs::default());

    let mut silent = MockActor::<FactorWorker>::new("worker-1");
    // Items at odd positions go to slot 1
    silent.expect_cast();
    silent.expect_cast();
    silent.expect_call().never_reply();
    silent.expect_call().never_reply();

    let pool = WorkerPool::from_workers(vec![real, WorkerClient::new(silent.actor(), TIMEOUT)]).unwrap();
    let report = batch::run(pool, &[7, 10, 20, 30]).await.unwrap();

    assert_eq!(report.results.len(), 2);
    assert_eq!(report.results[&7], vec![7]);
    assert_eq!(report.results[&20], vec![2, 2, 5]);
    assert_eq!(
        report.failures,
        vec![
            ItemFailure {
                item: 10,
                error: WorkerError::Timeout(TIMEOUT),
            },
            ItemFailure {
                item: 30,
                error: WorkerError::Timeout(TIMEOUT),
            },
        ]
    );

    let casts = silent.take_casts();
    assert!(matches!(casts[..], [WorkerCast::Factorize(10), WorkerCast::Factorize(30)]));
    silent.verify();

    // The real worker was stopped by the batch and exits with its results
    let state = handle.await.unwrap();
    assert_eq!(state.results().len(), 2);
}

/// A worker that hangs up on a call is reported as a communication failure.
#[tokio::test]
async fn test_dropped_reply_is_reported() {
    let mut flaky = MockActor::<FactorWorker>::new("flaky");
    flaky.expect_cast();
    flaky.expect_call().drop_reply();

    let pool = WorkerPool::from_workers(vec![WorkerClient::new(flaky.actor(), TIMEOUT)]).unwrap();
    let report = batch::run(pool, &[12]).await.unwrap();

    assert!(report.results.is_empty());
    assert!(matches!(
        report.failures[..],
        [ItemFailure {
            item: 12,
            error: WorkerError::ActorCommunicationError(_),
        }]
    ));
    flaky.verify();
}

/// Asking before submitting finds nothing; asking after finds the result.
#[tokio::test]
async fn test_lookup_before_and_after_submission() {
    let (worker, handle) = worker_actor::spawn("lonely", WORKER_TIMEOUT, WorkerArgs::default());

    assert_eq!(worker.get_result(99).await, Err(WorkerError::NotFound(99)));
    worker.factorize(99).unwrap();
    assert_eq!(worker.get_result(99).await, Ok(vec![3, 3, 11]));
    assert_eq!(worker.completed().await, Ok(1));

    let pool = WorkerPool::from_workers(vec![worker]).unwrap();
    pool.shutdown().await.unwrap();
    assert_eq!(handle.await.unwrap().results().len(), 1);
}

/// Collecting from a worker that has already stopped fails per item instead of hanging.
#[tokio::test]
async fn test_collect_from_stopped_worker() {
    let config = PoolConfig::default().with_size(1).with_call_timeout(WORKER_TIMEOUT);
    let pool = WorkerPool::new(&config).unwrap();
    let ownership = pool.submit_all(&[15]).unwrap();

    // Queued behind the cast, ahead of the lookup
    pool.workers()[0].stop().unwrap();

    let report = pool.collect_all(&ownership).await;
    assert!(report.results.is_empty());
    assert!(matches!(
        report.failures[..],
        [ItemFailure {
            item: 15,
            error: WorkerError::ActorCommunicationError(_),
        }]
    ));
    pool.shutdown().await.unwrap();
}
