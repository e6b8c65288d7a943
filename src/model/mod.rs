//! Plain data passed between the dispatcher and the batch client.

use crate::compute::Factors;
use crate::worker_actor::WorkerError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which pool slot owns each submitted item.
pub type Ownership = BTreeMap<u64, usize>;

/// An item that was submitted but produced no result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFailure {
    pub item: u64,
    pub error: WorkerError,
}

/// Everything a batch collected: results for the items that succeeded and the reason for each
/// item that did not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub results: BTreeMap<u64, Factors>,
    pub failures: Vec<ItemFailure>,
}

impl BatchReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
