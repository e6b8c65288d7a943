//! Trial-division factorization.

use super::sieve::{isqrt, primes_up_to, SegmentedPrimes};
use super::Factors;

/// Prime factors of `n`, ascending, with multiplicity.
///
/// Primes are sieved afresh for every call, a window at a time and only as far as `n` needs.
/// Use a [`PrimeTable`] to share the small ones.
///
/// # Panics
/// If `n < 2`. Callers validate work items before they reach a worker.
pub fn factor(n: u64) -> Factors {
    assert!(n >= 2, "factor requires n >= 2, got {n}");
    trial_divide(n, SegmentedPrimes::after(0))
}

/// Divides out each prime in turn until the remainder has no factor below its square root.
/// `primes` must cover every prime up to `isqrt(n)`.
fn trial_divide(mut n: u64, primes: impl IntoIterator<Item = u64>) -> Factors {
    let mut factors = Vec::new();
    for p in primes {
        if p.checked_mul(p).map_or(true, |sq| sq > n) {
            break;
        }
        while n % p == 0 {
            factors.push(p);
            n /= p;
        }
    }
    if n > 1 {
        factors.push(n);
    }
    factors
}

/// Upper bound on the table a batch builds for itself. Larger items continue past the table
/// with primes sieved on demand.
pub const MAX_TABLE_LIMIT: u64 = 1 << 22;

/// Read-only table of primes computed once and shared (behind an `Arc`) by every worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeTable {
    primes: Vec<u64>,
    limit: u64,
}

impl PrimeTable {
    /// All primes up to `limit`.
    pub fn new(limit: u64) -> Self {
        Self {
            primes: primes_up_to(limit),
            limit,
        }
    }

    /// A table large enough to factor every item in `items`, capped at [`MAX_TABLE_LIMIT`].
    pub fn for_items(items: &[u64]) -> Self {
        let largest = items.iter().copied().max().unwrap_or(0);
        Self::new(isqrt(largest).min(MAX_TABLE_LIMIT))
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn primes(&self) -> &[u64] {
        &self.primes
    }

    /// True if every prime factor of `n` that the table misses is `n`'s last one.
    pub fn covers(&self, n: u64) -> bool {
        let next = self.limit + 1;
        next.checked_mul(next).map_or(true, |sq| n < sq)
    }

    /// Same result as [`factor`].
    ///
    /// Divides by the table's primes first. If the remainder still has a possible factor above
    /// the table, the search continues with primes sieved from `limit + 1`, never from 2.
    ///
    /// # Panics
    /// If `n < 2`.
    pub fn factor(&self, n: u64) -> Factors {
        assert!(n >= 2, "factor requires n >= 2, got {n}");
        let table = self.primes.iter().copied();
        if self.covers(n) {
            trial_divide(n, table)
        } else {
            trial_divide(n, table.chain(SegmentedPrimes::after(self.limit)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::is_prime;

    fn check_round_trip(n: u64, factors: &[u64]) {
        assert_eq!(factors.iter().product::<u64>(), n, "product of {factors:?}");
        assert!(factors.windows(2).all(|w| w[0] <= w[1]), "{factors:?} not sorted");
        assert!(factors.iter().all(|&p| is_prime(p)), "{factors:?} has a composite");
    }

    #[test]
    fn test_known_factorizations() {
        assert_eq!(factor(2), vec![2]);
        assert_eq!(factor(7), vec![7]);
        assert_eq!(factor(10), vec![2, 5]);
        assert_eq!(factor(20), vec![2, 2, 5]);
        assert_eq!(factor(30), vec![2, 3, 5]);
        assert_eq!(factor(99), vec![3, 3, 11]);
        assert_eq!(factor(1024), vec![2; 10]);
        assert_eq!(factor(600_851_475_143), vec![71, 839, 1471, 6857]);
    }

    #[test]
    fn test_round_trip_for_small_numbers() {
        for n in 2..5_000 {
            check_round_trip(n, &factor(n));
        }
    }

    #[test]
    fn test_large_prime_and_square_of_prime() {
        assert_eq!(factor(1_000_003), vec![1_000_003]);
        assert_eq!(factor(1_000_003 * 1_000_003), vec![1_000_003, 1_000_003]);
    }

    #[test]
    #[should_panic(expected = "factor requires n >= 2")]
    fn test_rejects_one() {
        factor(1);
    }

    #[test]
    fn test_table_agrees_with_factor() {
        let items: Vec<u64> = (2..3_000).collect();
        let table = PrimeTable::for_items(&items);
        assert_eq!(table.limit(), isqrt(2_999));
        for &n in &items {
            assert!(table.covers(n));
            assert_eq!(table.factor(n), factor(n));
        }
    }

    #[test]
    fn test_small_table_falls_back() {
        let table = PrimeTable::new(3);
        assert_eq!(table.primes(), &[2, 3]);
        // 15 < 16 is within reach: remainder 5 is prime
        assert!(table.covers(15));
        assert_eq!(table.factor(15), vec![3, 5]);
        // 49 needs 7
        assert!(!table.covers(49));
        assert_eq!(table.factor(49), vec![7, 7]);
        assert_eq!(table.factor(2 * 3 * 3 * 101 * 101), vec![2, 3, 3, 101, 101]);
    }

    #[test]
    fn test_item_above_the_capped_table() {
        let n = 10_000_019 * 10_000_079;
        let table = PrimeTable::for_items(&[n]);
        assert_eq!(table.limit(), MAX_TABLE_LIMIT);
        assert!(!table.covers(n));

        assert_eq!(table.factor(n), vec![10_000_019, 10_000_079]);
        assert_eq!(table.factor(4 * n), vec![2, 2, 10_000_019, 10_000_079]);
        assert_eq!(factor(n), vec![10_000_019, 10_000_079]);
    }
}
