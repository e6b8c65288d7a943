//! Stateless compute collaborator.
//!
//! Workers call [`factor`] (or [`PrimeTable::factor`] when a shared table is available).
//! Nothing here knows about actors or concurrency.

pub mod factor;
pub mod sieve;

pub use factor::{factor, PrimeTable, MAX_TABLE_LIMIT};
pub use sieve::{is_prime, isqrt, primes_up_to, Primes, SegmentedPrimes};

/// Prime factors of a number, ascending, with multiplicity.
pub type Factors = Vec<u64>;
