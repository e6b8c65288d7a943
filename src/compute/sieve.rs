//! Prime generation.

use std::collections::HashMap;

/// Incremental prime generator.
///
/// Each prime `p` found is scheduled at `p * p`; composites are recognised when their number
/// comes up and their witnesses are pushed forward. Memory grows with the number of primes
/// yielded so far, not with the largest value reached.
#[derive(Debug)]
pub struct Primes {
    next: u64,
    composites: HashMap<u64, Vec<u64>>,
}

impl Primes {
    pub fn new() -> Self {
        Self {
            next: 2,
            composites: HashMap::new(),
        }
    }
}

impl Default for Primes {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Primes {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        loop {
            let candidate = self.next;
            self.next = self.next.checked_add(1)?;

            match self.composites.remove(&candidate) {
                Some(witnesses) => {
                    for p in witnesses {
                        if let Some(slot) = candidate.checked_add(p) {
                            self.composites.entry(slot).or_default().push(p);
                        }
                    }
                }
                None => {
                    if let Some(square) = candidate.checked_mul(candidate) {
                        self.composites.insert(square, vec![candidate]);
                    }
                    return Some(candidate);
                }
            }
        }
    }
}

/// Width of the first [`SegmentedPrimes`] window; each later one doubles, up to the maximum.
const FIRST_WINDOW: u64 = 1 << 8;
const MAX_WINDOW: u64 = 1 << 16;

/// Primes above a starting point, sieved one window at a time.
///
/// Only the primes up to the square root of the current window are kept as sieving primes, so
/// memory stays small however far the iterator runs. Windows start small and grow, so a caller
/// that needs only a few primes pays for only a few.
#[derive(Debug)]
pub struct SegmentedPrimes {
    sieving: Vec<u64>,
    source: Primes,
    low: u64,
    width: u64,
    ready: std::vec::IntoIter<u64>,
}

impl SegmentedPrimes {
    /// Primes strictly greater than `after`, ascending.
    pub fn after(after: u64) -> Self {
        Self {
            sieving: Vec::new(),
            source: Primes::new(),
            low: after.saturating_add(1).max(2),
            width: FIRST_WINDOW,
            ready: Vec::new().into_iter(),
        }
    }

    /// Sieves `[low, low + width)`. Returns false once the range of `u64` is exhausted.
    fn sieve_next_window(&mut self) -> bool {
        let low = self.low;
        let high = low.saturating_add(self.width);
        if low >= high {
            return false;
        }

        let root = isqrt(high - 1);
        while self.sieving.last().map_or(true, |&p| p < root) {
            match self.source.next() {
                Some(p) => self.sieving.push(p),
                None => break,
            }
        }

        let mut composite = vec![false; (high - low) as usize];
        for &p in &self.sieving {
            let Some(square) = p.checked_mul(p).filter(|&sq| sq < high) else {
                break;
            };
            let Some(first_multiple) = low.div_ceil(p).checked_mul(p) else {
                continue;
            };
            let mut multiple = square.max(first_multiple);
            while multiple < high {
                composite[(multiple - low) as usize] = true;
                match multiple.checked_add(p) {
                    Some(next) => multiple = next,
                    None => break,
                }
            }
        }

        let primes: Vec<u64> = composite
            .iter()
            .enumerate()
            .filter_map(|(offset, &is_composite)| (!is_composite).then(|| low + offset as u64))
            .collect();
        self.ready = primes.into_iter();
        self.low = high;
        self.width = (self.width * 2).min(MAX_WINDOW);
        true
    }
}

impl Iterator for SegmentedPrimes {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        loop {
            if let Some(p) = self.ready.next() {
                return Some(p);
            }
            if !self.sieve_next_window() {
                return None;
            }
        }
    }
}

/// All primes `<= limit`, ascending (sieve of Eratosthenes).
pub fn primes_up_to(limit: u64) -> Vec<u64> {
    if limit < 2 {
        return Vec::new();
    }
    let size = limit as usize + 1;
    let mut composite = vec![false; size];
    let mut primes = Vec::new();

    for n in 2..size {
        if composite[n] {
            continue;
        }
        primes.push(n as u64);
        let mut multiple = n.saturating_mul(n);
        while multiple < size {
            composite[multiple] = true;
            multiple += n;
        }
    }
    primes
}

pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    Primes::new()
        .take_while(|&p| p.checked_mul(p).is_some_and(|sq| sq <= n))
        .all(|p| n % p != 0)
}

/// Largest `r` with `r * r <= n`.
pub fn isqrt(n: u64) -> u64 {
    let mut r = (n as f64).sqrt() as u64;
    while r.checked_mul(r).map_or(true, |sq| sq > n) {
        r -= 1;
    }
    while (r + 1).checked_mul(r + 1).is_some_and(|sq| sq <= n) {
        r += 1;
    }
    r
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_matches_sieve() {
        let generated: Vec<u64> = Primes::new().take_while(|&p| p <= 1_000).collect();
        assert_eq!(generated, primes_up_to(1_000));
        assert_eq!(generated.len(), 168);
        assert_eq!(&generated[..6], &[2, 3, 5, 7, 11, 13]);
    }

    #[test]
    fn test_segments_match_sieve_across_windows() {
        let segmented: Vec<u64> = SegmentedPrimes::after(0).take_while(|&p| p <= 200_000).collect();
        assert_eq!(segmented, primes_up_to(200_000));
    }

    #[test]
    fn test_segments_start_after_the_given_value() {
        let next: Vec<u64> = SegmentedPrimes::after(1_000).take(3).collect();
        assert_eq!(next, vec![1_009, 1_013, 1_019]);

        let past_table: Vec<u64> = SegmentedPrimes::after(10_000_000).take(2).collect();
        assert_eq!(past_table, vec![10_000_019, 10_000_079]);
    }

    #[test]
    fn test_sieve_edges() {
        assert!(primes_up_to(0).is_empty());
        assert!(primes_up_to(1).is_empty());
        assert_eq!(primes_up_to(2), vec![2]);
        assert_eq!(primes_up_to(30), vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn test_is_prime() {
        let primes: Vec<u64> = (0..50).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, primes_up_to(49));
        assert!(is_prime(1_000_003));
        assert!(!is_prime(1_000_001));
    }

    #[test]
    fn test_isqrt() {
        assert_eq!(isqrt(0), 0);
        assert_eq!(isqrt(1), 1);
        assert_eq!(isqrt(15), 3);
        assert_eq!(isqrt(16), 4);
        assert_eq!(isqrt(u64::MAX), u32::MAX as u64);
    }
}
