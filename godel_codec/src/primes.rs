//! Deterministic prime sequence with a shared, lazily grown cache.
//!
//! Primes are indexed from zero: `nth(0) = 2`, `nth(1) = 3`, `nth(2) = 5`.
//! The first two are reserved for the state and head exponents; tape cell
//! `j` uses `nth(j + TAPE_OFFSET)`.

use std::sync::{PoisonError, RwLock};

use log::trace;

/// Base carrying the state exponent.
pub const STATE_PRIME: u64 = 2;
/// Base carrying the head exponent.
pub const HEAD_PRIME: u64 = 3;
/// Index of the prime used by tape cell 0.
pub const TAPE_OFFSET: usize = 2;

/// Primes in increasing order, grown by trial division on demand.
///
/// Readers share the cache; a miss takes the write lock and extends it.
/// The returned values never depend on what is already cached.
#[derive(Debug)]
pub struct PrimeTable {
    primes: RwLock<Vec<u64>>,
}

impl PrimeTable {
    pub fn new() -> Self {
        Self {
            primes: RwLock::new(vec![STATE_PRIME, HEAD_PRIME]),
        }
    }

    /// The `index`-th prime, zero-indexed.
    pub fn nth(&self, index: usize) -> u64 {
        {
            let primes = self.primes.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(&p) = primes.get(index) {
                return p;
            }
        }
        let mut primes = self.primes.write().unwrap_or_else(PoisonError::into_inner);
        extend_to(&mut primes, index);
        primes[index]
    }

    /// The prime whose exponent stores tape cell `cell`.
    pub fn tape_prime(&self, cell: usize) -> u64 {
        self.nth(cell + TAPE_OFFSET)
    }

    /// Number of primes currently cached.
    pub fn cached_len(&self) -> usize {
        self.primes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Default for PrimeTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Grow `primes` until it holds index `index`.
///
/// Relies on `primes` being every prime up to its last element, which holds
/// because it starts as `[2, 3]` and only ever grows in order.
fn extend_to(primes: &mut Vec<u64>, index: usize) {
    let before = primes.len();
    let mut candidate = primes.last().copied().unwrap_or(HEAD_PRIME) + 2;
    while primes.len() <= index {
        if is_prime_against(primes, candidate) {
            primes.push(candidate);
        }
        candidate += 2;
    }
    trace!("prime table grown from {} to {} entries", before, primes.len());
}

fn is_prime_against(known: &[u64], candidate: u64) -> bool {
    known
        .iter()
        .take_while(|&&p| p * p <= candidate)
        .all(|&p| candidate % p != 0)
}
