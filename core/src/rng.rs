//! Deterministic random number generation.
//!
//! RULE: Nothing in the generator may call any platform RNG.
//! All randomness flows through SeedStream instances derived
//! from an identifier via derive_seed(). This means:
//!   - The same identifier replays the same draws on every device.
//!   - No state is shared between identifiers or between calls.
//!
//! The stream is a 32-bit linear congruential generator. Its exact
//! recurrence is part of the contract: cached transcripts written by
//! earlier clients must stay reproducible. It is NOT suitable for
//! anything security-sensitive.

use std::collections::HashSet;

const LCG_MULTIPLIER: u64 = 1_664_525;
const LCG_INCREMENT: u64 = 1_013_904_223;
const LCG_MODULUS: u64 = 1 << 32;

/// Number of trailing identifier digits that make up the seed.
const SEED_DIGITS: usize = 6;

/// Derive the stream seed from an identifier.
///
/// Takes the trailing (at most) six ASCII digits of the identifier's
/// digit-only subsequence. Anything that yields no digits or zero
/// degrades to 1; this never fails and never returns 0.
pub fn derive_seed(identifier: &str) -> u64 {
    let digits: Vec<char> = identifier.chars().filter(char::is_ascii_digit).collect();
    let start = digits.len().saturating_sub(SEED_DIGITS);
    let tail: String = digits[start..].iter().collect();
    match tail.parse::<u64>() {
        Ok(0) | Err(_) => 1,
        Ok(seed) => seed,
    }
}

/// Like [`derive_seed`], treating a missing identifier as seed 1.
pub fn derive_seed_opt(identifier: Option<&str>) -> u64 {
    identifier.map_or(1, derive_seed)
}

/// A reproducible stream of values in [0.0, 1.0).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedStream {
    state: u64,
}

impl SeedStream {
    /// Seeds wider than 32 bits are reduced mod 2^32, which leaves every
    /// subsequent draw unchanged.
    pub fn new(seed: u64) -> Self {
        Self { state: seed % LCG_MODULUS }
    }

    /// Advance the recurrence and return the new state.
    pub fn next_u32(&mut self) -> u32 {
        self.state = (self.state * LCG_MULTIPLIER + LCG_INCREMENT) % LCG_MODULUS;
        self.state as u32
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / LCG_MODULUS as f64
    }

    /// Roll an index in [0, n). Panics if n == 0.
    pub fn next_index_below(&mut self, n: usize) -> usize {
        assert!(n > 0, "n must be > 0");
        ((self.next_f64() * n as f64).floor() as usize).min(n - 1)
    }
}

/// Sample `count` elements from `pool` without replacement.
///
/// When `count` covers the whole pool the pool is returned as-is, in
/// order. Otherwise indices are drawn from a fresh stream and kept in
/// first-seen order until `count` distinct ones are collected. The
/// generator has full period, so every index is eventually reached.
pub fn pick_deterministic<T: Clone>(pool: &[T], count: usize, seed: u64) -> Vec<T> {
    if pool.is_empty() {
        return Vec::new();
    }
    if count >= pool.len() {
        return pool.to_vec();
    }

    let mut stream = SeedStream::new(seed);
    let mut used: HashSet<usize> = HashSet::with_capacity(count);
    let mut picked = Vec::with_capacity(count);
    while picked.len() < count {
        let idx = stream.next_index_below(pool.len());
        if used.insert(idx) {
            picked.push(pool[idx].clone());
        }
        debug_assert!(used.len() <= pool.len());
    }
    picked
}
