//! Lehmer / Park–Miller minimal-standard PRNG.
//!
//! `state = state * 16807 mod (2^31 - 1)`, output `(state - 1) / (2^31 - 2)`.
//! The whole logo is a pure function of the seed handed to [`ParkMiller::new`],
//! so a stream is owned by exactly one builder and never shared.
//!
//! A seed that reduces to 0 (0 itself or any multiple of the modulus) leaves the
//! state stuck at 0 and every draw returns the same tiny negative value
//! `-1 / 2147483646`. The condition is reported via
//! [`ParkMiller::is_degenerate`] instead of being patched over.

use crate::error::{LogoError, Result};

/// Mersenne prime 2^31 - 1.
pub const MODULUS: i64 = 2_147_483_647;
pub const MULTIPLIER: i64 = 16_807;

/// Seed used by tests and by `LogoParams::default()`.
pub const DEFAULT_SEED: u64 = 123_456;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParkMiller {
    state: i64,
}

impl ParkMiller {
    /// Create a stream; the seed is reduced modulo [`MODULUS`].
    pub fn new(seed: u64) -> Self {
        Self { state: (seed % MODULUS as u64) as i64 }
    }

    /// Create a stream from a seed arriving from a host as a float.
    /// Non-finite, negative or fractional seeds are rejected.
    pub fn try_from_f64(seed: f64) -> Result<Self> {
        if !seed.is_finite() || seed < 0.0 || seed.fract() != 0.0 {
            return Err(LogoError::InvalidSeed(seed));
        }
        Ok(Self::new(seed as u64))
    }

    /// True when the seed reduced to 0 and the stream is stuck.
    pub fn is_degenerate(&self) -> bool {
        self.state == 0
    }

    /// Next value in `[0, 1)` (see the module docs for the degenerate case).
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state * MULTIPLIER % MODULUS;
        (self.state - 1) as f64 / (MODULUS - 1) as f64
    }

    /// `floor(next * max)` as an integer in `[0, max)`; `max == 0` yields 0.
    pub fn random_int(&mut self, max: u32) -> u32 {
        // Negative products from a degenerate stream saturate to 0.
        (self.next_f64() * f64::from(max)).floor() as u32
    }

    /// Coin flip that succeeds with probability `p`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() <= p
    }
}
