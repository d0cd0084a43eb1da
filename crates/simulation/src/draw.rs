//! Random sources that decide whether a trade wins.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use trade_sim_domain::math::round_dp2;

/// Inclusive lower bound of a draw.
pub const MIN_DRAW: f64 = 1.0;
/// Exclusive upper bound of a raw draw. After rounding a draw can equal it.
pub const MAX_DRAW: f64 = 101.0;

/// Source of per-trade draws.
///
/// A trade wins when its draw is less than or equal to the win rate, so
/// draws are expressed on the same 1..=101 percent scale.
pub trait DrawSource {
    /// Returns the draw for the next trade.
    fn next_draw(&mut self) -> Decimal;
}

/// Uniform draws in `[1, 101)`, rounded to two decimal places.
pub struct UniformDraws<R: Rng> {
    rng: R,
}

impl<R: Rng> UniformDraws<R> {
    /// Wraps an existing random number generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl UniformDraws<StdRng> {
    /// Reproducible draws from a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Draws seeded from the operating system.
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> DrawSource for UniformDraws<R> {
    fn next_draw(&mut self) -> Decimal {
        let raw = self.rng.random_range(MIN_DRAW..MAX_DRAW);
        // Finite values in [1, 101) always convert.
        Decimal::from_f64(raw).map_or(Decimal::ONE, round_dp2)
    }
}

/// Replays a fixed sequence of draws, starting over when exhausted.
///
/// An empty sequence yields [`MAX_DRAW`], which loses at every win rate.
#[derive(Debug, Clone)]
pub struct FixedDraws {
    draws: Vec<Decimal>,
    next: usize,
}

impl FixedDraws {
    /// Creates a replaying source.
    #[must_use]
    pub fn new(draws: Vec<Decimal>) -> Self {
        Self { draws, next: 0 }
    }

    /// Same draw for every trade.
    #[must_use]
    pub fn constant(draw: Decimal) -> Self {
        Self::new(vec![draw])
    }
}

impl DrawSource for FixedDraws {
    fn next_draw(&mut self) -> Decimal {
        if self.draws.is_empty() {
            return Decimal::from(MAX_DRAW as u32);
        }
        let draw = self.draws[self.next];
        self.next = (self.next + 1) % self.draws.len();
        draw
    }
}
