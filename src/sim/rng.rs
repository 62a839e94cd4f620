//! Random sources for lane generation
//!
//! Everything random in the simulation (lane types, hazard layout, train
//! timers) goes through [`RandomSource`], so a run is reproducible from its
//! seed and tests can script exact draws with [`ScriptedRng`].

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Uniform unit draws plus the derived helpers the generators need
pub trait RandomSource {
    /// Next uniform value in `[0, 1)`
    fn next_unit(&mut self) -> f64;

    /// Uniform integer in `[lo, hi]`
    fn int_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
        debug_assert!(hi >= lo);
        let span = (hi - lo + 1) as f64;
        let offset = (self.next_unit() * span).floor() as i32;
        lo + offset.min(hi - lo)
    }

    /// Uniform float in `[lo, hi]`
    fn float_range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (self.next_unit() as f32) * (hi - lo)
    }

    /// Uniform index in `[0, len)`
    fn index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        ((self.next_unit() * len as f64) as usize).min(len - 1)
    }

    /// Fair coin flip
    fn coin(&mut self) -> bool {
        self.next_unit() < 0.5
    }
}

impl RandomSource for Pcg32 {
    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Seeded production source
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Fixed, cycling sequence of unit draws
///
/// Values are clamped into `[0, 1)`; an empty script always yields 0.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptedRng {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedRng {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// A source that always draws the same value
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws taken so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRng {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            self.cursor += 1;
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(0.0, 1.0 - f64::EPSILON)
    }
}
