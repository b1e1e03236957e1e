//! Test RNG — deterministic `DiceRng` implementations for tests.

use arbiter_core::rng::DiceRng;

/// An RNG that always produces the same values: a fixed integer for
/// `next_int` (regardless of bounds) and a fixed uniform for `next_uniform`.
/// Suitable for tests that pin a single die face or probability draw.
#[derive(Debug, Clone)]
pub struct FixedRng {
    roll: i32,
    uniform: f64,
}

impl FixedRng {
    /// An RNG whose every `next_int` call returns `roll`; `next_uniform`
    /// returns `0.0`.
    #[must_use]
    pub fn roll(roll: i32) -> Self {
        Self { roll, uniform: 0.0 }
    }

    /// An RNG whose every `next_uniform` call returns `uniform`; `next_int`
    /// returns `1`.
    #[must_use]
    pub fn uniform(uniform: f64) -> Self {
        Self { roll: 1, uniform }
    }
}

impl DiceRng for FixedRng {
    fn next_uniform(&mut self) -> f64 {
        self.uniform
    }

    fn next_int(&mut self, _min: i32, _max: i32) -> i32 {
        self.roll
    }
}

/// An RNG that cycles through a predetermined sequence of integer values.
///
/// `next_int` ignores its bounds and returns the next value in the sequence,
/// wrapping around when exhausted, so a short roll pattern can drive an
/// arbitrarily long simulation. Used in tests that need specific, repeatable
/// dice rolls.
#[derive(Debug, Clone)]
pub struct SequenceRng {
    values: Vec<i32>,
    index: usize,
}

impl SequenceRng {
    /// Create a new `SequenceRng` cycling over the given values.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty.
    #[must_use]
    pub fn new(values: Vec<i32>) -> Self {
        assert!(!values.is_empty(), "SequenceRng needs at least one value");
        Self { values, index: 0 }
    }
}

impl DiceRng for SequenceRng {
    fn next_uniform(&mut self) -> f64 {
        0.0
    }

    fn next_int(&mut self, _min: i32, _max: i32) -> i32 {
        let val = self.values[self.index % self.values.len()];
        self.index += 1;
        val
    }
}
