//! Shared deterministic `DiceRng` implementations for Arbiter tests.

mod rng;

pub use rng::{FixedRng, SequenceRng};
