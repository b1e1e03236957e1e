//! Arbiter Core — deterministic randomness and shared domain errors.
//!
//! This crate defines the PRNG capability that check resolution and
//! simulation consume, the concrete mulberry32 generator behind it, and the
//! error taxonomy shared by all layers. It contains no I/O and no
//! infrastructure code.

pub mod error;
pub mod rng;
