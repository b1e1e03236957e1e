//! Arbiter Sim — Monte Carlo estimation of check statistics.
//!
//! Each runner drives its resolution logic for exactly `iterations` trials
//! against one exclusively-owned PRNG and aggregates the outcomes into rates
//! and averages. Runs are synchronous and deterministic under a fixed seed;
//! independent runs with their own generators are embarrassingly parallel.

pub mod result;
pub mod runner;

pub use result::{HybridSimResult, LogisticSimResult, OpposedSimResult};
pub use runner::{simulate_hybrid, simulate_logistic, simulate_opposed};
