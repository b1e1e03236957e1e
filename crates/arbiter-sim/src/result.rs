//! Aggregate result types, one per simulation algorithm.

use serde::{Deserialize, Serialize};

/// Aggregate statistics from repeated hybrid checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HybridSimResult {
    /// Number of trials run.
    pub iterations: u32,
    /// Trials that succeeded after overrides.
    pub successes: u32,
    /// `successes / iterations`.
    pub success_rate: f64,
    /// Mean margin across all trials (critical floor included).
    pub avg_margin: f64,
    /// Natural-20 count.
    pub crits: u32,
    /// Natural-1 count.
    pub fumbles: u32,
}

/// Aggregate statistics from repeated logistic draws.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogisticSimResult {
    /// Number of trials run.
    pub iterations: u32,
    /// Trials where the uniform draw fell below the success probability.
    pub successes: u32,
    /// `successes / iterations`.
    pub success_rate: f64,
    /// Mean success probability across trials. Constant inputs make every
    /// trial's probability identical, so this equals that probability.
    pub avg_p: f64,
}

/// Aggregate statistics from repeated opposed roll-offs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OpposedSimResult {
    /// Number of trials run.
    pub iterations: u32,
    /// Trials the attacker won outright (ties are defender wins).
    pub att_wins: u32,
    /// `att_wins / iterations`.
    pub win_rate: f64,
    /// Mean of `attacker_total - defender_total` across trials.
    pub avg_margin: f64,
}
