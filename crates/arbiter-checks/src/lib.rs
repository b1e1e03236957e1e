//! Arbiter Checks — pure check-resolution functions.
//!
//! Three resolution models are supported: hybrid (d20 roll plus skill and
//! modifiers against a difficulty class, with natural-20/natural-1
//! overrides), logistic (a sigmoid success probability over a continuous
//! skill-vs-difficulty differential, no dice), and opposed (two actors'
//! totals compared against each other). Each function is a pure mapping from
//! PRNG draws and parameters to an outcome value.

pub mod outcome;
pub mod resolve;

pub use outcome::{CheckOutcome, OpposedOutcome};
pub use resolve::{hybrid_check, logistic_probability, opposed_check};
