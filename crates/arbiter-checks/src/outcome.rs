//! Outcome types produced by check resolution.

use serde::{Deserialize, Serialize};

/// The result of a single hybrid (dice-based) check.
///
/// Immutable once produced. `roll` is the natural d20 value in `[1, 20]`;
/// `total` is the roll plus skill and modifiers; `margin` is `total - dc`
/// except when the critical floor raises it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// Whether the check succeeded after overrides.
    pub success: bool,
    /// The natural die roll, in `[1, 20]`.
    pub roll: i32,
    /// Roll plus skill plus modifiers.
    pub total: i32,
    /// Signed distance from the difficulty class (floored at 10 on a
    /// critical).
    pub margin: i32,
    /// Natural 20: success is forced and the margin floored at 10.
    pub critical: bool,
    /// Natural 1: failure is forced regardless of total.
    pub fumble: bool,
}

/// The result of an opposed check between two actors.
///
/// Both sub-outcomes are carried for transparency. They were resolved against
/// a difficulty class of zero, so their `success` fields are not meaningful
/// on their own; only the `total` comparison decides the winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpposedOutcome {
    /// Whether the attacker's total strictly exceeded the defender's. Ties
    /// resolve to `false`.
    pub attacker_wins: bool,
    /// `attacker.total - defender.total`.
    pub margin: i32,
    /// The attacker's sub-outcome.
    pub attacker: CheckOutcome,
    /// The defender's sub-outcome.
    pub defender: CheckOutcome,
}
