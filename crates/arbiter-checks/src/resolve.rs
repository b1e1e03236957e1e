//! Check resolution functions.

use arbiter_core::error::DomainError;
use arbiter_core::rng::DiceRng;

use crate::outcome::{CheckOutcome, OpposedOutcome};

/// Default steepness of the logistic success curve.
pub const DEFAULT_K: f64 = 0.5;

/// Resolves a hybrid (dice-based) check: one d20 draw plus skill and
/// modifiers against a difficulty class.
///
/// A natural 20 forces success, marks the outcome critical and floors the
/// margin at 10. A natural 1 forces failure and marks the outcome a fumble,
/// overriding any success computed from the total. The two overrides are
/// mutually exclusive on a single draw.
///
/// `total` and `margin` saturate at the `i32` bounds instead of wrapping, so
/// extreme but type-valid skill/modifier/DC values cannot corrupt the
/// outcome.
pub fn hybrid_check(rng: &mut dyn DiceRng, skill: i32, modifiers: i32, dc: i32) -> CheckOutcome {
    let roll = rng.next_int(1, 20);
    let total = roll.saturating_add(skill).saturating_add(modifiers);

    let mut outcome = CheckOutcome {
        success: total >= dc,
        roll,
        total,
        margin: total.saturating_sub(dc),
        critical: false,
        fumble: false,
    };

    if roll == 20 {
        outcome.critical = true;
        outcome.success = true;
        outcome.margin = outcome.margin.max(10);
    }
    if roll == 1 {
        outcome.fumble = true;
        outcome.success = false;
    }

    outcome
}

/// Logistic success probability over a continuous skill-vs-difficulty
/// differential: `1 / (1 + e^(-k * (diff - x0)))`.
///
/// Pure, no randomness. Strictly increasing in `diff` when `k > 0`, and
/// exactly `0.5` at `diff == x0` for any `k`.
///
/// # Errors
///
/// Returns [`DomainError::InvalidParameter`] if `diff`, `k` or `x0` is NaN
/// or infinite, rather than propagating NaN into the result.
pub fn logistic_probability(diff: f64, k: f64, x0: f64) -> Result<f64, DomainError> {
    require_finite("diff", diff)?;
    require_finite("k", k)?;
    require_finite("x0", x0)?;
    Ok(1.0 / (1.0 + (-k * (diff - x0)).exp()))
}

/// Resolves an opposed check between an attacker and a defender.
///
/// Each side performs a [`hybrid_check`] against a difficulty class of zero
/// (only the totals matter; the sub-outcomes' `success` fields carry no
/// meaning here) and the attacker wins on a strictly greater total. Ties
/// resolve to the defender.
pub fn opposed_check(
    rng: &mut dyn DiceRng,
    att_skill: i32,
    att_mods: i32,
    def_skill: i32,
    def_mods: i32,
) -> OpposedOutcome {
    let attacker = hybrid_check(rng, att_skill, att_mods, 0);
    let defender = hybrid_check(rng, def_skill, def_mods, 0);

    OpposedOutcome {
        attacker_wins: attacker.total > defender.total,
        margin: attacker.total.saturating_sub(defender.total),
        attacker,
        defender,
    }
}

fn require_finite(name: &'static str, value: f64) -> Result<(), DomainError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(DomainError::InvalidParameter { name, value })
    }
}
