//! Monte Carlo simulation runners.

use arbiter_checks::resolve::{hybrid_check, logistic_probability};
use arbiter_core::error::DomainError;
use arbiter_core::rng::DiceRng;

use crate::result::{HybridSimResult, LogisticSimResult, OpposedSimResult};

/// Runs `hybrid_check` for exactly `iterations` trials against one PRNG,
/// accumulating success, margin, critical and fumble statistics.
///
/// # Errors
///
/// Returns [`DomainError::InvalidIterations`] if `iterations` is zero, so no
/// result field can ever be a division-by-zero NaN.
pub fn simulate_hybrid(
    rng: &mut dyn DiceRng,
    iterations: u32,
    skill: i32,
    modifiers: i32,
    dc: i32,
) -> Result<HybridSimResult, DomainError> {
    require_iterations(iterations)?;

    let mut successes: u32 = 0;
    let mut margin_sum: i64 = 0;
    let mut crits: u32 = 0;
    let mut fumbles: u32 = 0;

    for _ in 0..iterations {
        let outcome = hybrid_check(rng, skill, modifiers, dc);
        if outcome.success {
            successes += 1;
        }
        margin_sum += i64::from(outcome.margin);
        if outcome.critical {
            crits += 1;
        }
        if outcome.fumble {
            fumbles += 1;
        }
    }

    Ok(HybridSimResult {
        iterations,
        successes,
        success_rate: rate(successes, iterations),
        avg_margin: mean(margin_sum, iterations),
        crits,
        fumbles,
    })
}

/// Runs `iterations` logistic trials: each recomputes the success
/// probability from `skill + modifiers - dc` (identical every time for fixed
/// inputs; the recomputation keeps the loop general over per-trial
/// parameters) and counts a success when a uniform draw falls below it.
///
/// # Errors
///
/// Returns [`DomainError::InvalidIterations`] if `iterations` is zero, and
/// [`DomainError::InvalidParameter`] if `k` is NaN or infinite.
pub fn simulate_logistic(
    rng: &mut dyn DiceRng,
    iterations: u32,
    skill: i32,
    modifiers: i32,
    dc: i32,
    k: f64,
) -> Result<LogisticSimResult, DomainError> {
    require_iterations(iterations)?;

    let mut successes: u32 = 0;
    let mut p_sum: f64 = 0.0;

    for _ in 0..iterations {
        let diff = f64::from(skill + modifiers - dc);
        let p = logistic_probability(diff, k, 0.0)?;
        p_sum += p;
        if rng.next_uniform() < p {
            successes += 1;
        }
    }

    Ok(LogisticSimResult {
        iterations,
        successes,
        success_rate: rate(successes, iterations),
        avg_p: p_sum / f64::from(iterations),
    })
}

/// Runs `iterations` opposed roll-offs: two independent d20 draws per trial,
/// compared as `roll_a + att_skill + att_mods` vs `roll_d + def_skill +
/// def_mods`.
///
/// This path deliberately does not go through `opposed_check`: no
/// critical/fumble overrides apply here, mirroring the observed behavior of
/// the source system the simulation reproduces.
///
/// # Errors
///
/// Returns [`DomainError::InvalidIterations`] if `iterations` is zero.
pub fn simulate_opposed(
    rng: &mut dyn DiceRng,
    iterations: u32,
    att_skill: i32,
    att_mods: i32,
    def_skill: i32,
    def_mods: i32,
) -> Result<OpposedSimResult, DomainError> {
    require_iterations(iterations)?;

    let mut att_wins: u32 = 0;
    let mut margin_sum: i64 = 0;

    // Totals are widened to i64 so extreme skill values cannot overflow the
    // per-trial arithmetic.
    for _ in 0..iterations {
        let att_total =
            i64::from(rng.next_int(1, 20)) + i64::from(att_skill) + i64::from(att_mods);
        let def_total =
            i64::from(rng.next_int(1, 20)) + i64::from(def_skill) + i64::from(def_mods);
        if att_total > def_total {
            att_wins += 1;
        }
        margin_sum += att_total - def_total;
    }

    Ok(OpposedSimResult {
        iterations,
        att_wins,
        win_rate: rate(att_wins, iterations),
        avg_margin: mean(margin_sum, iterations),
    })
}

fn require_iterations(iterations: u32) -> Result<(), DomainError> {
    if iterations == 0 {
        return Err(DomainError::InvalidIterations);
    }
    Ok(())
}

fn rate(count: u32, iterations: u32) -> f64 {
    f64::from(count) / f64::from(iterations)
}

#[allow(clippy::cast_precision_loss)]
fn mean(sum: i64, iterations: u32) -> f64 {
    sum as f64 / f64::from(iterations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbiter_core::rng::Mulberry32;
    use arbiter_test_support::{FixedRng, SequenceRng};

    #[test]
    fn test_hybrid_deterministic_roll_always_succeeds() {
        // 10 + 4 + 1 = 15 >= 14, and never a natural 1 or 20.
        let mut rng = FixedRng::roll(10);
        let result = simulate_hybrid(&mut rng, 1000, 4, 1, 14).unwrap();

        assert_eq!(result.iterations, 1000);
        assert_eq!(result.successes, 1000);
        assert!((result.success_rate - 1.0).abs() < f64::EPSILON);
        assert!((result.avg_margin - 1.0).abs() < f64::EPSILON);
        assert_eq!(result.crits, 0);
        assert_eq!(result.fumbles, 0);
    }

    #[test]
    fn test_hybrid_counts_crits_and_fumbles() {
        let mut rng = SequenceRng::new(vec![20, 1, 10, 10]);
        let result = simulate_hybrid(&mut rng, 4, 0, 0, 5).unwrap();

        assert_eq!(result.crits, 1);
        assert_eq!(result.fumbles, 1);
        // natural 20 succeeds, natural 1 fails, both 10s succeed
        assert_eq!(result.successes, 3);
    }

    #[test]
    fn test_hybrid_rates_lie_in_unit_interval_under_real_rng() {
        let mut rng = Mulberry32::new(2024);
        let result = simulate_hybrid(&mut rng, 10_000, 5, 0, 15).unwrap();

        assert!((0.0..=1.0).contains(&result.success_rate));
        assert!(result.successes <= result.iterations);
        // crit/fumble each hit roughly 1 in 20 draws
        assert!(result.crits > 0);
        assert!(result.fumbles > 0);
    }

    #[test]
    fn test_hybrid_is_reproducible_under_a_seed() {
        let mut a = Mulberry32::new(42);
        let mut b = Mulberry32::new(42);

        let left = simulate_hybrid(&mut a, 5000, 5, 0, 15).unwrap();
        let right = simulate_hybrid(&mut b, 5000, 5, 0, 15).unwrap();
        assert_eq!(left, right);
    }

    #[test]
    fn test_logistic_avg_p_equals_the_constant_probability() {
        let mut rng = Mulberry32::new(7);
        let result = simulate_logistic(&mut rng, 1000, 5, 0, 5, 0.5).unwrap();

        // diff = 0 so every trial's probability is exactly 0.5
        assert!((result.avg_p - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_logistic_always_succeeds_when_draw_is_zero_and_dc_is_low() {
        let mut rng = FixedRng::uniform(0.0);
        let result = simulate_logistic(&mut rng, 100, 5, 0, -100, 1.0).unwrap();

        assert!(result.success_rate > 0.9);
        assert_eq!(result.successes, 100);
    }

    #[test]
    fn test_logistic_rejects_non_finite_k() {
        let mut rng = Mulberry32::new(1);
        let result = simulate_logistic(&mut rng, 10, 5, 0, 15, f64::NAN);
        assert!(matches!(
            result,
            Err(DomainError::InvalidParameter { name: "k", .. })
        ));
    }

    #[test]
    fn test_opposed_fixed_sequence_attacker_always_wins() {
        // attacker draws 12 (+3 = 15), defender draws 8 (+2 = 10), repeating
        let mut rng = SequenceRng::new(vec![12, 8]);
        let result = simulate_opposed(&mut rng, 1000, 3, 0, 2, 0).unwrap();

        assert_eq!(result.att_wins, 1000);
        assert!((result.win_rate - 1.0).abs() < f64::EPSILON);
        assert!((result.avg_margin - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_opposed_path_applies_no_crit_override() {
        // Attacker always rolls a natural 1 but out-modifies the defender;
        // the simulation path has no fumble rule, so the attacker still wins.
        let mut rng = SequenceRng::new(vec![1, 1]);
        let result = simulate_opposed(&mut rng, 100, 10, 0, 0, 0).unwrap();

        assert_eq!(result.att_wins, 100);
    }

    #[test]
    fn test_opposed_extreme_skill_does_not_overflow() {
        let mut rng = SequenceRng::new(vec![12, 8]);
        let result = simulate_opposed(&mut rng, 100, i32::MAX, 0, i32::MIN, 0).unwrap();

        assert_eq!(result.att_wins, 100);
        assert!(result.avg_margin > 0.0);
    }

    #[test]
    fn test_hybrid_extreme_skill_does_not_overflow() {
        let mut rng = FixedRng::roll(10);
        let result = simulate_hybrid(&mut rng, 100, i32::MAX, 0, 0).unwrap();

        assert_eq!(result.successes, 100);
        assert!((result.avg_margin - f64::from(i32::MAX)).abs() < 1.0);
    }

    #[test]
    fn test_zero_iterations_is_rejected_by_every_runner() {
        let mut rng = Mulberry32::new(3);

        assert_eq!(
            simulate_hybrid(&mut rng, 0, 5, 0, 15),
            Err(DomainError::InvalidIterations)
        );
        assert_eq!(
            simulate_logistic(&mut rng, 0, 5, 0, 15, 0.5),
            Err(DomainError::InvalidIterations)
        );
        assert_eq!(
            simulate_opposed(&mut rng, 0, 5, 0, 4, 0),
            Err(DomainError::InvalidIterations)
        );
    }
}
