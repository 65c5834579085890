//! Round score computation.
//!
//! ```text
//! time_bonus   = max(0, 1 - time_taken / time_limit)
//! streak_bonus = min(streak * 0.1, 0.5)
//! score        = reward * (attempts_left / attempts) * (1 + time_bonus + streak_bonus)
//! ```
//!
//! `attempts_left` is the count before the winning guess is charged, so a
//! first-try win scores the full attempts fraction.

use super::difficulty::DifficultyTier;

/// Upper bound on the streak multiplier contribution.
pub const MAX_STREAK_BONUS: f64 = 0.5;
/// Bonus contributed by each consecutive win.
pub const STREAK_STEP: f64 = 0.1;

pub fn time_bonus(tier: &DifficultyTier, time_taken: f64) -> f64 {
    (1.0 - time_taken / tier.time_limit_seconds as f64).max(0.0)
}

pub fn streak_bonus(streak: u32) -> f64 {
    (streak as f64 * STREAK_STEP).min(MAX_STREAK_BONUS)
}

pub fn score(tier: &DifficultyTier, attempts_left: u32, time_taken: f64, streak: u32) -> f64 {
    let fraction = attempts_left as f64 / tier.attempts as f64;
    tier.reward_points as f64 * fraction * (1.0 + time_bonus(tier, time_taken) + streak_bonus(streak))
}
