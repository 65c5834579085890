//! Proximity feedback for wrong guesses.
//!
//! Standard hints are shown after every miss. Enhanced hints are only handed
//! out by the shop's extra-hint item and may reveal a numeric window.

use std::fmt;

use super::difficulty::DifficultyTier;

/// Distance at or under which a standard hint reads "very close".
pub const VERY_CLOSE: u32 = 5;
/// Distance at or under which a hint reads "fairly close" (standard) or gives a window (enhanced).
pub const CLOSE: u32 = 10;
/// Distance at or under which an enhanced hint reads "extremely close".
pub const EXTREMELY_CLOSE: u32 = 3;
/// Half-width of the window revealed by an enhanced hint.
pub const WINDOW_RADIUS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    VeryClose,
    FairlyClose,
    FarOff,
    /// Only one attempt remains; distance is not revealed.
    LastChance,
    ExtremelyClose,
    Window { lower: u32, upper: u32 },
    /// Target is much smaller than the guess.
    MuchSmaller,
    /// Target is much larger than the guess.
    MuchLarger,
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hint::VeryClose => write!(f, "非常接近了！"),
            Hint::FairlyClose => write!(f, "很接近了！"),
            Hint::FarOff => write!(f, "差距还比较大！"),
            Hint::LastChance => write!(f, "这是最后的机会了！"),
            Hint::ExtremelyClose => write!(f, "就差一点点了！目标数字就在附近！"),
            Hint::Window { lower, upper } => write!(f, "目标数字在 {} 到 {} 之间", lower, upper),
            Hint::MuchSmaller => write!(f, "目标数字比这个数小很多"),
            Hint::MuchLarger => write!(f, "目标数字比这个数大很多"),
        }
    }
}

/// Standard hint given `remaining_attempts` after the miss was charged.
pub fn standard(target: u32, guess: u32, remaining_attempts: u32) -> Hint {
    if remaining_attempts < 2 {
        return Hint::LastChance;
    }
    match target.abs_diff(guess) {
        d if d <= VERY_CLOSE => Hint::VeryClose,
        d if d <= CLOSE => Hint::FairlyClose,
        _ => Hint::FarOff,
    }
}

/// Enhanced hint; the window is clamped to `1..=range_max`.
pub fn enhanced(target: u32, guess: u32, range_max: u32) -> Hint {
    match target.abs_diff(guess) {
        d if d <= EXTREMELY_CLOSE => Hint::ExtremelyClose,
        d if d <= CLOSE => Hint::Window {
            lower: guess.saturating_sub(WINDOW_RADIUS).max(1),
            upper: guess.saturating_add(WINDOW_RADIUS).min(range_max),
        },
        _ if guess > target => Hint::MuchSmaller,
        _ => Hint::MuchLarger,
    }
}

pub fn hint(tier: &DifficultyTier, target: u32, guess: u32, remaining_attempts: u32, enhanced_mode: bool) -> Hint {
    if enhanced_mode {
        enhanced(target, guess, tier.range_max)
    } else {
        standard(target, guess, remaining_attempts)
    }
}
