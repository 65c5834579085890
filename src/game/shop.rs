//! Item shop.
//!
//! Three items can be bought with accumulated points while a round is in
//! progress:
//! - `1` extra hint (100): an enhanced hint relative to the last guess
//! - `2` extra attempt (200): `+1` attempt for the current round
//! - `3` narrow range (300): a ±20 window around the target
//!
//! The balance check and deduction happen together in [`purchase`]; an effect
//! is never produced without the points being taken.

use std::fmt;

use log::info;

use super::difficulty::DifficultyTier;
use super::hints::{self, Hint};
use crate::errors::GameError;
use crate::storage::PlayerStats;

/// Half-width of the narrow-range window.
pub const NARROW_RADIUS: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopItem {
    ExtraHint,
    ExtraAttempt,
    NarrowRange,
}

impl ShopItem {
    pub const ALL: [ShopItem; 3] = [ShopItem::ExtraHint, ShopItem::ExtraAttempt, ShopItem::NarrowRange];

    pub fn id(self) -> u8 {
        match self {
            ShopItem::ExtraHint => 1,
            ShopItem::ExtraAttempt => 2,
            ShopItem::NarrowRange => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ShopItem::ExtraHint => "额外提示",
            ShopItem::ExtraAttempt => "额外机会",
            ShopItem::NarrowRange => "缩小范围",
        }
    }

    pub fn cost(self) -> u64 {
        match self {
            ShopItem::ExtraHint => 100,
            ShopItem::ExtraAttempt => 200,
            ShopItem::NarrowRange => 300,
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|item| item.id() == id)
    }
}

/// Mechanical result of a purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemEffect {
    HintText(Hint),
    BonusAttempts(u32),
    RangeHint { lower: u32, upper: u32 },
}

impl fmt::Display for ItemEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemEffect::HintText(hint) => write!(f, "{}", hint),
            ItemEffect::BonusAttempts(n) => write!(f, "+{}次机会", n),
            ItemEffect::RangeHint { lower, upper } => write!(f, "目标数字在 {} 到 {} 之间", lower, upper),
        }
    }
}

/// Buy `item`, deducting its cost from `stats.total_points`.
///
/// `guess` is the reference point for the extra-hint item. Fails with
/// [`GameError::InsufficientFunds`] and leaves `stats` untouched when the
/// balance does not cover the cost.
pub fn purchase(
    item: ShopItem,
    stats: &mut PlayerStats,
    tier: &DifficultyTier,
    target: u32,
    guess: u32,
) -> Result<ItemEffect, GameError> {
    let cost = item.cost();
    if stats.total_points < cost {
        return Err(GameError::InsufficientFunds {
            cost,
            balance: stats.total_points,
        });
    }
    stats.total_points -= cost;
    info!(
        "shop: bought {} for {} (balance {})",
        item.name(),
        cost,
        stats.total_points
    );
    Ok(apply(item, tier, target, guess))
}

fn apply(item: ShopItem, tier: &DifficultyTier, target: u32, guess: u32) -> ItemEffect {
    match item {
        ShopItem::ExtraHint => ItemEffect::HintText(hints::hint(tier, target, guess, 0, true)),
        ShopItem::ExtraAttempt => ItemEffect::BonusAttempts(1),
        ShopItem::NarrowRange => ItemEffect::RangeHint {
            lower: target.saturating_sub(NARROW_RADIUS).max(1),
            upper: target.saturating_add(NARROW_RADIUS).min(tier.range_max),
        },
    }
}

/// Shop screen listing balance and items.
pub fn format_shop(balance: u64) -> String {
    let mut out = String::from("\n=== 道具商店 ===\n");
    out.push_str(&format!("你的积分: {}\n", balance));
    for item in ShopItem::ALL {
        out.push_str(&format!("{}. {} - {}积分\n", item.id(), item.name(), item.cost()));
    }
    out.push_str("0. 返回游戏");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::difficulty;

    fn stats_with(points: u64) -> PlayerStats {
        PlayerStats {
            total_points: points,
            ..PlayerStats::default()
        }
    }

    #[test]
    fn insufficient_funds_leaves_balance() {
        let tier = difficulty::get(1).unwrap();
        let mut stats = stats_with(250);
        let err = purchase(ShopItem::NarrowRange, &mut stats, tier, 27, 10).unwrap_err();
        assert!(matches!(err, GameError::InsufficientFunds { cost: 300, balance: 250 }));
        assert_eq!(stats.total_points, 250);
    }

    #[test]
    fn extra_attempt_deducts_and_grants_one() {
        let tier = difficulty::get(1).unwrap();
        let mut stats = stats_with(250);
        let effect = purchase(ShopItem::ExtraAttempt, &mut stats, tier, 27, 10).unwrap();
        assert_eq!(effect, ItemEffect::BonusAttempts(1));
        assert_eq!(stats.total_points, 50);
    }

    #[test]
    fn exact_balance_is_enough() {
        let tier = difficulty::get(2).unwrap();
        let mut stats = stats_with(100);
        let effect = purchase(ShopItem::ExtraHint, &mut stats, tier, 60, 58).unwrap();
        assert_eq!(effect, ItemEffect::HintText(Hint::ExtremelyClose));
        assert_eq!(stats.total_points, 0);
    }

    #[test]
    fn narrow_range_is_clamped() {
        let tier = difficulty::get(1).unwrap();
        let mut stats = stats_with(1000);
        assert_eq!(
            purchase(ShopItem::NarrowRange, &mut stats, tier, 5, 1).unwrap(),
            ItemEffect::RangeHint { lower: 1, upper: 25 }
        );
        assert_eq!(
            purchase(ShopItem::NarrowRange, &mut stats, tier, 45, 1).unwrap(),
            ItemEffect::RangeHint { lower: 25, upper: 50 }
        );
        assert_eq!(stats.total_points, 400);
    }

    #[test]
    fn ids_round_trip() {
        for item in ShopItem::ALL {
            assert_eq!(ShopItem::from_id(item.id()), Some(item));
        }
        assert_eq!(ShopItem::from_id(0), None);
        assert_eq!(ShopItem::from_id(4), None);
    }

    #[test]
    fn shop_screen_lists_items() {
        let screen = format_shop(420);
        assert!(screen.contains("你的积分: 420"));
        assert!(screen.contains("2. 额外机会 - 200积分"));
        assert!(screen.ends_with("0. 返回游戏"));
    }
}
