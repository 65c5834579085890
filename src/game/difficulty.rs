//! Fixed difficulty tiers.
//!
//! | id | name | range  | attempts | reward | time limit |
//! |----|------|--------|----------|--------|------------|
//! | 1  | 简单 | 1-50   | 10       | 100    | 60s        |
//! | 2  | 中等 | 1-100  | 7        | 200    | 45s        |
//! | 3  | 困难 | 1-200  | 5        | 300    | 30s        |
//! | 4  | 地狱 | 1-500  | 3        | 500    | 20s        |
//!
//! Tier names double as the keys of the saved high-score file, so they must
//! not change between releases.

use crate::errors::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyTier {
    pub id: u8,
    pub name: &'static str,
    pub range_max: u32,
    pub attempts: u32,
    pub reward_points: u32,
    pub time_limit_seconds: u32,
}

impl DifficultyTier {
    /// Menu line, e.g. `1. 简单 (1-50, 10次机会, 60秒限时)`.
    pub fn menu_line(&self) -> String {
        format!(
            "{}. {} (1-{}, {}次机会, {}秒限时)",
            self.id, self.name, self.range_max, self.attempts, self.time_limit_seconds
        )
    }
}

pub const TIERS: [DifficultyTier; 4] = [
    DifficultyTier {
        id: 1,
        name: "简单",
        range_max: 50,
        attempts: 10,
        reward_points: 100,
        time_limit_seconds: 60,
    },
    DifficultyTier {
        id: 2,
        name: "中等",
        range_max: 100,
        attempts: 7,
        reward_points: 200,
        time_limit_seconds: 45,
    },
    DifficultyTier {
        id: 3,
        name: "困难",
        range_max: 200,
        attempts: 5,
        reward_points: 300,
        time_limit_seconds: 30,
    },
    DifficultyTier {
        id: 4,
        name: "地狱",
        range_max: 500,
        attempts: 3,
        reward_points: 500,
        time_limit_seconds: 20,
    },
];

/// Look up a tier by id.
pub fn get(id: u8) -> Result<&'static DifficultyTier, GameError> {
    TIERS
        .iter()
        .find(|t| t.id == id)
        .ok_or(GameError::NotFound(id))
}

/// All tiers in menu order.
pub fn all() -> &'static [DifficultyTier] {
    &TIERS
}
