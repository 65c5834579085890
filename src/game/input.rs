//! Parsing of raw console lines into menu, round, and shop commands.

use super::difficulty::{self, DifficultyTier};
use super::shop::ShopItem;
use crate::errors::{GameError, InputError};

/// Keyword that opens the shop during a round (case-insensitive).
pub const SHOP_KEYWORD: &str = "shop";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Play(&'static DifficultyTier),
    Shop,
    Stats,
    Exit,
}

pub fn parse_menu_choice(raw: &str) -> Result<MenuChoice, GameError> {
    let choice = raw.trim();
    match choice {
        "5" => Ok(MenuChoice::Shop),
        "6" => Ok(MenuChoice::Stats),
        "7" => Ok(MenuChoice::Exit),
        _ => choice
            .parse::<u8>()
            .ok()
            .and_then(|id| difficulty::get(id).ok())
            .map(MenuChoice::Play)
            .ok_or_else(|| GameError::InvalidSelection(choice.to_string())),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundInput {
    Guess(u32),
    Shop,
}

/// Parse a line typed during a round. Guesses must lie in `1..=range_max`.
pub fn parse_round_input(raw: &str, range_max: u32) -> Result<RoundInput, InputError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(InputError::Empty);
    }
    if text.eq_ignore_ascii_case(SHOP_KEYWORD) {
        return Ok(RoundInput::Shop);
    }
    let value: i64 = text
        .parse()
        .map_err(|_| InputError::NotANumber(text.to_string()))?;
    if value < 1 || value > range_max as i64 {
        return Err(InputError::OutOfRange {
            value,
            max: range_max,
        });
    }
    Ok(RoundInput::Guess(value as u32))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopSelection {
    Cancel,
    Buy(ShopItem),
}

pub fn parse_shop_selection(raw: &str) -> Result<ShopSelection, GameError> {
    let choice = raw.trim();
    if choice == "0" {
        return Ok(ShopSelection::Cancel);
    }
    choice
        .parse::<u8>()
        .ok()
        .and_then(ShopItem::from_id)
        .map(ShopSelection::Buy)
        .ok_or_else(|| GameError::InvalidSelection(choice.to_string()))
}
