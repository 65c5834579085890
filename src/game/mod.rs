//! # Game Core Module
//!
//! Rules and flow of the number-guessing game.
//!
//! ## Components
//!
//! - [`difficulty`] - the four fixed tiers (range, attempts, reward, time limit)
//! - [`scoring`] - score from reward, attempts left, time taken, and streak
//! - [`hints`] - proximity feedback after a wrong guess
//! - [`shop`] - purchasable items and their effects
//! - [`round`] - one play-through from target draw to recorded outcome
//! - [`session`] - streak, player totals, and high scores across rounds
//! - [`input`] - parsing of menu, guess, and shop lines
//! - [`menu`] - the top-level menu loop ([`GameApp`])
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  GameApp        │ ← menu loop, owns collaborators
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │  Round          │ ← attempts/time budget, guesses, shop visits
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │  Scoring/Hints/ │ ← pure rules
//! │  Shop           │
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │  SessionState   │ ← totals, streak, high scores → StatsStore
//! └─────────────────┘
//! ```

pub mod difficulty;
pub mod hints;
pub mod input;
pub mod menu;
pub mod round;
pub mod scoring;
pub mod session;
pub mod shop;

pub use menu::GameApp;
pub use round::{LossReason, Round, RoundOutcome};
pub use session::SessionState;
