//! # Numguess - Terminal Number-Guessing Game
//!
//! A single-player console game: pick a difficulty, guess the hidden number
//! within an attempt and time budget, earn points, and spend them on aids.
//!
//! ## Features
//!
//! - **Four Difficulty Tiers**: from 1-50 with 10 attempts to 1-500 with 3 attempts and 20 seconds.
//! - **Scoring**: rewards remaining attempts, speed, and win streaks (streak bonus capped at +50%).
//! - **Item Shop**: extra hints, extra attempts, and a narrowed range, paid with earned points.
//! - **Persistence**: player totals and per-tier high scores saved as JSON between runs.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use numguess::clock::SystemClock;
//! use numguess::console::StdConsole;
//! use numguess::game::GameApp;
//! use numguess::storage::JsonFileStore;
//!
//! fn main() -> anyhow::Result<()> {
//!     let store = JsonFileStore::in_dir(".");
//!     let mut app = GameApp::new(StdConsole, SystemClock::default(), store, rand::thread_rng());
//!     app.run()?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`game`] - rules, round flow, session state, and the menu loop
//! - [`storage`] - saved stats and high scores
//! - [`config`] - configuration file handling
//! - [`console`] - line-based terminal I/O
//! - [`clock`] - round timer
//! - [`errors`] - error types
//! - [`logutil`] - log formatting helpers

pub mod clock;
pub mod config;
pub mod console;
pub mod errors;
pub mod game;
pub mod logutil;
pub mod storage;
