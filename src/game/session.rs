use log::{info, warn};

use super::difficulty::{self, DifficultyTier};
use super::round::RoundOutcome;
use crate::errors::StorageError;
use crate::storage::{HighScoreTable, PlayerStats, StatsStore};

/// # Session State
///
/// Cross-round state for one process lifetime: the win streak, the player's
/// saved totals, and the high-score table. Loaded once at startup from the
/// [`StatsStore`] and written back at the end of every round.
///
/// ## Lifecycle
///
/// 1. [`SessionState::load`] reads stats and high scores (defaults when missing)
/// 2. Rounds mutate `stats.total_points` through shop purchases
/// 3. [`SessionState::record`] applies a round outcome and persists it
///
/// The streak is never persisted; a new process starts at zero.
#[derive(Debug)]
pub struct SessionState<S: StatsStore> {
    store: S,
    pub stats: PlayerStats,
    pub high_scores: HighScoreTable,
    pub current_streak: u32,
    pub current_difficulty: &'static DifficultyTier,
}

/// What [`SessionState::record`] did besides updating counters.
#[derive(Debug, Default)]
pub struct RoundRecord {
    pub new_high_score: bool,
    /// Save failures. Reported to the player, never fatal.
    pub storage_errors: Vec<StorageError>,
}

impl<S: StatsStore> SessionState<S> {
    pub fn load(mut store: S) -> Self {
        let stats = store.load_stats();
        let high_scores = store.load_high_scores();
        info!(
            "session: loaded stats (points={}, games={}, wins={})",
            stats.total_points, stats.games_played, stats.wins
        );
        SessionState {
            store,
            stats,
            high_scores,
            current_streak: 0,
            current_difficulty: &difficulty::TIERS[0],
        }
    }

    /// Apply a finished round: streak, totals, high score, then persist.
    ///
    /// `games_played` is bumped for wins and losses alike. High scores are
    /// saved only when this round set a new one.
    pub fn record(&mut self, tier: &DifficultyTier, outcome: &RoundOutcome) -> RoundRecord {
        let mut record = RoundRecord::default();
        match outcome {
            RoundOutcome::Won { score, .. } => {
                self.current_streak = self.current_streak.saturating_add(1);
                self.stats.total_points = self.stats.total_points.saturating_add(*score as u64);
                self.stats.wins += 1;
                if self.high_scores.record(tier.name, *score) {
                    record.new_high_score = true;
                    info!("session: new high score {:.1} on {}", score, tier.name);
                    if let Err(e) = self.store.save_high_scores(&self.high_scores) {
                        warn!("session: failed to save high scores: {}", e);
                        record.storage_errors.push(e);
                    }
                }
            }
            RoundOutcome::Lost { reason, .. } => {
                info!("session: round lost ({:?}), streak {} reset", reason, self.current_streak);
                self.current_streak = 0;
            }
        }
        self.stats.games_played += 1;
        if let Err(e) = self.store.save_stats(&self.stats) {
            warn!("session: failed to save player stats: {}", e);
            record.storage_errors.push(e);
        }
        record
    }
}
