//! One play-through: target selection, the guess/shop loop, and recording.
//!
//! ```text
//! SelectingDifficulty → InProgress → Won | Lost(Timeout | AttemptsExhausted) → Recorded
//! ```
//!
//! The timer is checked at the top of every input cycle. A timeout ends the
//! round without charging an attempt. Shop visits and rejected input never
//! charge an attempt either.

use log::{debug, info};
use rand::Rng;

use super::difficulty::DifficultyTier;
use super::hints::{self, Hint};
use super::input::{parse_round_input, parse_shop_selection, RoundInput, ShopSelection};
use super::scoring;
use super::session::SessionState;
use super::shop::{self, ItemEffect, ShopItem};
use crate::clock::GameClock;
use crate::console::Console;
use crate::errors::{GameError, InputError};
use crate::storage::{PlayerStats, StatsStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LossReason {
    Timeout,
    AttemptsExhausted,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoundOutcome {
    Won {
        target: u32,
        /// Attempts left before the winning guess was charged.
        attempts_left: u32,
        time_taken: f64,
        score: f64,
    },
    Lost {
        target: u32,
        reason: LossReason,
    },
}

impl RoundOutcome {
    pub fn is_win(&self) -> bool {
        matches!(self, RoundOutcome::Won { .. })
    }
}

/// Result of evaluating one in-range guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    Correct {
        attempts_left: u32,
    },
    Miss {
        hint: Hint,
        /// Guess was below the target.
        too_small: bool,
        attempts_left: u32,
    },
}

/// Mutable state of a round in progress.
#[derive(Debug, Clone)]
pub struct Round {
    tier: &'static DifficultyTier,
    target: u32,
    attempts_left: u32,
    last_guess: Option<u32>,
}

impl Round {
    pub fn new(tier: &'static DifficultyTier, target: u32) -> Self {
        Round {
            tier,
            target,
            attempts_left: tier.attempts,
            last_guess: None,
        }
    }

    /// Round with a target drawn uniformly from `1..=range_max`.
    pub fn random<R: Rng>(tier: &'static DifficultyTier, rng: &mut R) -> Self {
        Self::new(tier, rng.gen_range(1..=tier.range_max))
    }

    pub fn tier(&self) -> &'static DifficultyTier {
        self.tier
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn attempts_left(&self) -> u32 {
        self.attempts_left
    }

    pub fn is_exhausted(&self) -> bool {
        self.attempts_left == 0
    }

    /// Evaluate a guess. A miss costs one attempt and yields a standard hint.
    pub fn guess(&mut self, guess: u32) -> GuessResult {
        self.last_guess = Some(guess);
        if guess == self.target {
            return GuessResult::Correct {
                attempts_left: self.attempts_left,
            };
        }
        self.attempts_left = self.attempts_left.saturating_sub(1);
        GuessResult::Miss {
            hint: hints::hint(self.tier, self.target, guess, self.attempts_left, false),
            too_small: guess < self.target,
            attempts_left: self.attempts_left,
        }
    }

    /// Point of reference for the extra-hint item: the last guess, or the
    /// middle of the range before any guess was made.
    pub fn hint_reference(&self) -> u32 {
        self.last_guess
            .unwrap_or_else(|| (self.tier.range_max + 1) / 2)
    }

    /// Buy a shop item and apply its effect to this round.
    pub fn buy(&mut self, item: ShopItem, stats: &mut PlayerStats) -> Result<ItemEffect, GameError> {
        let effect = shop::purchase(item, stats, self.tier, self.target, self.hint_reference())?;
        if let ItemEffect::BonusAttempts(n) = effect {
            self.attempts_left = self.attempts_left.saturating_add(n);
        }
        Ok(effect)
    }
}

/// Play a round against a randomly drawn target.
pub fn play_random_round<C, K, S, R>(
    console: &mut C,
    clock: &mut K,
    session: &mut SessionState<S>,
    tier: &'static DifficultyTier,
    rng: &mut R,
) -> Result<RoundOutcome, GameError>
where
    C: Console,
    K: GameClock,
    S: StatsStore,
    R: Rng,
{
    let round = Round::random(tier, rng);
    play_round(console, clock, session, round)
}

/// Drive `round` to completion, then record and persist the outcome.
///
/// Returns [`GameError::InputClosed`] if the console closes mid-round; the
/// round is then dropped without being recorded.
pub fn play_round<C, K, S>(
    console: &mut C,
    clock: &mut K,
    session: &mut SessionState<S>,
    mut round: Round,
) -> Result<RoundOutcome, GameError>
where
    C: Console,
    K: GameClock,
    S: StatsStore,
{
    let tier = round.tier();
    session.current_difficulty = tier;
    debug!("round: {} started, target {}", tier.name, round.target());
    clock.start();
    console.print(&format!("\n游戏开始！猜一个1到{}之间的数字", tier.range_max));
    console.print(&format!(
        "你有{}次机会和{}秒时间",
        round.attempts_left(),
        tier.time_limit_seconds
    ));

    let limit = tier.time_limit_seconds as f64;
    let outcome = loop {
        if round.is_exhausted() {
            break RoundOutcome::Lost {
                target: round.target(),
                reason: LossReason::AttemptsExhausted,
            };
        }
        let elapsed = clock.elapsed_secs();
        if elapsed > limit {
            console.print("\n时间到！游戏结束！");
            break RoundOutcome::Lost {
                target: round.target(),
                reason: LossReason::Timeout,
            };
        }

        console.print(&format!("\n剩余时间: {}秒", (limit - elapsed) as u64));
        let line = console.prompt(&format!(
            "还剩{}次机会，请猜数字 (输入'shop'访问商店): ",
            round.attempts_left()
        ))?;

        let guess = match parse_round_input(&line, tier.range_max) {
            Ok(RoundInput::Shop) => {
                shop_visit(console, session, &mut round)?;
                continue;
            }
            Ok(RoundInput::Guess(guess)) => guess,
            Err(e) => {
                debug!("round: rejected input: {}", e);
                match e {
                    InputError::OutOfRange { max, .. } => {
                        console.print(&format!("请输入1到{}之间的数字！", max))
                    }
                    InputError::Empty | InputError::NotANumber(_) => console.print("请输入有效的数字！"),
                }
                continue;
            }
        };

        match round.guess(guess) {
            GuessResult::Correct { attempts_left } => {
                let time_taken = clock.elapsed_secs();
                let score = scoring::score(tier, attempts_left, time_taken, session.current_streak);
                break RoundOutcome::Won {
                    target: round.target(),
                    attempts_left,
                    time_taken,
                    score,
                };
            }
            GuessResult::Miss {
                hint,
                too_small,
                attempts_left,
            } => {
                debug!("round: miss {} ({} left)", guess, attempts_left);
                let direction = if too_small { "太小了！" } else { "太大了！" };
                console.print(&format!("{}{}", direction, hint));
                if attempts_left == 0 {
                    console.print(&format!("\n游戏结束！正确答案是{}", round.target()));
                }
            }
        }
    };

    if let RoundOutcome::Won {
        target,
        time_taken,
        score,
        ..
    } = outcome
    {
        console.print(&format!("\n恭喜你猜对了！答案就是{}", target));
        console.print(&format!("用时: {:.1}秒", time_taken));
        console.print(&format!("你获得了{}分！", score as u64));
    }

    let record = session.record(tier, &outcome);
    if record.new_high_score {
        console.print("新纪录！");
    }
    for e in &record.storage_errors {
        console.print(&format!("保存数据时出错: {}", e));
    }
    info!("round: {} finished: {:?}", tier.name, outcome);
    Ok(outcome)
}

fn shop_visit<C, S>(console: &mut C, session: &mut SessionState<S>, round: &mut Round) -> Result<(), GameError>
where
    C: Console,
    S: StatsStore,
{
    console.print(&shop::format_shop(session.stats.total_points));
    let line = console.prompt("选择道具(0返回): ")?;
    let item = match parse_shop_selection(&line) {
        Ok(ShopSelection::Cancel) => return Ok(()),
        Ok(ShopSelection::Buy(item)) => item,
        Err(e) => {
            debug!("round: shop selection rejected: {}", e);
            console.print("无效选择！");
            return Ok(());
        }
    };
    match round.buy(item, &mut session.stats) {
        Ok(ItemEffect::BonusAttempts(_)) => console.print(&format!(
            "获得一次额外机会！现在有{}次机会",
            round.attempts_left()
        )),
        Ok(effect) => console.print(&format!("道具效果: {}", effect)),
        Err(GameError::InsufficientFunds { .. }) => console.print("积分不足！"),
        Err(e) => return Err(e),
    }
    Ok(())
}
