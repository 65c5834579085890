//! Top-level menu loop.

use log::{debug, info};
use rand::Rng;

use super::difficulty;
use super::input::{parse_menu_choice, MenuChoice};
use super::round::play_random_round;
use super::session::SessionState;
use super::shop;
use crate::clock::GameClock;
use crate::console::Console;
use crate::errors::GameError;
use crate::storage::StatsStore;

pub const GOODBYE: &str = "感谢游戏，再见！";

/// Owns the collaborators and the session for one run of the game.
pub struct GameApp<C, K, S, R>
where
    C: Console,
    K: GameClock,
    S: StatsStore,
    R: Rng,
{
    console: C,
    clock: K,
    session: SessionState<S>,
    rng: R,
}

impl<C, K, S, R> GameApp<C, K, S, R>
where
    C: Console,
    K: GameClock,
    S: StatsStore,
    R: Rng,
{
    pub fn new(console: C, clock: K, store: S, rng: R) -> Self {
        GameApp {
            console,
            clock,
            session: SessionState::load(store),
            rng,
        }
    }

    pub fn session(&self) -> &SessionState<S> {
        &self.session
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    /// Run menus and rounds until the player exits or input closes.
    pub fn run(&mut self) -> Result<(), GameError> {
        match self.run_menu() {
            Err(GameError::InputClosed) => {
                info!("menu: input closed, leaving");
                Ok(())
            }
            other => other,
        }
    }

    fn run_menu(&mut self) -> Result<(), GameError> {
        loop {
            let menu = format_main_menu(self.session.current_streak, self.session.stats.total_points);
            self.console.print(&menu);
            let line = self.console.prompt("请选择: ")?;
            let choice = match parse_menu_choice(&line) {
                Ok(choice) => choice,
                Err(e) => {
                    debug!("menu: {}", e);
                    self.console.print("无效选择，请重试！");
                    continue;
                }
            };
            match choice {
                MenuChoice::Exit => {
                    self.console.print(GOODBYE);
                    return Ok(());
                }
                MenuChoice::Stats => {
                    let screen = format_stats(&self.session);
                    self.console.print(&screen);
                }
                MenuChoice::Shop => {
                    self.console.print(&shop::format_shop(self.session.stats.total_points));
                }
                MenuChoice::Play(tier) => {
                    play_random_round(
                        &mut self.console,
                        &mut self.clock,
                        &mut self.session,
                        tier,
                        &mut self.rng,
                    )?;
                    let again = self.console.prompt("\n是否再玩一局？(y/n): ")?;
                    if !again.trim().eq_ignore_ascii_case("y") {
                        self.console.print(GOODBYE);
                        return Ok(());
                    }
                }
            }
        }
    }
}

pub fn format_main_menu(streak: u32, total_points: u64) -> String {
    let mut out = String::from("\n=== 猜数字游戏 ===\n");
    out.push_str(&format!("当前连胜: {} | 总积分: {}\n", streak, total_points));
    out.push_str("选择难度级别：\n");
    for tier in difficulty::all() {
        out.push_str(&tier.menu_line());
        out.push('\n');
    }
    out.push_str("5. 道具商店\n6. 查看统计\n7. 退出游戏");
    out
}

/// Statistics screen: totals, win rate, streak, and per-tier high scores.
pub fn format_stats<S: StatsStore>(session: &SessionState<S>) -> String {
    let stats = &session.stats;
    let mut out = String::from("\n=== 游戏统计 ===\n");
    out.push_str(&format!("总游戏次数: {}\n", stats.games_played));
    out.push_str(&format!("胜利次数: {}\n", stats.wins));
    out.push_str(&format!("胜率: {:.1}%\n", stats.win_rate()));
    out.push_str(&format!("当前连胜: {}\n", session.current_streak));
    out.push_str("\n=== 最高分记录 ===");
    for (name, score) in session.high_scores.in_tier_order() {
        out.push_str(&format!("\n{}: {}分", name, score as u64));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::JsonFileStore;
    use tempfile::tempdir;

    #[test]
    fn main_menu_lists_everything() {
        let menu = format_main_menu(2, 350);
        assert!(menu.contains("当前连胜: 2 | 总积分: 350"));
        assert!(menu.contains("1. 简单 (1-50, 10次机会, 60秒限时)"));
        assert!(menu.contains("4. 地狱 (1-500, 3次机会, 20秒限时)"));
        assert!(menu.ends_with("7. 退出游戏"));
    }

    #[test]
    fn stats_screen() {
        let tmp = tempdir().unwrap();
        let mut session = SessionState::load(JsonFileStore::in_dir(tmp.path()));
        session.stats.games_played = 3;
        session.stats.wins = 1;
        session.high_scores.record("中等", 287.9);
        let screen = format_stats(&session);
        assert!(screen.contains("胜率: 33.3%"));
        assert!(screen.contains("中等: 287分"));
        assert!(screen.contains("简单: 0分"));
    }

    #[test]
    fn stats_screen_without_games() {
        let tmp = tempdir().unwrap();
        let session = SessionState::load(JsonFileStore::in_dir(tmp.path()));
        assert!(format_stats(&session).contains("胜率: 0.0%"));
    }
}
