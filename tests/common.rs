//! Test utilities: scripted console and clock, temp-dir stores.

use std::cell::RefCell;
use std::collections::VecDeque;

use numguess::clock::GameClock;
use numguess::console::Console;
use numguess::errors::GameError;
use numguess::storage::{JsonFileStore, PlayerStats, StatsStore};

/// Console fed from a fixed list of lines. Everything shown (prompts and
/// prints) is captured in `output`.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    pub output: Vec<String>,
}

#[allow(dead_code)]
impl ScriptedConsole {
    pub fn new(lines: &[&str]) -> Self {
        ScriptedConsole {
            inputs: lines.iter().map(|s| s.to_string()).collect(),
            output: Vec::new(),
        }
    }

    pub fn transcript(&self) -> String {
        self.output.join("\n")
    }

    pub fn saw(&self, needle: &str) -> bool {
        self.output.iter().any(|line| line.contains(needle))
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

impl Console for ScriptedConsole {
    fn prompt(&mut self, text: &str) -> Result<String, GameError> {
        self.output.push(text.to_string());
        self.inputs.pop_front().ok_or(GameError::InputClosed)
    }

    fn print(&mut self, text: &str) {
        self.output.push(text.to_string());
    }
}

/// Clock that replays a list of elapsed readings; the last one repeats.
#[derive(Debug)]
pub struct ScriptedClock {
    readings: RefCell<VecDeque<f64>>,
    last: RefCell<f64>,
}

#[allow(dead_code)]
impl ScriptedClock {
    pub fn fixed(secs: f64) -> Self {
        Self::sequence(&[secs])
    }

    pub fn sequence(readings: &[f64]) -> Self {
        ScriptedClock {
            readings: RefCell::new(readings.iter().copied().collect()),
            last: RefCell::new(readings.first().copied().unwrap_or(0.0)),
        }
    }
}

impl GameClock for ScriptedClock {
    fn start(&mut self) {}

    fn elapsed_secs(&self) -> f64 {
        if let Some(next) = self.readings.borrow_mut().pop_front() {
            *self.last.borrow_mut() = next;
        }
        *self.last.borrow()
    }
}

/// Store in `dir` with the given starting totals already saved.
#[allow(dead_code)]
pub fn store_with_points(dir: &std::path::Path, points: u64) -> JsonFileStore {
    let mut store = JsonFileStore::in_dir(dir);
    store
        .save_stats(&PlayerStats {
            total_points: points,
            ..PlayerStats::default()
        })
        .expect("seed stats");
    store
}
