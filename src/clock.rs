//! Round timer collaborator.
//!
//! The round loop polls the clock once per input cycle; nothing interrupts a
//! pending prompt when the limit passes.

use std::time::Instant;

pub trait GameClock {
    /// Mark the start of a round.
    fn start(&mut self);
    /// Seconds since the last [`GameClock::start`].
    fn elapsed_secs(&self) -> f64;
}

/// Monotonic wall clock.
#[derive(Debug)]
pub struct SystemClock {
    started: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        SystemClock {
            started: Instant::now(),
        }
    }
}

impl GameClock for SystemClock {
    fn start(&mut self) {
        self.started = Instant::now();
    }

    fn elapsed_secs(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restart_resets_elapsed() {
        let mut clock = SystemClock::default();
        std::thread::sleep(std::time::Duration::from_millis(20));
        assert!(clock.elapsed_secs() >= 0.02);
        clock.start();
        assert!(clock.elapsed_secs() < 0.02);
    }
}
