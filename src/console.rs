//! Line-based console collaborator.

use std::io::{self, BufRead, Write};

use log::trace;

use crate::errors::GameError;
use crate::logutil::preview_input;

pub trait Console {
    /// Show `text` and read one line with the trailing newline removed.
    /// Returns [`GameError::InputClosed`] once input is exhausted.
    fn prompt(&mut self, text: &str) -> Result<String, GameError>;
    fn print(&mut self, text: &str);
}

/// Console over stdin/stdout.
#[derive(Debug, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn prompt(&mut self, text: &str) -> Result<String, GameError> {
        let mut out = io::stdout();
        let _ = write!(out, "{}", text);
        let _ = out.flush();
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => Err(GameError::InputClosed),
            Ok(_) => {
                let line = line.trim_end_matches(&['\r', '\n'][..]).to_string();
                trace!("console: read \"{}\"", preview_input(&line));
                Ok(line)
            }
        }
    }

    fn print(&mut self, text: &str) {
        println!("{}", text);
    }
}
