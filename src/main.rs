//! Binary entrypoint for the numguess CLI.
//!
//! Commands:
//! - `play` - run the interactive game (default when no command is given)
//! - `init` - write a starter `config.toml` and seed the data files
//! - `stats` - print saved statistics and high scores
//! - `reset` - wipe saved statistics and high scores after confirmation
use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{info, warn};

use numguess::clock::SystemClock;
use numguess::config::Config;
use numguess::console::StdConsole;
use numguess::game::menu::format_stats;
use numguess::game::{GameApp, SessionState};
use numguess::storage::{JsonFileStore, StatsStore};

#[derive(Parser)]
#[command(name = "numguess")]
#[command(about = "A terminal number-guessing game")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game
    Play,
    /// Write a default configuration file and seed the data files
    Init,
    /// Show saved statistics and high scores
    Stats,
    /// Reset saved statistics and high scores
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Init writes the config, so it must not require one to exist.
    let config = match cli.command {
        Some(Commands::Init) => Config::default(),
        _ => Config::load_or_default(&cli.config)?,
    };
    init_logging(&config, cli.verbose);

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            info!("Starting numguess v{}", env!("CARGO_PKG_VERSION"));
            let store = JsonFileStore::from_config(&config.storage);
            let mut app = GameApp::new(StdConsole, SystemClock::default(), store, rand::thread_rng());
            app.run()?;
        }
        Commands::Init => {
            Config::create_default(&cli.config)?;
            info!("Configuration file created at {}", cli.config);
            let mut store = JsonFileStore::from_config(&config.storage);
            let _ = store.load_stats();
            let _ = store.load_high_scores();
            println!(
                "Created {} and data files in {}",
                cli.config, config.storage.data_dir
            );
        }
        Commands::Stats => {
            let session = SessionState::load(JsonFileStore::from_config(&config.storage));
            println!("{}", format_stats(&session));
        }
        Commands::Reset { yes } => {
            if !yes && !confirm("Reset all saved statistics and high scores? (y/n): ")? {
                println!("Aborted.");
                return Ok(());
            }
            let mut store = JsonFileStore::from_config(&config.storage);
            store.reset()?;
            warn!(
                "Reset saved data at {:?} and {:?}",
                store.stats_path(),
                store.high_scores_path()
            );
            println!("Saved data reset.");
        }
    }

    Ok(())
}

fn confirm(question: &str) -> Result<bool> {
    print!("{}", question);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().eq_ignore_ascii_case("y"))
}

fn init_logging(config: &Config, verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides the configured level
    let level = match verbosity {
        0 => config.logging.level_filter(),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(level);
    builder.format(|fmt, record| {
        let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
        writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
    });
    if let Some(ref file) = config.logging.file {
        match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(file)
        {
            Ok(f) => {
                builder.target(env_logger::Target::Pipe(Box::new(f)));
            }
            Err(e) => eprintln!("Unable to open log file {}: {} (logging to stderr)", file, e),
        }
    }
    let _ = builder.try_init();
}
