//! pwgame: terminal front end for the password gauntlet
//!
//! Type a password, press enter, and the first rule it breaks is shown.
//! Clear all fifty to get on the leaderboard.

mod play;
mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use pw_core::{
    evaluate, evaluate_all, render_board, EvaluationMetadata, GameConfig, JsonFileLeaderboard,
    LeaderboardStore, MemoryLeaderboard, SessionContext, SubmissionFlag, SystemClock,
};

/// Leaderboard path that selects the in-memory store.
const MEMORY_STORE: &str = ":memory:";

#[derive(Parser)]
#[command(name = "pwgame")]
#[command(version = pw_core::VERSION)]
#[command(about = "Fifty password rules. How fast can you clear them?", long_about = None)]
struct Cli {
    /// YAML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Leaderboard JSON file (overrides config). `:memory:` keeps it in RAM
    #[arg(long, global = true)]
    leaderboard: Option<PathBuf>,

    /// Submission flag file (overrides config)
    #[arg(long, global = true)]
    flag: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (default)
    Play {
        /// Seed for a reproducible puzzle
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Evaluate one candidate and exit
    Check {
        candidate: String,

        /// Seed for the session context
        #[arg(long)]
        seed: Option<u64>,

        /// Report every rule instead of stopping at the first failure
        #[arg(long, default_value = "false")]
        all: bool,

        /// Treat the one-time rule removal as used
        #[arg(long, default_value = "false")]
        removed: bool,

        /// Print JSON instead of text
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Show the best runs
    Leaderboard {
        /// Number of rows (defaults to the configured limit)
        #[arg(long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the game's stdout.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pw_cli=info".parse()?)
                .add_directive("pw_core=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match cli.command.unwrap_or(Commands::Play { seed: None }) {
        Commands::Play { seed } => {
            let seed = seed.or(config.seed);
            let store = open_store(&config.leaderboard_path);
            let flag = SubmissionFlag::new(&config.submission_flag_path);
            play::run(context_for(seed), store, flag, config.leaderboard_limit)
        }

        Commands::Check { candidate, seed, all, removed, json } => {
            let context = context_for(seed.or(config.seed));
            check(&candidate, &context, all, removed, json)
        }

        Commands::Leaderboard { limit } => {
            let store = open_store(&config.leaderboard_path);
            let limit = limit.unwrap_or(config.leaderboard_limit);
            let entries = store.top(limit).context("Failed to read leaderboard")?;
            println!("{}", render_board(&entries).trim_end());
            Ok(())
        }
    }
}

/// Config file if given, defaults otherwise, then CLI overrides.
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => GameConfig::default(),
    };

    if let Some(path) = &cli.leaderboard {
        config.leaderboard_path = path.clone();
    }
    if let Some(path) = &cli.flag {
        config.submission_flag_path = path.clone();
    }

    tracing::debug!(
        "Leaderboard: {}, flag: {}",
        config.leaderboard_path.display(),
        config.submission_flag_path.display()
    );
    Ok(config)
}

fn open_store(path: &Path) -> Arc<dyn LeaderboardStore> {
    if path == Path::new(MEMORY_STORE) {
        Arc::new(MemoryLeaderboard::new())
    } else {
        Arc::new(JsonFileLeaderboard::open(path))
    }
}

fn context_for(seed: Option<u64>) -> SessionContext {
    match seed {
        Some(seed) => SessionContext::from_seed(seed),
        None => SessionContext::generate(),
    }
}

fn check(
    candidate: &str,
    context: &SessionContext,
    all: bool,
    removed: bool,
    json: bool,
) -> Result<()> {
    let meta = EvaluationMetadata { level: 0, rule_removed: removed };
    let clock = SystemClock;

    if all {
        let outcomes = evaluate_all(candidate, context, meta, &clock);
        if json {
            println!("{}", serde_json::to_string_pretty(&render::checked_rules(&outcomes))?);
        } else {
            print!("{}", render::outcome_table(&outcomes));
        }
        return Ok(());
    }

    let result = evaluate(candidate, context, meta, &clock);
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", render::check_line(&result, context));
    }
    Ok(())
}
