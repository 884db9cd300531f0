mod config;
mod error;
mod prompt;
mod renderer;
mod session;
mod stats;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::Parser;
use common::config::{ConfigManager, FileContentConfigProvider};
use common::games::SessionRng;
use common::games::tictactoe::{Difficulty, Player, SearchEngine, SearchOptions};
use common::{log, logger};

use config::{Config, get_config_manager};
use prompt::Console;
use session::{GameSession, SessionOptions};
use stats::StatsStore;

#[derive(Parser)]
#[command(name = "smart_tictactoe", about = "Tic-tac-toe against a minimax opponent")]
struct Args {
    /// Your symbol: X or O. X always moves first.
    #[arg(long)]
    symbol: Option<Player>,

    /// easy, medium or hard (or 1, 2, 3).
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Seed for the opponent's random choices.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    stats_file: Option<PathBuf>,

    /// Config file to use instead of the one next to the executable.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    no_color: bool,

    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

fn load_config(args: &Args) -> Config {
    let manager: ConfigManager<FileContentConfigProvider, Config> = match args.config {
        Some(ref path) => ConfigManager::from_yaml_file(path.clone()),
        None => get_config_manager(),
    };

    match manager.get_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Could not load config ({}), using defaults", err);
            Config::default()
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = load_config(&args);

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose || config.log_enabled);
    log!("Config: {:?}", config);

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session seed: {}", rng.seed());

    let stats_path = args
        .stats_file
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.stats_file));
    log!("Stats file: {}", stats_path.display());

    let options = SessionOptions {
        human: args.symbol.or(config.human_symbol),
        difficulty: args.difficulty.or(config.difficulty),
        second_best_chance: config.medium_second_best_chance,
        use_color: !args.no_color && config.color && std::io::stdout().is_terminal(),
    };

    let engine = SearchEngine::new(SearchOptions {
        prefer_faster_wins: config.prefer_faster_wins,
    });

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = GameSession::new(
        Console::new(stdin.lock(), stdout.lock()),
        engine,
        rng,
        StatsStore::new(FileContentConfigProvider::new(stats_path)),
        options,
    );
    log!("Loaded stats: {}", session.stats().summary());

    let stats = session.run()?;
    log!("Session finished: {}", stats.summary());

    Ok(())
}
