//! Wordo - CLI
//!
//! Word-guessing game with TUI and line-based modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordo::{
    commands::run_simple,
    core::ScoringRule,
    game::{GameConfig, GameEngine, Session},
    logging::{self, LogTarget},
    wordlists::WordLists,
};

#[derive(Parser)]
#[command(
    name = "wordo",
    about = "Guess the secret five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'all' (default), 'answers' (answer pool only), or path to a dictionary file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Seed for secret word selection (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Scoring rule: naive (default) or standard (duplicate-aware)
    #[arg(long, global = true, value_enum, default_value_t = ScoringRule::Naive)]
    scoring: ScoringRule,

    /// Write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,
}

/// Load word lists based on the -w flag
///
/// - "all": every allowed word plus the answer pool
/// - "answers": only answer-pool words are accepted as guesses
/// - "<path>": custom dictionary file, embedded answer pool
fn load_wordlists(wordlist_mode: &str) -> Result<WordLists> {
    let lists = match wordlist_mode {
        "all" => WordLists::embedded()?,
        "answers" => WordLists::answers_only()?,
        path => WordLists::with_dictionary_file(path)?,
    };
    Ok(lists)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let (target, directive) = match (&cli.log_file, &command) {
        (Some(path), _) => (LogTarget::File(path), "wordo=debug"),
        (None, Commands::Simple) => (LogTarget::Stderr, "wordo=warn"),
        (None, Commands::Play) => (LogTarget::Off, "off"),
    };
    logging::init(target, directive)?;

    let lists = load_wordlists(&cli.wordlist)?;
    let config = GameConfig {
        scoring: cli.scoring,
        seed: cli.seed,
    };
    let session = Session::new(GameEngine::new(&lists, config));

    match command {
        Commands::Play => run_play_command(session),
        Commands::Simple => run_simple(session),
    }
}

fn run_play_command(session: Session) -> Result<()> {
    use wordo::interactive::{App, run_tui};

    let app = App::new(session);
    run_tui(app)
}
