//! Five Wordle - CLI
//!
//! Five-guess Wordle with TUI and line-based CLI modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use five_wordle::{
    commands::{SimulationConfig, run_simple, run_simulation, score_words},
    dictionary::Dictionary,
    game::{Game, RandomIndex},
    output::{print_score_result, print_simulation_result},
    storage::FileStore,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "five_wordle",
    about = "Guess the hidden 5-letter word in five tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file (one word per line); defaults to the built-in list
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// High score file; defaults to the platform data directory
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Seed for target selection (reproducible games)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Score a guess against a target word
    Score {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },

    /// Play many games with random guesses and report statistics
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,
    },
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist: Option<&Path>) -> Result<Dictionary> {
    match wordlist {
        Some(path) => Dictionary::from_file(path),
        None => Ok(Dictionary::embedded()?),
    }
}

fn open_store(path: Option<&Path>) -> FileStore {
    path.map_or_else(FileStore::new, FileStore::with_path)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Score { guess, target } => {
            let result = score_words(&guess, &target).map_err(|e| anyhow::anyhow!(e))?;
            print_score_result(&result);
            Ok(())
        }
        Commands::Play => {
            let dictionary = load_dictionary(cli.wordlist.as_deref())?;
            run_play_command(&dictionary, cli.store.as_deref(), cli.seed)
        }
        Commands::Simple => {
            let dictionary = load_dictionary(cli.wordlist.as_deref())?;
            run_simple_command(&dictionary, cli.store.as_deref(), cli.seed)
        }
        Commands::Simulate { count } => {
            let dictionary = load_dictionary(cli.wordlist.as_deref())?;
            run_simulate_command(&dictionary, count, cli.seed);
            Ok(())
        }
    }
}

fn picker(seed: Option<u64>) -> RandomIndex<StdRng> {
    RandomIndex::new(seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64))
}

fn run_play_command(dictionary: &Dictionary, store: Option<&Path>, seed: Option<u64>) -> Result<()> {
    use five_wordle::interactive::{App, run_tui};

    let game = Game::new(dictionary, picker(seed), open_store(store));
    run_tui(App::new(game))
}

fn run_simple_command(dictionary: &Dictionary, store: Option<&Path>, seed: Option<u64>) -> Result<()> {
    let mut game = Game::new(dictionary, picker(seed), open_store(store));
    run_simple(&mut game).map_err(|e| anyhow::anyhow!(e))
}

fn run_simulate_command(dictionary: &Dictionary, count: usize, seed: Option<u64>) {
    let seed = seed.unwrap_or_else(rand::random);

    println!("Simulating {count} games with random guesses (seed {seed})...");

    let config = SimulationConfig::new(count, seed);
    let result = run_simulation(dictionary, &config);
    print_simulation_result(&result);
}
