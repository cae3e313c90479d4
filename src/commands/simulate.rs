//! Simulation command
//!
//! Plays many games with guesses drawn at random from the dictionary and
//! summarizes how they went.

use crate::dictionary::Dictionary;
use crate::game::{GameStatus, IndexSource, MAX_ATTEMPTS, MetaState, RandomIndex, Session};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Configuration for a simulation run
pub struct SimulationConfig {
    pub games: usize,
    pub seed: u64,
    pub show_progress: bool,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(games: usize, seed: u64) -> Self {
        Self {
            games,
            seed,
            show_progress: true,
        }
    }
}

/// Outcome of one simulated game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRecord {
    pub won: bool,
    pub attempts: usize,
}

/// Summary of a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub total_games: usize,
    pub wins: usize,
    pub losses: usize,
    pub win_rate: f64,
    /// Wins by attempt count; index 0 is a first-guess win
    pub distribution: [usize; MAX_ATTEMPTS],
    /// Longest run of consecutive wins, in game order
    pub longest_streak: u32,
    pub duration: Duration,
}

/// Play one game to completion with random dictionary guesses
pub fn play_random_game<R: IndexSource>(dictionary: &Dictionary, picker: &mut R) -> GameRecord {
    let mut session = Session::new(dictionary, picker);

    while !session.is_over() {
        let guess = dictionary.sample(picker.next_index(dictionary.len()));
        // Dictionary words are always accepted
        if session
            .submit_guess(guess.text(), dictionary, MetaState::default())
            .is_err()
        {
            break;
        }
    }

    GameRecord {
        won: session.status() == GameStatus::Won,
        attempts: session.attempts().len(),
    }
}

/// Run `config.games` independent games in parallel
///
/// Game `i` uses a generator seeded with `seed + i`, so results do not
/// depend on thread scheduling.
///
/// # Panics
///
/// Panics if the progress bar template is invalid.
pub fn run_simulation(dictionary: &Dictionary, config: &SimulationConfig) -> SimulationResult {
    let start = Instant::now();

    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .expect("progress bar template is valid")
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let records: Vec<GameRecord> = (0..config.games)
        .into_par_iter()
        .map(|i| {
            let rng = StdRng::seed_from_u64(config.seed.wrapping_add(i as u64));
            let record = play_random_game(dictionary, &mut RandomIndex::new(rng));
            pb.inc(1);
            record
        })
        .collect();

    pb.finish_with_message("Complete!");

    summarize(&records, start.elapsed())
}

/// Aggregate per-game records, in game order
#[must_use]
pub fn summarize(records: &[GameRecord], duration: Duration) -> SimulationResult {
    let mut distribution = [0usize; MAX_ATTEMPTS];
    let mut meta = MetaState::default();

    for record in records {
        if record.won {
            if let Some(slot) = record
                .attempts
                .checked_sub(1)
                .and_then(|i| distribution.get_mut(i))
            {
                *slot += 1;
            }
            meta = meta.after_win().0;
        } else {
            meta = meta.after_loss();
        }
    }

    let wins = records.iter().filter(|r| r.won).count();
    let total_games = records.len();
    let win_rate = if total_games > 0 {
        wins as f64 / total_games as f64
    } else {
        0.0
    };

    SimulationResult {
        total_games,
        wins,
        losses: total_games - wins,
        win_rate,
        distribution,
        longest_streak: meta.high_score,
        duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::SequenceIndex;

    fn record(won: bool, attempts: usize) -> GameRecord {
        GameRecord { won, attempts }
    }

    #[test]
    fn random_game_always_terminates() {
        let dictionary = Dictionary::from_slice(&["crane", "slate", "robot"]).unwrap();
        let mut picker = RandomIndex::new(StdRng::seed_from_u64(1));

        for _ in 0..100 {
            let outcome = play_random_game(&dictionary, &mut picker);
            assert!((1..=MAX_ATTEMPTS).contains(&outcome.attempts));
            if !outcome.won {
                assert_eq!(outcome.attempts, MAX_ATTEMPTS);
            }
        }
    }

    #[test]
    fn single_word_dictionary_wins_first_try() {
        let dictionary = Dictionary::from_slice(&["crane"]).unwrap();
        let outcome = play_random_game(&dictionary, &mut SequenceIndex::new(vec![0]));
        assert_eq!(outcome, record(true, 1));
    }

    #[test]
    fn scripted_game_loses_after_five_misses() {
        let dictionary = Dictionary::from_slice(&["crane", "slate"]).unwrap();
        // Target crane, then always guess slate
        let mut picker = SequenceIndex::new(vec![0, 1, 1, 1, 1, 1]);
        let outcome = play_random_game(&dictionary, &mut picker);
        assert_eq!(outcome, record(false, MAX_ATTEMPTS));
    }

    #[test]
    fn summarize_counts_streaks_in_order() {
        let records = [
            record(true, 2),
            record(true, 1),
            record(false, 5),
            record(true, 5),
            record(true, 3),
            record(true, 2),
        ];
        let result = summarize(&records, Duration::ZERO);

        assert_eq!(result.total_games, 6);
        assert_eq!(result.wins, 5);
        assert_eq!(result.losses, 1);
        assert_eq!(result.distribution, [1, 2, 1, 0, 1]);
        assert_eq!(result.longest_streak, 3);
    }

    #[test]
    fn summarize_empty() {
        let result = summarize(&[], Duration::ZERO);
        assert_eq!(result.total_games, 0);
        assert!(result.win_rate.abs() < f64::EPSILON);
        assert_eq!(result.longest_streak, 0);
    }

    #[test]
    fn simulation_is_deterministic_for_a_seed() {
        let dictionary = Dictionary::from_slice(&["crane", "slate", "robot", "floor"]).unwrap();
        let mut config = SimulationConfig::new(200, 99);
        config.show_progress = false;

        let a = run_simulation(&dictionary, &config);
        let b = run_simulation(&dictionary, &config);

        assert_eq!(a.total_games, 200);
        assert_eq!(a.wins, b.wins);
        assert_eq!(a.distribution, b.distribution);
        assert_eq!(a.longest_streak, b.longest_streak);
    }

    #[test]
    fn simulation_with_progress_bar() {
        let dictionary = Dictionary::from_slice(&["crane"]).unwrap();
        let result = run_simulation(&dictionary, &SimulationConfig::new(3, 7));
        assert_eq!(result.wins, 3);
        assert_eq!(result.distribution, [3, 0, 0, 0, 0]);
    }
}
