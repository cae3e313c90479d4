//! Simple interactive CLI mode
//!
//! Line-based game without the TUI

use crate::game::{Game, GameStatus, IndexSource, MAX_ATTEMPTS};
use crate::output::formatters::colored_tiles;
use crate::storage::KeyValueStore;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing output.
pub fn run_simple<R: IndexSource, S: KeyValueStore>(
    game: &mut Game<'_, R, S>,
) -> Result<(), String> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    play(game, &mut input, &mut output).map_err(|e| e.to_string())
}

/// Drive `game` from `input` until the player quits or input ends
///
/// # Errors
///
/// Returns any I/O error from `input` or `output`.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn play<R, S, I, O>(game: &mut Game<'_, R, S>, input: &mut I, output: &mut O) -> io::Result<()>
where
    R: IndexSource,
    S: KeyValueStore,
    I: BufRead,
    O: Write,
{
    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                    Five Wordle - CLI Mode                    ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(output, "Guess the 5-letter word in {MAX_ATTEMPTS} tries.")?;
    writeln!(output, "Commands: 'quit' to exit, 'new' for a new game\n")?;
    print_meta(game, output)?;

    loop {
        let turn_number = game.session().attempts().len() + 1;
        let Some(line) = prompt(input, output, &format!("Guess {turn_number}/{MAX_ATTEMPTS}"))?
        else {
            return Ok(());
        };

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                writeln!(output, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            "new" | "n" => {
                game.reset();
                writeln!(output, "\n🔄 New game started!\n")?;
                continue;
            }
            _ => {}
        }

        let turn = match game.submit_guess(&line) {
            Ok(turn) => turn,
            Err(e) => {
                writeln!(output, "{}", format!("⛔ {e}").red())?;
                continue;
            }
        };

        if let Some(last) = game.session().attempts().last() {
            writeln!(output, "  {}", colored_tiles(&last.word, &last.feedback))?;
        }
        if let Some(err) = &turn.persist_error {
            writeln!(output, "{}", err.yellow())?;
        }

        match turn.status {
            GameStatus::InProgress => continue,
            GameStatus::Won => {
                writeln!(output, "\n{}", "═".repeat(62).bright_cyan())?;
                writeln!(
                    output,
                    "  {}",
                    format!("🎉 {}!", game.session().message()).bright_green().bold()
                )?;
                writeln!(
                    output,
                    "  Solved in {} {}",
                    turn_number.to_string().bright_cyan().bold(),
                    if turn_number == 1 { "guess" } else { "guesses" }
                )?;
                if turn.new_high_score {
                    writeln!(output, "  {}", "🏆 New high score!".bright_yellow().bold())?;
                }
                writeln!(output, "{}", "═".repeat(62).bright_cyan())?;
            }
            GameStatus::Lost => {
                writeln!(
                    output,
                    "\n  {}",
                    format!("❌ {}", game.session().message()).red().bold()
                )?;
            }
        }
        print_meta(game, output)?;

        let again = prompt(input, output, "Play again? (yes/no)")?;
        match again.as_deref().map(str::to_lowercase).as_deref() {
            Some("yes" | "y") => {
                game.reset();
                writeln!(output, "\n🔄 New game started!\n")?;
            }
            _ => {
                writeln!(output, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
        }
    }
}

fn print_meta<R: IndexSource, S: KeyValueStore, O: Write>(
    game: &Game<'_, R, S>,
    output: &mut O,
) -> io::Result<()> {
    let meta = game.meta();
    writeln!(
        output,
        "🔥 Streak: {}   🏆 High Score: {}\n",
        meta.streak, meta.high_score
    )
}

/// Print a prompt and read one trimmed line; `None` at end of input
fn prompt<I: BufRead, O: Write>(
    input: &mut I,
    output: &mut O,
    label: &str,
) -> io::Result<Option<String>> {
    write!(output, "{label}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use crate::game::{HIGH_SCORE_KEY, MetaState, SequenceIndex};
    use crate::storage::MemoryStore;
    use std::io::Cursor;

    fn run(script: &str, game: &mut Game<'_, SequenceIndex, MemoryStore>) -> String {
        colored::control::set_override(false);
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        play(game, &mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    fn dictionary() -> Dictionary {
        Dictionary::from_slice(&["crane", "slate", "robot", "floor", "speed", "sassy"]).unwrap()
    }

    #[test]
    fn win_then_quit() {
        let dict = dictionary();
        let mut game = Game::new(&dict, SequenceIndex::new(vec![0]), MemoryStore::new());

        let out = run("slate\ncrane\nno\n", &mut game);

        assert!(out.contains("🎉 correct!"));
        assert!(out.contains("Solved in 2 guesses"));
        assert!(out.contains("New high score"));
        assert_eq!(game.meta(), MetaState::new(1, 1));
        assert_eq!(game.store().get(HIGH_SCORE_KEY).as_deref(), Some("1"));
    }

    #[test]
    fn rejections_are_reported() {
        let dict = dictionary();
        let mut game = Game::new(&dict, SequenceIndex::new(vec![0]), MemoryStore::new());

        let out = run("cran\nzzzzz\nquit\n", &mut game);

        assert!(out.contains("⛔ guess must be 5 letters"));
        assert!(out.contains("⛔ word not in the list"));
        assert!(game.session().attempts().is_empty());
    }

    #[test]
    fn loss_reveals_word_and_play_again_resets() {
        let dict = dictionary();
        let mut game = Game::new(&dict, SequenceIndex::new(vec![0]), MemoryStore::new());

        let out = run("slate\nrobot\nfloor\nspeed\nsassy\nyes\n", &mut game);

        assert!(out.contains("game over, word was crane"));
        assert!(out.contains("New game started"));
        assert!(game.session().attempts().is_empty());
        assert_eq!(game.meta().streak, 0);
    }

    #[test]
    fn new_command_resets_game() {
        let dict = dictionary();
        let mut game = Game::new(&dict, SequenceIndex::new(vec![0, 1]), MemoryStore::new());

        run("robot\nnew\n", &mut game);

        assert!(game.session().attempts().is_empty());
        assert_eq!(game.session().hidden_target().text(), "slate");
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let dict = dictionary();
        let mut game = Game::new(&dict, SequenceIndex::new(vec![0]), MemoryStore::new());

        let out = run("", &mut game);
        assert!(out.contains("Guess 1/5"));
    }
}
