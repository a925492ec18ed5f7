//! The `wordquiz play` command.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use wordquiz_core::engine::STOP_COMMAND;
use wordquiz_core::{
    load_vocabulary, AnswerOutcome, Direction, FollowUpOutcome, QuizSession, StatsReport,
};

use crate::config::{load_config_from, LanguageNames};

pub fn execute(
    words: Option<PathBuf>,
    mode: Option<String>,
    seed: Option<u64>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let words_file = words.unwrap_or(config.words_file);

    let vocabulary = load_vocabulary(&words_file)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let direction = match mode.as_deref() {
        Some(m) => Some(m.parse::<Direction>().map_err(|e: String| anyhow::anyhow!("{}", e))?),
        None => match config.direction {
            Some(d) => Some(d),
            None => select_direction(&mut input, &mut out, &config.languages)?,
        },
    };
    let Some(direction) = direction else {
        return Ok(());
    };

    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut session = QuizSession::with_rng(vocabulary, direction, rng);

    run_quiz(&mut session, &mut input, &mut out)
}

/// Show the mode menu. Returns `None` on an invalid choice.
fn select_direction<I: BufRead, W: Write>(
    input: &mut I,
    out: &mut W,
    languages: &LanguageNames,
) -> Result<Option<Direction>> {
    writeln!(out, "Select Mode:")?;
    writeln!(out, "1: {} -> {}", languages.source, languages.target)?;
    writeln!(out, "2: {} -> {}", languages.target, languages.source)?;
    write!(out, "Choice (1 or 2): ")?;
    out.flush()?;

    let choice = read_input(input)?.unwrap_or_default();
    match choice.trim() {
        "1" => Ok(Some(Direction::Forward)),
        "2" => Ok(Some(Direction::Reverse)),
        _ => {
            writeln!(out, "Invalid selection.")?;
            Ok(None)
        }
    }
}

/// Drive a session from line-based input until it stops.
///
/// End of input counts as `stop`.
pub fn run_quiz<R: Rng, I: BufRead, W: Write>(
    session: &mut QuizSession<R>,
    input: &mut I,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "\n--- Game Started ---")?;
    writeln!(out, "Type 'stop' to quit, 'stats' to see error counts.")?;

    let mut question = session.draw()?;

    loop {
        write!(out, "Translate '{}': ", question.prompt)?;
        out.flush()?;

        let Some(line) = read_input(input)? else {
            writeln!(out)?;
            return finish(session, out);
        };

        match session.submit(&line)? {
            AnswerOutcome::Correct { next } => {
                writeln!(out, "Correct!\n")?;
                question = next;
            }
            AnswerOutcome::Stats(report) => print_stats(out, &report)?,
            AnswerOutcome::Stopped => return finish(session, out),
            AnswerOutcome::Incorrect { .. } => {
                writeln!(out, "Wrong answer.")?;
                writeln!(out, "1: Try again | 2: Skip | 3: Reveal word")?;
                write!(out, "Select option: ")?;
                out.flush()?;

                let choice = match read_input(input)? {
                    Some(choice) => choice,
                    None => {
                        writeln!(out)?;
                        STOP_COMMAND.to_string()
                    }
                };

                match session.follow_up(&choice)? {
                    FollowUpOutcome::Retry { question: same } => question = same,
                    FollowUpOutcome::Skipped { next, fallback } => {
                        if fallback {
                            writeln!(out, "Invalid input, skipping word.\n")?;
                        }
                        question = next;
                    }
                    FollowUpOutcome::Revealed { answer, next } => {
                        writeln!(out, "The correct word was: {answer}\n")?;
                        question = next;
                    }
                    FollowUpOutcome::Stopped => return finish(session, out),
                }
            }
        }
    }
}

fn finish<R: Rng, W: Write>(session: &mut QuizSession<R>, out: &mut W) -> Result<()> {
    session.stop();
    writeln!(out, "Game stopped.")?;
    Ok(())
}

fn print_stats<W: Write>(out: &mut W, report: &StatsReport) -> Result<()> {
    use comfy_table::{Cell, Table};

    writeln!(out, "\n--- Error Stats ---")?;
    match report {
        StatsReport::NoErrors => writeln!(out, "No errors yet!")?,
        StatsReport::Ranked(entries) => {
            let mut table = Table::new();
            table.set_header(vec!["Word", "Wrong answers"]);
            for entry in entries {
                table.add_row(vec![Cell::new(&entry.word), Cell::new(entry.count)]);
            }
            writeln!(out, "{table}")?;
        }
    }
    writeln!(out, "-------------------\n")?;
    Ok(())
}

/// Read one line without its line ending, or `None` at end of input.
fn read_input<I: BufRead>(input: &mut I) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use wordquiz_core::{parse_pairs, Vocabulary};

    fn play(words: &str, direction: Direction, keys: &str) -> (String, QuizSession<StdRng>) {
        let vocabulary = Vocabulary::new(parse_pairs(words)).unwrap();
        let mut session = QuizSession::with_rng(vocabulary, direction, StdRng::seed_from_u64(1));
        let mut input = Cursor::new(keys.as_bytes().to_vec());
        let mut out = Vec::new();
        run_quiz(&mut session, &mut input, &mut out).unwrap();
        (String::from_utf8(out).unwrap(), session)
    }

    #[test]
    fn correct_answer_then_stop() {
        let (out, session) = play("dog;koira", Direction::Forward, "Koira\nstop\n");
        assert!(out.contains("--- Game Started ---"));
        assert!(out.contains("Translate 'dog': Correct!"));
        assert!(out.ends_with("Game stopped.\n"));
        assert!(session.is_stopped());
    }

    #[test]
    fn wrong_answer_reveal_and_stats() {
        let (out, session) = play("dog;koira", Direction::Forward, "kissa\n3\nstats\nstop\n");
        assert!(out.contains("Wrong answer."));
        assert!(out.contains("1: Try again | 2: Skip | 3: Reveal word"));
        assert!(out.contains("The correct word was: koira"));
        assert!(out.contains("--- Error Stats ---"));
        assert!(out.contains("Wrong answers"));
        assert_eq!(session.state().stats().count("dog"), 1);
    }

    #[test]
    fn retry_asks_the_same_word() {
        let (out, _) = play("dog;koira", Direction::Forward, "x\n1\nkoira\nstop\n");
        assert_eq!(out.matches("Translate 'dog'").count(), 3);
        assert!(out.contains("Correct!"));
    }

    #[test]
    fn invalid_follow_up_skips() {
        let (out, _) = play("dog;koira", Direction::Forward, "x\nq\nstop\n");
        assert!(out.contains("Invalid input, skipping word."));
    }

    #[test]
    fn plain_skip_is_silent() {
        let (out, _) = play("dog;koira", Direction::Forward, "x\n2\nstop\n");
        assert!(!out.contains("Invalid input"));
        assert!(!out.contains("The correct word was"));
    }

    #[test]
    fn stats_without_errors() {
        let (out, _) = play("dog;koira", Direction::Forward, "stats\nstop\n");
        assert!(out.contains("No errors yet!"));
        assert_eq!(out.matches("Translate 'dog'").count(), 2);
    }

    #[test]
    fn stop_at_follow_up() {
        let (out, session) = play("dog;koira", Direction::Forward, "x\nstop\n");
        assert!(out.ends_with("Game stopped.\n"));
        assert!(session.is_stopped());
    }

    #[test]
    fn end_of_input_stops() {
        let (out, session) = play("dog;koira", Direction::Forward, "");
        assert!(out.ends_with("Game stopped.\n"));
        assert!(session.is_stopped());

        let (_, session) = play("dog;koira", Direction::Forward, "x\n");
        assert!(session.is_stopped());
    }

    #[test]
    fn reverse_mode_asks_target() {
        let (out, _) = play("house;talo", Direction::Reverse, "HOUSE\nstop\n");
        assert!(out.contains("Translate 'talo': Correct!"));
    }

    #[test]
    fn mode_menu() {
        let languages = LanguageNames::default();
        let mut out = Vec::new();
        let choice =
            select_direction(&mut Cursor::new(b"2\n".to_vec()), &mut out, &languages).unwrap();
        assert_eq!(choice, Some(Direction::Reverse));
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("1: English -> Finnish"));
        assert!(out.contains("2: Finnish -> English"));

        let mut out = Vec::new();
        let choice =
            select_direction(&mut Cursor::new(b"3\n".to_vec()), &mut out, &languages).unwrap();
        assert_eq!(choice, None);
        assert!(String::from_utf8(out).unwrap().contains("Invalid selection."));
    }
}
