//! Interactive terminal flow for logging a finished book.
//!
//! Runs the reflection interview on stdin/stdout, then synthesis, rating,
//! and the shelf hand-off. This is the caller layer around the interview
//! engine: it serializes operations against the session (one line of input
//! at a time) and decides what to do with the finished review.

use crate::ai::ReviewModel;
use crate::config::Config;
use crate::constants::STAR_LABELS;
use crate::errors::{AppResult, InterviewError};
use crate::interview::{InterviewSession, Subject};
use crate::review;
use crate::shelf::{self, ShelfEntry};
use chrono::Local;
use std::io::{self, Write};
use tracing::{debug, info};

/// Runs the full log-a-book flow for one subject.
///
/// The interview continues until the model signals completion or the reader
/// sends `/done`. Abandoning mid-interview (EOF or `/quit`) drops the
/// exchange; nothing is persisted until the shelf hand-off at the very end.
pub fn log_book(config: &Config, subject: Subject, model: &dyn ReviewModel) -> AppResult<()> {
    println!();
    println!("📖 {} by {}", subject.title, subject.author);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Let's reflect on it. Answer in your own words; short is fine.");
    println!();
    println!("Commands:");
    println!("  • /again to get a different question");
    println!("  • /done when you're finished reflecting");
    println!("  • /quit to abandon without saving");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

    let mut session = InterviewSession::begin(subject, model);

    while !session.is_done() {
        if let Some(question) = session.current_question() {
            println!("Reflection: {}\n", question);
        }

        print!("You: ");
        io::stdout().flush()?;

        let Some(line) = read_line()? else {
            println!("\n👋 Interview abandoned, nothing saved.");
            return Ok(());
        };
        let input = line.trim();
        println!();

        match input {
            "/quit" => {
                println!("👋 Interview abandoned, nothing saved.");
                return Ok(());
            }
            "/again" => {
                if let Err(e) = session.regenerate(model) {
                    println!("({})\n", e);
                }
            }
            "/done" => match session.finish_early() {
                Ok(()) => break,
                Err(InterviewError::InvalidState { .. }) => {
                    println!("(Answer at least one question before finishing.)\n");
                }
                Err(e) => println!("({})\n", e),
            },
            _ => match session.submit_answer(input, model) {
                Ok(()) => {}
                Err(InterviewError::EmptyAnswer) => {
                    println!("(Write a thought, or /done to finish.)\n");
                }
                Err(e) => println!("({})\n", e),
            },
        }
    }

    debug!(
        "Interview complete after {} answers",
        session.answer_count()
    );
    println!("✍️  Writing your review...\n");

    let review_text = review::synthesize(model, session.subject(), session.exchange());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("{}", review_text);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

    let rating = prompt_rating()?;

    let entry = ShelfEntry {
        subject: session.subject().clone(),
        date_finished: Local::now().date_naive(),
        rating,
        review: review_text,
    };
    shelf::append_entry(&config.shelf_path, &entry)?;

    info!("Finished logging \"{}\"", entry.subject.title);
    println!("📚 Shelved. {}", config.shelf_path.display());
    Ok(())
}

/// Reads one line from stdin. `None` means EOF.
fn read_line() -> io::Result<Option<String>> {
    let mut line = String::new();
    let bytes = io::stdin().read_line(&mut line)?;
    if bytes == 0 {
        Ok(None)
    } else {
        Ok(Some(line))
    }
}

/// Prompts for a 1-5 star rating until valid input or a skip (empty line).
fn prompt_rating() -> AppResult<Option<u8>> {
    loop {
        print!("Rate it 1-5, or press Enter to skip: ");
        io::stdout().flush()?;

        let Some(line) = read_line()? else {
            return Ok(None);
        };
        match parse_rating(&line) {
            Ok(rating) => {
                if let Some(n) = rating {
                    println!("★ {}\n", STAR_LABELS[n as usize - 1]);
                }
                return Ok(rating);
            }
            Err(()) => println!("(A number from 1 to 5, or Enter to skip.)"),
        }
    }
}

/// Parses rating input: empty means skip, 1-5 is a rating, anything else is
/// invalid.
fn parse_rating(input: &str) -> Result<Option<u8>, ()> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    match input.parse::<u8>() {
        Ok(n) if (1..=5).contains(&n) => Ok(Some(n)),
        _ => Err(()),
    }
}
