use std::env;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use colored::Colorize;
use miette::IntoDiagnostic;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wordle::{
    config, GameError, GameSession, GuessError, GuessRecord, HttpDictionary, LetterStatus,
    SessionStatus, ValidationGate, WordList, SUPPORTED_SIZES,
};

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Set up logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wordle=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting WORDLE console game");

    // Load configuration
    let config = config::load_config()?;

    let word_size = ask_word_size()?;
    let words = WordList::load(&config.wordlist_dir, word_size)?;

    let lookup = Arc::new(HttpDictionary::new(&config.api_base_url));
    let gate = Arc::new(ValidationGate::with_timeout(lookup, config.lookup_timeout));
    let mut session = GameSession::new(&words, gate);

    play(&mut session).await
}

/// Take the word size from the first argument, or prompt for one
fn ask_word_size() -> miette::Result<usize> {
    let raw = match env::args().nth(1) {
        Some(arg) => arg,
        None => {
            print!("Enter desired word size (5-8) to start: ");
            io::stdout().flush().into_diagnostic()?;

            let mut line = String::new();
            io::stdin().read_line(&mut line).into_diagnostic()?;
            line
        }
    };

    // Anything non-numeric falls out of the supported range below
    let size = raw.trim().parse::<usize>().unwrap_or(0);
    if !SUPPORTED_SIZES.contains(&size) {
        return Err(GameError::InvalidWordSize(size).into());
    }

    Ok(size)
}

async fn play(session: &mut GameSession) -> miette::Result<()> {
    println!("{}", "This is WORDLE".bold().white().on_green());
    println!(
        "You have {} tries to guess the {}-letter word I'm thinking of",
        session.guesses_left(),
        session.word_size()
    );

    while session.status() == SessionStatus::Active {
        print!("Input a {}-letter word: ", session.word_size());
        io::stdout().flush().into_diagnostic()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).into_diagnostic()? == 0 {
            // End of input ends the game quietly
            println!();
            return Ok(());
        }

        match session.submit_guess(&line).await {
            Ok(record) => {
                print!("Guess {}: ", session.history().len());
                print_feedback(&record);
            }
            // A word of the wrong length is prompted for again, silently
            Err(GuessError::WrongLength { .. }) => continue,
            Err(GuessError::NotAlphabetic(_)) => {
                println!("Invalid input! Use only letters.");
            }
            Err(GuessError::Duplicate(word)) => {
                println!("You have already guessed '{}'.", word);
            }
            Err(GuessError::NotAWord(_)) => {
                println!("Not a valid word. Try again.");
            }
            Err(GuessError::ServiceUnavailable(_)) => {
                println!("API currently unavailable, continuing without word validation.");
            }
            Err(GuessError::Finished) => break,
        }
    }

    match session.status() {
        SessionStatus::Won => println!("You won!"),
        SessionStatus::Lost => {
            if let Some(target) = session.reveal_target() {
                println!("The word was {}.", target);
            }
        }
        SessionStatus::Active => {}
    }

    Ok(())
}

fn print_feedback(record: &GuessRecord) {
    for (letter, status) in record
        .word
        .as_str()
        .chars()
        .zip(record.result.statuses().iter().copied())
    {
        let cell = letter.to_string().bold().white();
        let cell = match status {
            LetterStatus::Exact => cell.on_green(),
            LetterStatus::Close => cell.on_yellow(),
            LetterStatus::Wrong => cell.on_red(),
        };
        print!("{}", cell);
    }
    println!();
}
