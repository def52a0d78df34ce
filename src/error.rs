use miette::Diagnostic;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for the game
#[derive(Error, Debug, Diagnostic)]
pub enum GameError {
    #[error("Configuration error: {0}")]
    #[diagnostic(code(wordle::config_error))]
    Config(String),

    #[error("Unsupported word size {0}: must be 5, 6, 7, or 8")]
    #[diagnostic(code(wordle::invalid_word_size))]
    InvalidWordSize(usize),

    #[error("Word list error: {0}")]
    #[diagnostic(code(wordle::word_list_error))]
    WordList(#[from] WordListError),

    #[error("Guess rejected: {0}")]
    #[diagnostic(code(wordle::guess_rejected))]
    Guess(#[from] GuessError),

    #[error("Dictionary lookup error: {0}")]
    #[diagnostic(code(wordle::lookup_error))]
    Lookup(#[from] LookupError),

    #[error("I/O error: {0}")]
    #[diagnostic(code(wordle::io_error))]
    Io(#[from] io::Error),
}

/// Word-list loading errors; all of these are fatal at session construction
#[derive(Error, Debug, Diagnostic)]
pub enum WordListError {
    #[error("Failed to read word list {}: {source}", .path.display())]
    #[diagnostic(code(wordle::word_list::unavailable))]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Word list {} holds {found} usable words, need {expected}", .path.display())]
    #[diagnostic(code(wordle::word_list::short_read))]
    ShortRead {
        path: PathBuf,
        expected: usize,
        found: usize,
    },

    #[error("Word list {} line {line} is not a {expected}-letter word", .path.display())]
    #[diagnostic(code(wordle::word_list::malformed))]
    MalformedEntry {
        path: PathBuf,
        line: usize,
        expected: usize,
    },
}

/// Per-guess rejections; these are reported to the player and never
/// consume a guess attempt
#[derive(Error, Debug, Diagnostic)]
pub enum GuessError {
    #[error("Expected a {expected}-letter word, got {found} letters")]
    #[diagnostic(code(wordle::guess::wrong_length))]
    WrongLength { expected: usize, found: usize },

    #[error("'{0}' contains characters other than ASCII letters")]
    #[diagnostic(code(wordle::guess::not_alphabetic))]
    NotAlphabetic(String),

    #[error("'{0}' has already been guessed")]
    #[diagnostic(code(wordle::guess::duplicate))]
    Duplicate(String),

    #[error("'{0}' is not an accepted word")]
    #[diagnostic(code(wordle::guess::not_a_word))]
    NotAWord(String),

    #[error("Could not validate '{0}': dictionary service unreachable")]
    #[diagnostic(code(wordle::guess::service_unavailable))]
    ServiceUnavailable(String),

    #[error("The game is already over")]
    #[diagnostic(code(wordle::guess::finished))]
    Finished,
}

/// Dictionary lookup transport errors
#[derive(Error, Debug, Diagnostic)]
pub enum LookupError {
    #[error("Request failed: {0}")]
    #[diagnostic(code(wordle::lookup::transport))]
    Transport(String),

    #[error("Unexpected response status {0}")]
    #[diagnostic(code(wordle::lookup::status))]
    Status(u16),

    #[error("Timed out waiting for the dictionary service")]
    #[diagnostic(code(wordle::lookup::timeout))]
    Timeout,
}

// Re-export error types for convenience
pub use GameError as Error;

/// Create a result type that uses our error type
pub type Result<T> = std::result::Result<T, Error>;
