pub mod config;
pub mod error;
pub mod scoring;
pub mod session;
pub mod validation;
pub mod words;

// Re-export error types for convenience
pub use error::{Error, GameError, GuessError, LookupError, Result, WordListError};

// Common types used across the application
pub use scoring::{score, GuessResult, LetterStatus};
pub use session::{GameSession, GuessRecord, SessionStatus};
pub use validation::{DictionaryLookup, HttpDictionary, ValidationGate, Verdict};
pub use words::{Word, WordList, SUPPORTED_SIZES};
