use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::error::{GameError, GuessError};
use crate::scoring::{score, GuessResult};
use crate::validation::{ValidationGate, Verdict};
use crate::words::{Word, WordList, SUPPORTED_SIZES};

/// Where the session stands after the most recent accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Active,
    Won,
    Lost,
}

/// One accepted guess together with its scoring
#[derive(Debug, Clone)]
pub struct GuessRecord {
    pub word: Word,
    pub result: GuessResult,
}

/// A single game against one hidden target word.
///
/// The session holds a handle to a validation gate, which may be shared
/// with other sessions so cached verdicts and the degraded flag outlive
/// any one game. Only accepted guesses spend budget: malformed input,
/// repeats, dictionary rejections and the one guess that trips the gate
/// into degraded mode all leave the remaining count untouched.
pub struct GameSession {
    target: Word,
    word_size: usize,
    guesses_left: usize,
    guessed: HashSet<String>,
    history: Vec<GuessRecord>,
    status: SessionStatus,
    gate: Arc<ValidationGate>,
}

impl GameSession {
    /// Start a session with a target drawn from the word list
    pub fn new(words: &WordList, gate: Arc<ValidationGate>) -> Self {
        let target = words.pick_target().clone();
        // The list only loads for supported sizes, so no guard is needed here
        Self::start(target, gate)
    }

    /// Start a session with a fixed target word
    pub fn with_target(target: Word, gate: Arc<ValidationGate>) -> crate::Result<Self> {
        if !SUPPORTED_SIZES.contains(&target.len()) {
            return Err(GameError::InvalidWordSize(target.len()));
        }
        Ok(Self::start(target, gate))
    }

    fn start(target: Word, gate: Arc<ValidationGate>) -> Self {
        let word_size = target.len();
        let guesses_left = word_size + 1;

        debug!("New game: {} letters, {} guesses", word_size, guesses_left);

        Self {
            target,
            word_size,
            guesses_left,
            guessed: HashSet::new(),
            history: Vec::new(),
            status: SessionStatus::Active,
            gate,
        }
    }

    /// Play one guess.
    ///
    /// Rejected input returns a [`GuessError`] describing what to tell the
    /// player and costs nothing. An accepted guess is scored, spends one
    /// from the budget and may finish the game. Every well-formed guess is
    /// remembered before validation, so a word the dictionary rejected
    /// counts as already guessed if the player tries it again.
    pub async fn submit_guess(&mut self, raw: &str) -> Result<GuessRecord, GuessError> {
        if self.status != SessionStatus::Active {
            return Err(GuessError::Finished);
        }

        let word = Word::parse(raw, self.word_size)?;

        if !self.guessed.insert(word.as_str().to_string()) {
            return Err(GuessError::Duplicate(word.as_str().to_string()));
        }

        match self.gate.check(word.as_str()).await {
            Verdict::Invalid => {
                return Err(GuessError::NotAWord(word.as_str().to_string()));
            }
            Verdict::ServiceFailed => {
                return Err(GuessError::ServiceUnavailable(word.as_str().to_string()));
            }
            Verdict::Valid | Verdict::Unchecked => {}
        }

        let result = score(&self.target, &word);
        self.guesses_left -= 1;

        if result.is_win() {
            self.status = SessionStatus::Won;
            debug!("Game won with {} guesses to spare", self.guesses_left);
        } else if self.guesses_left == 0 {
            self.status = SessionStatus::Lost;
            debug!("Guess budget exhausted, target was '{}'", self.target);
        }

        let record = GuessRecord { word, result };
        self.history.push(record.clone());
        Ok(record)
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn word_size(&self) -> usize {
        self.word_size
    }

    pub fn guesses_left(&self) -> usize {
        self.guesses_left
    }

    /// Accepted guesses in play order
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// The target word, revealed only once the game is over
    pub fn reveal_target(&self) -> Option<&str> {
        match self.status {
            SessionStatus::Active => None,
            SessionStatus::Won | SessionStatus::Lost => Some(self.target.as_str()),
        }
    }

    /// Whether word validation has fallen back to accepting everything
    pub async fn validation_degraded(&self) -> bool {
        self.gate.is_degraded().await
    }
}
