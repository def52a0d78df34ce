use crate::words::Word;

/// Feedback for a single letter position.
///
/// The discriminants carry the scoring weight, so `Exact > Close > Wrong`
/// both as an ordering and as points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    /// Letter has no remaining credit in the target at this position
    Wrong = 0,
    /// Letter exists in the target but not here, and is still available
    /// after exact-match accounting
    Close = 1,
    /// Letter matches the target at the same position
    Exact = 2,
}

impl LetterStatus {
    /// Score contribution of this status
    pub const fn points(self) -> u32 {
        self as u32
    }
}

/// Outcome of scoring one guess against the target.
///
/// Produced fresh per guess and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    score: u32,
    statuses: Vec<LetterStatus>,
}

impl GuessResult {
    pub fn score(&self) -> u32 {
        self.score
    }

    /// One status per guess letter, in position order
    pub fn statuses(&self) -> &[LetterStatus] {
        &self.statuses
    }

    /// True iff every position is `Exact`, i.e. score == 2 × word length
    pub fn is_win(&self) -> bool {
        self.statuses.iter().all(|s| *s == LetterStatus::Exact)
    }
}

/// Score `guess` against `target`.
///
/// Two passes over the guess, both left to right. The first credits exact
/// position matches and removes those letters from the target's letter
/// counts; the second credits `Close` only while a letter still has count
/// remaining, so repeated guess letters never collect more credit than
/// the target holds and an exact match is never displaced by a close one.
///
/// Both words must have the same length; `GameSession` guarantees this by
/// parsing every guess against its own word size.
pub fn score(target: &Word, guess: &Word) -> GuessResult {
    debug_assert_eq!(
        target.len(),
        guess.len(),
        "scoring requires equal-length words"
    );

    let target_bytes = target.as_bytes();
    let guess_bytes = guess.as_bytes();

    let mut remaining = [0u8; 26];
    for &b in target_bytes {
        remaining[usize::from(b - b'a')] += 1;
    }

    let mut statuses = vec![LetterStatus::Wrong; guess_bytes.len()];
    let mut total = 0;

    for (i, &b) in guess_bytes.iter().enumerate() {
        if b == target_bytes[i] {
            statuses[i] = LetterStatus::Exact;
            remaining[usize::from(b - b'a')] -= 1;
            total += LetterStatus::Exact.points();
        }
    }

    for (i, &b) in guess_bytes.iter().enumerate() {
        if statuses[i] == LetterStatus::Exact {
            continue;
        }
        let slot = &mut remaining[usize::from(b - b'a')];
        if *slot > 0 {
            *slot -= 1;
            statuses[i] = LetterStatus::Close;
            total += LetterStatus::Close.points();
        }
    }

    GuessResult {
        score: total,
        statuses,
    }
}
