use rand::prelude::IndexedRandom;
use rand::Rng;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead};
use std::ops::RangeInclusive;
use std::path::Path;
use tracing::info;

use crate::error::{Error, GuessError, Result, WordListError};

/// Word lengths the game supports
pub const SUPPORTED_SIZES: RangeInclusive<usize> = 5..=8;

/// A normalized word: lowercase ASCII letters only, fixed length.
///
/// `parse` is the only way to build one, so every `Word` in the system is
/// already normalized and any comparison between two words of the same
/// session is byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word(String);

impl Word {
    /// Parse a raw guess against an expected length.
    ///
    /// Trims surrounding whitespace and lowercases before checking, so
    /// `"Crane\n"` and `"crane"` are the same word. Length is checked
    /// before the character set, matching the order rejections are
    /// reported to the player.
    pub fn parse(raw: &str, word_size: usize) -> std::result::Result<Self, GuessError> {
        let normalized = raw.trim().to_lowercase();

        let found = normalized.chars().count();
        if found != word_size {
            return Err(GuessError::WrongLength {
                expected: word_size,
                found,
            });
        }

        if !normalized.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(GuessError::NotAlphabetic(normalized));
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The candidate words for one session: the first `LIST_SIZE` entries of a
/// newline-delimited file, one list per supported word length.
///
/// Immutable after load; the target word is drawn from it uniformly.
#[derive(Debug)]
pub struct WordList {
    word_size: usize,
    options: Vec<Word>,
}

impl WordList {
    /// Number of words every list must provide
    pub const LIST_SIZE: usize = 1000;

    /// Load the list for `word_size` from `<dir>/<word_size>.txt`.
    ///
    /// Blank lines are skipped; anything else must be a word of exactly
    /// `word_size` ASCII letters. Fewer than `LIST_SIZE` usable words is a
    /// hard failure; a session is never constructed over a partial list.
    pub fn load(dir: impl AsRef<Path>, word_size: usize) -> Result<Self> {
        if !SUPPORTED_SIZES.contains(&word_size) {
            return Err(Error::InvalidWordSize(word_size));
        }

        let path = dir.as_ref().join(format!("{word_size}.txt"));

        info!("Loading word list from {}", path.display());

        let file = File::open(&path).map_err(|source| WordListError::Unavailable {
            path: path.clone(),
            source,
        })?;

        let mut options = Vec::with_capacity(Self::LIST_SIZE);
        for (index, line) in io::BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|source| WordListError::Unavailable {
                path: path.clone(),
                source,
            })?;

            let token = line.trim();
            if token.is_empty() {
                continue;
            }

            let word =
                Word::parse(token, word_size).map_err(|_| WordListError::MalformedEntry {
                    path: path.clone(),
                    line: index + 1,
                    expected: word_size,
                })?;
            options.push(word);

            if options.len() == Self::LIST_SIZE {
                break;
            }
        }

        if options.len() < Self::LIST_SIZE {
            return Err(WordListError::ShortRead {
                path,
                expected: Self::LIST_SIZE,
                found: options.len(),
            }
            .into());
        }

        info!("Loaded {} {}-letter words", options.len(), word_size);

        Ok(Self { word_size, options })
    }

    pub fn word_size(&self) -> usize {
        self.word_size
    }

    pub fn words(&self) -> &[Word] {
        &self.options
    }

    /// Draw a target word uniformly at random.
    pub fn pick_target(&self) -> &Word {
        self.pick_target_with(&mut rand::rng())
    }

    /// Same as [`pick_target`](Self::pick_target) with a caller-supplied
    /// random source, so tests can fix the target.
    pub fn pick_target_with<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        self.options
            .choose(rng)
            .expect("a loaded word list always holds LIST_SIZE words")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::path::PathBuf;

    /// Distinct synthetic 5-letter words: "aaaaa", "aaaab", ...
    fn synth_word(i: usize) -> String {
        let mut n = i;
        let mut letters = [b'a'; 5];
        for slot in letters.iter_mut().rev() {
            *slot = b'a' + (n % 26) as u8;
            n /= 26;
        }
        String::from_utf8(letters.to_vec()).unwrap()
    }

    fn write_list(dir: &Path, word_size: usize, lines: &[String]) -> PathBuf {
        let path = dir.join(format!("{word_size}.txt"));
        std::fs::write(&path, lines.join("\n")).unwrap();
        path
    }

    #[test]
    fn parse_normalizes_case_and_whitespace() {
        let word = Word::parse("  CrAnE\n", 5).unwrap();
        assert_eq!(word.as_str(), "crane");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert!(matches!(
            Word::parse("cran", 5),
            Err(GuessError::WrongLength {
                expected: 5,
                found: 4
            })
        ));
        assert!(matches!(
            Word::parse("cranes", 5),
            Err(GuessError::WrongLength {
                expected: 5,
                found: 6
            })
        ));
        assert!(matches!(
            Word::parse("", 5),
            Err(GuessError::WrongLength { found: 0, .. })
        ));
    }

    #[test]
    fn parse_rejects_non_letters() {
        assert!(matches!(
            Word::parse("cran3", 5),
            Err(GuessError::NotAlphabetic(_))
        ));
        assert!(matches!(
            Word::parse("cr-ne", 5),
            Err(GuessError::NotAlphabetic(_))
        ));
        // Length is checked first, so a 5-char non-ASCII word fails on the
        // character set, not the length
        assert!(matches!(
            Word::parse("naïve", 5),
            Err(GuessError::NotAlphabetic(_))
        ));
    }

    #[test]
    fn load_takes_the_first_thousand_words() {
        let dir = tempfile::tempdir().unwrap();
        let lines: Vec<String> = (0..WordList::LIST_SIZE + 5).map(synth_word).collect();
        write_list(dir.path(), 5, &lines);

        let list = WordList::load(dir.path(), 5).unwrap();
        assert_eq!(list.word_size(), 5);
        assert_eq!(list.words().len(), WordList::LIST_SIZE);
        assert_eq!(
            list.words().last().unwrap().as_str(),
            synth_word(WordList::LIST_SIZE - 1)
        );
    }

    #[test]
    fn load_skips_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let mut lines = Vec::new();
        for i in 0..WordList::LIST_SIZE {
            lines.push(synth_word(i));
            lines.push(String::new());
        }
        write_list(dir.path(), 5, &lines);

        let list = WordList::load(dir.path(), 5).unwrap();
        assert_eq!(list.words().len(), WordList::LIST_SIZE);
    }

    #[test]
    fn load_fails_on_short_list() {
        let dir = tempfile::tempdir().unwrap();
        let lines: Vec<String> = (0..10).map(synth_word).collect();
        write_list(dir.path(), 5, &lines);

        match WordList::load(dir.path(), 5) {
            Err(Error::WordList(WordListError::ShortRead {
                expected, found, ..
            })) => {
                assert_eq!(expected, WordList::LIST_SIZE);
                assert_eq!(found, 10);
            }
            other => panic!("expected ShortRead, got {other:?}"),
        }
    }

    #[test]
    fn load_fails_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        assert!(matches!(
            WordList::load(dir.path(), 5),
            Err(Error::WordList(WordListError::Unavailable { .. }))
        ));
    }

    #[test]
    fn load_fails_on_malformed_entry() {
        let dir = tempfile::tempdir().unwrap();
        let mut lines: Vec<String> = (0..WordList::LIST_SIZE).map(synth_word).collect();
        lines[3] = "abc".to_string();
        write_list(dir.path(), 5, &lines);

        match WordList::load(dir.path(), 5) {
            Err(Error::WordList(WordListError::MalformedEntry { line, expected, .. })) => {
                assert_eq!(line, 4);
                assert_eq!(expected, 5);
            }
            other => panic!("expected MalformedEntry, got {other:?}"),
        }
    }

    #[test]
    fn load_rejects_unsupported_sizes() {
        let dir = tempfile::tempdir().unwrap();

        assert!(matches!(
            WordList::load(dir.path(), 4),
            Err(Error::InvalidWordSize(4))
        ));
        assert!(matches!(
            WordList::load(dir.path(), 9),
            Err(Error::InvalidWordSize(9))
        ));
    }

    #[test]
    fn pick_target_is_deterministic_under_a_seeded_rng() {
        let dir = tempfile::tempdir().unwrap();
        let lines: Vec<String> = (0..WordList::LIST_SIZE).map(synth_word).collect();
        write_list(dir.path(), 5, &lines);
        let list = WordList::load(dir.path(), 5).unwrap();

        let first = list.pick_target_with(&mut StdRng::seed_from_u64(7)).clone();
        let second = list.pick_target_with(&mut StdRng::seed_from_u64(7)).clone();
        assert_eq!(first, second);
        assert!(list.words().contains(&first));
    }
}
