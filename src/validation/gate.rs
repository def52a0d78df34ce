use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::error::LookupError;
use crate::validation::lookup::DictionaryLookup;

/// How long a single dictionary lookup may take before it counts as a failure
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Outcome of asking the gate about one word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The dictionary knows this word
    Valid,
    /// The dictionary answered definitively: not a word
    Invalid,
    /// The service is degraded and the word was waved through unexamined
    Unchecked,
    /// The lookup failed just now; this word is rejected and the gate
    /// degrades for the rest of its lifetime
    ServiceFailed,
}

impl Verdict {
    /// Whether the word may proceed to scoring
    pub fn accepts(self) -> bool {
        matches!(self, Verdict::Valid | Verdict::Unchecked)
    }
}

struct GateState {
    cache: HashMap<String, bool>,
    api_available: bool,
}

/// Decides whether a guess is a real word, consulting a remote dictionary
/// at most once per distinct spelling.
///
/// Every definitive answer is cached for the lifetime of the gate. The
/// first failed lookup rejects the word that triggered it and flips the
/// gate into degraded mode; from then on the remote is never contacted
/// again and uncached words are accepted unexamined. Cached verdicts keep
/// their authority in degraded mode, so a word the dictionary already
/// rejected stays rejected.
pub struct ValidationGate {
    lookup: Arc<dyn DictionaryLookup>,
    timeout: Duration,
    state: Mutex<GateState>,
}

impl ValidationGate {
    pub fn new(lookup: Arc<dyn DictionaryLookup>) -> Self {
        Self::with_timeout(lookup, DEFAULT_LOOKUP_TIMEOUT)
    }

    pub fn with_timeout(lookup: Arc<dyn DictionaryLookup>, timeout: Duration) -> Self {
        Self {
            lookup,
            timeout,
            state: Mutex::new(GateState {
                cache: HashMap::new(),
                api_available: true,
            }),
        }
    }

    /// Check one word against the dictionary, applying the cache and the
    /// degraded-mode policy. The state lock is held across the remote call
    /// so concurrent checks of the same word cannot race into two lookups.
    pub async fn check(&self, word: &str) -> Verdict {
        let mut state = self.state.lock().await;

        if let Some(&known) = state.cache.get(word) {
            debug!("Validation cache hit for '{}': {}", word, known);
            return if known { Verdict::Valid } else { Verdict::Invalid };
        }

        if !state.api_available {
            debug!("Dictionary service degraded, accepting '{}' unexamined", word);
            return Verdict::Unchecked;
        }

        let outcome = tokio::time::timeout(self.timeout, self.lookup.lookup(word))
            .await
            .unwrap_or(Err(LookupError::Timeout));

        match outcome {
            Ok(known) => {
                state.cache.insert(word.to_string(), known);
                if known {
                    Verdict::Valid
                } else {
                    Verdict::Invalid
                }
            }
            Err(e) => {
                warn!(
                    "Dictionary lookup for '{}' failed: {}; continuing without word validation",
                    word, e
                );
                state.api_available = false;
                Verdict::ServiceFailed
            }
        }
    }

    /// Whether the gate has given up on the remote dictionary
    pub async fn is_degraded(&self) -> bool {
        !self.state.lock().await.api_available
    }
}
