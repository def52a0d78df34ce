use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

use crate::error::LookupError;

/// A remote service answering "is this a real word?".
///
/// Implementations return a definitive found/not-found signal or a
/// [`LookupError`]. Anything non-definitive (timeout, connection failure)
/// must be an error, never "word invalid": the gate treats errors as
/// "service now unavailable".
#[async_trait]
pub trait DictionaryLookup: Send + Sync {
    async fn lookup(&self, word: &str) -> Result<bool, LookupError>;
}

/// One entry of the dictionary API payload; only the headword matters here
#[derive(Debug, Deserialize)]
struct DictionaryEntry {
    word: String,
}

/// Dictionary lookup over HTTP, modeled on `dictionaryapi.dev`: GET
/// `<base>/<word>` answers 200 with a list of entries for a known word and
/// 404 for an unknown one.
pub struct HttpDictionary {
    base_url: String,
    client: reqwest::Client,
}

impl HttpDictionary {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl DictionaryLookup for HttpDictionary {
    async fn lookup(&self, word: &str) -> Result<bool, LookupError> {
        let url = format!("{}/{}", self.base_url, word);

        debug!("Querying dictionary service: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        match response.status() {
            StatusCode::OK => {
                let body = response
                    .text()
                    .await
                    .map_err(|e| LookupError::Transport(e.to_string()))?;

                let entries: Vec<DictionaryEntry> = serde_json::from_str(&body)
                    .map_err(|e| {
                        LookupError::Transport(format!("unreadable dictionary payload: {e}"))
                    })?;

                match entries.first() {
                    Some(entry) => {
                        debug!("Dictionary entry found for '{}'", entry.word);
                        Ok(true)
                    }
                    None => Ok(false),
                }
            }
            StatusCode::NOT_FOUND => Ok(false),
            status => Err(LookupError::Status(status.as_u16())),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use super::*;

    /// Scripted reply for one `ScriptedLookup` call
    pub(crate) enum Reply {
        Found(bool),
        Fail(LookupError),
        /// Never resolves; exercises the gate timeout
        Hang,
    }

    /// In-memory stand-in for the remote dictionary: plays back a reply
    /// script, then accepts every word. Counts calls so tests can assert
    /// the remote is never consulted again after degradation.
    pub(crate) struct ScriptedLookup {
        replies: Mutex<VecDeque<Reply>>,
        calls: AtomicUsize,
    }

    impl ScriptedLookup {
        pub fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
            Self {
                replies: Mutex::new(replies.into_iter().collect()),
                calls: AtomicUsize::new(0),
            }
        }

        pub fn accept_everything() -> Self {
            Self::new([])
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl DictionaryLookup for ScriptedLookup {
        async fn lookup(&self, _word: &str) -> Result<bool, LookupError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let next = self.replies.lock().unwrap().pop_front();
            match next {
                Some(Reply::Found(found)) => Ok(found),
                Some(Reply::Fail(err)) => Err(err),
                Some(Reply::Hang) => std::future::pending().await,
                None => Ok(true),
            }
        }
    }
}
