use dotenvy::dotenv;
use miette::IntoDiagnostic;
use std::env;
use std::time::Duration;
use tracing::info;

use crate::Error;

pub struct Config {
    pub wordlist_dir: String,
    pub api_base_url: String,
    pub lookup_timeout: Duration,
}

pub fn load_config() -> miette::Result<Config> {
    info!("Loading configuration");

    // Load environment variables
    dotenv().ok();

    let wordlist_dir = env::var("WORDLIST_DIR").unwrap_or_else(|_| "./data".to_string());

    let api_base_url = env::var("DICTIONARY_API_URL")
        .unwrap_or_else(|_| "https://api.dictionaryapi.dev/api/v2/entries/en".to_string());

    let lookup_timeout_secs = env::var("LOOKUP_TIMEOUT_SECS")
        .unwrap_or_else(|_| "5".to_string())
        .parse::<u64>()
        .into_diagnostic()
        .map_err(|_| Error::Config("Invalid LOOKUP_TIMEOUT_SECS".to_string()))?;

    Ok(Config {
        wordlist_dir,
        api_base_url,
        lookup_timeout: Duration::from_secs(lookup_timeout_secs),
    })
}
