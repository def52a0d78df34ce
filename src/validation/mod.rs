pub mod gate;
pub mod lookup;

// Re-export common types
pub use gate::{ValidationGate, Verdict};
pub use lookup::{DictionaryLookup, HttpDictionary};
