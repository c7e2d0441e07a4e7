//! Durable storage for persisted documents.
//!
//! Each store (match history, saved composites) is persisted as a single
//! JSON document under a fixed key:
//!
//! - **JsonFileStore**: one `<key>.json` file per key in a data directory
//! - **MemoryStore**: in-process map, for tests and throwaway sessions
//!
//! Stores never surface load failures to the user. An unreadable or
//! undecodable document is logged and treated as absent, and a failed
//! write leaves the in-memory state authoritative until the next save.

mod file;
mod memory;

pub use file::*;
pub use memory::*;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Key for the completed match list
pub const MATCHES_KEY: &str = "savedMatches";

/// Key for the saved composite list
pub const COMPOSITES_KEY: &str = "savedConfigurations";

/// Key-value document storage
pub trait DocumentStore {
    /// Load the document stored under `key`, `None` if nothing was saved yet
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Replace the document stored under `key`
    fn save(&mut self, key: &str, document: &str) -> Result<()>;
}

impl<S: DocumentStore + ?Sized> DocumentStore for Box<S> {
    fn load(&self, key: &str) -> Result<Option<String>> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, document: &str) -> Result<()> {
        (**self).save(key, document)
    }
}

/// Load and decode a document, falling back to `None` on any failure
pub fn load_document<T, S>(store: &S, key: &str) -> Option<T>
where
    T: DeserializeOwned,
    S: DocumentStore + ?Sized,
{
    let content = match store.load(key) {
        Ok(Some(c)) => c,
        Ok(None) => {
            debug!("No document stored under {}", key);
            return None;
        }
        Err(e) => {
            warn!("Failed to read {}: {}", key, e);
            return None;
        }
    };

    match serde_json::from_str::<T>(&content) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Failed to decode {}: {}", key, e);
            None
        }
    }
}

/// Encode and write a document; failures are logged, not returned
pub fn save_document<T, S>(store: &mut S, key: &str, value: &T) -> bool
where
    T: Serialize + ?Sized,
    S: DocumentStore + ?Sized,
{
    let result = serde_json::to_string(value)
        .map_err(Error::from)
        .and_then(|document| store.save(key, &document));

    match result {
        Ok(()) => {
            debug!("Saved {}", key);
            true
        }
        Err(e) => {
            warn!("Failed to save {}: {}", key, e);
            false
        }
    }
}

/// Store whose every read and write fails
#[cfg(test)]
pub(crate) struct BrokenStore;

#[cfg(test)]
impl DocumentStore for BrokenStore {
    fn load(&self, _key: &str) -> Result<Option<String>> {
        Err(Error::Io(std::io::Error::other("disk gone")))
    }

    fn save(&mut self, _key: &str, _document: &str) -> Result<()> {
        Err(Error::Io(std::io::Error::other("disk gone")))
    }
}
