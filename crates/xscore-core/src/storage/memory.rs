use std::collections::HashMap;

use crate::error::Result;
use crate::storage::DocumentStore;

/// Document store kept entirely in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    documents: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.documents.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl DocumentStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.documents.get(key).cloned())
    }

    fn save(&mut self, key: &str, document: &str) -> Result<()> {
        self.documents.insert(key.to_string(), document.to_string());
        Ok(())
    }
}
