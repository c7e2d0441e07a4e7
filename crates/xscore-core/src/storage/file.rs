use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::storage::DocumentStore;

/// Stores each document as `<key>.json` under a base directory
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    base_dir: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", key))
    }
}

impl DocumentStore for JsonFileStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => {
                debug!("Read {} bytes from {}", content.len(), path.display());
                Ok(Some(content))
            }
            Err(e) => {
                let err = Error::Io(e);
                if err.is_not_found() {
                    Ok(None)
                } else {
                    Err(err)
                }
            }
        }
    }

    fn save(&mut self, key: &str, document: &str) -> Result<()> {
        fs::create_dir_all(&self.base_dir)?;
        let path = self.path_for(key);
        fs::write(&path, document)?;
        info!("Saved {} to {}", key, path.display());
        Ok(())
    }
}
