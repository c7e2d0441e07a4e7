//! Saved configuration listing and removal.

use anyhow::{Result, bail};
use xscore_core::{DocumentStore, SavedComposites};

use crate::cli::ConfigsAction;
use crate::commands::{nth, print_composites};

pub fn run<S: DocumentStore>(store: S, action: Option<ConfigsAction>) -> Result<()> {
    let mut saved = SavedComposites::load(store);

    match action {
        None => {
            println!("Saved configurations ({})", saved.len());
            print_composites(saved.all());
        }
        Some(ConfigsAction::Remove { index }) => {
            let Some(id) = nth(saved.all(), index).map(|c| c.id) else {
                bail!("No configuration #{} ({} saved)", index, saved.len());
            };
            if let Some(removed) = saved.remove(id) {
                println!("Removed {}", removed.name());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use xscore_core::MemoryStore;

    #[test]
    fn test_remove_out_of_range() {
        let err = run(MemoryStore::new(), Some(ConfigsAction::Remove { index: 0 })).unwrap_err();
        assert!(err.to_string().contains("No configuration #0"));

        let err = run(MemoryStore::new(), Some(ConfigsAction::Remove { index: 99 })).unwrap_err();
        assert!(err.to_string().contains("6 saved"));
    }

    #[test]
    fn test_remove_first() {
        assert!(run(MemoryStore::new(), Some(ConfigsAction::Remove { index: 1 })).is_ok());
    }
}
