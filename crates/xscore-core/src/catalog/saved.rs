use tracing::info;
use uuid::Uuid;

use crate::catalog::Part;
use crate::catalog::builtin::PERMANENT_COMPOSITES;
use crate::composite::{Composite, build_composite};
use crate::storage::{COMPOSITES_KEY, DocumentStore, load_document, save_document};

/// User-saved composites, persisted after every change
pub struct SavedComposites<S: DocumentStore> {
    composites: Vec<Composite>,
    storage: S,
    revision: u64,
}

impl<S: DocumentStore> SavedComposites<S> {
    /// Hydrate from storage, seeding the permanent composites into an empty store
    pub fn load(storage: S) -> Self {
        let composites: Vec<Composite> =
            load_document(&storage, COMPOSITES_KEY).unwrap_or_default();

        let mut store = Self {
            composites,
            storage,
            revision: 0,
        };

        if store.composites.is_empty() {
            store.composites = permanent_composites();
            info!("Seeded {} permanent composites", store.composites.len());
            store.persist();
        } else {
            info!("Loaded {} saved composites", store.composites.len());
        }

        store
    }

    /// Save a composite; returns false if one with the same id is already saved
    pub fn save(&mut self, composite: Composite) -> bool {
        if self.composites.iter().any(|c| c.id == composite.id) {
            return false;
        }

        info!("Saving composite {}", composite.name());
        self.composites.push(composite);
        self.revision += 1;
        self.persist();
        true
    }

    /// Remove a composite by id, returning it if it was saved
    pub fn remove(&mut self, id: Uuid) -> Option<Composite> {
        let index = self.composites.iter().position(|c| c.id == id)?;
        let removed = self.composites.remove(index);
        info!("Removed composite {}", removed.name());
        self.revision += 1;
        self.persist();
        Some(removed)
    }

    pub fn all(&self) -> &[Composite] {
        &self.composites
    }

    pub fn get(&self, id: Uuid) -> Option<&Composite> {
        self.composites.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.composites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.composites.is_empty()
    }

    /// Bumped on every mutation so views can poll for changes
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn persist(&mut self) {
        save_document(&mut self.storage, COMPOSITES_KEY, &self.composites);
    }
}

fn permanent_composites() -> Vec<Composite> {
    PERMANENT_COMPOSITES
        .iter()
        .map(|(blade, ratchet, bit)| {
            build_composite(Part::blade(*blade), Part::ratchet(*ratchet), Part::bit(*bit))
        })
        .collect()
}
