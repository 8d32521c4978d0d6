use crate::domain::{seed_items, Item};
use crate::ids::IdGenerator;
use crate::persistence::{decode_list, encode_list, Storage};
use thiserror::Error;

/// Failure to write the list back to storage
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to serialize list: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to save list to slot '{key}': {source}")]
    Write {
        key: String,
        #[source]
        source: anyhow::Error,
    },
}

/// Owns the to-do list and keeps its storage slot in step with it
pub struct Store {
    items: Vec<Item>,
    key: String,
    storage: Box<dyn Storage>,
    ids: Box<dyn IdGenerator>,
}

impl Store {
    /// Load the list from the `key` slot, falling back to the seed list when
    /// the slot is empty, unreadable or holds something else. The seed list is
    /// written back to the slot; a failed write is logged, never returned.
    pub fn initialize(
        key: impl Into<String>,
        mut storage: Box<dyn Storage>,
        mut ids: Box<dyn IdGenerator>,
    ) -> Self {
        let key = key.into();

        let stored = match storage.get(&key) {
            Ok(raw) => raw.and_then(|raw| decode_list(&raw)),
            Err(e) => {
                tracing::warn!("could not read slot '{}': {:#}", key, e);
                None
            }
        };

        let items = match stored {
            Some(items) => {
                tracing::debug!("loaded {} items from slot '{}'", items.len(), key);
                items
            }
            None => {
                let items = seed_items(|| ids.next_id());
                match encode_list(&items) {
                    Ok(json) => {
                        if let Err(e) = storage.set(&key, &json) {
                            tracing::warn!("could not save seed list to slot '{}': {:#}", key, e);
                        }
                    }
                    Err(e) => tracing::warn!("could not serialize seed list: {}", e),
                }
                items
            }
        };

        Self {
            items,
            key,
            storage,
            ids,
        }
    }

    /// Current list snapshot
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Append a new incomplete item; empty text is ignored
    pub fn add(&mut self, text: &str) -> Result<(), StoreError> {
        if text.is_empty() {
            return Ok(());
        }

        let mut items = self.items.clone();
        items.push(Item::new(self.ids.next_id(), text.to_string()));
        self.commit(items)
    }

    /// Remove the item with `id`, if present
    pub fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        let Some(index) = self.position(id) else {
            return Ok(());
        };

        let mut items = self.items.clone();
        items.remove(index);
        self.commit(items)
    }

    /// Flip the completion flag of the item with `id`, if present
    pub fn complete(&mut self, id: &str) -> Result<(), StoreError> {
        let Some(index) = self.position(id) else {
            return Ok(());
        };

        let mut items = self.items.clone();
        items[index].toggle();
        self.commit(items)
    }

    /// Replace the whole list with a new seed list (fresh IDs every time)
    pub fn reset(&mut self) -> Result<(), StoreError> {
        let ids = &mut self.ids;
        let items = seed_items(|| ids.next_id());
        self.commit(items)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Write `items` to storage, then adopt them as the current list.
    /// On failure the current list is left untouched.
    fn commit(&mut self, items: Vec<Item>) -> Result<(), StoreError> {
        let json = encode_list(&items)?;
        self.storage
            .set(&self.key, &json)
            .map_err(|source| StoreError::Write {
                key: self.key.clone(),
                source,
            })?;

        tracing::debug!("saved {} items to slot '{}'", items.len(), self.key);
        self.items = items;
        Ok(())
    }
}
