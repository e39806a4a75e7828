//! Favorites store: an ordered list of [`FavoriteEntry`] mirrored to durable
//! key-value storage on every change.

mod storage;

pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};

use tracing::{info, warn};

use crate::constants::storage::FAVORITES_KEY;
use crate::domain::AnimeId;
use crate::error::StorageError;
use crate::models::favorite::FavoriteEntry;

pub struct FavoritesStore {
    entries: Vec<FavoriteEntry>,
    storage: Box<dyn KeyValueStorage>,
}

impl FavoritesStore {
    /// Opens the store, reading the persisted list once.
    ///
    /// A missing key is an empty list. An unreadable value is logged and
    /// also treated as empty; it is overwritten by the next change.
    pub fn open(storage: impl KeyValueStorage + 'static) -> Result<Self, StorageError> {
        let entries = match storage.get(FAVORITES_KEY)? {
            Some(raw) => serde_json::from_str::<Vec<FavoriteEntry>>(&raw).unwrap_or_else(|e| {
                warn!("Stored favorites are unreadable, starting empty: {}", e);
                Vec::new()
            }),
            None => Vec::new(),
        };

        let mut store = Self {
            entries: Vec::new(),
            storage: Box::new(storage),
        };

        for entry in entries {
            if !store.contains(entry.id) {
                store.entries.push(entry);
            }
        }

        info!(count = store.entries.len(), "Loaded favorites");
        Ok(store)
    }

    /// Removes the entry for `id` if present, otherwise appends one.
    ///
    /// Returns whether `id` is a favorite afterwards. The full list is
    /// persisted before returning; if that fails the in-memory list is left
    /// as it was.
    pub fn toggle(
        &mut self,
        id: AnimeId,
        title: &str,
        image_url: &str,
    ) -> Result<bool, StorageError> {
        let removed = match self.position(id) {
            Some(index) => Some((index, self.entries.remove(index))),
            None => {
                self.entries.push(FavoriteEntry::new(id, title, image_url));
                None
            }
        };

        if let Err(e) = self.persist() {
            warn!(%id, "Failed to persist favorites, reverting: {}", e);
            match removed {
                Some((index, entry)) => self.entries.insert(index, entry),
                None => {
                    self.entries.pop();
                }
            }
            return Err(e);
        }

        let now_favorite = removed.is_none();
        info!(%id, favorited = now_favorite, "Toggled favorite");
        Ok(now_favorite)
    }

    #[must_use]
    pub fn contains(&self, id: AnimeId) -> bool {
        self.position(id).is_some()
    }

    #[must_use]
    pub fn all(&self) -> &[FavoriteEntry] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, id: AnimeId) -> Option<&FavoriteEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, id: AnimeId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    fn persist(&mut self) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.entries)?;
        self.storage.set(FAVORITES_KEY, &json)
    }
}
