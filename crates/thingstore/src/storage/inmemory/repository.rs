//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use thingstore_core::storage::{RepositoryError, Result, ThingRepository, THING_ENTITY};
use thingstore_core::thing::{StorageKey, ThingData, ThingRecord};

/// In-memory storage backend.
///
/// Every operation takes the lock once, so each conditional write is atomic.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    things: Arc<RwLock<HashMap<StorageKey, ThingData>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.things.read().await.len()
    }

    /// Whether no records are stored.
    #[cfg(test)]
    pub async fn is_empty(&self) -> bool {
        self.things.read().await.is_empty()
    }
}

#[async_trait]
impl ThingRepository for InMemoryRepository {
    async fn create_thing(&self, record: &ThingRecord) -> Result<()> {
        let mut things = self.things.write().await;
        if things.contains_key(&record.key) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: THING_ENTITY,
                id: record.key.pk.clone(),
            });
        }
        things.insert(record.key.clone(), record.data.clone());
        Ok(())
    }

    async fn get_thing(&self, key: &StorageKey) -> Result<Option<ThingData>> {
        let things = self.things.read().await;
        Ok(things.get(key).cloned())
    }

    async fn replace_thing(&self, key: &StorageKey, data: &ThingData) -> Result<()> {
        let mut things = self.things.write().await;
        match things.get_mut(key) {
            Some(stored) => {
                *stored = data.clone();
                Ok(())
            }
            None => Err(RepositoryError::NotFound {
                entity_type: THING_ENTITY,
                id: key.pk.clone(),
            }),
        }
    }

    async fn delete_thing(&self, key: &StorageKey) -> Result<()> {
        let mut things = self.things.write().await;
        if things.remove(key).is_none() {
            return Err(RepositoryError::NotFound {
                entity_type: THING_ENTITY,
                id: key.pk.clone(),
            });
        }
        Ok(())
    }
}
