use async_trait::async_trait;

use crate::thing::{StorageKey, ThingData, ThingRecord};

use super::Result;

/// Entity name used in repository errors.
pub const THING_ENTITY: &str = "Thing";

/// Repository for Thing records.
///
/// Every operation touches exactly one record and relies on the backend's
/// conditional writes for atomicity.
#[async_trait]
pub trait ThingRepository: Send + Sync {
    /// Stores a new record. Fails with `AlreadyExists` if the key is taken.
    async fn create_thing(&self, record: &ThingRecord) -> Result<()>;

    /// Gets the data fields stored under a key, without the key attributes.
    async fn get_thing(&self, key: &StorageKey) -> Result<Option<ThingData>>;

    /// Replaces the data stored under an existing key. Fails with `NotFound`
    /// if nothing is stored there.
    async fn replace_thing(&self, key: &StorageKey, data: &ThingData) -> Result<()>;

    /// Deletes the record under an existing key. Fails with `NotFound` if
    /// nothing is stored there.
    async fn delete_thing(&self, key: &StorageKey) -> Result<()>;
}
