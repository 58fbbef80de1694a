//! Thing key derivation functions.
//!
//! Pure functions mapping an external Thing id to its storage key and back.
//! Partition and sort key always hold the same value so a Thing is a
//! single-item collection.

use uuid::Uuid;

use super::types::StorageKey;

// ============================================================================
// Key prefixes
// ============================================================================

/// Collection name used as the key prefix.
const COLLECTION_NAME: &str = "thing";

/// Separator between the collection name and the id.
const KEY_SEPARATOR: char = '#';

/// Generate a key for a freshly created Thing.
///
/// Pattern: `thing#<uuid-v4>`
pub fn new_key() -> StorageKey {
    key_from_id(&Uuid::new_v4().to_string())
}

/// Generate the key for an existing Thing id.
///
/// Pattern: `thing#<id>`. The id is not validated; an empty id yields `thing#`.
pub fn key_from_id(id: &str) -> StorageKey {
    let key = format!("{COLLECTION_NAME}{KEY_SEPARATOR}{id}");
    StorageKey {
        pk: key.clone(),
        sk: key,
    }
}

/// Recover the Thing id from its key.
///
/// Everything after the first `#` of the partition key. A key without a
/// separator is returned unchanged.
pub fn id_from_key(key: &StorageKey) -> String {
    match key.pk.split_once(KEY_SEPARATOR) {
        Some((_, id)) => id.to_string(),
        None => key.pk.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_id() {
        let key = key_from_id("1234");
        assert_eq!(key.pk, "thing#1234");
        assert_eq!(key.sk, "thing#1234");
    }

    #[test]
    fn test_key_from_empty_id() {
        let key = key_from_id("");
        assert_eq!(key.pk, "thing#");
        assert_eq!(key.sk, "thing#");
        assert_eq!(id_from_key(&key), "");
    }

    #[test]
    fn test_new_key_is_uuid_based() {
        let key = new_key();
        let id = id_from_key(&key);

        assert_eq!(key.pk, key.sk);
        assert_eq!(id.len(), 36);
        Uuid::parse_str(&id).expect("Should be valid UUID");
        assert_eq!(key, key_from_id(&id));
    }

    #[test]
    fn test_new_keys_are_distinct() {
        assert_ne!(new_key(), new_key());
    }

    #[test]
    fn test_id_round_trip() {
        for id in ["abc", "550e8400-e29b-41d4-a716-446655440001", "with#hash", ""] {
            let key = key_from_id(id);
            assert_eq!(id_from_key(&key), id);
            assert_eq!(key_from_id(&id_from_key(&key)), key);
        }
    }

    #[test]
    fn test_id_from_key_without_separator() {
        let key = StorageKey {
            pk: "1234".to_string(),
            sk: "1234".to_string(),
        };
        assert_eq!(id_from_key(&key), "1234");
    }
}
