//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and Thing types.
//! These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use serde_dynamo::aws_sdk_dynamodb_1::{from_item, to_item};
use thingstore_core::storage::RepositoryError;
use thingstore_core::thing::{StorageKey, ThingData, ThingRecord, PARTITION_KEY, SORT_KEY};

/// A DynamoDB item as returned and accepted by the SDK.
pub type Item = HashMap<String, AttributeValue>;

// ============================================================================
// Key conversions
// ============================================================================

/// Convert a StorageKey to the `pk`/`sk` attribute map used by GetItem and DeleteItem.
pub fn key_to_attributes(key: &StorageKey) -> Item {
    let mut attributes = HashMap::with_capacity(2);
    attributes.insert(
        PARTITION_KEY.to_string(),
        AttributeValue::S(key.pk.clone()),
    );
    attributes.insert(SORT_KEY.to_string(), AttributeValue::S(key.sk.clone()));
    attributes
}

// ============================================================================
// Record conversions
// ============================================================================

/// Convert a key and its data to a DynamoDB item.
///
/// Data fields are written first and the key attributes last, so the item
/// always carries the record's own key.
pub fn data_to_item(key: &StorageKey, data: &ThingData) -> Result<Item, RepositoryError> {
    let mut item: Item =
        to_item(data).map_err(|e| RepositoryError::Serialization(e.to_string()))?;

    item.extend(key_to_attributes(key));

    Ok(item)
}

/// Convert a ThingRecord to a DynamoDB item.
pub fn record_to_item(record: &ThingRecord) -> Result<Item, RepositoryError> {
    data_to_item(&record.key, &record.data)
}

/// Convert a DynamoDB item to the caller-visible ThingData, dropping the key attributes.
pub fn item_to_data(mut item: Item) -> Result<ThingData, RepositoryError> {
    item.remove(PARTITION_KEY);
    item.remove(SORT_KEY);

    from_item(item).map_err(|e| RepositoryError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use thingstore_core::thing::key_from_id;

    fn sample_record() -> ThingRecord {
        ThingRecord::new(
            key_from_id("550e8400-e29b-41d4-a716-446655440001"),
            ThingData::with_id("550e8400-e29b-41d4-a716-446655440001")
                .with_field("name", "widget")
                .with_field("count", 3)
                .with_field("active", true)
                .with_field("tags", json!(["a", "b"]))
                .with_field("size", json!({"w": 2, "h": 1.5})),
        )
    }

    #[test]
    fn test_key_to_attributes() {
        let attributes = key_to_attributes(&key_from_id("1234"));

        assert_eq!(attributes.len(), 2);
        assert_eq!(attributes.get("pk").unwrap().as_s().unwrap(), "thing#1234");
        assert_eq!(attributes.get("sk").unwrap().as_s().unwrap(), "thing#1234");
    }

    #[test]
    fn test_record_item_has_correct_keys() {
        let item = record_to_item(&sample_record()).unwrap();

        assert_eq!(
            item.get("pk").unwrap().as_s().unwrap(),
            "thing#550e8400-e29b-41d4-a716-446655440001"
        );
        assert_eq!(
            item.get("sk").unwrap().as_s().unwrap(),
            "thing#550e8400-e29b-41d4-a716-446655440001"
        );
        assert_eq!(
            item.get("id").unwrap().as_s().unwrap(),
            "550e8400-e29b-41d4-a716-446655440001"
        );
    }

    #[test]
    fn test_record_item_attribute_types() {
        let item = record_to_item(&sample_record()).unwrap();

        assert_eq!(item.get("name").unwrap().as_s().unwrap(), "widget");
        assert_eq!(item.get("count").unwrap().as_n().unwrap(), "3");
        assert!(*item.get("active").unwrap().as_bool().unwrap());
        assert_eq!(item.get("tags").unwrap().as_l().unwrap().len(), 2);
        assert!(item.get("size").unwrap().as_m().is_ok());
    }

    #[test]
    fn test_record_round_trip() {
        let record = sample_record();
        let item = record_to_item(&record).unwrap();
        let parsed = item_to_data(item).unwrap();

        assert_eq!(parsed, record.data);
        assert!(!parsed.fields.contains_key("pk"));
        assert!(!parsed.fields.contains_key("sk"));
    }

    #[test]
    fn test_data_fields_cannot_override_keys() {
        let key = key_from_id("1234");
        let data = ThingData::with_id("1234").with_field("pk", "thing#other");

        let item = data_to_item(&key, &data).unwrap();

        assert_eq!(item.get("pk").unwrap().as_s().unwrap(), "thing#1234");
    }

    #[test]
    fn test_item_without_id() {
        let mut item = key_to_attributes(&key_from_id("1234"));
        item.insert("data".to_string(), AttributeValue::S("data".to_string()));

        let parsed = item_to_data(item).unwrap();

        assert_eq!(parsed.id, None);
        assert_eq!(parsed.fields.get("data"), Some(&json!("data")));
    }
}
