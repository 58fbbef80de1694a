use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Attribute name of the partition key.
pub const PARTITION_KEY: &str = "pk";

/// Attribute name of the sort key.
pub const SORT_KEY: &str = "sk";

/// Composite storage key of a Thing record.
///
/// Both halves hold the same value, `thing#<id>`. Build one with
/// `new_key` or `key_from_id` rather than by hand.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageKey {
    pub pk: String,
    pub sk: String,
}

/// Caller-visible data of a Thing.
///
/// `id` is optional on input and always set on stored records. Any other
/// field in the request body is kept verbatim in `fields`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThingData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ThingData {
    /// Creates data carrying only an id.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            fields: Map::new(),
        }
    }

    /// Adds an extra field.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Returns the first field name that collides with a key attribute.
    pub fn reserved_field(&self) -> Option<&str> {
        self.fields
            .keys()
            .map(String::as_str)
            .find(|name| *name == PARTITION_KEY || *name == SORT_KEY)
    }
}

/// A stored Thing: its storage key together with its data.
#[derive(Debug, Clone, PartialEq)]
pub struct ThingRecord {
    pub key: StorageKey,
    pub data: ThingData,
}

impl ThingRecord {
    pub fn new(key: StorageKey, data: ThingData) -> Self {
        Self { key, data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_thing_data_keeps_extra_fields() {
        let data: ThingData =
            serde_json::from_value(json!({"id": "abc", "name": "widget", "count": 3})).unwrap();

        assert_eq!(data.id.as_deref(), Some("abc"));
        assert_eq!(data.fields["name"], "widget");
        assert_eq!(data.fields["count"], 3);
        assert!(!data.fields.contains_key("id"));
    }

    #[test]
    fn test_thing_data_serializes_flat() {
        let data = ThingData::with_id("abc").with_field("tags", json!(["a", "b"]));

        let value = serde_json::to_value(&data).unwrap();

        assert_eq!(value, json!({"id": "abc", "tags": ["a", "b"]}));
    }

    #[test]
    fn test_thing_data_without_id_omits_it() {
        let value = serde_json::to_value(ThingData::default()).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_reserved_field_detection() {
        assert_eq!(ThingData::with_id("x").reserved_field(), None);
        assert_eq!(
            ThingData::with_id("x").with_field("sk", "oops").reserved_field(),
            Some("sk")
        );
    }
}
