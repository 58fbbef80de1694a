//! DynamoDB repository implementation.
//!
//! Implements `ThingRepository` from `thingstore_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_dynamodb::Client;

use thingstore_core::storage::{Result, ThingRepository, THING_ENTITY};
use thingstore_core::thing::{StorageKey, ThingData, ThingRecord};

use super::conversions::{data_to_item, item_to_data, key_to_attributes, record_to_item};
use super::error::{map_delete_item_error, map_get_item_error, map_put_item_error, PutCondition};
use crate::config::Config;

const CONDITION_ABSENT: &str = "attribute_not_exists(pk) AND attribute_not_exists(sk)";
const CONDITION_PRESENT: &str = "attribute_exists(pk) AND attribute_exists(sk)";

/// DynamoDB-based repository implementation.
///
/// The client is built once at startup and shared by every request.
#[derive(Debug, Clone)]
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new repository from application configuration.
    ///
    /// Uses the AWS SDK default credential chain with the configured region
    /// and optional endpoint override.
    pub async fn from_config(config: &Config) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()));
        if let Some(endpoint_url) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }
        let sdk_config = loader.load().await;

        Self::new(Client::new(&sdk_config), config.table_name.clone())
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl ThingRepository for DynamoDbRepository {
    async fn create_thing(&self, record: &ThingRecord) -> Result<()> {
        let item = record_to_item(record)?;

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .condition_expression(CONDITION_ABSENT)
            .send()
            .await
            .map_err(|e| {
                map_put_item_error(e, PutCondition::Absent, THING_ENTITY, record.key.pk.clone())
            })?;

        Ok(())
    }

    async fn get_thing(&self, key: &StorageKey) -> Result<Option<ThingData>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(key_to_attributes(key)))
            .consistent_read(true)
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_data(item)?)),
            None => Ok(None),
        }
    }

    async fn replace_thing(&self, key: &StorageKey, data: &ThingData) -> Result<()> {
        let item = data_to_item(key, data)?;

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .condition_expression(CONDITION_PRESENT)
            .send()
            .await
            .map_err(|e| {
                map_put_item_error(e, PutCondition::Present, THING_ENTITY, key.pk.clone())
            })?;

        Ok(())
    }

    async fn delete_thing(&self, key: &StorageKey) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(key_to_attributes(key)))
            .condition_expression(CONDITION_PRESENT)
            .send()
            .await
            .map_err(|e| map_delete_item_error(e, THING_ENTITY, key.pk.clone()))?;

        Ok(())
    }
}
