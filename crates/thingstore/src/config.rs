use std::env;

/// Default AWS region for the DynamoDB client.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// DynamoDB table holding Thing records (default: empty, which fails at the
    /// first storage call)
    pub table_name: String,
    /// AWS region for the DynamoDB client (default: "us-east-1")
    pub region: String,
    /// Optional DynamoDB endpoint override, e.g. a local DynamoDB
    pub endpoint_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DDB_TABLE_NAME` - Table name (default: "")
    /// - `AWS_REGION` - AWS region (default: "us-east-1")
    /// - `DYNAMODB_ENDPOINT_URL` - Endpoint override (default: unset)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            table_name: lookup("DDB_TABLE_NAME").unwrap_or_default(),
            region: lookup("AWS_REGION")
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_REGION.to_string()),
            endpoint_url: lookup("DYNAMODB_ENDPOINT_URL").filter(|v| !v.is_empty()),
        }
    }
}
