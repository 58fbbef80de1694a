//! Storage backend implementations.
//!
//! This module provides concrete implementations of `ThingRepository`
//! defined in `thingstore_core::storage`.
//!
//! # Feature Flags
//!
//! - `dynamodb` (default): AWS DynamoDB storage backend using `aws-sdk-dynamodb`
//!
//! The in-memory backend is always compiled; it backs the tests and is used
//! by the server when `dynamodb` is disabled.
//!
//! # Examples
//!
//! Build with DynamoDB (default):
//! ```bash
//! cargo build -p thingstore
//! ```
//!
//! Build with the in-memory store only:
//! ```bash
//! cargo build -p thingstore --no-default-features
//! ```

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbRepository;

pub use inmemory::InMemoryRepository;
