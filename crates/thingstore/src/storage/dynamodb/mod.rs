//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of `ThingRepository`
//! using `aws-sdk-dynamodb`. The table has a string hash key `pk` and a
//! string range key `sk`.

mod conversions;
mod error;
mod repository;

pub use repository::DynamoDbRepository;
