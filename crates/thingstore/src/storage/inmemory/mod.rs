//! In-memory storage backend.
//!
//! This module provides an in-memory implementation of `ThingRepository`
//! that stores all data in a HashMap wrapped in `Arc<RwLock<_>>`. It backs
//! the handler tests and runs the service when the `dynamodb` feature is
//! disabled.
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
