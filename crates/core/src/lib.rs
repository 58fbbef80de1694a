//! Functional core for thingstore.
//!
//! Pure types and functions with no I/O: key derivation, the Thing item
//! model, request parsing and the storage contract implemented by the
//! service's backends.

pub mod storage;
pub mod thing;
