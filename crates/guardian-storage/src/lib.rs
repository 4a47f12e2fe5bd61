//! # guardian-storage
//!
//! Record stores behind the `IVerificationStore`, `IPatternStore` and
//! `IQValueStore` traits: a SQLite engine with a single writer and a
//! read pool, and an in-memory store with the same semantics.

pub mod engine;
pub mod memory;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StorageEngine;
pub use memory::InMemoryStore;

use guardian_core::errors::{GuardianError, StorageError};

/// Wrap a SQLite failure message.
pub(crate) fn to_storage_err(message: String) -> GuardianError {
    StorageError::SqliteError { message }.into()
}
