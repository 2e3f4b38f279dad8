//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the string-keyed storage contract the engine consumes.
//! - Isolate SQLite and JSON details from service orchestration.
//!
//! # Invariants
//! - The collection is persisted as one full value under one key; there
//!   are no partial or incremental writes.
//! - Read paths degrade malformed persisted state to an empty or reduced
//!   collection instead of failing.

pub mod habit_repo;
pub mod kv_store;
