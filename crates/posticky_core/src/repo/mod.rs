//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the persistence-engine contract the note store consumes.
//! - Isolate SQLite query details from store/selection orchestration.
//!
//! # Invariants
//! - Every write is durable before the call returns.
//! - Lookups of absent ids are `Ok(None)` / `Ok(false)`, not errors.

pub mod note_repo;
