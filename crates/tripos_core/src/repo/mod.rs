//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the durable key/value slot contract used by the gateway.
//! - Isolate SQLite query details from document handling.
//!
//! # Invariants
//! - A slot holds one opaque string; repositories never parse it.
//! - Writes replace the whole value (last full write wins).

pub mod slot_repo;
