//! Core use-case services.
//!
//! # Responsibility
//! - Pure document transitions (`mutation`) and projections (`query`).
//! - The load/save gateway (`persistence`) and the live session that ties
//!   them together (`session`).
//! - Keep UI callers decoupled from storage details.

pub mod mutation;
pub mod persistence;
pub mod query;
pub mod session;
