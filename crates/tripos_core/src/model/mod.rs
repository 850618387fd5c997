//! Trip document model.
//!
//! # Responsibility
//! - Define the persisted shapes: the root `Document` and its three item
//!   collections plus the day-label map.
//! - Keep serde field names identical to the stored JSON layout.
//!
//! # Invariants
//! - Every item carries an opaque `id` unique within its collection.
//! - A "day" is never stored; it is the set of distinct itinerary dates.

pub mod checklist;
pub mod document;
pub mod expense;
pub mod format;
pub mod itinerary;
