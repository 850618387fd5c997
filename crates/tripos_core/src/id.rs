//! Record identifier generation.
//!
//! Ids only need to be unique within one document on one device, so a short
//! slice of a random v4 UUID is enough (48 random bits).

use uuid::Uuid;

const ID_LEN: usize = 12;

/// Returns a fresh short opaque record id.
pub fn new_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(ID_LEN);
    id
}
