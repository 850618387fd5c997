//! Persistence gateway: the load/migrate/save cycle around the document.
//!
//! # Responsibility
//! - Read the stored document from its slot, backfilling fields that older
//!   builds did not write.
//! - Fall back to the seed document when nothing (or nothing usable) is
//!   stored.
//! - Serialize and overwrite the slot with the full document on save.
//!
//! # Invariants
//! - The stored JSON has no version field; migration is detected per field
//!   on the raw JSON value before typed decoding.
//! - `save` writes the whole document in one slot write; there are no
//!   partial writes.
//! - Expense amounts are finite before anything is written; JSON has no
//!   encoding for `inf`/`NaN`.
//! - `load` never fails; `try_load` reports why a load could not be used.

use crate::model::document::Document;
use crate::repo::slot_repo::{RepoError, SlotStore};
use log::{error, info, warn};
use serde_json::{Map, Value};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Fixed slot key holding the trip document.
pub const STORAGE_KEY: &str = "industrial_travel_app_v1";

const DAY_LABELS_FIELD: &str = "dayLabels";

/// Gateway failures surfaced to callers.
#[derive(Debug)]
pub enum GatewayError {
    /// The stored blob is not a valid document.
    CorruptPersistedState { reason: String },
    /// The slot could not be read.
    ReadFailed(RepoError),
    /// An expense amount is `inf` or `NaN` and cannot be stored.
    NonFiniteAmount { expense_id: String },
    /// The document could not be encoded for storage.
    Encode(serde_json::Error),
    /// The slot write was rejected.
    PersistFailed(RepoError),
}

impl Display for GatewayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CorruptPersistedState { reason } => {
                write!(f, "corrupt persisted state: {reason}")
            }
            Self::ReadFailed(err) => write!(f, "failed to read stored document: {err}"),
            Self::NonFiniteAmount { expense_id } => {
                write!(f, "expense {expense_id} has a non-finite amount")
            }
            Self::Encode(err) => write!(f, "failed to encode document: {err}"),
            Self::PersistFailed(err) => write!(f, "failed to persist document: {err}"),
        }
    }
}

impl Error for GatewayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::CorruptPersistedState { .. } | Self::NonFiniteAmount { .. } => None,
            Self::ReadFailed(err) | Self::PersistFailed(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl GatewayError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::CorruptPersistedState { .. } => "corrupt_persisted_state",
            Self::ReadFailed(_) => "slot_read_failed",
            Self::NonFiniteAmount { .. } => "non_finite_amount",
            Self::Encode(_) => "document_encode_failed",
            Self::PersistFailed(_) => "persist_failed",
        }
    }
}

/// How a loaded document was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Decoded as stored.
    Stored,
    /// Decoded after backfilling missing fields.
    Migrated,
    /// Nothing stored; seed document returned.
    Seeded,
}

impl LoadSource {
    fn as_str(self) -> &'static str {
        match self {
            Self::Stored => "stored",
            Self::Migrated => "migrated",
            Self::Seeded => "seeded",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDocument {
    pub document: Document,
    pub source: LoadSource,
}

/// Loads and saves the trip document through one slot of a `SlotStore`.
pub struct PersistenceGateway<S: SlotStore> {
    store: S,
    key: String,
}

impl<S: SlotStore> PersistenceGateway<S> {
    /// Creates a gateway over the default storage key.
    pub fn new(store: S) -> Self {
        Self::with_key(store, STORAGE_KEY)
    }

    /// Creates a gateway over a caller-chosen slot key.
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Loads the document, substituting the seed on any read or decode
    /// failure.
    ///
    /// # Side effects
    /// - Emits `document_load` events; failures are logged, not returned.
    pub fn load(&self) -> Document {
        match self.try_load() {
            Ok(loaded) => loaded.document,
            Err(err) => {
                warn!(
                    "event=document_load module=persistence status=recovered error_code={} fallback=seed error={}",
                    err.error_code(),
                    err
                );
                Document::seed()
            }
        }
    }

    /// Loads the document without fallback for unusable stored state.
    ///
    /// # Errors
    /// - `ReadFailed` when the slot store errors.
    /// - `CorruptPersistedState` when the stored blob is not a document.
    pub fn try_load(&self) -> Result<LoadedDocument, GatewayError> {
        let started_at = Instant::now();
        let raw = self.store.read_slot(&self.key).map_err(|err| {
            let err = GatewayError::ReadFailed(err);
            error!(
                "event=document_load module=persistence status=error duration_ms={} error_code={} error={}",
                started_at.elapsed().as_millis(),
                err.error_code(),
                err
            );
            err
        })?;

        let loaded = match raw {
            None => LoadedDocument {
                document: Document::seed(),
                source: LoadSource::Seeded,
            },
            Some(raw) => decode_document(&raw).map_err(|err| {
                error!(
                    "event=document_load module=persistence status=error duration_ms={} error_code={} error={}",
                    started_at.elapsed().as_millis(),
                    err.error_code(),
                    err
                );
                err
            })?,
        };

        info!(
            "event=document_load module=persistence status=ok source={} duration_ms={} itinerary={} expenses={} checklist={}",
            loaded.source.as_str(),
            started_at.elapsed().as_millis(),
            loaded.document.itinerary.len(),
            loaded.document.expenses.len(),
            loaded.document.checklist.len()
        );
        Ok(loaded)
    }

    /// Serializes the full document and overwrites the slot.
    ///
    /// # Errors
    /// - `NonFiniteAmount` when an expense amount is `inf` or `NaN`; the slot
    ///   keeps its previous value.
    /// - `Encode` when serialization fails.
    /// - `PersistFailed` when the store rejects the write.
    pub fn save(&self, doc: &Document) -> Result<(), GatewayError> {
        let started_at = Instant::now();
        let result = check_amounts(doc)
            .and_then(|()| serde_json::to_string(doc).map_err(GatewayError::Encode))
            .and_then(|encoded| {
                self.store
                    .write_slot(&self.key, &encoded)
                    .map(|()| encoded.len())
                    .map_err(GatewayError::PersistFailed)
            });

        match result {
            Ok(bytes) => {
                info!(
                    "event=document_save module=persistence status=ok duration_ms={} bytes={}",
                    started_at.elapsed().as_millis(),
                    bytes
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=document_save module=persistence status=error duration_ms={} error_code={} error={}",
                    started_at.elapsed().as_millis(),
                    err.error_code(),
                    err
                );
                Err(err)
            }
        }
    }
}

fn check_amounts(doc: &Document) -> Result<(), GatewayError> {
    match doc
        .expenses
        .iter()
        .find(|expense| !expense.amount_jpy.is_finite() || !expense.amount_twd.is_finite())
    {
        Some(expense) => Err(GatewayError::NonFiniteAmount {
            expense_id: expense.id.clone(),
        }),
        None => Ok(()),
    }
}

/// Decodes a stored blob, applying field backfills first.
pub fn decode_document(raw: &str) -> Result<LoadedDocument, GatewayError> {
    let mut value: Value = serde_json::from_str(raw).map_err(corrupt)?;
    let migrated = backfill_day_labels(&mut value)?;
    let document = serde_json::from_value(value).map_err(corrupt)?;

    Ok(LoadedDocument {
        document,
        source: if migrated {
            LoadSource::Migrated
        } else {
            LoadSource::Stored
        },
    })
}

/// Inserts an empty `dayLabels` map when the field is missing or null.
///
/// Returns whether the document was changed.
fn backfill_day_labels(value: &mut Value) -> Result<bool, GatewayError> {
    let Some(object) = value.as_object_mut() else {
        return Err(GatewayError::CorruptPersistedState {
            reason: "document root is not a JSON object".to_string(),
        });
    };

    match object.get(DAY_LABELS_FIELD) {
        None | Some(Value::Null) => {
            object.insert(DAY_LABELS_FIELD.to_string(), Value::Object(Map::new()));
            Ok(true)
        }
        Some(_) => Ok(false),
    }
}

fn corrupt(err: serde_json::Error) -> GatewayError {
    GatewayError::CorruptPersistedState {
        reason: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{decode_document, GatewayError, LoadSource};

    #[test]
    fn decode_rejects_non_object_root() {
        let err = decode_document("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, GatewayError::CorruptPersistedState { .. }));
    }

    #[test]
    fn decode_treats_null_day_labels_as_missing() {
        let loaded = decode_document(
            r#"{"itinerary":[],"expenses":[],"checklist":[],"dayLabels":null}"#,
        )
        .unwrap();
        assert_eq!(loaded.source, LoadSource::Migrated);
        assert!(loaded.document.day_labels.is_empty());
    }

    #[test]
    fn decode_rejects_missing_collections() {
        let err = decode_document(r#"{"itinerary":[],"dayLabels":{}}"#).unwrap_err();
        assert!(err.to_string().contains("corrupt persisted state"));
    }
}
