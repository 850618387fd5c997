//! Single-writer session holding the live trip document.
//!
//! # Responsibility
//! - Load the document once when the session opens.
//! - Run each action through the pure transitions, replace the held
//!   document, then persist the full result.
//!
//! # Invariants
//! - The in-memory document is the source of truth for the session; a failed
//!   save never rolls it back.
//! - Exactly one slot write is attempted per dispatched action.

use crate::model::document::Document;
use crate::repo::slot_repo::SlotStore;
use crate::service::mutation::{apply, TripAction};
use crate::service::persistence::{GatewayError, PersistenceGateway};
use log::{debug, warn};

/// Owned state cell threaded through the UI event loop.
pub struct TripSession<S: SlotStore> {
    gateway: PersistenceGateway<S>,
    document: Document,
}

impl<S: SlotStore> TripSession<S> {
    /// Opens a session, loading (or seeding) the document.
    pub fn open(gateway: PersistenceGateway<S>) -> Self {
        let document = gateway.load();
        Self { gateway, document }
    }

    /// Current document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn gateway(&self) -> &PersistenceGateway<S> {
        &self.gateway
    }

    /// Applies `action` and persists the new document.
    ///
    /// # Errors
    /// - Returns the gateway error when persisting fails. The new document is
    ///   kept in memory either way.
    pub fn dispatch(&mut self, action: TripAction) -> Result<&Document, GatewayError> {
        self.document = apply(&self.document, &action);
        debug!(
            "event=action_dispatch module=session status=ok action={}",
            action.name()
        );

        if let Err(err) = self.gateway.save(&self.document) {
            warn!(
                "event=action_dispatch module=session status=error action={} error_code=persist_failed",
                action.name()
            );
            return Err(err);
        }
        Ok(&self.document)
    }

    /// Ends the session, handing back the live document.
    pub fn into_document(self) -> Document {
        self.document
    }
}
