//! Pending-request correlation registry.
//!
//! Maps a correlation id to the single-slot channel its caller waits on.
//! The mutex is held for one map operation at a time, never across a wait.

use std::collections::HashMap;
use std::sync::mpsc::{self, Receiver, SyncSender, TrySendError};
use std::sync::{Mutex, MutexGuard};

use ctrader_openapi::Envelope;
use tracing::{trace, warn};

use crate::error::{ClientError, Result};

#[derive(Debug, Default)]
pub struct CorrelationRegistry {
    pending: Mutex<HashMap<String, SyncSender<Envelope>>>,
}

impl CorrelationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry for `id` and return its delivery slot.
    pub fn register(&self, id: &str) -> Result<Receiver<Envelope>> {
        let mut pending = self.lock();
        if pending.contains_key(id) {
            return Err(ClientError::DuplicateId(id.to_string()));
        }
        let (tx, rx) = mpsc::sync_channel(1);
        pending.insert(id.to_string(), tx);
        trace!(correlation_id = id, "registered pending request");
        Ok(rx)
    }

    /// Hand `envelope` to the caller waiting on `id`.
    ///
    /// Returns `false` when no entry exists or the slot was already filled.
    pub fn deliver(&self, id: &str, envelope: Envelope) -> bool {
        let pending = self.lock();
        let Some(slot) = pending.get(id) else {
            return false;
        };
        match slot.try_send(envelope) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                warn!(correlation_id = id, "second response for pending request");
                false
            }
            Err(TrySendError::Disconnected(_)) => false,
        }
    }

    /// Remove the entry for `id`. Removing a missing entry is a no-op.
    pub fn deregister(&self, id: &str) {
        if self.lock().remove(id).is_some() {
            trace!(correlation_id = id, "deregistered pending request");
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.lock().contains_key(id)
    }

    /// Number of requests awaiting a response.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, SyncSender<Envelope>>> {
        self.pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Deregisters its id when dropped, so every exit path of a request
/// cleans up exactly once.
pub struct PendingGuard<'a> {
    registry: &'a CorrelationRegistry,
    id: String,
}

impl<'a> PendingGuard<'a> {
    pub fn new(registry: &'a CorrelationRegistry, id: impl Into<String>) -> Self {
        Self {
            registry,
            id: id.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.registry.deregister(&self.id);
    }
}
