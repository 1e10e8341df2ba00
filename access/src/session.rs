//! Session snapshot and the durable store behind it.
//!
//! DESIGN
//! ======
//! A session is either still resolving or resolved to an optional identity.
//! Encoding this as a tagged union makes "logged in but unresolved"
//! unrepresentable, so consumers cannot act before startup restore finishes.
//!
//! ERROR HANDLING
//! ==============
//! [`SessionStore`] never returns errors. Malformed slot contents are treated
//! as "no identity" and cleared. Any slot failure switches the store into
//! degraded mode, where the identity lives in memory for the rest of the
//! process. Degraded or not, saving and clearing always try to remove what
//! the slot still holds, so a stale identity never survives a reload.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::identity::Identity;
use crate::storage::DurableSlot;

/// Slot key the portal stores the logged-in identity under.
pub const DEFAULT_SESSION_KEY: &str = "campus_portal_user";

// =============================================================================
// SESSION
// =============================================================================

/// Whether startup restore has completed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Unresolved,
    Resolved,
}

/// Current authentication state.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Session {
    /// Startup restore has not finished; no decision may be made yet.
    #[default]
    Unresolved,
    /// Restore finished. `None` means nobody is logged in.
    Resolved(Option<Identity>),
}

impl Session {
    #[must_use]
    pub fn resolution(&self) -> Resolution {
        match self {
            Self::Unresolved => Resolution::Unresolved,
            Self::Resolved(_) => Resolution::Resolved,
        }
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// The logged-in identity. Always `None` while unresolved.
    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Resolved(identity) => identity.as_ref(),
            Self::Unresolved => None,
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.identity().is_some()
    }
}

// =============================================================================
// SESSION STORE
// =============================================================================

/// Persists the current identity through a [`DurableSlot`].
#[derive(Debug)]
pub struct SessionStore<S> {
    slot: S,
    key: String,
    /// Set once the slot has failed; the in-memory copy becomes authoritative.
    degraded: bool,
    memory: Option<Identity>,
}

impl<S: DurableSlot> SessionStore<S> {
    /// Store using [`DEFAULT_SESSION_KEY`].
    pub fn new(slot: S) -> Self {
        Self::with_key(slot, DEFAULT_SESSION_KEY)
    }

    pub fn with_key(slot: S, key: impl Into<String>) -> Self {
        Self { slot, key: key.into(), degraded: false, memory: None }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// Give back the underlying slot, e.g. to hand it to a fresh store.
    pub fn into_slot(self) -> S {
        self.slot
    }

    /// Whether the slot has failed and identities are kept in memory only.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Read and parse the stored identity.
    pub fn load(&mut self) -> Option<Identity> {
        if self.degraded {
            return self.memory.clone();
        }
        let raw = match self.slot.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(error = %e, key = %self.key, "session slot unreadable; keeping session in memory");
                self.degrade(None);
                return None;
            }
        };
        match serde_json::from_str::<Identity>(&raw) {
            Ok(identity) => Some(identity),
            Err(e) => {
                tracing::warn!(error = %e, key = %self.key, "malformed session in slot; clearing");
                if let Err(e) = self.slot.remove(&self.key) {
                    tracing::warn!(error = %e, key = %self.key, "failed to clear malformed session");
                    self.degrade(None);
                }
                None
            }
        }
    }

    /// Persist `identity` so it survives reloads.
    pub fn save(&mut self, identity: &Identity) {
        if self.degraded {
            self.memory = Some(identity.clone());
            self.discard_slot();
            return;
        }
        let raw = match serde_json::to_string(identity) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize identity; keeping session in memory");
                self.degrade(Some(identity.clone()));
                self.discard_slot();
                return;
            }
        };
        if let Err(e) = self.slot.set(&self.key, &raw) {
            tracing::warn!(error = %e, key = %self.key, "session slot unwritable; keeping session in memory");
            self.degrade(Some(identity.clone()));
            self.discard_slot();
        }
    }

    /// Forget the stored identity.
    pub fn clear(&mut self) {
        self.memory = None;
        if self.degraded {
            self.discard_slot();
            return;
        }
        if let Err(e) = self.slot.remove(&self.key) {
            tracing::warn!(error = %e, key = %self.key, "session slot unwritable; keeping session in memory");
            self.degrade(None);
        }
    }

    /// Best-effort removal of whatever the slot holds under our key.
    fn discard_slot(&self) {
        if let Err(e) = self.slot.remove(&self.key) {
            tracing::debug!(error = %e, key = %self.key, "could not remove stale session from slot");
        }
    }

    fn degrade(&mut self, memory: Option<Identity>) {
        self.degraded = true;
        self.memory = memory;
    }
}
