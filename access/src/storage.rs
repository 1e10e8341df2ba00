//! Durable key-value slot capability.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store persists the current identity through this trait. The
//! browser client backs it with `localStorage`; tests and non-web targets use
//! [`MemorySlot`].

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Error returned by a [`DurableSlot`] operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlotError {
    /// Persistence is disabled or inaccessible in this environment.
    #[error("storage unavailable")]
    Unavailable,
    /// The write was refused because storage is full.
    #[error("storage quota exceeded")]
    QuotaExceeded,
}

/// String-keyed synchronous persistence.
pub trait DurableSlot {
    /// Read the value stored under `key`, or `None` if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError`] if storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, SlotError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError`] if storage cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), SlotError>;

    /// Remove `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError`] if storage cannot be written.
    fn remove(&self, key: &str) -> Result<(), SlotError>;
}

/// Which operations a [`MemorySlot`] accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SlotMode {
    Available,
    Unavailable,
    /// Reads and removals succeed; writes fail with [`SlotError::QuotaExceeded`].
    Full,
}

/// In-memory slot. Clones share the same underlying map.
#[derive(Clone, Debug)]
pub struct MemorySlot {
    entries: Arc<Mutex<HashMap<String, String>>>,
    mode: SlotMode,
}

impl MemorySlot {
    #[must_use]
    pub fn new() -> Self {
        Self { entries: Arc::default(), mode: SlotMode::Available }
    }

    /// A slot whose every operation fails with [`SlotError::Unavailable`].
    #[must_use]
    pub fn unavailable() -> Self {
        Self { entries: Arc::default(), mode: SlotMode::Unavailable }
    }

    /// A view of this slot's entries that refuses writes as if storage were full.
    #[must_use]
    pub fn full(&self) -> Self {
        Self { entries: Arc::clone(&self.entries), mode: SlotMode::Full }
    }

    /// Raw value under `key`, bypassing availability.
    #[must_use]
    pub fn peek(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).get(key).cloned()
    }

    fn check(&self) -> Result<(), SlotError> {
        if self.mode == SlotMode::Unavailable { Err(SlotError::Unavailable) } else { Ok(()) }
    }
}

impl Default for MemorySlot {
    fn default() -> Self {
        Self::new()
    }
}

impl DurableSlot for MemorySlot {
    fn get(&self, key: &str) -> Result<Option<String>, SlotError> {
        self.check()?;
        Ok(self.peek(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SlotError> {
        self.check()?;
        if self.mode == SlotMode::Full {
            return Err(SlotError::QuotaExceeded);
        }
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SlotError> {
        self.check()?;
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).remove(key);
        Ok(())
    }
}
