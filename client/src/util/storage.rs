//! Browser `localStorage` as a durable session slot.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth context persists the logged-in identity through this slot so a
//! page reload restores the session. On the server (SSR) there is no storage;
//! every operation reports `Unavailable` and the session store falls back to
//! memory.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use access::{DurableSlot, SlotError};

/// `window.localStorage`, looked up on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSlot;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, SlotError> {
    web_sys::window()
        .and_then(|w| w.local_storage().unwrap_or(None))
        .ok_or(SlotError::Unavailable)
}

impl DurableSlot for BrowserSlot {
    fn get(&self, key: &str) -> Result<Option<String>, SlotError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).map_err(|_| SlotError::Unavailable)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(SlotError::Unavailable)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SlotError> {
        #[cfg(feature = "hydrate")]
        {
            // `setItem` only throws when the quota is exhausted.
            local_storage()?.set_item(key, value).map_err(|_| SlotError::QuotaExceeded)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(SlotError::Unavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), SlotError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.remove_item(key).map_err(|_| SlotError::Unavailable)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(SlotError::Unavailable)
        }
    }
}
