use super::*;
use crate::role::Role;
use crate::storage::{MemorySlot, SlotError};

fn student() -> Identity {
    Identity::new("u1", "Asha", "asha@campus.edu", Role::Student)
        .with_attr("department", "CSE")
        .with_attr("rollNo", "21CS042")
}

// =============================================================================
// Session
// =============================================================================

#[test]
fn session_default_is_unresolved() {
    let session = Session::default();
    assert_eq!(session.resolution(), Resolution::Unresolved);
    assert!(session.identity().is_none());
}

#[test]
fn resolved_session_exposes_identity() {
    let session = Session::Resolved(Some(student()));
    assert!(session.is_resolved());
    assert!(session.is_authenticated());
    assert_eq!(session.identity().map(|i| i.id.as_str()), Some("u1"));
}

#[test]
fn resolved_absent_session_is_not_authenticated() {
    let session = Session::Resolved(None);
    assert!(session.is_resolved());
    assert!(!session.is_authenticated());
}

// =============================================================================
// SessionStore
// =============================================================================

#[test]
fn load_from_empty_slot_is_none() {
    let mut store = SessionStore::new(MemorySlot::new());
    assert_eq!(store.load(), None);
    assert!(!store.is_degraded());
}

#[test]
fn save_then_load_round_trips_every_role() {
    for role in Role::ALL {
        let slot = MemorySlot::new();
        let identity = Identity::new("id", "Name", "n@campus.edu", role).with_attr("extra", 7);
        SessionStore::new(slot.clone()).save(&identity);

        let mut fresh = SessionStore::new(slot);
        assert_eq!(fresh.load(), Some(identity));
    }
}

#[test]
fn save_writes_under_configured_key() {
    let slot = MemorySlot::new();
    let mut store = SessionStore::with_key(slot.clone(), "custom");
    store.save(&student());
    assert!(slot.peek("custom").is_some());
    assert!(slot.peek(DEFAULT_SESSION_KEY).is_none());
}

#[test]
fn clear_removes_slot() {
    let slot = MemorySlot::new();
    let mut store = SessionStore::new(slot.clone());
    store.save(&student());
    store.clear();
    assert_eq!(slot.peek(DEFAULT_SESSION_KEY), None);
    assert_eq!(store.load(), None);
}

#[test]
fn non_json_is_cleared_and_treated_as_absent() {
    let slot = MemorySlot::new();
    slot.set(DEFAULT_SESSION_KEY, "not json {").unwrap();
    let mut store = SessionStore::new(slot.clone());
    assert_eq!(store.load(), None);
    assert_eq!(slot.peek(DEFAULT_SESSION_KEY), None);
    assert!(!store.is_degraded());
}

#[test]
fn json_missing_role_is_cleared() {
    let slot = MemorySlot::new();
    slot.set(DEFAULT_SESSION_KEY, r#"{"id":"u1","name":"Asha"}"#).unwrap();
    let mut store = SessionStore::new(slot.clone());
    assert_eq!(store.load(), None);
    assert_eq!(slot.peek(DEFAULT_SESSION_KEY), None);
}

#[test]
fn unavailable_slot_degrades_to_memory() {
    let slot = MemorySlot::unavailable();
    assert_eq!(slot.get("x"), Err(SlotError::Unavailable));
    let mut store = SessionStore::new(slot);

    assert_eq!(store.load(), None);
    assert!(store.is_degraded());

    store.save(&student());
    assert_eq!(store.load(), Some(student()));

    store.clear();
    assert_eq!(store.load(), None);
}

#[test]
fn failed_write_keeps_identity_in_memory() {
    let mut store = SessionStore::new(MemorySlot::unavailable());
    store.save(&student());
    assert!(store.is_degraded());
    assert_eq!(store.load(), Some(student()));
}

#[test]
fn into_slot_returns_shared_state() {
    let slot = MemorySlot::new();
    let mut store = SessionStore::new(slot);
    store.save(&student());
    let slot = store.into_slot();
    assert!(slot.peek(DEFAULT_SESSION_KEY).is_some());
}

// =============================================================================
// Partial slot failure (writes refused, reads and removals work)
// =============================================================================

fn admin() -> Identity {
    Identity::new("a1", "Ravi", "ravi@campus.edu", Role::Admin)
}

fn slot_holding(identity: &Identity) -> MemorySlot {
    let slot = MemorySlot::new();
    SessionStore::new(slot.clone()).save(identity);
    slot
}

#[test]
fn failed_write_removes_previous_identity_from_slot() {
    let slot = slot_holding(&admin());
    let mut store = SessionStore::new(slot.full());

    store.save(&student());
    assert!(store.is_degraded());
    assert_eq!(store.load(), Some(student()));
    assert_eq!(slot.peek(DEFAULT_SESSION_KEY), None);
}

#[test]
fn degraded_clear_still_removes_slot_entry() {
    let slot = slot_holding(&admin());
    let mut store = SessionStore::new(slot.full());
    assert_eq!(store.load(), Some(admin()));

    store.save(&student());
    // Another writer got the old identity back in before logout.
    SessionStore::new(slot.clone()).save(&admin());
    store.clear();

    assert_eq!(store.load(), None);
    assert_eq!(slot.peek(DEFAULT_SESSION_KEY), None);
    assert_eq!(SessionStore::new(slot).load(), None);
}
