use super::*;

#[test]
fn memory_slot_starts_empty() {
    let slot = MemorySlot::new();
    assert_eq!(slot.get("k"), Ok(None));
}

#[test]
fn memory_slot_set_then_get() {
    let slot = MemorySlot::new();
    slot.set("k", "v").unwrap();
    assert_eq!(slot.get("k"), Ok(Some("v".to_owned())));
}

#[test]
fn memory_slot_remove_missing_key_is_ok() {
    let slot = MemorySlot::new();
    assert_eq!(slot.remove("missing"), Ok(()));
}

#[test]
fn memory_slot_clones_share_entries() {
    let slot = MemorySlot::new();
    let other = slot.clone();
    slot.set("k", "v").unwrap();
    assert_eq!(other.peek("k").as_deref(), Some("v"));
    other.remove("k").unwrap();
    assert_eq!(slot.get("k"), Ok(None));
}

#[test]
fn default_slot_is_available() {
    assert!(MemorySlot::default().set("k", "v").is_ok());
}

#[test]
fn unavailable_slot_fails_every_operation() {
    let slot = MemorySlot::unavailable();
    assert_eq!(slot.get("k"), Err(SlotError::Unavailable));
    assert_eq!(slot.set("k", "v"), Err(SlotError::Unavailable));
    assert_eq!(slot.remove("k"), Err(SlotError::Unavailable));
    assert_eq!(slot.peek("k"), None);
}

#[test]
fn full_slot_refuses_writes_but_reads_and_removes() {
    let slot = MemorySlot::new();
    slot.set("k", "v").unwrap();
    let full = slot.full();
    assert_eq!(full.set("k", "w"), Err(SlotError::QuotaExceeded));
    assert_eq!(full.get("k"), Ok(Some("v".to_owned())));
    full.remove("k").unwrap();
    assert_eq!(slot.peek("k"), None);
}
