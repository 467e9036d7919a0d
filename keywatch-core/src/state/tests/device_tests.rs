use crate::classify::{Direction, Slot, StateEvent};
use crate::state::DeviceState;
use pretty_assertions::assert_eq;

fn key_id(id: &str) -> StateEvent {
    StateEvent::KeyIdUpdate {
        key_id: id.to_string(),
    }
}

#[test]
fn starts_unknown_and_disconnected() {
    let state = DeviceState::default();

    assert_eq!(state.active_slot, None);
    assert_eq!(state.key_id, None);
    assert!(!state.connected);
}

#[test]
fn applying_key_id_twice_equals_applying_once() {
    // Arrange
    let mut once = DeviceState::default();
    let mut twice = DeviceState::default();
    let event = key_id("abcd1234");

    // Act
    once.apply(&event);
    let first = twice.apply(&event);
    let second = twice.apply(&event);

    // Assert
    assert_eq!(once, twice);
    assert!(first);
    assert!(!second);
}

#[test]
fn slot_update_is_idempotent() {
    let mut state = DeviceState::default();
    let event = StateEvent::SlotUpdate { slot: Slot::A };

    assert!(state.apply(&event));
    assert!(!state.apply(&event));
    assert_eq!(state.active_slot, Some(Slot::A));
}

#[test]
fn later_update_overrides_earlier_one() {
    // Arrange
    let mut state = DeviceState::default();

    // Act
    state.apply(&StateEvent::SlotUpdate { slot: Slot::A });
    state.apply(&key_id("1111"));
    state.apply(&StateEvent::SlotUpdate { slot: Slot::B });
    state.apply(&key_id("2222"));

    // Assert
    assert_eq!(state.active_slot, Some(Slot::B));
    assert_eq!(state.key_id.as_deref(), Some("2222"));
}

#[test]
fn empty_key_id_is_an_explicit_value() {
    let mut state = DeviceState::default();
    state.apply(&key_id("abcd"));

    assert!(state.apply(&key_id("")));
    assert_eq!(state.key_id.as_deref(), Some(""));
}

#[test]
fn conversation_events_leave_device_untouched() {
    // Arrange
    let mut state = DeviceState::default();
    state.apply(&StateEvent::SlotUpdate { slot: Slot::B });
    let before = state.clone();

    // Act
    let changed = state.apply(&StateEvent::ConversationAppend {
        text: "hi".to_string(),
        direction: Direction::Outbound,
    });

    // Assert
    assert!(!changed);
    assert_eq!(state, before);
}

#[test]
fn connection_events_toggle_liveness_only() {
    let mut state = DeviceState::default();
    state.apply(&key_id("abcd"));

    assert!(state.apply(&StateEvent::Connection { connected: true }));
    assert!(!state.apply(&StateEvent::Connection { connected: true }));
    assert!(state.apply(&StateEvent::Connection { connected: false }));

    assert!(!state.connected);
    assert_eq!(state.key_id.as_deref(), Some("abcd"));
}
