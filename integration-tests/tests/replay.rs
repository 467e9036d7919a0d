use integration_tests::harness::{fixture_lines, replay};
use keywatch_core::classify::{ConsoleCategory, Direction, RuleKind, Slot};
use keywatch_core::display::key_id_label;

use pretty_assertions::assert_eq;

/// A full session ends on the last slot and key the device reported
#[test]
fn session_replay_tracks_latest_slot_and_key() {
    // Arrange + Act
    let (dashboard, _) = replay("session.log");

    // Assert
    let device = dashboard.device();
    assert_eq!(device.active_slot, Some(Slot::B));
    assert_eq!(device.key_id.as_deref(), Some("9c0ffee1234567890abcdef0"));
    assert!(device.connected);
    assert_eq!(
        key_id_label(device.key_id.as_deref(), 16),
        "9c0ffee123456789..."
    );
}

/// Line normalization drops blank lines and the device's own command echo
#[test]
fn session_replay_normalizes_lines() {
    // Act
    let lines = fixture_lines("session.log");

    // Assert
    assert_eq!(lines.len(), 12);
    assert!(lines.iter().all(|l| !l.ends_with('\r')));
    assert!(!lines.iter().any(|l| l.starts_with("CMD:")));
    assert_eq!(lines[2], "  Current slot: A");
}

/// Console keeps every line, conversation keeps only the curated ones
#[test]
fn session_replay_splits_console_and_conversation() {
    // Arrange + Act
    let (dashboard, _) = replay("session.log");

    // Assert
    assert_eq!(dashboard.console().len(), 13);
    assert_eq!(dashboard.console().entries()[0].line, "Device connected");

    let conversation: Vec<(&str, Direction)> = dashboard
        .conversation()
        .messages()
        .iter()
        .map(|m| (m.text.as_str(), m.direction))
        .collect();
    assert_eq!(
        conversation,
        vec![
            ("PICO STARTED", Direction::System),
            ("hello device", Direction::Outbound),
        ]
    );
}

#[test]
fn session_replay_categories() {
    // Arrange + Act
    let (_, outcomes) = replay("session.log");

    // Assert
    let categories: Vec<ConsoleCategory> = outcomes
        .iter()
        .map(|o| o.classification.category)
        .collect();
    assert_eq!(
        categories,
        vec![
            ConsoleCategory::Default,
            ConsoleCategory::CommandEcho,
            ConsoleCategory::Info,
            ConsoleCategory::Default,
            ConsoleCategory::OutboundUser,
            ConsoleCategory::InboundDevice,
            ConsoleCategory::Success,
            ConsoleCategory::Default,
            ConsoleCategory::Default,
            ConsoleCategory::Warning,
            ConsoleCategory::Error,
            ConsoleCategory::Success,
        ]
    );
}

/// Session key lines are claimed by their rule and never touch state
#[test]
fn session_key_lines_produce_no_events() {
    // Arrange + Act
    let (_, outcomes) = replay("session.log");

    // Assert
    let session_key = &outcomes[8];
    assert_eq!(
        session_key.classification.rule,
        Some(RuleKind::SessionKeyLegacy)
    );
    assert!(session_key.classification.events.is_empty());
    assert!(!session_key.device_changed);
}

/// Malformed slot letters leave the previous slot in place
#[test]
fn rotation_replay_ignores_malformed_slot_reports() {
    // Arrange + Act
    let (dashboard, outcomes) = replay("slot_rotation.log");

    // Assert
    let slots: Vec<Option<RuleKind>> = outcomes
        .iter()
        .filter(|o| o.classification.events.is_empty())
        .map(|o| o.classification.rule)
        .collect();
    assert!(slots.contains(&Some(RuleKind::SlotSwitch)));
    assert!(slots.contains(&Some(RuleKind::SlotStatus)));

    assert_eq!(dashboard.device().active_slot, Some(Slot::B));
    assert_eq!(
        dashboard.device().key_id.as_deref(),
        Some("0a1b2c3d4e5f60718293a4b5")
    );
    assert_eq!(dashboard.conversation().len(), 2);
}

/// Disconnecting keeps the last known slot and key
#[test]
fn disconnect_preserves_device_knowledge() {
    // Arrange
    let (mut dashboard, _) = replay("slot_rotation.log");

    // Act
    let changed = dashboard.disconnect();

    // Assert
    assert!(changed);
    assert!(!dashboard.device().connected);
    assert_eq!(dashboard.device().active_slot, Some(Slot::B));
    assert_eq!(
        dashboard.console().entries().last().map(|e| e.line.as_str()),
        Some("Device disconnected")
    );
}

/// Replaying the same transcript twice lands on the same device state
#[test]
fn replay_is_deterministic() {
    // Act
    let (first, _) = replay("session.log");
    let (second, _) = replay("session.log");

    // Assert
    assert_eq!(first.device(), second.device());
    assert_eq!(first.console().entries(), second.console().entries());
}
