use crate::classify::{ConsoleCategory, categorize, classify};
use pretty_assertions::assert_eq;

#[test]
fn command_echo_wins_over_outbound_prefix() {
    assert_eq!(categorize("> CMD: slot status"), ConsoleCategory::CommandEcho);
}

#[test]
fn generic_outbound_line_is_outbound_user() {
    assert_eq!(categorize("> hello there"), ConsoleCategory::OutboundUser);
}

#[test]
fn rx_prefix_is_inbound_device() {
    assert_eq!(categorize("[RX] Current slot: A"), ConsoleCategory::InboundDevice);
}

#[test]
fn prefixes_beat_keywords() {
    // Arrange
    let lines = [
        ("> CMD: Error test", ConsoleCategory::CommandEcho),
        ("> Failed to say hi", ConsoleCategory::OutboundUser),
        ("[RX] Error: CRC mismatch", ConsoleCategory::InboundDevice),
    ];

    // Act / Assert
    for (line, expected) in lines {
        assert_eq!(categorize(line), expected, "line: {line:?}");
    }
}

#[test]
fn error_keywords() {
    assert_eq!(categorize("Error: Serial port not open"), ConsoleCategory::Error);
    assert_eq!(categorize("Failed to connect to /dev/ttyACM0"), ConsoleCategory::Error);
}

#[test]
fn error_beats_warning_and_success() {
    assert_eq!(
        categorize("Warning: Success flag set but Error raised"),
        ConsoleCategory::Error
    );
}

#[test]
fn warning_beats_success() {
    assert_eq!(categorize("Warning: key saved twice"), ConsoleCategory::Warning);
}

#[test]
fn success_keywords() {
    assert_eq!(categorize("Success"), ConsoleCategory::Success);
    assert_eq!(categorize("Key saved to flash"), ConsoleCategory::Success);
    assert_eq!(
        categorize("Switched to Slot B (Empty/Zeroed). Ready for new key."),
        ConsoleCategory::Success
    );
}

#[test]
fn status_report_is_info() {
    assert_eq!(categorize("  Current slot: A"), ConsoleCategory::Info);
}

#[test]
fn keywords_are_case_sensitive() {
    assert_eq!(categorize("error in lower case"), ConsoleCategory::Default);
    assert_eq!(categorize("SUCCESS"), ConsoleCategory::Default);
}

#[test]
fn unrecognized_line_is_default_with_no_events() {
    // Arrange
    let lines = ["", "Receiving new session key (ID+Key)...", "hello world", "CRC ok"];

    // Act / Assert
    for line in lines {
        let c = classify(line);
        assert_eq!(c.category, ConsoleCategory::Default, "line: {line:?}");
        assert!(c.events.is_empty(), "line: {line:?}");
        assert_eq!(c.rule, None, "line: {line:?}");
    }
}

#[test]
fn category_serializes_kebab_case() {
    let json = serde_json::to_string(&ConsoleCategory::InboundDevice).unwrap();
    assert_eq!(json, "\"inbound-device\"");
}
