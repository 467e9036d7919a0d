//! Literal substrings the device firmware and the dashboard bridge put in their log lines.
//!
//! Matching is case-sensitive and purely textual; the log format is not versioned, so these
//! literals are the only contract there is.

// Console prefixes
pub const COMMAND_ECHO: &str = "> CMD:";
pub const OUTBOUND: &str = "> ";
pub const INBOUND: &str = "[RX]";

// Console keywords
pub const ERROR_KEYWORDS: &[&str] = &["Error", "Failed"];
pub const WARNING_KEYWORDS: &[&str] = &["Warning"];
pub const SUCCESS_KEYWORDS: &[&str] = &["Success", "saved", "Switched"];
pub const STATUS_KEYWORDS: &[&str] = &["Current slot:"];

// Extraction markers
pub const CURRENT_SLOT: &str = "Current slot: ";
pub const SWITCHED_TO_SLOT: &str = "Switched to Slot ";
pub const USING_KEY_FROM_SLOT: &str = "Using key from Slot ";
pub const RAM_KEY: &str = "RAM key: ";
pub const KEY_ID: &str = "Key ID: ";
pub const RECEIVED_ID: &str = "Received ID: ";
pub const SESSION_KEY_MARKERS: &[&str] = &["Received session key: ", "slot's session key: "];
pub const STARTUP: &str = "PICO STARTED";

/// Echo of a command the device itself prints back; the bridge drops these before
/// classification because the dashboard already echoes `"> CMD:"`.
pub const DEVICE_COMMAND_ECHO: &str = "CMD:";
