//! Presentation of device state.
//!
//! Extraction keeps identifiers verbatim; everything about how they are shortened or labelled
//! lives here so display policy can change without touching the classifier.

use crate::classify::Slot;
use chrono::{DateTime, Local};


pub const DEFAULT_KEY_ID_WIDTH: usize = 16;
pub const UNKNOWN: &str = "—";
const ELLIPSIS: &str = "...";

/// At most `width` characters of the identifier followed by an ellipsis. The ellipsis is always
/// present since the identifier is a fingerprint of a longer key.
pub fn key_id_label(key_id: Option<&str>, width: usize) -> String {
    match key_id {
        None => UNKNOWN.to_string(),
        Some(id) => {
            let shown: String = id.chars().take(width).collect();
            format!("{shown}{ELLIPSIS}")
        }
    }
}

pub fn slot_label(slot: Option<Slot>) -> String {
    slot.map(|s| s.to_string()).unwrap_or_else(|| "?".to_string())
}

pub fn connection_label(connected: bool) -> &'static str {
    if connected { "CONNECTED" } else { "DISCONNECTED" }
}

pub fn timestamp_label(ts: &DateTime<Local>) -> String {
    format!("[{}]", ts.format("%H:%M:%S"))
}
