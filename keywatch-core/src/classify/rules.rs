//! Extraction rules.
//!
//! The cascade is a flat table evaluated top to bottom. The first rule whose predicate matches
//! consumes the line, even when its extractor comes back empty-handed, so a later rule can never
//! fire on a line an earlier rule already claimed. The outbound rule sits first because operator
//! messages are free text and may quote any of the device markers. Command echoes are claimed
//! before the table is consulted and yield nothing.

use super::category::{contains_any, is_command_echo, is_outbound_message};
use super::markers::*;
use super::types::{Direction, Events, RuleKind, Slot, StateEvent};
use smallvec::smallvec;

pub struct ExtractionRule {
    pub kind: RuleKind,
    matches: fn(&str) -> bool,
    extract: fn(&str) -> Events,
}

impl ExtractionRule {
    pub fn matches(&self, line: &str) -> bool {
        (self.matches)(line)
    }

    pub fn extract(&self, line: &str) -> Events {
        (self.extract)(line)
    }
}

pub const EXTRACTION_RULES: &[ExtractionRule] = &[
    ExtractionRule {
        kind: RuleKind::OutboundMessage,
        matches: is_outbound_message,
        extract: extract_outbound_message,
    },
    ExtractionRule {
        kind: RuleKind::SlotStatus,
        matches: |line| line.contains(CURRENT_SLOT),
        extract: extract_slot_status,
    },
    ExtractionRule {
        kind: RuleKind::SlotSwitch,
        matches: |line| line.contains(SWITCHED_TO_SLOT),
        extract: extract_slot_switch,
    },
    ExtractionRule {
        kind: RuleKind::SlotKeyLoad,
        matches: |line| line.contains(USING_KEY_FROM_SLOT),
        extract: extract_slot_key_load,
    },
    ExtractionRule {
        kind: RuleKind::KeyId,
        matches: |line| line.contains(KEY_ID),
        extract: |line| key_id_after(line, KEY_ID),
    },
    ExtractionRule {
        kind: RuleKind::ReceivedId,
        matches: |line| line.contains(RECEIVED_ID),
        extract: |line| key_id_after(line, RECEIVED_ID),
    },
    ExtractionRule {
        // Kept visible in the console only; raw key material never reaches state.
        kind: RuleKind::SessionKeyLegacy,
        matches: |line| contains_any(line, SESSION_KEY_MARKERS),
        extract: |_| Events::new(),
    },
    ExtractionRule {
        kind: RuleKind::StartupNotice,
        matches: |line| line.contains(STARTUP),
        extract: extract_startup_notice,
    },
];

/// Runs the cascade. Returns the rule that consumed the line, if any, and its events.
///
/// Operator command echoes never reach the cascade, whatever markers the command quotes.
pub fn extract(line: &str) -> (Option<RuleKind>, Events) {
    if is_command_echo(line) {
        return (None, Events::new());
    }

    EXTRACTION_RULES
        .iter()
        .find(|rule| rule.matches(line))
        .map(|rule| (Some(rule.kind), rule.extract(line)))
        .unwrap_or_default()
}

/// Text following the first occurrence of `marker`, up to a repeated occurrence if the line
/// carries one. Empty when the marker ends the line.
fn segment_after<'a>(line: &'a str, marker: &str) -> &'a str {
    line.split(marker).nth(1).unwrap_or_default()
}

fn slot_events(letter: Option<char>) -> Events {
    match letter.and_then(Slot::from_letter) {
        Some(slot) => smallvec![StateEvent::SlotUpdate { slot }],
        None => Events::new(),
    }
}

fn extract_outbound_message(line: &str) -> Events {
    smallvec![StateEvent::ConversationAppend {
        text: line[OUTBOUND.len()..].to_string(),
        direction: Direction::Outbound,
    }]
}

// "  Current slot: A" arrives indented, and the letter may be padded too.
fn extract_slot_status(line: &str) -> Events {
    slot_events(segment_after(line, CURRENT_SLOT).trim().chars().next())
}

fn extract_slot_switch(line: &str) -> Events {
    slot_events(segment_after(line, SWITCHED_TO_SLOT).chars().next())
}

fn extract_slot_key_load(line: &str) -> Events {
    let mut events = slot_events(segment_after(line, USING_KEY_FROM_SLOT).chars().next());

    if line.contains(RAM_KEY) {
        events.push(StateEvent::KeyIdUpdate {
            key_id: segment_after(line, RAM_KEY).trim().to_string(),
        });
    }

    events
}

fn key_id_after(line: &str, marker: &str) -> Events {
    smallvec![StateEvent::KeyIdUpdate {
        key_id: segment_after(line, marker).trim().to_string(),
    }]
}

fn extract_startup_notice(line: &str) -> Events {
    smallvec![StateEvent::ConversationAppend {
        text: line.to_string(),
        direction: Direction::System,
    }]
}
