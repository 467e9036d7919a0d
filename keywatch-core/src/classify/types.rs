use serde::Serialize;
use smallvec::SmallVec;
use std::fmt::{Display, Formatter};

/// One of the two key-storage locations on the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Slot {
    A,
    B,
}

impl Slot {
    /// Only the exact upper-case letters name a slot.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'A' => Some(Slot::A),
            'B' => Some(Slot::B),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Slot::A => 'A',
            Slot::B => 'B',
        }
    }
}

impl Display for Slot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Typed by the operator and sent to the device.
    Outbound,
    /// Critical notice raised by the device itself.
    System,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Outbound => "outbound",
            Direction::System => "system",
        }
    }
}

/// Styling tag for the raw diagnostic console. Never gates extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConsoleCategory {
    CommandEcho,
    OutboundUser,
    InboundDevice,
    Error,
    Warning,
    Success,
    Info,
    Default,
}

impl ConsoleCategory {
    pub const ALL: [ConsoleCategory; 8] = [
        ConsoleCategory::CommandEcho,
        ConsoleCategory::OutboundUser,
        ConsoleCategory::InboundDevice,
        ConsoleCategory::Error,
        ConsoleCategory::Warning,
        ConsoleCategory::Success,
        ConsoleCategory::Info,
        ConsoleCategory::Default,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ConsoleCategory::CommandEcho => "command-echo",
            ConsoleCategory::OutboundUser => "outbound-user",
            ConsoleCategory::InboundDevice => "inbound-device",
            ConsoleCategory::Error => "error",
            ConsoleCategory::Warning => "warning",
            ConsoleCategory::Success => "success",
            ConsoleCategory::Info => "info",
            ConsoleCategory::Default => "default",
        }
    }
}

impl Display for ConsoleCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed update for the state store.
///
/// Every variant is idempotent: applying the same event twice leaves the device state as if it
/// had been applied once. `ConversationAppend` is the exception by nature, since the
/// conversation is an append-only history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StateEvent {
    /// Emitted by the transport collaborator, never by the classifier.
    Connection { connected: bool },
    SlotUpdate { slot: Slot },
    /// Carries the extracted identifier verbatim; truncation happens at display time.
    KeyIdUpdate { key_id: String },
    ConversationAppend { text: String, direction: Direction },
}

/// At most two events come out of a single line.
pub type Events = SmallVec<[StateEvent; 2]>;

/// Which extraction rule consumed a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    OutboundMessage,
    SlotStatus,
    SlotSwitch,
    SlotKeyLoad,
    KeyId,
    ReceivedId,
    SessionKeyLegacy,
    StartupNotice,
}

impl RuleKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RuleKind::OutboundMessage => "outbound_message",
            RuleKind::SlotStatus => "slot_status",
            RuleKind::SlotSwitch => "slot_switch",
            RuleKind::SlotKeyLoad => "slot_key_load",
            RuleKind::KeyId => "key_id",
            RuleKind::ReceivedId => "received_id",
            RuleKind::SessionKeyLegacy => "session_key_legacy",
            RuleKind::StartupNotice => "startup_notice",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub category: ConsoleCategory,
    /// `None` when no extraction rule matched.
    pub rule: Option<RuleKind>,
    pub events: Events,
}
