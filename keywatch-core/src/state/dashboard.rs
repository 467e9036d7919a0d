use super::{ConsoleLog, Conversation, DeviceState};
use crate::classify::{Classification, ConsoleCategory, StateEvent, classify};

/// Result of feeding one line through the dashboard.
#[derive(Debug, Clone)]
pub struct LineOutcome {
    pub classification: Classification,
    /// Whether any event changed the device state.
    pub device_changed: bool,
}

/// The single owner of everything the views display.
///
/// Lines must be fed in the order the device emitted them. Each line is classified, recorded in
/// the console, and its events applied in emission order before the call returns, so readers
/// never observe a half-applied line.
#[derive(Debug, Default)]
pub struct Dashboard {
    device: DeviceState,
    conversation: Conversation,
    console: ConsoleLog,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ingest(&mut self, line: &str) -> LineOutcome {
        let classification = classify(line);
        self.console.push(line, classification.category);

        let mut device_changed = false;
        for event in &classification.events {
            device_changed |= self.apply(event);
        }

        LineOutcome {
            classification,
            device_changed,
        }
    }

    /// Applies a single event. Returns whether the device state changed.
    pub fn apply(&mut self, event: &StateEvent) -> bool {
        let changed = self.device.apply(event);

        match event {
            StateEvent::Connection { connected } => {
                tracing::info!(connected, changed, "device link state changed");
            }
            StateEvent::SlotUpdate { slot } => {
                tracing::debug!(slot = %slot, changed, "active slot updated");
            }
            StateEvent::KeyIdUpdate { key_id } => {
                // Identifiers from "RAM key:" lines can be raw key material; log the length only.
                tracing::debug!(key_id_len = key_id.len(), changed, "key identifier updated");
            }
            StateEvent::ConversationAppend { text, direction } => {
                self.conversation.append(text.as_str(), *direction);
                tracing::debug!(
                    direction = ?direction,
                    messages = self.conversation.len(),
                    "conversation message appended"
                );
            }
        }

        changed
    }

    /// Called by the transport collaborator once the device link is up.
    pub fn connect(&mut self) -> bool {
        self.console.push("Device connected", ConsoleCategory::Default);
        self.apply(&StateEvent::Connection { connected: true })
    }

    /// Called by the transport collaborator once the device link is gone.
    pub fn disconnect(&mut self) -> bool {
        self.console.push("Device disconnected", ConsoleCategory::Default);
        self.apply(&StateEvent::Connection { connected: false })
    }

    pub fn device(&self) -> &DeviceState {
        &self.device
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn console(&self) -> &ConsoleLog {
        &self.console
    }
}
