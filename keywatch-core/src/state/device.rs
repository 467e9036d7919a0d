use crate::classify::{Slot, StateEvent};
use serde::Serialize;

/// What the dashboard believes about the device right now.
///
/// `active_slot` and `key_id` are last-writer-wins and only ever move from one explicit value
/// to another: no event clears them back to unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeviceState {
    pub active_slot: Option<Slot>,
    pub key_id: Option<String>,
    pub connected: bool,
}

impl DeviceState {
    /// Applies one event and reports whether the state changed.
    /// Conversation events do not touch the device state.
    pub fn apply(&mut self, event: &StateEvent) -> bool {
        match event {
            StateEvent::Connection { connected } => {
                let changed = self.connected != *connected;
                self.connected = *connected;
                changed
            }
            StateEvent::SlotUpdate { slot } => {
                let changed = self.active_slot != Some(*slot);
                self.active_slot = Some(*slot);
                changed
            }
            StateEvent::KeyIdUpdate { key_id } => {
                if self.key_id.as_deref() == Some(key_id.as_str()) {
                    return false;
                }
                self.key_id = Some(key_id.clone());
                true
            }
            StateEvent::ConversationAppend { .. } => false,
        }
    }
}
