mod console;
mod conversation;
mod dashboard;
mod device;

#[cfg(test)]
mod tests;

pub use console::{ConsoleEntry, ConsoleLog};
pub use conversation::{Conversation, ConversationMessage};
pub use dashboard::{Dashboard, LineOutcome};
pub use device::DeviceState;
