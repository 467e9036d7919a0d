use crate::classify::{ConsoleCategory, Direction};
use crate::display::{connection_label, key_id_label, slot_label, timestamp_label};
use crate::state::{ConversationMessage, DeviceState};
use owo_colors::OwoColorize;

pub fn render_line(line: &str, category: ConsoleCategory) -> String {
    match category {
        ConsoleCategory::CommandEcho => line.dimmed().to_string(),
        ConsoleCategory::OutboundUser => line.cyan().to_string(),
        ConsoleCategory::InboundDevice => line.blue().to_string(),
        ConsoleCategory::Error => line.red().bold().to_string(),
        ConsoleCategory::Warning => line.yellow().to_string(),
        ConsoleCategory::Success => line.green().to_string(),
        ConsoleCategory::Info => line.bright_blue().to_string(),
        ConsoleCategory::Default => line.to_string(),
    }
}

pub fn render_message(message: &ConversationMessage) -> String {
    let ts = timestamp_label(&message.timestamp);

    match message.direction {
        Direction::Outbound => format!("{} {} {}", ts.dimmed(), "»".cyan(), message.text),
        Direction::System => format!(
            "{} {} {}",
            ts.dimmed(),
            "•".magenta(),
            message.text.magenta().bold()
        ),
    }
}

/// One-line device summary, e.g. `slot=A key=0123456789abcdef... link=CONNECTED`.
pub fn render_status(device: &DeviceState, key_id_width: usize) -> String {
    format!(
        "slot={} key={} link={}",
        slot_label(device.active_slot),
        key_id_label(device.key_id.as_deref(), key_id_width),
        connection_label(device.connected)
    )
}
