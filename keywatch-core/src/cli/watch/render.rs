use super::constants::{BAR_WIDTH, CLEAR_SCREEN};
use super::pretty::render_status;
use super::stats_aggregation::StatsSnapshot;
use crate::classify::Direction;
use crate::conf::DisplayConfig;
use crate::display::timestamp_label;
use crate::state::Dashboard;
use std::io;
use std::io::Write;

pub fn render_stats(
    snapshot: &StatsSnapshot,
    dashboard: &Dashboard,
    display: &DisplayConfig,
) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Keywatch Stats ({}s window)\n\
         ==========================\n\
         {}\n\
         lines/s: {:.1} | lines: {} | events: {} | total: {}\n\n",
        snapshot.window_seconds,
        render_status(dashboard.device(), display.key_id_width),
        snapshot.lines_per_sec,
        snapshot.window_lines,
        snapshot.window_events,
        snapshot.total_lines,
    ));

    let tail = dashboard.conversation().tail(display.conversation_tail);
    if tail.is_empty() {
        out.push_str("Conversation: <no messages>\n\n");
    } else {
        out.push_str(&format!("Conversation (last {}):\n", tail.len()));
        for message in tail {
            let marker = match message.direction {
                Direction::Outbound => "»",
                Direction::System => "•",
            };
            out.push_str(&format!(
                "  {} {} {}\n",
                timestamp_label(&message.timestamp),
                marker,
                message.text
            ));
        }
        out.push('\n');
    }

    let max = snapshot.category_counts.values().copied().max().unwrap_or(0);
    if max > 0 {
        out.push_str("Categories (window):\n");
        for (category, count) in &snapshot.category_counts {
            let bars = ((*count as f64 / max as f64) * BAR_WIDTH as f64).round() as usize;
            out.push_str(&format!(
                "  {:<15} {:<20} {:>5}\n",
                category.as_str(),
                "█".repeat(bars.max(1)),
                count
            ));
        }
    } else {
        out.push_str("Categories (window): <no lines>\n");
    }

    out
}

pub fn redraw(output: &str) {
    print!("{CLEAR_SCREEN}");
    println!("{output}");
    let _ = io::stdout().flush();
}
