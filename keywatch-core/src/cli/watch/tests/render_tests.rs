use crate::cli::watch::render_stats;
use crate::cli::watch::stats_aggregation::StatsAggregator;
use crate::classify::ConsoleCategory;
use crate::conf::DisplayConfig;
use crate::state::Dashboard;

use std::time::{Duration, Instant};

#[test]
fn empty_board_shows_placeholders() {
    // Arrange
    let mut agg = StatsAggregator::new(Duration::from_secs(10));
    let dashboard = Dashboard::new();

    // Act
    let board = render_stats(&agg.snapshot(), &dashboard, &DisplayConfig::default());

    // Assert
    assert!(board.starts_with("Keywatch Stats (10s window)\n"));
    assert!(board.contains("slot=? key=— link=DISCONNECTED"));
    assert!(board.contains("Conversation: <no messages>"));
    assert!(board.contains("Categories (window): <no lines>"));
}

#[test]
fn board_shows_device_status_and_conversation_tail() {
    // Arrange
    let mut dashboard = Dashboard::new();
    dashboard.connect();
    for line in ["> one", "> two", "> three", "Key ID: 00112233445566778899"] {
        dashboard.ingest(line);
    }
    let display = DisplayConfig {
        key_id_width: 4,
        conversation_tail: 2,
    };
    let mut agg = StatsAggregator::new(Duration::from_secs(10));

    // Act
    let board = render_stats(&agg.snapshot(), &dashboard, &display);

    // Assert
    assert!(board.contains("slot=? key=0011... link=CONNECTED"));
    assert!(board.contains("Conversation (last 2):"));
    assert!(!board.contains("» one"));
    assert!(board.contains("» two"));
    assert!(board.contains("» three"));
}

#[test]
fn board_lists_categories_with_counts() {
    // Arrange
    let start = Instant::now();
    let mut agg = StatsAggregator::starting_at(Duration::from_secs(10), start);
    agg.push_at(start, ConsoleCategory::Error, 0);
    agg.push_at(start, ConsoleCategory::Error, 0);
    agg.push_at(start, ConsoleCategory::Success, 1);
    let snapshot = agg.snapshot_at(start + Duration::from_secs(10));

    // Act
    let board = render_stats(&snapshot, &Dashboard::new(), &DisplayConfig::default());

    // Assert
    assert!(board.contains("Categories (window):"));
    assert!(board.contains(&format!("  {:<15} {:<20} {:>5}\n", "error", "█".repeat(20), 2)));
    assert!(board.contains(&format!("  {:<15} {:<20} {:>5}\n", "success", "█".repeat(10), 1)));
    assert!(board.contains("lines/s: 0.3 | lines: 3 | events: 1 | total: 3"));
}
