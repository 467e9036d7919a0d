use crate::classify::{ConsoleCategory, classify};
use crate::cli::watch::stats_aggregation::StatsAggregator;

use pretty_assertions::assert_eq;
use std::time::{Duration, Instant};

const WINDOW: Duration = Duration::from_secs(10);

#[test]
fn counts_lines_per_category() {
    // Arrange
    let start = Instant::now();
    let mut agg = StatsAggregator::starting_at(WINDOW, start);

    // Act
    agg.push_at(start, ConsoleCategory::Warning, 0);
    agg.push_at(start, ConsoleCategory::Info, 1);
    agg.push_at(start, ConsoleCategory::Warning, 0);
    let snapshot = agg.snapshot_at(start + Duration::from_secs(1));

    // Assert
    assert_eq!(snapshot.window_lines, 3);
    assert_eq!(snapshot.window_events, 1);
    assert_eq!(snapshot.category_counts.get(&ConsoleCategory::Warning), Some(&2));
    assert_eq!(snapshot.category_counts.get(&ConsoleCategory::Info), Some(&1));
    assert_eq!(snapshot.category_counts.get(&ConsoleCategory::Error), None);
}

#[test]
fn lines_older_than_window_are_evicted_but_totals_remain() {
    // Arrange
    let start = Instant::now();
    let mut agg = StatsAggregator::starting_at(WINDOW, start);
    agg.push_at(start, ConsoleCategory::Default, 2);
    agg.push_at(start + Duration::from_secs(5), ConsoleCategory::Default, 0);

    // Act
    let snapshot = agg.snapshot_at(start + Duration::from_secs(12));

    // Assert
    assert_eq!(snapshot.window_lines, 1);
    assert_eq!(snapshot.window_events, 0);
    assert_eq!(snapshot.total_lines, 2);
    assert_eq!(snapshot.total_events, 2);
}

#[test]
fn rate_uses_observed_time_before_a_full_window() {
    // Arrange
    let start = Instant::now();
    let mut agg = StatsAggregator::starting_at(WINDOW, start);
    for i in 0..4 {
        agg.push_at(start + Duration::from_millis(i * 500), ConsoleCategory::Default, 0);
    }

    // Act
    let snapshot = agg.snapshot_at(start + Duration::from_secs(2));

    // Assert
    assert_eq!(snapshot.lines_per_sec, 2.0);
}

#[test]
fn rate_uses_full_window_once_elapsed() {
    // Arrange
    let start = Instant::now();
    let mut agg = StatsAggregator::starting_at(WINDOW, start);
    for _ in 0..5 {
        agg.push_at(start + Duration::from_secs(25), ConsoleCategory::Default, 0);
    }

    // Act
    let snapshot = agg.snapshot_at(start + Duration::from_secs(30));

    // Assert
    assert_eq!(snapshot.lines_per_sec, 0.5);
    assert_eq!(snapshot.window_seconds, 10);
}

#[test]
fn push_records_classification_event_count() {
    // Arrange
    let mut agg = StatsAggregator::new(WINDOW);

    // Act
    agg.push(&classify("Using key from Slot B, RAM key: ff00"));
    let snapshot = agg.snapshot();

    // Assert
    assert_eq!(snapshot.window_lines, 1);
    assert_eq!(snapshot.window_events, 2);
}
