use crate::conf::types::{DashboardConfig, DisplayConfig, Origin, SourceConfig, StatsConfig};
use crate::conf::validation::report::ValidationReport;
use std::path::Path;

pub const MAX_KEY_ID_WIDTH: usize = 64;
pub const MIN_RENDER_TICK_MS: u64 = 50;

/// Validate every block of a parsed config. Issues are aggregated, not fail-fast.
pub fn validate_config(config: &DashboardConfig, file: &Path) -> ValidationReport {
    let mut report = ValidationReport::default();

    validate_display(&config.display, &mut report, &Origin::new(file, "display"));
    validate_stats(&config.stats, &mut report, &Origin::new(file, "stats"));
    validate_source(&config.source, &mut report, &Origin::new(file, "source"));

    report
}

fn validate_display(display: &DisplayConfig, report: &mut ValidationReport, origin: &Origin) {
    if !(1..=MAX_KEY_ID_WIDTH).contains(&display.key_id_width) {
        report.invalid_key_id_width(display.key_id_width, origin);
    }

    if display.conversation_tail == 0 {
        report.invalid_conversation_tail(display.conversation_tail, origin);
    }
}

fn validate_stats(stats: &StatsConfig, report: &mut ValidationReport, origin: &Origin) {
    if stats.window_seconds == 0 {
        report.invalid_window_seconds(stats.window_seconds, origin);
    }

    if stats.render_tick_ms < MIN_RENDER_TICK_MS {
        report.render_tick_too_fast(stats.render_tick_ms, origin);
    } else if stats.window_seconds > 0 && stats.render_tick() > stats.window() {
        report.render_tick_exceeds_window(stats.render_tick_ms, stats.window_seconds, origin);
    }
}

fn validate_source(source: &SourceConfig, report: &mut ValidationReport, origin: &Origin) {
    let Some(path) = source.path.as_deref() else {
        return;
    };

    if !path.exists() {
        report.source_path_does_not_exist(path, origin);
    } else if path.is_dir() {
        report.source_path_is_directory(path, origin);
    }
}
