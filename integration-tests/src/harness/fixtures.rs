use keywatch_core::ingest::LineSource;
use keywatch_core::state::{Dashboard, LineOutcome};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

pub fn fixture_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(file)
}

/// Normalized lines of a fixture transcript, as `keywatch watch` would read them.
pub fn fixture_lines(file: &str) -> Vec<String> {
    let path = fixture_path(file);
    let reader = BufReader::new(File::open(&path).expect("failed to open fixture"));

    LineSource::new(reader)
        .collect::<Result<Vec<_>, _>>()
        .expect("failed to read fixture")
}

/// Feeds a transcript through a connected dashboard, the way the watch loop does.
pub fn replay(file: &str) -> (Dashboard, Vec<LineOutcome>) {
    let mut dashboard = Dashboard::new();
    dashboard.connect();

    let outcomes = fixture_lines(file)
        .iter()
        .map(|line| dashboard.ingest(line))
        .collect();

    (dashboard, outcomes)
}
