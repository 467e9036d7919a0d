pub mod fixtures;
pub mod tracing;

pub use self::fixtures::{fixture_lines, fixture_path, replay};
pub use self::tracing::{CapturedEvent, capture_events};
