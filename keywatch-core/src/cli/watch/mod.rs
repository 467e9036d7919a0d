//! Device stream viewer.
//!
//! Lines flow in from the configured source (stdin, a capture file or a serial device) and are
//! shown in one of four ways:
//! - **Raw**: normalized lines, unchanged
//! - **Pretty**: the console coloured by category, with conversation messages and a status bar
//!   printed whenever they change
//! - **Stats**: a full-screen board redrawn on a tick, with device status, the tail of the
//!   conversation and per-category line rates over a sliding window
//! - **Json**: one classification record per line
//!
//! In stats mode the source is read on its own thread so a quiet device never stalls the redraw.
//!
//! The overall data flow is:
//!
//! LineSource
//! Dashboard::ingest
//! LineOutcome
//! StatsAggregator
//! StatsSnapshot
//! render_stats
//!

mod constants;
mod pretty;
mod render;
mod run;
mod stats_aggregation;

#[cfg(test)]
mod tests;

pub use pretty::{render_line, render_message, render_status};
pub use render::{redraw, render_stats};
pub use run::run_watch;
pub use stats_aggregation::{StatsAggregator, StatsSnapshot};
