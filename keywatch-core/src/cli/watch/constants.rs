use std::time::Duration;

pub const LOOP_IDLE_SLEEP: Duration = Duration::from_millis(25);

/// Width of the widest category bar on the stats board.
pub const BAR_WIDTH: usize = 20;

pub const HIDE_CURSOR: &str = "\x1b[?25l";
pub const SHOW_CURSOR: &str = "\x1b[?25h";
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
