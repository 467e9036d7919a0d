use crate::display::DEFAULT_KEY_ID_WIDTH;
use crate::ingest::SourceSpec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Contents of `keywatch.hcl`. Every block and every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub display: DisplayConfig,
    pub stats: StatsConfig,
    pub source: SourceConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Characters of the key identifier shown before the ellipsis.
    pub key_id_width: usize,

    /// Conversation messages kept on the stats board.
    pub conversation_tail: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            key_id_width: DEFAULT_KEY_ID_WIDTH,
            conversation_tail: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Sliding window for line rates and category counts.
    pub window_seconds: u64,

    pub render_tick_ms: u64,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            window_seconds: 10,
            render_tick_ms: 1000,
        }
    }
}

impl StatsConfig {
    pub fn window(&self) -> Duration {
        Duration::from_secs(self.window_seconds)
    }

    pub fn render_tick(&self) -> Duration {
        Duration::from_millis(self.render_tick_ms)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Capture file or serial character device. Stdin when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl SourceConfig {
    pub fn spec(&self) -> SourceSpec {
        match &self.path {
            Some(path) => SourceSpec::Path(path.clone()),
            None => SourceSpec::Stdin,
        }
    }
}

/// Location of a config value, for validation messages.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Origin {
    pub(crate) file: PathBuf,
    pub(crate) section: String,
}

impl Origin {
    pub fn new(file: &Path, section: &str) -> Self {
        Self {
            file: file.to_path_buf(),
            section: section.to_owned(),
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} block", self.file.display(), self.section)
    }
}
