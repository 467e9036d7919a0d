mod error;
mod loader;
pub mod types;
pub(crate) mod validation;

pub use error::ConfigError;
pub use loader::{CONFIG_FILE_NAME, load_config, load_or_default, parse_config};
pub use types::*;
pub use validation::{
    Severity, ValidatedConfig, ValidationIssue, ValidationReport, validate_config,
};
