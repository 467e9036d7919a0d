use crate::conf::error::ConfigError;
use crate::conf::types::DashboardConfig;
use crate::conf::validation::{ValidatedConfig, validate_config};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "keywatch.hcl";

/// Read, parse and validate a config file.
///
/// IO and parse failures are hard errors. Validation errors are returned as
/// [`ConfigError::Validation`]; warnings ride along on the [`ValidatedConfig`].
pub fn load_config(path: &Path) -> Result<ValidatedConfig, ConfigError> {
    let source = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    parse_config(&source, path)
}

pub fn parse_config(source: &str, path: &Path) -> Result<ValidatedConfig, ConfigError> {
    let config: DashboardConfig =
        hcl::from_str(source).map_err(|e| ConfigError::parse(path, e))?;

    let validation = validate_config(&config, path);
    if validation.has_errors() {
        return Err(ConfigError::Validation { report: validation });
    }

    for issue in &validation.warnings {
        tracing::warn!(origin = %issue.origin, "{}", issue.message);
    }

    Ok(ValidatedConfig { config, validation })
}

/// Load the config at `path` if one is given, otherwise the defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<DashboardConfig, ConfigError> {
    match path {
        Some(path) => Ok(load_config(path)?.config),
        None => {
            let local = Path::new(CONFIG_FILE_NAME);
            if local.is_file() {
                Ok(load_config(local)?.config)
            } else {
                Ok(DashboardConfig::default())
            }
        }
    }
}
