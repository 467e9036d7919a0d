mod report;
mod validate;
mod validated_config;

pub use report::*;
pub use validate::validate_config;
pub use validated_config::ValidatedConfig;
