use crate::conf::types::DashboardConfig;
use crate::conf::validation::report::ValidationReport;

/// A config that passed validation, with any warnings it collected on the way.
#[derive(Debug)]
pub struct ValidatedConfig {
    pub config: DashboardConfig,
    pub validation: ValidationReport,
}
