use crate::conf::types::Origin;
use owo_colors::OwoColorize;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub message: String,
    pub origin: Origin,
    pub help: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

#[derive(Serialize)]
struct ValidationReportJson<'a> {
    errors: &'a [ValidationIssue],
    warnings: &'a [ValidationIssue],
}

impl ValidationReport {
    pub fn has_violations(&self) -> bool {
        !self.errors.is_empty() || !self.warnings.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub(crate) fn error(&mut self, message: String, origin: &Origin, help: Option<String>) {
        self.errors.push(ValidationIssue {
            severity: Severity::Error,
            message,
            origin: origin.clone(),
            help,
        });
    }

    pub(crate) fn warning(&mut self, message: String, origin: &Origin, help: Option<String>) {
        self.warnings.push(ValidationIssue {
            severity: Severity::Warning,
            message,
            origin: origin.clone(),
            help,
        });
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        let json = ValidationReportJson {
            errors: &self.errors,
            warnings: &self.warnings,
        };

        serde_json::to_string_pretty(&json)
    }

    pub fn render_plain(&self) -> String {
        let mut out = String::new();

        for issue in self.errors.iter().chain(self.warnings.iter()) {
            let severity = match issue.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            };

            out.push_str(&format!("{}: {}: {}\n", issue.origin, severity, issue.message));

            if let Some(help) = &issue.help {
                out.push_str(&format!("  help: {}\n", help));
            }
        }

        out
    }

    pub fn render_pretty(&self) -> String {
        let mut out = String::new();

        if self.has_violations() {
            out.push_str(&format!(
                "configuration validation failed ({} errors, {} warnings)\n\n",
                self.errors.len(),
                self.warnings.len()
            ));
        }

        for issue in self.errors.iter().chain(self.warnings.iter()) {
            out.push_str(&format!("{}\n", issue.origin));

            match issue.severity {
                Severity::Error => {
                    out.push_str(&format!("  {}: {}\n", "error".red().bold(), issue.message));
                }
                Severity::Warning => {
                    out.push_str(&format!(
                        "  {}: {}\n",
                        "warning".yellow().bold(),
                        issue.message
                    ));
                }
            }

            if let Some(help) = &issue.help {
                out.push_str(&format!("  {}: {}\n", "help".cyan(), help));
            }

            out.push('\n');
        }

        out
    }
}

/// Display block validation
impl ValidationReport {
    pub fn invalid_key_id_width(&mut self, width: usize, origin: &Origin) {
        self.error(
            format!("invalid key_id_width: {}", width),
            origin,
            Some("Use a width between 1 and 64 characters.".to_string()),
        );
    }

    pub fn invalid_conversation_tail(&mut self, tail: usize, origin: &Origin) {
        self.error(
            format!("invalid conversation_tail: {}", tail),
            origin,
            Some("Keep at least one conversation message on the board.".to_string()),
        );
    }
}

/// Stats block validation
impl ValidationReport {
    pub fn invalid_window_seconds(&mut self, seconds: u64, origin: &Origin) {
        self.error(format!("invalid window_seconds: {}", seconds), origin, None);
    }

    pub fn render_tick_too_fast(&mut self, tick_ms: u64, origin: &Origin) {
        self.error(
            format!("render_tick_ms too small: {}", tick_ms),
            origin,
            Some("Redrawing faster than every 50ms only burns the terminal.".to_string()),
        );
    }

    pub fn render_tick_exceeds_window(
        &mut self,
        tick_ms: u64,
        window_seconds: u64,
        origin: &Origin,
    ) {
        self.warning(
            format!(
                "render_tick_ms ({}) is longer than the {}s stats window",
                tick_ms, window_seconds
            ),
            origin,
            None,
        );
    }
}

/// Source block validation
impl ValidationReport {
    pub fn source_path_does_not_exist(&mut self, path: &std::path::Path, origin: &Origin) {
        self.warning(
            format!("source path does not exist yet: {}", path.display()),
            origin,
            Some("The device may not be plugged in; watch will fail until it is.".to_string()),
        );
    }

    pub fn source_path_is_directory(&mut self, path: &std::path::Path, origin: &Origin) {
        self.error(
            format!("source path is a directory: {}", path.display()),
            origin,
            None,
        );
    }
}
