use super::markers::*;
use super::types::ConsoleCategory;

type Predicate = fn(&str) -> bool;

/// Console categories in evaluation order. First match wins; anything left is `Default`.
const CATEGORY_RULES: &[(ConsoleCategory, Predicate)] = &[
    (ConsoleCategory::CommandEcho, is_command_echo),
    (ConsoleCategory::OutboundUser, is_outbound),
    (ConsoleCategory::InboundDevice, is_inbound),
    (ConsoleCategory::Error, is_error),
    (ConsoleCategory::Warning, is_warning),
    (ConsoleCategory::Success, is_success),
    (ConsoleCategory::Info, is_status_report),
];

pub fn categorize(line: &str) -> ConsoleCategory {
    CATEGORY_RULES
        .iter()
        .find(|(_, matches)| matches(line))
        .map(|(category, _)| *category)
        .unwrap_or(ConsoleCategory::Default)
}

pub(crate) fn is_command_echo(line: &str) -> bool {
    line.starts_with(COMMAND_ECHO)
}

fn is_outbound(line: &str) -> bool {
    line.starts_with(OUTBOUND)
}

/// A generic outbound line that is not an operator command.
pub(crate) fn is_outbound_message(line: &str) -> bool {
    is_outbound(line) && !is_command_echo(line)
}

fn is_inbound(line: &str) -> bool {
    line.starts_with(INBOUND)
}

fn is_error(line: &str) -> bool {
    contains_any(line, ERROR_KEYWORDS)
}

fn is_warning(line: &str) -> bool {
    contains_any(line, WARNING_KEYWORDS)
}

fn is_success(line: &str) -> bool {
    contains_any(line, SUCCESS_KEYWORDS)
}

fn is_status_report(line: &str) -> bool {
    contains_any(line, STATUS_KEYWORDS)
}

pub(crate) fn contains_any(line: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| line.contains(needle))
}
