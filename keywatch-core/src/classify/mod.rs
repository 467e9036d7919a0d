//! Log-line classification.
//!
//! Every line the device emits goes through two independent passes:
//!
//! - a console category, used only to style the raw diagnostic console
//! - an extraction cascade that turns the line into zero, one or two [`StateEvent`]s
//!
//! Both passes are ordered first-match-wins tables (see [`category`] and [`rules`]). The
//! classifier holds no state: the same line always yields the same [`Classification`].
//!
//! line
//! categorize + extract
//! Classification
//! Dashboard::ingest

pub mod category;
pub mod markers;
pub mod rules;
mod types;

#[cfg(test)]
mod tests;

pub use category::categorize;
pub use rules::{EXTRACTION_RULES, ExtractionRule, extract};
pub use types::*;

pub fn classify(line: &str) -> Classification {
    let category = categorize(line);
    let (rule, events) = extract(line);

    Classification {
        category,
        rule,
        events,
    }
}
