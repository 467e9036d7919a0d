use crate::classify::{Classification, ConsoleCategory, StateEvent, classify};
use crate::display::{DEFAULT_KEY_ID_WIDTH, connection_label, key_id_label};
use crate::ingest::normalize_line;
use anyhow::Result;
use serde::Serialize;
use std::io::{self, Write};


/// One classified line, as written by `--json` output.
#[derive(Debug, Serialize)]
pub struct LineRecord<'a> {
    pub line: &'a str,
    pub category: ConsoleCategory,
    pub events: &'a [StateEvent],
}

impl<'a> LineRecord<'a> {
    pub fn new(line: &'a str, classification: &'a Classification) -> Self {
        Self {
            line,
            category: classification.category,
            events: &classification.events,
        }
    }
}

/// Classifies each argument as if the device had sent it.
pub fn run_classify(lines: &[String], json: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for raw in lines {
        let Some(line) = normalize_line(raw) else {
            if !json {
                writeln!(out, "{raw:?}: skipped")?;
            }
            continue;
        };

        let classification = classify(line);

        if json {
            let record = LineRecord::new(line, &classification);
            writeln!(out, "{}", serde_json::to_string(&record)?)?;
        } else {
            out.write_all(describe_classification(line, &classification).as_bytes())?;
        }
    }

    Ok(())
}

pub fn describe_classification(line: &str, classification: &Classification) -> String {
    let mut out = format!("{line:?}\n  category: {}\n", classification.category);

    match classification.rule {
        Some(rule) => out.push_str(&format!("  rule: {}\n", rule.as_str())),
        None => out.push_str("  rule: -\n"),
    }

    for event in &classification.events {
        out.push_str(&format!("  event: {}\n", describe_event(event)));
    }

    out
}

/// Human-readable event summary. Key identifiers are shortened the same way the views show them.
pub fn describe_event(event: &StateEvent) -> String {
    match event {
        StateEvent::Connection { connected } => {
            format!("connection link={}", connection_label(*connected))
        }
        StateEvent::SlotUpdate { slot } => format!("slot_update slot={slot}"),
        StateEvent::KeyIdUpdate { key_id } => format!(
            "key_id_update key_id={}",
            key_id_label(Some(key_id), DEFAULT_KEY_ID_WIDTH)
        ),
        StateEvent::ConversationAppend { text, direction } => {
            format!(
                "conversation_append direction={} text={text:?}",
                direction.as_str()
            )
        }
    }
}
