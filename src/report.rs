//! Output formatting for synchronization results.
//!
//! Two formats:
//! - Pretty: colored terminal summary for human readability
//! - JSON: the edit batch and counts, for programmatic consumption

use colored::*;
use serde::Serialize;

use crate::splice::Edit;
use crate::sync::SyncOutcome;

/// JSON report structure.
#[derive(Serialize)]
pub struct JsonReport<'a> {
    pub file: &'a str,
    pub direction: &'a str,
    pub properties: usize,
    pub applied: bool,
    pub edits: &'a [Edit],
}

/// Write the human-readable summary.
pub fn write_pretty(file: &str, direction: &str, outcome: &SyncOutcome, applied: bool) {
    let verb = if applied { "updated" } else { "planned" };
    println!(
        "{} {} {} for {} ({} propert{}, {} edit{})",
        "propsync:".bold(),
        verb.green(),
        direction,
        file.cyan(),
        outcome.properties,
        if outcome.properties == 1 { "y" } else { "ies" },
        outcome.edits.len(),
        if outcome.edits.len() == 1 { "" } else { "s" },
    );
}

/// Write the JSON report to stdout.
pub fn write_json(
    file: &str,
    direction: &str,
    outcome: &SyncOutcome,
    applied: bool,
) -> anyhow::Result<()> {
    let report = JsonReport {
        file,
        direction,
        properties: outcome.properties,
        applied,
        edits: &outcome.edits,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
