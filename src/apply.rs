//! Application of a finished edit batch to a text buffer.
//!
//! In an editor host this is the host's own job; the CLI (and the tests)
//! inject this implementation instead, so the core stays a pure
//! text-in/edit-batch-out function.

use crate::splice::{Edit, LineIndex, TextRange};

/// Apply a batch in order against `source`.
///
/// The batch is built against one snapshot, with mutations ordered so that
/// each edit's coordinates are still valid when it is reached. Degenerate
/// ranges and unresolvable positions are skipped, never applied.
pub fn apply_edits(source: &str, edits: &[Edit], index: &LineIndex) -> String {
    let mut text = source.to_string();
    for edit in edits {
        match edit {
            Edit::Delete { range } => {
                if let Some((start, end)) = resolve(range, index) {
                    text.replace_range(start..end, "");
                }
            }
            Edit::Replace { range, text: new } => {
                if let Some((start, end)) = resolve(range, index) {
                    text.replace_range(start..end, new);
                }
            }
            Edit::Insert { position, text: new } => {
                if let Some(offset) = index.offset(*position) {
                    text.insert_str(offset, new);
                }
            }
        }
    }
    text
}

fn resolve(range: &TextRange, index: &LineIndex) -> Option<(usize, usize)> {
    if range.is_degenerate() {
        return None;
    }
    let start = index.offset(range.start)?;
    let end = index.offset(range.end)?;
    (start <= end).then_some((start, end))
}
