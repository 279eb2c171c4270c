//! The two directional synchronization passes.
//!
//! Each pass re-parses the full current text, builds a descriptor list in
//! one direction, renders the target form, and produces one batched set of
//! edits. Nothing is cached across invocations, so there is no stale-span
//! problem: a pass either runs to completion or fails before any mutation
//! is requested.

pub mod extract;
pub mod fields;
pub mod properties;

use thiserror::Error;

use crate::config::{Layout, SyncConfig};
use crate::generate;
use crate::splice::{self, Edit, LineIndex};
use crate::syntax::{parse_source, ParseError};

/// Failure taxonomy of a pass. All conditions are non-fatal to the host;
/// not-found conditions mean "abort the command, touch nothing".
#[derive(Debug, Error)]
pub enum SyncError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("class declaration not found")]
    ClassNotFound,
    #[error("declarative property block not found")]
    PropertiesNotFound,
    #[error("declarative property literal not found")]
    PropertiesLiteralNotFound,
}

/// What one pass hands back to the host: the batch to apply and the number
/// of properties processed, for user-facing reporting.
#[derive(Debug)]
pub struct SyncOutcome {
    pub properties: usize,
    pub edits: Vec<Edit>,
}

/// Declarative -> typed: regenerate the typed class fields from the
/// declarative property block.
pub fn update_fields(source: &str, config: &SyncConfig) -> Result<SyncOutcome, SyncError> {
    let tree = parse_source(source)?;
    let class = extract::class_node(&tree).ok_or(SyncError::ClassNotFound)?;
    let body = extract::class_body(&tree, class).ok_or(SyncError::ClassNotFound)?;
    let accessor =
        extract::properties_accessor(&tree, class).ok_or(SyncError::PropertiesNotFound)?;
    let literal =
        extract::properties_literal(&tree, accessor).ok_or(SyncError::PropertiesLiteralNotFound)?;

    let entries = extract::declarative_entries(literal);
    let marked = extract::marked_fields(&tree, body);
    let descriptors = fields::build(&tree, &entries, &marked);

    let layout = Layout::resolve(config, source);
    let rendered = generate::render_fields(&descriptors, &layout);
    // Structural anchor: first character after the field container's brace.
    let anchor = body.span.start + 1;
    let index = LineIndex::new(source, layout.eol);
    let edits = splice::build_batch(&descriptors, &rendered, anchor, &index);

    Ok(SyncOutcome {
        properties: descriptors.len(),
        edits,
    })
}

/// Typed -> declarative: regenerate the declarative property block from
/// the marked typed class fields.
pub fn update_properties(source: &str, config: &SyncConfig) -> Result<SyncOutcome, SyncError> {
    let tree = parse_source(source)?;
    let class = extract::class_node(&tree).ok_or(SyncError::ClassNotFound)?;
    let body = extract::class_body(&tree, class).ok_or(SyncError::ClassNotFound)?;
    let accessor =
        extract::properties_accessor(&tree, class).ok_or(SyncError::PropertiesNotFound)?;
    let literal =
        extract::properties_literal(&tree, accessor).ok_or(SyncError::PropertiesLiteralNotFound)?;

    let entries = extract::declarative_entries(literal);
    let marked = extract::marked_fields(&tree, body);
    let descriptors = properties::build(&tree, &marked, &entries);

    let layout = Layout::resolve(config, source);
    let rendered = generate::render_properties(&descriptors, &layout);
    // Structural anchor: first character after the literal's brace.
    let anchor = literal.span.start + 1;
    let index = LineIndex::new(source, layout.eol);
    let edits = splice::build_batch(&descriptors, &rendered, anchor, &index);

    Ok(SyncOutcome {
        properties: descriptors.len(),
        edits,
    })
}

/// Collapse a multi-line expression into one comment-safe line: line
/// breaks become single spaces, duplicate spaces are squeezed.
pub(crate) fn normalize_expr(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_space = false;
    for ch in text.chars() {
        if ch == '\r' {
            continue;
        }
        let ch = if ch == '\n' { ' ' } else { ch };
        if ch == ' ' && prev_space {
            continue;
        }
        prev_space = ch == ' ';
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_multiline_expressions() {
        assert_eq!(
            normalize_expr("() => {\r\n    return [];\r\n}"),
            "() => { return []; }"
        );
        assert_eq!(normalize_expr("0"), "0");
    }

    #[test]
    fn missing_class_is_a_not_found_condition() {
        let err = update_fields("const x = 1;", &SyncConfig::default()).unwrap_err();
        assert!(matches!(err, SyncError::ClassNotFound));
    }

    #[test]
    fn missing_block_is_a_not_found_condition() {
        let err = update_fields("class W { render() {} }", &SyncConfig::default()).unwrap_err();
        assert!(matches!(err, SyncError::PropertiesNotFound));
    }
}
