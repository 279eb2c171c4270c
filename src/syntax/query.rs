//! First-match pre-order search over a `SourceTree`.
//!
//! This is the single building block used to locate the declaration
//! container, the declarative property accessor, its returned literal, the
//! behavior-term sub-assignments inside one entry, and tagged comment
//! segments.

use super::{NodeKind, SourceNode};

/// Find the first node in document order whose kind equals `kind` and whose
/// text contains `needle` (an empty needle matches any text).
pub fn find<'t>(
    root: &'t SourceNode,
    source: &str,
    kind: NodeKind,
    needle: &str,
) -> Option<&'t SourceNode> {
    find_with(root, source, kind, needle, false, false)
}

/// `find` with the full set of knobs.
///
/// `match_full_text` compares against the node's full text (leading trivia
/// included) instead of its own text. `skip_root` excludes the root itself
/// from matching, for callers that already tested it and want descendants
/// only; it never applies below the root.
pub fn find_with<'t>(
    root: &'t SourceNode,
    source: &str,
    kind: NodeKind,
    needle: &str,
    match_full_text: bool,
    skip_root: bool,
) -> Option<&'t SourceNode> {
    if !skip_root && root.kind == kind {
        let matched = needle.is_empty() || {
            let haystack = if match_full_text {
                root.full_text(source)
            } else {
                root.text(source)
            };
            haystack.contains(needle)
        };
        if matched {
            return Some(root);
        }
    }

    root.children
        .iter()
        .find_map(|child| find_with(child, source, kind, needle, match_full_text, false))
}
