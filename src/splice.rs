//! Position bookkeeping and edit-batch construction.
//!
//! The offset to (line, column) projection scans cumulative line lengths
//! plus the line-ending width; O(lines) per query, which is fine at file
//! scope. Batch construction orders deletions by descending start offset so
//! earlier-computed coordinates stay valid while the host applies the batch
//! sequentially.

use serde::{Deserialize, Serialize};

use crate::descriptor::PropertyDescriptor;
use crate::syntax::Span;

/// A (line, column) pair. Lines are 1-indexed; line 0 marks a position
/// that could not be resolved and must not be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextPosition {
    pub line: usize,
    pub column: usize,
}

impl TextPosition {
    pub const NONE: TextPosition = TextPosition { line: 0, column: 0 };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRange {
    pub start: TextPosition,
    pub end: TextPosition,
}

impl TextRange {
    pub const NONE: TextRange = TextRange {
        start: TextPosition::NONE,
        end: TextPosition::NONE,
    };

    /// The degenerate zero-width marker for an unresolvable span.
    pub fn is_degenerate(&self) -> bool {
        self.start.line == 0 || self.end.line == 0
    }
}

/// One document mutation, expressed in line/column coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Edit {
    Delete { range: TextRange },
    Insert { position: TextPosition, text: String },
    Replace { range: TextRange, text: String },
}

/// Offset to (line, column) projection for one snapshot of the document.
#[derive(Debug)]
pub struct LineIndex {
    line_starts: Vec<usize>,
    line_lens: Vec<usize>,
    eol_len: usize,
    len: usize,
}

impl LineIndex {
    pub fn new(source: &str, eol: &str) -> Self {
        let eol_len = eol.len();
        let mut line_starts = Vec::new();
        let mut line_lens = Vec::new();
        let mut p = 0;
        for line in source.split(eol) {
            line_starts.push(p);
            line_lens.push(line.len());
            p += line.len() + eol_len;
        }
        Self {
            line_starts,
            line_lens,
            eol_len,
            len: source.len(),
        }
    }

    /// Project a byte offset. Offsets pointing into a line ending resolve
    /// to a column past the line's last character.
    pub fn position(&self, offset: usize) -> Option<TextPosition> {
        if offset > self.len {
            return None;
        }
        for (i, (&start, &len)) in self.line_starts.iter().zip(&self.line_lens).enumerate() {
            if start + len + self.eol_len > offset {
                return Some(TextPosition {
                    line: i + 1,
                    column: offset - start,
                });
            }
        }
        None
    }

    /// Project a span, degenerating to `TextRange::NONE` when either end
    /// cannot be resolved.
    pub fn range(&self, span: Span) -> TextRange {
        match (self.position(span.start), self.position(span.end)) {
            (Some(start), Some(end)) => TextRange { start, end },
            _ => TextRange::NONE,
        }
    }

    /// Map a position back to its byte offset.
    pub fn offset(&self, position: TextPosition) -> Option<usize> {
        if position.line == 0 || position.line > self.line_starts.len() {
            return None;
        }
        let offset = self.line_starts[position.line - 1] + position.column;
        (offset <= self.len).then_some(offset)
    }
}

/// The structural fallback anchor used when no descriptor has an existing
/// target to replace.
pub fn insertion_point(descriptors: &[PropertyDescriptor], anchor: usize) -> usize {
    descriptors
        .iter()
        .filter_map(|d| d.existing_target)
        .filter(|span| span.start > 0)
        .map(|span| span.start)
        .min()
        .unwrap_or(anchor)
}

/// Build the minimal overlap-free batch for one pass: every resolved
/// existing target is deleted, except the one coinciding with the
/// insertion point, which is replaced with the rendered text for the whole
/// set. When nothing coincides, a separate insert carries the text.
pub fn build_batch(
    descriptors: &[PropertyDescriptor],
    rendered: &str,
    anchor: usize,
    index: &LineIndex,
) -> Vec<Edit> {
    let point = insertion_point(descriptors, anchor);

    let mut targets: Vec<Span> = descriptors
        .iter()
        .filter_map(|d| d.existing_target)
        .filter(|span| span.start > 0)
        .collect();
    targets.sort_by(|a, b| b.start.cmp(&a.start));

    let mut edits = Vec::new();
    let mut placed = false;
    for span in targets {
        let range = index.range(span);
        if range.is_degenerate() {
            continue;
        }
        if span.start == point {
            edits.push(Edit::Replace {
                range,
                text: rendered.to_string(),
            });
            placed = true;
        } else {
            edits.push(Edit::Delete { range });
        }
    }

    if !placed {
        if let Some(position) = index.position(point) {
            edits.push(Edit::Insert {
                position,
                text: rendered.to_string(),
            });
        }
    }

    edits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(name: &str, target: Option<Span>) -> PropertyDescriptor {
        let mut d = PropertyDescriptor::new(name, Span::new(0, 0));
        d.existing_target = target;
        d
    }

    #[test]
    fn projects_offsets_across_lines() {
        let index = LineIndex::new("ab\ncd\ne", "\n");
        assert_eq!(
            index.position(0),
            Some(TextPosition { line: 1, column: 0 })
        );
        assert_eq!(
            index.position(4),
            Some(TextPosition { line: 2, column: 1 })
        );
        assert_eq!(
            index.position(6),
            Some(TextPosition { line: 3, column: 0 })
        );
    }

    #[test]
    fn projection_respects_crlf_width() {
        let index = LineIndex::new("ab\r\ncd", "\r\n");
        assert_eq!(
            index.position(4),
            Some(TextPosition { line: 2, column: 0 })
        );
        // Inside the line ending: past the line's last character.
        assert_eq!(
            index.position(3),
            Some(TextPosition { line: 1, column: 3 })
        );
    }

    #[test]
    fn out_of_bounds_offsets_degenerate() {
        let index = LineIndex::new("ab", "\n");
        assert_eq!(index.position(99), None);
        assert!(index.range(Span::new(0, 99)).is_degenerate());
    }

    #[test]
    fn offsets_round_trip() {
        let source = "ab\ncd\ne";
        let index = LineIndex::new(source, "\n");
        for offset in 0..=source.len() {
            let position = index.position(offset).unwrap();
            assert_eq!(index.offset(position), Some(offset));
        }
        assert_eq!(index.offset(TextPosition::NONE), None);
    }

    #[test]
    fn batch_replaces_at_the_insertion_point_and_deletes_the_rest() {
        let source = "0123456789\n0123456789\n0123456789\n";
        let index = LineIndex::new(source, "\n");
        let descriptors = vec![
            descriptor("a", Some(Span::new(11, 21))),
            descriptor("b", Some(Span::new(22, 32))),
            descriptor("c", None),
        ];

        let edits = build_batch(&descriptors, "NEW", 0, &index);
        assert_eq!(edits.len(), 2);
        // Descending start order: the deletion comes first.
        assert!(matches!(edits[0], Edit::Delete { .. }));
        match &edits[1] {
            Edit::Replace { range, text } => {
                assert_eq!(range.start, TextPosition { line: 2, column: 0 });
                assert_eq!(text, "NEW");
            }
            other => panic!("expected replace, got {:?}", other),
        }
    }

    #[test]
    fn batch_falls_back_to_an_insert_at_the_anchor() {
        let source = "0123456789\n0123456789\n";
        let index = LineIndex::new(source, "\n");
        let descriptors = vec![descriptor("a", None)];

        let edits = build_batch(&descriptors, "NEW", 5, &index);
        assert_eq!(edits.len(), 1);
        match &edits[0] {
            Edit::Insert { position, text } => {
                assert_eq!(*position, TextPosition { line: 1, column: 5 });
                assert_eq!(text, "NEW");
            }
            other => panic!("expected insert, got {:?}", other),
        }
    }

    #[test]
    fn batch_ranges_never_overlap() {
        let source = "0123456789\n0123456789\n0123456789\n0123456789\n";
        let index = LineIndex::new(source, "\n");
        let descriptors = vec![
            descriptor("a", Some(Span::new(5, 10))),
            descriptor("b", Some(Span::new(11, 21))),
            descriptor("c", Some(Span::new(33, 40))),
        ];

        let edits = build_batch(&descriptors, "NEW", 0, &index);
        let mut spans: Vec<(usize, usize)> = edits
            .iter()
            .filter_map(|e| match e {
                Edit::Delete { range } | Edit::Replace { range, .. } => Some((
                    index.offset(range.start).unwrap(),
                    index.offset(range.end).unwrap(),
                )),
                Edit::Insert { .. } => None,
            })
            .collect();
        spans.sort();
        for pair in spans.windows(2) {
            assert!(pair[0].1 <= pair[1].0, "overlapping edits: {:?}", pair);
        }
    }
}
