//! Documentation-comment extraction and rewriting.
//!
//! A `DocComment` is an immutable value: each rewrite step (remove a tag
//! line, insert a line before the closing delimiter, re-indent) returns a
//! new value. `target_text` starts as the comment exactly as written and is
//! only ever narrowed or widened, so unrelated hand-written lines survive
//! every pass.

use lazy_static::lazy_static;
use regex::Regex;

/// Marker linking a typed field back to its declarative metadata payload.
pub const PAIR_MARKER: &str = "@propsync";

lazy_static! {
    /// A `/** ... */` block.
    static ref DOC_BLOCK: Regex = Regex::new(r"(?s)/\*\*.*?\*/").unwrap();

    /// Explicit type annotation tag, e.g. `@type {Itask[]}`.
    static ref TYPE_TAG: Regex =
        Regex::new(r"@type\s*\{\s*([A-Za-z0-9_$<>\[\], ]+?)\s*\}").unwrap();

    /// Pairing tag with optional inline payload, e.g.
    /// `@propsync { value: 0, notify: true }`. The payload never spans
    /// lines.
    static ref PAIR_TAG: Regex = Regex::new(r"@propsync(?:[ \t]*(\{.*\}))?").unwrap();
}

/// A doc-comment block attached to one declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocComment {
    /// The comment exactly as written in the source.
    pub source_text: String,
    /// Full text of the explicit type annotation segment, empty if none.
    pub type_tag: String,
    /// The bare type name extracted from `type_tag`.
    pub type_value: String,
    /// Full text of the pairing-annotation segment, empty if none.
    pub pair_tag: String,
    /// The object-literal payload following the pairing marker.
    pub pair_value: String,
    /// Working copy that accumulates edits and is ultimately emitted.
    pub target_text: String,
}

impl DocComment {
    /// Extract the last doc-comment block from a declaration's leading
    /// trivia. Returns `None` when the trivia holds no block.
    pub fn parse(trivia: &str) -> Option<DocComment> {
        let block = DOC_BLOCK.find_iter(trivia).last()?.as_str();

        let (type_tag, type_value) = match TYPE_TAG.captures(block) {
            Some(c) => (c[0].to_string(), c[1].to_string()),
            None => (String::new(), String::new()),
        };
        let (pair_tag, pair_value) = match PAIR_TAG.captures(block) {
            Some(c) => (
                c[0].to_string(),
                c.get(1).map(|m| m.as_str().to_string()).unwrap_or_default(),
            ),
            None => (String::new(), String::new()),
        };

        Some(DocComment {
            source_text: block.to_string(),
            type_tag,
            type_value,
            pair_tag,
            pair_value,
            target_text: block.to_string(),
        })
    }

    pub fn has_type_tag(&self) -> bool {
        !self.type_tag.is_empty()
    }

    pub fn has_pair_tag(&self) -> bool {
        !self.pair_tag.is_empty()
    }

    /// True when nothing but delimiters and `*` gutters remain.
    pub fn is_empty(&self) -> bool {
        self.target_text.lines().all(|line| {
            let inner = line
                .trim()
                .trim_start_matches("/**")
                .trim_end_matches("*/");
            inner.chars().all(|c| c == '*' || c.is_whitespace())
        })
    }

    /// Remove the explicit type annotation from the working copy.
    pub fn without_type_tag(&self) -> DocComment {
        self.without_tag(&self.type_tag)
    }

    /// Remove the pairing annotation from the working copy.
    pub fn without_pair_tag(&self) -> DocComment {
        self.without_tag(&self.pair_tag)
    }

    fn without_tag(&self, tag: &str) -> DocComment {
        if tag.is_empty() {
            return self.clone();
        }
        let mut out = self.clone();
        let lines: Vec<&str> = self.target_text.lines().collect();
        if lines.len() == 1 {
            // Single-line comment: strip the tag itself; an emptied shell
            // collapses to nothing and the caller drops the comment.
            let stripped = lines[0].replacen(tag, "", 1);
            let inner = stripped
                .trim()
                .trim_start_matches("/**")
                .trim_end_matches("*/")
                .trim();
            out.target_text = if inner.is_empty() { String::new() } else { stripped };
        } else {
            let mut kept: Vec<String> = Vec::with_capacity(lines.len());
            let mut removed = false;
            for line in lines {
                if !removed && line.contains(tag) {
                    removed = true;
                    // A tag sharing a line with a delimiter loses only the
                    // tag itself; a tag line of its own disappears.
                    if line.contains("/**") || line.contains("*/") {
                        kept.push(line.replacen(tag, "", 1).trim_end().to_string());
                    }
                    continue;
                }
                kept.push(line.to_string());
            }
            out.target_text = kept.join("\n");
        }
        out
    }

    /// Insert a new ` * content` line before the closing delimiter,
    /// expanding a single-line comment into block form when needed.
    pub fn with_line_before_close(&self, content: &str) -> DocComment {
        let mut out = self.clone();
        let lines: Vec<String> = self.target_text.lines().map(str::to_string).collect();

        if lines.len() <= 1 {
            let inner = self
                .target_text
                .trim()
                .trim_start_matches("/**")
                .trim_end_matches("*/")
                .trim()
                .to_string();
            let mut block = vec!["/**".to_string()];
            if !inner.is_empty() {
                block.push(format!(" * {}", inner));
            }
            block.push(format!(" * {}", content));
            block.push(" */".to_string());
            out.target_text = block.join("\n");
        } else {
            let close = lines
                .iter()
                .rposition(|line| line.contains("*/"))
                .unwrap_or(lines.len() - 1);
            let mut block = lines;
            block.insert(close, format!(" * {}", content));
            out.target_text = block.join("\n");
        }
        out
    }

    /// Re-indent the whole block for placement at a new nesting level.
    ///
    /// The first line is left bare (the renderer prefixes it); following
    /// lines get `indent` plus the one-space gutter that aligns their `*`
    /// under the opening delimiter.
    pub fn reindented(&self, indent: &str) -> DocComment {
        let mut out = self.clone();
        let lines: Vec<String> = self
            .target_text
            .lines()
            .enumerate()
            .map(|(i, line)| {
                if i == 0 {
                    line.trim_start().to_string()
                } else {
                    format!("{} {}", indent, line.trim_start())
                }
            })
            .collect();
        out.target_text = lines.join("\n");
        out
    }

    /// Lines of the working copy, for rendering.
    pub fn target_lines(&self) -> impl Iterator<Item = &str> {
        self.target_text.lines()
    }
}

/// Extract a pairing payload from any comment in a declaration's leading
/// trivia, line comments included. `Some("")` means a bare marker.
pub fn pair_payload(trivia: &str) -> Option<String> {
    let caps = PAIR_TAG.captures(trivia)?;
    Some(caps.get(1).map(|m| m.as_str().to_string()).unwrap_or_default())
}

/// Extract an explicit type annotation from leading trivia, line comments
/// included.
pub fn type_annotation(trivia: &str) -> Option<String> {
    TYPE_TAG.captures(trivia).map(|c| c[1].to_string())
}
