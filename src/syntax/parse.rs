//! Tree-sitter based construction of the `SourceTree`.

use thiserror::Error;
use tree_sitter::Parser as TsParser;

use super::{NodeKind, SourceNode, SourceTree, Span};

/// Errors raised while turning text into a `SourceTree`.
///
/// Total parse failure is the only hard-fail path of the synchronizer;
/// everything downstream degrades to empty results instead.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to load the TypeScript grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),
    #[error("failed to parse source text")]
    Parse,
}

/// Parse TypeScript source into an owned `SourceTree`.
pub fn parse_source(source: &str) -> Result<SourceTree, ParseError> {
    let mut parser = TsParser::new();
    parser.set_language(&tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into())?;
    let tree = parser.parse(source, None).ok_or(ParseError::Parse)?;

    let ts_root = tree.root_node();
    let root = convert(ts_root, ts_root.start_byte());

    Ok(SourceTree {
        source: source.to_string(),
        root,
        has_errors: ts_root.has_error(),
    })
}

/// Convert one tree-sitter node (and its subtree) into a `SourceNode`.
///
/// `full_start` tracking: within a parent, each child's full text starts at
/// the end of the nearest preceding non-comment sibling, so comments attach
/// to the node that follows them, the way leading trivia behaves in the
/// edited language's own tooling.
fn convert(node: tree_sitter::Node, full_start: usize) -> SourceNode {
    let mut children = Vec::with_capacity(node.child_count());
    let mut last_solid_end = node.start_byte();

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        let converted = convert(child, last_solid_end);
        if converted.kind != NodeKind::Comment {
            last_solid_end = child.end_byte();
        }
        children.push(converted);
    }

    SourceNode {
        kind: NodeKind::from_grammar(node.kind(), node.is_named()),
        span: Span::new(node.start_byte(), node.end_byte()),
        full_start,
        children,
    }
}
