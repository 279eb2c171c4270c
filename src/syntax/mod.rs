//! Kind-tagged source tree for a single TypeScript component file.
//!
//! This module provides:
//! - `NodeKind`: closed enumeration of the node kinds the synchronizer
//!   cares about
//! - `SourceNode` / `SourceTree`: an owned, read-only view of one parse
//! - `parse`: tree-sitter based construction of a `SourceTree`
//! - `query`: first-match pre-order search over the tree

pub mod parse;
pub mod query;

pub use parse::{parse_source, ParseError};

/// Half-open byte-offset span `[start, end)` into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The node kinds the synchronizer distinguishes.
///
/// Everything else in the grammar collapses into `Token` (anonymous
/// punctuation/keywords) or `Other` (named nodes with no special role), so
/// matches over this enum stay exhaustive as the grammar evolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    SourceFile,
    ClassDeclaration,
    ClassBody,
    MethodDefinition,
    FieldDeclaration,
    ReturnStatement,
    ObjectLiteral,
    Pair,
    Identifier,
    TypeAnnotation,
    Comment,
    Token,
    Other,
}

impl NodeKind {
    /// Map a tree-sitter grammar kind onto the closed enumeration.
    pub fn from_grammar(kind: &str, is_named: bool) -> Self {
        if !is_named {
            return NodeKind::Token;
        }
        match kind {
            "program" => NodeKind::SourceFile,
            "class_declaration" => NodeKind::ClassDeclaration,
            "class_body" => NodeKind::ClassBody,
            "method_definition" => NodeKind::MethodDefinition,
            "public_field_definition" | "field_definition" => NodeKind::FieldDeclaration,
            "return_statement" => NodeKind::ReturnStatement,
            "object" => NodeKind::ObjectLiteral,
            "pair" => NodeKind::Pair,
            "identifier"
            | "property_identifier"
            | "private_property_identifier"
            | "shorthand_property_identifier"
            | "type_identifier" => NodeKind::Identifier,
            "type_annotation" => NodeKind::TypeAnnotation,
            "comment" => NodeKind::Comment,
            _ => NodeKind::Other,
        }
    }
}

/// One node of the parsed tree.
///
/// `span` covers the node's own text; `full_start` additionally reaches
/// back to the end of the nearest preceding non-comment sibling, so the
/// full text carries the node's leading comments and whitespace.
#[derive(Debug, Clone)]
pub struct SourceNode {
    pub kind: NodeKind,
    pub span: Span,
    pub full_start: usize,
    pub children: Vec<SourceNode>,
}

impl SourceNode {
    /// The node's own text, leading trivia excluded.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.span.start..self.span.end]
    }

    /// The node's text including leading comments and whitespace.
    pub fn full_text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.full_start..self.span.end]
    }

    /// The leading trivia alone (whatever sits between the previous
    /// sibling and this node).
    pub fn leading_trivia<'a>(&self, source: &'a str) -> &'a str {
        &source[self.full_start..self.span.start]
    }

    /// The span extended backwards over the leading trivia.
    pub fn full_span(&self) -> Span {
        Span::new(self.full_start, self.span.end)
    }
}

/// The parse of one snapshot of the document. Never mutated.
#[derive(Debug)]
pub struct SourceTree {
    pub source: String,
    pub root: SourceNode,
    pub has_errors: bool,
}

impl SourceTree {
    pub fn text_of(&self, node: &SourceNode) -> &str {
        node.text(&self.source)
    }

    pub fn full_text_of(&self, node: &SourceNode) -> &str {
        node.full_text(&self.source)
    }
}
