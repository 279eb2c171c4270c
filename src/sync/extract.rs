//! Extraction of raw declaration nodes from both forms.
//!
//! Everything here fails soft: a container or accessor that cannot be
//! located yields `None` or an empty list, never an error.

use crate::doc_comment::PAIR_MARKER;
use crate::syntax::query::find;
use crate::syntax::{NodeKind, SourceNode, SourceTree};

/// The enclosing class declaration.
pub fn class_node<'t>(tree: &'t SourceTree) -> Option<&'t SourceNode> {
    find(&tree.root, &tree.source, NodeKind::ClassDeclaration, "class")
}

/// The class body holding the typed field declarations.
pub fn class_body<'t>(tree: &'t SourceTree, class: &'t SourceNode) -> Option<&'t SourceNode> {
    find(class, &tree.source, NodeKind::ClassBody, "")
}

/// The declarative property block accessor.
pub fn properties_accessor<'t>(
    tree: &'t SourceTree,
    class: &'t SourceNode,
) -> Option<&'t SourceNode> {
    find(
        class,
        &tree.source,
        NodeKind::MethodDefinition,
        "static get properties()",
    )
}

/// The mapping literal returned by the declarative block.
pub fn properties_literal<'t>(
    tree: &'t SourceTree,
    accessor: &'t SourceNode,
) -> Option<&'t SourceNode> {
    let ret = find(accessor, &tree.source, NodeKind::ReturnStatement, "return")?;
    find(ret, &tree.source, NodeKind::ObjectLiteral, "{")
}

/// Every direct mapping entry of the literal.
pub fn declarative_entries(literal: &SourceNode) -> Vec<&SourceNode> {
    literal
        .children
        .iter()
        .filter(|child| child.kind == NodeKind::Pair)
        .collect()
}

/// Every direct field declaration of the class body that carries the
/// pairing marker (in a leading line comment or doc comment).
pub fn marked_fields<'t>(tree: &'t SourceTree, body: &'t SourceNode) -> Vec<&'t SourceNode> {
    body.children
        .iter()
        .filter(|child| {
            child.kind == NodeKind::FieldDeclaration
                && child.full_text(&tree.source).contains(PAIR_MARKER)
        })
        .collect()
}

/// A mapping entry's name: the text before the first colon.
pub fn entry_name(tree: &SourceTree, entry: &SourceNode) -> String {
    tree.text_of(entry)
        .split(':')
        .next()
        .unwrap_or("")
        .trim()
        .to_string()
}

/// A field declaration's name, from its identifier child.
pub fn field_name(tree: &SourceTree, field: &SourceNode) -> Option<String> {
    find(field, &tree.source, NodeKind::Identifier, "")
        .map(|id| id.text(&tree.source).to_string())
}

/// The value side of a `key: value` pair.
pub fn pair_value_node(pair: &SourceNode) -> Option<&SourceNode> {
    pair.children
        .iter()
        .rev()
        .find(|child| !matches!(child.kind, NodeKind::Token | NodeKind::Comment))
}
