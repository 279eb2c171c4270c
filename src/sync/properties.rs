//! Typed -> declarative descriptor construction.

use crate::coerce;
use crate::descriptor::{push_descriptor, BehaviorTerms, PropertyDescriptor};
use crate::doc_comment::{self, DocComment};
use crate::syntax::query::find;
use crate::syntax::{parse_source, NodeKind, SourceNode, SourceTree};

use super::extract;
use super::normalize_expr;

/// Build the descriptor list for a typed -> declarative pass.
///
/// Marked fields drive the build; a second pass re-adds declarative-only
/// entries so properties with no typed counterpart survive untouched.
pub fn build(
    tree: &SourceTree,
    fields: &[&SourceNode],
    entries: &[&SourceNode],
) -> Vec<PropertyDescriptor> {
    let mut result = Vec::new();
    for field in fields {
        let Some(name) = extract::field_name(tree, field) else {
            continue;
        };
        let mut descriptor = build_one(tree, field, &name);

        if let Some(entry) = entries
            .iter()
            .find(|e| extract::entry_name(tree, e) == name)
        {
            descriptor.existing_target = Some(entry_span(tree, entry));
        }

        push_descriptor(&mut result, descriptor);
    }

    recover_unmatched(tree, entries, &mut result);
    result
}

fn build_one(tree: &SourceTree, field: &SourceNode, name: &str) -> PropertyDescriptor {
    let source = &tree.source;
    let mut descriptor = PropertyDescriptor::new(name, field.full_span());

    let field_type = find(field, source, NodeKind::TypeAnnotation, "")
        .map(|t| {
            t.text(source)
                .trim_start_matches(':')
                .trim()
                .trim_end_matches(';')
                .trim_end()
                .to_string()
        })
        .unwrap_or_else(|| "any".to_string());

    descriptor.type_comment = if coerce::is_builtin_field_type(&field_type) {
        String::new()
    } else {
        field_type.clone()
    };
    descriptor.declared_type = coerce::declared_type_for(&field_type).to_string();
    descriptor.field_type = field_type;

    let trivia = field.leading_trivia(source);
    if let Some(payload) = doc_comment::pair_payload(trivia) {
        if !payload.is_empty() {
            descriptor.terms = parse_terms(&payload);
        }
    }

    // Mirror of the other direction: the pairing tag leaves the comment,
    // and a type tag comes in when the declarative form cannot express the
    // field's type on its own.
    if let Some(doc) = DocComment::parse(trivia) {
        let mut working = doc;
        if working.has_pair_tag() {
            working = working.without_pair_tag();
        }
        if !working.target_text.is_empty()
            && !descriptor.type_comment.is_empty()
            && !working.has_type_tag()
        {
            working =
                working.with_line_before_close(&format!("@type {{{}}}", descriptor.type_comment));
        }
        if !working.target_text.is_empty() && !working.is_empty() {
            descriptor.doc = Some(working);
        }
    }

    descriptor
}

/// Parse a pairing payload by wrapping it into a throwaway
/// single-expression program and tree-searching the result.
///
/// A payload that fails to parse yields all-empty terms; one bad
/// annotation must not block the rest of the pass.
fn parse_terms(payload: &str) -> BehaviorTerms {
    let wrapped = format!("({})", payload);
    let tree = match parse_source(&wrapped) {
        Ok(tree) if !tree.has_errors => tree,
        _ => return BehaviorTerms::default(),
    };

    let term = |name: &str| -> String {
        let needle = format!("{}:", name);
        find(&tree.root, &tree.source, NodeKind::Pair, &needle)
            .and_then(extract::pair_value_node)
            .map(|v| normalize_expr(v.text(&tree.source)))
            .unwrap_or_default()
    };

    BehaviorTerms {
        value: term("value"),
        reflect_to_attribute: term("reflectToAttribute"),
        read_only: term("readOnly"),
        notify: term("notify"),
        computed: term("computed"),
        observer: term("observer"),
    }
}

/// Re-add declarative entries whose name never appeared among the built
/// descriptors. They are preserved verbatim: the original text is carried
/// along and the original span becomes the target, so the splice removes
/// and re-emits the entry unchanged.
fn recover_unmatched(
    tree: &SourceTree,
    entries: &[&SourceNode],
    result: &mut Vec<PropertyDescriptor>,
) {
    for entry in entries {
        let name = extract::entry_name(tree, entry);
        if name.is_empty() || result.iter().any(|d| d.name == name) {
            continue;
        }
        let mut descriptor = PropertyDescriptor::new(&name, entry.full_span());
        descriptor.existing_target = Some(entry_span(tree, entry));
        descriptor.preserved_text = Some(dedent_block(entry.full_text(&tree.source)));
        result.push(descriptor);
    }
}

/// An entry's full span, extended over the trailing separator so removal
/// consumes it too.
fn entry_span(tree: &SourceTree, entry: &SourceNode) -> crate::syntax::Span {
    let mut span = entry.full_span();
    if tree.source.as_bytes().get(span.end) == Some(&b',') {
        span.end += 1;
    }
    span
}

/// Strip leading blank lines and the block's common indentation, keeping
/// relative indentation intact.
fn dedent_block(text: &str) -> String {
    let lines: Vec<&str> = text
        .lines()
        .skip_while(|line| line.trim().is_empty())
        .collect();
    let common = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);
    lines
        .iter()
        .map(|line| if line.len() >= common { &line[common..] } else { line.trim_start() })
        .collect::<Vec<_>>()
        .join("\n")
}
