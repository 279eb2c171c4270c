//! Declarative -> typed descriptor construction.

use crate::coerce;
use crate::descriptor::{push_descriptor, PropertyDescriptor};
use crate::doc_comment::{self, DocComment};
use crate::generate;
use crate::syntax::query::find_with;
use crate::syntax::{NodeKind, SourceNode, SourceTree};

use super::extract;
use super::normalize_expr;

/// Build the descriptor list for a declarative -> typed pass.
///
/// Each raw declarative entry yields one descriptor; entries whose name
/// matches a marked typed field record that field's span as the existing
/// target to replace.
pub fn build(
    tree: &SourceTree,
    entries: &[&SourceNode],
    fields: &[&SourceNode],
) -> Vec<PropertyDescriptor> {
    let mut result = Vec::new();
    for entry in entries {
        let name = extract::entry_name(tree, entry);
        if name.is_empty() {
            continue;
        }
        let mut descriptor = build_one(tree, entry, &name);

        if let Some(field) = fields
            .iter()
            .find(|f| extract::field_name(tree, f).as_deref() == Some(name.as_str()))
        {
            let mut span = field.full_span();
            // A separate trailing semicolon token is consumed with the field.
            if tree.source.as_bytes().get(span.end) == Some(&b';') {
                span.end += 1;
            }
            descriptor.existing_target = Some(span);
        }

        push_descriptor(&mut result, descriptor);
    }
    result
}

fn build_one(tree: &SourceTree, entry: &SourceNode, name: &str) -> PropertyDescriptor {
    let source = &tree.source;
    let mut descriptor = PropertyDescriptor::new(name, entry.full_span());

    let value_node = extract::pair_value_node(entry);
    let nested = value_node.map(|v| v.kind == NodeKind::ObjectLiteral).unwrap_or(false);

    if nested {
        descriptor.declared_type =
            find_with(entry, source, NodeKind::Pair, "type:", false, true)
                .and_then(extract::pair_value_node)
                .map(|v| v.text(source).trim().to_string())
                .unwrap_or_else(|| "String".to_string());
        descriptor.terms.value = term_text(tree, entry, "value");
        descriptor.terms.reflect_to_attribute = term_text(tree, entry, "reflectToAttribute");
        descriptor.terms.read_only = term_text(tree, entry, "readOnly");
        descriptor.terms.notify = term_text(tree, entry, "notify");
        descriptor.terms.computed = term_text(tree, entry, "computed");
        descriptor.terms.observer = term_text(tree, entry, "observer");
    } else {
        descriptor.declared_type = value_node
            .map(|v| v.text(source).trim().to_string())
            .unwrap_or_default();
    }

    let trivia = entry.leading_trivia(source);
    descriptor.type_comment = doc_comment::type_annotation(trivia).unwrap_or_default();
    descriptor.field_type = if descriptor.type_comment.is_empty() {
        coerce::field_type_for(&descriptor.declared_type).to_string()
    } else {
        descriptor.type_comment.clone()
    };

    // The explicit type tag becomes redundant once the field's own static
    // type expresses it; the pairing annotation moves into the comment.
    if let Some(doc) = DocComment::parse(trivia) {
        let mut working = doc;
        if working.has_type_tag() {
            working = working.without_type_tag();
        }
        if working.has_pair_tag() {
            working = working.without_pair_tag();
        }
        if !working.target_text.is_empty() && !working.is_empty() {
            let annotation = generate::pairing_annotation(&descriptor.terms);
            descriptor.doc = Some(working.with_line_before_close(&annotation));
        }
    }

    descriptor
}

/// A behavior term's raw value text inside a nested entry, collapsed to a
/// single line.
fn term_text(tree: &SourceTree, entry: &SourceNode, term: &str) -> String {
    let needle = format!("{}:", term);
    find_with(entry, &tree.source, NodeKind::Pair, &needle, false, true)
        .and_then(extract::pair_value_node)
        .map(|v| normalize_expr(v.text(&tree.source)))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::parse_source;

    const SOURCE: &str = r#"
class TaskList {
  // @propsync
  boardId!: number;

  static get properties() {
    return {
      boardId: {
        type: Number,
        value: 0,
        notify: true,
        observer: "_boardIdObserver"
      },
      draft_title: String,
      /**
       * @type {Itask[]}
       */
      _tasksForBoard: {
        type: Array,
        value: () => {
          return [];
        },
        notify: true
      }
    };
  }
}
"#;

    fn descriptors() -> Vec<PropertyDescriptor> {
        let tree = parse_source(SOURCE).unwrap();
        let class = extract::class_node(&tree).unwrap();
        let body = extract::class_body(&tree, class).unwrap();
        let accessor = extract::properties_accessor(&tree, class).unwrap();
        let literal = extract::properties_literal(&tree, accessor).unwrap();
        let entries = extract::declarative_entries(literal);
        let fields = extract::marked_fields(&tree, body);
        build(&tree, &entries, &fields)
    }

    #[test]
    fn derives_types_and_terms_from_a_nested_entry() {
        let built = descriptors();
        let board = built.iter().find(|d| d.name == "boardId").unwrap();
        assert_eq!(board.declared_type, "Number");
        assert_eq!(board.field_type, "number");
        assert_eq!(board.terms.value, "0");
        assert_eq!(board.terms.notify, "true");
        assert_eq!(board.terms.observer, "\"_boardIdObserver\"");
        assert!(board.is_extended());
    }

    #[test]
    fn scalar_entries_stay_bare() {
        let built = descriptors();
        let title = built.iter().find(|d| d.name == "draft_title").unwrap();
        assert_eq!(title.declared_type, "String");
        assert_eq!(title.field_type, "string");
        assert!(!title.is_extended());
        assert!(title.is_new());
    }

    #[test]
    fn explicit_annotation_overrides_the_table() {
        let built = descriptors();
        let tasks = built.iter().find(|d| d.name == "_tasksForBoard").unwrap();
        assert_eq!(tasks.type_comment, "Itask[]");
        assert_eq!(tasks.field_type, "Itask[]");
        // Multi-line initializer collapsed to one comment-safe line.
        assert_eq!(tasks.terms.value, "() => { return []; }");
    }

    #[test]
    fn matching_is_by_exact_name() {
        let built = descriptors();
        let board = built.iter().find(|d| d.name == "boardId").unwrap();
        assert!(!board.is_new());
        assert!(board.existing_target.unwrap().start > 0);

        let new_count = built.iter().filter(|d| d.is_new()).count();
        assert_eq!(new_count, 2);
    }

    #[test]
    fn emptied_doc_comment_is_dropped() {
        let built = descriptors();
        let tasks = built.iter().find(|d| d.name == "_tasksForBoard").unwrap();
        // The only doc line was the type tag, now expressed by the field.
        assert!(tasks.doc.is_none());
    }
}
