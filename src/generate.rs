//! Rendering of a descriptor list into the textual form of either
//! declaration style.
//!
//! Output is name-sorted, so identical descriptor state always renders
//! byte-identical text regardless of construction order.

use crate::config::Layout;
use crate::descriptor::{BehaviorTerms, PropertyDescriptor, TERM_ORDER};
use crate::doc_comment::PAIR_MARKER;

/// The pairing annotation for one property: the bare marker, or the marker
/// plus the non-empty behavior terms in their fixed order.
pub fn pairing_annotation(terms: &BehaviorTerms) -> String {
    let mut out = String::from(PAIR_MARKER);
    if !terms.is_empty() {
        out.push_str(" {");
        let mut delim = " ";
        for (name, get) in TERM_ORDER {
            let value = get(terms);
            if !value.is_empty() {
                out.push_str(delim);
                out.push_str(name);
                out.push_str(": ");
                out.push_str(value);
                delim = ", ";
            }
        }
        out.push_str(" }");
    }
    out
}

/// Render the typed-field form of a descriptor list.
pub fn render_fields(descriptors: &[PropertyDescriptor], layout: &Layout) -> String {
    let eol = layout.eol;
    let indent = layout.indent(1);
    let mut out = format!("{eol}{eol}");

    for descriptor in sorted(descriptors) {
        match &descriptor.doc {
            Some(doc) => {
                let doc = doc.reindented(&indent);
                for (i, line) in doc.target_lines().enumerate() {
                    if i == 0 {
                        out.push_str(&indent);
                    }
                    out.push_str(line);
                    out.push_str(eol);
                }
            }
            None => {
                out.push_str(&indent);
                out.push_str("// ");
                out.push_str(&pairing_annotation(&descriptor.terms));
                out.push_str(eol);
            }
        }
        out.push_str(&format!(
            "{indent}{}!: {};{eol}",
            descriptor.name, descriptor.field_type
        ));
    }
    out
}

/// Render the declarative form of a descriptor list.
pub fn render_properties(descriptors: &[PropertyDescriptor], layout: &Layout) -> String {
    let eol = layout.eol;
    let entry_indent = layout.indent(3);
    let term_indent = layout.indent(4);
    let mut out = format!("{eol}{eol}");

    for descriptor in sorted(descriptors) {
        if let Some(text) = &descriptor.preserved_text {
            let lines: Vec<&str> = text.lines().collect();
            for (i, line) in lines.iter().enumerate() {
                if !line.trim().is_empty() {
                    out.push_str(&entry_indent);
                    out.push_str(line);
                }
                if i + 1 == lines.len() {
                    out.push(',');
                }
                out.push_str(eol);
            }
            continue;
        }

        if let Some(doc) = &descriptor.doc {
            let doc = doc.reindented(&entry_indent);
            for (i, line) in doc.target_lines().enumerate() {
                if i == 0 {
                    out.push_str(&entry_indent);
                }
                out.push_str(line);
                out.push_str(eol);
            }
        } else if !descriptor.type_comment.is_empty()
            && matches!(descriptor.declared_type.as_str(), "Array" | "Object")
        {
            out.push_str(&format!(
                "{entry_indent}/** @type {{{}}} */{eol}",
                descriptor.type_comment
            ));
        }

        if !descriptor.is_extended() {
            out.push_str(&format!(
                "{entry_indent}{}: {},{eol}",
                descriptor.name, descriptor.declared_type
            ));
        } else {
            out.push_str(&format!("{entry_indent}{}: {{{eol}", descriptor.name));
            let mut inner = vec![format!("{term_indent}type: {}", descriptor.declared_type)];
            for (name, get) in TERM_ORDER {
                let value = get(&descriptor.terms);
                if !value.is_empty() {
                    inner.push(format!("{term_indent}{}: {}", name, value));
                }
            }
            out.push_str(&inner.join(&format!(",{eol}")));
            out.push_str(eol);
            out.push_str(&format!("{entry_indent}}},{eol}"));
        }
    }
    out
}

fn sorted(descriptors: &[PropertyDescriptor]) -> Vec<&PropertyDescriptor> {
    let mut refs: Vec<&PropertyDescriptor> = descriptors.iter().collect();
    refs.sort_by(|a, b| a.name.cmp(&b.name));
    refs
}
