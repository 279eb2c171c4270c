//! The unified per-property record reconciling both declaration forms.

use crate::doc_comment::DocComment;
use crate::syntax::Span;

/// The six optional behavior terms of a declarative entry, each held as
/// raw un-parsed source text (empty when absent).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BehaviorTerms {
    pub value: String,
    pub reflect_to_attribute: String,
    pub read_only: String,
    pub notify: String,
    pub computed: String,
    pub observer: String,
}

impl BehaviorTerms {
    /// True iff every term is empty.
    pub fn is_empty(&self) -> bool {
        TERM_ORDER.iter().all(|(_, get)| get(self).is_empty())
    }
}

pub type TermAccessor = for<'a> fn(&'a BehaviorTerms) -> &'a str;

/// The terms in their fixed rendering order, paired with their declarative
/// key names. Generation and comment assembly iterate this list; nothing
/// looks fields up dynamically.
pub const TERM_ORDER: &[(&str, TermAccessor)] = &[
    ("value", term_value),
    ("reflectToAttribute", term_reflect),
    ("readOnly", term_read_only),
    ("notify", term_notify),
    ("computed", term_computed),
    ("observer", term_observer),
];

fn term_value(t: &BehaviorTerms) -> &str {
    &t.value
}
fn term_reflect(t: &BehaviorTerms) -> &str {
    &t.reflect_to_attribute
}
fn term_read_only(t: &BehaviorTerms) -> &str {
    &t.read_only
}
fn term_notify(t: &BehaviorTerms) -> &str {
    &t.notify
}
fn term_computed(t: &BehaviorTerms) -> &str {
    &t.computed
}
fn term_observer(t: &BehaviorTerms) -> &str {
    &t.observer
}

/// One logical property, regardless of which form it came from.
///
/// Descriptors are created fresh for every synchronization pass, mutated
/// only during the build, then consumed once by the generator and the
/// splice engine.
#[derive(Debug, Clone)]
pub struct PropertyDescriptor {
    /// Identifier, unique within one pass (collisions are last-write-wins
    /// by declaration order).
    pub name: String,
    /// The type name as written in whichever form drove creation.
    pub declared_type: String,
    /// The statically-typed field type to emit.
    pub field_type: String,
    /// Explicit type override text, empty if none.
    pub type_comment: String,
    pub terms: BehaviorTerms,
    pub doc: Option<DocComment>,
    /// Span of the declaration to replace/remove in the target form;
    /// `None` while no counterpart exists.
    pub existing_target: Option<Span>,
    /// Span of the declaration that produced this descriptor.
    pub source_span: Span,
    /// Original text for entries preserved verbatim by the
    /// unmatched-declarative recovery pass.
    pub preserved_text: Option<String>,
}

impl PropertyDescriptor {
    pub fn new(name: impl Into<String>, source_span: Span) -> Self {
        Self {
            name: name.into(),
            declared_type: String::new(),
            field_type: String::new(),
            type_comment: String::new(),
            terms: BehaviorTerms::default(),
            doc: None,
            existing_target: None,
            source_span,
            preserved_text: None,
        }
    }

    /// True iff no counterpart declaration exists in the opposite form.
    pub fn is_new(&self) -> bool {
        self.existing_target.is_none()
    }

    /// True iff any behavior term is non-empty; decides whether the
    /// declarative form renders as a bare type or a nested options object.
    pub fn is_extended(&self) -> bool {
        !self.terms.is_empty()
    }
}

/// Insert a descriptor into a build list, replacing any earlier descriptor
/// with the same name.
pub fn push_descriptor(list: &mut Vec<PropertyDescriptor>, descriptor: PropertyDescriptor) {
    match list.iter().position(|d| d.name == descriptor.name) {
        Some(i) => list[i] = descriptor,
        None => list.push(descriptor),
    }
}
