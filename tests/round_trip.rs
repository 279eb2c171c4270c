//! Round-trip and symmetry properties of the two directions.

use std::collections::BTreeMap;
use std::path::PathBuf;

use propsync::apply::apply_edits;
use propsync::sync::{extract, fields, properties};
use propsync::{parse_source, update_fields, update_properties, LineIndex, SyncConfig};

fn fixture() -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata/task_list.ts");
    std::fs::read_to_string(path).expect("should read fixture")
}

fn apply_pass(
    source: &str,
    pass: fn(&str, &SyncConfig) -> Result<propsync::SyncOutcome, propsync::SyncError>,
) -> String {
    let config = SyncConfig::default();
    let outcome = pass(source, &config).expect("pass should succeed");
    let index = LineIndex::new(source, config.eol_for(source));
    apply_edits(source, &outcome.edits, &index)
}

/// The declarative state of a document: per property, the declared type
/// and the six behavior terms, as the fields-direction build derives them.
fn declarative_state(source: &str) -> BTreeMap<String, (String, propsync::BehaviorTerms)> {
    let tree = parse_source(source).unwrap();
    let class = extract::class_node(&tree).unwrap();
    let body = extract::class_body(&tree, class).unwrap();
    let accessor = extract::properties_accessor(&tree, class).unwrap();
    let literal = extract::properties_literal(&tree, accessor).unwrap();
    let entries = extract::declarative_entries(literal);
    let marked = extract::marked_fields(&tree, body);

    fields::build(&tree, &entries, &marked)
        .into_iter()
        .map(|d| (d.name, (d.declared_type, d.terms)))
        .collect()
}

#[test]
fn fields_then_properties_reproduces_the_declarative_state() {
    let original = fixture();
    let with_fields = apply_pass(&original, update_fields);
    let round_tripped = apply_pass(&with_fields, update_properties);

    let before = declarative_state(&original);
    let after = declarative_state(&round_tripped);

    for (name, (declared_type, terms)) in &before {
        let (rt_type, rt_terms) = after
            .get(name)
            .unwrap_or_else(|| panic!("{} lost in round trip", name));
        assert_eq!(rt_type, declared_type, "declared type drifted for {}", name);
        assert_eq!(rt_terms, terms, "behavior terms drifted for {}", name);
    }
}

#[test]
fn round_tripped_document_still_parses_cleanly() {
    let original = fixture();
    let with_fields = apply_pass(&original, update_fields);
    let round_tripped = apply_pass(&with_fields, update_properties);

    let tree = parse_source(&round_tripped).unwrap();
    assert!(!tree.has_errors, "round trip broke the document:\n{}", round_tripped);
}

#[test]
fn matching_is_symmetric_across_directions() {
    let source = fixture();
    let tree = parse_source(&source).unwrap();
    let class = extract::class_node(&tree).unwrap();
    let body = extract::class_body(&tree, class).unwrap();
    let accessor = extract::properties_accessor(&tree, class).unwrap();
    let literal = extract::properties_literal(&tree, accessor).unwrap();
    let entries = extract::declarative_entries(literal);
    let marked = extract::marked_fields(&tree, body);

    let to_fields = fields::build(&tree, &entries, &marked);
    let to_properties = properties::build(&tree, &marked, &entries);

    let shared = ["draft_title", "boardId", "_tasksForBoard"];
    for name in shared {
        let a = to_fields.iter().find(|d| d.name == name).unwrap();
        let b = to_properties.iter().find(|d| d.name == name).unwrap();
        assert!(!a.is_new(), "{} should match in fields direction", name);
        assert!(!b.is_new(), "{} should match in properties direction", name);
        assert!(a.existing_target.unwrap().start > 0);
        assert!(b.existing_target.unwrap().start > 0);
    }

    // Present only in the declarative form.
    for name in ["owner_name", "due_label", "archived", "dense", "_statusMessage"] {
        let a = to_fields.iter().find(|d| d.name == name).unwrap();
        assert!(a.is_new(), "{} has no typed counterpart", name);
    }

    // Present only in the typed form.
    for name in ["selected", "filterState"] {
        let b = to_properties.iter().find(|d| d.name == name).unwrap();
        assert!(b.is_new(), "{} has no declarative counterpart", name);
    }
}

#[test]
fn a_second_fields_pass_is_stable() {
    let original = fixture();
    let once = apply_pass(&original, update_fields);
    let twice = apply_pass(&once, update_fields);
    assert_eq!(once, twice);
}
