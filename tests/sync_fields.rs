//! Integration tests for the declarative -> typed direction.
//!
//! These run the whole pipeline against the testdata fixture: parse,
//! descriptor build, rendering, splice, and batch application.

use std::path::PathBuf;

use propsync::apply::apply_edits;
use propsync::{update_fields, LineIndex, SyncConfig};

fn fixture() -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata/task_list.ts");
    std::fs::read_to_string(path).expect("should read fixture")
}

fn run() -> (String, usize) {
    let source = fixture();
    let config = SyncConfig::default();
    let outcome = update_fields(&source, &config).expect("pass should succeed");
    let index = LineIndex::new(&source, config.eol_for(&source));
    let updated = apply_edits(&source, &outcome.edits, &index);
    (updated, outcome.properties)
}

#[test]
fn processes_every_declarative_entry() {
    let (_, properties) = run();
    assert_eq!(properties, 8);
}

#[test]
fn generates_a_field_for_each_entry() {
    let (updated, _) = run();
    for field in [
        "_statusMessage!: string;",
        "_tasksForBoard!: Itask[];",
        "archived!: boolean;",
        "boardId!: number;",
        "dense!: boolean;",
        "draft_title!: string;",
        "due_label!: string;",
        "owner_name!: string;",
    ] {
        assert!(updated.contains(field), "missing {:?} in:\n{}", field, updated);
    }
}

#[test]
fn fields_come_out_name_sorted() {
    let (updated, _) = run();
    let order = [
        "_statusMessage!:",
        "_tasksForBoard!:",
        "archived!:",
        "boardId!:",
        "dense!:",
        "draft_title!:",
        "due_label!:",
        "owner_name!:",
    ];
    let positions: Vec<usize> = order
        .iter()
        .map(|needle| updated.find(needle).expect(needle))
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn pairing_comments_carry_the_behavior_terms() {
    let (updated, _) = run();
    assert!(updated.contains("// @propsync { value: \"\", notify: true }"));
    assert!(updated
        .contains("// @propsync { value: 0, notify: true, observer: \"_boardIdObserver\" }"));
    assert!(updated.contains(
        "// @propsync { value: () => { return []; }, notify: true, observer: \"_tasksChanged\" }"
    ));
}

#[test]
fn surviving_doc_comment_gains_the_pairing_line() {
    let (updated, _) = run();
    let field_at = updated.find("dense!: boolean;").unwrap();
    let head = &updated[..field_at];
    let comment_at = head.rfind("/**").unwrap();
    let comment = &updated[comment_at..field_at];
    assert!(comment.contains("compact row height"));
    assert!(comment.contains("* @propsync { value: false, reflectToAttribute: true }"));
}

#[test]
fn matched_fields_are_replaced_not_duplicated() {
    let (updated, _) = run();
    assert_eq!(updated.matches("draft_title!: string;").count(), 1);
    assert_eq!(updated.matches("boardId!: number;").count(), 1);
    assert_eq!(updated.matches("_tasksForBoard!:").count(), 1);
}

#[test]
fn explicit_type_annotation_becomes_the_field_type() {
    let (updated, _) = run();
    // The @type tag is now expressed structurally; it must not survive as
    // a comment on the generated field.
    assert!(updated.contains("_tasksForBoard!: Itask[];"));
    let field_at = updated.find("_tasksForBoard!:").unwrap();
    let comment_at = updated[..field_at].rfind("// @propsync").unwrap();
    assert!(!updated[comment_at..field_at].contains("@type"));
}

#[test]
fn unmarked_declarations_survive_untouched() {
    let (updated, _) = run();
    assert!(updated.contains("localCounter: number;"));
    assert!(updated.contains("selected!: Itask;"));
    assert!(updated.contains("filterState!: any;"));
    assert!(updated.contains("static get properties()"));
}

#[test]
fn declarative_block_is_left_alone() {
    let source = fixture();
    let (updated, _) = run();
    let block_start = source.find("static get properties()").unwrap();
    let block_end = source[block_start..].find("\n  }").unwrap() + block_start;
    let original_block = &source[block_start..block_end];
    assert!(updated.contains(original_block));
}
