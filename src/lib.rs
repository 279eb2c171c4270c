//! Propsync - bidirectional property-declaration synchronizer.
//!
//! A component source file declares the same set of properties twice: once
//! in a declarative mapping literal consumed by the runtime framework
//! (`static get properties() { ... }`) and once as statically-typed class
//! fields for compile-time checking and editor tooling. Propsync lets
//! engineers edit either form and mechanically regenerate the other,
//! preserving hand-authored documentation and existing textual positions
//! so diffs stay minimal.
//!
//! # Architecture
//!
//! One pass is a single synchronous pipeline over a fresh parse:
//!
//! - `syntax`: kind-tagged source tree (tree-sitter) and pre-order search
//! - `coerce`: declarative <-> typed type coercion tables
//! - `doc_comment`: doc-comment tag extraction and immutable rewrites
//! - `descriptor`: the unified per-property record
//! - `sync`: the two directional builds and the raw-declaration extractors
//! - `generate`: name-sorted rendering of either declaration form
//! - `splice`: offset/position projection and edit-batch construction
//! - `apply`: batch application (the injected host capability)
//! - `template`: element-id cross-reference for embedded markup templates

pub mod apply;
pub mod cli;
pub mod coerce;
pub mod config;
pub mod descriptor;
pub mod doc_comment;
pub mod generate;
pub mod report;
pub mod splice;
pub mod sync;
pub mod syntax;
pub mod template;

pub use config::{Layout, SyncConfig};
pub use descriptor::{BehaviorTerms, PropertyDescriptor};
pub use doc_comment::DocComment;
pub use splice::{Edit, LineIndex, TextPosition, TextRange};
pub use sync::{update_fields, update_properties, SyncError, SyncOutcome};
pub use syntax::{parse_source, NodeKind, SourceNode, SourceTree, Span};
