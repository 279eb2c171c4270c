//! Command-line interface for propsync.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::apply;
use crate::config::{self, SyncConfig};
use crate::report;
use crate::splice::LineIndex;
use crate::sync::{self, SyncError, SyncOutcome};
use crate::template;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Keep declarative component property blocks and typed class fields in
/// sync.
///
/// Propsync locates the declarative `static get properties()` block and
/// the `@propsync`-marked class fields of one component source file and
/// regenerates either form from the other, preserving hand-authored
/// documentation and keeping diffs minimal.
#[derive(Parser)]
#[command(name = "propsync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Regenerate typed class fields from the declarative property block
    Fields(SyncArgs),
    /// Regenerate the declarative property block from typed class fields
    #[command(visible_alias = "props")]
    Properties(SyncArgs),
    /// List template element ids with their DOM interface types
    Ids(IdsArgs),
    /// Create a propsync configuration file from the default template
    Init(InitArgs),
}

/// Arguments shared by both synchronization directions.
#[derive(Parser)]
pub struct SyncArgs {
    /// Component source file (.ts)
    pub file: PathBuf,

    /// Path to a config YAML file (default: auto-discover)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format: pretty or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// Compute and report the edit batch without writing the file
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the ids command.
#[derive(Parser)]
pub struct IdsArgs {
    /// Component source file (.ts)
    pub file: PathBuf,
}

/// Arguments for the init command.
#[derive(Parser)]
pub struct InitArgs {
    /// Output file path
    #[arg(short, long, default_value = "propsync.yaml")]
    pub output: PathBuf,
}

/// The default configuration template written by `init`.
static CONFIG_TEMPLATE: &str = include_str!("templates/propsync.yaml");

/// Which direction a sync command runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Fields,
    Properties,
}

impl Direction {
    fn label(self) -> &'static str {
        match self {
            Direction::Fields => "typed fields",
            Direction::Properties => "declarative properties",
        }
    }
}

/// Load config: explicit path, discovered file, or defaults.
fn load_config(explicit: Option<&Path>, target: &Path) -> anyhow::Result<SyncConfig> {
    if let Some(path) = explicit {
        return SyncConfig::parse_file(path);
    }
    match config::discover(target) {
        Some(path) => SyncConfig::parse_file(&path),
        None => Ok(SyncConfig::default()),
    }
}

/// Run one synchronization command.
pub fn run_sync(args: &SyncArgs, direction: Direction) -> anyhow::Result<i32> {
    if args.format != "pretty" && args.format != "json" {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty' or 'json'",
            args.format
        );
        return Ok(EXIT_ERROR);
    }

    if args.file.extension().and_then(|e| e.to_str()) != Some("ts") {
        eprintln!("Error: not a typescript document: {}", args.file.display());
        return Ok(EXIT_ERROR);
    }

    let source = match std::fs::read_to_string(&args.file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: cannot read {}: {}", args.file.display(), e);
            return Ok(EXIT_ERROR);
        }
    };

    let config = load_config(args.config.as_deref(), &args.file)?;

    let result = match direction {
        Direction::Fields => sync::update_fields(&source, &config),
        Direction::Properties => sync::update_properties(&source, &config),
    };

    let outcome: SyncOutcome = match result {
        Ok(outcome) => outcome,
        Err(SyncError::Parse(e)) => {
            eprintln!("Error: {}", e);
            return Ok(EXIT_ERROR);
        }
        Err(e) => {
            // Not-found conditions: abort the command, touch nothing.
            eprintln!("{}", e);
            return Ok(EXIT_FAILED);
        }
    };

    let applied = !args.dry_run;
    if applied {
        let index = LineIndex::new(&source, config.eol_for(&source));
        let updated = apply::apply_edits(&source, &outcome.edits, &index);
        std::fs::write(&args.file, updated)?;
    }

    let file = args.file.to_string_lossy();
    match args.format.as_str() {
        "json" => report::write_json(&file, direction.label(), &outcome, applied)?,
        _ => report::write_pretty(&file, direction.label(), &outcome, applied),
    }

    Ok(EXIT_SUCCESS)
}

/// Run the ids command.
pub fn run_ids(args: &IdsArgs) -> anyhow::Result<i32> {
    let source = match std::fs::read_to_string(&args.file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: cannot read {}: {}", args.file.display(), e);
            return Ok(EXIT_ERROR);
        }
    };

    let tree = match crate::syntax::parse_source(&source) {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(EXIT_ERROR);
        }
    };

    let template_text = crate::sync::extract::class_node(&tree)
        .and_then(|class| {
            crate::syntax::query::find(
                class,
                &tree.source,
                crate::syntax::NodeKind::MethodDefinition,
                "static get template()",
            )
        })
        .map(|node| node.text(&tree.source));

    let Some(template_text) = template_text else {
        eprintln!("template accessor not found");
        return Ok(EXIT_FAILED);
    };

    let elements = template::parse_template_for_ids(template_text);
    if elements.is_empty() {
        println!("no element ids found");
        return Ok(EXIT_SUCCESS);
    }
    for element in &elements {
        println!("{:<24} <{}> {}", element.id, element.tag, element.class_name);
    }
    Ok(EXIT_SUCCESS)
}

/// Run the init command.
pub fn run_init(args: &InitArgs) -> anyhow::Result<i32> {
    if args.output.exists() {
        eprintln!("Error: file already exists: {}", args.output.display());
        return Ok(EXIT_ERROR);
    }
    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() && parent != Path::new(".") {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(&args.output, CONFIG_TEMPLATE)?;
    println!("Created {}", args.output.display());
    Ok(EXIT_SUCCESS)
}
