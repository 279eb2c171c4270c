//! Configuration for a synchronization pass.
//!
//! The engine itself only consumes a resolved `Layout` (line ending plus
//! indentation unit); `SyncConfig` is the YAML-backed host configuration
//! the CLI discovers next to the edited file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file names searched for next to the target file.
pub const DEFAULT_CONFIG_NAMES: &[&str] = &["propsync.yaml", ".propsync.yaml"];

/// Line-ending preference. `Auto` inspects the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Auto,
    Lf,
    Crlf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndentStyle {
    #[default]
    Spaces,
    Tabs,
}

/// Indentation unit: a fixed tab glyph or N spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct IndentConfig {
    #[serde(default)]
    pub style: IndentStyle,
    #[serde(default = "default_indent_width")]
    pub width: usize,
}

fn default_indent_width() -> usize {
    2
}

impl Default for IndentConfig {
    fn default() -> Self {
        Self {
            style: IndentStyle::Spaces,
            width: default_indent_width(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SyncConfig {
    #[serde(default)]
    pub line_ending: LineEnding,
    #[serde(default)]
    pub indent: IndentConfig,
}

impl SyncConfig {
    /// Parse a config from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SyncConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// The line ending to use for `source`.
    pub fn eol_for(&self, source: &str) -> &'static str {
        match self.line_ending {
            LineEnding::Lf => "\n",
            LineEnding::Crlf => "\r\n",
            LineEnding::Auto => {
                if source.contains("\r\n") {
                    "\r\n"
                } else {
                    "\n"
                }
            }
        }
    }

    /// One indentation unit.
    pub fn indent_unit(&self) -> String {
        match self.indent.style {
            IndentStyle::Tabs => "\t".to_string(),
            IndentStyle::Spaces => " ".repeat(self.indent.width),
        }
    }
}

/// Discover a config file next to `target`, falling back to defaults when
/// none exists.
pub fn discover(target: &Path) -> Option<PathBuf> {
    let dir = target.parent().filter(|p| !p.as_os_str().is_empty());
    for name in DEFAULT_CONFIG_NAMES {
        let candidate = match dir {
            Some(d) => d.join(name),
            None => PathBuf::from(name),
        };
        if candidate.exists() {
            return Some(candidate);
        }
    }
    None
}

/// The resolved text layout a pass renders against.
#[derive(Debug, Clone)]
pub struct Layout {
    pub eol: &'static str,
    indent_unit: String,
}

impl Layout {
    pub fn resolve(config: &SyncConfig, source: &str) -> Self {
        Self {
            eol: config.eol_for(source),
            indent_unit: config.indent_unit(),
        }
    }

    /// Indentation for `level` nesting levels.
    pub fn indent(&self, level: usize) -> String {
        self.indent_unit.repeat(level)
    }
}
