#![forbid(unsafe_code)]

//! Layout configuration as data.
//!
//! A [`LayoutConfig`] describes one panel arrangement: the area template,
//! optional explicit track lists, and the splitter size. With the
//! `layout-config` feature it can be loaded from TOML or JSON:
//!
//! ```toml
//! template = """
//! "a b"
//! "a c"
//! """
//! grid_template_columns = "2fr 1fr"
//! splitter_size = "4px"
//! ```
//!
//! `template` is required. Omitted track lists default to `1fr` per grid
//! column/row and an omitted `splitter_size` to [`DEFAULT_SPLITTER_SIZE`].
//! Unknown keys are rejected, so a misspelled field is a load error rather
//! than a silently ignored one.

#[cfg(feature = "layout-config")]
use std::fmt;
#[cfg(feature = "layout-config")]
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::template::AreaGrid;
use crate::tracks::track_count;

/// Splitter size used when none is configured.
pub const DEFAULT_SPLITTER_SIZE: &str = "4px";

/// One panel arrangement.
///
/// The default config has an empty template, which [`validate`](Self::validate)
/// reports; it exists as a base for the builder methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    /// `grid-template-areas` string.
    pub template: String,
    /// Explicit `grid-template-columns`, one track per grid column.
    #[serde(default)]
    pub grid_template_columns: Option<String>,
    /// Explicit `grid-template-rows`, one track per grid row.
    #[serde(default)]
    pub grid_template_rows: Option<String>,
    /// Size token inserted between tracks.
    #[serde(default = "default_splitter_size")]
    pub splitter_size: String,
}

fn default_splitter_size() -> String {
    DEFAULT_SPLITTER_SIZE.to_owned()
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            template: String::new(),
            grid_template_columns: None,
            grid_template_rows: None,
            splitter_size: default_splitter_size(),
        }
    }
}

impl LayoutConfig {
    /// Config for `template` with default tracks and splitter size.
    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_columns(mut self, columns: impl Into<String>) -> Self {
        self.grid_template_columns = Some(columns.into());
        self
    }

    #[must_use]
    pub fn with_rows(mut self, rows: impl Into<String>) -> Self {
        self.grid_template_rows = Some(rows.into());
        self
    }

    #[must_use]
    pub fn with_splitter_size(mut self, size: impl Into<String>) -> Self {
        self.splitter_size = size.into();
        self
    }

    /// Load from a TOML string.
    #[cfg(feature = "layout-config")]
    pub fn from_toml_str(s: &str) -> Result<Self, LayoutConfigError> {
        toml::from_str(s).map_err(LayoutConfigError::Toml)
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "layout-config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, LayoutConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(LayoutConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "layout-config")]
    pub fn from_json_str(s: &str) -> Result<Self, LayoutConfigError> {
        serde_json::from_str(s).map_err(LayoutConfigError::Json)
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "layout-config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, LayoutConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(LayoutConfigError::Io)?;
        Self::from_json_str(&content)
    }

    /// Check the configuration without building a layout.
    ///
    /// Returns a list of problems. An empty list means the config is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.splitter_size.trim().is_empty() {
            errors.push("splitter_size must not be empty".into());
        }

        let grid = match AreaGrid::parse(&self.template) {
            Ok(grid) => grid,
            Err(e) => {
                errors.push(format!("template: {e}"));
                return errors;
            }
        };
        if grid.is_empty() {
            errors.push("template must contain at least one row".into());
        }

        if let Some(columns) = &self.grid_template_columns {
            let found = track_count(columns);
            if found != grid.cols() {
                errors.push(format!(
                    "grid_template_columns has {found} tracks, template has {} columns",
                    grid.cols()
                ));
            }
        }
        if let Some(rows) = &self.grid_template_rows {
            let found = track_count(rows);
            if found != grid.rows() {
                errors.push(format!(
                    "grid_template_rows has {found} tracks, template has {} rows",
                    grid.rows()
                ));
            }
        }

        errors
    }
}

/// Errors from loading a [`LayoutConfig`].
#[cfg(feature = "layout-config")]
#[derive(Debug)]
pub enum LayoutConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    Toml(toml::de::Error),
    /// JSON parse error.
    Json(serde_json::Error),
}

#[cfg(feature = "layout-config")]
impl fmt::Display for LayoutConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "layout config I/O error: {e}"),
            Self::Toml(e) => write!(f, "layout config TOML error: {e}"),
            Self::Json(e) => write!(f, "layout config JSON error: {e}"),
        }
    }
}

#[cfg(feature = "layout-config")]
impl std::error::Error for LayoutConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Toml(e) => Some(e),
            Self::Json(e) => Some(e),
        }
    }
}
