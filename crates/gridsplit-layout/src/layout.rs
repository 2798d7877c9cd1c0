#![forbid(unsafe_code)]

//! End-to-end split layout for one [`LayoutConfig`].
//!
//! [`SplitLayout::build`] runs the whole pipeline: parse the template,
//! extract area lines, move them into split space, compute gutters, and
//! splice the splitter size into both track lists. The result serializes to
//! the JSON shape the panel and splitter renderers consume.

use std::fmt;

use serde::Serialize;

use crate::areas::{AreaMap, SplitSpaceOverflow, extract_areas, transform_areas};
use crate::config::LayoutConfig;
use crate::gutter::{GutterSet, compute_gutters};
use crate::template::{AreaGrid, TemplateError};
use crate::tracks::{insert_track_size, repeat_track, track_count};

/// Track used for columns/rows the config leaves unspecified.
pub const DEFAULT_TRACK: &str = "1fr";

/// A fully computed layout with splitter tracks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitLayout {
    /// The validated template.
    pub grid: AreaGrid,
    /// Area lines before splitters are inserted.
    pub areas: AreaMap,
    /// Area lines in split space; use these for panel placement.
    pub split_areas: AreaMap,
    pub gutters: GutterSet,
    /// Column tracks with the splitter size interleaved.
    pub grid_template_columns: String,
    /// Row tracks with the splitter size interleaved.
    pub grid_template_rows: String,
}

impl SplitLayout {
    /// Build the layout described by `config`.
    pub fn build(config: &LayoutConfig) -> Result<Self, LayoutError> {
        let _span = tracing::debug_span!("gridsplit.layout.build").entered();

        let grid = AreaGrid::parse(&config.template)?;

        let columns = resolve_tracks(
            config.grid_template_columns.as_deref(),
            grid.cols(),
            TrackAxis::Columns,
        )?;
        let rows = resolve_tracks(
            config.grid_template_rows.as_deref(),
            grid.rows(),
            TrackAxis::Rows,
        )?;

        let areas = extract_areas(&grid);
        let split_areas = transform_areas(&areas)?;
        let gutters = compute_gutters(&grid);

        tracing::debug!(
            areas = areas.len(),
            gutters = gutters.len(),
            "built split layout"
        );

        Ok(Self {
            grid_template_columns: insert_track_size(&columns, &config.splitter_size),
            grid_template_rows: insert_track_size(&rows, &config.splitter_size),
            grid,
            areas,
            split_areas,
            gutters,
        })
    }

    /// Build from a template with default tracks.
    pub fn from_template(template: &str, splitter_size: &str) -> Result<Self, LayoutError> {
        Self::build(&LayoutConfig::new(template).with_splitter_size(splitter_size))
    }

    /// CSS `grid-area` value of a panel in split space.
    #[must_use]
    pub fn grid_area(&self, name: &str) -> Option<String> {
        self.split_areas.get(name).map(ToString::to_string)
    }

    /// Number of panels (distinct areas).
    #[must_use]
    pub fn panel_count(&self) -> usize {
        self.areas.len()
    }
}

fn resolve_tracks(
    explicit: Option<&str>,
    expected: usize,
    axis: TrackAxis,
) -> Result<String, LayoutError> {
    let Some(tracks) = explicit else {
        return Ok(repeat_track(DEFAULT_TRACK, expected));
    };
    let found = track_count(tracks);
    if found != expected {
        return Err(LayoutError::TrackCountMismatch {
            axis,
            found,
            expected,
        });
    }
    Ok(tracks.to_owned())
}

/// Which track list a [`LayoutError::TrackCountMismatch`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackAxis {
    Columns,
    Rows,
}

impl fmt::Display for TrackAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Columns => "grid-template-columns",
            Self::Rows => "grid-template-rows",
        })
    }
}

/// Errors from [`SplitLayout::build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The area template is structurally invalid.
    Template(TemplateError),
    /// An explicit track list does not match the template's size.
    TrackCountMismatch {
        axis: TrackAxis,
        found: usize,
        expected: usize,
    },
    /// Area lines too large to interleave splitter tracks.
    SplitSpace(SplitSpaceOverflow),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Template(e) => write!(f, "invalid grid template: {e}"),
            Self::TrackCountMismatch {
                axis,
                found,
                expected,
            } => write!(f, "{axis} has {found} tracks, expected {expected}"),
            Self::SplitSpace(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Template(e) => Some(e),
            Self::SplitSpace(e) => Some(e),
            Self::TrackCountMismatch { .. } => None,
        }
    }
}

impl From<TemplateError> for LayoutError {
    fn from(err: TemplateError) -> Self {
        Self::Template(err)
    }
}

impl From<SplitSpaceOverflow> for LayoutError {
    fn from(err: SplitSpaceOverflow) -> Self {
        Self::SplitSpace(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GridLines;

    #[test]
    fn builds_three_pane_layout() {
        let layout = SplitLayout::from_template("a b\na c", "4px").unwrap();

        assert_eq!(layout.panel_count(), 3);
        assert_eq!(layout.areas["a"], GridLines::new(1, 1, 3, 2));
        assert_eq!(layout.split_areas["a"], GridLines::new(1, 1, 4, 2));
        assert_eq!(layout.split_areas["b"], GridLines::new(1, 3, 2, 4));
        assert_eq!(layout.split_areas["c"], GridLines::new(3, 3, 4, 4));
        assert_eq!(layout.grid_area("c").as_deref(), Some("3 / 3 / 4 / 4"));
        assert_eq!(layout.grid_area("z"), None);

        assert_eq!(layout.grid_template_columns, "1fr 4px 1fr");
        assert_eq!(layout.grid_template_rows, "1fr 4px 1fr");
        assert_eq!(layout.gutters.column_gutters.len(), 2);
        assert_eq!(layout.gutters.row_gutters.len(), 1);
    }

    #[test]
    fn explicit_tracks_are_kept() {
        let config = LayoutConfig::new("a b c")
            .with_columns("2fr 1fr 1fr")
            .with_rows("100%")
            .with_splitter_size("1px");
        let layout = SplitLayout::build(&config).unwrap();
        assert_eq!(layout.grid_template_columns, "2fr 1px 1fr 1px 1fr");
        assert_eq!(layout.grid_template_rows, "100%");
    }

    #[test]
    fn template_errors_propagate() {
        let err = SplitLayout::from_template("a b a\nc c c", "4px").unwrap_err();
        let LayoutError::Template(inner) = &err else {
            panic!("expected template error, got {err:?}");
        };
        assert_eq!(inner.area(), Some("a"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn mismatched_tracks_are_rejected() {
        let config = LayoutConfig::new("a b").with_columns("1fr");
        let err = SplitLayout::build(&config).unwrap_err();
        assert_eq!(
            err,
            LayoutError::TrackCountMismatch {
                axis: TrackAxis::Columns,
                found: 1,
                expected: 2
            }
        );
        assert_eq!(
            err.to_string(),
            "grid-template-columns has 1 tracks, expected 2"
        );
    }

    #[test]
    fn empty_template_builds_empty_layout() {
        let layout = SplitLayout::from_template("", "4px").unwrap();
        assert_eq!(layout.panel_count(), 0);
        assert!(layout.gutters.is_empty());
        assert_eq!(layout.grid_template_columns, "");
        assert_eq!(layout.grid_template_rows, "");
    }

    #[test]
    fn serializes_for_renderer() {
        let layout = SplitLayout::from_template("a b", "4px").unwrap();
        let json = serde_json::to_value(&layout).unwrap();
        assert_eq!(json["grid"], serde_json::json!([["a", "b"]]));
        assert_eq!(json["areas"]["b"], serde_json::json!([1, 2, 2, 3]));
        assert_eq!(json["splitAreas"]["b"], serde_json::json!([1, 3, 2, 4]));
        assert_eq!(json["gridTemplateColumns"], "1fr 4px 1fr");
        assert_eq!(json["gutters"]["columnGutters"][0]["gridArea"], "1 / 2 / 3 / 3");
    }
}
