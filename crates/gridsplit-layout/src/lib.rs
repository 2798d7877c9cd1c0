#![forbid(unsafe_code)]

//! Grid-template layout engine for multi-pane chart workspaces.
//!
//! Turns a CSS `grid-template-areas` string into exact numeric geometry for
//! panels and the draggable splitters between them.
//!
//! - [`AreaGrid`] - validated template (rectangular rows, rectangular areas)
//! - [`extract_areas`] - 1-based grid lines per area
//! - [`transform_areas`] - the same lines with a splitter track interleaved
//!   between every pair of content tracks
//! - [`compute_gutters`] - one splitter strip per differing adjacent cell pair
//! - [`insert_track_size`] - splice the splitter size into a track list
//! - [`SplitLayout`] - all of the above for one [`LayoutConfig`]
//!
//! # Example
//!
//! ```
//! use gridsplit_layout::{AreaGrid, GridLines, extract_areas, transform_areas};
//!
//! let grid = AreaGrid::parse("a a b\nc c b\nd d e").unwrap();
//! let areas = extract_areas(&grid);
//! assert_eq!(areas["b"], GridLines::new(1, 3, 3, 4));
//! assert_eq!(transform_areas(&areas).unwrap()["b"].to_string(), "1 / 5 / 4 / 6");
//! ```

pub mod areas;
pub mod config;
pub mod gutter;
pub mod layout;
pub mod presets;
pub mod template;
pub mod tracks;

pub use areas::{
    AreaMap, GridLines, MAX_SPLIT_LINE, SplitSpaceOverflow, extract_areas, format_grid_area,
    restore_areas, transform_areas,
};
pub use config::{DEFAULT_SPLITTER_SIZE, LayoutConfig};
#[cfg(feature = "layout-config")]
pub use config::LayoutConfigError;
pub use gutter::{Gutter, GutterAxis, GutterSet, compute_gutters};
pub use layout::{LayoutError, SplitLayout, TrackAxis};
pub use presets::LayoutPreset;
pub use template::{AreaGrid, EMPTY_CELL, MAX_TRACKS, TemplateError};
pub use tracks::{insert_track_size, repeat_track, track_count};
