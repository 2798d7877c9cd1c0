#![forbid(unsafe_code)]

//! Area coordinates in CSS grid-line space.
//!
//! [`extract_areas`] turns a validated [`AreaGrid`] into one [`GridLines`]
//! per area. [`transform_areas`] re-expresses those lines in the *split
//! space*, where a splitter track is interleaved between every pair of
//! content tracks:
//!
//! ```text
//! content lines:  1   2   3   4
//! split lines:    1 2 3 4 5 6 7   (odd = content track, even = splitter)
//! ```
//!
//! Start lines map `v -> 2v - 1`, end lines map `v -> 2(v - 1)`, and line 1
//! stays fixed in both cases.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::template::AreaGrid;

/// Area name → grid lines, ordered by name.
pub type AreaMap = BTreeMap<String, GridLines>;

/// `[row-start, column-start, row-end, column-end]` using 1-based CSS grid
/// lines. End lines are exclusive.
///
/// Serializes as a 4-element array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[i32; 4]", into = "[i32; 4]")]
pub struct GridLines {
    pub row_start: i32,
    pub col_start: i32,
    pub row_end: i32,
    pub col_end: i32,
}

impl GridLines {
    /// Create grid lines from explicit components.
    #[must_use]
    pub const fn new(row_start: i32, col_start: i32, row_end: i32, col_end: i32) -> Self {
        Self {
            row_start,
            col_start,
            row_end,
            col_end,
        }
    }

    /// Lines bounding the inclusive 0-based cell range `(min_row, min_col)..=(max_row, max_col)`.
    ///
    /// Returns `None` if a line would not fit in `i32`.
    #[must_use]
    pub fn from_cells(min_row: usize, min_col: usize, max_row: usize, max_col: usize) -> Option<Self> {
        Some(Self::new(
            cell_line(min_row, 1)?,
            cell_line(min_col, 1)?,
            cell_line(max_row, 2)?,
            cell_line(max_col, 2)?,
        ))
    }

    /// Components in CSS `grid-area` order.
    #[must_use]
    pub const fn to_array(self) -> [i32; 4] {
        [self.row_start, self.col_start, self.row_end, self.col_end]
    }

    /// Number of row tracks spanned.
    #[must_use]
    pub const fn row_span(&self) -> i32 {
        self.row_end - self.row_start
    }

    /// Number of column tracks spanned.
    #[must_use]
    pub const fn col_span(&self) -> i32 {
        self.col_end - self.col_start
    }

    /// Map into split space.
    ///
    /// Returns `None` when a mapped line would overflow `i32`, i.e. for any
    /// line above [`MAX_SPLIT_LINE`] or far enough below zero.
    #[must_use]
    pub fn to_split_space(self) -> Option<Self> {
        Some(Self::new(
            split_start(self.row_start)?,
            split_start(self.col_start)?,
            split_end(self.row_end)?,
            split_end(self.col_end)?,
        ))
    }

    /// Inverse of [`to_split_space`](Self::to_split_space).
    ///
    /// Exact for any lines produced by `to_split_space` from inputs `>= 1`.
    /// Never overflows.
    #[must_use]
    pub const fn from_split_space(self) -> Self {
        Self::new(
            content_start(self.row_start),
            content_start(self.col_start),
            content_end(self.row_end),
            content_end(self.col_end),
        )
    }
}

/// Largest line whose split-space image still fits in `i32`.
pub const MAX_SPLIT_LINE: i32 = 1 << 30;

fn cell_line(index: usize, offset: i32) -> Option<i32> {
    i32::try_from(index).ok()?.checked_add(offset)
}

fn split_start(v: i32) -> Option<i32> {
    if v == 1 {
        return Some(1);
    }
    v.checked_mul(2)?.checked_sub(1)
}

fn split_end(v: i32) -> Option<i32> {
    if v == 1 {
        return Some(1);
    }
    v.checked_sub(1)?.checked_mul(2)
}

const fn content_start(v: i32) -> i32 {
    if v == 1 {
        return 1;
    }
    match v.checked_add(1) {
        Some(next) => next / 2,
        // (i32::MAX + 1) / 2
        None => v / 2 + 1,
    }
}

const fn content_end(v: i32) -> i32 {
    if v == 1 { 1 } else { v / 2 + 1 }
}

impl From<[i32; 4]> for GridLines {
    fn from(lines: [i32; 4]) -> Self {
        Self::new(lines[0], lines[1], lines[2], lines[3])
    }
}

impl From<GridLines> for [i32; 4] {
    fn from(lines: GridLines) -> Self {
        lines.to_array()
    }
}

impl fmt::Display for GridLines {
    /// CSS `grid-area` value: `"r1 / c1 / r2 / c2"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} / {} / {} / {}",
            self.row_start, self.col_start, self.row_end, self.col_end
        )
    }
}

/// Compute the grid lines of every area in `grid`.
///
/// Each area is grown from its top-left cell: first downward along the
/// column, then rightward along the row. This only yields the full bounding
/// box because `AreaGrid` guarantees every area is a rectangle.
#[must_use]
pub fn extract_areas(grid: &AreaGrid) -> AreaMap {
    let mut areas = AreaMap::new();

    for r in 0..grid.rows() {
        for c in 0..grid.cols() {
            let Some(name) = grid.area_at(r, c) else {
                continue;
            };
            if areas.contains_key(name) {
                continue;
            }

            let mut max_row = r;
            while grid.area_at(max_row + 1, c) == Some(name) {
                max_row += 1;
            }
            let mut max_col = c;
            while grid.area_at(r, max_col + 1) == Some(name) {
                max_col += 1;
            }

            // AreaGrid caps both axes at MAX_TRACKS, so every cell has a line.
            if let Some(lines) = GridLines::from_cells(r, c, max_row, max_col) {
                areas.insert(name.to_owned(), lines);
            }
        }
    }

    areas
}

/// Re-express every entry of `areas` in split space.
///
/// Lines from [`extract_areas`] always fit. Hand-built or deserialized maps
/// can hold lines too large to map, which is reported for the first such
/// area in name order.
pub fn transform_areas(areas: &AreaMap) -> Result<AreaMap, SplitSpaceOverflow> {
    areas
        .iter()
        .map(|(name, lines)| match lines.to_split_space() {
            Some(split) => Ok((name.clone(), split)),
            None => Err(SplitSpaceOverflow {
                area: name.clone(),
                lines: *lines,
            }),
        })
        .collect()
}

/// An area whose lines cannot be expressed in split space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitSpaceOverflow {
    pub area: String,
    pub lines: GridLines,
}

impl fmt::Display for SplitSpaceOverflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "area \"{}\" lines {} overflow split space (max start line {MAX_SPLIT_LINE})",
            self.area, self.lines
        )
    }
}

impl std::error::Error for SplitSpaceOverflow {}

/// Undo [`transform_areas`].
#[must_use]
pub fn restore_areas(areas: &AreaMap) -> AreaMap {
    areas
        .iter()
        .map(|(name, lines)| (name.clone(), lines.from_split_space()))
        .collect()
}

/// Format a `[row-start, column-start, row-end, column-end]` slice as a CSS
/// `grid-area` value.
///
/// Any length other than 4 logs a warning and yields an empty string, which
/// callers treat as "no geometry available".
#[must_use]
pub fn format_grid_area(lines: &[i32]) -> String {
    match *lines {
        [row_start, col_start, row_end, col_end] => {
            GridLines::new(row_start, col_start, row_end, col_end).to_string()
        }
        _ => {
            tracing::warn!(
                len = lines.len(),
                "invalid grid area: expected 4 components"
            );
            String::new()
        }
    }
}
