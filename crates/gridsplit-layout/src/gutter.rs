#![forbid(unsafe_code)]

//! Splitter ("gutter") geometry between adjacent areas.
//!
//! Gutters live in the same split space as
//! [`GridLines::to_split_space`](crate::GridLines::to_split_space): content
//! track `i` (0-based) sits on split line `2i + 1`, and the splitter after it
//! on line `2i + 2`.
//!
//! One [`Gutter`] is emitted per pair of adjacent cells whose tokens differ,
//! not per logical boundary. A boundary running along three rows therefore
//! yields three column gutters, one per row strip, which is what the
//! splitter renderer expects.

use serde::Serialize;

use crate::template::AreaGrid;

/// Which kind of splitter a gutter is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GutterAxis {
    /// Vertical strip between two columns.
    Column,
    /// Horizontal strip between two rows.
    Row,
}

/// One splitter strip, one cell long.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Gutter {
    /// Which splitter this strip belongs to. Not serialized; renderers read
    /// it from the list the gutter appears in.
    #[serde(skip)]
    pub axis: GutterAxis,
    /// Split-space track of the content column (column gutters) or row
    /// (row gutters) the splitter follows.
    pub track: usize,
    /// Unique name: `col-<col>-row-<row>` or `row-<row>-col-<col>`.
    pub name: String,
    /// CSS `grid-area` value of the strip.
    pub grid_area: String,
}

impl Gutter {
    fn column(col_index: usize, row_index: usize) -> Self {
        let col_track = col_index * 2 + 1;
        let row_track = row_index * 2 + 1;
        Self {
            axis: GutterAxis::Column,
            track: col_track,
            name: format!("col-{col_track}-row-{row_track}"),
            grid_area: format!(
                "{} / {} / {} / {}",
                row_track,
                col_track + 1,
                row_track + 2,
                col_track + 2
            ),
        }
    }

    fn row(row_index: usize, col_index: usize) -> Self {
        let row_track = row_index * 2 + 1;
        let col_track = col_index * 2 + 1;
        Self {
            axis: GutterAxis::Row,
            track: row_track,
            name: format!("row-{row_track}-col-{col_track}"),
            grid_area: format!(
                "{} / {} / {} / {}",
                row_track + 1,
                col_track,
                row_track + 2,
                col_track + 2
            ),
        }
    }
}

/// All gutters of one layout.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GutterSet {
    /// Gutters between columns, ordered by column then row.
    pub column_gutters: Vec<Gutter>,
    /// Gutters between rows, ordered by row then column.
    pub row_gutters: Vec<Gutter>,
    /// Row gutters followed by column gutters.
    pub all_names: Vec<Gutter>,
}

impl GutterSet {
    /// Total number of gutters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.all_names.len()
    }

    /// Whether there are no gutters at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.all_names.is_empty()
    }

    /// Look up a gutter by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Gutter> {
        self.all_names.iter().find(|g| g.name == name)
    }
}

/// Compute the splitter strips of `grid`.
#[must_use]
pub fn compute_gutters(grid: &AreaGrid) -> GutterSet {
    let rows = grid.rows();
    let cols = grid.cols();

    let mut column_gutters = Vec::new();
    for col in 0..cols.saturating_sub(1) {
        for row in 0..rows {
            if !grid.same_cell((row, col), (row, col + 1)) {
                column_gutters.push(Gutter::column(col, row));
            }
        }
    }

    let mut row_gutters = Vec::new();
    for row in 0..rows.saturating_sub(1) {
        for col in 0..cols {
            if !grid.same_cell((row, col), (row + 1, col)) {
                row_gutters.push(Gutter::row(row, col));
            }
        }
    }

    let all_names = row_gutters
        .iter()
        .chain(&column_gutters)
        .cloned()
        .collect();

    GutterSet {
        column_gutters,
        row_gutters,
        all_names,
    }
}
