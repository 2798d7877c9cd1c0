#![forbid(unsafe_code)]

//! Parsing and validation of `grid-template-areas` strings.
//!
//! An [`AreaGrid`] is the validated form of a template such as
//!
//! ```text
//! "a a b"
//! "c c b"
//! "d d e"
//! ```
//!
//! Rows are separated by newlines, cells by whitespace, quotes are optional
//! and `.` marks an empty cell. Every other token names an area.
//!
//! # Invariants
//!
//! 1. Every row has the same number of columns.
//! 2. Each area name covers exactly one axis-aligned rectangle of cells.
//! 3. Neither axis has more than [`MAX_TRACKS`] tracks, so every grid line
//!    and its split-space image fit in `i32`.
//! 4. An `AreaGrid` can only be obtained through validation
//!    ([`AreaGrid::parse`] or [`AreaGrid::from_rows`]), so every value of the
//!    type upholds 1 to 3.
//!
//! # Storage
//!
//! Cells live in a flat row-major vector. Each slot holds either `None`
//! (an empty `.` cell) or an index into the name table, which is kept in
//! first-discovery order. Bounding boxes are computed by a direct min/max scan
//! over that vector, so validation never depends on hash-map iteration order.

use std::collections::hash_map::Entry;
use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Serialize, Serializer};

/// Token marking an empty cell.
pub const EMPTY_CELL: &str = ".";

/// Largest number of rows or columns a template may have.
pub const MAX_TRACKS: usize = 10_000;

/// Index of an area name inside an [`AreaGrid`]'s name table.
type AreaIndex = u32;

/// A validated, rectangular grid of area-name tokens.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AreaGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Option<AreaIndex>>,
    names: Vec<String>,
}

/// Inclusive cell bounds of one area, accumulated during validation.
#[derive(Debug, Clone, Copy)]
struct CellBounds {
    min_row: usize,
    max_row: usize,
    min_col: usize,
    max_col: usize,
    count: usize,
}

impl CellBounds {
    fn at(row: usize, col: usize) -> Self {
        Self {
            min_row: row,
            max_row: row,
            min_col: col,
            max_col: col,
            count: 0,
        }
    }

    fn include(&mut self, row: usize, col: usize) {
        self.min_row = self.min_row.min(row);
        self.max_row = self.max_row.max(row);
        self.min_col = self.min_col.min(col);
        self.max_col = self.max_col.max(col);
        self.count += 1;
    }

    const fn area(&self) -> usize {
        (self.max_row - self.min_row + 1) * (self.max_col - self.min_col + 1)
    }
}

impl AreaGrid {
    /// Parse and validate a `grid-template-areas` string.
    ///
    /// Blank lines are ignored and `"` characters are stripped before the
    /// row is split on whitespace. A template with no non-blank lines yields
    /// an empty grid.
    pub fn parse(template: &str) -> Result<Self, TemplateError> {
        let lines: Vec<String> = template
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.replace('"', ""))
            .collect();
        let rows: Vec<Vec<&str>> = lines
            .iter()
            .map(|line| line.split_whitespace().collect())
            .collect();
        let grid = Self::build(&rows)?;
        tracing::debug!(
            rows = grid.rows,
            cols = grid.cols,
            areas = grid.names.len(),
            "parsed grid template"
        );
        Ok(grid)
    }

    /// Validate pre-tokenized rows.
    ///
    /// Applies the same checks as [`AreaGrid::parse`]; tokens are taken
    /// verbatim (no quote stripping).
    pub fn from_rows<R, T>(rows: impl IntoIterator<Item = R>) -> Result<Self, TemplateError>
    where
        R: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let owned: Vec<Vec<T>> = rows
            .into_iter()
            .map(|row| row.into_iter().collect())
            .collect();
        let borrowed: Vec<Vec<&str>> = owned
            .iter()
            .map(|row| row.iter().map(AsRef::as_ref).collect())
            .collect();
        Self::build(&borrowed)
    }

    fn build(rows: &[Vec<&str>]) -> Result<Self, TemplateError> {
        let Some(first) = rows.first() else {
            return Ok(Self::default());
        };
        let cols = first.len();
        if rows.len() > MAX_TRACKS || cols > MAX_TRACKS {
            return Err(TemplateError::TooManyTracks {
                rows: rows.len(),
                cols,
            });
        }

        for (index, row) in rows.iter().enumerate() {
            if row.is_empty() {
                return Err(TemplateError::EmptyRow { row: index + 1 });
            }
            if row.len() != cols {
                return Err(TemplateError::RaggedRow {
                    row: index + 1,
                    found: row.len(),
                    expected: cols,
                });
            }
        }

        let mut lookup: FxHashMap<&str, AreaIndex> = FxHashMap::default();
        let mut names: Vec<String> = Vec::new();
        let mut bounds: Vec<CellBounds> = Vec::new();
        let mut cells = Vec::with_capacity(rows.len() * cols);

        for (r, row) in rows.iter().enumerate() {
            for (c, &token) in row.iter().enumerate() {
                if token == EMPTY_CELL {
                    cells.push(None);
                    continue;
                }
                let index = match lookup.entry(token) {
                    Entry::Occupied(entry) => *entry.get(),
                    Entry::Vacant(entry) => {
                        let index = AreaIndex::try_from(names.len()).map_err(|_| {
                            TemplateError::TooManyTracks {
                                rows: rows.len(),
                                cols,
                            }
                        })?;
                        names.push(token.to_owned());
                        bounds.push(CellBounds::at(r, c));
                        *entry.insert(index)
                    }
                };
                bounds[names_slot(index)].include(r, c);
                cells.push(Some(index));
            }
        }

        let grid = Self {
            rows: rows.len(),
            cols,
            cells,
            names,
        };
        grid.check_rectangles(&bounds)?;
        Ok(grid)
    }

    /// Each area's recorded cells must fill its bounding box exactly.
    fn check_rectangles(&self, bounds: &[CellBounds]) -> Result<(), TemplateError> {
        for (index, b) in bounds.iter().enumerate() {
            let area = &self.names[index];
            let own = AreaIndex::try_from(index).ok();
            let expected = b.area();
            if b.count != expected {
                return Err(TemplateError::NotRectangular {
                    area: area.clone(),
                    found: b.count,
                    expected,
                    top_left: (b.min_row, b.min_col),
                    bottom_right: (b.max_row, b.max_col),
                });
            }
            for r in b.min_row..=b.max_row {
                for c in b.min_col..=b.max_col {
                    if self.slot(r, c) != own {
                        return Err(TemplateError::ForeignCell {
                            area: area.clone(),
                            row: r,
                            col: c,
                            found: self.token(r, c).unwrap_or(EMPTY_CELL).to_owned(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the grid has no cells.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows == 0
    }

    fn slot(&self, row: usize, col: usize) -> Option<AreaIndex> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells[row * self.cols + col]
    }

    /// Token at `(row, col)`: the area name, or `"."` for an empty cell.
    ///
    /// Returns `None` when the position is outside the grid.
    #[must_use]
    pub fn token(&self, row: usize, col: usize) -> Option<&str> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(match self.cells[row * self.cols + col] {
            Some(index) => self.names[names_slot(index)].as_str(),
            None => EMPTY_CELL,
        })
    }

    /// Area name at `(row, col)`, or `None` for empty or out-of-range cells.
    #[must_use]
    pub fn area_at(&self, row: usize, col: usize) -> Option<&str> {
        self.slot(row, col)
            .map(|index| self.names[names_slot(index)].as_str())
    }

    /// Whether two positions hold the same token (two empty cells match).
    pub(crate) fn same_cell(&self, a: (usize, usize), b: (usize, usize)) -> bool {
        self.cells[a.0 * self.cols + a.1] == self.cells[b.0 * self.cols + b.1]
    }

    /// Distinct area names in row-major discovery order. `.` is excluded.
    #[must_use]
    pub fn area_names(&self) -> &[String] {
        &self.names
    }

    /// Number of distinct areas.
    #[must_use]
    pub fn area_count(&self) -> usize {
        self.names.len()
    }

    /// Iterate the tokens of one row.
    pub fn row(&self, row: usize) -> impl Iterator<Item = &str> + '_ {
        let cols = if row < self.rows { self.cols } else { 0 };
        (0..cols).filter_map(move |col| self.token(row, col))
    }

    /// Copy the grid out as nested token vectors.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        (0..self.rows)
            .map(|r| self.row(r).map(str::to_owned).collect())
            .collect()
    }
}

/// Position of `index` in the name table.
fn names_slot(index: AreaIndex) -> usize {
    // u32 -> usize is lossless on every supported target.
    index as usize
}

impl fmt::Display for AreaGrid {
    /// Renders the grid as a quoted template, one row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            if r > 0 {
                f.write_str("\n")?;
            }
            f.write_str("\"")?;
            for (c, token) in self.row(r).enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                f.write_str(token)?;
            }
            f.write_str("\"")?;
        }
        Ok(())
    }
}

impl Serialize for AreaGrid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_rows().serialize(serializer)
    }
}

impl std::str::FromStr for AreaGrid {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Structural problems found while validating a template.
///
/// Row numbers in [`EmptyRow`](Self::EmptyRow) and
/// [`RaggedRow`](Self::RaggedRow) are 1-based template lines (blank lines
/// not counted). Cell positions in the area variants are 0-based
/// `(row, col)` pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A row has no tokens once quotes are removed.
    EmptyRow { row: usize },
    /// The template has more than [`MAX_TRACKS`] rows or columns.
    TooManyTracks { rows: usize, cols: usize },
    /// A row's column count differs from the first row's.
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },
    /// An area's cells do not fill its bounding box.
    NotRectangular {
        area: String,
        found: usize,
        expected: usize,
        top_left: (usize, usize),
        bottom_right: (usize, usize),
    },
    /// A cell inside an area's bounding box belongs to something else.
    ForeignCell {
        area: String,
        row: usize,
        col: usize,
        found: String,
    },
}

impl TemplateError {
    /// Name of the offending area, if the error concerns one.
    #[must_use]
    pub fn area(&self) -> Option<&str> {
        match self {
            Self::NotRectangular { area, .. } | Self::ForeignCell { area, .. } => Some(area),
            Self::EmptyRow { .. } | Self::RaggedRow { .. } | Self::TooManyTracks { .. } => {
                None
            }
        }
    }
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyRow { row } => {
                write!(f, "grid template row {row} has no cells")
            }
            Self::TooManyTracks { rows, cols } => write!(
                f,
                "grid template is {rows}x{cols}, at most {MAX_TRACKS} rows and columns are supported"
            ),
            Self::RaggedRow {
                row,
                found,
                expected,
            } => write!(
                f,
                "grid template is not rectangular: row {row} has {found} columns, \
                 but the first row has {expected}"
            ),
            Self::NotRectangular {
                area,
                found,
                expected,
                top_left,
                bottom_right,
            } => write!(
                f,
                "area \"{area}\" is not a continuous rectangle: found {found} cells \
                 but expected {expected} for ({},{})..({},{})",
                top_left.0, top_left.1, bottom_right.0, bottom_right.1
            ),
            Self::ForeignCell {
                area,
                row,
                col,
                found,
            } => write!(
                f,
                "area \"{area}\" is not a continuous rectangle: cell ({row},{col}) \
                 is \"{found}\""
            ),
        }
    }
}

impl std::error::Error for TemplateError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quoted_template() {
        let grid = AreaGrid::parse("\"a a b f\"\n\"c c b f\"\n\"d d e e\"").unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.token(0, 3), Some("f"));
        assert_eq!(grid.token(2, 2), Some("e"));
        assert_eq!(grid.area_names(), ["a", "b", "f", "c", "d", "e"]);
    }

    #[test]
    fn rejects_templates_past_the_track_limit() {
        let wide = vec![vec!["."; MAX_TRACKS + 1]];
        assert_eq!(
            AreaGrid::from_rows(wide).unwrap_err(),
            TemplateError::TooManyTracks {
                rows: 1,
                cols: MAX_TRACKS + 1
            }
        );

        let tall = ".\n".repeat(MAX_TRACKS + 1);
        let err = AreaGrid::parse(&tall).unwrap_err();
        assert!(matches!(err, TemplateError::TooManyTracks { rows, cols: 1 } if rows == MAX_TRACKS + 1));
        assert_eq!(err.area(), None);
        assert!(err.to_string().contains("at most 10000"));
    }

    #[test]
    fn accepts_templates_at_the_track_limit() {
        let grid = AreaGrid::from_rows(vec![vec!["a"; MAX_TRACKS]]).unwrap();
        assert_eq!(grid.cols(), MAX_TRACKS);
        assert_eq!(grid.area_count(), 1);
    }

    #[test]
    fn parses_unquoted_indented_template() {
        let grid = AreaGrid::parse(
            "a b
                       a c",
        )
        .unwrap();
        assert_eq!(grid.to_rows(), vec![vec!["a", "b"], vec!["a", "c"]]);
    }

    #[test]
    fn blank_lines_and_extra_spaces_are_ignored() {
        let grid = AreaGrid::parse("\n\n  a    b  \n\n\t c  d \n").unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 2);
    }

    #[test]
    fn empty_input_yields_empty_grid() {
        let grid = AreaGrid::parse("").unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.cols(), 0);
        assert_eq!(grid.area_count(), 0);
        assert!(AreaGrid::parse("  \n\t\n").unwrap().is_empty());
    }

    #[test]
    fn dots_are_empty_cells() {
        let grid = AreaGrid::parse(". a\n. a").unwrap();
        assert_eq!(grid.token(0, 0), Some(EMPTY_CELL));
        assert_eq!(grid.area_at(0, 0), None);
        assert_eq!(grid.area_at(1, 1), Some("a"));
        assert_eq!(grid.area_names(), ["a"]);
    }

    #[test]
    fn scattered_dots_are_not_validated_as_an_area() {
        assert!(AreaGrid::parse(". a .\nb b b").is_ok());
    }

    #[test]
    fn out_of_range_lookups_return_none() {
        let grid = AreaGrid::parse("a").unwrap();
        assert_eq!(grid.token(0, 1), None);
        assert_eq!(grid.token(1, 0), None);
        assert_eq!(grid.area_at(5, 5), None);
        assert_eq!(grid.row(3).count(), 0);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = AreaGrid::parse("\"a a b\"\n\"c c b f\"\n\"d d e\"").unwrap_err();
        assert_eq!(
            err,
            TemplateError::RaggedRow {
                row: 2,
                found: 4,
                expected: 3
            }
        );
        assert!(err.to_string().contains("row 2 has 4 columns"));
    }

    #[test]
    fn quote_only_row_is_empty() {
        let err = AreaGrid::parse("\"\"\n\"a\"").unwrap_err();
        assert_eq!(err, TemplateError::EmptyRow { row: 1 });
        let err = AreaGrid::parse("\"a\"\n\"\"").unwrap_err();
        assert_eq!(err, TemplateError::EmptyRow { row: 2 });
    }

    #[test]
    fn discontinuous_area_is_rejected() {
        let err = AreaGrid::parse("a b a\nc c c").unwrap_err();
        assert_eq!(err.area(), Some("a"));
        assert!(matches!(
            err,
            TemplateError::NotRectangular {
                found: 2,
                expected: 3,
                ..
            }
        ));
        assert!(err.to_string().contains("\"a\""));
    }

    #[test]
    fn l_shaped_area_is_rejected() {
        let err = AreaGrid::parse("a a b\na c b\na d d").unwrap_err();
        assert_eq!(
            err,
            TemplateError::NotRectangular {
                area: "a".into(),
                found: 4,
                expected: 6,
                top_left: (0, 0),
                bottom_right: (2, 1),
            }
        );
    }

    #[test]
    fn first_offending_area_in_discovery_order_is_reported() {
        let err = AreaGrid::parse("x y x\ny z z").unwrap_err();
        assert_eq!(err.area(), Some("x"));
    }

    #[test]
    fn from_rows_validates_like_parse() {
        let grid = AreaGrid::from_rows([["a", "a"], ["b", "c"]]).unwrap();
        assert_eq!(grid, AreaGrid::parse("a a\nb c").unwrap());

        let err = AreaGrid::from_rows(vec![vec!["a"], vec!["b", "c"]]).unwrap_err();
        assert!(matches!(err, TemplateError::RaggedRow { row: 2, .. }));

        let empty: Vec<Vec<String>> = Vec::new();
        assert!(AreaGrid::from_rows(empty).unwrap().is_empty());
    }

    #[test]
    fn display_round_trips() {
        let grid = AreaGrid::parse("a a b\n. . b").unwrap();
        let rendered = grid.to_string();
        assert_eq!(rendered, "\"a a b\"\n\". . b\"");
        assert_eq!(rendered.parse::<AreaGrid>().unwrap(), grid);
    }

    #[test]
    fn serializes_as_nested_arrays() {
        let grid = AreaGrid::parse("a b\na .").unwrap();
        let json = serde_json::to_value(&grid).unwrap();
        assert_eq!(json, serde_json::json!([["a", "b"], ["a", "."]]));
    }
}
