#![forbid(unsafe_code)]

//! Built-in panel arrangements offered by the panel selector.
//!
//! Names describe pane positions: `L`/`R` left/right, `U`/`D` up/down,
//! `C` center. `L-RU-RD` is one tall pane on the left with two stacked panes
//! on the right.

use serde::Serialize;

use crate::config::LayoutConfig;

/// A named layout template with its default track lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutPreset {
    pub id: u32,
    pub name: &'static str,
    pub template: &'static str,
    pub grid_template_columns: &'static str,
    pub grid_template_rows: &'static str,
    /// Number of chart panes, one per area.
    pub chart_count: usize,
}

impl LayoutPreset {
    /// Configuration for this preset with the given splitter size.
    #[must_use]
    pub fn to_config(&self, splitter_size: impl Into<String>) -> LayoutConfig {
        LayoutConfig {
            template: self.template.to_owned(),
            grid_template_columns: Some(self.grid_template_columns.to_owned()),
            grid_template_rows: Some(self.grid_template_rows.to_owned()),
            splitter_size: splitter_size.into(),
        }
    }
}

const fn preset(
    id: u32,
    name: &'static str,
    template: &'static str,
    grid_template_columns: &'static str,
    grid_template_rows: &'static str,
    chart_count: usize,
) -> LayoutPreset {
    LayoutPreset {
        id,
        name,
        template,
        grid_template_columns,
        grid_template_rows,
        chart_count,
    }
}

static BUILTIN: [LayoutPreset; 10] = [
    preset(1, "C", "a", "1fr", "1fr", 1),
    preset(2, "U-D", "a\nb", "1fr", "1fr 1fr", 2),
    preset(3, "L-R", "a b", "1fr 1fr", "1fr", 2),
    preset(4, "LU-RU-LD-RD", "a b\nc d", "1fr 1fr", "1fr 1fr", 4),
    preset(5, "L-RU-RD", "a b\na c", "1fr 1fr", "1fr 1fr", 3),
    preset(6, "R-LU-LD", "b a\nc a", "1fr 1fr", "1fr 1fr", 3),
    preset(7, "U-LD-RD", "a a\nb c", "1fr 1fr", "1fr 1fr", 3),
    preset(8, "D-LU-RU", "b c\na a", "1fr 1fr", "1fr 1fr", 3),
    preset(9, "LU-CU-RU-LD-CD-RD", "a b c\nd e f", "1fr 1fr 1fr", "1fr 1fr", 6),
    preset(10, "LU-LC-LD-RU-RC-RD", "a d\nb e\nc f", "1fr 1fr", "1fr 1fr 1fr", 6),
];

/// All built-in presets, ordered by id.
#[must_use]
pub fn builtin() -> &'static [LayoutPreset] {
    &BUILTIN
}

/// Look up a preset by id.
#[must_use]
pub fn find(id: u32) -> Option<&'static LayoutPreset> {
    BUILTIN.iter().find(|p| p.id == id)
}

/// Look up a preset by name, ignoring ASCII case.
#[must_use]
pub fn find_by_name(name: &str) -> Option<&'static LayoutPreset> {
    BUILTIN.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}
