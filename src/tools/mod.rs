use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PaintError;
use crate::geometry::Point;
use crate::grid::{Grid, PaletteIndex};

mod bucket;
mod pencil;
mod shape;

/// What a tool sees each time it runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolInput {
    /// Palette index being painted
    pub colour: PaletteIndex,
    /// Current pointer cell
    pub cursor: Point,
    /// Where the current drag started, for shape tools
    pub start: Option<Point>,
}

/// The closed set of painting tools.
///
/// Pencil and bucket are immediate: they paint every time they run.
/// Line, circle and square are draggable: they preview during a drag and
/// only paint on release. Shift acts outside the press cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    #[default]
    Pencil,
    Line,
    Circle,
    Square,
    Bucket,
    Shift,
}

impl Tool {
    pub const ALL: [Tool; 6] = [
        Tool::Pencil,
        Tool::Line,
        Tool::Circle,
        Tool::Square,
        Tool::Bucket,
        Tool::Shift,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Tool::Pencil => "pencil",
            Tool::Line => "line",
            Tool::Circle => "circle",
            Tool::Square => "square",
            Tool::Bucket => "bucket",
            Tool::Shift => "shift",
        }
    }

    pub fn is_draggable(self) -> bool {
        matches!(self, Tool::Line | Tool::Circle | Tool::Square)
    }

    /// Cells a draggable tool covers for a drag from `start` to `end`.
    /// Unclipped; `None` for tools that have no shape.
    pub fn shape_points(self, start: Point, end: Point) -> Option<Vec<Point>> {
        match self {
            Tool::Line => Some(shape::line_points(start, end)),
            Tool::Circle => Some(shape::circle_points(start, end)),
            Tool::Square => Some(shape::square_points(start, end)),
            Tool::Pencil | Tool::Bucket | Tool::Shift => None,
        }
    }

    /// Runs the tool once against the grid
    pub fn apply(self, grid: &mut Grid, input: &ToolInput) {
        log::trace!("Applying {} at {}", self, input.cursor);
        match self {
            Tool::Pencil => pencil::apply(grid, input),
            Tool::Bucket => bucket::apply(grid, input),
            Tool::Line | Tool::Circle | Tool::Square => {
                // Without a start point there is no drag to commit
                let Some(start) = input.start else {
                    return;
                };
                if let Some(points) = self.shape_points(start, input.cursor) {
                    shape::paint(grid, input.colour, &points);
                }
            }
            // rotation is driven by explicit offsets, never by the pointer
            Tool::Shift => {}
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tool {
    type Err = PaintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tool::ALL
            .into_iter()
            .find(|tool| tool.name() == s)
            .ok_or_else(|| PaintError::UnknownTool(s.to_owned()))
    }
}
