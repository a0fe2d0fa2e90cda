use serde::{Deserialize, Serialize};

use crate::command::MAX_HISTORY;
use crate::error::PaintResult;
use crate::grid::PaletteIndex;
use crate::palette::Palette;

/// Construction options for [`crate::GridPaint`].
///
/// Missing fields fall back to their defaults when deserialising, so a
/// document like `{"width": 32}` is a valid set of options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaintOptions {
    /// Width in cells
    pub width: usize,
    /// Height in cells; `None` makes the grid square
    pub height: Option<usize>,
    pub palette: Palette,
    /// Index new and cleared cells are filled with
    pub background_colour: PaletteIndex,
    /// Entries kept on each of the undo and redo stacks
    pub history_limit: usize,
}

impl Default for PaintOptions {
    fn default() -> Self {
        Self {
            width: 16,
            height: None,
            palette: Palette::default(),
            background_colour: 0,
            history_limit: MAX_HISTORY,
        }
    }
}

impl PaintOptions {
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            width,
            height: Some(height),
            ..Self::default()
        }
    }

    pub fn height(&self) -> usize {
        self.height.unwrap_or(self.width)
    }

    pub fn from_json(json: &str) -> PaintResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
