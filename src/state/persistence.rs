use serde::{Deserialize, Serialize};

use crate::error::{PaintError, PaintResult};
use crate::grid::PaletteIndex;

/// Serialisable copy of a painting: its size and its rows of palette indices.
///
/// Owns its rows outright, so changing it never touches the live grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrozenState {
    pub width: usize,
    pub height: usize,
    pub painting: Vec<Vec<PaletteIndex>>,
}

impl FrozenState {
    /// Checks that `painting` really is `height` rows of `width` cells
    pub fn validate(&self) -> PaintResult<()> {
        if self.painting.len() != self.height {
            return Err(PaintError::DimensionMismatch {
                width: self.width,
                height: self.height,
                rows: self.painting.len(),
            });
        }

        if let Some((row, cells)) = self
            .painting
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != self.width)
        {
            return Err(PaintError::RaggedPainting {
                row,
                expected: self.width,
                found: cells.len(),
            });
        }

        Ok(())
    }

    pub fn to_json(&self) -> PaintResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> PaintResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
