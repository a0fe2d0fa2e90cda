use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::grid::PaletteIndex;

/// Ordered list of colours, addressed by the indices stored in the grid.
///
/// Index 0 of the default palette is transparent and doubles as the
/// background, but nothing in the engine depends on that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    colors: Vec<Color32>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: vec![
                Color32::TRANSPARENT,
                Color32::from_rgb(0xff, 0xff, 0xff),
                Color32::from_rgb(0xc0, 0xc0, 0xc0),
                Color32::from_rgb(0x80, 0x80, 0x80),
                Color32::from_rgb(0x00, 0x00, 0x00),
                Color32::from_rgb(0xff, 0x00, 0x00),
                Color32::from_rgb(0x88, 0x00, 0x00),
                Color32::from_rgb(0xff, 0xff, 0x00),
                Color32::from_rgb(0x80, 0x80, 0x00),
                Color32::from_rgb(0x00, 0xff, 0x00),
                Color32::from_rgb(0x00, 0x88, 0x00),
                Color32::from_rgb(0x00, 0xff, 0xff),
                Color32::from_rgb(0x00, 0x80, 0x80),
                Color32::from_rgb(0x00, 0x00, 0xff),
                Color32::from_rgb(0x00, 0x00, 0x80),
                Color32::from_rgb(0xff, 0x00, 0xff),
                Color32::from_rgb(0x80, 0x00, 0x80),
            ],
        }
    }
}

impl Palette {
    pub fn new(colors: Vec<Color32>) -> Self {
        Self { colors }
    }

    /// Colour for a palette index. Indices past the end have no colour and
    /// should be drawn as transparent.
    pub fn color(&self, index: PaletteIndex) -> Option<Color32> {
        self.colors.get(index as usize).copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Color32> + '_ {
        self.colors.iter().copied()
    }
}
