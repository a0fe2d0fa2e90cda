//! Integer geometry for gestures on the grid.
//!
//! Everything in here is stateless: the rasterisers turn a gesture's two
//! points into an ordered list of cells and never look at a grid.

mod raster;

pub use raster::{circle, line, rectangle};

use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell coordinate. May lie outside the grid while a pointer is dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        distance(self.x, self.y, other.x, other.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Euclidean distance between two cells
pub fn distance(x1: i32, y1: i32, x2: i32, y2: i32) -> f64 {
    let a = f64::from(x1) - f64::from(x2);
    let b = f64::from(y1) - f64::from(y2);
    (a * a + b * b).sqrt()
}
