use crate::geometry::Point;
use crate::grid::{Grid, PaletteIndex};

/// A single cell edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Change {
    pub position: Point,
    pub before: PaletteIndex,
    pub after: PaletteIndex,
}

/// The cell edits produced by one committed gesture, in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    changes: Vec<Change>,
}

impl HistoryEntry {
    /// Wraps a change list. Empty lists are not worth recording.
    pub fn new(changes: Vec<Change>) -> Option<Self> {
        (!changes.is_empty()).then_some(Self { changes })
    }

    pub fn changes(&self) -> &[Change] {
        &self.changes
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Writes every `before` value back, in recorded order
    pub fn revert(&self, grid: &mut Grid) {
        for change in &self.changes {
            grid.set(change.position.x, change.position.y, change.before);
        }
    }

    /// Writes every `after` value, in recorded order
    pub fn apply(&self, grid: &mut Grid) {
        for change in &self.changes {
            grid.set(change.position.x, change.position.y, change.after);
        }
    }
}

/// Independent copy of a grid's cells taken before a gesture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    width: usize,
    height: usize,
    cells: Vec<PaletteIndex>,
}

impl Snapshot {
    pub fn capture(grid: &Grid) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            cells: grid.cells().to_vec(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell-by-cell comparison against the live grid.
    ///
    /// Only the region both shapes share is compared, so a grid resized
    /// mid-gesture yields the edits inside the overlap.
    pub fn diff(&self, grid: &Grid) -> Vec<Change> {
        let width = self.width.min(grid.width());
        let height = self.height.min(grid.height());
        let current = grid.cells();
        let mut changes = Vec::new();

        for y in 0..height {
            for x in 0..width {
                let before = self.cells[y * self.width + x];
                let after = current[y * grid.width() + x];
                if before != after {
                    changes.push(Change {
                        position: Point::new(x as i32, y as i32),
                        before,
                        after,
                    });
                }
            }
        }

        changes
    }
}
