use super::ToolInput;
use crate::grid::Grid;

/// Paints the cell under the cursor
pub(super) fn apply(grid: &mut Grid, input: &ToolInput) {
    grid.set(input.cursor.x, input.cursor.y, input.colour);
}
