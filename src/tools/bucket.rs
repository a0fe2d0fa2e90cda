use super::ToolInput;
use crate::fill::flood_fill;
use crate::grid::Grid;

/// Flood fills from the cursor with the current colour
pub(super) fn apply(grid: &mut Grid, input: &ToolInput) {
    flood_fill(grid, input.colour, input.cursor.x, input.cursor.y, None);
}
