use crate::grid::{Grid, PaletteIndex};

/// Fills the 4-connected region around `(start_x, start_y)` that has the
/// target colour, replacing it with `colour`.
///
/// The target defaults to whatever the start cell holds. The walk uses an
/// explicit stack; a cell is skipped as soon as it no longer holds the target,
/// which is also what stops the walk from revisiting painted cells.
pub fn flood_fill(
    grid: &mut Grid,
    colour: PaletteIndex,
    start_x: i32,
    start_y: i32,
    target: Option<PaletteIndex>,
) {
    let Some(target) = target.or_else(|| grid.get(start_x, start_y)) else {
        return;
    };
    if target == colour || !grid.contains(start_x, start_y) {
        return;
    }

    let width = grid.width() as i32;
    let height = grid.height() as i32;
    let mut stack = vec![(start_x, start_y)];

    while let Some((x, y)) = stack.pop() {
        if grid.get(x, y) != Some(target) {
            continue;
        }
        grid.set(x, y, colour);

        if y + 1 < height {
            stack.push((x, y + 1));
        }
        if y > 0 {
            stack.push((x, y - 1));
        }
        if x + 1 < width {
            stack.push((x + 1, y));
        }
        if x > 0 {
            stack.push((x - 1, y));
        }
    }
}
