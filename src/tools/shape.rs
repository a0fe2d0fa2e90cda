use crate::geometry::{self, Point};
use crate::grid::{Grid, PaletteIndex};

pub(super) fn line_points(start: Point, end: Point) -> Vec<Point> {
    geometry::line(start.x, start.y, end.x, end.y)
}

/// Circle centred on the drag start, passing through the cursor
pub(super) fn circle_points(start: Point, end: Point) -> Vec<Point> {
    geometry::circle(start.x, start.y, start.distance(end))
}

pub(super) fn square_points(start: Point, end: Point) -> Vec<Point> {
    geometry::rectangle(start.x, start.y, end.x, end.y)
}

/// Writes `colour` into every in-bounds point
pub(super) fn paint(grid: &mut Grid, colour: PaletteIndex, points: &[Point]) {
    for point in points {
        grid.set(point.x, point.y, colour);
    }
}
