use super::Point;

/// Number of angle steps the circle sampler takes over a full turn.
/// The sampler visits `CIRCLE_STEPS + 1` angles so 0 and 2π are both included.
const CIRCLE_STEPS: u32 = 720;

/// Bresenham line from `(x0, y0)` to `(x1, y1)`, both endpoints included.
///
/// The walk is deterministic but not symmetric: `line(a, b)` is not
/// necessarily `line(b, a)` reversed.
pub fn line(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<Point> {
    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    let (mut x, mut y) = (x0, y0);
    let mut points = Vec::with_capacity(dx.max(dy) as usize + 1);

    loop {
        points.push(Point::new(x, y));
        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }

    points
}

/// Angle-sampled circle outline around `(center_x, center_y)`.
///
/// Each sampled coordinate is rounded by adding 0.5 and truncating toward
/// zero. A point is appended only when it differs from the previously
/// appended one, so the result can still revisit a cell later in the turn
/// and can skip cells at some radii.
pub fn circle(center_x: i32, center_y: i32, radius: f64) -> Vec<Point> {
    let mut points: Vec<Point> = Vec::new();
    let step = 2.0 * (std::f64::consts::PI / f64::from(CIRCLE_STEPS));

    for i in 0..=CIRCLE_STEPS {
        let angle = f64::from(i) * step;
        let x = (f64::from(center_x) + radius * angle.sin() + 0.5).trunc() as i32;
        let y = (f64::from(center_y) + radius * angle.cos() + 0.5).trunc() as i32;
        let point = Point::new(x, y);

        if points.last() != Some(&point) {
            points.push(point);
        }
    }

    points
}

/// Closed outline of the axis-aligned rectangle spanned by two corners.
///
/// Edges are walked top, right, bottom, left. Each corner ends one edge and
/// starts the next, so it appears twice.
pub fn rectangle(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<Point> {
    let mut points = line(x0, y0, x1, y0);
    points.extend(line(x1, y0, x1, y1));
    points.extend(line(x1, y1, x0, y1));
    points.extend(line(x0, y1, x0, y0));
    points
}
