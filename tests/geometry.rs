use grid_paint::geometry::{self, Point};
use std::collections::HashSet;

fn points(raw: &[(i32, i32)]) -> Vec<Point> {
    raw.iter().copied().map(Point::from).collect()
}

#[test]
fn test_distance() {
    assert_eq!(geometry::distance(0, 0, 3, 4), 5.0);
    assert_eq!(geometry::distance(2, 2, 2, 2), 0.0);
    assert_eq!(Point::new(-1, 1).distance(Point::new(2, 5)), 5.0);
}

#[test]
fn test_line_single_point() {
    assert_eq!(geometry::line(3, 3, 3, 3), points(&[(3, 3)]));
}

#[test]
fn test_line_horizontal() {
    assert_eq!(
        geometry::line(0, 0, 3, 0),
        points(&[(0, 0), (1, 0), (2, 0), (3, 0)])
    );
}

#[test]
fn test_line_vertical_upwards() {
    assert_eq!(
        geometry::line(1, 3, 1, 0),
        points(&[(1, 3), (1, 2), (1, 1), (1, 0)])
    );
}

#[test]
fn test_line_is_not_symmetric() {
    // Both walks are deterministic, they just pick different middle cells
    let forward = geometry::line(0, 0, 2, 1);
    let mut backward = geometry::line(2, 1, 0, 0);
    backward.reverse();

    assert_eq!(forward, points(&[(0, 0), (1, 0), (2, 1)]));
    assert_eq!(backward, points(&[(0, 0), (1, 1), (2, 1)]));
}

#[test]
fn test_rectangle_is_four_lines() {
    let (x0, y0, x1, y1) = (1, 2, 5, 6);
    let rect = geometry::rectangle(x0, y0, x1, y1);

    let edges = geometry::line(x0, y0, x1, y0).len()
        + geometry::line(x1, y0, x1, y1).len()
        + geometry::line(x1, y1, x0, y1).len()
        + geometry::line(x0, y1, x0, y0).len();
    assert_eq!(rect.len(), edges);

    // 5x5 outline
    let distinct: HashSet<Point> = rect.iter().copied().collect();
    assert_eq!(distinct.len(), 2 * (5 + 5) - 4);
}

#[test]
fn test_rectangle_edge_order() {
    let rect = geometry::rectangle(0, 0, 1, 1);
    assert_eq!(
        rect,
        points(&[
            (0, 0), (1, 0), // top
            (1, 0), (1, 1), // right
            (1, 1), (0, 1), // bottom
            (0, 1), (0, 0), // left
        ])
    );
}

#[test]
fn test_circle_radius_zero() {
    assert_eq!(geometry::circle(4, 7, 0.0), points(&[(4, 7)]));
}

#[test]
fn test_circle_stays_near_radius() {
    let radius = 5.0;
    let circle = geometry::circle(10, 10, radius);

    assert!(!circle.is_empty());
    for p in &circle {
        let d = geometry::distance(10, 10, p.x, p.y);
        assert!((d - radius).abs() <= 1.0, "{p} is {d} from center");
    }
    // full turn ends where it started
    assert_eq!(circle.first(), circle.last());
}

#[test]
fn test_circle_fractional_radius() {
    let circle = geometry::circle(0, 0, 1.5);
    for pair in circle.windows(2) {
        assert_ne!(pair[0], pair[1]);
    }
    assert_eq!(circle[0], Point::new(0, 2));
}
