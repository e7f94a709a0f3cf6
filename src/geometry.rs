//! Point-set helpers used to shape bursts.

use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Rounds to 4 decimal places.
fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

fn to_radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

/// Samples an axis-aligned ellipse centred on the origin, one point every
/// `step_degrees` starting at 0°.
///
/// # Panics
///
/// Panics if `step_degrees` is zero.
pub fn generate_ellipse(long_radius: f64, short_radius: f64, step_degrees: usize) -> Vec<Point> {
    (0..360)
        .step_by(step_degrees)
        .map(|angle| {
            let radian = to_radians(angle as f64);
            Point::new(
                round4(radian.cos() * long_radius),
                round4(radian.sin() * short_radius),
            )
        })
        .collect()
}

/// Rotates every point about the origin in place.
pub fn rotate_ellipse(angle_degrees: f64, points: &mut [Point]) {
    let radian = to_radians(angle_degrees);
    let (sin, cos) = radian.sin_cos();
    for point in points.iter_mut() {
        let Point { x, y } = *point;
        point.x = round4(x * cos - y * sin);
        point.y = round4(x * sin + y * cos);
    }
}

/// Splits the segment `from -> to` into `count` steps and returns the end of
/// each step, so `from` itself is excluded and `to` is the last point.
///
/// The y coordinate follows the segment slope; the `i * y_step` branch is only
/// taken when the horizontal displacement of a step is exactly zero.
pub fn line_to_points(from: Point, to: Point, count: usize) -> Vec<Point> {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let slope = if dx == 0.0 { 0.0 } else { dy / dx };
    let x_step = dx / count as f64;
    let y_step = dy / count as f64;

    (1..=count)
        .map(|i| {
            let i = i as f64;
            let x = i * x_step;
            let y = if x == 0.0 { i * y_step } else { slope * x };
            Point::new(from.x + x, from.y + y)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-3;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    #[test]
    fn ellipse_point_count_and_shape() {
        for step in [1, 2, 3, 5, 18, 45, 90, 360] {
            let points = generate_ellipse(200.0, 100.0, step);
            assert_eq!(points.len(), 360 / step);
            for p in &points {
                let r = (p.x / 200.0).powi(2) + (p.y / 100.0).powi(2);
                assert!((r - 1.0).abs() < EPS, "{p:?} off the ellipse");
            }
        }
    }

    #[test]
    fn ellipse_count_rounds_up_for_uneven_steps() {
        assert_eq!(generate_ellipse(10.0, 5.0, 7).len(), 52);
        assert_eq!(generate_ellipse(10.0, 5.0, 359).len(), 2);
    }

    #[test]
    fn ellipse_starts_on_long_axis() {
        let points = generate_ellipse(200.0, 100.0, 90);
        assert_eq!(points[0], Point::new(200.0, 0.0));
        assert_eq!(points[1], Point::new(0.0, 100.0));
        assert_eq!(points[2], Point::new(-200.0, 0.0));
        assert_eq!(points[3], Point::new(0.0, -100.0));
    }

    #[test]
    fn zero_rotation_is_identity() {
        let original = generate_ellipse(200.0, 100.0, 18);
        let mut rotated = original.clone();
        rotate_ellipse(0.0, &mut rotated);
        for (a, b) in original.iter().zip(&rotated) {
            assert!(close(*a, *b));
        }
    }

    #[test]
    fn rotation_round_trip() {
        let original = generate_ellipse(200.0, 100.0, 18);
        let mut points = original.clone();
        rotate_ellipse(45.0, &mut points);
        assert!(!close(points[0], original[0]));
        rotate_ellipse(-45.0, &mut points);
        for (a, b) in original.iter().zip(&points) {
            assert!(close(*a, *b), "{a:?} != {b:?}");
        }
    }

    #[test]
    fn rotation_by_quarter_turn() {
        let mut points = vec![Point::new(1.0, 0.0)];
        rotate_ellipse(90.0, &mut points);
        assert_eq!(points[0], Point::new(0.0, 1.0));
    }

    #[test]
    fn line_ends_on_target() {
        let from = Point::new(10.0, 20.0);
        let to = Point::new(151.4214, -121.4214);
        let points = line_to_points(from, to, 1000);
        assert_eq!(points.len(), 1000);
        assert!(close(*points.last().unwrap(), to));
        assert!(points.windows(2).all(|w| w[1].x > w[0].x));
        assert!(points[0] != from);
    }

    #[test]
    fn line_monotonic_leftwards() {
        let points = line_to_points(Point::new(0.0, 0.0), Point::new(-50.0, 30.0), 10);
        assert!(points.windows(2).all(|w| w[1].x < w[0].x));
        assert!(close(points[4], Point::new(-25.0, 15.0)));
    }

    #[test]
    fn vertical_line_uses_step_branch() {
        let points = line_to_points(Point::new(5.0, 0.0), Point::new(5.0, 100.0), 4);
        assert_eq!(
            points,
            vec![
                Point::new(5.0, 25.0),
                Point::new(5.0, 50.0),
                Point::new(5.0, 75.0),
                Point::new(5.0, 100.0),
            ]
        );
    }
}
