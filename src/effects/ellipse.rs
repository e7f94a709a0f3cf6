use super::ParticleEffect;
use crate::color::{Hsl, Rgb};
use crate::completion::Completion;
use crate::geometry::{self, Point};
use crate::surface::Surface;

const LONG_RADIUS: f64 = 200.0;
const SHORT_RADIUS: f64 = 100.0;
const STEP_DEGREES: usize = 18;
const TILT_DEGREES: f64 = 45.0;
pub const TRAJECTORY_LEN: usize = 1000;
const POINT_RADIUS: f64 = 1.0;

/// Shaped burst: every point travels a precomputed straight path from the
/// origin to a tilted ellipse outline, all advancing in lockstep.
pub struct EllipseEffect {
    trajectories: Vec<Vec<Point>>,
    frame: usize,
    color: Rgb,
    on_done: Completion,
}

impl EllipseEffect {
    pub fn new(origin: Point, color: Hsl, on_done: Completion) -> Self {
        let mut outline = geometry::generate_ellipse(LONG_RADIUS, SHORT_RADIUS, STEP_DEGREES);
        geometry::rotate_ellipse(TILT_DEGREES, &mut outline);

        let trajectories = outline
            .into_iter()
            .map(|offset| geometry::line_to_points(origin, origin + offset, TRAJECTORY_LEN))
            .collect();

        Self {
            trajectories,
            frame: 0,
            color: color.to_rgb(),
            on_done,
        }
    }

    pub fn trajectory_count(&self) -> usize {
        self.trajectories.len()
    }
}

impl ParticleEffect for EllipseEffect {
    fn update(&mut self, surface: &mut dyn Surface) {
        if self.frame >= TRAJECTORY_LEN {
            return;
        }

        surface.set_global_alpha(1.0);
        surface.set_fill_color(self.color);
        for trajectory in &self.trajectories {
            let point = trajectory[self.frame];
            surface.fill_circle(point.x, point.y, POINT_RADIUS);
        }
        self.frame += 1;

        if self.frame >= TRAJECTORY_LEN {
            self.on_done.fire();
        }
    }

    fn is_complete(&self) -> bool {
        self.frame >= TRAJECTORY_LEN
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn outline_has_twenty_trajectories() {
        let effect = EllipseEffect::new(Point::new(0.0, 0.0), Hsl::new(0, 100, 60), Completion::none());
        assert_eq!(effect.trajectory_count(), 20);
        assert!(effect.trajectories.iter().all(|t| t.len() == TRAJECTORY_LEN));
    }

    #[test]
    fn trajectories_end_on_tilted_outline() {
        let origin = Point::new(400.0, 300.0);
        let effect = EllipseEffect::new(origin, Hsl::new(0, 100, 60), Completion::none());

        // The 0° sample (200, 0) tilted by 45° lands on the diagonal.
        let end = *effect.trajectories[0].last().unwrap();
        let expected = 200.0 * std::f64::consts::FRAC_1_SQRT_2;
        assert!((end.x - (origin.x + expected)).abs() < 1e-3);
        assert!((end.y - (origin.y + expected)).abs() < 1e-3);
    }

    #[test]
    fn completes_exactly_after_trajectory_length() {
        let count = Rc::new(Cell::new(0));
        let c = Rc::clone(&count);
        let mut effect = EllipseEffect::new(
            Point::new(100.0, 100.0),
            Hsl::new(90, 100, 60),
            Completion::new(move || c.set(c.get() + 1)),
        );
        let mut surface = RecordingSurface::new();

        for _ in 0..TRAJECTORY_LEN - 1 {
            effect.update(&mut surface);
            assert_eq!(count.get(), 0);
        }
        assert!(!effect.is_complete());

        effect.update(&mut surface);
        assert!(effect.is_complete());
        assert_eq!(count.get(), 1);

        surface.clear();
        effect.update(&mut surface);
        assert_eq!(count.get(), 1);
        assert!(surface.calls.is_empty());
    }

    #[test]
    fn draws_one_point_per_trajectory_each_frame() {
        let origin = Point::new(0.0, 0.0);
        let mut effect = EllipseEffect::new(origin, Hsl::new(90, 100, 60), Completion::none());
        let mut surface = RecordingSurface::new();

        effect.update(&mut surface);
        let first: Vec<_> = surface.circles().collect();
        assert_eq!(first.len(), 20);
        assert!(first.iter().all(|&(x, y, _)| x != 0.0 || y != 0.0));
    }
}
