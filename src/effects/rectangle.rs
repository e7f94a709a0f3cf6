use super::ParticleEffect;
use crate::color::{Hsl, Rgb};
use crate::completion::Completion;
use crate::geometry::Point;
use crate::random::RandomSource;
use crate::surface::Surface;

const PARTICLE_COUNT: usize = 100;
const MAX_SPEED: f64 = 100.0;
const MAX_AGE: f64 = 100.0;
const VELOCITY_DIVISOR: f64 = 20.0;
const GRAVITY: f64 = 1.0;
const PARTICLE_RADIUS: f64 = 1.0;

#[derive(Debug, Clone)]
struct Particle {
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    /// Frames left; the particle is dropped once this goes negative.
    age: i32,
}

impl Particle {
    fn new(origin: Point, rng: &mut dyn RandomSource) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            vx: (0.5 - rng.next_f64()) * MAX_SPEED,
            vy: (0.5 - rng.next_f64()) * MAX_SPEED,
            age: (rng.next_f64() * MAX_AGE) as i32,
        }
    }

    fn step(&mut self) {
        self.x += self.vx / VELOCITY_DIVISOR;
        self.y += self.vy / VELOCITY_DIVISOR;
        self.vy += GRAVITY;
        self.age -= 1;
    }
}

/// Radial scatter of independently aging particles.
pub struct RectangleEffect {
    particles: Vec<Particle>,
    color: Rgb,
    on_done: Completion,
    complete: bool,
}

impl RectangleEffect {
    pub fn new(origin: Point, color: Hsl, rng: &mut dyn RandomSource, on_done: Completion) -> Self {
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle::new(origin, rng))
            .collect();

        Self {
            particles,
            color: color.to_rgb(),
            on_done,
            complete: false,
        }
    }

    pub fn live_particles(&self) -> usize {
        self.particles.len()
    }
}

impl ParticleEffect for RectangleEffect {
    fn update(&mut self, surface: &mut dyn Surface) {
        if self.complete {
            return;
        }

        surface.set_global_alpha(1.0);
        surface.set_fill_color(self.color);
        self.particles.retain_mut(|particle| {
            particle.step();
            surface.fill_circle(particle.x, particle.y, PARTICLE_RADIUS);
            particle.age >= 0
        });

        if self.particles.is_empty() {
            self.complete = true;
            self.on_done.fire();
        }
    }

    fn is_complete(&self) -> bool {
        self.complete
    }
}
