use crate::color::Hsl;
use crate::completion::Completion;
use crate::geometry::Point;
use crate::random::RandomSource;
use crate::surface::Surface;

pub mod ellipse;
pub mod rectangle;

pub use ellipse::EllipseEffect;
pub use rectangle::RectangleEffect;

/// A burst animation owned by a firework once it stops climbing.
///
/// `update` is called once per frame. It draws the frame and, when the
/// animation has run its course, fires the completion handler the effect was
/// built with. Callers stop updating once that has happened.
pub trait ParticleEffect {
    fn update(&mut self, surface: &mut dyn Surface);
    fn is_complete(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectKind {
    /// Particles scattered with random velocities, pulled down by gravity.
    Rectangle,
    /// Points fanning out along straight lines to a tilted ellipse.
    Ellipse,
}

impl EffectKind {
    pub const ALL: [EffectKind; 2] = [EffectKind::Rectangle, EffectKind::Ellipse];

    /// Picks either variant with equal probability.
    pub fn choose(rng: &mut dyn RandomSource) -> Self {
        if rng.next_f64() < 0.5 {
            EffectKind::Rectangle
        } else {
            EffectKind::Ellipse
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            EffectKind::Rectangle => "rectangle",
            EffectKind::Ellipse => "ellipse",
        }
    }

    pub fn create(
        self,
        origin: Point,
        color: Hsl,
        rng: &mut dyn RandomSource,
        on_done: Completion,
    ) -> Box<dyn ParticleEffect> {
        match self {
            EffectKind::Rectangle => Box::new(RectangleEffect::new(origin, color, rng, on_done)),
            EffectKind::Ellipse => Box::new(EllipseEffect::new(origin, color, on_done)),
        }
    }
}
