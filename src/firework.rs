use std::cell::Cell;
use std::rc::Rc;

use crate::audio::{Audio, AudioCue};
use crate::color::{Hsl, Rgb};
use crate::completion::Completion;
use crate::effects::{EffectKind, ParticleEffect};
use crate::geometry::Point;
use crate::random::RandomSource;
use crate::surface::Surface;

/// Added to the climb speed every frame until it stops being negative.
pub const DECELERATION: f64 = 0.04;
const EDGE_MARGIN: f64 = 40.0;
const SATURATION: u8 = 100;
const LIGHTNESS: u8 = 60;
const PROJECTILE_RADIUS: f64 = 3.0;

enum State {
    Ascending {
        /// Vertical speed, negative while climbing.
        gravity: f64,
    },
    Bursting {
        /// `None` once the effect has finished.
        effect: Option<Box<dyn ParticleEffect>>,
    },
}

/// A shell that climbs from the bottom edge, slows down, then hands over to
/// its burst effect.
pub struct Firework {
    x: f64,
    y: f64,
    color: Hsl,
    kind: EffectKind,
    state: State,
    effect_done: Rc<Cell<bool>>,
    on_done: Completion,
}

impl Firework {
    pub fn new(
        width: f64,
        height: f64,
        kind: EffectKind,
        rng: &mut dyn RandomSource,
        on_done: Completion,
    ) -> Self {
        let x = (rng.next_f64() * (width - EDGE_MARGIN) + EDGE_MARGIN).trunc();
        let hue = (rng.next_f64() * 360.0) as u16;
        let gravity = -(rng.next_f64() * height.sqrt() / 3.0 + (4.0 * height).sqrt() / 2.0) / 5.0;

        Self {
            x,
            y: height,
            color: Hsl::new(hue, SATURATION, LIGHTNESS),
            kind,
            state: State::Ascending { gravity },
            effect_done: Rc::new(Cell::new(false)),
            on_done,
        }
    }

    pub fn update(
        &mut self,
        surface: &mut dyn Surface,
        rng: &mut dyn RandomSource,
        audio: &mut dyn Audio,
    ) {
        match &mut self.state {
            State::Ascending { gravity } => {
                self.y += *gravity;
                *gravity += DECELERATION;
                let stalled = *gravity >= 0.0;
                if stalled {
                    self.burst(rng, audio);
                }
                self.draw(surface);
            }
            State::Bursting { effect } => {
                if let Some(effect) = effect {
                    effect.update(surface);
                }
                if self.effect_done.get() {
                    self.retire();
                }
            }
        }
    }

    fn burst(&mut self, rng: &mut dyn RandomSource, audio: &mut dyn Audio) {
        let done = Rc::clone(&self.effect_done);
        let effect = self.kind.create(
            self.position(),
            self.color,
            rng,
            Completion::new(move || done.set(true)),
        );
        self.state = State::Bursting {
            effect: Some(effect),
        };
        tracing::debug!(x = self.x, y = self.y, kind = self.kind.name(), "burst");

        if let Err(err) = audio.play(AudioCue::Burst) {
            tracing::debug!(%err, "burst cue dropped");
        }
    }

    fn retire(&mut self) {
        if let State::Bursting { effect } = &mut self.state {
            if effect.take().is_some() {
                self.on_done.fire();
            }
        }
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.set_global_alpha(1.0);
        surface.set_fill_color(self.rgb());
        surface.fill_circle(self.x, self.y, PROJECTILE_RADIUS);
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn color(&self) -> Hsl {
        self.color
    }

    pub fn rgb(&self) -> Rgb {
        self.color.to_rgb()
    }

    pub fn kind(&self) -> EffectKind {
        self.kind
    }

    /// Current climb speed, or `None` after the burst.
    pub fn gravity(&self) -> Option<f64> {
        match self.state {
            State::Ascending { gravity } => Some(gravity),
            State::Bursting { .. } => None,
        }
    }

    pub fn is_bursting(&self) -> bool {
        matches!(self.state, State::Bursting { .. })
    }

    /// True once the burst effect has run out.
    pub fn is_finished(&self) -> bool {
        matches!(self.state, State::Bursting { effect: None })
    }
}
