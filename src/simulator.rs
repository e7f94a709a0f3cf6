use std::cell::RefCell;
use std::mem;
use std::rc::Rc;

use crate::audio::{Audio, AudioCue};
use crate::color::{BLACK, Rgb};
use crate::completion::Completion;
use crate::effects::EffectKind;
use crate::firework::Firework;
use crate::random::RandomSource;
use crate::surface::Surface;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FireworkId(u64);

/// Which burst styles new fireworks may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EffectChoice {
    /// Either style, picked per launch.
    #[default]
    Mixed,
    Only(EffectKind),
}

impl EffectChoice {
    fn pick(self, rng: &mut dyn RandomSource) -> EffectKind {
        match self {
            EffectChoice::Mixed => EffectKind::choose(rng),
            EffectChoice::Only(kind) => kind,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimConfig {
    /// Chance per frame of launching another firework.
    pub spawn_chance: f64,
    /// Opacity of the overlay painted each frame; lower leaves longer trails.
    pub fade_alpha: f64,
    pub fade_color: Rgb,
    pub effect: EffectChoice,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            spawn_chance: 0.03,
            fade_alpha: 0.1,
            fade_color: BLACK,
            effect: EffectChoice::Mixed,
        }
    }
}

/// Owns every live firework and advances them one frame at a time.
pub struct Simulator {
    width: f64,
    height: f64,
    config: SimConfig,
    fireworks: Vec<(FireworkId, Firework)>,
    retired: Rc<RefCell<Vec<FireworkId>>>,
    next_id: u64,
    frames: u64,
    rng: Box<dyn RandomSource>,
    audio: Box<dyn Audio>,
}

impl Simulator {
    /// Starts with a single firework already climbing.
    pub fn new(
        width: f64,
        height: f64,
        config: SimConfig,
        rng: Box<dyn RandomSource>,
        audio: Box<dyn Audio>,
    ) -> Self {
        let mut sim = Self {
            width,
            height,
            config,
            fireworks: Vec::new(),
            retired: Rc::new(RefCell::new(Vec::new())),
            next_id: 0,
            frames: 0,
            rng,
            audio,
        };
        tracing::info!(width, height, spawn_chance = config.spawn_chance, "simulator ready");
        let kind = config.effect.pick(sim.rng.as_mut());
        sim.spawn(kind);
        sim
    }

    /// Runs one frame: fade, update, retire, maybe launch.
    pub fn frame(&mut self, surface: &mut dyn Surface) {
        self.frames += 1;

        surface.set_global_alpha(self.config.fade_alpha);
        surface.set_fill_color(self.config.fade_color);
        surface.fill_rect(0.0, 0.0, self.width, self.height);

        for (_, firework) in &mut self.fireworks {
            firework.update(surface, self.rng.as_mut(), self.audio.as_mut());
        }

        let retired = mem::take(&mut *self.retired.borrow_mut());
        if !retired.is_empty() {
            self.fireworks.retain(|(id, _)| !retired.contains(id));
            tracing::debug!(retired = retired.len(), live = self.fireworks.len(), "fireworks retired");
        }

        if self.rng.next_f64() < self.config.spawn_chance {
            let kind = self.config.effect.pick(self.rng.as_mut());
            self.spawn(kind);
            if let Err(err) = self.audio.play(AudioCue::Launch) {
                tracing::debug!(%err, "launch cue dropped");
            }
        }
    }

    fn spawn(&mut self, kind: EffectKind) -> FireworkId {
        let id = FireworkId(self.next_id);
        self.next_id += 1;

        let retired = Rc::clone(&self.retired);
        let firework = Firework::new(
            self.width,
            self.height,
            kind,
            self.rng.as_mut(),
            Completion::new(move || retired.borrow_mut().push(id)),
        );
        tracing::debug!(?id, x = firework.position().x, kind = kind.name(), "launch");
        self.fireworks.push((id, firework));
        id
    }

    pub fn len(&self) -> usize {
        self.fireworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fireworks.is_empty()
    }

    pub fn fireworks(&self) -> impl Iterator<Item = &Firework> + '_ {
        self.fireworks.iter().map(|(_, firework)| firework)
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn audio_mut(&mut self) -> &mut dyn Audio {
        self.audio.as_mut()
    }
}
