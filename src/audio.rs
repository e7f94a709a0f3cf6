//! Best-effort sound cues. Nothing here is allowed to stall the animation:
//! callers log a failed cue and move on.

use std::io::Write;

use crate::error::AudioError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    Launch,
    Burst,
}

pub trait Audio {
    fn play(&mut self, cue: AudioCue) -> Result<(), AudioError>;

    fn set_muted(&mut self, _muted: bool) {}

    fn is_muted(&self) -> bool {
        true
    }
}

/// Silent stand-in used when no audio output is wired up.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoAudio;

impl Audio for NoAudio {
    fn play(&mut self, _cue: AudioCue) -> Result<(), AudioError> {
        Ok(())
    }
}

/// Rings the terminal bell for every cue while unmuted.
pub struct TerminalBell<W: Write> {
    out: W,
    muted: bool,
}

impl TerminalBell<std::io::Stdout> {
    pub fn stdout(muted: bool) -> Self {
        Self::new(std::io::stdout(), muted)
    }
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W, muted: bool) -> Self {
        Self { out, muted }
    }
}

impl<W: Write> Audio for TerminalBell<W> {
    fn play(&mut self, cue: AudioCue) -> Result<(), AudioError> {
        if self.muted {
            return Ok(());
        }
        tracing::trace!(?cue, "bell");
        self.out.write_all(b"\x07").map_err(AudioError::Io)?;
        self.out.flush().map_err(AudioError::Io)
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn is_muted(&self) -> bool {
        self.muted
    }
}
