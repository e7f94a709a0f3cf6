//! Procedural fireworks: shells climb, slow down, and burst into one of two
//! particle effects, drawn through a minimal [`surface::Surface`] interface.
//!
//! The [`simulator::Simulator`] is driven one frame at a time by the host;
//! [`terminal::TerminalSurface`] renders it in a true-color terminal.

pub mod audio;
pub mod color;
pub mod completion;
pub mod config;
pub mod effects;
pub mod error;
pub mod firework;
pub mod geometry;
pub mod random;
pub mod simulator;
pub mod surface;
pub mod terminal;

pub use error::{Error, Result};
pub use simulator::{SimConfig, Simulator};
