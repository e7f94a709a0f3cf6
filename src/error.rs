use std::io;

use thiserror::Error;

/// Problems with command-line input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("{0} requires a value")]
    MissingValue(&'static str),

    #[error("invalid hex color: {0} (expected RRGGBB, e.g. 1a1b26)")]
    InvalidColor(String),

    #[error("invalid number for {option}: {value}")]
    InvalidNumber { option: &'static str, value: String },

    #[error("{option} must be {expected}, got {value}")]
    OutOfRange {
        option: &'static str,
        expected: &'static str,
        value: f64,
    },

    #[error("unknown effect: {0} (expected mixed, rect or ellipse)")]
    UnknownEffect(String),
}

/// A sound cue could not be played.
#[derive(Error, Debug)]
pub enum AudioError {
    #[error("audio output failed: {0}")]
    Io(#[source] io::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
