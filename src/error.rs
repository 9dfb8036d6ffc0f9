//! Configuration errors
//!
//! The phase catalog and session settings are effectively compile-time data,
//! so anything wrong with them is reported once, when a session is built.
//! Nothing in the per-tick simulation can fail.

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    EmptyCatalog,
    TooManyPhases { count: usize },
    PhaseIdOutOfOrder { expected: u8, found: u8 },
    NoHazards { phase: u8 },
    InvalidHazardSize { phase: u8, width: i32, height: i32 },
    InvalidHazardSpeed { phase: u8, speed: f32 },
    HazardTooWide { phase: u8, width: i32 },
    ThresholdNotIncreasing { phase: u8, previous: u32, found: u32 },
    MissingThreshold { phase: u8 },
    FinalPhaseHasThreshold { phase: u8 },
    NoStartingLives,
    InvalidPlayerSpeed { speed: i32 },
    InvalidSpeedCeiling { ceiling: f32 },
    Parse { message: String },
    Io { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCatalog => write!(f, "phase catalog is empty"),
            Self::TooManyPhases { count } => {
                write!(f, "phase catalog has {count} phases (at most {})", u8::MAX)
            }
            Self::PhaseIdOutOfOrder { expected, found } => {
                write!(f, "phase id {found} out of order (expected {expected})")
            }
            Self::NoHazards { phase } => write!(f, "phase {phase} has no hazards"),
            Self::InvalidHazardSize {
                phase,
                width,
                height,
            } => write!(f, "phase {phase} hazard size {width}x{height} is not positive"),
            Self::InvalidHazardSpeed { phase, speed } => {
                write!(f, "phase {phase} hazard speed {speed} is not positive")
            }
            Self::HazardTooWide { phase, width } => {
                write!(f, "phase {phase} hazard width {width} does not fit the field")
            }
            Self::ThresholdNotIncreasing {
                phase,
                previous,
                found,
            } => write!(
                f,
                "phase {phase} threshold {found} must exceed previous threshold {previous}"
            ),
            Self::MissingThreshold { phase } => {
                write!(f, "non-final phase {phase} has no score threshold")
            }
            Self::FinalPhaseHasThreshold { phase } => {
                write!(f, "final phase {phase} must not have a score threshold")
            }
            Self::NoStartingLives => write!(f, "starting lives must be at least 1"),
            Self::InvalidPlayerSpeed { speed } => {
                write!(f, "player speed {speed} is not positive")
            }
            Self::InvalidSpeedCeiling { ceiling } => {
                write!(f, "hazard speed ceiling {ceiling} is not positive")
            }
            Self::Parse { message } => write!(f, "invalid settings JSON: {message}"),
            Self::Io { message } => write!(f, "could not read settings: {message}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            message: err.to_string(),
        }
    }
}
