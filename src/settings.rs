//! Session settings
//!
//! Loaded once from JSON (or defaulted) and validated before a session is
//! built. Missing fields fall back to the defaults below.

use serde::{Deserialize, Serialize};

use crate::consts::{FADE_OUT_MS, MAX_HAZARD_SPEED, PLAYER_SPEED, STARTING_LIVES};
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed for hazard placement (`None` = 0)
    pub seed: Option<u64>,
    /// Lives at the start of every session
    pub starting_lives: u8,
    /// Horizontal player speed in pixels per tick
    pub player_speed: i32,
    /// Ceiling for hazards with the accelerate behavior
    pub max_hazard_speed: f32,
    /// Duration carried by the fade-out intent when a phase ends
    pub fade_out_ms: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            starting_lives: STARTING_LIVES,
            player_speed: PLAYER_SPEED,
            max_hazard_speed: MAX_HAZARD_SPEED,
            fade_out_ms: FADE_OUT_MS,
        }
    }
}

impl Settings {
    /// Default settings with a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or(0)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_lives == 0 {
            return Err(ConfigError::NoStartingLives);
        }
        if self.player_speed <= 0 {
            return Err(ConfigError::InvalidPlayerSpeed {
                speed: self.player_speed,
            });
        }
        if !(self.max_hazard_speed > 0.0) {
            return Err(ConfigError::InvalidSpeedCeiling {
                ceiling: self.max_hazard_speed,
            });
        }
        Ok(())
    }

    /// Parse and validate settings from a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file on disk
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|err| ConfigError::Io {
            message: format!("{}: {err}", path.display()),
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}
