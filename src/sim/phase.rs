//! Phase catalog
//!
//! Three fixed difficulty phases. Each non-final phase ends once the score
//! reaches its threshold; the last phase has no threshold and never ends.

use serde::{Deserialize, Serialize};

use super::motion::BehaviorKind;
use crate::consts::FIELD_WIDTH;
use crate::error::ConfigError;

/// Background music for a phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MusicTrack {
    Phase1,
    Phase2,
    Phase3,
}

/// Immutable per-phase parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseConfig {
    /// 1-based phase number
    pub id: u8,
    /// Background image index for the renderer
    pub background: u8,
    pub music: MusicTrack,
    pub hazard_count: usize,
    /// Base fall speed (pixels per tick)
    pub hazard_speed: f32,
    pub hazard_width: i32,
    pub hazard_height: i32,
    /// Score that ends this phase (`None` on the final phase)
    pub required_score: Option<u32>,
    /// Extra behaviors hazards may roll in this phase
    pub behaviors: Vec<BehaviorKind>,
}

/// Ordered, validated list of phases
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseCatalog {
    phases: Vec<PhaseConfig>,
}

impl PhaseCatalog {
    /// The three built-in phases
    pub fn builtin() -> Self {
        Self {
            phases: vec![
                PhaseConfig {
                    id: 1,
                    background: 1,
                    music: MusicTrack::Phase1,
                    hazard_count: 5,
                    hazard_speed: 5.0,
                    hazard_width: 40,
                    hazard_height: 40,
                    required_score: Some(30),
                    behaviors: Vec::new(),
                },
                PhaseConfig {
                    id: 2,
                    background: 2,
                    music: MusicTrack::Phase2,
                    hazard_count: 7,
                    hazard_speed: 7.0,
                    hazard_width: 50,
                    hazard_height: 50,
                    required_score: Some(70),
                    behaviors: vec![BehaviorKind::Accelerate],
                },
                PhaseConfig {
                    id: 3,
                    background: 3,
                    music: MusicTrack::Phase3,
                    hazard_count: 10,
                    hazard_speed: 9.0,
                    hazard_width: 60,
                    hazard_height: 60,
                    required_score: None,
                    behaviors: vec![BehaviorKind::Accelerate, BehaviorKind::Zigzag],
                },
            ],
        }
    }

    /// Build a catalog from arbitrary phases, rejecting anything malformed
    pub fn new(phases: Vec<PhaseConfig>) -> Result<Self, ConfigError> {
        let catalog = Self { phases };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.phases.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        if self.phases.len() > u8::MAX as usize {
            return Err(ConfigError::TooManyPhases {
                count: self.phases.len(),
            });
        }

        let last = self.phases.len() - 1;
        let mut previous_threshold: Option<u32> = None;

        for (index, phase) in self.phases.iter().enumerate() {
            let expected = (index + 1) as u8;
            if phase.id != expected {
                return Err(ConfigError::PhaseIdOutOfOrder {
                    expected,
                    found: phase.id,
                });
            }
            if phase.hazard_count == 0 {
                return Err(ConfigError::NoHazards { phase: phase.id });
            }
            if phase.hazard_width <= 0 || phase.hazard_height <= 0 {
                return Err(ConfigError::InvalidHazardSize {
                    phase: phase.id,
                    width: phase.hazard_width,
                    height: phase.hazard_height,
                });
            }
            if phase.hazard_width > FIELD_WIDTH {
                return Err(ConfigError::HazardTooWide {
                    phase: phase.id,
                    width: phase.hazard_width,
                });
            }
            if !(phase.hazard_speed > 0.0) {
                return Err(ConfigError::InvalidHazardSpeed {
                    phase: phase.id,
                    speed: phase.hazard_speed,
                });
            }

            match (index == last, phase.required_score) {
                (true, Some(_)) => {
                    return Err(ConfigError::FinalPhaseHasThreshold { phase: phase.id });
                }
                (false, None) => {
                    return Err(ConfigError::MissingThreshold { phase: phase.id });
                }
                (false, Some(found)) => {
                    if let Some(previous) = previous_threshold
                        && found <= previous
                    {
                        return Err(ConfigError::ThresholdNotIncreasing {
                            phase: phase.id,
                            previous,
                            found,
                        });
                    }
                    previous_threshold = Some(found);
                }
                (true, None) => {}
            }
        }

        Ok(())
    }

    /// Look up a phase by its 1-based id, clamped into the catalog range
    pub fn get(&self, id: u8) -> &PhaseConfig {
        let index = (id.max(1) as usize - 1).min(self.phases.len() - 1);
        if index + 1 != id as usize {
            log::warn!(
                "Phase {id} is outside 1..={}, using phase {}",
                self.max_id(),
                index + 1
            );
        }
        &self.phases[index]
    }

    pub fn max_id(&self) -> u8 {
        self.phases.len() as u8
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PhaseConfig> {
        self.phases.iter()
    }
}

impl Default for PhaseCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
