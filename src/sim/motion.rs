//! Hazard motion models
//!
//! Hazards fall straight down by the integer part of their speed every
//! tick. A phase may also hand out one of two extra behaviors:
//! - zigzag: sinusoidal sideways drift
//! - accelerate: speed grows a little every tick, up to a ceiling

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::{ACCELERATION_PER_TICK, FIELD_WIDTH, ZIGZAG_STEP};

/// Behaviors a phase may allow (catalog data)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BehaviorKind {
    Zigzag,
    Accelerate,
}

/// Per-hazard motion state
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Behavior {
    #[default]
    None,
    Zigzag {
        /// Current oscillator phase (radians)
        phase: f32,
        /// Phase advance per tick
        hz: f32,
        /// Kept for renderers and future tuning; does not scale the drift
        amplitude: f32,
    },
    Accelerate,
}

impl Behavior {
    pub fn kind(&self) -> Option<BehaviorKind> {
        match self {
            Behavior::None => None,
            Behavior::Zigzag { .. } => Some(BehaviorKind::Zigzag),
            Behavior::Accelerate => Some(BehaviorKind::Accelerate),
        }
    }

    /// Advance one tick. Sideways drift and acceleration are applied before
    /// the fall so a new speed takes effect on the same tick.
    pub fn advance(&mut self, rect: &mut Rect, speed: &mut f32, ceiling: f32) {
        match self {
            Behavior::None => {}
            Behavior::Zigzag { phase, hz, .. } => {
                *phase += *hz;
                rect.pos.x += zigzag_step(*phase);
                rect.clamp_x(FIELD_WIDTH);
            }
            Behavior::Accelerate => {
                *speed = accelerate(*speed, ceiling);
            }
        }
        rect.pos.y += fall_step(*speed);
    }
}

/// Vertical displacement for one tick. The speed is a float accumulator but
/// the hazard only moves by its whole part (truncated, never rounded).
#[inline]
pub fn fall_step(speed: f32) -> i32 {
    speed as i32
}

/// Sideways displacement for a zigzag hazard at `phase`
#[inline]
pub fn zigzag_step(phase: f32) -> i32 {
    (phase.sin() * ZIGZAG_STEP) as i32
}

/// New speed after one tick of acceleration, never past `ceiling`.
/// A speed already above the ceiling is left alone.
#[inline]
pub fn accelerate(speed: f32, ceiling: f32) -> f32 {
    if speed >= ceiling {
        speed
    } else {
        (speed + ACCELERATION_PER_TICK).min(ceiling)
    }
}
