//! Render-ready view of a session
//!
//! Everything a renderer needs for one frame, detached from the live state.

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::{GameMode, GameState};
use crate::consts::{ENGINE_ANIM_FRAMES, ENGINE_ANIM_TICKS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HazardSprite {
    pub rect: Rect,
    /// Animation frame index
    pub frame: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hud {
    pub score: u32,
    pub lives: u8,
    pub phase: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub mode: GameMode,
    /// Background image index (follows the phase)
    pub background: u8,
    pub player: Rect,
    /// False on the "off" beats of the invincibility blink
    pub player_visible: bool,
    pub player_invincible: bool,
    pub engine_frame: u32,
    pub lasers: Vec<Rect>,
    pub hazards: Vec<HazardSprite>,
    /// Special hazard, present only while falling
    pub special: Option<Rect>,
    /// Invincibility pickup, present only while falling
    pub pickup: Option<Rect>,
    pub hud: Hud,
    /// "Phase N" banner shown while transitioning
    pub banner_phase: Option<u8>,
}

impl RenderSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let t = state.time_ticks;
        Self {
            mode: state.mode,
            background: state.phase_config().background,
            player: state.player.rect,
            player_visible: state.player.blink_visible(),
            player_invincible: state.player.is_invincible(),
            engine_frame: ((t / ENGINE_ANIM_TICKS as u64) % ENGINE_ANIM_FRAMES as u64) as u32,
            lasers: state.player.lasers.iter().map(|l| l.rect).collect(),
            hazards: state
                .meteors
                .iter()
                .map(|m| HazardSprite {
                    rect: m.rect,
                    frame: m.anim_frame(t),
                })
                .collect(),
            special: state.special.is_falling.then_some(state.special.rect),
            pickup: state.pickup.is_falling.then_some(state.pickup.rect),
            hud: Hud {
                score: state.score,
                lives: state.player.lives,
                phase: state.current_phase,
            },
            banner_phase: state.banner_phase(),
        }
    }
}
