//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick per frame, timers count ticks)
//! - Seeded RNG only
//! - Stable iteration order (hazard pool is index-stable)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod motion;
pub mod phase;
pub mod rect;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod timer;

pub use collision::Outcome;
pub use motion::{Behavior, BehaviorKind};
pub use phase::{MusicTrack, PhaseCatalog, PhaseConfig};
pub use rect::Rect;
pub use snapshot::{HazardSprite, Hud, RenderSnapshot};
pub use state::{
    FallingPickup, GameEvent, GameMode, GameState, Laser, Meteor, PickupKind, Player, Sound,
};
pub use tick::{InputEvent, Key, TickInput, TickOutcome, tick};
pub use timer::Timer;
