//! Space Escape - a three-phase meteor dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, phase progression)
//! - `ui`: Fixed button layout used to interpret pointer clicks
//! - `settings`: Session configuration loaded from JSON
//! - `error`: Configuration errors raised at session construction
//!
//! Rendering, audio playback and input polling live outside this crate. The
//! simulation consumes decoded input events and emits [`sim::GameEvent`]
//! intents plus a [`sim::RenderSnapshot`] every tick.

pub mod error;
pub mod settings;
pub mod sim;
pub mod ui;

pub use error::ConfigError;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (one tick per rendered frame)
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Play field dimensions
    pub const FIELD_WIDTH: i32 = 800;
    pub const FIELD_HEIGHT: i32 = 600;

    /// Player ship defaults
    pub const PLAYER_WIDTH: i32 = 80;
    pub const PLAYER_HEIGHT: i32 = 60;
    /// Vertical center of the ship, measured from the top of the field
    pub const PLAYER_CENTER_Y: i32 = FIELD_HEIGHT - 60;
    pub const PLAYER_SPEED: i32 = 7;
    pub const STARTING_LIVES: u8 = 3;

    /// Laser defaults
    pub const LASER_WIDTH: i32 = 4;
    pub const LASER_HEIGHT: i32 = 16;
    pub const LASER_SPEED: i32 = 10;

    /// Hazard spawn band above the field (inclusive)
    pub const SPAWN_Y_MIN: i32 = -500;
    pub const SPAWN_Y_MAX: i32 = -40;
    /// Chance that a hazard picks one of the phase's special behaviors
    pub const BEHAVIOR_CHANCE: f64 = 0.35;
    /// Speed gained per tick under the accelerate behavior
    pub const ACCELERATION_PER_TICK: f32 = 0.02;
    /// Default ceiling for accelerating hazards
    pub const MAX_HAZARD_SPEED: f32 = 24.0;
    /// Zigzag lateral step multiplier
    pub const ZIGZAG_STEP: f32 = 3.0;

    /// Special (instant-kill) hazard
    pub const SPECIAL_SIZE: i32 = 50;
    pub const SPECIAL_SPEED: i32 = 6;

    /// Invincibility pickup
    pub const PICKUP_SIZE: i32 = 30;
    pub const PICKUP_SPEED: i32 = 3;

    /// Score awards
    pub const DODGE_POINTS: u32 = 1;
    pub const LASER_HIT_POINTS: u32 = 5;

    /// Timer durations in ticks
    pub const SHOOT_COOLDOWN_TICKS: u32 = 10;
    pub const INVINCIBILITY_TICKS: u32 = 300;
    pub const SPECIAL_SPAWN_TICKS: u32 = 180;
    pub const PICKUP_SPAWN_TICKS: u32 = 300;
    pub const TRANSITION_TICKS: u32 = 90;

    /// Music fade-out when a phase ends
    pub const FADE_OUT_MS: u32 = 500;

    /// Animation pacing for the renderer
    pub const HAZARD_ANIM_FRAMES: u32 = 8;
    pub const HAZARD_ANIM_TICKS: u32 = 8;
    pub const ENGINE_ANIM_FRAMES: u32 = 4;
    pub const ENGINE_ANIM_TICKS: u32 = 4;
    pub const BLINK_TICKS: u32 = 6;
}
