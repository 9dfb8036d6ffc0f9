//! Game state and core simulation types
//!
//! The whole session lives in one owned [`GameState`]; nothing is global.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::motion::Behavior;
use super::phase::{MusicTrack, PhaseCatalog, PhaseConfig};
use super::rect::Rect;
use super::spawn;
use super::timer::Timer;
use crate::consts::*;
use crate::error::ConfigError;
use crate::settings::Settings;

/// Top-level game mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Title screen, waiting for the start input
    Menu,
    /// Active gameplay
    Playing,
    /// Frozen pause between phases while the "Phase N" banner shows
    Transitioning,
    /// Run ended, waiting for restart or quit
    GameOver,
}

/// Sound effects the audio layer should play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sound {
    /// Dodge or laser kill
    Point,
    /// Player struck
    Hit,
}

/// Side-effect intents emitted by a tick. The simulation never performs
/// audio itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    PlaySound(Sound),
    PlayMusic(MusicTrack),
    StopMusic,
    FadeOutMusic { duration_ms: u32 },
}

/// A laser bolt fired by the player
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Laser {
    pub rect: Rect,
    /// Upward speed in pixels per tick
    pub speed: i32,
}

impl Laser {
    /// Spawn a bolt whose bottom-centre sits on `muzzle`
    pub fn new(muzzle: IVec2) -> Self {
        Self {
            rect: Rect::new(
                muzzle.x - LASER_WIDTH / 2,
                muzzle.y - LASER_HEIGHT,
                LASER_WIDTH,
                LASER_HEIGHT,
            ),
            speed: LASER_SPEED,
        }
    }

    pub fn advance(&mut self) {
        self.rect.pos.y -= self.speed;
    }

    /// Fully above the top edge
    pub fn is_off_field(&self) -> bool {
        self.rect.bottom() <= 0
    }
}

/// The player's ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    pub speed: i32,
    pub lives: u8,
    pub shoot_cooldown: Timer,
    pub invincible: Timer,
    /// Live lasers, oldest first
    pub lasers: Vec<Laser>,
}

impl Player {
    pub fn new(lives: u8, speed: i32) -> Self {
        Self {
            rect: Rect::from_center(
                IVec2::new(FIELD_WIDTH / 2, PLAYER_CENTER_Y),
                PLAYER_WIDTH,
                PLAYER_HEIGHT,
            ),
            speed,
            lives,
            shoot_cooldown: Timer::default(),
            invincible: Timer::default(),
            lasers: Vec::new(),
        }
    }

    pub fn is_invincible(&self) -> bool {
        self.invincible.is_active()
    }

    /// Move from held keys, falling back to following the pointer
    pub fn steer(&mut self, left: bool, right: bool, pointer_x: Option<f32>) {
        if left || right {
            if left && self.rect.left() > 0 {
                self.rect.pos.x -= self.speed;
            }
            if right && self.rect.right() < FIELD_WIDTH {
                self.rect.pos.x += self.speed;
            }
        } else if let Some(target) = pointer_x {
            let dx = target.round() as i32 - self.rect.center().x;
            self.rect.pos.x += dx.clamp(-self.speed, self.speed);
        }
        self.rect.clamp_x(FIELD_WIDTH);
    }

    /// Fire a laser if the cooldown allows. Returns true when a shot left.
    pub fn try_fire(&mut self) -> bool {
        if self.shoot_cooldown.is_active() {
            return false;
        }
        let muzzle = IVec2::new(self.rect.center().x, self.rect.top());
        self.lasers.push(Laser::new(muzzle));
        self.shoot_cooldown.start(SHOOT_COOLDOWN_TICKS);
        true
    }

    pub fn tick_timers(&mut self) {
        self.shoot_cooldown.tick();
        self.invincible.tick();
    }

    /// Move lasers and drop the ones that left the field
    pub fn update_lasers(&mut self) {
        for laser in &mut self.lasers {
            laser.advance();
        }
        self.lasers.retain(|l| !l.is_off_field());
    }

    /// Blink state for the renderer while invincible
    pub fn blink_visible(&self) -> bool {
        !self.is_invincible() || (self.invincible.remaining() / BLINK_TICKS) % 2 == 0
    }
}

/// A falling meteor. Meteors live in a fixed pool per phase and are
/// recycled in place rather than removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meteor {
    pub rect: Rect,
    /// Fall speed accumulator (pixels per tick)
    pub speed: f32,
    pub behavior: Behavior,
    /// Offset into the sprite animation so meteors don't spin in lockstep
    pub anim_offset: u32,
}

impl Meteor {
    pub fn advance(&mut self, speed_ceiling: f32) {
        self.behavior
            .advance(&mut self.rect, &mut self.speed, speed_ceiling);
    }

    /// Reposition above the field with a new behavior; speed is untouched
    pub fn reset(&mut self, pos: IVec2, behavior: Behavior, anim_offset: u32) {
        self.rect.pos = pos;
        self.behavior = behavior;
        self.anim_offset = anim_offset;
    }

    /// Dropped past the bottom of the field
    pub fn has_exited(&self) -> bool {
        self.rect.y() > FIELD_HEIGHT
    }

    pub fn anim_frame(&self, time_ticks: u64) -> u32 {
        ((time_ticks / HAZARD_ANIM_TICKS as u64) as u32).wrapping_add(self.anim_offset)
            % HAZARD_ANIM_FRAMES
    }
}

/// The two session singletons that periodically fall through the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupKind {
    /// Instant kill on contact, ignores invincibility
    SpecialHazard,
    /// Grants temporary invincibility
    Invincibility,
}

/// Dormant (counting down) → falling (collidable) → dormant again
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallingPickup {
    pub kind: PickupKind,
    pub rect: Rect,
    pub speed: i32,
    pub spawn_timer: Timer,
    spawn_interval: u32,
    pub is_falling: bool,
}

impl FallingPickup {
    pub fn new(kind: PickupKind) -> Self {
        let (size, speed, spawn_interval) = match kind {
            PickupKind::SpecialHazard => (SPECIAL_SIZE, SPECIAL_SPEED, SPECIAL_SPAWN_TICKS),
            PickupKind::Invincibility => (PICKUP_SIZE, PICKUP_SPEED, PICKUP_SPAWN_TICKS),
        };
        Self {
            kind,
            rect: Rect::new(0, -size, size, size),
            speed,
            spawn_timer: Timer::started(spawn_interval),
            spawn_interval,
            is_falling: false,
        }
    }

    /// Back to dormant with a full spawn countdown
    pub fn reset(&mut self) {
        self.is_falling = false;
        self.rect.pos = IVec2::new(0, -self.rect.height());
        self.spawn_timer.start(self.spawn_interval);
    }

    /// Start falling from just above the field at `x`
    pub fn launch(&mut self, x: i32) {
        self.rect.pos = IVec2::new(x, -self.rect.height());
        self.rect.clamp_x(FIELD_WIDTH);
        self.is_falling = true;
    }

    pub fn is_collidable(&self) -> bool {
        self.is_falling
    }

    pub fn spawn_interval(&self) -> u32 {
        self.spawn_interval
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub settings: Settings,
    pub catalog: PhaseCatalog,
    pub(crate) rng: Pcg32,
    pub mode: GameMode,
    /// 1-based id of the active phase
    pub current_phase: u8,
    pub score: u32,
    /// Ticks since the session was created (drives animations)
    pub time_ticks: u64,
    pub transition_timer: Timer,
    pub player: Player,
    /// Fixed-size hazard pool for the current phase
    pub meteors: Vec<Meteor>,
    pub special: FallingPickup,
    pub pickup: FallingPickup,
}

impl GameState {
    /// New session on the built-in phases, starting at the menu
    pub fn new(settings: Settings) -> Result<Self, ConfigError> {
        Self::with_catalog(settings, PhaseCatalog::builtin())
    }

    pub fn with_catalog(settings: Settings, catalog: PhaseCatalog) -> Result<Self, ConfigError> {
        settings.validate()?;
        catalog.validate()?;

        let mut state = Self {
            rng: Pcg32::seed_from_u64(settings.seed()),
            player: Player::new(settings.starting_lives, settings.player_speed),
            settings,
            catalog,
            mode: GameMode::Menu,
            current_phase: 1,
            score: 0,
            time_ticks: 0,
            transition_timer: Timer::default(),
            meteors: Vec::new(),
            special: FallingPickup::new(PickupKind::SpecialHazard),
            pickup: FallingPickup::new(PickupKind::Invincibility),
        };
        spawn::rebuild_for_phase(&mut state);
        log::info!("Session created (seed {})", state.settings.seed());
        Ok(state)
    }

    pub fn phase_config(&self) -> &PhaseConfig {
        self.catalog.get(self.current_phase)
    }

    pub fn lives(&self) -> u8 {
        self.player.lives
    }

    /// Leave the menu and start phase 1
    pub(crate) fn start(&mut self, events: &mut Vec<GameEvent>) {
        self.mode = GameMode::Playing;
        events.push(GameEvent::PlayMusic(self.phase_config().music));
        log::info!("Game started");
    }

    /// Full reset back to phase 1 with a fresh ship
    pub(crate) fn restart(&mut self, events: &mut Vec<GameEvent>) {
        self.player = Player::new(self.settings.starting_lives, self.settings.player_speed);
        self.current_phase = 1;
        self.score = 0;
        self.transition_timer.stop();
        spawn::rebuild_for_phase(self);
        self.mode = GameMode::Playing;
        events.push(GameEvent::PlayMusic(self.phase_config().music));
        log::info!("Game restarted");
    }

    /// Score gating: true once the active phase's threshold is met.
    /// The final phase never advances.
    pub fn should_advance(&self) -> bool {
        if self.current_phase >= self.catalog.max_id() {
            return false;
        }
        self.phase_config()
            .required_score
            .is_some_and(|required| self.score >= required)
    }

    pub(crate) fn begin_transition(&mut self, events: &mut Vec<GameEvent>) {
        self.mode = GameMode::Transitioning;
        self.transition_timer.start(TRANSITION_TICKS);
        events.push(GameEvent::FadeOutMusic {
            duration_ms: self.settings.fade_out_ms,
        });
        log::info!(
            "Phase {} cleared at score {}",
            self.current_phase,
            self.score
        );
    }

    /// Move on to the next phase (clamped to the last one) and resume play
    pub(crate) fn advance_phase(&mut self, events: &mut Vec<GameEvent>) {
        self.current_phase = (self.current_phase + 1).min(self.catalog.max_id());
        spawn::rebuild_for_phase(self);
        self.mode = GameMode::Playing;
        events.push(GameEvent::PlayMusic(self.phase_config().music));
        log::info!("Phase {} begins", self.current_phase);
    }

    pub(crate) fn enter_game_over(&mut self, events: &mut Vec<GameEvent>) {
        if self.mode == GameMode::GameOver {
            return;
        }
        self.mode = GameMode::GameOver;
        events.push(GameEvent::StopMusic);
        log::info!(
            "Game over: score {} in phase {}",
            self.score,
            self.current_phase
        );
    }

    /// Phase number shown on the banner while transitioning
    pub fn banner_phase(&self) -> Option<u8> {
        (self.mode == GameMode::Transitioning)
            .then(|| (self.current_phase + 1).min(self.catalog.max_id()))
    }
}
