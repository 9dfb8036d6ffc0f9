//! Hazard and pickup spawning
//!
//! Builds the fixed hazard pool for a phase, recycles hazards in place and
//! drives the dormant/falling cycle of the two pickup singletons. All
//! randomness comes from the session RNG.

use glam::IVec2;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::motion::{Behavior, BehaviorKind};
use super::phase::PhaseConfig;
use super::rect::Rect;
use super::state::{FallingPickup, GameState, Meteor};
use crate::consts::*;

/// Random x that keeps a `width`-wide rect fully on the field
pub fn spawn_x<R: Rng + ?Sized>(rng: &mut R, width: i32) -> i32 {
    rng.random_range(0..=(FIELD_WIDTH - width).max(0))
}

/// Random y in the staggered entry band above the field
pub fn spawn_y<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    rng.random_range(SPAWN_Y_MIN..=SPAWN_Y_MAX)
}

/// Roll a behavior for one hazard. Phases without extra behaviors never
/// touch the RNG here.
pub fn roll_behavior<R: Rng + ?Sized>(rng: &mut R, phase: &PhaseConfig) -> Behavior {
    if phase.behaviors.is_empty() || !rng.random_bool(BEHAVIOR_CHANCE) {
        return Behavior::None;
    }
    match phase.behaviors.choose(rng) {
        Some(BehaviorKind::Zigzag) => Behavior::Zigzag {
            phase: rng.random_range(0.0..std::f32::consts::TAU),
            hz: rng.random_range(0.01..=0.04),
            amplitude: rng.random_range(30.0..=80.0),
        },
        Some(BehaviorKind::Accelerate) => Behavior::Accelerate,
        None => Behavior::None,
    }
}

/// Build a fresh meteor for `phase`
pub fn spawn_meteor<R: Rng + ?Sized>(rng: &mut R, phase: &PhaseConfig) -> Meteor {
    let x = spawn_x(rng, phase.hazard_width);
    let y = spawn_y(rng);
    let behavior = roll_behavior(rng, phase);
    Meteor {
        rect: Rect::new(x, y, phase.hazard_width, phase.hazard_height),
        speed: phase.hazard_speed,
        behavior,
        anim_offset: rng.random_range(0..HAZARD_ANIM_FRAMES),
    }
}

/// The full hazard pool for a phase
pub fn create_meteors<R: Rng + ?Sized>(rng: &mut R, phase: &PhaseConfig) -> Vec<Meteor> {
    (0..phase.hazard_count)
        .map(|_| spawn_meteor(rng, phase))
        .collect()
}

/// Put a meteor back above the field with a fresh position and behavior.
/// Speed carries over, so accelerated meteors stay fast until `ceiling`.
pub fn recycle<R: Rng + ?Sized>(
    rng: &mut R,
    meteor: &mut Meteor,
    phase: &PhaseConfig,
    ceiling: f32,
) {
    let x = spawn_x(rng, meteor.rect.width());
    let y = spawn_y(rng);
    let behavior = roll_behavior(rng, phase);
    let anim_offset = rng.random_range(0..HAZARD_ANIM_FRAMES);
    meteor.reset(IVec2::new(x, y), behavior, anim_offset);
    meteor.speed = meteor.speed.min(ceiling);
}

/// Run one tick of a pickup's lifecycle: count down while dormant, launch
/// when the countdown ends, fall while active and go dormant again once
/// it drops out of the field.
pub fn update_pickup<R: Rng + ?Sized>(rng: &mut R, pickup: &mut FallingPickup) {
    if pickup.is_falling {
        pickup.rect.pos.y += pickup.speed;
        if pickup.rect.top() > FIELD_HEIGHT {
            pickup.reset();
        }
        return;
    }

    pickup.spawn_timer.tick();
    if pickup.spawn_timer.is_expired() {
        let x = spawn_x(rng, pickup.rect.width());
        pickup.launch(x);
        log::debug!("{:?} launched at x={}", pickup.kind, x);
    }
}

/// Discard the current pool, build the one for the active phase and reset
/// both pickups
pub fn rebuild_for_phase(state: &mut GameState) {
    let phase = state.catalog.get(state.current_phase);
    state.meteors = create_meteors(&mut state.rng, phase);
    state.special.reset();
    state.pickup.reset();
    log::debug!(
        "Phase {}: spawned {} hazards ({} with behaviors)",
        phase.id,
        state.meteors.len(),
        state
            .meteors
            .iter()
            .filter(|m| m.behavior != Behavior::None)
            .count()
    );
}
