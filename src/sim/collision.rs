//! Collision resolution and scoring
//!
//! Resolution runs once per tick in a fixed order so nothing is scored or
//! penalized twice within a frame:
//! 1. hazard leaves the bottom (dodge)
//! 2. hazard hits the player
//! 3. laser hits a hazard
//! 4. special hazard hits the player (instant kill)
//! 5. invincibility pickup reaches the player
//!
//! Every test uses [`Rect::intersects`](super::rect::Rect::intersects), so
//! touching edges never count.

use super::spawn;
use super::state::{GameEvent, GameState, Sound};
use crate::consts::{DODGE_POINTS, INVINCIBILITY_TICKS, LASER_HIT_POINTS};

/// Whether the session survived a resolution step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    /// Lives reached zero; no further steps run this tick
    PlayerDestroyed,
}

/// Steps 1 and 2: move every hazard, then score dodges and apply hits.
/// Stops at the first hit that takes the last life.
pub fn advance_hazards(state: &mut GameState, events: &mut Vec<GameEvent>) -> Outcome {
    let phase = state.catalog.get(state.current_phase);
    let ceiling = state.settings.max_hazard_speed;

    for meteor in state.meteors.iter_mut() {
        meteor.advance(ceiling);

        if meteor.has_exited() {
            spawn::recycle(&mut state.rng, meteor, phase, ceiling);
            state.score += DODGE_POINTS;
            events.push(GameEvent::PlaySound(Sound::Point));
        }

        if meteor.rect.intersects(&state.player.rect) {
            spawn::recycle(&mut state.rng, meteor, phase, ceiling);
            if state.player.is_invincible() {
                continue;
            }
            state.player.lives = state.player.lives.saturating_sub(1);
            events.push(GameEvent::PlaySound(Sound::Hit));
            if state.player.lives == 0 {
                return Outcome::PlayerDestroyed;
            }
        }
    }

    Outcome::Continue
}

/// Step 3: each laser destroys at most one hazard, the first in pool order
pub fn resolve_laser_hits(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let phase = state.catalog.get(state.current_phase);
    let ceiling = state.settings.max_hazard_speed;

    let mut i = 0;
    while i < state.player.lasers.len() {
        let laser = state.player.lasers[i].rect;
        match state
            .meteors
            .iter_mut()
            .find(|m| m.rect.intersects(&laser))
        {
            Some(meteor) => {
                spawn::recycle(&mut state.rng, meteor, phase, ceiling);
                state.player.lasers.remove(i);
                state.score += LASER_HIT_POINTS;
                events.push(GameEvent::PlaySound(Sound::Point));
            }
            None => i += 1,
        }
    }
}

/// Step 4: the special hazard kills outright, invincible or not. It keeps
/// falling afterwards; only leaving the field returns it to dormant.
pub fn resolve_special_hazard(state: &mut GameState, events: &mut Vec<GameEvent>) -> Outcome {
    if state.special.is_collidable() && state.special.rect.intersects(&state.player.rect) {
        state.player.lives = 0;
        events.push(GameEvent::PlaySound(Sound::Hit));
        return Outcome::PlayerDestroyed;
    }
    Outcome::Continue
}

/// Step 5: collect the invincibility pickup unless already invincible
pub fn resolve_invincibility_pickup(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if state.pickup.is_collidable()
        && !state.player.is_invincible()
        && state.pickup.rect.intersects(&state.player.rect)
    {
        state.player.invincible.start(INVINCIBILITY_TICKS);
        state.pickup.reset();
        events.push(GameEvent::PlaySound(Sound::Point));
        log::debug!("Invincibility collected");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::settings::Settings;
    use crate::sim::motion::Behavior;
    use crate::sim::state::{GameMode, Laser};
    use glam::IVec2;

    /// Session in Playing with every meteor parked far above the field
    fn quiet_state() -> GameState {
        let mut state = GameState::new(Settings::with_seed(9)).expect("valid settings");
        state.mode = GameMode::Playing;
        for meteor in &mut state.meteors {
            meteor.rect.pos = IVec2::new(0, -10_000);
            meteor.behavior = Behavior::None;
        }
        state
    }

    fn park_on_player(state: &mut GameState, index: usize) {
        let speed = state.meteors[index].speed as i32;
        let target = state.player.rect.pos - IVec2::new(0, speed);
        state.meteors[index].rect.pos = target;
    }

    #[test]
    fn test_dodge_scores_one_point() {
        let mut state = quiet_state();
        let speed = state.meteors[0].speed as i32;
        state.meteors[0].rect.pos = IVec2::new(0, FIELD_HEIGHT + 1 - speed);

        let mut events = Vec::new();
        assert_eq!(advance_hazards(&mut state, &mut events), Outcome::Continue);
        assert_eq!(state.score, 1);
        assert!(state.meteors[0].rect.y() < 0);
        assert_eq!(events, vec![GameEvent::PlaySound(Sound::Point)]);
    }

    #[test]
    fn test_hazard_hit_costs_a_life() {
        let mut state = quiet_state();
        park_on_player(&mut state, 0);

        let mut events = Vec::new();
        assert_eq!(advance_hazards(&mut state, &mut events), Outcome::Continue);
        assert_eq!(state.lives(), 2);
        assert!(state.meteors[0].rect.y() < 0);
        assert_eq!(events, vec![GameEvent::PlaySound(Sound::Hit)]);
    }

    #[test]
    fn test_invincible_player_loses_nothing() {
        let mut state = quiet_state();
        state.player.invincible.start(INVINCIBILITY_TICKS);
        park_on_player(&mut state, 0);

        let mut events = Vec::new();
        advance_hazards(&mut state, &mut events);
        assert_eq!(state.lives(), 3);
        assert!(state.meteors[0].rect.y() < 0);
        assert!(events.is_empty());
    }

    #[test]
    fn test_last_life_stops_resolution() {
        let mut state = quiet_state();
        state.player.lives = 1;
        park_on_player(&mut state, 0);
        park_on_player(&mut state, 1);

        let mut events = Vec::new();
        assert_eq!(
            advance_hazards(&mut state, &mut events),
            Outcome::PlayerDestroyed
        );
        assert_eq!(state.lives(), 0);
        // The second meteor was never processed
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_laser_destroys_first_hazard_only() {
        let mut state = quiet_state();
        state.meteors[0].rect.pos = IVec2::new(100, 100);
        state.meteors[1].rect.pos = IVec2::new(100, 100);
        state.player.lasers.push(Laser::new(IVec2::new(120, 130)));

        let mut events = Vec::new();
        resolve_laser_hits(&mut state, &mut events);
        assert!(state.player.lasers.is_empty());
        assert_eq!(state.score, LASER_HIT_POINTS);
        assert!(state.meteors[0].rect.y() < 0);
        assert_eq!(state.meteors[1].rect.pos, IVec2::new(100, 100));
        assert_eq!(events, vec![GameEvent::PlaySound(Sound::Point)]);
    }

    #[test]
    fn test_missed_laser_survives() {
        let mut state = quiet_state();
        state.player.lasers.push(Laser::new(IVec2::new(120, 130)));
        let mut events = Vec::new();
        resolve_laser_hits(&mut state, &mut events);
        assert_eq!(state.player.lasers.len(), 1);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_special_hazard_ignores_invincibility() {
        let mut state = quiet_state();
        state.player.invincible.start(INVINCIBILITY_TICKS);
        state.special.launch(0);
        state.special.rect.pos = state.player.rect.pos;

        let mut events = Vec::new();
        assert_eq!(
            resolve_special_hazard(&mut state, &mut events),
            Outcome::PlayerDestroyed
        );
        assert_eq!(state.lives(), 0);
        assert!(state.special.is_falling);
    }

    #[test]
    fn test_dormant_special_hazard_is_harmless() {
        let mut state = quiet_state();
        state.special.rect.pos = state.player.rect.pos;
        let mut events = Vec::new();
        assert_eq!(
            resolve_special_hazard(&mut state, &mut events),
            Outcome::Continue
        );
        assert_eq!(state.lives(), 3);
    }

    #[test]
    fn test_pickup_grants_invincibility_once() {
        let mut state = quiet_state();
        state.pickup.launch(0);
        state.pickup.rect.pos = state.player.rect.pos;

        let mut events = Vec::new();
        resolve_invincibility_pickup(&mut state, &mut events);
        assert!(state.player.is_invincible());
        assert_eq!(state.player.invincible.remaining(), INVINCIBILITY_TICKS);
        assert!(!state.pickup.is_falling);
        assert_eq!(events, vec![GameEvent::PlaySound(Sound::Point)]);

        // Already invincible: a second pickup stays in play
        state.pickup.launch(0);
        state.pickup.rect.pos = state.player.rect.pos;
        events.clear();
        resolve_invincibility_pickup(&mut state, &mut events);
        assert!(state.pickup.is_falling);
        assert!(events.is_empty());
    }
}
