//! Fixed timestep simulation tick
//!
//! Core game loop that advances the session by one frame.

use glam::Vec2;

use super::collision::{self, Outcome};
use super::spawn;
use super::state::{GameEvent, GameMode, GameState};
use crate::ui::Button;

/// Keys the simulation reacts to as discrete presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    R,
    Escape,
    Q,
    Other,
}

/// Discrete input events decoded by the platform layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Window closed or equivalent; ends the session from any mode
    Quit,
    KeyDown(Key),
    /// Pointer press at a field position
    PointerDown(Vec2),
}

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Presses since the previous tick, in arrival order
    pub events: Vec<InputEvent>,
    /// Held state
    pub left: bool,
    pub right: bool,
    pub fire: bool,
    /// Current pointer position, if the pointer is over the field
    pub pointer: Option<Vec2>,
}

impl TickInput {
    pub fn with_event(event: InputEvent) -> Self {
        Self {
            events: vec![event],
            ..Default::default()
        }
    }
}

/// What a tick produced besides the state change itself
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickOutcome {
    /// Audio intents, in the order they happened
    pub events: Vec<GameEvent>,
    /// The driver should leave its loop
    pub quit: bool,
}

fn is_start(event: &InputEvent) -> bool {
    match event {
        InputEvent::KeyDown(Key::Enter | Key::Space) => true,
        InputEvent::PointerDown(pos) => Button::Start.hit(*pos),
        _ => false,
    }
}

fn is_restart(event: &InputEvent) -> bool {
    match event {
        InputEvent::KeyDown(Key::R | Key::Enter) => true,
        InputEvent::PointerDown(pos) => Button::Restart.hit(*pos),
        _ => false,
    }
}

fn is_exit(event: &InputEvent) -> bool {
    match event {
        InputEvent::KeyDown(Key::Escape | Key::Q) => true,
        InputEvent::PointerDown(pos) => Button::Exit.hit(*pos),
        _ => false,
    }
}

/// Advance the session by one tick
pub fn tick(state: &mut GameState, input: &TickInput) -> TickOutcome {
    let mut out = TickOutcome::default();

    if input.events.contains(&InputEvent::Quit) {
        out.quit = true;
        return out;
    }

    state.time_ticks += 1;

    match state.mode {
        GameMode::Menu => {
            if input.events.iter().any(is_start) {
                state.start(&mut out.events);
            }
        }

        GameMode::Playing => tick_playing(state, input, &mut out.events),

        GameMode::Transitioning => {
            // Simulation is frozen; only the banner countdown runs
            state.transition_timer.tick();
            if state.transition_timer.is_expired() {
                state.advance_phase(&mut out.events);
            }
        }

        GameMode::GameOver => {
            for event in &input.events {
                if is_restart(event) {
                    state.restart(&mut out.events);
                    break;
                }
                if is_exit(event) {
                    out.quit = true;
                    break;
                }
            }
        }
    }

    out
}

fn tick_playing(state: &mut GameState, input: &TickInput, events: &mut Vec<GameEvent>) {
    // Gating sees the score as it stood at the end of the previous tick
    if state.should_advance() {
        state.begin_transition(events);
        return;
    }

    let player = &mut state.player;
    player.steer(input.left, input.right, input.pointer.map(|p| p.x));
    player.tick_timers();
    if input.fire {
        player.try_fire();
    }
    player.update_lasers();

    if collision::advance_hazards(state, events) == Outcome::PlayerDestroyed {
        state.enter_game_over(events);
        return;
    }

    collision::resolve_laser_hits(state, events);

    spawn::update_pickup(&mut state.rng, &mut state.special);
    spawn::update_pickup(&mut state.rng, &mut state.pickup);

    if collision::resolve_special_hazard(state, events) == Outcome::PlayerDestroyed {
        state.enter_game_over(events);
        return;
    }

    collision::resolve_invincibility_pickup(state, events);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::settings::Settings;
    use crate::sim::phase::MusicTrack;
    use crate::sim::state::Sound;
    use glam::IVec2;

    fn playing_state(seed: u64) -> GameState {
        let mut state = GameState::new(Settings::with_seed(seed)).expect("valid settings");
        tick(&mut state, &TickInput::with_event(InputEvent::KeyDown(Key::Enter)));
        state
    }

    #[test]
    fn test_menu_to_playing() {
        let mut state = GameState::new(Settings::with_seed(1)).expect("valid settings");
        assert_eq!(state.mode, GameMode::Menu);

        // Nothing happens without the start input
        let out = tick(&mut state, &TickInput::default());
        assert_eq!(state.mode, GameMode::Menu);
        assert!(out.events.is_empty());

        let out = tick(&mut state, &TickInput::with_event(InputEvent::KeyDown(Key::Enter)));
        assert_eq!(state.mode, GameMode::Playing);
        assert_eq!(out.events, vec![GameEvent::PlayMusic(MusicTrack::Phase1)]);
    }

    #[test]
    fn test_menu_start_button_click() {
        let mut state = GameState::new(Settings::with_seed(1)).expect("valid settings");
        let miss = TickInput::with_event(InputEvent::PointerDown(Vec2::new(2.0, 2.0)));
        tick(&mut state, &miss);
        assert_eq!(state.mode, GameMode::Menu);

        let click = Button::Start.rect().center().as_vec2();
        tick(&mut state, &TickInput::with_event(InputEvent::PointerDown(click)));
        assert_eq!(state.mode, GameMode::Playing);
    }

    #[test]
    fn test_quit_from_any_mode() {
        let mut state = GameState::new(Settings::with_seed(1)).expect("valid settings");
        let out = tick(&mut state, &TickInput::with_event(InputEvent::Quit));
        assert!(out.quit);

        let mut state = playing_state(1);
        let out = tick(&mut state, &TickInput::with_event(InputEvent::Quit));
        assert!(out.quit);
        assert_eq!(state.mode, GameMode::Playing);
    }

    #[test]
    fn test_gating_enters_transition_with_single_fade() {
        let mut state = playing_state(2);
        state.score = 30;
        let out = tick(&mut state, &TickInput::default());
        assert_eq!(state.mode, GameMode::Transitioning);
        assert_eq!(
            out.events,
            vec![GameEvent::FadeOutMusic {
                duration_ms: FADE_OUT_MS
            }]
        );
        assert_eq!(state.banner_phase(), Some(2));

        // No further fades while the banner shows
        let out = tick(&mut state, &TickInput::default());
        assert!(out.events.is_empty());
    }

    #[test]
    fn test_transition_freezes_simulation() {
        let mut state = playing_state(3);
        state.score = 30;
        tick(&mut state, &TickInput::default());
        let before: Vec<_> = state.meteors.iter().map(|m| m.rect).collect();
        let player = state.player.rect;

        let input = TickInput {
            left: true,
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        let after: Vec<_> = state.meteors.iter().map(|m| m.rect).collect();
        assert_eq!(before, after);
        assert_eq!(state.player.rect, player);
        assert!(state.player.lasers.is_empty());
    }

    #[test]
    fn test_transition_advances_after_delay() {
        let mut state = playing_state(4);
        state.score = 30;
        tick(&mut state, &TickInput::default());

        for _ in 0..TRANSITION_TICKS - 1 {
            tick(&mut state, &TickInput::default());
            assert_eq!(state.mode, GameMode::Transitioning);
        }
        let out = tick(&mut state, &TickInput::default());
        assert_eq!(state.mode, GameMode::Playing);
        assert_eq!(state.current_phase, 2);
        assert_eq!(state.meteors.len(), 7);
        assert_eq!(out.events, vec![GameEvent::PlayMusic(MusicTrack::Phase2)]);
    }

    #[test]
    fn test_final_phase_never_transitions() {
        let mut state = playing_state(5);
        state.current_phase = 3;
        spawn::rebuild_for_phase(&mut state);
        state.score = 1_000_000;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.mode, GameMode::Playing);
        assert_eq!(state.current_phase, 3);
    }

    #[test]
    fn test_fire_spawns_laser_every_cooldown() {
        let mut state = playing_state(6);
        let input = TickInput {
            fire: true,
            ..Default::default()
        };
        let mut shots = 0;
        let mut prev = 0;
        for _ in 0..SHOOT_COOLDOWN_TICKS * 3 {
            tick(&mut state, &input);
            let now = state.player.lasers.len();
            if now > prev {
                shots += 1;
            }
            prev = now;
        }
        assert_eq!(shots, 3);
    }

    #[test]
    fn test_game_over_restart_and_exit() {
        let mut state = playing_state(7);
        state.player.lives = 1;
        state.meteors[0].behavior = crate::sim::Behavior::None;
        let speed = state.meteors[0].speed as i32;
        state.meteors[0].rect.pos = state.player.rect.pos - IVec2::new(0, speed);

        let out = tick(&mut state, &TickInput::default());
        assert_eq!(state.mode, GameMode::GameOver);
        assert_eq!(
            out.events
                .iter()
                .filter(|e| **e == GameEvent::StopMusic)
                .count(),
            1
        );
        assert!(out.events.contains(&GameEvent::PlaySound(Sound::Hit)));

        // Game over ignores gameplay input
        let out = tick(&mut state, &TickInput::default());
        assert!(out.events.is_empty());
        assert!(!out.quit);

        let out = tick(&mut state, &TickInput::with_event(InputEvent::KeyDown(Key::R)));
        assert_eq!(state.mode, GameMode::Playing);
        assert_eq!(state.lives(), 3);
        assert_eq!(out.events, vec![GameEvent::PlayMusic(MusicTrack::Phase1)]);

        state.enter_game_over(&mut Vec::new());
        let exit = Button::Exit.rect().center().as_vec2();
        let out = tick(&mut state, &TickInput::with_event(InputEvent::PointerDown(exit)));
        assert!(out.quit);
    }

    #[test]
    fn test_determinism() {
        let mut a = playing_state(99);
        let mut b = playing_state(99);
        let inputs = [
            TickInput {
                left: true,
                fire: true,
                ..Default::default()
            },
            TickInput {
                pointer: Some(Vec2::new(600.0, 300.0)),
                ..Default::default()
            },
            TickInput::default(),
        ];
        for _ in 0..200 {
            for input in &inputs {
                tick(&mut a, input);
                tick(&mut b, input);
            }
        }
        assert_eq!(a.score, b.score);
        assert_eq!(a.lives(), b.lives());
        assert_eq!(a.mode, b.mode);
        assert_eq!(a.meteors, b.meteors);
    }
}
