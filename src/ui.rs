//! Menu and game-over button layout
//!
//! The renderer draws these controls; the simulation only needs their
//! rectangles to decide what a pointer click hit.

use glam::{IVec2, Vec2};

use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::sim::Rect;

pub const BUTTON_WIDTH: i32 = 220;
pub const BUTTON_HEIGHT: i32 = 56;

/// Clickable controls on the menu and game-over screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Start,
    Restart,
    Exit,
}

impl Button {
    pub fn rect(self) -> Rect {
        let center_y = match self {
            Button::Start => FIELD_HEIGHT / 2 + 40,
            Button::Restart => FIELD_HEIGHT / 2 + 40,
            Button::Exit => FIELD_HEIGHT / 2 + 120,
        };
        Rect::from_center(
            IVec2::new(FIELD_WIDTH / 2, center_y),
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
        )
    }

    pub fn hit(self, pointer: Vec2) -> bool {
        self.rect().contains(pointer.floor().as_ivec2())
    }
}
