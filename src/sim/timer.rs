//! Frame-counted countdown
//!
//! Shared by the shoot cooldown, invincibility, pickup spawn intervals and
//! the phase transition delay. Purely tick-driven, never wall-clock.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timer {
    remaining: u32,
}

impl Timer {
    /// A timer that is already running with `ticks` left
    pub fn started(ticks: u32) -> Self {
        Self { remaining: ticks }
    }

    pub fn start(&mut self, ticks: u32) {
        self.remaining = ticks;
    }

    /// Advance one simulation frame
    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    pub fn stop(&mut self) {
        self.remaining = 0;
    }

    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    pub fn is_active(&self) -> bool {
        !self.is_expired()
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}
