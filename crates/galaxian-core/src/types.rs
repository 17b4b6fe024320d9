//! Fundamental geometric and simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in field space (pixels, y grows downward).
/// `x`/`y` is the top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Play-field dimensions. All spawn and clamp bounds derive from this.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldSize {
    pub width: f32,
    pub height: f32,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of simulated (unpaused) frames.
    pub frame: u64,
    /// Simulation clock in milliseconds. Only advances while playing,
    /// so buffs and cooldowns freeze with the game.
    pub now_ms: f64,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of size `w`×`h` centered on `center`.
    pub fn centered(center: Vec2, w: f32, h: f32) -> Self {
        Self {
            x: center.x - w / 2.0,
            y: center.y - h / 2.0,
            w,
            h,
        }
    }

    /// Strict AABB overlap. Touching edges do not count.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.x += delta.x;
        self.y += delta.y;
    }

    /// True if no part of the rectangle lies inside the field (with margin).
    pub fn outside(&self, field: &FieldSize, margin: f32) -> bool {
        self.bottom() < -margin
            || self.y > field.height + margin
            || self.right() < -margin
            || self.x > field.width + margin
    }
}

impl FieldSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for FieldSize {
    fn default() -> Self {
        Self {
            width: crate::constants::FIELD_WIDTH,
            height: crate::constants::FIELD_HEIGHT,
        }
    }
}

impl SimTime {
    /// Advance by one simulated frame of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.frame += 1;
        self.now_ms += f64::from(dt) * 1000.0;
    }
}
