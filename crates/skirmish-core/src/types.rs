//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 2D point or direction in scene units.
/// x grows to the right, y grows upward; the origin is the bottom-left corner.
pub type Point2D = glam::Vec2;

/// Width/height pair for screens and sprites.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size2D {
    pub width: f32,
    pub height: f32,
}

impl Size2D {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    pub fn half_height(&self) -> f32 {
        self.height / 2.0
    }

    /// Half extents as a vector, for axis-aligned box tests.
    pub fn half_extents(&self) -> Point2D {
        Point2D::new(self.half_width(), self.half_height())
    }

    pub fn is_positive(&self) -> bool {
        self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }
}

/// Scene time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of frames processed.
    pub tick: u64,
    /// Normalized time accumulated across frames, in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one frame of `dt` normalized seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}
