//! Scene constants and tuning parameters.
//!
//! Defaults for `SceneConfig`; the sim reads tuning through the config.

use crate::types::{Point2D, Size2D};

// --- Frame timing ---

/// Raw frame deltas above this are treated as a stall (seconds).
pub const MAX_FRAME_DELTA_SECS: f64 = 1.0;

/// Frame duration substituted for a stalled frame (seconds).
pub const NOMINAL_FRAME_SECS: f64 = 1.0 / 60.0;

// --- Screen ---

/// Default scene size, landscape phone resolution in points.
pub const SCREEN_SIZE: Size2D = Size2D::new(480.0, 320.0);

// --- Sprites ---

pub const PLAYER_SIZE: Size2D = Size2D::new(27.0, 40.0);
pub const MONSTER_SIZE: Size2D = Size2D::new(27.0, 32.0);
pub const PROJECTILE_SIZE: Size2D = Size2D::new(13.0, 13.0);

// --- Spawning ---

/// Time between monster spawns (seconds).
pub const SPAWN_INTERVAL_SECS: f64 = 1.0;

/// Shortest monster crossing time (seconds).
pub const MONSTER_MIN_DURATION_SECS: f64 = 2.0;

/// Longest monster crossing time (seconds).
pub const MONSTER_MAX_DURATION_SECS: f64 = 8.0;

// --- Projectiles ---

/// Nominal projectile travel rate (units/s).
pub const PROJECTILE_SPEED: f32 = 480.0;

/// Launch path length; long enough to leave the screen at any supported size.
pub const OVERSHOOT_DISTANCE: f32 = 1500.0;

// --- Physics ---

/// Ambient gravity. The scene runs with none.
pub const GRAVITY: Point2D = Point2D::ZERO;

/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 42;
