//! Enumeration types used throughout the scene.

use serde::{Deserialize, Serialize};

/// Contact-filtering tag for a body.
///
/// Variant order is the canonical order used when a contact pair is
/// resolved: Projectile < Monster < Player.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Category {
    Projectile,
    Monster,
    Player,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Projectile, Category::Monster, Category::Player];

    pub(crate) fn bit(self) -> u8 {
        match self {
            Category::Projectile => 1 << 0,
            Category::Monster => 1 << 1,
            Category::Player => 1 << 2,
        }
    }
}

/// Why a launch request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DegenerateReason {
    /// Target is not strictly to the right of the launch origin.
    NotAhead,
    /// Target coincides with the origin (or the offset length is not finite).
    ZeroOffset,
}

impl std::fmt::Display for DegenerateReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DegenerateReason::NotAhead => write!(f, "target is not ahead of the origin"),
            DegenerateReason::ZeroOffset => write!(f, "target offset has zero length"),
        }
    }
}
