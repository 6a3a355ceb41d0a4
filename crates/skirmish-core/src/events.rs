//! Events emitted by the scene for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::DegenerateReason;
use crate::types::Point2D;

/// Something that happened during a frame. Entity ids are `hecs` entity bits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SceneEvent {
    MonsterSpawned {
        id: u64,
        position: Point2D,
        duration_secs: f64,
    },
    ProjectileLaunched {
        id: u64,
        destination: Point2D,
        duration_secs: f64,
    },
    LaunchRejected {
        target: Point2D,
        reason: DegenerateReason,
    },
    /// A projectile struck a monster; both were removed.
    Hit {
        projectile: u64,
        monster: u64,
        position: Point2D,
    },
    /// A monster finished crossing the screen.
    MonsterEscaped { id: u64 },
    /// A projectile reached its off-screen destination.
    ProjectileExpired { id: u64 },
}
