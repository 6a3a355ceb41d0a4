//! Scene snapshot: the complete visible state handed to a renderer each frame.

use serde::{Deserialize, Serialize};

use crate::events::SceneEvent;
use crate::types::{Point2D, SimTime, Size2D};

/// Complete scene state produced after each frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub time: SimTime,
    pub screen: Size2D,
    pub player: Option<SpriteView>,
    pub monsters: Vec<SpriteView>,
    pub projectiles: Vec<SpriteView>,
    pub events: Vec<SceneEvent>,
    pub score: ScoreView,
}

/// One drawable entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteView {
    pub id: u64,
    pub position: Point2D,
    pub size: Size2D,
}

/// Running tallies for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreView {
    pub monsters_spawned: u32,
    pub monsters_destroyed: u32,
    pub monsters_escaped: u32,
    pub projectiles_launched: u32,
    pub projectiles_expired: u32,
    pub launches_rejected: u32,
}
