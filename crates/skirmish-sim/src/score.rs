//! Running tallies kept by the controller.
//!
//! Stored on `SceneController`, not as ECS entities.

use skirmish_core::state::ScoreView;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreState {
    pub monsters_spawned: u32,
    pub monsters_destroyed: u32,
    pub monsters_escaped: u32,
    pub projectiles_launched: u32,
    pub projectiles_expired: u32,
    pub launches_rejected: u32,
}

impl ScoreState {
    pub fn view(&self) -> ScoreView {
        ScoreView {
            monsters_spawned: self.monsters_spawned,
            monsters_destroyed: self.monsters_destroyed,
            monsters_escaped: self.monsters_escaped,
            projectiles_launched: self.projectiles_launched,
            projectiles_expired: self.projectiles_expired,
            launches_rejected: self.launches_rejected,
        }
    }
}
