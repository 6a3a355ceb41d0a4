//! Snapshot system: queries the world and builds a `SceneSnapshot`.
//!
//! Read-only; never modifies the world.

use hecs::{Entity, World};

use skirmish_core::components::{Body, Position, Sprite};
use skirmish_core::enums::Category;
use skirmish_core::events::SceneEvent;
use skirmish_core::state::{SceneSnapshot, SpriteView};
use skirmish_core::types::{SimTime, Size2D};

use crate::score::ScoreState;

pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    screen: Size2D,
    player: Entity,
    events: Vec<SceneEvent>,
    score: &ScoreState,
) -> SceneSnapshot {
    let mut monsters = Vec::new();
    let mut projectiles = Vec::new();
    let mut player_view = None;

    for (entity, (pos, sprite, body)) in world.query::<(&Position, &Sprite, &Body)>().iter() {
        let view = SpriteView {
            id: entity.to_bits().get(),
            position: pos.0,
            size: sprite.size,
        };
        match body.category {
            Category::Monster => monsters.push(view),
            Category::Projectile => projectiles.push(view),
            Category::Player if entity == player => player_view = Some(view),
            Category::Player => {}
        }
    }

    // Stable order for renderers and determinism checks.
    monsters.sort_by_key(|v| v.id);
    projectiles.sort_by_key(|v| v.id);

    SceneSnapshot {
        time: *time,
        screen,
        player: player_view,
        monsters,
        projectiles,
        events,
        score: score.view(),
    }
}
