//! Entity spawn factories.
//!
//! Creates the player, monster and projectile entities with their
//! component bundles.

use hecs::{Entity, World};

use skirmish_core::components::*;
use skirmish_core::config::SceneConfig;
use skirmish_core::enums::Category;
use skirmish_core::types::Point2D;

use crate::systems::aim::LaunchPlan;
use crate::systems::spawn_scheduler::MonsterPlacement;

/// Where the player stands: flush with the left edge, vertically centered.
pub fn player_position(config: &SceneConfig) -> Point2D {
    Point2D::new(config.player_size.half_width(), config.screen.half_height())
}

/// Spawn the player avatar. It has a body for rendering queries but tests
/// no contacts.
pub fn spawn_player(world: &mut World, config: &SceneConfig) -> Entity {
    world.spawn((
        Position(player_position(config)),
        Sprite {
            size: config.player_size,
        },
        Body {
            category: Category::Player,
            contact_mask: CategorySet::EMPTY,
            shape: Shape::Rect {
                half_extents: config.player_size.half_extents(),
            },
            precise: false,
        },
    ))
}

/// Spawn a monster at its placement with a move-then-remove action across
/// the screen. Rectangle body the size of its sprite; reports projectile contacts.
pub fn spawn_monster(
    world: &mut World,
    config: &SceneConfig,
    placement: &MonsterPlacement,
) -> Entity {
    world.spawn((
        Position(placement.start),
        Velocity::default(),
        Sprite {
            size: config.monster_size,
        },
        Body {
            category: Category::Monster,
            contact_mask: CategorySet::of(&[Category::Projectile]),
            shape: Shape::Rect {
                half_extents: config.monster_size.half_extents(),
            },
            precise: false,
        },
        ScheduledMove::move_then_remove(
            placement.start,
            placement.destination,
            placement.duration_secs,
        ),
    ))
}

/// Spawn a projectile at `origin` following `plan`. Circle body with
/// radius half the sprite width; reports monster contacts along its
/// whole path.
pub fn spawn_projectile(
    world: &mut World,
    config: &SceneConfig,
    origin: Point2D,
    plan: &LaunchPlan,
) -> Entity {
    world.spawn((
        Position(origin),
        Velocity::default(),
        Sprite {
            size: config.projectile_size,
        },
        Body {
            category: Category::Projectile,
            contact_mask: CategorySet::of(&[Category::Monster]),
            shape: Shape::Circle {
                radius: config.projectile_size.half_width(),
            },
            precise: true,
        },
        ScheduledMove::move_then_remove(origin, plan.destination, plan.duration_secs),
    ))
}
