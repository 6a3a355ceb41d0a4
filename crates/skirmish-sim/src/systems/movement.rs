//! Motion systems.
//!
//! `advance_actions` runs scheduled move-then-remove actions; `integrate`
//! applies gravity and velocity (position += velocity * dt).

use hecs::{Entity, World};
use tracing::trace;

use skirmish_core::components::{Body, Position, ScheduledMove, Velocity};
use skirmish_core::enums::Category;
use skirmish_core::events::SceneEvent;
use skirmish_core::types::Point2D;

use crate::score::ScoreState;
use crate::systems::cleanup;

/// Advance every scheduled move by `dt` seconds and remove entities whose
/// move-then-remove action has finished.
pub fn advance_actions(
    world: &mut World,
    dt: f64,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<SceneEvent>,
    score: &mut ScoreState,
) {
    despawn_buffer.clear();

    for (entity, (pos, action, body)) in
        world.query_mut::<(&mut Position, &mut ScheduledMove, Option<&Body>)>()
    {
        action.elapsed_secs += dt;
        pos.0 = action.current_position();

        if !(action.is_finished() && action.remove_on_finish) {
            continue;
        }
        despawn_buffer.push(entity);

        let id = entity.to_bits().get();
        match body.map(|b| b.category) {
            Some(Category::Monster) => {
                trace!(id, "monster escaped");
                score.monsters_escaped += 1;
                events.push(SceneEvent::MonsterEscaped { id });
            }
            Some(Category::Projectile) => {
                trace!(id, "projectile expired");
                score.projectiles_expired += 1;
                events.push(SceneEvent::ProjectileExpired { id });
            }
            _ => {}
        }
    }

    cleanup::run(world, despawn_buffer);
}

/// Integrate velocity (plus gravity) for every moving entity.
pub fn integrate(world: &mut World, gravity: Point2D, dt: f64) {
    let dt = dt as f32;
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &mut Velocity)>() {
        vel.0 += gravity * dt;
        pos.0 += vel.0 * dt;
    }
}
