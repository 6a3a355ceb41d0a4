//! Entity removal. Removing an entity that is already gone is a no-op.

use hecs::{Entity, World};

/// Remove `entity` from the scene. Returns false if it was already removed.
pub fn remove(world: &mut World, entity: Entity) -> bool {
    world.despawn(entity).is_ok()
}

/// Remove every entity collected in `despawn_buffer`, leaving it empty.
/// Duplicates in the buffer are harmless.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
