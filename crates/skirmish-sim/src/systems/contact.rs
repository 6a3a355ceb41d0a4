//! Contact resolution. A projectile touching a monster removes both.

use hecs::{Entity, World};
use tracing::info;

use skirmish_core::components::{Body, Position};
use skirmish_core::enums::Category;
use skirmish_core::events::SceneEvent;

use crate::score::ScoreState;
use crate::systems::cleanup;

/// One side of a contact event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactBody {
    pub entity: Entity,
    pub category: Category,
}

impl ContactBody {
    /// Look up the body of a live entity. `None` once it has been removed.
    pub fn lookup(world: &World, entity: Entity) -> Option<Self> {
        let body = world.get::<&Body>(entity).ok()?;
        Some(Self {
            entity,
            category: body.category,
        })
    }
}

/// Pair of entities to destroy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitPair {
    pub projectile: Entity,
    pub monster: Entity,
}

/// Classify a contact. Argument order does not matter: the bodies are put
/// in canonical category order first, and only (Projectile, Monster) hits.
pub fn resolve(a: ContactBody, b: ContactBody) -> Option<HitPair> {
    let (first, second) = if a.category <= b.category {
        (a, b)
    } else {
        (b, a)
    };

    match (first.category, second.category) {
        (Category::Projectile, Category::Monster) => Some(HitPair {
            projectile: first.entity,
            monster: second.entity,
        }),
        _ => None,
    }
}

/// Resolve a contact between two entities and remove both on a hit.
///
/// Contacts naming an entity removed earlier in the same frame still
/// resolve by category recorded at lookup; removal itself is idempotent.
pub fn handle(
    world: &mut World,
    a: ContactBody,
    b: ContactBody,
    events: &mut Vec<SceneEvent>,
    score: &mut ScoreState,
) -> Option<HitPair> {
    let pair = resolve(a, b)?;

    let position = world
        .get::<&Position>(pair.monster)
        .map(|p| p.0)
        .unwrap_or_default();

    cleanup::remove(world, pair.projectile);
    let monster_removed = cleanup::remove(world, pair.monster);

    if monster_removed {
        info!(x = position.x, y = position.y, "hit");
        score.monsters_destroyed += 1;
        events.push(SceneEvent::Hit {
            projectile: pair.projectile.to_bits().get(),
            monster: pair.monster.to_bits().get(),
            position,
        });
    }

    Some(pair)
}

/// Resolve all contacts reported by one physics step.
pub fn run(
    world: &mut World,
    contacts: &[(ContactBody, ContactBody)],
    events: &mut Vec<SceneEvent>,
    score: &mut ScoreState,
) -> Vec<HitPair> {
    contacts
        .iter()
        .filter_map(|&(a, b)| handle(world, a, b, events, score))
        .collect()
}
