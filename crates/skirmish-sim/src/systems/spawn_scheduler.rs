//! Monster spawning: one monster each time the spawn interval elapses.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use skirmish_core::config::SceneConfig;
use skirmish_core::events::SceneEvent;
use skirmish_core::types::Point2D;

use crate::score::ScoreState;
use crate::world_setup;

/// Signal to create one monster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnRequest;

/// Accumulates normalized frame time and fires once per interval.
#[derive(Debug, Clone)]
pub struct SpawnTimer {
    accumulated: f64,
    threshold: f64,
}

impl SpawnTimer {
    pub fn new(threshold: f64) -> Self {
        Self {
            accumulated: 0.0,
            threshold,
        }
    }

    /// Add `elapsed` seconds. Fires (and resets to zero) once the total
    /// strictly exceeds the threshold; at most one request per call.
    pub fn advance(&mut self, elapsed: f64) -> Option<SpawnRequest> {
        self.accumulated += elapsed;
        if self.accumulated > self.threshold {
            self.accumulated = 0.0;
            Some(SpawnRequest)
        } else {
            None
        }
    }

    pub fn accumulated(&self) -> f64 {
        self.accumulated
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

/// Where a new monster starts, where it heads and how long it takes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonsterPlacement {
    pub start: Point2D,
    pub destination: Point2D,
    pub duration_secs: f64,
}

/// Draw a placement: a uniform height inside the screen band, just off the
/// right edge, crossing to the mirrored point off the left edge.
pub fn monster_placement(rng: &mut ChaCha8Rng, config: &SceneConfig) -> MonsterPlacement {
    let half = config.monster_size.half_extents();
    let min_y = half.y;
    let max_y = config.screen.height - half.y;
    let y = if max_y > min_y {
        rng.gen_range(min_y..=max_y)
    } else {
        config.screen.half_height()
    };

    let duration_secs =
        rng.gen_range(config.monster_min_duration_secs..=config.monster_max_duration_secs);

    MonsterPlacement {
        start: Point2D::new(config.screen.width + half.x, y),
        destination: Point2D::new(-half.x, y),
        duration_secs,
    }
}

/// Advance the spawn timer and spawn a monster when it fires.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    timer: &mut SpawnTimer,
    elapsed: f64,
    config: &SceneConfig,
    events: &mut Vec<SceneEvent>,
    score: &mut ScoreState,
) -> Option<Entity> {
    timer.advance(elapsed)?;

    let placement = monster_placement(rng, config);
    let entity = world_setup::spawn_monster(world, config, &placement);

    score.monsters_spawned += 1;
    debug!(
        y = placement.start.y,
        duration = placement.duration_secs,
        "monster spawned"
    );
    events.push(SceneEvent::MonsterSpawned {
        id: entity.to_bits().get(),
        position: placement.start,
        duration_secs: placement.duration_secs,
    });

    Some(entity)
}
