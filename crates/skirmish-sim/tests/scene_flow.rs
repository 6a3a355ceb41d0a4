//! End-to-end session through the public controller API.

use skirmish_sim::core::commands::HostInput;
use skirmish_sim::core::config::SceneConfig;
use skirmish_sim::core::events::SceneEvent;
use skirmish_sim::core::state::SceneSnapshot;
use skirmish_sim::core::types::Point2D;
use skirmish_sim::SceneController;

const FPS: f64 = 60.0;

/// Run `seconds` of play, tapping the nearest monster every half second.
fn play(seed: u64, seconds: u32) -> (SceneController, Vec<SceneSnapshot>) {
    let mut scene = SceneController::new(SceneConfig {
        seed,
        ..Default::default()
    })
    .unwrap();

    let frames = (seconds as f64 * FPS) as u64;
    let mut snapshots = Vec::with_capacity(frames as usize);
    let mut last: Option<SceneSnapshot> = None;

    for k in 1..=frames {
        if k % 30 == 0 {
            if let Some(target) = last.as_ref().and_then(nearest_monster) {
                scene.queue_input(HostInput::TouchEnded { location: target });
            }
        }
        let snap = scene.step(k as f64 / FPS);
        last = Some(snap.clone());
        snapshots.push(snap);
    }
    (scene, snapshots)
}

fn nearest_monster(snap: &SceneSnapshot) -> Option<Point2D> {
    snap.monsters
        .iter()
        .map(|m| m.position)
        .min_by(|a, b| a.x.total_cmp(&b.x))
}

#[test]
fn session_destroys_monsters_and_conserves_entities() {
    let (scene, snapshots) = play(2024, 30);
    let score = scene.score().clone();

    assert!(score.monsters_spawned >= 25, "spawned {}", score.monsters_spawned);
    assert!(score.projectiles_launched > 0);
    assert!(score.monsters_destroyed > 0, "auto-aim should land some hits");

    let alive = scene.snapshot().monsters.len() as u32;
    assert_eq!(
        score.monsters_spawned,
        score.monsters_destroyed + score.monsters_escaped + alive
    );

    let hits = snapshots
        .iter()
        .flat_map(|s| s.events.iter())
        .filter(|e| matches!(e, SceneEvent::Hit { .. }))
        .count() as u32;
    assert_eq!(hits, score.monsters_destroyed);
}

#[test]
fn session_keeps_monsters_inside_vertical_band() {
    let (_scene, snapshots) = play(7, 10);
    for snap in &snapshots {
        for monster in &snap.monsters {
            assert!(monster.position.y >= 16.0 && monster.position.y <= 304.0);
            assert!(monster.position.x <= 480.0 + 13.5);
        }
        if let Some(player) = &snap.player {
            assert_eq!(player.position, Point2D::new(13.5, 160.0));
        }
    }
}

#[test]
fn session_is_reproducible() {
    let (_, a) = play(99, 5);
    let (_, b) = play(99, 5);
    let json_a = serde_json::to_string(&a).unwrap();
    let json_b = serde_json::to_string(&b).unwrap();
    assert_eq!(json_a, json_b);
}
