//! Scene controller, the core of the game loop.
//!
//! `SceneController` owns the hecs world, applies host input, runs the
//! spawn/aim/contact logic and the headless host systems, and produces
//! `SceneSnapshot`s. Everything runs on the caller's thread, one frame at a
//! time, so a fixed seed and input script always gives the same scene.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, trace};

use skirmish_core::commands::HostInput;
use skirmish_core::components::Position;
use skirmish_core::config::SceneConfig;
use skirmish_core::constants::GRAVITY;
use skirmish_core::errors::{ConfigError, Degenerate};
use skirmish_core::events::SceneEvent;
use skirmish_core::state::SceneSnapshot;
use skirmish_core::types::{Point2D, SimTime};

use crate::score::ScoreState;
use crate::systems;
use crate::systems::contact::{ContactBody, HitPair};
use crate::systems::frame_clock::FrameClock;
use crate::systems::physics::PhysicsWorld;
use crate::systems::spawn_scheduler::SpawnTimer;
use crate::world_setup;

/// The scene controller. Owns the world and all scene state.
pub struct SceneController {
    config: SceneConfig,
    world: World,
    physics: PhysicsWorld,
    rng: ChaCha8Rng,
    clock: FrameClock,
    spawn_timer: SpawnTimer,
    time: SimTime,
    player: Entity,
    input_queue: VecDeque<HostInput>,
    despawn_buffer: Vec<Entity>,
    events: Vec<SceneEvent>,
    score: ScoreState,
}

impl SceneController {
    /// Validate `config` and set up the scene: player placed, zero-gravity
    /// physics, RNG seeded.
    pub fn new(config: SceneConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut world = World::new();
        let player = world_setup::spawn_player(&mut world, &config);
        info!(
            seed = config.seed,
            width = config.screen.width,
            height = config.screen.height,
            "scene initialized"
        );

        Ok(Self {
            physics: PhysicsWorld::new(GRAVITY),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            clock: FrameClock::new(config.max_frame_delta_secs, config.nominal_frame_secs),
            spawn_timer: SpawnTimer::new(config.spawn_interval_secs),
            time: SimTime::default(),
            player,
            input_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            score: ScoreState::default(),
            world,
            config,
        })
    }

    /// Queue host input for the next `step`.
    pub fn queue_input(&mut self, input: HostInput) {
        self.input_queue.push_back(input);
    }

    pub fn queue_inputs(&mut self, inputs: impl IntoIterator<Item = HostInput>) {
        self.input_queue.extend(inputs);
    }

    /// Fire a projectile from the player toward `location`.
    ///
    /// Rejected targets spawn nothing; the rejection is only recorded as an
    /// event and in the score.
    pub fn on_touch_end(&mut self, location: Point2D) -> Result<Entity, Degenerate> {
        let origin = self.player_position();
        let plan = match systems::aim::plan_with_overshoot(
            origin,
            location,
            self.config.projectile_speed,
            self.config.screen.width,
            self.config.overshoot_distance,
        ) {
            Ok(plan) => plan,
            Err(err) => {
                trace!(x = location.x, y = location.y, %err, "launch rejected");
                self.score.launches_rejected += 1;
                self.events.push(SceneEvent::LaunchRejected {
                    target: location,
                    reason: err.reason,
                });
                return Err(err);
            }
        };

        let entity = world_setup::spawn_projectile(&mut self.world, &self.config, origin, &plan);
        self.score.projectiles_launched += 1;
        debug!(
            x = plan.destination.x,
            y = plan.destination.y,
            duration = plan.duration_secs,
            "projectile launched"
        );
        self.events.push(SceneEvent::ProjectileLaunched {
            id: entity.to_bits().get(),
            destination: plan.destination,
            duration_secs: plan.duration_secs,
        });
        Ok(entity)
    }

    /// Per-frame game logic for hosts that run their own actions and
    /// physics: normalize the frame time and maybe spawn a monster.
    pub fn on_update(&mut self, current_time: f64) -> Option<Entity> {
        let dt = self.clock.delta(current_time);
        self.update(dt)
    }

    /// Contact callback for hosts that run their own physics.
    pub fn on_contact_begin(&mut self, a: ContactBody, b: ContactBody) -> Option<HitPair> {
        systems::contact::handle(&mut self.world, a, b, &mut self.events, &mut self.score)
    }

    /// Run one full headless frame at host time `current_time` and return
    /// the resulting snapshot.
    ///
    /// Order: input, frame delta, scheduled actions, integration, physics
    /// step, contact resolution, game logic, snapshot.
    pub fn step(&mut self, current_time: f64) -> SceneSnapshot {
        self.process_inputs();
        self.physics.begin_step(&self.world);

        let dt = self.clock.delta(current_time);

        systems::movement::advance_actions(
            &mut self.world,
            dt,
            &mut self.despawn_buffer,
            &mut self.events,
            &mut self.score,
        );
        systems::movement::integrate(&mut self.world, self.physics.gravity(), dt);

        let contacts = self.physics.step(&self.world);
        systems::contact::run(&mut self.world, &contacts, &mut self.events, &mut self.score);

        self.update(dt);

        let events = self.take_events();
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.config.screen,
            self.player,
            events,
            &self.score,
        )
    }

    /// Snapshot of the current scene, including events not yet taken.
    pub fn snapshot(&self) -> SceneSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.config.screen,
            self.player,
            self.events.clone(),
            &self.score,
        )
    }

    /// Drain the events recorded since the last step or take.
    pub fn take_events(&mut self) -> Vec<SceneEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn player(&self) -> Entity {
        self.player
    }

    /// Current player position, or its initial spot if the host removed it.
    pub fn player_position(&self) -> Point2D {
        self.world
            .get::<&Position>(self.player)
            .map(|p| p.0)
            .unwrap_or_else(|_| world_setup::player_position(&self.config))
    }

    pub fn physics(&self) -> &PhysicsWorld {
        &self.physics
    }

    /// Read-only access to the scene world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access, for hosts that move entities themselves.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    fn process_inputs(&mut self) {
        while let Some(input) = self.input_queue.pop_front() {
            match input {
                HostInput::TouchEnded { location } => {
                    // Rejections are already recorded as events.
                    let _ = self.on_touch_end(location);
                }
            }
        }
    }

    fn update(&mut self, dt: f64) -> Option<Entity> {
        let spawned = systems::spawn_scheduler::run(
            &mut self.world,
            &mut self.rng,
            &mut self.spawn_timer,
            dt,
            &self.config,
            &mut self.events,
            &mut self.score,
        );
        self.time.advance(dt);
        spawned
    }
}
