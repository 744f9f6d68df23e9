//! Simulation engine, the per-frame orchestrator.
//!
//! `SimulationEngine` owns the flight model, camera, fleet, and the hecs
//! world of transient entities. It processes session commands, runs the
//! systems in a fixed order, and produces `FrameSnapshot`s. Completely
//! headless: the renderer is reached only through the `SceneGraph` handed
//! to each call.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use aerostrike_core::commands::SimCommand;
use aerostrike_core::constants::MUZZLE_OFFSET;
use aerostrike_core::enums::{GamePhase, NodeKind};
use aerostrike_core::events::GameEvent;
use aerostrike_core::input::ControlInput;
use aerostrike_core::scene::{NodeId, SceneGraph};
use aerostrike_core::state::FrameSnapshot;
use aerostrike_core::types::SimTime;
use aerostrike_patrol::PatrolMotionController;

use crate::camera::ChaseCamera;
use crate::config::SimConfig;
use crate::fleet::Fleet;
use crate::flight::FlightDynamicsModel;
use crate::systems;
use crate::systems::projectiles::TargetHit;
use crate::world_setup;

/// The simulation engine. Owns all sim state.
pub struct SimulationEngine {
    config: SimConfig,
    world: World,
    fleet: Fleet,
    flight: FlightDynamicsModel,
    camera: ChaseCamera,
    patrol: PatrolMotionController,
    time: SimTime,
    phase: GamePhase,
    /// Phase to return to when resuming from pause.
    resume_phase: GamePhase,
    rng: ChaCha8Rng,
    /// Seconds until the weapon can fire again.
    fire_cooldown: f32,
    aircraft_node: Option<NodeId>,
    camera_node: Option<NodeId>,
    command_queue: VecDeque<SimCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        let flight = FlightDynamicsModel::default();
        let camera = ChaseCamera::new(flight.state());
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            world: World::new(),
            fleet: Fleet::default(),
            flight,
            camera,
            patrol: PatrolMotionController::default(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            resume_phase: GamePhase::Active,
            fire_cooldown: 0.0,
            aircraft_node: None,
            camera_node: None,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue a command for processing at the next step boundary.
    pub fn queue_command(&mut self, command: SimCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SimCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one rendered frame and return the snapshot.
    ///
    /// A frame whose `dt` is non-finite, non-positive, or longer than
    /// `max_frame_dt` is not integrated. The clock still advances by a
    /// positive finite `dt`, so the next good frame picks up at the right time.
    pub fn step(&mut self, dt: f32, input: &ControlInput, scene: &mut impl SceneGraph) -> FrameSnapshot {
        self.process_commands(scene);

        if self.phase.is_running() {
            if self.is_usable_dt(dt) {
                self.run_systems(dt, input, scene);
                self.time.advance(dt);
                self.check_mission_complete();
            } else {
                log::debug!("Discarding frame {} (dt = {dt})", self.time.frame);
                self.time.skip(dt);
            }
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.flight,
            &self.camera,
            &self.fleet,
            self.weapon_ready(),
            events,
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn flight(&self) -> &FlightDynamicsModel {
        &self.flight
    }

    pub fn camera(&self) -> &ChaseCamera {
        &self.camera
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Read-only view of the transient entity world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn aircraft_node(&self) -> Option<NodeId> {
        self.aircraft_node
    }

    pub fn camera_node(&self) -> Option<NodeId> {
        self.camera_node
    }

    /// Mutable fleet access for tests that stage targets by hand.
    #[cfg(test)]
    pub fn fleet_mut(&mut self) -> &mut Fleet {
        &mut self.fleet
    }

    pub fn weapon_ready(&self) -> bool {
        self.fire_cooldown <= 0.0
    }

    fn is_usable_dt(&self, dt: f32) -> bool {
        dt.is_finite() && dt > 0.0 && dt <= self.config.max_frame_dt
    }

    /// Process all queued commands.
    fn process_commands(&mut self, scene: &mut impl SceneGraph) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command, scene);
        }
    }

    fn handle_command(&mut self, command: SimCommand, scene: &mut impl SceneGraph) {
        match command {
            SimCommand::StartMission => {
                if self.phase == GamePhase::Standby {
                    self.start_mission(scene);
                }
            }
            SimCommand::Pause => {
                if self.phase.is_running() {
                    self.resume_phase = self.phase;
                    self.phase = GamePhase::Paused;
                }
            }
            SimCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = self.resume_phase;
                }
            }
            SimCommand::Restart => {
                self.teardown(scene);
                self.start_mission(scene);
            }
        }
    }

    fn start_mission(&mut self, scene: &mut impl SceneGraph) {
        self.flight = FlightDynamicsModel::default();
        self.camera = ChaseCamera::new(self.flight.state());
        self.time = SimTime::default();
        self.fire_cooldown = 0.0;

        let aircraft_node = scene.create_node(NodeKind::Aircraft);
        let camera_node = scene.create_node(NodeKind::Camera);
        self.flight.apply_to(scene, aircraft_node);
        self.camera.apply_to(scene, camera_node);
        self.aircraft_node = Some(aircraft_node);
        self.camera_node = Some(camera_node);

        self.fleet = world_setup::spawn_fleet(scene, &mut self.rng, &self.config.fleet);
        systems::patrol::run(&self.patrol, &mut self.fleet, scene, 0.0);

        let total_targets = self.fleet.len() as u32;
        log::info!("Mission started with {total_targets} targets");
        self.events.push(GameEvent::MissionStarted { total_targets });
        self.phase = GamePhase::Active;
    }

    fn teardown(&mut self, scene: &mut impl SceneGraph) {
        systems::cleanup::teardown(&mut self.world, &mut self.fleet, scene);
        for node in [self.aircraft_node.take(), self.camera_node.take()]
            .into_iter()
            .flatten()
        {
            scene.remove_node(node);
        }
        self.phase = GamePhase::Standby;
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f32, input: &ControlInput, scene: &mut impl SceneGraph) {
        let input = input.normalized();

        // 1. Flight dynamics
        self.flight.update(dt, &input);
        if let Some(node) = self.aircraft_node {
            self.flight.apply_to(scene, node);
        }

        // 2. Patrol motion
        let elapsed = self.time.elapsed_secs + dt as f64;
        systems::patrol::run(&self.patrol, &mut self.fleet, scene, elapsed);

        // 3. Weapons and collisions
        self.fire_cooldown = (self.fire_cooldown - dt).max(0.0);
        if input.fire && self.weapon_ready() {
            self.fire(scene);
        }
        let hits = systems::projectiles::run(
            &mut self.world,
            scene,
            &mut self.fleet,
            dt,
            &mut self.despawn_buffer,
        );
        for hit in hits {
            self.on_target_destroyed(hit, scene);
        }

        // 4. Transient effects
        systems::effects::run(&mut self.world, scene, dt, &mut self.despawn_buffer);

        // 5. Camera
        if input.camera_toggle {
            let mode = self.camera.toggle_mode(self.flight.state());
            log::debug!("Camera mode -> {mode:?}");
            self.events.push(GameEvent::CameraModeChanged { mode });
        }
        self.camera.update(dt, self.flight.state(), &input.orbit);
        if let Some(node) = self.camera_node {
            self.camera.apply_to(scene, node);
        }
    }

    fn fire(&mut self, scene: &mut impl SceneGraph) {
        let state = self.flight.state();
        let origin = state.position + self.flight.forward() * MUZZLE_OFFSET;
        systems::projectiles::spawn(&mut self.world, scene, origin, state.orientation);
        self.fire_cooldown = self.config.fire_cooldown_secs;
        self.events.push(GameEvent::ShotFired { position: origin });
    }

    fn on_target_destroyed(&mut self, hit: TargetHit, scene: &mut impl SceneGraph) {
        systems::effects::spawn(&mut self.world, scene, &mut self.rng, hit.position);

        let score = self.fleet.score();
        log::info!(
            "Target {} destroyed ({}/{})",
            hit.target_index,
            score.destroyed,
            score.total
        );
        self.events.push(GameEvent::TargetDestroyed {
            target_index: hit.target_index,
            position: hit.position,
            destroyed: score.destroyed,
            total: score.total,
        });
    }

    fn check_mission_complete(&mut self) {
        if self.phase == GamePhase::Active && self.fleet.score().all_destroyed() {
            self.phase = GamePhase::Complete;
            log::info!(
                "All targets destroyed after {:.1}s",
                self.time.elapsed_secs
            );
            self.events.push(GameEvent::MissionComplete {
                elapsed_secs: self.time.elapsed_secs,
            });
        }
    }
}
