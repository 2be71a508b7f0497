//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the physics adapter, the enemy and power-up
//! registries, the armory and session progress. It processes queued player
//! commands, runs the per-frame update in a fixed order, and produces
//! `GameStateSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;
use std::time::Instant;

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use arena_ai::registry::{Enemy, EnemyEvent, EnemyRegistry};
use arena_core::commands::{InputState, PlayerCommand};
use arena_core::constants::*;
use arena_core::enums::{EnemyKind, FlashKind, GameState, PowerUpKind};
use arena_core::error::EngineError;
use arena_core::events::{AudioCue, GameEvent};
use arena_core::state::GameStateSnapshot;
use arena_core::types::{clamp_frame_dt, EnemyId, PowerUpId, SimTime};
use arena_physics::{ArenaPhysics, BodyFilter, PhysicsAdapter};

use crate::clock::FrameClock;
use crate::combat::{self, HitTarget};
use crate::effects::ScheduledEffects;
use crate::level::Progress;
use crate::player::Player;
use crate::powerups::PowerUpRegistry;
use crate::systems;
use crate::weapons::{Armory, Pellet};
use crate::world_setup::{self, Arena};

/// Gameplay tunables. Every field falls back to its default when missing
/// from a config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Look radians per unit of look delta.
    pub mouse_sensitivity: f32,
    /// Walking speed (m/s).
    pub move_speed: f32,
    pub sprint_multiplier: f32,
    pub speed_powerup_multiplier: f32,
    pub jump_impulse: f32,
    /// Horizontal velocity kept per frame with no movement input.
    pub ground_damping: f32,
    /// Seconds between ambient power-up spawns.
    pub powerup_spawn_interval: f64,
    pub kills_per_level: u32,
    /// Chance a killed enemy drops a power-up.
    pub drop_chance: f64,
    /// Score per pellet that hits an enemy.
    pub hit_score: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            mouse_sensitivity: MOUSE_SENSITIVITY,
            move_speed: BASE_MOVE_SPEED,
            sprint_multiplier: SPRINT_MULTIPLIER,
            speed_powerup_multiplier: SPEED_POWERUP_MULTIPLIER,
            jump_impulse: JUMP_IMPULSE,
            ground_damping: GROUND_DAMPING,
            powerup_spawn_interval: POWERUP_SPAWN_INTERVAL,
            kills_per_level: KILLS_PER_LEVEL,
            drop_chance: POWERUP_DROP_CHANCE,
            hit_score: HIT_SCORE,
        }
    }
}

impl Tuning {
    /// Reject values the update loop cannot run with.
    pub fn validate(&self) -> Result<(), EngineError> {
        let non_negative = [
            ("mouse_sensitivity", self.mouse_sensitivity),
            ("move_speed", self.move_speed),
            ("sprint_multiplier", self.sprint_multiplier),
            ("speed_powerup_multiplier", self.speed_powerup_multiplier),
            ("jump_impulse", self.jump_impulse),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(EngineError::InvalidTuning {
                    field,
                    requirement: "finite and non-negative",
                });
            }
        }
        if !(0.0..=1.0).contains(&self.ground_damping) {
            return Err(EngineError::InvalidTuning {
                field: "ground_damping",
                requirement: "within 0..=1",
            });
        }
        if !(0.0..=1.0).contains(&self.drop_chance) {
            return Err(EngineError::InvalidTuning {
                field: "drop_chance",
                requirement: "within 0..=1",
            });
        }
        if self.powerup_spawn_interval.is_nan() || self.powerup_spawn_interval <= 0.0 {
            return Err(EngineError::InvalidTuning {
                field: "powerup_spawn_interval",
                requirement: "positive",
            });
        }
        if self.kills_per_level == 0 {
            return Err(EngineError::InvalidTuning {
                field: "kills_per_level",
                requirement: "at least 1",
            });
        }
        Ok(())
    }
}

/// Configuration for a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub tuning: Tuning,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tuning: Tuning::default(),
        }
    }
}

/// The simulation engine. Owns all sim state.
pub struct SimulationEngine<P: PhysicsAdapter = ArenaPhysics> {
    physics: P,
    initialized: bool,
    seed: u64,
    tuning: Tuning,
    time: SimTime,
    state: GameState,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    input: InputState,
    /// Trigger state last frame, for press-edge detection.
    fire_held: bool,
    clock: FrameClock,

    player: Player,
    enemies: EnemyRegistry,
    powerups: PowerUpRegistry,
    armory: Armory,
    progress: Progress,
    arena: Arena,
    flashes: ScheduledEffects,
    enemy_spawn_timer: f64,
    powerup_spawn_timer: f64,

    events: Vec<GameEvent>,
    audio_cues: Vec<AudioCue>,
}

impl SimulationEngine<ArenaPhysics> {
    /// Create an engine backed by the built-in physics world.
    pub fn new(config: SimConfig) -> Self {
        Self::with_physics(config, ArenaPhysics::default())
    }
}

impl<P: PhysicsAdapter> SimulationEngine<P> {
    /// Create an engine over any physics adapter.
    pub fn with_physics(config: SimConfig, physics: P) -> Self {
        Self {
            physics,
            initialized: false,
            seed: config.seed,
            tuning: config.tuning,
            time: SimTime::default(),
            state: GameState::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            input: InputState::default(),
            fire_held: false,
            clock: FrameClock::new(),
            player: Player::default(),
            enemies: EnemyRegistry::new(),
            powerups: PowerUpRegistry::new(),
            armory: Armory::new(),
            progress: Progress::default(),
            arena: Arena::empty(1),
            flashes: ScheduledEffects::default(),
            enemy_spawn_timer: 0.0,
            powerup_spawn_timer: 0.0,
            events: Vec::new(),
            audio_cues: Vec::new(),
        }
    }

    // --- Lifecycle ---

    /// Bring up physics and build the first arena and the player body.
    ///
    /// On failure the engine stays uninitialized and refuses to start.
    /// Calling this again once initialized does nothing.
    pub fn initialize(&mut self) -> Result<(), EngineError> {
        if self.initialized {
            return Ok(());
        }
        let result = self
            .tuning
            .validate()
            .and_then(|_| self.physics.initialize().map_err(EngineError::from));
        if let Err(err) = result {
            log::warn!("Simulation failed to initialize: {}", err);
            return Err(err);
        }

        self.arena = world_setup::build_arena(&mut self.physics, 1, &mut self.rng);
        self.player.body = Some(world_setup::spawn_player_body(&mut self.physics));
        self.initialized = true;
        log::info!("Simulation initialized (seed {})", self.seed);
        Ok(())
    }

    /// Begin a session from the menu or after game over.
    pub fn start(&mut self) {
        if !self.initialized {
            log::warn!("Start ignored: simulation not initialized");
            return;
        }
        if matches!(self.state, GameState::Menu | GameState::GameOver) {
            self.begin_session();
        }
    }

    /// Reset and begin again from game over, playing or paused.
    pub fn restart(&mut self) {
        if !self.initialized {
            log::warn!("Restart ignored: simulation not initialized");
            return;
        }
        if matches!(
            self.state,
            GameState::GameOver | GameState::Playing | GameState::Paused
        ) {
            self.begin_session();
        }
    }

    pub fn pause(&mut self) {
        if self.state == GameState::Playing {
            self.set_state(GameState::Paused);
        }
    }

    /// Leave pause. The next frame measures zero elapsed time.
    pub fn resume(&mut self) {
        if self.state == GameState::Paused {
            self.clock.rearm();
            self.set_state(GameState::Playing);
        }
    }

    pub fn toggle_pause(&mut self) {
        match self.state {
            GameState::Playing => self.pause(),
            GameState::Paused => self.resume(),
            GameState::Menu | GameState::GameOver => {}
        }
    }

    /// Abandon the session and clear its enemies and pickups.
    pub fn return_to_menu(&mut self) {
        self.clear_session_entities();
        self.set_state(GameState::Menu);
    }

    /// Tear everything down. The engine must be initialized again before use.
    pub fn destroy(&mut self) {
        self.enemies.clear();
        self.powerups.clear();
        self.flashes.clear();
        self.physics.clear();
        self.arena = Arena::empty(1);
        self.player = Player::default();
        self.command_queue.clear();
        self.clock.rearm();
        self.initialized = false;
        self.set_state(GameState::Menu);
        log::info!("Simulation destroyed");
    }

    // --- Host loop API ---

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Replace the held-input state. Look deltas accumulate until the next
    /// frame consumes them.
    pub fn set_input(&mut self, input: InputState) {
        let look_dx = self.input.look_dx + input.look_dx;
        let look_dy = self.input.look_dy + input.look_dy;
        self.input = InputState {
            look_dx,
            look_dy,
            ..input
        };
    }

    /// Advance by a caller-supplied frame delta and return the snapshot.
    pub fn tick(&mut self, raw_dt: f64) -> GameStateSnapshot {
        self.process_commands();
        self.update(raw_dt)
    }

    /// Advance by the wall-clock time since the previous frame.
    pub fn frame(&mut self, now: Instant) -> GameStateSnapshot {
        self.process_commands();
        let raw_dt = if self.state == GameState::Playing {
            self.clock.delta(now)
        } else {
            self.clock.rearm();
            0.0
        };
        self.update(raw_dt)
    }

    // --- Read points ---

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemies(&self) -> &EnemyRegistry {
        &self.enemies
    }

    pub fn powerups(&self) -> &PowerUpRegistry {
        &self.powerups
    }

    pub fn armory(&self) -> &Armory {
        &self.armory
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn physics(&self) -> &P {
        &self.physics
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    // --- Direct mutation for hosts and scripted scenarios ---

    /// Spawn an enemy of `kind` at `position`. Ignored until initialized.
    pub fn spawn_enemy_at(&mut self, kind: EnemyKind, position: Vec3) -> Option<EnemyId> {
        if !self.initialized {
            return None;
        }
        let id = world_setup::spawn_enemy(
            &mut self.physics,
            &mut self.enemies,
            kind,
            position,
            &mut self.rng,
        );
        self.drain_enemy_events();
        Some(id)
    }

    /// Spawn a power-up of `kind` at `position`.
    pub fn spawn_powerup_at(&mut self, kind: PowerUpKind, position: Vec3) -> PowerUpId {
        self.spawn_powerup(kind, position)
    }

    /// Damage an enemy, running the full kill path if it dies.
    pub fn damage_enemy(&mut self, id: EnemyId, amount: f32) -> bool {
        let killed = self.enemies.apply_damage(id, amount, &mut self.rng);
        self.drain_enemy_events();
        killed
    }

    /// Apply damage to the player, shield first. Game over is evaluated at
    /// the end of the frame update.
    pub fn apply_player_damage(&mut self, damage: f32) {
        let lost = self.player.take_damage(damage);
        if lost > 0.0 {
            self.events.push(GameEvent::PlayerHit { damage: lost });
            self.audio_cues.push(AudioCue::PlayerDamage);
            self.flashes.schedule(
                FlashKind::PlayerHurt,
                self.time.elapsed_secs,
                PLAYER_HURT_FLASH_SECS,
            );
        }
    }

    // --- Internals ---

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Start => self.start(),
            PlayerCommand::Restart => self.restart(),
            PlayerCommand::Resume => self.resume(),
            PlayerCommand::TogglePause => self.toggle_pause(),
            PlayerCommand::ReturnToMenu => self.return_to_menu(),
            PlayerCommand::SelectWeapon { slot } => {
                if self.state == GameState::Playing {
                    self.armory.select_slot(slot);
                }
            }
            PlayerCommand::NextWeapon => {
                if self.state == GameState::Playing {
                    self.armory.next_weapon();
                }
            }
            PlayerCommand::PreviousWeapon => {
                if self.state == GameState::Playing {
                    self.armory.previous_weapon();
                }
            }
            PlayerCommand::Reload => {
                if self.state == GameState::Playing {
                    self.armory.start_reload();
                }
            }
        }
    }

    fn update(&mut self, raw_dt: f64) -> GameStateSnapshot {
        if self.state == GameState::Playing {
            let dt = clamp_frame_dt(raw_dt);
            self.time.advance(dt);
            let now = self.time.elapsed_secs;
            self.handle_trigger(now);
            self.run_systems(dt, now);
        }
        self.flashes.prune(self.time.elapsed_secs);

        let events = std::mem::take(&mut self.events);
        let audio_cues = std::mem::take(&mut self.audio_cues);
        systems::snapshot::build_snapshot(
            &self.time,
            self.state,
            &self.progress,
            &self.arena,
            &self.player,
            &self.armory,
            &self.enemies,
            &self.powerups,
            &self.flashes,
            events,
            audio_cues,
        )
    }

    /// Run the per-frame update in order.
    fn run_systems(&mut self, dt: f64, now: f64) {
        let step = dt as f32;

        // 1. Input
        let (look_dx, look_dy) = self.input.take_look_delta();
        let input = self.input;
        // 2. Look orientation
        systems::player_control::apply_look(&mut self.player, look_dx, look_dy, &self.tuning);
        self.armory.add_sway(look_dx, look_dy);
        // 3. Movement
        let speed_boost = self.powerups.is_effect_active(PowerUpKind::Speed, now);
        systems::player_control::apply_movement(
            &mut self.physics,
            &mut self.player,
            &input,
            speed_boost,
            &self.tuning,
        );
        // 4. Jump
        systems::player_control::apply_jump(&mut self.physics, &self.player, &input, &self.tuning);
        // 5. Physics step
        self.physics.step(step);
        // 6. Read back player position (camera)
        if let Some(position) = self.player.body.and_then(|b| self.physics.position(b)) {
            self.player.position = position;
        }
        // 7. Weapons
        for weapon in self.armory.update(step, self.player.movement_speed) {
            self.audio_cues.push(AudioCue::ReloadComplete { weapon });
        }
        // 8. Enemy spawning
        systems::spawner::run_enemies(
            &mut self.physics,
            &mut self.enemies,
            &self.arena.config,
            &self.progress,
            &mut self.enemy_spawn_timer,
            dt,
            &mut self.rng,
        );
        self.drain_enemy_events();
        // 9. Power-up spawning
        if let Some(id) = systems::spawner::run_powerups(
            &mut self.powerups,
            self.arena.config.arena_size,
            &mut self.powerup_spawn_timer,
            self.tuning.powerup_spawn_interval,
            dt,
            now,
            &mut self.rng,
        ) {
            self.push_powerup_spawned(id);
        }
        // 10. Enemy AI and melee
        let attacks = systems::enemy_ai::run(
            &mut self.physics,
            &mut self.enemies,
            self.player.position,
            step,
            now,
        );
        for damage in attacks {
            self.apply_player_damage(damage);
        }
        // 11. Power-up timers and collection
        if let Some(powerup) =
            systems::pickups::run(&mut self.powerups, self.player.position, step, now)
        {
            systems::pickups::apply_effect(powerup.kind, &mut self.player, &mut self.armory);
            self.events.push(GameEvent::PowerUpCollected {
                powerup_id: powerup.id,
                kind: powerup.kind,
            });
            self.audio_cues.push(AudioCue::for_pickup(powerup.kind));
        }
        // 12. Game over
        if self.player.is_dead() {
            self.audio_cues.push(AudioCue::GameOver);
            self.set_state(GameState::GameOver);
        }
    }

    /// Fire on a fresh trigger press, or every frame the trigger is held
    /// for automatic weapons.
    fn handle_trigger(&mut self, now: f64) {
        let fire = self.input.fire;
        let pressed = fire && !self.fire_held;
        self.fire_held = fire;
        if !fire || !(pressed || self.armory.stats().automatic) {
            return;
        }
        let Some(origin) = self.player.body.and_then(|b| self.physics.position(b)) else {
            return;
        };

        let aim = self.player.aim_direction();
        match self.armory.fire(aim, now, &mut self.rng) {
            Some(pellets) => {
                self.audio_cues.push(AudioCue::WeaponFired {
                    weapon: self.armory.current(),
                });
                self.flashes.schedule(FlashKind::Muzzle, now, MUZZLE_FLASH_SECS);
                for pellet in pellets {
                    self.resolve_pellet(origin, pellet);
                }
            }
            None => {
                if pressed && self.armory.current_state().ammo == 0 {
                    self.audio_cues.push(AudioCue::EmptyClick);
                }
            }
        }
    }

    /// Hit-scan one pellet against live enemies, falling back to static
    /// geometry for a cosmetic impact point.
    fn resolve_pellet(&mut self, origin: Vec3, pellet: Pellet) {
        let targets: Vec<HitTarget> = self
            .enemies
            .iter()
            .map(|enemy| HitTarget {
                id: enemy.id,
                center: self.physics.position(enemy.body).unwrap_or(enemy.position),
                radius: enemy.profile().scale * HIT_RADIUS_PER_SCALE,
            })
            .collect();

        match combat::resolve_hitscan(origin, pellet.direction, targets) {
            Some(hit) => {
                self.progress.add_score(self.tuning.hit_score);
                self.events.push(GameEvent::ShotImpact {
                    point: hit.point,
                    enemy_id: Some(hit.id),
                });
                self.enemies.apply_damage(hit.id, pellet.damage, &mut self.rng);
                self.drain_enemy_events();
            }
            None => {
                if let Some(hit) = self.physics.raycast_nearest(
                    origin,
                    pellet.direction,
                    FALLBACK_RAY_DISTANCE,
                    BodyFilter::StaticOnly,
                ) {
                    self.events.push(GameEvent::ShotImpact {
                        point: hit.point,
                        enemy_id: None,
                    });
                }
            }
        }
    }

    /// Turn registry notifications into game events, running kill handling
    /// for every death.
    fn drain_enemy_events(&mut self) {
        let now = self.time.elapsed_secs;
        for event in self.enemies.take_events() {
            match event {
                EnemyEvent::Spawned { id, kind, position } => {
                    self.events.push(GameEvent::EnemySpawned {
                        enemy_id: id,
                        kind,
                        position,
                    });
                }
                EnemyEvent::Damaged { id, amount, flash } => {
                    self.events.push(GameEvent::EnemyDamaged {
                        enemy_id: id,
                        amount,
                        flash,
                    });
                    self.audio_cues.push(AudioCue::EnemyHit);
                    if flash {
                        self.flashes.schedule(
                            FlashKind::EnemyHit { enemy_id: id },
                            now,
                            ENEMY_HIT_FLASH_SECS,
                        );
                    }
                }
                EnemyEvent::Killed(enemy) => self.handle_kill(enemy),
            }
        }
    }

    /// Remove the body, score the kill, level up, and maybe drop a pickup.
    fn handle_kill(&mut self, enemy: Enemy) {
        let position = self.physics.position(enemy.body).unwrap_or(enemy.position);
        self.physics.remove_body(enemy.body);

        let leveled = self
            .progress
            .record_kill(enemy.profile().points, self.tuning.kills_per_level);
        self.events.push(GameEvent::EnemyKilled {
            enemy_id: enemy.id,
            kind: enemy.kind,
            position,
        });
        self.audio_cues.push(AudioCue::EnemyDeath);

        if leveled {
            let level = self.progress.level;
            log::info!("Level up: {}", level);
            self.events.push(GameEvent::LevelUp { level });
            self.rebuild_arena();
        }

        if self.rng.gen::<f64>() < self.tuning.drop_chance {
            let kind = PowerUpRegistry::pick_kind(&mut self.rng);
            self.spawn_powerup(kind, Vec3::new(position.x, 0.0, position.z));
        }
    }

    fn spawn_powerup(&mut self, kind: PowerUpKind, position: Vec3) -> PowerUpId {
        let id = self
            .powerups
            .spawn(kind, position, self.time.elapsed_secs, &mut self.rng)
            .id;
        self.push_powerup_spawned(id);
        id
    }

    fn push_powerup_spawned(&mut self, id: PowerUpId) {
        if let Some(powerup) = self.powerups.get(id) {
            self.events.push(GameEvent::PowerUpSpawned {
                powerup_id: id,
                kind: powerup.kind,
                position: powerup.position,
            });
        }
    }

    /// Replace the static geometry with the current level's layout and pull
    /// dynamic bodies inside the new walls.
    fn rebuild_arena(&mut self) {
        let level = self.progress.level;
        world_setup::teardown_arena(&mut self.physics, &mut self.arena);
        self.arena = world_setup::build_arena(&mut self.physics, level, &mut self.rng);

        let limit = self.arena.inner_limit();
        if let Some(body) = self.player.body {
            world_setup::clamp_inside(&mut self.physics, body, limit);
        }
        for enemy in self.enemies.iter() {
            world_setup::clamp_inside(&mut self.physics, enemy.body, limit);
        }
        self.powerups.clamp_positions(limit);
    }

    fn clear_session_entities(&mut self) {
        for enemy in self.enemies.clear() {
            self.physics.remove_body(enemy.body);
        }
        self.powerups.clear();
        self.flashes.clear();
    }

    /// Reset all session state and enter `Playing`.
    fn begin_session(&mut self) {
        self.clear_session_entities();
        self.progress = Progress::default();
        if self.arena.level != self.progress.level {
            self.rebuild_arena();
        }

        self.player.reset();
        if let Some(body) = self.player.body {
            world_setup::reset_player_body(&mut self.physics, body);
        }
        self.armory = Armory::new();
        self.enemy_spawn_timer = 0.0;
        self.powerup_spawn_timer = 0.0;
        self.time = SimTime::default();
        self.input = InputState::default();
        self.fire_held = false;
        self.clock.rearm();

        self.audio_cues.push(AudioCue::GameStart);
        self.set_state(GameState::Playing);
    }

    fn set_state(&mut self, to: GameState) {
        let from = self.state;
        if from == to {
            return;
        }
        self.state = to;
        log::info!("Game state: {:?} -> {:?}", from, to);
        self.events.push(GameEvent::StateChanged { from, to });
    }
}
