//! Simulation constants and tuning parameters.

use glam::Vec3;

/// Host loop cadence (Hz).
pub const TICK_RATE: u32 = 60;

/// Largest frame delta the simulation will integrate (seconds).
pub const MAX_FRAME_DT: f64 = 0.1;

// --- Physics ---

/// Gravitational acceleration on the y axis (m/s²).
pub const GRAVITY_Y: f32 = -20.0;

/// Frame deltas above this are integrated in two physics sub-steps.
pub const PHYSICS_SUBSTEP_THRESHOLD: f32 = 1.0 / 30.0;

/// Perpendicular tolerance of the proximity raycast.
pub const RAYCAST_TOLERANCE: f32 = 1.5;

/// Mass assigned to every dynamic body.
pub const DEFAULT_BODY_MASS: f32 = 1.0;

// --- Player ---

pub const PLAYER_MAX_HEALTH: f32 = 100.0;
pub const PLAYER_MAX_SHIELD: f32 = 50.0;

/// Where the player body is placed on every start/restart.
pub const PLAYER_SPAWN: Vec3 = Vec3::new(0.0, 2.0, 0.0);

pub const PLAYER_CAPSULE_HALF_HEIGHT: f32 = 0.5;
pub const PLAYER_CAPSULE_RADIUS: f32 = 0.4;

/// Pitch is kept this far inside ±π/2.
pub const PITCH_MARGIN: f32 = 0.1;

/// Look radians per unit of look delta.
pub const MOUSE_SENSITIVITY: f32 = 0.002;

/// Walking speed (m/s).
pub const BASE_MOVE_SPEED: f32 = 8.0;
pub const SPRINT_MULTIPLIER: f32 = 1.6;
pub const SPEED_POWERUP_MULTIPLIER: f32 = 1.5;

/// Upward impulse applied on jump.
pub const JUMP_IMPULSE: f32 = 8.0;
/// Jump is only accepted below this height.
pub const JUMP_MAX_HEIGHT: f32 = 1.5;
/// Jump is only accepted below this vertical speed.
pub const JUMP_MAX_VERTICAL_SPEED: f32 = 1.0;

/// Horizontal velocity multiplier per frame when there is no movement input.
pub const GROUND_DAMPING: f32 = 0.9;

/// Duration of the hurt flash after the player loses health (seconds).
pub const PLAYER_HURT_FLASH_SECS: f64 = 0.2;

// --- Enemies ---

/// Box half extents of every enemy body.
pub const ENEMY_BODY_HALF_EXTENTS: Vec3 = Vec3::new(0.4, 0.9, 0.25);

/// Spawn points are inset this far from the arena half-size.
pub const ENEMY_SPAWN_INSET: f32 = 3.0;

/// Enemies stop steering when closer than this (horizontal).
pub const ENEMY_STEER_MIN_DISTANCE: f32 = 1.0;

/// Melee reach (horizontal).
pub const ENEMY_MELEE_RANGE: f32 = 1.5;

/// Hit-scan radius per unit of enemy scale.
pub const HIT_RADIUS_PER_SCALE: f32 = 1.0;

/// Probability that a non-lethal hit produces a flash.
pub const ENEMY_HIT_FLASH_CHANCE: f64 = 0.7;
pub const ENEMY_HIT_FLASH_SECS: f64 = 0.05;

/// Every this many total kills adds one to spawn difficulty.
pub const KILLS_PER_DIFFICULTY_STEP: u32 = 20;

// --- Weapons ---

/// Score awarded for every pellet that hits an enemy.
pub const HIT_SCORE: u32 = 10;

/// Range of the environment-impact fallback ray.
pub const FALLBACK_RAY_DISTANCE: f32 = 100.0;

pub const RECOIL_KICK: f32 = 0.08;
pub const RECOIL_DECAY: f32 = 0.85;
/// Recoil below this snaps to zero.
pub const RECOIL_EPSILON: f32 = 0.001;

/// Sway added per unit of look delta.
pub const SWAY_GAIN: f32 = 0.001;
pub const SWAY_DECAY: f32 = 0.95;

/// Bob phase advance per metre travelled.
pub const BOB_RATE: f32 = 8.0;

pub const MUZZLE_FLASH_SECS: f64 = 0.05;

// --- Power-ups ---

/// Uncollected power-ups expire after this many seconds.
pub const POWERUP_LIFETIME: f64 = 30.0;

pub const POWERUP_COLLECT_RADIUS: f32 = 1.5;

/// Bob phase advance (radians per second).
pub const POWERUP_BOB_RATE: f32 = 3.0;

/// Seconds between ambient power-up spawns.
pub const POWERUP_SPAWN_INTERVAL: f64 = 15.0;

/// Chance a killed enemy drops a power-up.
pub const POWERUP_DROP_CHANCE: f64 = 0.2;

/// Ambient power-ups never spawn closer than this to the arena center.
pub const POWERUP_CENTER_EXCLUSION: f32 = 5.0;

// --- Levels ---

/// Kills within one level that trigger a level-up.
pub const KILLS_PER_LEVEL: u32 = 15;

pub const WALL_HEIGHT: f32 = 5.0;
pub const WALL_THICKNESS: f32 = 1.0;

/// Obstacles never spawn closer than this to the arena center.
pub const OBSTACLE_CENTER_EXCLUSION: f32 = 5.0;
