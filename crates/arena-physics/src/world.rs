//! Kinematic rigid-body world backed by hecs.
//!
//! Bodies are entities carrying `Position`, `Velocity`, `Collider` and
//! `Mass`. Dynamic bodies fall under gravity and are pushed out of static
//! boxes along the axis of least penetration. Dynamic bodies pass through
//! each other.

use glam::Vec3;
use hecs::{Entity, World};

use arena_core::constants::{
    DEFAULT_BODY_MASS, GRAVITY_Y, PHYSICS_SUBSTEP_THRESHOLD, RAYCAST_TOLERANCE,
};
use arena_core::error::PhysicsError;
use arena_core::types::{BodyId, BodyShape};

use crate::adapter::{BodyFilter, PhysicsAdapter, RayHit};

/// World-space center of a body.
#[derive(Debug, Clone, Copy)]
pub struct Position(pub Vec3);

/// Linear velocity in world space.
#[derive(Debug, Clone, Copy)]
pub struct Velocity(pub Vec3);

/// Body mass in kilograms.
#[derive(Debug, Clone, Copy)]
pub struct Mass(pub f32);

/// Collision volume, approximated by its bounding box.
#[derive(Debug, Clone, Copy)]
pub struct Collider {
    pub shape: BodyShape,
    pub half_extents: Vec3,
    /// Immovable (infinite mass for collision response).
    pub is_static: bool,
}

/// Tunables for `ArenaPhysics`.
#[derive(Debug, Clone, Copy)]
pub struct PhysicsConfig {
    pub gravity: Vec3,
    /// Upper bound on sub-steps per `step` call.
    pub max_substeps: u32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: Vec3::new(0.0, GRAVITY_Y, 0.0),
            max_substeps: 2,
        }
    }
}

/// hecs-backed implementation of `PhysicsAdapter`.
pub struct ArenaPhysics {
    world: World,
    config: PhysicsConfig,
    initialized: bool,
    /// Scratch list of static boxes, rebuilt each sub-step.
    static_buffer: Vec<(Vec3, Vec3)>,
}

impl ArenaPhysics {
    pub fn new(config: PhysicsConfig) -> Self {
        Self {
            world: World::new(),
            config,
            initialized: false,
            static_buffer: Vec::new(),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Number of sub-steps used for a frame of `dt` seconds.
    pub fn substeps_for(&self, dt: f32) -> u32 {
        if dt > PHYSICS_SUBSTEP_THRESHOLD {
            self.config.max_substeps.min(2)
        } else {
            1
        }
    }

    fn entity(body: BodyId) -> Option<Entity> {
        Entity::from_bits(body.0)
    }

    fn integrate(&mut self, h: f32) {
        let gravity = self.config.gravity;
        for (_entity, (pos, vel, collider)) in
            self.world
                .query_mut::<(&mut Position, &mut Velocity, &Collider)>()
        {
            if collider.is_static {
                continue;
            }
            vel.0 += gravity * h;
            pos.0 += vel.0 * h;
        }
    }

    fn resolve_static_contacts(&mut self) {
        self.static_buffer.clear();
        for (_entity, (pos, collider)) in self.world.query_mut::<(&Position, &Collider)>() {
            if collider.is_static {
                self.static_buffer.push((pos.0, collider.half_extents));
            }
        }

        for (_entity, (pos, vel, collider)) in
            self.world
                .query_mut::<(&mut Position, &mut Velocity, &Collider)>()
        {
            if collider.is_static {
                continue;
            }
            for &(center, half) in &self.static_buffer {
                push_out(&mut pos.0, &mut vel.0, collider.half_extents, center, half);
            }
        }
    }
}

impl Default for ArenaPhysics {
    fn default() -> Self {
        Self::new(PhysicsConfig::default())
    }
}

/// Separate a dynamic box from a static box along the axis of least
/// penetration and cancel velocity into the contact surface.
fn push_out(pos: &mut Vec3, vel: &mut Vec3, half: Vec3, other: Vec3, other_half: Vec3) {
    let delta = *pos - other;
    let overlap = (half + other_half) - delta.abs();
    if overlap.x <= 0.0 || overlap.y <= 0.0 || overlap.z <= 0.0 {
        return;
    }

    let axis = if overlap.x < overlap.y && overlap.x < overlap.z {
        0
    } else if overlap.y < overlap.z {
        1
    } else {
        2
    };
    let sign = if delta[axis] < 0.0 { -1.0 } else { 1.0 };
    pos[axis] += overlap[axis] * sign;
    if vel[axis] * sign < 0.0 {
        vel[axis] = 0.0;
    }
}

impl PhysicsAdapter for ArenaPhysics {
    fn initialize(&mut self) -> Result<(), PhysicsError> {
        let g = self.config.gravity;
        if !g.is_finite() {
            log::warn!("Physics init rejected: gravity {:?}", g);
            return Err(PhysicsError::InvalidGravity(g.to_array()));
        }
        if self.config.max_substeps == 0 {
            log::warn!("Physics init rejected: zero sub-steps");
            return Err(PhysicsError::InvalidSubsteps(self.config.max_substeps));
        }
        self.world.clear();
        self.initialized = true;
        log::info!("Physics initialized (gravity {:?})", g);
        Ok(())
    }

    fn create_body(&mut self, shape: BodyShape, position: Vec3, is_static: bool) -> BodyId {
        let entity = self.world.spawn((
            Position(position),
            Velocity(Vec3::ZERO),
            Mass(DEFAULT_BODY_MASS),
            Collider {
                shape,
                half_extents: shape.half_extents(),
                is_static,
            },
        ));
        BodyId(entity.to_bits().get())
    }

    fn position(&self, body: BodyId) -> Option<Vec3> {
        let entity = Self::entity(body)?;
        self.world.get::<&Position>(entity).ok().map(|p| p.0)
    }

    fn set_position(&mut self, body: BodyId, position: Vec3) {
        if let Some(entity) = Self::entity(body) {
            if let Ok(mut pos) = self.world.get::<&mut Position>(entity) {
                pos.0 = position;
            }
        }
    }

    fn velocity(&self, body: BodyId) -> Option<Vec3> {
        let entity = Self::entity(body)?;
        self.world.get::<&Velocity>(entity).ok().map(|v| v.0)
    }

    fn set_velocity(&mut self, body: BodyId, velocity: Vec3) {
        let Some(entity) = Self::entity(body) else {
            return;
        };
        if let Ok((vel, collider)) = self
            .world
            .query_one_mut::<(&mut Velocity, &Collider)>(entity)
        {
            if !collider.is_static {
                vel.0 = velocity;
            }
        }
    }

    fn apply_impulse(&mut self, body: BodyId, impulse: Vec3) {
        let Some(entity) = Self::entity(body) else {
            return;
        };
        if let Ok((vel, mass, collider)) = self
            .world
            .query_one_mut::<(&mut Velocity, &Mass, &Collider)>(entity)
        {
            if !collider.is_static && mass.0 > 0.0 {
                vel.0 += impulse / mass.0;
            }
        }
    }

    fn step(&mut self, dt: f32) {
        if dt <= 0.0 || !dt.is_finite() {
            return;
        }
        let steps = self.substeps_for(dt);
        let h = dt / steps as f32;
        for _ in 0..steps {
            self.integrate(h);
            self.resolve_static_contacts();
        }
    }

    fn raycast_nearest(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        filter: BodyFilter,
    ) -> Option<RayHit> {
        let dir = direction.try_normalize()?;
        let mut best: Option<RayHit> = None;

        let mut query = self.world.query::<(&Position, &Collider)>();
        for (entity, (pos, collider)) in query.iter() {
            let eligible = match filter {
                BodyFilter::All => true,
                BodyFilter::StaticOnly => collider.is_static,
                BodyFilter::DynamicOnly => !collider.is_static,
            };
            if !eligible {
                continue;
            }

            let to_center = pos.0 - origin;
            let projection = to_center.dot(dir);
            if projection <= 0.0 || projection >= max_distance {
                continue;
            }
            let perpendicular = (to_center - dir * projection).length();
            if perpendicular >= RAYCAST_TOLERANCE {
                continue;
            }
            if best.map_or(true, |b| projection < b.distance) {
                best = Some(RayHit {
                    body: BodyId(entity.to_bits().get()),
                    point: origin + dir * projection,
                    distance: projection,
                });
            }
        }
        best
    }

    fn remove_body(&mut self, body: BodyId) {
        if let Some(entity) = Self::entity(body) {
            let _ = self.world.despawn(entity);
        }
    }

    fn clear(&mut self) {
        self.world.clear();
    }

    fn body_count(&self) -> usize {
        self.world.len() as usize
    }
}
