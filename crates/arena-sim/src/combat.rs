//! Hit-scan resolution against live enemies.
//!
//! Pure geometry over plain data. The engine supplies enemy centers and
//! hit radii; physics is only consulted for the cosmetic miss fallback.

use glam::Vec3;

use arena_core::types::EnemyId;

/// Something a hit-scan ray can strike.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitTarget {
    pub id: EnemyId,
    pub center: Vec3,
    pub radius: f32,
}

/// The enemy a ray struck.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitscanHit {
    pub id: EnemyId,
    /// Distance along the ray to the point closest to the enemy center.
    pub projection: f32,
    pub point: Vec3,
}

/// Find the enemy a ray hits.
///
/// Only targets in front of the origin count. A target is hit when its
/// center lies within `radius` of the ray. Among hits the smallest forward
/// projection wins, not the best-centered one.
pub fn resolve_hitscan(
    origin: Vec3,
    direction: Vec3,
    targets: impl IntoIterator<Item = HitTarget>,
) -> Option<HitscanHit> {
    let dir = direction.try_normalize()?;
    let mut best: Option<HitscanHit> = None;

    for target in targets {
        let to_center = target.center - origin;
        let projection = to_center.dot(dir);
        if projection <= 0.0 {
            continue;
        }
        let closest = origin + dir * projection;
        if closest.distance(target.center) >= target.radius {
            continue;
        }
        if best.map_or(true, |b| projection < b.projection) {
            best = Some(HitscanHit {
                id: target.id,
                projection,
                point: closest,
            });
        }
    }
    best
}
