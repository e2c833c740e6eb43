//! Combat domain: hit-detection queries against the physics world.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::GameLayer;

/// Entities on `layer` whose colliders overlap a circle.
///
/// Each entity appears once even if several of its shapes overlap.
pub fn overlap_circle(
    spatial_query: &SpatialQuery,
    center: Vec2,
    radius: f32,
    layer: GameLayer,
) -> Vec<Entity> {
    if radius <= 0.0 {
        return Vec::new();
    }

    let filter = SpatialQueryFilter::from_mask(layer);
    let mut hits = spatial_query.shape_intersections(&Collider::circle(radius), center, 0.0, &filter);
    hits.sort();
    hits.dedup();
    hits
}

/// Centre of the enemy melee circle, slightly above the body origin.
pub fn enemy_melee_center(position: Vec2) -> Vec2 {
    position + Vec2::new(0.0, ENEMY_MELEE_LIFT)
}

/// Centre of the player attack circle, `reach` ahead of the body.
pub fn player_attack_point(position: Vec2, facing_sign: f32, reach: f32) -> Vec2 {
    position + Vec2::new(reach * facing_sign, 0.0)
}

pub const ENEMY_MELEE_LIFT: f32 = 0.2;
