//! Player domain: ground detection and falling out of the level.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::combat::{DamageEvent, Dead};
use crate::core::GameLayer;
use crate::player::{FallLimit, MovementTuning, Player, PlayerMotion};

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    mut query: Query<(&Transform, &Collider, &mut PlayerMotion), (With<Player>, Without<Dead>)>,
) {
    // Filter to only hit Ground layer entities
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, collider, mut motion) in &mut query {
        let was_grounded = motion.grounded;

        let half_height = match collider.shape_scaled().as_cuboid() {
            Some(c) => c.half_extents.y,
            None => 0.5,
        };

        // Short ray down from the feet
        let ray_origin = transform.translation.truncate() - Vec2::new(0.0, half_height);
        let hit = spatial_query.cast_ray(
            ray_origin,
            Dir2::NEG_Y,
            tuning.ground_check_distance,
            true,
            &ground_filter,
        );

        motion.grounded = hit.is_some();

        if motion.grounded != was_grounded {
            debug!("Player grounded={}", motion.grounded);
        }
    }
}

/// A player below the level's fall limit takes lethal damage, so the usual
/// death path ends the attempt.
pub(crate) fn fall_out_of_level(
    query: Query<(Entity, &Transform, &FallLimit), (With<Player>, Without<Dead>)>,
    mut damage_events: MessageWriter<DamageEvent>,
) {
    for (entity, transform, limit) in &query {
        if transform.translation.y >= limit.0 {
            continue;
        }
        info!(
            "Player fell out of the level at y={:.1}",
            transform.translation.y
        );
        damage_events.write(DamageEvent {
            source: entity,
            target: entity,
            amount: u32::MAX,
        });
    }
}
