//! Player domain: camera follow with look-ahead.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::player::{CameraTuning, Player};

/// Horizontal target: the player plus a look-ahead in the direction of travel.
pub fn camera_target_x(player_x: f32, velocity_x: f32, look_ahead: f32) -> f32 {
    if velocity_x.abs() > 0.1 {
        player_x + look_ahead * velocity_x.signum()
    } else {
        player_x
    }
}

/// Ease x toward the target; y snaps to the player plus an offset.
pub(crate) fn follow_player(
    time: Res<Time>,
    tuning: Res<CameraTuning>,
    player_query: Query<(&Transform, &LinearVelocity), (With<Player>, Without<Camera2d>)>,
    mut camera_query: Query<&mut Transform, With<Camera2d>>,
) {
    let Ok((player, velocity)) = player_query.single() else {
        return;
    };
    let Ok(mut camera) = camera_query.single_mut() else {
        return;
    };

    let target_x = camera_target_x(player.translation.x, velocity.x, tuning.look_ahead);
    let t = if tuning.smooth_time > 0.0 {
        (time.delta_secs() / tuning.smooth_time).min(1.0)
    } else {
        1.0
    };

    camera.translation.x += (target_x - camera.translation.x) * t;
    camera.translation.y = player.translation.y + tuning.vertical_offset;
}
