//! Player domain: spawning the player from gameplay data.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::{AnimationParams, BaseColor, Combatant, Health, PlayerCombo};
use crate::content::PlayerDef;
use crate::core::GameLayer;
use crate::player::{AttackTuning, Player, PlayerMotion};

pub const PLAYER_COLOR: Color = Color::srgb(0.9, 0.9, 0.95);

pub fn spawn_player(commands: &mut Commands, def: &PlayerDef, position: Vec2) -> Entity {
    let attack = AttackTuning::from_def(def);
    let size = Vec2::new(def.size.0, def.size.1);

    info!(
        "Spawning player at ({:.1}, {:.1}): hp={}, speed={}, combo={:?}",
        position.x, position.y, def.max_hp, def.move_speed, attack.steps
    );

    commands
        .spawn((
            // Identity & Movement
            (Player, Combatant, PlayerMotion::default()),
            // Combat
            (
                Health::new(def.max_hp),
                PlayerCombo::new(attack.steps, attack.combo_reset_time, attack.timing),
                AnimationParams::default(),
            ),
            // Rendering
            BaseColor(PLAYER_COLOR),
            Sprite {
                color: PLAYER_COLOR,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, 1.0),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(size.x, size.y),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                GravityScale(0.0), // gravity is applied by the movement systems
                Friction::new(0.0),
                CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]),
            ),
        ))
        .id()
}
