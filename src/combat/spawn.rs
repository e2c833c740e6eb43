//! Combat domain: enemy spawning helpers.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::ai::EnemyBrain;
use crate::combat::components::{AnimationParams, BaseColor, Combatant, Enemy};
use crate::combat::health::Health;
use crate::content::EnemySpawnDef;
use crate::core::GameLayer;

pub const ENEMY_SIZE: Vec2 = Vec2::new(0.9, 0.6);
pub const ENEMY_COLOR: Color = Color::srgb(0.35, 0.8, 0.4);

/// Bundle for a patrolling slime. Kinematic: the brain moves it by transform.
#[derive(Bundle)]
pub struct EnemyBundle {
    pub enemy: Enemy,
    pub combatant: Combatant,
    pub health: Health,
    pub brain: EnemyBrain,
    pub animation: AnimationParams,
    pub base_color: BaseColor,
    pub sprite: Sprite,
    pub transform: Transform,
    pub rigid_body: RigidBody,
    pub collider: Collider,
    pub collision_layers: CollisionLayers,
}

impl EnemyBundle {
    pub fn new(def: &EnemySpawnDef) -> Self {
        let brain = EnemyBrain::from_def(def);
        let x = brain.bounds.clamp(def.x);

        Self {
            enemy: Enemy,
            combatant: Combatant,
            health: Health::new(def.max_hp),
            brain,
            animation: AnimationParams {
                grounded: true,
                ..default()
            },
            base_color: BaseColor(ENEMY_COLOR),
            sprite: Sprite {
                color: ENEMY_COLOR,
                custom_size: Some(ENEMY_SIZE),
                ..default()
            },
            transform: Transform::from_xyz(x, def.y, 0.0),
            rigid_body: RigidBody::Kinematic,
            collider: Collider::rectangle(ENEMY_SIZE.x, ENEMY_SIZE.y),
            collision_layers: CollisionLayers::new(GameLayer::Enemy, [GameLayer::Ground]),
        }
    }
}

pub fn spawn_enemy(commands: &mut Commands, def: &EnemySpawnDef) -> Entity {
    commands.spawn(EnemyBundle::new(def)).id()
}
