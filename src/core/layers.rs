//! Core domain: physics layers shared by every actor.

use avian2d::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Player character
    Player,
    /// Enemy characters
    Enemy,
}

impl GameLayer {
    /// Layer an attack launched from this layer is allowed to hit.
    pub fn opponent(self) -> GameLayer {
        match self {
            GameLayer::Player => GameLayer::Enemy,
            GameLayer::Enemy => GameLayer::Player,
            other => other,
        }
    }
}
