//! Combat domain: tuning and randomness resources.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::content::GameplayDefaults;

#[derive(Resource, Debug, Clone)]
pub struct CombatTuning {
    /// Seconds between death and despawn
    pub death_delay: f32,
    pub hit_flash_duration: f32,
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            death_delay: 0.5,
            hit_flash_duration: 0.12,
        }
    }
}

impl CombatTuning {
    pub fn from_defaults(defaults: &GameplayDefaults) -> Self {
        Self {
            death_delay: defaults.death_delay.max(0.0),
            ..Self::default()
        }
    }
}

/// Attack clips an enemy picks from when it swings.
pub const ENEMY_ATTACK_CLIPS: [&str; 3] = ["Attack", "Attack2", "Attack3"];

/// Deterministic RNG for cosmetic combat choices such as attack clip variants.
#[derive(Resource, Debug)]
pub struct CombatRng(pub ChaCha8Rng);

impl CombatRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn enemy_attack_clip(&mut self) -> &'static str {
        ENEMY_ATTACK_CLIPS[self.0.random_range(0..ENEMY_ATTACK_CLIPS.len())]
    }
}

impl Default for CombatRng {
    fn default() -> Self {
        Self::from_seed(rand::rng().random())
    }
}
