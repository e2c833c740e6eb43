//! Combat domain: health, attack timing, hit detection, and enemy behaviour.

pub mod ai;
mod combo;
mod components;
mod events;
mod health;
mod hits;
mod resources;
mod spawn;
mod strike;
mod systems;

#[cfg(test)]
mod tests;

pub use combo::{ComboQueue, ComboSignal, ComboStage, PlayerCombo};
pub use components::{AnimationParams, BaseColor, Combatant, Dead, DespawnTimer, Enemy, Flash};
pub use events::{
    AnimationCue, AnimationCueEvent, DamageEvent, DeathEvent, HealthChangedEvent, HurtEvent,
};
pub use health::{Health, HealthChange};
pub use hits::{ENEMY_MELEE_LIFT, enemy_melee_center, overlap_circle, player_attack_point};
pub use resources::{CombatRng, CombatTuning, ENEMY_ATTACK_CLIPS};
pub use spawn::{ENEMY_SIZE, EnemyBundle, spawn_enemy};
pub use strike::{EnemyStrike, StrikeSignal, StrikeStage, StrikeTiming};

use bevy::prelude::*;

use crate::combat::ai::{handle_enemy_deaths, update_enemy_ai};
use crate::combat::systems::{
    announce_new_health, apply_animation_cues, apply_damage, cue_hurt_reactions, handle_deaths,
    tick_despawn_timers, update_flashes,
};
use crate::content::GameplayDefaults;
use crate::core::{GameState, gameplay_active};

/// Frame ordering for combat: actors act, damage resolves, then presentation catches up.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CombatSet {
    /// Behaviour that emits damage (enemy brains, player combo)
    Act,
    /// Health, hurt, and death bookkeeping
    Resolve,
    /// Animation cues and despawning
    Present,
}

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CombatTuning>()
            .init_resource::<CombatRng>()
            .add_message::<DamageEvent>()
            .add_message::<HealthChangedEvent>()
            .add_message::<HurtEvent>()
            .add_message::<DeathEvent>()
            .add_message::<AnimationCueEvent>()
            .configure_sets(
                Update,
                (CombatSet::Act, CombatSet::Resolve, CombatSet::Present).chain(),
            )
            .configure_sets(
                Update,
                CombatSet::Act
                    .run_if(in_state(GameState::Playing))
                    .run_if(gameplay_active),
            )
            .add_systems(Startup, configure_combat)
            .add_systems(Update, update_enemy_ai.in_set(CombatSet::Act))
            .add_systems(
                Update,
                (
                    announce_new_health,
                    apply_damage,
                    cue_hurt_reactions,
                    handle_deaths,
                    handle_enemy_deaths,
                )
                    .chain()
                    .in_set(CombatSet::Resolve),
            )
            .add_systems(
                Update,
                (apply_animation_cues, update_flashes, tick_despawn_timers)
                    .chain()
                    .in_set(CombatSet::Present),
            );
    }
}

/// Copy loaded tuning into the combat resources.
fn configure_combat(mut commands: Commands, defaults: Res<GameplayDefaults>) {
    commands.insert_resource(CombatTuning::from_defaults(&defaults));
    if let Some(seed) = defaults.rng_seed {
        info!("Combat RNG seeded with {}", seed);
        commands.insert_resource(CombatRng::from_seed(seed));
    }
}
