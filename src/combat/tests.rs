//! Combat domain: tests for health, attack timing, enemy decisions, and damage flow.

use bevy::ecs::message::Messages;
use bevy::prelude::*;

use super::ai::{
    EnemyBrain, EnemyState, PatrolBounds, TargetSense, chase_step, decide, patrol_step,
};
use super::systems::{apply_damage, cue_hurt_reactions, handle_deaths};
use super::{
    AnimationCue, AnimationCueEvent, ComboQueue, ComboSignal, CombatTuning, Dead, DamageEvent, DeathEvent,
    EnemyStrike, Health, HealthChangedEvent, HurtEvent, PlayerCombo, StrikeSignal, StrikeTiming,
};
use crate::content::EnemySpawnDef;
use crate::core::Facing;

const DT: f32 = 0.05;

fn default_combo() -> PlayerCombo {
    PlayerCombo::new(
        vec!["Attack1".into(), "Attack2".into(), "Attack3".into()],
        0.7,
        StrikeTiming::new(0.5, 0.3),
    )
}

fn sense(dx: f32, in_melee: bool) -> Option<TargetSense> {
    Some(TargetSense {
        dx,
        distance: dx.abs(),
        in_melee,
    })
}

/// Tick until a signal comes back or `max_secs` pass. Returns (signal, seconds ticked).
fn tick_combo_until_signal(combo: &mut PlayerCombo, max_secs: f32) -> (Option<ComboSignal>, f32) {
    let mut elapsed = 0.0;
    while elapsed <= max_secs {
        elapsed += DT;
        if let Some(signal) = combo.tick(DT) {
            return (Some(signal), elapsed);
        }
    }
    (None, elapsed)
}

// -----------------------------------------------------------------------------
// Health
// -----------------------------------------------------------------------------

#[test]
fn test_health_stays_in_bounds_and_dies_once() {
    let sequences: [&[u32]; 4] = [&[1, 1, 1, 1], &[5], &[0, 2, 0, 9, 1], &[u32::MAX, 1]];

    for amounts in sequences {
        let mut health = Health::new(3);
        let mut deaths = 0;
        for &amount in amounts {
            if let Some(change) = health.take_damage(amount) {
                assert!(change.current <= change.max);
                if change.died {
                    deaths += 1;
                }
            }
            assert!(health.current() <= health.max());
        }
        assert_eq!(deaths, 1, "sequence {:?}", amounts);
        assert!(health.is_dead());
        assert_eq!(health.current(), 0);
    }
}

#[test]
fn test_dead_health_ignores_damage_and_heal() {
    let mut health = Health::new(1);
    assert!(health.take_damage(1).is_some_and(|c| c.died));

    assert_eq!(health.take_damage(1), None);
    assert_eq!(health.heal(5), None);
    assert_eq!(health.current(), 0);
}

#[test]
fn test_heal_clamps_to_max() {
    let mut health = Health::new(3);
    health.take_damage(2);

    let change = health.heal(10).unwrap();
    assert_eq!(change.current, 3);
    assert!(!change.died);
    assert_eq!(health.current(), health.max());
}

#[test]
fn test_zero_max_is_raised_to_one() {
    assert_eq!(Health::new(0).max(), 1);
}

// -----------------------------------------------------------------------------
// Strike timing
// -----------------------------------------------------------------------------

#[test]
fn test_strike_timing_split() {
    let timing = StrikeTiming::new(0.5, 0.3);
    assert!((timing.wind_up() - 0.15).abs() < 1e-6);
    assert!((timing.recovery() - 0.35).abs() < 1e-6);
}

#[test]
fn test_enemy_strike_sequence_and_cooldown_from_start() {
    let mut strike = EnemyStrike::new(StrikeTiming::new(0.5, 0.3), 1.0);
    assert!(strike.cooldown_ready(0.0));
    assert!(strike.begin(2.0));
    assert!(strike.is_attacking());
    assert!(!strike.begin(2.0));

    // settle tick, then wind-up
    assert_eq!(strike.tick(DT), None);
    let mut signals = Vec::new();
    for _ in 0..20 {
        if let Some(signal) = strike.tick(DT) {
            signals.push(signal);
        }
    }
    assert_eq!(signals, vec![StrikeSignal::HitFrame, StrikeSignal::Completed]);
    assert!(!strike.is_attacking());
    assert_eq!(strike.last_attack_start(), Some(2.0));

    // cooldown counts from the start of the attack, not its end
    assert!(!strike.cooldown_ready(2.9));
    assert!(strike.cooldown_ready(3.0));
}

#[test]
fn test_cancelled_strike_leaves_no_cooldown() {
    let mut strike = EnemyStrike::new(StrikeTiming::new(0.5, 0.3), 1.0);
    strike.begin(0.0);
    strike.tick(DT);
    strike.cancel();

    assert!(!strike.is_attacking());
    assert_eq!(strike.last_attack_start(), None);
    for _ in 0..40 {
        assert_eq!(strike.tick(DT), None);
    }
}

// -----------------------------------------------------------------------------
// Combo
// -----------------------------------------------------------------------------

#[test]
fn test_combo_queue_cycles_and_resets() {
    let mut queue = ComboQueue::new(3, 0.7);
    let mut steps = Vec::new();
    for i in 0..4 {
        steps.push(queue.enqueue(i as f32 * 0.1));
        queue.pop();
    }
    assert_eq!(steps, vec![Some(0), Some(1), Some(2), Some(0)]);

    // slower than the reset threshold
    assert_eq!(queue.enqueue(0.3 + 0.71), Some(0));
    assert_eq!(queue.next_step(), 1);
}

#[test]
fn test_combo_queue_is_capped_at_cycle_length() {
    let mut queue = ComboQueue::new(3, 0.7);
    assert!(queue.enqueue(0.0).is_some());
    assert!(queue.enqueue(0.1).is_some());
    assert!(queue.enqueue(0.2).is_some());
    assert_eq!(queue.enqueue(0.3), None);
    assert_eq!(queue.len(), 3);
}

#[test]
fn test_combo_executes_queued_steps_in_order() {
    let mut combo = default_combo();

    assert_eq!(combo.request_attack(0.0), Some(ComboSignal::StepStarted(0)));
    assert!(combo.is_attacking());
    // appended while the first step runs
    assert_eq!(combo.request_attack(0.1), None);

    let (signal, _) = tick_combo_until_signal(&mut combo, 1.0);
    assert_eq!(signal, Some(ComboSignal::HitFrame(0)));
    let (signal, _) = tick_combo_until_signal(&mut combo, 1.0);
    assert_eq!(signal, Some(ComboSignal::StepStarted(1)));
    assert_eq!(combo.step_name(1), "Attack2");
    let (signal, _) = tick_combo_until_signal(&mut combo, 1.0);
    assert_eq!(signal, Some(ComboSignal::HitFrame(1)));
    let (signal, _) = tick_combo_until_signal(&mut combo, 1.0);
    assert_eq!(signal, Some(ComboSignal::Finished));

    assert!(!combo.is_attacking());
    assert_eq!(combo.queue().next_step(), 0);
}

#[test]
fn test_combo_hit_frame_waits_one_tick_then_wind_up() {
    let mut combo = default_combo();
    combo.request_attack(0.0);

    // One tick to settle, then 0.15s of wind-up
    let (signal, elapsed) = tick_combo_until_signal(&mut combo, 1.0);
    assert_eq!(signal, Some(ComboSignal::HitFrame(0)));
    assert!(elapsed >= DT + 0.15 - 1e-4);
    assert!(elapsed < DT + 0.15 + DT + 1e-4);
}

#[test]
fn test_abort_clears_queue_and_flags() {
    let mut combo = default_combo();
    combo.request_attack(0.0);
    combo.request_attack(0.1);
    combo.tick(DT);

    combo.abort();

    assert!(!combo.is_attacking());
    assert!(combo.queue().is_empty());
    assert_eq!(combo.queue().next_step(), 0);
    for _ in 0..40 {
        assert_eq!(combo.tick(DT), None);
    }
}

// -----------------------------------------------------------------------------
// Enemy decisions
// -----------------------------------------------------------------------------

#[test]
fn test_decide_priorities() {
    let detect = 3.0;
    assert_eq!(decide(EnemyState::Patrol, None, detect, true), EnemyState::Patrol);
    assert_eq!(
        decide(EnemyState::Patrol, sense(5.0, false), detect, true),
        EnemyState::Patrol
    );
    assert_eq!(
        decide(EnemyState::Patrol, sense(2.0, false), detect, true),
        EnemyState::Chase
    );
    assert_eq!(
        decide(EnemyState::Chase, sense(0.4, true), detect, true),
        EnemyState::Attack
    );
    assert_eq!(
        decide(EnemyState::Chase, sense(0.4, true), detect, false),
        EnemyState::Hold
    );
    assert_eq!(
        decide(EnemyState::Hold, sense(2.0, false), detect, false),
        EnemyState::Chase
    );
}

#[test]
fn test_committed_states_ignore_the_world() {
    for state in [EnemyState::Attack, EnemyState::Turning, EnemyState::Dead] {
        assert_eq!(decide(state, sense(0.1, true), 3.0, true), state);
        assert_eq!(decide(state, None, 3.0, true), state);
    }
}

#[test]
fn test_patrol_step_stops_on_bound() {
    let bounds = PatrolBounds::new(-3.0, 3.0);

    let step = patrol_step(2.95, Facing::Right, bounds, 2.0, 0.1);
    assert_eq!(step.x, 3.0);
    assert!(step.reached_bound);

    let step = patrol_step(0.0, Facing::Left, bounds, 2.0, 0.1);
    assert!((step.x + 0.2).abs() < 1e-6);
    assert!(!step.reached_bound);
}

#[test]
fn test_patrol_step_walks_back_into_range() {
    let bounds = PatrolBounds::new(-3.0, 3.0);

    let step = patrol_step(5.0, Facing::Right, bounds, 2.0, 0.1);
    assert!((step.x - 4.8).abs() < 1e-6);
    assert_eq!(step.facing, Facing::Left);
    assert!(!step.reached_bound);

    let step = patrol_step(-3.1, Facing::Left, bounds, 2.0, 0.1);
    assert_eq!(step.x, -3.0);
    assert_eq!(step.facing, Facing::Right);
}

#[test]
fn test_patrol_bounds_are_ordered() {
    let bounds = PatrolBounds::new(4.0, -1.0);
    assert_eq!((bounds.left_x, bounds.right_x), (-1.0, 4.0));
}

#[test]
fn test_chase_step_does_not_overshoot() {
    assert_eq!(chase_step(0.0, 0.05, 2.0, 0.1), 0.05);
    assert!((chase_step(0.0, 3.0, 2.0, 0.1) - 0.2).abs() < 1e-6);
    assert!((chase_step(0.0, -3.0, 2.0, 0.1) + 0.2).abs() < 1e-6);
    assert_eq!(chase_step(1.0, 1.0, 2.0, 0.1), 1.0);
}

#[test]
fn test_brain_turns_after_idle_at_bound() {
    let mut brain = EnemyBrain::from_def(&EnemySpawnDef::default());
    let mut x = 2.95;

    let frame = brain.update(x, None, 0.0, 0.1);
    x = frame.x;
    assert_eq!(x, 3.0);
    assert_eq!(brain.state, EnemyState::Turning);
    assert!(!frame.running);

    // idles for turn_idle_time (0.25s)
    let mut t = 0.1;
    while brain.state == EnemyState::Turning {
        t += 0.1;
        let frame = brain.update(x, None, t, 0.1);
        x = frame.x;
        assert!(t < 1.0, "turn never finished");
    }

    assert_eq!(brain.facing, Facing::Left);
    assert_eq!(brain.state, EnemyState::Patrol);
    assert!(x < 3.0);
}

#[test]
fn test_brain_attacks_then_holds_during_cooldown() {
    let mut brain = EnemyBrain::from_def(&EnemySpawnDef::default());

    let frame = brain.update(0.0, sense(-0.3, true), 0.0, DT);
    assert!(frame.attack_started);
    assert_eq!(brain.state, EnemyState::Attack);
    assert_eq!(brain.facing, Facing::Left);

    let mut now = 0.0;
    let mut hit_frames = 0;
    while brain.state == EnemyState::Attack {
        now += DT;
        let frame = brain.update(0.0, sense(-0.3, true), now, DT);
        if frame.hit_frame {
            hit_frames += 1;
        }
        assert_eq!(frame.x, 0.0);
    }
    assert_eq!(hit_frames, 1);

    // still in melee, cooldown measured from the start at t=0
    assert_eq!(brain.state, EnemyState::Hold);
    assert!(!brain.strike().cooldown_ready(now));
    let frame = brain.update(0.0, sense(-0.3, true), 1.0, DT);
    assert!(frame.attack_started);
}

#[test]
fn test_brain_chases_toward_target() {
    let mut brain = EnemyBrain::from_def(&EnemySpawnDef::default());

    let frame = brain.update(0.0, sense(-2.0, false), 0.0, 0.1);

    assert_eq!(brain.state, EnemyState::Chase);
    assert_eq!(brain.facing, Facing::Left);
    assert!(frame.running);
    assert!((frame.x + 0.2).abs() < 1e-6);
}

#[test]
fn test_killed_brain_is_frozen() {
    let mut brain = EnemyBrain::from_def(&EnemySpawnDef::default());
    brain.update(0.0, sense(0.2, true), 0.0, DT);
    assert_eq!(brain.state, EnemyState::Attack);

    brain.kill();
    for i in 0..40 {
        let frame = brain.update(0.0, sense(0.2, true), i as f32 * DT, DT);
        assert!(!frame.hit_frame && !frame.attack_started && !frame.running);
    }
    assert!(brain.is_dead());
    assert!(!brain.strike().is_attacking());
}

// -----------------------------------------------------------------------------
// Damage flow
// -----------------------------------------------------------------------------

fn damage_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .init_resource::<CombatTuning>()
        .add_message::<DamageEvent>()
        .add_message::<HealthChangedEvent>()
        .add_message::<HurtEvent>()
        .add_message::<DeathEvent>()
        .add_message::<AnimationCueEvent>()
        .add_systems(
            Update,
            (apply_damage, cue_hurt_reactions, handle_deaths).chain(),
        );
    app
}

fn count_messages<M: bevy::ecs::message::Message>(app: &App) -> usize {
    let messages = app.world().resource::<Messages<M>>();
    messages.get_cursor().read(messages).count()
}

#[test]
fn test_lethal_damage_marks_dead_once() {
    let mut app = damage_app();
    let attacker = app.world_mut().spawn_empty().id();
    let target = app.world_mut().spawn(Health::new(2)).id();

    for _ in 0..3 {
        app.world_mut().write_message(DamageEvent {
            source: attacker,
            target,
            amount: 1,
        });
    }
    app.update();

    assert!(app.world().get::<Dead>(target).is_some());
    assert_eq!(count_messages::<HealthChangedEvent>(&app), 2);
    assert_eq!(count_messages::<HurtEvent>(&app), 1);
    assert_eq!(count_messages::<DeathEvent>(&app), 1);
    assert_eq!(app.world().get::<Health>(target).map(Health::current), Some(0));
}

#[test]
fn test_hurt_plays_hit_cue_and_death_does_not() {
    let mut app = damage_app();
    let attacker = app.world_mut().spawn_empty().id();
    let survivor = app.world_mut().spawn(Health::new(3)).id();
    let victim = app.world_mut().spawn(Health::new(1)).id();

    for target in [survivor, victim] {
        app.world_mut().write_message(DamageEvent {
            source: attacker,
            target,
            amount: 1,
        });
    }
    app.update();

    let messages = app.world().resource::<Messages<AnimationCueEvent>>();
    let cues: Vec<_> = messages
        .get_cursor()
        .read(messages)
        .map(|event| (event.entity, event.cue.clone()))
        .collect();
    assert_eq!(
        cues,
        [(survivor, AnimationCue::Hit), (victim, AnimationCue::Death)]
    );
}
