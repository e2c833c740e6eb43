//! Combat domain: attack timing shared by combo steps and single enemy attacks.

use crate::core::{Continuation, Suspend};

/// Timing of one attack: a nominal duration with a hit frame partway through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrikeTiming {
    pub duration: f32,
    /// Fraction of `duration` at which the hit registers (0..=1)
    pub hit_fraction: f32,
}

impl StrikeTiming {
    pub const DEFAULT_HIT_FRACTION: f32 = 0.3;

    pub fn new(duration: f32, hit_fraction: f32) -> Self {
        Self {
            duration: duration.max(0.0),
            hit_fraction: hit_fraction.clamp(0.0, 1.0),
        }
    }

    /// Seconds from the start of the swing to the hit frame.
    pub fn wind_up(&self) -> f32 {
        self.duration * self.hit_fraction
    }

    /// Seconds from the hit frame to the end of the swing.
    pub fn recovery(&self) -> f32 {
        (self.duration - self.wind_up()).max(0.0)
    }
}

/// Stages of a single attack, resumed by the frame tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrikeStage {
    /// One tick for the attack animation to take over
    Settle,
    /// Wind-up elapsed: run the hit check
    Hit,
    /// Recovery elapsed: the attack is over
    Recover,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrikeSignal {
    HitFrame,
    Completed,
}

/// Single-attack timing used by enemies.
///
/// The start time of an attack is only committed once the whole sequence
/// completes, and eligibility is measured from that start time. An attack
/// that gets cancelled never counts against the cooldown.
#[derive(Debug, Clone, PartialEq)]
pub struct EnemyStrike {
    timing: StrikeTiming,
    cooldown: f32,
    last_attack_start: Option<f32>,
    started_at: Option<f32>,
    continuation: Continuation<StrikeStage>,
}

impl EnemyStrike {
    pub fn new(timing: StrikeTiming, cooldown: f32) -> Self {
        Self {
            timing,
            cooldown: cooldown.max(0.0),
            last_attack_start: None,
            started_at: None,
            continuation: Continuation::default(),
        }
    }

    pub fn is_attacking(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn cooldown_ready(&self, now: f32) -> bool {
        !self.is_attacking()
            && self
                .last_attack_start
                .is_none_or(|start| now - start >= self.cooldown)
    }

    /// Start an attack at `now`. Returns false if one is running or the cooldown is live.
    pub fn begin(&mut self, now: f32) -> bool {
        if !self.cooldown_ready(now) {
            return false;
        }
        self.started_at = Some(now);
        self.continuation.suspend(StrikeStage::Settle, Suspend::NextTick);
        true
    }

    pub fn tick(&mut self, dt: f32) -> Option<StrikeSignal> {
        match self.continuation.tick(dt)? {
            StrikeStage::Settle => {
                self.continuation
                    .suspend(StrikeStage::Hit, Suspend::Seconds(self.timing.wind_up()));
                None
            }
            StrikeStage::Hit => {
                self.continuation.suspend(
                    StrikeStage::Recover,
                    Suspend::Seconds(self.timing.recovery()),
                );
                Some(StrikeSignal::HitFrame)
            }
            StrikeStage::Recover => {
                self.last_attack_start = self.started_at.take();
                Some(StrikeSignal::Completed)
            }
        }
    }

    /// Abandon the running attack, if any.
    pub fn cancel(&mut self) {
        self.continuation.cancel();
        self.started_at = None;
    }

    pub fn last_attack_start(&self) -> Option<f32> {
        self.last_attack_start
    }
}
