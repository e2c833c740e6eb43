//! Combat domain: hit points, damage, healing, and the death transition.

use bevy::prelude::*;

/// Snapshot of a health mutation, returned to the caller to fan out as messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthChange {
    pub current: u32,
    pub max: u32,
    /// True only for the call that took the actor to zero.
    pub died: bool,
}

/// Health component for damageable actors.
///
/// `0 <= current <= max` always holds. Once dead, the component is frozen:
/// damage and healing are ignored and return `None`.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct Health {
    current: u32,
    max: u32,
    dead: bool,
}

impl Health {
    pub fn new(max: u32) -> Self {
        let max = max.max(1);
        Self {
            current: max,
            max,
            dead: false,
        }
    }

    pub fn take_damage(&mut self, amount: u32) -> Option<HealthChange> {
        if self.dead {
            return None;
        }

        self.current = self.current.saturating_sub(amount);
        let died = self.current == 0;
        if died {
            self.dead = true;
        }

        Some(HealthChange {
            current: self.current,
            max: self.max,
            died,
        })
    }

    pub fn heal(&mut self, amount: u32) -> Option<HealthChange> {
        if self.dead {
            return None;
        }

        self.current = self.current.saturating_add(amount).min(self.max);
        Some(self.snapshot())
    }

    /// Current values as a change record, used to announce freshly spawned actors.
    pub fn snapshot(&self) -> HealthChange {
        HealthChange {
            current: self.current,
            max: self.max,
            died: false,
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }
}
