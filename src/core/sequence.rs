//! Core domain: suspendable timed sequences advanced by the frame tick.
//!
//! A timed sequence (attack wind-up, turn delay, death-then-remove) is a small
//! state machine whose stages are tagged by `K`. After finishing a stage the
//! owner calls [`Continuation::suspend`] with the next stage and a wait
//! condition; every frame it calls [`Continuation::tick`] and runs whichever
//! stage comes back. Nothing resumes behind the owner's back, so cancelling is
//! just dropping the pending resume point.

/// How long a sequence stays suspended before its next stage runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Suspend {
    /// Resume on the very next tick, whatever its delta.
    NextTick,
    /// Resume once this many seconds of tick delta have accumulated.
    Seconds(f32),
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Pending<K> {
    stage: K,
    wait: Suspend,
    elapsed: f32,
}

/// A single suspended resume point.
#[derive(Debug, Clone, PartialEq)]
pub struct Continuation<K> {
    pending: Option<Pending<K>>,
}

impl<K> Default for Continuation<K> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<K: Copy> Continuation<K> {
    /// Park the sequence until `wait` is satisfied, then hand back `stage`.
    /// Replaces any resume point that was already pending.
    pub fn suspend(&mut self, stage: K, wait: Suspend) {
        self.pending = Some(Pending {
            stage,
            wait,
            elapsed: 0.0,
        });
    }

    /// Advance by one frame. Returns the stage to run when the wait is over.
    pub fn tick(&mut self, dt: f32) -> Option<K> {
        let pending = self.pending.as_mut()?;
        let ready = match pending.wait {
            Suspend::NextTick => true,
            Suspend::Seconds(duration) => {
                pending.elapsed += dt;
                pending.elapsed >= duration
            }
        };

        if ready {
            self.pending.take().map(|p| p.stage)
        } else {
            None
        }
    }

    /// Drop the pending resume point; it will never fire.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Stage that will run next, if any.
    pub fn pending_stage(&self) -> Option<K> {
        self.pending.map(|p| p.stage)
    }
}
