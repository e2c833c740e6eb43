//! Combat domain: the player's combo queue and its execution sequence.

use std::collections::VecDeque;

use bevy::prelude::*;

use crate::combat::strike::StrikeTiming;
use crate::core::{Continuation, Suspend};

/// Ordered queue of pending combo steps with a wrapping cycle pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct ComboQueue {
    cycle_len: usize,
    reset_after: f32,
    next_step: usize,
    last_enqueue: Option<f32>,
    queued: VecDeque<usize>,
}

impl ComboQueue {
    pub fn new(cycle_len: usize, reset_after: f32) -> Self {
        Self {
            cycle_len: cycle_len.max(1),
            reset_after,
            next_step: 0,
            last_enqueue: None,
            queued: VecDeque::new(),
        }
    }

    /// Queue the next step of the cycle at time `now`.
    ///
    /// A gap longer than the reset threshold restarts the cycle at step 0.
    /// Returns the queued step, or `None` when the queue is already full.
    pub fn enqueue(&mut self, now: f32) -> Option<usize> {
        if self
            .last_enqueue
            .is_some_and(|last| now - last > self.reset_after)
        {
            self.next_step = 0;
        }
        self.last_enqueue = Some(now);

        if self.queued.len() >= self.cycle_len {
            return None;
        }

        let step = self.next_step;
        self.queued.push_back(step);
        self.next_step = (self.next_step + 1) % self.cycle_len;
        Some(step)
    }

    pub fn pop(&mut self) -> Option<usize> {
        self.queued.pop_front()
    }

    /// Empty the queue and restart the cycle.
    pub fn clear(&mut self) {
        self.queued.clear();
        self.next_step = 0;
    }

    pub fn next_step(&self) -> usize {
        self.next_step
    }

    pub fn len(&self) -> usize {
        self.queued.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queued.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComboStage {
    /// Animation had a tick to take over; wait for the hit frame
    Settle(usize),
    /// Hit frame of the step
    Strike(usize),
    /// Step finished; move on to the next queued one
    Finish(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComboSignal {
    StepStarted(usize),
    HitFrame(usize),
    Finished,
}

/// Player combo: queue plus the sequence executing it.
#[derive(Component, Debug, Clone)]
pub struct PlayerCombo {
    queue: ComboQueue,
    timing: StrikeTiming,
    step_names: Vec<String>,
    continuation: Continuation<ComboStage>,
    current_step: Option<usize>,
}

impl PlayerCombo {
    pub fn new(step_names: Vec<String>, reset_after: f32, timing: StrikeTiming) -> Self {
        let step_names = if step_names.is_empty() {
            vec!["Attack1".to_string()]
        } else {
            step_names
        };
        Self {
            queue: ComboQueue::new(step_names.len(), reset_after),
            timing,
            step_names,
            continuation: Continuation::default(),
            current_step: None,
        }
    }

    /// True while a queued step is executing.
    pub fn is_attacking(&self) -> bool {
        self.current_step.is_some()
    }

    pub fn current_step(&self) -> Option<usize> {
        self.current_step
    }

    pub fn step_name(&self, step: usize) -> &str {
        self.step_names
            .get(step)
            .map(String::as_str)
            .unwrap_or("Attack")
    }

    pub fn queue(&self) -> &ComboQueue {
        &self.queue
    }

    /// Attack input at time `now`. Starts execution if nothing is running.
    pub fn request_attack(&mut self, now: f32) -> Option<ComboSignal> {
        self.queue.enqueue(now)?;
        if self.is_attacking() || self.continuation.is_pending() {
            return None;
        }
        self.start_next()
    }

    pub fn tick(&mut self, dt: f32) -> Option<ComboSignal> {
        match self.continuation.tick(dt)? {
            ComboStage::Settle(step) => {
                self.continuation
                    .suspend(ComboStage::Strike(step), Suspend::Seconds(self.timing.wind_up()));
                None
            }
            ComboStage::Strike(step) => {
                self.continuation.suspend(
                    ComboStage::Finish(step),
                    Suspend::Seconds(self.timing.recovery()),
                );
                Some(ComboSignal::HitFrame(step))
            }
            ComboStage::Finish(_) => self.start_next(),
        }
    }

    /// Cancel the running sequence and drop everything queued.
    pub fn abort(&mut self) {
        self.continuation.cancel();
        self.queue.clear();
        self.current_step = None;
    }

    fn start_next(&mut self) -> Option<ComboSignal> {
        match self.queue.pop() {
            Some(step) => {
                self.current_step = Some(step);
                self.continuation
                    .suspend(ComboStage::Settle(step), Suspend::NextTick);
                Some(ComboSignal::StepStarted(step))
            }
            None => {
                self.current_step = None;
                self.queue.clear();
                Some(ComboSignal::Finished)
            }
        }
    }
}
