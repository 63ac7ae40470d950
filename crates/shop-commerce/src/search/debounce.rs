//! Input debouncing.
//!
//! The debouncer does not own a clock. Each input change calls
//! [`Debouncer::schedule`] and arms a host timer for [`Debouncer::delay`];
//! when the timer fires, the work runs only if its generation is still
//! the latest one.

use std::time::Duration;

/// Default quiet period before a search is issued.
pub const DEFAULT_DEBOUNCE_MS: u64 = 250;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Debouncer {
    delay_ms: u64,
    generation: u64,
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            generation: 0,
        }
    }

    /// Quiet period to wait before firing.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Register an input change; returns the generation to check on fire.
    pub fn schedule(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// True if no newer input arrived after `generation` was scheduled.
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Invalidate every pending generation.
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}
