//! Physical button sampling.
//!
//! Unlike the console side this is slow path: the pad is polled from
//! the 10ms tick and debounced as a whole set, so a finger rolling
//! across the d-pad settles before the status word changes.

use esp_hal::time::{Duration, Instant};

use snes_proto::ButtonSet;

use crate::board::PadHw;

const DEBOUNCE_MS: u64 = 30;

pub struct PadSampler {
    hw: PadHw,
    stable: ButtonSet,
    candidate: ButtonSet,
    candidate_since: Instant,
}

impl PadSampler {
    pub fn new(hw: PadHw) -> Self {
        Self {
            hw,
            stable: ButtonSet::empty(),
            candidate: ButtonSet::empty(),
            candidate_since: Instant::now(),
        }
    }

    /// Current debounced state.
    pub fn state(&self) -> ButtonSet {
        self.stable
    }

    /// Poll once; returns the new state when a settled change is seen.
    pub fn poll(&mut self) -> Option<ButtonSet> {
        let raw = self.hw.read();
        let now = Instant::now();

        if raw != self.candidate {
            self.candidate = raw;
            self.candidate_since = now;
        }

        if self.candidate != self.stable
            && now - self.candidate_since >= Duration::from_millis(DEBOUNCE_MS)
        {
            self.stable = self.candidate;
            return Some(self.stable);
        }

        None
    }
}
