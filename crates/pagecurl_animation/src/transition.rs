//! Eased property transitions
//!
//! A `Transition` behaves like a CSS transition on a single property: it
//! rests at a value until a new target is set, then eases from wherever it
//! currently is to the target over a fixed duration. Retargeting mid-flight
//! restarts from the current interpolated value, never from the old start.

use crate::easing::Easing;
use crate::values::Interpolate;

const SETTLE_EPSILON: f32 = 1e-4;

/// A single animated property
#[derive(Clone, Debug)]
pub struct Transition<T: Interpolate> {
    from: T,
    to: T,
    /// Duration in milliseconds
    duration_ms: f32,
    /// Elapsed time in milliseconds since the last retarget
    elapsed_ms: f32,
    easing: Easing,
}

impl<T: Interpolate> Transition<T> {
    /// Create a transition at rest on `value`
    pub fn new(value: T, duration_ms: u32, easing: Easing) -> Self {
        Self {
            from: value.clone(),
            to: value,
            duration_ms: duration_ms as f32,
            elapsed_ms: duration_ms as f32,
            easing,
        }
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms as u32
    }

    /// Change the duration; an in-flight transition keeps its progress ratio
    pub fn set_duration(&mut self, duration_ms: u32) {
        let progress = self.progress();
        self.duration_ms = duration_ms as f32;
        self.elapsed_ms = progress * self.duration_ms;
    }

    /// The value the transition is heading to
    pub fn target(&self) -> &T {
        &self.to
    }

    /// Progress through the current leg (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Current interpolated value
    pub fn value(&self) -> T {
        if !self.is_animating() {
            return self.to.clone();
        }
        let eased = self.easing.apply(self.progress());
        self.from.lerp(&self.to, eased)
    }

    pub fn is_animating(&self) -> bool {
        self.progress() < 1.0
    }

    /// Start easing toward `target`
    ///
    /// Returns `false` without restarting when `target` already is the
    /// current target.
    pub fn set_target(&mut self, target: T) -> bool {
        if self.to.approx_eq(&target, SETTLE_EPSILON) {
            return false;
        }
        self.from = self.value();
        self.to = target;
        self.elapsed_ms = 0.0;
        true
    }

    /// Advance by `dt_ms` milliseconds; returns whether still animating
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        if !self.is_animating() {
            return false;
        }
        self.elapsed_ms = (self.elapsed_ms + dt_ms.max(0.0)).min(self.duration_ms);
        tracing::trace!(progress = self.progress(), "transition tick");
        self.is_animating()
    }
}
