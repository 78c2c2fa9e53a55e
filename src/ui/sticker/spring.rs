// SPDX-License-Identifier: MPL-2.0
//! Duration-free spring easing for a single scalar.
//!
//! The spring is a damped harmonic oscillator pulled toward its target. It has
//! no fixed duration: it settles asymptotically and is considered at rest once
//! both its displacement and its speed fall under small thresholds, at which
//! point it snaps exactly onto the target.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Displacement (in pixels) under which the spring may come to rest.
pub const REST_DISPLACEMENT: f32 = 0.01;

/// Speed (in pixels per second) under which the spring may come to rest.
pub const REST_SPEED: f32 = 2.0;

/// Integration step used to subdivide long frames.
const INTEGRATION_STEP: f32 = 1.0 / 240.0;

/// Longest frame we integrate at once. Anything longer (window hidden,
/// debugger pause) is treated as this long so the spring never jumps.
const MAX_FRAME: Duration = Duration::from_millis(64);

/// Physical constants of the spring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: crate::app::config::DEFAULT_SPRING_STIFFNESS,
            damping: crate::app::config::DEFAULT_SPRING_DAMPING,
            mass: crate::app::config::DEFAULT_SPRING_MASS,
        }
    }
}

impl SpringConfig {
    /// Longest sub-step the integrator stays stable with: half of both the
    /// oscillation period scale `sqrt(m / k)` and the damping time `m / c`.
    fn max_step(&self) -> f32 {
        let oscillation = (self.mass / self.stiffness).sqrt();
        let damping = self.mass / self.damping;
        (0.5 * oscillation.min(damping)).min(INTEGRATION_STEP)
    }
}

/// A scalar eased toward a target with spring dynamics.
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    /// Creates a spring at rest on `value`.
    #[must_use]
    pub fn new(value: f32, config: SpringConfig) -> Self {
        Self {
            config,
            value,
            velocity: 0.0,
            target: value,
        }
    }

    /// Current (animated) value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Value the spring is heading to.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Current speed in units per second.
    #[must_use]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Retargets the spring, keeping its current value and velocity so a
    /// change of direction mid-flight stays continuous.
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < REST_DISPLACEMENT && self.velocity.abs() < REST_SPEED
    }

    /// Drops any motion in flight and lands on the target.
    pub fn snap_to_target(&mut self) {
        self.value = self.target;
        self.velocity = 0.0;
    }

    /// Freezes the spring where it is.
    pub fn halt(&mut self) {
        self.target = self.value;
        self.velocity = 0.0;
    }

    /// Advances the simulation by `elapsed`.
    pub fn step(&mut self, elapsed: Duration) {
        if self.is_settled() {
            self.snap_to_target();
            return;
        }

        let mut remaining = elapsed.min(MAX_FRAME).as_secs_f32();
        let max_step = self.config.max_step();
        // Semi-implicit Euler, sub-stepped for stability with stiff springs.
        while remaining > 0.0 {
            let h = remaining.min(max_step);
            let displacement = self.value - self.target;
            let force = -self.config.stiffness * displacement - self.config.damping * self.velocity;
            self.velocity += force / self.config.mass * h;
            self.value += self.velocity * h;
            remaining -= h;
        }

        if self.is_settled() {
            self.snap_to_target();
        }
    }
}
