//! Damped spring used for hover feedback.

use serde::{Deserialize, Serialize};

use super::pose::Pose;

/// Fixed integration step (seconds)
const SUBSTEP: f64 = 1.0 / 240.0;
/// Longest frame gap we integrate; longer gaps (background tabs) are cut
const MAX_FRAME: f64 = 0.1;
const REST_EPSILON: f64 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 300.0,
            damping: 10.0,
            mass: 1.0,
        }
    }
}

/// A one-dimensional spring animating an element's scale.
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    /// Spring at rest on `value`.
    pub fn new(config: SpringConfig, value: f64) -> Self {
        Self {
            config,
            value,
            velocity: 0.0,
            target: value,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < REST_EPSILON && self.velocity.abs() < REST_EPSILON
    }

    /// Advance by `dt` seconds.
    pub fn step(&mut self, dt: f64) {
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            return;
        }

        let mass = self.config.mass.max(f64::EPSILON);
        let mut remaining = dt.clamp(0.0, MAX_FRAME);
        while remaining > 0.0 {
            let h = remaining.min(SUBSTEP);
            let force = -self.config.stiffness * (self.value - self.target)
                - self.config.damping * self.velocity;
            self.velocity += force / mass * h;
            self.value += self.velocity * h;
            remaining -= h;
        }

        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }

    pub fn pose(&self) -> Pose {
        Pose {
            scale: self.value,
            ..Pose::REST
        }
    }
}
