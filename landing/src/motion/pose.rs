//! Animatable element state.

use serde::{Deserialize, Serialize};

/// Visual state of one element relative to its laid-out position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    /// Vertical offset in px, positive is down
    pub y: f64,
    pub scale: f64,
}

impl Pose {
    pub const REST: Pose = Pose {
        opacity: 1.0,
        y: 0.0,
        scale: 1.0,
    };

    /// Stack two concurrent animations on the same element.
    ///
    /// Opacity and scale multiply, offsets add, so `REST` is the identity.
    pub fn compose(self, other: Pose) -> Pose {
        Pose {
            opacity: self.opacity * other.opacity,
            y: self.y + other.y,
            scale: self.scale * other.scale,
        }
    }

    /// Component-wise interpolation; `t` is not clamped so overshooting
    /// eases carry through.
    pub fn lerp(self, to: Pose, t: f64) -> Pose {
        Pose {
            opacity: self.opacity + (to.opacity - self.opacity) * t,
            y: self.y + (to.y - self.y) * t,
            scale: self.scale + (to.scale - self.scale) * t,
        }
    }

    /// Value for the `transform` style property.
    pub fn css_transform(&self) -> String {
        format!("translateY({}px) scale({})", round(self.y), round(self.scale))
    }

    /// Value for the `opacity` style property.
    pub fn css_opacity(&self) -> String {
        format!("{}", round(self.opacity.clamp(0.0, 1.0)))
    }
}

impl Default for Pose {
    fn default() -> Self {
        Pose::REST
    }
}

// Keep style strings short and stable across frames
fn round(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}

/// Which style properties a playback writes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Channels {
    pub opacity: bool,
    /// `y` and `scale` share the `transform` property
    pub transform: bool,
}

impl Channels {
    pub const TRANSFORM: Channels = Channels {
        opacity: false,
        transform: true,
    };

    pub fn union(self, other: Channels) -> Channels {
        Channels {
            opacity: self.opacity || other.opacity,
            transform: self.transform || other.transform,
        }
    }
}

/// Sparse set of properties a tween animates. Missing fields stay at rest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoseVars {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
}

impl PoseVars {
    pub fn opacity(mut self, value: f64) -> Self {
        self.opacity = Some(value);
        self
    }

    pub fn y(mut self, value: f64) -> Self {
        self.y = Some(value);
        self
    }

    pub fn scale(mut self, value: f64) -> Self {
        self.scale = Some(value);
        self
    }

    pub fn channels(&self) -> Channels {
        Channels {
            opacity: self.opacity.is_some(),
            transform: self.y.is_some() || self.scale.is_some(),
        }
    }

    /// Rest pose with the given fields overridden.
    pub fn resolve(&self) -> Pose {
        Pose {
            opacity: self.opacity.unwrap_or(Pose::REST.opacity),
            y: self.y.unwrap_or(Pose::REST.y),
            scale: self.scale.unwrap_or(Pose::REST.scale),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rest_is_compose_identity() {
        let p = Pose {
            opacity: 0.5,
            y: 12.0,
            scale: 0.95,
        };
        assert_eq!(p.compose(Pose::REST), p);
        assert_eq!(Pose::REST.compose(p), p);
    }

    #[test]
    fn compose_stacks_offsets_and_multiplies_factors() {
        let entrance = PoseVars::default().opacity(0.5).y(40.0).resolve();
        let float = PoseVars::default().y(-8.0).resolve();
        let both = entrance.compose(float);
        assert_eq!(both.y, 32.0);
        assert_eq!(both.opacity, 0.5);
        assert_eq!(both.scale, 1.0);
    }

    #[test]
    fn lerp_midpoint() {
        let from = PoseVars::default().opacity(0.0).y(20.0).resolve();
        let mid = from.lerp(Pose::REST, 0.5);
        assert_eq!(mid.opacity, 0.5);
        assert_eq!(mid.y, 10.0);
    }

    #[test]
    fn css_values() {
        let p = Pose {
            opacity: 1.2,
            y: -8.0,
            scale: 1.01,
        };
        assert_eq!(p.css_transform(), "translateY(-8px) scale(1.01)");
        assert_eq!(p.css_opacity(), "1");
    }

    #[test]
    fn channels_follow_the_set_fields() {
        let fade = PoseVars::default().opacity(0.0);
        assert_eq!(
            fade.channels(),
            Channels {
                opacity: true,
                transform: false
            }
        );
        assert_eq!(PoseVars::default().scale(1.01).channels(), Channels::TRANSFORM);
        assert_eq!(
            fade.channels().union(Channels::TRANSFORM),
            Channels {
                opacity: true,
                transform: true
            }
        );
    }

    #[test]
    fn vars_deserialize_sparse() {
        let vars: PoseVars = serde_json::from_str(r#"{"y": 40}"#).unwrap();
        assert_eq!(vars, PoseVars::default().y(40.0));
        assert_eq!(vars.resolve().opacity, 1.0);
    }
}
