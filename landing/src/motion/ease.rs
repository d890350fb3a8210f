//! Easing curves.
//!
//! Names follow the GSAP vocabulary (`power2.out`, `back.out(1.2)`,
//! `sine.inOut`) so config files read the same as the motion they describe.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HeroError;

/// Default overshoot for `back` curves when none is given.
pub const DEFAULT_OVERSHOOT: f64 = 1.70158;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Ease {
    Linear,
    /// Cubic deceleration
    #[default]
    Power2Out,
    /// Decelerates past the end value then settles back
    BackOut { overshoot: f64 },
    SineInOut,
}

impl Ease {
    /// Map linear progress `t` in `[0, 1]` to eased progress.
    ///
    /// `t` is clamped; `BackOut` may return values above 1 in between.
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Ease::Linear => t,
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::BackOut { overshoot } => {
                let p = t - 1.0;
                p * p * ((overshoot + 1.0) * p + overshoot) + 1.0
            }
            Ease::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
        }
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ease::Linear => write!(f, "linear"),
            Ease::Power2Out => write!(f, "power2.out"),
            Ease::BackOut { overshoot } => write!(f, "back.out({overshoot})"),
            Ease::SineInOut => write!(f, "sine.inOut"),
        }
    }
}

impl FromStr for Ease {
    type Err = HeroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        match name {
            "linear" | "none" => return Ok(Ease::Linear),
            "power2.out" => return Ok(Ease::Power2Out),
            "sine.inOut" => return Ok(Ease::SineInOut),
            "back.out" => {
                return Ok(Ease::BackOut {
                    overshoot: DEFAULT_OVERSHOOT,
                });
            }
            _ => {}
        }

        let overshoot = name
            .strip_prefix("back.out(")
            .and_then(|rest| rest.strip_suffix(')'))
            .and_then(|arg| arg.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .ok_or_else(|| HeroError::UnknownEase(name.to_string()))?;
        Ok(Ease::BackOut { overshoot })
    }
}

impl TryFrom<String> for Ease {
    type Error = HeroError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Ease> for String {
    fn from(ease: Ease) -> Self {
        ease.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn all() -> [Ease; 4] {
        [
            Ease::Linear,
            Ease::Power2Out,
            Ease::BackOut { overshoot: 1.2 },
            Ease::SineInOut,
        ]
    }

    #[test]
    fn endpoints_are_fixed() {
        for ease in all() {
            assert!(ease.apply(0.0).abs() < EPS, "{ease} at 0");
            assert!((ease.apply(1.0) - 1.0).abs() < EPS, "{ease} at 1");
        }
    }

    #[test]
    fn input_is_clamped() {
        for ease in all() {
            assert_eq!(ease.apply(-3.0), ease.apply(0.0));
            assert_eq!(ease.apply(7.0), ease.apply(1.0));
        }
    }

    #[test]
    fn power2_out_decelerates() {
        let ease = Ease::Power2Out;
        assert!(ease.apply(0.25) > 0.25);
        assert!((ease.apply(0.5) - 0.875).abs() < EPS);
    }

    #[test]
    fn back_out_overshoots_only_with_back() {
        let back = Ease::BackOut { overshoot: 1.2 };
        let peak = (1..100)
            .map(|i| back.apply(i as f64 / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0, "peak {peak}");

        for ease in [Ease::Linear, Ease::Power2Out, Ease::SineInOut] {
            assert!((1..100).all(|i| ease.apply(i as f64 / 100.0) <= 1.0));
        }
    }

    #[test]
    fn sine_in_out_is_symmetric() {
        let ease = Ease::SineInOut;
        assert!((ease.apply(0.5) - 0.5).abs() < EPS);
        assert!((ease.apply(0.2) + ease.apply(0.8) - 1.0).abs() < EPS);
    }

    #[test]
    fn parses_gsap_names() {
        assert_eq!("power2.out".parse::<Ease>().unwrap(), Ease::Power2Out);
        assert_eq!("sine.inOut".parse::<Ease>().unwrap(), Ease::SineInOut);
        assert_eq!("none".parse::<Ease>().unwrap(), Ease::Linear);
        assert_eq!(
            "back.out(1.2)".parse::<Ease>().unwrap(),
            Ease::BackOut { overshoot: 1.2 }
        );
        assert_eq!(
            "back.out".parse::<Ease>().unwrap(),
            Ease::BackOut {
                overshoot: DEFAULT_OVERSHOOT
            }
        );
    }

    #[test]
    fn rejects_unknown_names() {
        for bad in ["elastic.out", "back.out(", "back.out(abc)", ""] {
            let err = bad.parse::<Ease>().unwrap_err();
            assert!(matches!(err, HeroError::UnknownEase(_)), "{bad}");
        }
    }

    #[test]
    fn display_parses_back() {
        for ease in all() {
            assert_eq!(ease.to_string().parse::<Ease>().unwrap(), ease);
        }
    }
}
