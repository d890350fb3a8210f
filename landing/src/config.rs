//! Hero configuration.
//!
//! Defaults reproduce the shipped page. A host page may override any subset
//! of fields with a JSON island:
//!
//! ```html
//! <script type="application/json" id="hero-config">
//!   { "motion": { "float": { "duration": 3 } }, "log_level": "debug" }
//! </script>
//! ```
//!
//! Overrides are deep-merged onto the defaults, so a partial `float` object
//! keeps the default `vars`, `ease` and `yoyo`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::Level;

use crate::error::{HeroError, Result};
use crate::motion::{Ease, PoseVars, Repeat, SpringConfig, TweenSpec};

/// Id of the optional `<script type="application/json">` override.
pub const CONFIG_ELEMENT_ID: &str = "hero-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub image_src: String,
    pub image_alt: String,
    /// Target of "See my work"
    pub projects_id: String,
    /// Target of "Contact me"
    pub contact_id: String,
    /// Fixed header whose height is subtracted when scrolling
    pub header_selector: String,
    pub log_level: String,
    pub motion: MotionConfig,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            image_src: "/images/chris-memoji-heart.svg".into(),
            image_alt: "Chris Abra Memoji".into(),
            projects_id: "projects".into(),
            contact_id: "contact".into(),
            header_selector: "header".into(),
            log_level: "info".into(),
            motion: MotionConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub entrance: EntranceConfig,
    /// Character image bob
    pub float: TweenSpec,
    /// Background wall breathing
    pub breathe: TweenSpec,
    pub hover: HoverConfig,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            entrance: EntranceConfig::default(),
            float: TweenSpec {
                vars: PoseVars::default().y(-8.0),
                duration: 2.0,
                stagger: 0.0,
                ease: Ease::SineInOut,
                repeat: Repeat::Infinite,
                yoyo: true,
            },
            breathe: TweenSpec {
                vars: PoseVars::default().scale(1.01),
                duration: 6.0,
                stagger: 0.0,
                ease: Ease::SineInOut,
                repeat: Repeat::Infinite,
                yoyo: true,
            },
            hover: HoverConfig::default(),
        }
    }
}

/// One step of the entrance timeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntranceStep {
    /// Offset inside the timeline, seconds
    pub at: f64,
    pub tween: TweenSpec,
}

impl Default for EntranceStep {
    fn default() -> Self {
        Self {
            at: 0.0,
            tween: TweenSpec::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntranceConfig {
    pub roles: EntranceStep,
    pub image: EntranceStep,
    pub headlines: EntranceStep,
}

impl Default for EntranceConfig {
    fn default() -> Self {
        Self {
            roles: EntranceStep {
                at: 0.0,
                tween: TweenSpec {
                    vars: PoseVars::default().opacity(0.0),
                    duration: 0.8,
                    stagger: 0.02,
                    ease: Ease::Power2Out,
                    ..TweenSpec::default()
                },
            },
            image: EntranceStep {
                at: 0.2,
                tween: TweenSpec {
                    vars: PoseVars::default().opacity(0.0).y(40.0).scale(0.95),
                    duration: 1.2,
                    ease: Ease::BackOut { overshoot: 1.2 },
                    ..TweenSpec::default()
                },
            },
            headlines: EntranceStep {
                at: 0.4,
                tween: TweenSpec {
                    vars: PoseVars::default().opacity(0.0).y(20.0),
                    duration: 0.6,
                    stagger: 0.1,
                    ease: Ease::Power2Out,
                    ..TweenSpec::default()
                },
            },
        }
    }
}

/// Spring scale applied to the image wrapper while hovered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoverConfig {
    pub scale: f64,
    pub spring: SpringConfig,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            scale: 1.03,
            spring: SpringConfig::default(),
        }
    }
}

impl HeroConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let overrides: Value = serde_json::from_str(json)?;
        let mut merged = serde_json::to_value(Self::default())?;
        merge(&mut merged, overrides);
        let config: Self = serde_json::from_value(merged)?;
        config.validate()?;
        Ok(config)
    }

    /// Read the JSON island from the current document, if there is one.
    pub fn from_page() -> Option<Result<Self>> {
        let text = web_sys::window()?
            .document()?
            .get_element_by_id(CONFIG_ELEMENT_ID)?
            .text_content()?;
        Some(Self::from_json(&text))
    }

    pub fn level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }

    pub fn validate(&self) -> Result<()> {
        self.log_level
            .parse::<Level>()
            .map_err(|_| HeroError::UnknownLogLevel(self.log_level.clone()))?;

        let m = &self.motion;
        check_step("motion.entrance.roles", &m.entrance.roles)?;
        check_step("motion.entrance.image", &m.entrance.image)?;
        check_step("motion.entrance.headlines", &m.entrance.headlines)?;
        check_tween("motion.float", &m.float)?;
        check_tween("motion.breathe", &m.breathe)?;

        positive("motion.hover.scale", m.hover.scale)?;
        positive("motion.hover.spring.stiffness", m.hover.spring.stiffness)?;
        positive("motion.hover.spring.mass", m.hover.spring.mass)?;
        // Undamped springs never settle and would keep the frame loop alive
        positive("motion.hover.spring.damping", m.hover.spring.damping)?;
        Ok(())
    }
}

fn check_step(field: &str, step: &EntranceStep) -> Result<()> {
    non_negative(&format!("{field}.at"), step.at)?;
    check_tween(&format!("{field}.tween"), &step.tween)
}

fn check_tween(field: &str, tween: &TweenSpec) -> Result<()> {
    positive(&format!("{field}.duration"), tween.duration)?;
    non_negative(&format!("{field}.stagger"), tween.stagger)
}

fn positive(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(HeroError::NonPositiveDuration {
            field: field.to_string(),
            value,
        })
    }
}

fn non_negative(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(HeroError::NegativeTime {
            field: field.to_string(),
            value,
        })
    }
}

/// Recursive object merge; non-object values in `patch` replace `base`.
fn merge(base: &mut Value, patch: Value) {
    match (base, patch) {
        (Value::Object(base), Value::Object(patch)) => {
            for (key, value) in patch {
                match base.get_mut(&key) {
                    Some(slot) => merge(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}
