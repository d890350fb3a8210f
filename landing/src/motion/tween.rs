//! Single tweens: one set of properties moved over time across one or more
//! targets, with optional stagger, repeat and yoyo.

use serde::{Deserialize, Serialize};

use super::ease::Ease;
use super::pose::{Channels, Pose, PoseVars};

/// Whether `vars` describe where the tween starts or where it ends.
///
/// `From` tweens end at rest and hold their start state until they begin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    From,
    To,
}

/// How many times a tween plays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Repeat {
    #[default]
    Once,
    /// Plays once plus `n` repeats
    Times(u32),
    Infinite,
}

impl Repeat {
    /// Number of cycles, `None` when unbounded.
    pub fn cycles(&self) -> Option<u32> {
        match *self {
            Repeat::Once => Some(1),
            Repeat::Times(n) => Some(n.saturating_add(1)),
            Repeat::Infinite => None,
        }
    }
}

/// Timing and property description of a tween, without its targets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TweenSpec {
    pub vars: PoseVars,
    /// Seconds per cycle
    pub duration: f64,
    /// Seconds between consecutive targets starting
    pub stagger: f64,
    pub ease: Ease,
    pub repeat: Repeat,
    pub yoyo: bool,
}

impl Default for TweenSpec {
    fn default() -> Self {
        Self {
            vars: PoseVars::default(),
            duration: 0.5,
            stagger: 0.0,
            ease: Ease::default(),
            repeat: Repeat::Once,
            yoyo: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tween<T> {
    targets: Vec<T>,
    direction: Direction,
    spec: TweenSpec,
}

impl<T> Tween<T> {
    pub fn new(targets: Vec<T>, direction: Direction, spec: TweenSpec) -> Self {
        Self {
            targets,
            direction,
            spec,
        }
    }

    /// Animate from `spec.vars` to rest.
    pub fn from_state(targets: Vec<T>, spec: TweenSpec) -> Self {
        Self::new(targets, Direction::From, spec)
    }

    /// Animate from rest to `spec.vars`.
    pub fn to_state(targets: Vec<T>, spec: TweenSpec) -> Self {
        Self::new(targets, Direction::To, spec)
    }

    pub fn targets(&self) -> &[T] {
        &self.targets
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn spec(&self) -> &TweenSpec {
        &self.spec
    }

    pub fn channels(&self) -> Channels {
        self.spec.vars.channels()
    }

    /// Active time of a single target, `None` when it never ends.
    pub fn target_span(&self) -> Option<f64> {
        self.spec
            .repeat
            .cycles()
            .map(|cycles| self.spec.duration.max(0.0) * cycles as f64)
    }

    /// Time until the last target stops, `None` when infinite.
    pub fn total_duration(&self) -> Option<f64> {
        let span = self.target_span()?;
        let lag = self.spec.stagger.max(0.0) * self.targets.len().saturating_sub(1) as f64;
        Some(span + lag)
    }

    pub fn is_complete(&self, t: f64) -> bool {
        self.total_duration().is_some_and(|total| t >= total)
    }

    /// Linear progress of target `index` at tween-local time `t`, before easing.
    fn progress(&self, index: usize, t: f64) -> f64 {
        let local = t - self.spec.stagger.max(0.0) * index as f64;
        if local <= 0.0 {
            return 0.0;
        }
        let duration = self.spec.duration;
        if duration <= 0.0 {
            return 1.0;
        }

        let cycle = (local / duration).floor();
        let finished = self
            .spec
            .repeat
            .cycles()
            .filter(|&cycles| cycle >= cycles as f64);

        let (cycle, within) = match finished {
            // Hold the end of the last cycle
            Some(cycles) => ((cycles - 1) as f64, 1.0),
            None => (cycle, (local - cycle * duration) / duration),
        };

        if self.spec.yoyo && cycle as u64 % 2 == 1 {
            1.0 - within
        } else {
            within
        }
    }

    /// Pose of target `index` at tween-local time `t` (seconds).
    pub fn sample_target(&self, index: usize, t: f64) -> Pose {
        let eased = self.spec.ease.apply(self.progress(index, t));
        let vars = self.spec.vars.resolve();
        match self.direction {
            Direction::From => vars.lerp(Pose::REST, eased),
            Direction::To => Pose::REST.lerp(vars, eased),
        }
    }

    /// Poses of every target at tween-local time `t`.
    pub fn sample(&self, t: f64) -> impl Iterator<Item = (&T, Pose)> + '_ {
        self.targets
            .iter()
            .enumerate()
            .map(move |(i, target)| (target, self.sample_target(i, t)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn linear(vars: PoseVars, duration: f64) -> TweenSpec {
        TweenSpec {
            vars,
            duration,
            ease: Ease::Linear,
            ..TweenSpec::default()
        }
    }

    #[test]
    fn from_tween_holds_start_state_before_it_begins() {
        let tween = Tween::from_state(vec!["a"], linear(PoseVars::default().opacity(0.0), 1.0));
        assert_eq!(tween.sample_target(0, -0.5).opacity, 0.0);
        assert_eq!(tween.sample_target(0, 0.0).opacity, 0.0);
        assert!((tween.sample_target(0, 0.25).opacity - 0.25).abs() < EPS);
        assert_eq!(tween.sample_target(0, 1.0), Pose::REST);
        assert_eq!(tween.sample_target(0, 9.0), Pose::REST);
    }

    #[test]
    fn to_tween_starts_at_rest() {
        let tween = Tween::to_state(vec!["a"], linear(PoseVars::default().y(-8.0), 2.0));
        assert_eq!(tween.sample_target(0, -1.0), Pose::REST);
        assert!((tween.sample_target(0, 1.0).y + 4.0).abs() < EPS);
        assert!((tween.sample_target(0, 2.0).y + 8.0).abs() < EPS);
    }

    #[test]
    fn stagger_offsets_each_target() {
        let spec = TweenSpec {
            stagger: 0.1,
            ..linear(PoseVars::default().opacity(0.0), 0.6)
        };
        let tween = Tween::from_state(vec![0, 1, 2, 3], spec);

        assert!((tween.total_duration().unwrap() - 0.9).abs() < EPS);

        let at = 0.2;
        let opacities: Vec<f64> = tween.sample(at).map(|(_, p)| p.opacity).collect();
        assert!((opacities[0] - 0.2 / 0.6).abs() < EPS);
        assert!((opacities[1] - 0.1 / 0.6).abs() < EPS);
        assert_eq!(opacities[2], 0.0);
        assert_eq!(opacities[3], 0.0);
    }

    #[test]
    fn yoyo_reverses_on_odd_cycles() {
        let spec = TweenSpec {
            repeat: Repeat::Infinite,
            yoyo: true,
            ..linear(PoseVars::default().scale(1.01), 6.0)
        };
        let tween = Tween::to_state(vec!["layer"], spec);

        assert_eq!(tween.total_duration(), None);
        assert!(!tween.is_complete(1e9));

        let up = tween.sample_target(0, 3.0).scale;
        let down = tween.sample_target(0, 9.0).scale;
        assert!((up - 1.005).abs() < EPS);
        assert!((down - 1.005).abs() < EPS);
        assert!((tween.sample_target(0, 6.0).scale - 1.01).abs() < EPS);
        assert!((tween.sample_target(0, 12.0).scale - 1.0).abs() < EPS);
        // Later in the reverse half means closer to rest
        assert!(tween.sample_target(0, 10.0).scale < down);
    }

    #[test]
    fn finite_repeat_holds_final_cycle() {
        let spec = TweenSpec {
            repeat: Repeat::Times(1),
            yoyo: true,
            ..linear(PoseVars::default().y(10.0), 1.0)
        };
        let tween = Tween::to_state(vec!["a"], spec);
        assert_eq!(tween.total_duration(), Some(2.0));
        assert!(tween.is_complete(2.0));
        // Two cycles with yoyo end back at rest
        assert_eq!(tween.sample_target(0, 5.0).y, 0.0);

        let no_yoyo = Tween::to_state(
            vec!["a"],
            TweenSpec {
                repeat: Repeat::Times(2),
                ..linear(PoseVars::default().y(10.0), 1.0)
            },
        );
        assert_eq!(no_yoyo.sample_target(0, 5.0).y, 10.0);
    }

    #[test]
    fn zero_duration_jumps_to_end() {
        let tween = Tween::from_state(vec!["a"], linear(PoseVars::default().opacity(0.0), 0.0));
        assert_eq!(tween.sample_target(0, 0.001), Pose::REST);
        assert_eq!(tween.total_duration(), Some(0.0));
    }

    #[test]
    fn repeat_serde_shape() {
        assert_eq!(serde_json::to_string(&Repeat::Infinite).unwrap(), r#""infinite""#);
        let parsed: Repeat = serde_json::from_str(r#"{"times":3}"#).unwrap();
        assert_eq!(parsed, Repeat::Times(3));
        assert_eq!(parsed.cycles(), Some(4));
    }
}
