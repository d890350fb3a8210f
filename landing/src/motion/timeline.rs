//! Timelines: tweens placed at explicit offsets on one shared clock.
//!
//! Steps may overlap; each one is sampled at `t - offset`.

use super::pose::{Channels, Pose};
use super::tween::Tween;

#[derive(Debug, Clone, PartialEq)]
pub struct Step<T> {
    /// Seconds from the timeline start
    pub offset: f64,
    pub tween: Tween<T>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Timeline<T> {
    steps: Vec<Step<T>>,
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self { steps: Vec::new() }
    }
}

impl<T> Timeline<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place `tween` at `offset` seconds. Negative offsets clamp to 0.
    pub fn push(&mut self, tween: Tween<T>, offset: f64) -> &mut Self {
        self.steps.push(Step {
            offset: offset.max(0.0),
            tween,
        });
        self
    }

    /// Builder form of [`Timeline::push`].
    pub fn with(mut self, tween: Tween<T>, offset: f64) -> Self {
        self.push(tween, offset);
        self
    }

    pub fn steps(&self) -> &[Step<T>] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// End of the last step, `None` if any step never ends.
    pub fn duration(&self) -> Option<f64> {
        self.steps.iter().try_fold(0.0_f64, |end, step| {
            step.tween
                .total_duration()
                .map(|d| end.max(step.offset + d))
        })
    }

    pub fn is_complete(&self, t: f64) -> bool {
        self.duration().is_some_and(|d| t >= d)
    }

    /// Every target of every step at timeline time `t`, in step order,
    /// with the properties that step writes.
    pub fn sample(&self, t: f64) -> impl Iterator<Item = (&T, Pose, Channels)> + '_ {
        self.steps.iter().flat_map(move |step| {
            let channels = step.tween.channels();
            step.tween
                .sample(t - step.offset)
                .map(move |(target, pose)| (target, pose, channels))
        })
    }
}
