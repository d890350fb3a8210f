//! Playback bookkeeping shared by every driver.
//!
//! The scheduler owns running timelines, tweens and springs, stamps their
//! start on the first tick after they are added, and turns a frame timestamp
//! into one composed [`Pose`] per target. It knows nothing about the DOM.

use super::pose::{Channels, Pose};
use super::spring::Spring;
use super::timeline::Timeline;
use super::tween::Tween;

/// Handle to a playback inside a driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationId(u64);

impl AnimationId {
    /// For drivers that keep their own bookkeeping.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

#[derive(Debug)]
enum Playback<T> {
    Timeline(Timeline<T>),
    Tween(Tween<T>),
    Spring {
        target: T,
        spring: Spring,
        last_ms: Option<f64>,
    },
}

#[derive(Debug)]
struct Entry<T> {
    id: AnimationId,
    started_ms: Option<f64>,
    playback: Playback<T>,
}

impl<T> Entry<T> {
    fn needs_frames(&self) -> bool {
        match &self.playback {
            Playback::Spring { spring, .. } => !spring.is_settled(),
            _ => true,
        }
    }
}

/// What one frame does to one target.
#[derive(Debug, Clone, PartialEq)]
pub struct Touch<T> {
    pub target: T,
    pub pose: Pose,
    /// Properties at least one playback animates; the rest are left alone
    pub channels: Channels,
}

/// Per-frame accumulator: one [`Touch`] per distinct target.
#[derive(Debug)]
pub struct Mixer<T> {
    touches: Vec<Touch<T>>,
}

impl<T> Default for Mixer<T> {
    fn default() -> Self {
        Self {
            touches: Vec::new(),
        }
    }
}

impl<T: PartialEq> Mixer<T> {
    pub fn push(&mut self, target: T, pose: Pose, channels: Channels) {
        match self.touches.iter_mut().find(|t| t.target == target) {
            Some(touch) => {
                touch.pose = touch.pose.compose(pose);
                touch.channels = touch.channels.union(channels);
            }
            None => self.touches.push(Touch {
                target,
                pose,
                channels,
            }),
        }
    }

    pub fn into_touches(self) -> Vec<Touch<T>> {
        self.touches
    }
}

#[derive(Debug)]
pub struct Scheduler<T> {
    next_id: u64,
    entries: Vec<Entry<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            entries: Vec::new(),
        }
    }
}

impl<T: Clone + PartialEq> Scheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, playback: Playback<T>) -> AnimationId {
        let id = AnimationId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            started_ms: None,
            playback,
        });
        id
    }

    pub fn add_timeline(&mut self, timeline: Timeline<T>) -> AnimationId {
        self.insert(Playback::Timeline(timeline))
    }

    pub fn add_tween(&mut self, tween: Tween<T>) -> AnimationId {
        self.insert(Playback::Tween(tween))
    }

    pub fn add_spring(&mut self, target: T, spring: Spring) -> AnimationId {
        self.insert(Playback::Spring {
            target,
            spring,
            last_ms: None,
        })
    }

    /// Move a spring's target. Returns `false` for unknown or non-spring ids.
    pub fn retarget(&mut self, id: AnimationId, value: f64) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) else {
            return false;
        };
        match &mut entry.playback {
            Playback::Spring {
                spring, last_ms, ..
            } => {
                spring.set_target(value);
                // Idle gap must not count as integration time
                *last_ms = None;
                true
            }
            _ => false,
        }
    }

    /// Drop a playback without rendering it again. Returns `false` if the
    /// id was unknown or already finished.
    pub fn kill(&mut self, id: AnimationId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    pub fn contains(&self, id: AnimationId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Nothing would change if we skipped the next frame.
    pub fn is_idle(&self) -> bool {
        !self.entries.iter().any(Entry::needs_frames)
    }

    /// Advance every playback to `now_ms` and return the composed pose of
    /// each touched target. One-shot playbacks that reached their end are
    /// rendered one last time and then retired.
    pub fn tick(&mut self, now_ms: f64) -> Vec<Touch<T>> {
        let mut mixer = Mixer::default();
        let mut finished = Vec::new();

        for entry in &mut self.entries {
            let started = *entry.started_ms.get_or_insert(now_ms);
            let t = (now_ms - started).max(0.0) / 1000.0;

            match &mut entry.playback {
                Playback::Timeline(timeline) => {
                    for (target, pose, channels) in timeline.sample(t) {
                        mixer.push(target.clone(), pose, channels);
                    }
                    if timeline.is_complete(t) {
                        finished.push(entry.id);
                    }
                }
                Playback::Tween(tween) => {
                    let channels = tween.channels();
                    for (target, pose) in tween.sample(t) {
                        mixer.push(target.clone(), pose, channels);
                    }
                    if tween.is_complete(t) {
                        finished.push(entry.id);
                    }
                }
                Playback::Spring {
                    target,
                    spring,
                    last_ms,
                } => {
                    let dt = last_ms.map_or(0.0, |last| (now_ms - last).max(0.0) / 1000.0);
                    *last_ms = Some(now_ms);
                    spring.step(dt);
                    mixer.push(target.clone(), spring.pose(), Channels::TRANSFORM);
                }
            }
        }

        if !finished.is_empty() {
            self.entries.retain(|e| !finished.contains(&e.id));
            tracing::trace!(count = finished.len(), "retired finished playbacks");
        }

        mixer.into_touches()
    }
}
