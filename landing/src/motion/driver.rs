//! The seam between choreography and whatever actually moves pixels.

use super::scheduler::AnimationId;
use super::spring::Spring;
use super::timeline::Timeline;
use super::tween::Tween;

/// An animation engine over targets of type `T`.
///
/// Methods take `&self`: drivers are shared handles (the browser driver is
/// cloned into cleanup closures) and keep their state behind interior
/// mutability.
pub trait MotionDriver<T> {
    /// Start a timeline. `from` steps render their start state immediately.
    fn play_timeline(&self, timeline: Timeline<T>) -> AnimationId;

    /// Start a standalone tween, typically a repeating one.
    fn play_tween(&self, tween: Tween<T>) -> AnimationId;

    /// Attach a spring to `target`; move it later with [`retarget`].
    ///
    /// [`retarget`]: MotionDriver::retarget
    fn play_spring(&self, target: T, spring: Spring) -> AnimationId;

    /// Move the rest point of a spring started with `play_spring`.
    fn retarget(&self, id: AnimationId, value: f64);

    /// Stop a playback where it is. Unknown ids are ignored.
    fn kill(&self, id: AnimationId);
}
