//! Motion layer: easing, tweens, timelines and springs, plus the drivers
//! that play them.
//!
//! Everything except [`frame`] is plain data and arithmetic over a generic
//! target type, so choreography can be checked without a browser.

pub mod driver;
pub mod ease;
pub mod frame;
pub mod pose;
pub mod scheduler;
pub mod spring;
pub mod timeline;
pub mod tween;

pub use driver::MotionDriver;
pub use ease::Ease;
pub use frame::FrameDriver;
pub use pose::{Channels, Pose, PoseVars};
pub use scheduler::{AnimationId, Scheduler, Touch};
pub use spring::{Spring, SpringConfig};
pub use timeline::{Step, Timeline};
pub use tween::{Direction, Repeat, Tween, TweenSpec};
