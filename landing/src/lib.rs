//! Portfolio landing page: an animated hero section rendered with Leptos.
//!
//! The hero's motion is described as data in [`motion`] and played by a
//! [`motion::MotionDriver`]; in the browser that is the
//! requestAnimationFrame-backed [`motion::FrameDriver`].

pub mod config;
pub mod error;
pub mod logging;
pub mod motion;
pub mod nav;
pub mod roles;
pub mod sections;

pub use config::HeroConfig;
pub use error::{HeroError, Result};
