//! Browser driver: a [`Scheduler`] ticked from `requestAnimationFrame`,
//! writing inline `opacity` / `transform` styles.
//!
//! The frame loop only runs while something is animating. A driver renders
//! once synchronously whenever a playback is added, so `from` states are in
//! place before the next paint.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::{trace, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use super::driver::MotionDriver;
use super::scheduler::{AnimationId, Scheduler, Touch};
use super::spring::Spring;
use super::timeline::Timeline;
use super::tween::Tween;
use crate::error::Result;

type FrameCallback = Closure<dyn FnMut(f64)>;

/// Shared handle; clones drive the same scheduler.
#[derive(Clone)]
pub struct FrameDriver {
    shared: Rc<Shared>,
}

struct Shared {
    scheduler: RefCell<Scheduler<HtmlElement>>,
    pending: Cell<Option<i32>>,
    on_frame: RefCell<Option<FrameCallback>>,
}

impl FrameDriver {
    pub fn new() -> Self {
        let shared = Rc::new(Shared {
            scheduler: RefCell::new(Scheduler::new()),
            pending: Cell::new(None),
            on_frame: RefCell::new(None),
        });

        // Weak: the callback must not keep its own driver alive
        let weak = Rc::downgrade(&shared);
        let callback = FrameCallback::new(move |now: f64| {
            if let Some(shared) = weak.upgrade() {
                shared.frame(now);
            }
        });
        *shared.on_frame.borrow_mut() = Some(callback);

        Self { shared }
    }

    /// Number of live playbacks.
    pub fn active(&self) -> usize {
        self.shared.scheduler.borrow().len()
    }

    fn render_now(&self) {
        self.shared.frame(now_ms());
    }
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl MotionDriver<HtmlElement> for FrameDriver {
    fn play_timeline(&self, timeline: Timeline<HtmlElement>) -> AnimationId {
        let id = self.shared.scheduler.borrow_mut().add_timeline(timeline);
        self.render_now();
        id
    }

    fn play_tween(&self, tween: Tween<HtmlElement>) -> AnimationId {
        let id = self.shared.scheduler.borrow_mut().add_tween(tween);
        self.render_now();
        id
    }

    fn play_spring(&self, target: HtmlElement, spring: Spring) -> AnimationId {
        let id = self.shared.scheduler.borrow_mut().add_spring(target, spring);
        self.render_now();
        id
    }

    fn retarget(&self, id: AnimationId, value: f64) {
        if self.shared.scheduler.borrow_mut().retarget(id, value) {
            self.shared.request_frame();
        }
    }

    fn kill(&self, id: AnimationId) {
        if self.shared.scheduler.borrow_mut().kill(id) {
            trace!(id = id.raw(), "playback killed");
        }
        if self.shared.scheduler.borrow().is_idle() {
            self.shared.cancel_frame();
        }
    }
}

impl Shared {
    fn frame(&self, now: f64) {
        self.pending.set(None);
        let touches = self.scheduler.borrow_mut().tick(now);
        for touch in &touches {
            if let Err(err) = apply(touch) {
                warn!(%err, "failed to write animation style");
            }
        }
        self.request_frame();
    }

    fn request_frame(&self) {
        if self.pending.get().is_some() || self.scheduler.borrow().is_idle() {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        let callback = self.on_frame.borrow();
        let Some(callback) = callback.as_ref() else {
            return;
        };
        match window.request_animation_frame(callback.as_ref().unchecked_ref::<js_sys::Function>()) {
            Ok(handle) => self.pending.set(Some(handle)),
            Err(err) => warn!(err = ?err, "requestAnimationFrame failed"),
        }
    }

    fn cancel_frame(&self) {
        if let (Some(handle), Some(window)) = (self.pending.take(), web_sys::window()) {
            let _ = window.cancel_animation_frame(handle);
        }
    }
}

impl Drop for Shared {
    fn drop(&mut self) {
        // A queued frame would call into a dropped closure
        self.cancel_frame();
    }
}

fn apply(touch: &Touch<HtmlElement>) -> Result<()> {
    let style = touch.target.style();
    if touch.channels.opacity {
        style.set_property("opacity", &touch.pose.css_opacity())?;
    }
    if touch.channels.transform {
        style.set_property("transform", &touch.pose.css_transform())?;
    }
    Ok(())
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_default()
}
