//! Smooth-scroll navigation from the hero buttons to sibling sections.
//!
//! Both handlers are fire-and-forget: a missing target is a silent no-op.

use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

/// The parts of the window the handlers need.
pub trait Viewport {
    /// Top edge of the element with `id`, relative to the viewport.
    fn element_top(&self, id: &str) -> Option<f64>;

    /// Rendered height of the first element matching `selector`.
    fn header_height(&self, selector: &str) -> Option<f64>;

    /// Current vertical scroll of the document.
    fn scroll_y(&self) -> f64;

    /// Smooth-scroll the window to document offset `top`.
    fn scroll_to(&self, top: f64);

    /// Smooth-scroll the element with `id` into view. `false` if absent.
    fn scroll_into_view(&self, id: &str) -> bool;
}

/// Document offset that puts a section's top just under the header.
pub fn projects_offset(section_top: f64, scroll_y: f64, header_height: Option<f64>) -> f64 {
    section_top + scroll_y - header_height.unwrap_or(0.0)
}

/// "See my work": scroll so section `target_id` sits below the header.
pub fn scroll_to_projects(viewport: &impl Viewport, target_id: &str, header_selector: &str) {
    let Some(top) = viewport.element_top(target_id) else {
        debug!(target_id, "scroll target missing, ignoring click");
        return;
    };
    let offset = projects_offset(
        top,
        viewport.scroll_y(),
        viewport.header_height(header_selector),
    );
    debug!(target_id, offset, "scrolling to section");
    viewport.scroll_to(offset);
}

/// "Contact me": let the browser align section `target_id`.
pub fn scroll_to_contact(viewport: &impl Viewport, target_id: &str) {
    if !viewport.scroll_into_view(target_id) {
        debug!(target_id, "scroll target missing, ignoring click");
    }
}

/// [`Viewport`] over the live `window`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserViewport;

impl BrowserViewport {
    fn document() -> Option<web_sys::Document> {
        web_sys::window()?.document()
    }
}

impl Viewport for BrowserViewport {
    fn element_top(&self, id: &str) -> Option<f64> {
        let element = Self::document()?.get_element_by_id(id)?;
        Some(element.get_bounding_client_rect().top())
    }

    fn header_height(&self, selector: &str) -> Option<f64> {
        let header = Self::document()?.query_selector(selector).ok()??;
        let header: HtmlElement = header.dyn_into().ok()?;
        Some(header.offset_height() as f64)
    }

    fn scroll_y(&self) -> f64 {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }

    fn scroll_to(&self, top: f64) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }

    fn scroll_into_view(&self, id: &str) -> bool {
        let Some(element) = Self::document().and_then(|d| d.get_element_by_id(id)) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}
