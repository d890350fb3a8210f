//! Hero section: role wall, memoji, headline and the two calls to action.

mod choreography;

pub use choreography::{Disposer, HeroPlayback, HeroTargets, attach, entrance_timeline};

use leptos::html::{Div, Img};
use leptos::prelude::*;
use send_wrapper::SendWrapper;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::config::{HeroConfig, HoverConfig};
use crate::motion::{AnimationId, FrameDriver, MotionDriver, Spring};
use crate::nav::{BrowserViewport, scroll_to_contact, scroll_to_projects};
use crate::roles::{HEADLINES, HeadingLevel, Headline, ROLES};

#[component]
pub fn HeroSection(#[prop(optional)] config: Option<HeroConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();

    let text_layer = NodeRef::<Div>::new();
    let role_wall = NodeRef::<Div>::new();
    let image = NodeRef::<Img>::new();
    let headline_block = NodeRef::<Div>::new();

    let motion = config.motion;
    Effect::new(move || {
        let Some(targets) = resolve_targets(text_layer, role_wall, image, headline_block) else {
            return;
        };
        debug!(
            roles = targets.roles.len(),
            headlines = targets.headlines.len(),
            "hero mounted"
        );
        let disposer = SendWrapper::new(attach(&FrameDriver::new(), targets, &motion));
        on_cleanup(move || disposer.take().dispose());
    });

    let projects_id = config.projects_id.clone();
    let header_selector = config.header_selector.clone();
    let see_work = move |_| scroll_to_projects(&BrowserViewport, &projects_id, &header_selector);

    let contact_id = config.contact_id.clone();
    let contact_me = move |_| scroll_to_contact(&BrowserViewport, &contact_id);

    view! {
        <section id="hero" class="min-h-screen relative overflow-hidden bg-gray-950 flex items-center justify-center">
            // Background role wall
            <div node_ref=text_layer class="absolute inset-0 flex flex-wrap justify-center content-center opacity-90">
                <div
                    node_ref=role_wall
                    class="flex flex-wrap justify-center content-center text-4xl sm:text-5xl md:text-6xl font-extrabold opacity-80 overflow-hidden w-full h-full"
                    style="line-height: 1.1; user-select: none;"
                >
                    {ROLES
                        .into_iter()
                        .map(|role| {
                            let class = format!("{} mx-1 whitespace-nowrap", role.color.class());
                            view! { <span class=class>{role.label()}</span> }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="container relative z-10 px-4 max-w-6xl mx-auto">
                <div class="flex flex-col items-center">
                    <HoverLift hover={config.motion.hover}>
                        <img
                            node_ref=image
                            src={config.image_src}
                            alt={config.image_alt}
                            class="w-52 h-52 sm:w-72 sm:h-72 md:w-80 md:h-80 object-contain relative z-10"
                        />
                    </HoverLift>

                    <div node_ref=headline_block class="mb-8 text-center">
                        {HEADLINES.into_iter().map(headline_line).collect_view()}
                    </div>

                    <div class="flex flex-wrap justify-center gap-4 mt-8">
                        <button
                            class="inline-flex items-center bg-indigo-600 hover:bg-indigo-700 text-white px-7 py-6 rounded-md text-lg font-semibold transition-colors"
                            on:click=see_work
                        >
                            "See my work"
                            <ArrowRight />
                        </button>
                        <button
                            class="inline-flex items-center border border-gray-700 hover:bg-gray-800 text-white px-7 py-6 rounded-md text-lg font-semibold transition-colors"
                            on:click=contact_me
                        >
                            "Contact me"
                        </button>
                    </div>
                </div>
            </div>

            // Rainbow bar
            <div class="absolute bottom-0 left-0 right-0 h-1.5 bg-gradient-to-r from-indigo-500 via-purple-500 via-pink-500 via-red-500 via-yellow-500 to-green-500"></div>
        </section>
    }
}

/// Wrapper that springs up in scale while hovered.
#[component]
fn HoverLift(hover: HoverConfig, children: Children) -> impl IntoView {
    let wrapper = NodeRef::<Div>::new();
    let (hovered, set_hovered) = signal(false);

    // Driver lives as long as the effect, which lives as long as the wrapper
    let mut lift: Option<(FrameDriver, AnimationId)> = None;
    Effect::new(move || {
        let scale = if hovered.get() { hover.scale } else { 1.0 };
        let Some(el) = wrapper.get() else {
            return;
        };
        let (driver, id) = lift.get_or_insert_with(|| {
            let driver = FrameDriver::new();
            let id = driver.play_spring(el.into(), Spring::new(hover.spring, 1.0));
            (driver, id)
        });
        driver.retarget(*id, scale);
    });

    view! {
        <div
            node_ref=wrapper
            class="relative mb-6"
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
        >
            {children()}
        </div>
    }
}

fn headline_line(line: Headline) -> AnyView {
    let words = view! {
        <span class={line.accent_color.class()}>{line.accent}</span>
        <span class={line.tail_color.class()}>{line.tail}</span>
    };
    match line.level {
        HeadingLevel::H1 => {
            view! { <h1 class="font-extrabold text-white text-3xl md:text-5xl mb-3">{words}</h1> }
                .into_any()
        }
        HeadingLevel::H2 => {
            view! { <h2 class="font-extrabold text-white text-3xl md:text-5xl mb-4">{words}</h2> }
                .into_any()
        }
        HeadingLevel::H3 => {
            view! { <h3 class="font-extrabold text-white text-2xl md:text-4xl mb-2">{words}</h3> }
                .into_any()
        }
        HeadingLevel::H4 => {
            view! { <h4 class="font-extrabold text-white text-2xl md:text-4xl">{words}</h4> }
                .into_any()
        }
    }
}

#[component]
fn ArrowRight() -> impl IntoView {
    view! {
        <svg
            class="ml-2 h-5 w-5"
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            <path d="M5 12h14" />
            <path d="m12 5 7 7-7 7" />
        </svg>
    }
}

fn resolve_targets(
    text_layer: NodeRef<Div>,
    role_wall: NodeRef<Div>,
    image: NodeRef<Img>,
    headline_block: NodeRef<Div>,
) -> Option<HeroTargets<HtmlElement>> {
    let text_layer = text_layer.get()?;
    let role_wall = role_wall.get()?;
    let image = image.get()?;
    let headline_block = headline_block.get()?;

    let targets = HeroTargets {
        roles: child_elements(&role_wall),
        headlines: child_elements(&headline_block),
        text_layer: text_layer.into(),
        image: image.into(),
    };
    if targets.roles.len() != ROLES.len() {
        warn!(
            found = targets.roles.len(),
            expected = ROLES.len(),
            "role wall rendered an unexpected number of nodes"
        );
    }
    Some(targets)
}

fn child_elements(parent: &Element) -> Vec<HtmlElement> {
    let children = parent.children();
    (0..children.length())
        .filter_map(|i| children.item(i))
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect()
}
