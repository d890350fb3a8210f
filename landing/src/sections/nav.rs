use leptos::prelude::*;

use crate::config::HeroConfig;
use crate::nav::{BrowserViewport, scroll_to_contact, scroll_to_projects};

/// Fixed page header. Its rendered height is what "See my work" subtracts.
#[component]
pub fn SiteHeader(config: HeroConfig) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    let HeroConfig {
        projects_id,
        contact_id,
        header_selector,
        ..
    } = config;

    let go_work = move |_| {
        set_menu_open.set(false);
        scroll_to_projects(&BrowserViewport, &projects_id, &header_selector);
    };
    let go_contact = move |_| {
        set_menu_open.set(false);
        scroll_to_contact(&BrowserViewport, &contact_id);
    };

    view! {
        <header class="fixed top-0 inset-x-0 z-50 bg-gray-950/80 backdrop-blur border-b border-gray-800">
            <div class="max-w-6xl mx-auto flex items-center justify-between px-4 h-16">
                <a href="#hero" class="text-white font-extrabold tracking-tight">"CHRIS ABRA."</a>
                <button
                    class="md:hidden text-gray-300"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|o| *o = !*o)
                >
                    {move || if menu_open.get() { "Close" } else { "Menu" }}
                </button>
                <nav class=move || {
                    if menu_open.get() {
                        "flex flex-col absolute top-16 inset-x-0 bg-gray-950 p-4 gap-4 md:static md:flex-row md:p-0"
                    } else {
                        "hidden md:flex md:flex-row gap-6"
                    }
                }>
                    <button class="text-gray-300 hover:text-white" on:click=go_work>"Work"</button>
                    <button class="text-gray-300 hover:text-white" on:click=go_contact>"Contact"</button>
                </nav>
            </div>
        </header>
    }
}
