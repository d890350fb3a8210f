// Portfolio landing page, Leptos 0.8 Edition

use hero_landing::config::HeroConfig;
use hero_landing::logging;
use hero_landing::sections::*;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match HeroConfig::from_page() {
        Some(Ok(config)) => (config, None),
        Some(Err(err)) => (HeroConfig::default(), Some(err)),
        None => (HeroConfig::default(), None),
    };
    logging::init(config.level());
    if let Some(err) = config_error {
        tracing::warn!(%err, "ignoring invalid hero config, using defaults");
    }
    tracing::info!(level = %config.level(), "landing starting");

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

#[component]
fn App(config: HeroConfig) -> impl IntoView {
    let projects_id = config.projects_id.clone();
    let contact_id = config.contact_id.clone();

    view! {
        <SiteHeader config=config.clone() />
        <main>
            <HeroSection config=config />
            <section id=projects_id class="min-h-screen bg-gray-900 px-4 py-24">
                <h2 class="text-center text-4xl font-extrabold text-white">"Selected work"</h2>
            </section>
        </main>
        <Footer id=contact_id />
    }
}
