use leptos::prelude::*;

/// Contact block at the bottom of the page, target of "Contact me".
#[component]
pub fn Footer(#[prop(into)] id: String) -> impl IntoView {
    view! {
        <footer id=id class="bg-gray-950 border-t border-gray-800 px-4 py-16">
            <div class="max-w-6xl mx-auto text-center">
                <h2 class="text-3xl md:text-4xl font-extrabold text-white mb-4">"LET'S TALK."</h2>
                <p class="text-gray-400 mb-8">"Open to freelance projects and collaborations."</p>
                <a href="mailto:hello@chrisabra.dev" class="inline-flex bg-indigo-600 hover:bg-indigo-700 text-white px-7 py-4 rounded-md font-semibold">
                    "hello@chrisabra.dev"
                </a>
                <p class="text-gray-600 text-sm mt-12">"(c) Chris Abra"</p>
            </div>
        </footer>
    }
}
