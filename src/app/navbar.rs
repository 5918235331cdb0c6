use leptos::{ev, prelude::*};

use crate::content::BRAND;
use crate::section::{is_condensed, Section};

use super::common::{scroll_to_section, use_config};

#[component]
pub fn Navbar() -> impl IntoView {
    let threshold = use_config().condensed_nav_after;
    let (menu_open, set_menu_open) = signal(false);
    let (condensed, set_condensed) = signal(false);

    let sync_scroll = move || {
        let y = window().scroll_y().unwrap_or_default();
        set_condensed(is_condensed(y, threshold));
    };

    // restore the right style when the page loads already scrolled
    Effect::new(move |_| sync_scroll());

    let handle = window_event_listener(ev::scroll, move |_| sync_scroll());
    on_cleanup(move || handle.remove());

    let go_to = move |section: Section| {
        if scroll_to_section(section) {
            set_menu_open(false);
        }
    };

    view! {
        <nav class=move || {
            if condensed() {
                "fixed w-full z-50 transition-all duration-300 bg-slate-900 shadow-lg py-2"
            } else {
                "fixed w-full z-50 transition-all duration-300 bg-transparent py-4"
            }
        }>
            <div class="container mx-auto px-4 md:px-6">
                <div class="flex justify-between items-center">
                    <div class="flex items-center">
                        <span class="text-teal-500 text-2xl font-mono mr-2">"</>"</span>
                        <span class="text-xl font-bold text-white">{BRAND}</span>
                    </div>

                    <div class="hidden md:flex space-x-8">
                        {Section::DESKTOP_NAV
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <button
                                        on:click=move |_| go_to(section)
                                        class="text-gray-300 hover:text-white capitalize transition-colors duration-300"
                                    >
                                        {section.anchor()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="md:hidden">
                        <button
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                            class="text-white text-2xl focus:outline-none"
                            aria-label=move || if menu_open() { "Close menu" } else { "Open menu" }
                            aria-expanded=move || menu_open().to_string()
                        >
                            {move || if menu_open() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>

                <Show when=menu_open>
                    <div class="md:hidden mt-4 py-4 bg-slate-800 rounded-lg shadow-xl">
                        <div class="flex flex-col space-y-4 px-4">
                            {Section::ALL
                                .into_iter()
                                .map(|section| {
                                    view! {
                                        <button
                                            on:click=move |_| go_to(section)
                                            class="text-gray-300 hover:text-white capitalize py-2 transition-colors duration-300"
                                        >
                                            {section.anchor()}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </Show>
            </div>
        </nav>
    }
}
