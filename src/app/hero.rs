use leptos::{html, prelude::*};

use crate::content::HERO_HIGHLIGHTS;
use crate::section::Section;

use super::common::{reveal_class, scroll_to_section, use_config, use_reveal, REVEAL_BASE};

const BACKDROP: &str = "https://images.pexels.com/photos/577585/pexels-photo-577585.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2";

#[component]
pub fn Hero() -> impl IntoView {
    let resume_href = use_config().resume_href;
    let banner = NodeRef::<html::Div>::new();
    let revealed = use_reveal(banner);

    view! {
        <div class="relative min-h-screen bg-gradient-to-b from-slate-900 to-slate-800 flex items-center justify-center text-white">
            <div class="absolute inset-0 overflow-hidden">
                <div
                    class="absolute inset-0 bg-cover bg-center opacity-10"
                    style=format!("background-image: url('{BACKDROP}')")
                ></div>
            </div>
            <div class="container mx-auto px-4 py-16 z-10">
                <div
                    node_ref=banner
                    class=move || {
                        format!("max-w-3xl mx-auto text-center {REVEAL_BASE} {}", reveal_class(revealed()))
                    }
                >
                    <h1 class="text-4xl md:text-5xl lg:text-6xl font-bold mb-6">
                        <span class="block">"QA Automation Engineer"</span>
                        <span class="block mt-2 text-teal-400">"& Quality Assurance Lead"</span>
                    </h1>
                    <p class="text-xl md:text-2xl text-gray-300 mb-8">
                        "Ensuring software excellence through meticulous testing and innovative automation"
                    </p>

                    <div class="flex flex-col md:flex-row justify-center items-center gap-4 md:gap-8 mb-12">
                        {HERO_HIGHLIGHTS
                            .iter()
                            .map(|highlight| {
                                view! {
                                    <div class="flex items-center">
                                        <span class="text-amber-400 mr-2">"✔"</span>
                                        <span>{*highlight}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <button
                            on:click=move |_| {
                                scroll_to_section(Section::Contact);
                            }
                            class="px-8 py-3 bg-teal-600 hover:bg-teal-700 rounded-lg font-medium transition-all duration-300 transform hover:scale-105"
                        >
                            "Get in Touch"
                        </button>
                        <a
                            href=resume_href
                            target="_blank"
                            rel="noopener noreferrer"
                            class="px-8 py-3 bg-transparent border border-white hover:bg-white hover:text-slate-900 rounded-lg font-medium transition-colors duration-300"
                        >
                            "Download Resume"
                        </a>
                    </div>
                </div>
            </div>

            <div class="absolute bottom-8 left-1/2 transform -translate-x-1/2 animate-bounce">
                <button
                    on:click=move |_| {
                        scroll_to_section(Section::About);
                    }
                    aria-label="Scroll down"
                    class="text-3xl text-white opacity-80"
                >
                    "↓"
                </button>
            </div>
        </div>
    }
}
