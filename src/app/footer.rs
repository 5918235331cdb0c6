use leptos::prelude::*;

use crate::content::BRAND;
use crate::section::Section;

use super::common::scroll_to_top;

const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-slate-900 text-white py-12">
            <div class="container mx-auto px-4">
                <div class="flex flex-col md:flex-row justify-between items-center">
                    <div class="flex items-center mb-6 md:mb-0">
                        <span class="text-teal-500 text-2xl font-mono mr-2">"</>"</span>
                        <span class="text-xl font-bold">{BRAND}</span>
                    </div>

                    <div class="flex flex-wrap justify-center gap-x-8 gap-y-2 mb-6 md:mb-0">
                        {Section::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <a
                                        href=section.href()
                                        class="text-gray-400 hover:text-teal-400 capitalize text-sm transition-colors duration-300"
                                    >
                                        {section.anchor()}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>

                    <button
                        on:click=move |_| scroll_to_top()
                        class="p-3 w-11 h-11 bg-slate-800 hover:bg-teal-600 rounded-full transition-colors duration-300"
                        aria-label="Scroll to top"
                    >
                        "↑"
                    </button>
                </div>

                <div class="border-t border-slate-800 mt-8 pt-8 flex flex-col md:flex-row justify-between items-center">
                    <p class="text-gray-400 text-sm mb-4 md:mb-0">
                        "© " {BUILD_YEAR} " QA Automation Engineer. All rights reserved."
                    </p>
                    <p class="text-gray-500 text-sm">
                        "Designed and developed with " <span class="text-red-500">"❤️"</span>
                    </p>
                </div>
            </div>
        </footer>
    }
}
