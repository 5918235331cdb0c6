use leptos::{html, prelude::*};

use crate::content::{ABOUT_IMAGE, ABOUT_SUMMARY, STRENGTHS};
use crate::section::Section;

use super::common::{
    reveal_class, scroll_to_section, use_reveal, SectionHeading, REVEAL_BASE,
};

#[component]
pub fn About() -> impl IntoView {
    let body = NodeRef::<html::Div>::new();
    let revealed = use_reveal(body);

    view! {
        <section id=Section::About.anchor() class="py-20 bg-white">
            <div class="container mx-auto px-4">
                <SectionHeading
                    title="About Me"
                    subtitle="A passionate QA professional dedicated to ensuring the highest quality standards through innovative testing approaches"
                />

                <div
                    node_ref=body
                    class=move || {
                        format!("grid md:grid-cols-2 gap-12 items-center {REVEAL_BASE} {}", reveal_class(revealed()))
                    }
                >
                    <div class="rounded-xl overflow-hidden shadow-xl">
                        <img
                            src=ABOUT_IMAGE
                            alt="Professional QA Engineer at work"
                            class="w-full h-auto object-cover"
                        />
                    </div>

                    <div>
                        <h3 class="text-2xl font-bold text-slate-800 mb-6">"Who I Am"</h3>
                        <p class="text-gray-600 mb-6">{ABOUT_SUMMARY}</p>

                        <div class="space-y-4 mb-8">
                            {STRENGTHS
                                .iter()
                                .map(|strength| {
                                    view! {
                                        <div class="flex items-start">
                                            <div class="mt-1 mr-4 p-2 bg-teal-50 rounded-lg text-xl">
                                                {strength.icon}
                                            </div>
                                            <div>
                                                <h4 class="font-semibold text-slate-800">{strength.title}</h4>
                                                <p class="text-gray-600">{strength.description}</p>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <button
                            on:click=move |_| {
                                scroll_to_section(Section::Projects);
                            }
                            class="px-6 py-3 bg-amber-500 hover:bg-amber-600 text-white rounded-lg font-medium transition-colors duration-300"
                        >
                            "View My Projects"
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}
