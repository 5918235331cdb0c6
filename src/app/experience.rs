use leptos::{html, prelude::*};

use crate::content::{ExperienceEntry, EXPERIENCE};
use crate::reveal::stagger;
use crate::section::Section;

use super::common::{reveal_class, use_config, use_reveal, SectionHeading, REVEAL_BASE};

#[component]
pub fn Experience() -> impl IntoView {
    let config = use_config();
    let timeline = NodeRef::<html::Div>::new();
    let revealed = use_reveal(timeline);

    view! {
        <section id=Section::Experience.anchor() class="py-20 bg-slate-50">
            <div class="container mx-auto px-4">
                <SectionHeading
                    title="Professional Experience"
                    subtitle="My journey as a quality assurance professional across different organizations"
                />

                <div
                    node_ref=timeline
                    class=move || format!("max-w-4xl mx-auto {REVEAL_BASE} {}", reveal_class(revealed()))
                >
                    <div class="relative">
                        <div class="absolute left-0 md:left-1/2 transform md:-translate-x-1/2 h-full w-1 bg-teal-200"></div>
                        {EXPERIENCE
                            .iter()
                            .enumerate()
                            .map(|(index, entry)| {
                                let delay = stagger(index, config.timeline_stagger);
                                view! {
                                    <TimelineItem
                                        entry=*entry
                                        index
                                        delay_ms=delay.as_millis()
                                        revealed
                                    />
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="mt-16 text-center">
                        <a
                            href=config.resume_href
                            target="_blank"
                            rel="noopener noreferrer"
                            class="px-6 py-3 bg-slate-800 hover:bg-slate-900 text-white rounded-lg font-medium transition-colors duration-300 inline-flex items-center"
                        >
                            <span class="mr-2">"📄"</span>
                            "View Full Resume"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TimelineItem(
    entry: ExperienceEntry,
    index: usize,
    delay_ms: u128,
    revealed: Signal<bool>,
) -> impl IntoView {
    // alternate sides of the timeline, sliding in from the side they sit on
    let left = index % 2 == 0;
    let (layout, hidden_offset, padding) = if left {
        ("md:flex-row-reverse", "-translate-x-10", "md:pr-12")
    } else {
        ("", "translate-x-10", "md:pl-12")
    };

    view! {
        <div
            class=move || {
                let state = if revealed() {
                    "opacity-100 translate-x-0".to_string()
                } else {
                    format!("opacity-0 {hidden_offset}")
                };
                format!(
                    "relative flex flex-col md:flex-row mb-8 md:mb-16 transform transition-all duration-700 ease-out {layout} {state}",
                )
            }
            style:transition-delay=format!("{delay_ms}ms")
        >
            <div class="absolute left-0 md:left-1/2 transform -translate-x-1/2 w-6 h-6 rounded-full bg-teal-500 z-10 mt-5 flex items-center justify-center">
                <div class="w-3 h-3 rounded-full bg-white"></div>
            </div>

            <div class=format!("ml-10 md:ml-0 md:w-5/12 {padding}")>
                <div class="bg-white p-6 rounded-xl shadow-md">
                    <div class="flex justify-between items-start mb-4">
                        <h3 class="text-xl font-bold text-slate-800">{entry.position}</h3>
                        <span class="flex items-center text-slate-600 text-sm">
                            <span class="mr-1">"📅"</span>
                            {entry.period}
                        </span>
                    </div>

                    <div class="flex items-center mb-4">
                        <span class="text-teal-500 mr-2">"💼"</span>
                        <span class="text-teal-700 font-medium">{entry.company}</span>
                    </div>

                    <p class="text-gray-600 mb-4">{entry.description}</p>

                    <div>
                        <h4 class="font-semibold text-slate-700 mb-2 flex items-center">
                            <span class="text-amber-500 mr-2">"🏆"</span>
                            "Key Achievements:"
                        </h4>
                        <ul class="list-disc list-inside text-gray-600 text-sm space-y-1">
                            {entry.achievements.iter().map(|a| view! { <li>{*a}</li> }).collect_view()}
                        </ul>
                    </div>
                </div>
            </div>
        </div>
    }
}
