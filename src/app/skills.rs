use leptos::{html, prelude::*};

use crate::content::{Skill, SkillCategory, COMPETENCIES, SKILLS};
use crate::reveal::stagger;
use crate::section::Section;

use super::common::{reveal_class, use_config, use_reveal, SectionHeading, REVEAL_BASE};

#[component]
pub fn Skills() -> impl IntoView {
    let body = NodeRef::<html::Div>::new();
    let revealed = use_reveal(body);

    view! {
        <section id=Section::Skills.anchor() class="py-20 bg-slate-50">
            <div class="container mx-auto px-4">
                <SectionHeading
                    title="Technical Skills"
                    subtitle="My technical toolkit is continuously evolving to keep pace with industry trends and best practices"
                />

                <div
                    node_ref=body
                    class=move || format!("{REVEAL_BASE} {}", reveal_class(revealed()))
                >
                    <div class="grid md:grid-cols-2 gap-8">
                        {SkillCategory::ALL
                            .into_iter()
                            .map(|category| view! { <SkillCard category revealed /> })
                            .collect_view()}
                    </div>

                    <div class="mt-16 bg-white rounded-xl shadow-md p-8">
                        <h3 class="text-xl font-bold text-slate-800 mb-6 text-center">
                            "Additional Competencies"
                        </h3>
                        <div class="flex flex-wrap justify-center gap-3">
                            {COMPETENCIES
                                .iter()
                                .map(|item| {
                                    view! {
                                        <span class="px-4 py-2 bg-slate-100 text-slate-700 rounded-full text-sm font-medium">
                                            {*item}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(category: SkillCategory, revealed: Signal<bool>) -> impl IntoView {
    let step = use_config().skill_bar_stagger;

    view! {
        <div class="bg-white rounded-xl shadow-md p-6">
            <h3 class="text-xl font-bold text-slate-800 mb-6">{category.label()}</h3>
            <div class="space-y-5">
                {SKILLS
                    .iter()
                    .enumerate()
                    .filter(|(_, skill)| skill.category == category)
                    .map(|(position, skill)| {
                        // bars fill in page order across all cards
                        let delay = stagger(position, step);
                        view! { <SkillBar skill=*skill delay_ms=delay.as_millis() revealed /> }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn SkillBar(skill: Skill, delay_ms: u128, revealed: Signal<bool>) -> impl IntoView {
    let width = move || {
        if revealed() {
            format!("{}%", skill.proficiency)
        } else {
            "0%".to_string()
        }
    };

    view! {
        <div>
            <div class="flex justify-between mb-1">
                <span class="text-slate-700 font-medium">{skill.name}</span>
                <span class="text-slate-600">{skill.proficiency} "%"</span>
            </div>
            <div class="h-2 bg-slate-200 rounded-full">
                <div
                    class="h-full bg-teal-500 rounded-full transition-all duration-1000 ease-out"
                    style:width=width
                    style:transition-delay=format!("{delay_ms}ms")
                ></div>
            </div>
        </div>
    }
}
