use leptos::{html, prelude::*};

use crate::content::{Project, ProjectCategory, PROJECTS};
use crate::filter::ProjectFilter;
use crate::section::Section;

use super::common::{reveal_class, use_reveal, SectionHeading, REVEAL_BASE};

#[component]
pub fn Projects() -> impl IntoView {
    let (filter, set_filter) = signal(ProjectFilter::default());
    let grid = NodeRef::<html::Div>::new();
    let revealed = use_reveal(grid);

    let filter_button = move |option: ProjectFilter| {
        let rounding = match option {
            ProjectFilter::All => "rounded-l-lg",
            ProjectFilter::Only(ProjectCategory::Tool) => "rounded-r-lg",
            _ => "",
        };
        view! {
            <button
                class=move || {
                    let colors = if filter() == option {
                        "bg-teal-500 text-white"
                    } else {
                        "bg-white text-gray-700 hover:bg-gray-50"
                    };
                    format!("px-4 py-2 text-sm font-medium border border-gray-200 {colors} {rounding}")
                }
                aria-pressed=move || (filter() == option).to_string()
                on:click=move |_| {
                    log::debug!("project filter set to {}", option.label());
                    set_filter(option);
                }
            >
                {option.label()}
            </button>
        }
    };

    view! {
        <section id=Section::Projects.anchor() class="py-20 bg-white">
            <div class="container mx-auto px-4">
                <SectionHeading
                    title="Featured Projects"
                    subtitle="A showcase of my key projects and achievements in the QA and test automation domain"
                />

                <div class="flex justify-center mb-12">
                    <div class="inline-flex rounded-md shadow-sm">
                        {ProjectFilter::OPTIONS.into_iter().map(filter_button).collect_view()}
                    </div>
                </div>

                <div
                    node_ref=grid
                    class=move || {
                        format!("grid md:grid-cols-2 lg:grid-cols-3 gap-8 {REVEAL_BASE} {}", reveal_class(revealed()))
                    }
                >
                    <For
                        each=move || filter().apply(PROJECTS)
                        key=|project| project.id
                        children=|project| view! { <ProjectCard project /> }
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl overflow-hidden shadow-lg transition-all duration-300 hover:shadow-xl hover:-translate-y-1">
            <div class="h-48 overflow-hidden">
                <img
                    src=project.image
                    alt=project.title
                    class="w-full h-full object-cover transition-transform duration-500 hover:scale-110"
                />
            </div>

            <div class="p-6">
                <div class="flex justify-between items-start mb-4">
                    <h3 class="text-xl font-bold text-slate-800">{project.title}</h3>
                    <span class="px-2 py-1 bg-slate-100 text-slate-600 text-xs font-semibold rounded">
                        {project.category.label()}
                    </span>
                </div>

                <p class="text-gray-600 mb-4">{project.description}</p>

                <div class="mb-4">
                    <h4 class="font-semibold text-slate-700 mb-2">"Key Highlights:"</h4>
                    <ul class="list-disc list-inside text-gray-600 text-sm">
                        {project.highlights.iter().map(|h| view! { <li>{*h}</li> }).collect_view()}
                    </ul>
                </div>

                <div class="flex flex-wrap gap-2 mb-6">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="px-3 py-1 bg-slate-100 text-slate-600 rounded-full text-xs font-medium">
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="flex justify-between">
                    {project
                        .demo_link
                        .map(|href| view! { <ProjectLink href icon="↗" label="Live Demo" /> })}
                    {project
                        .repo_link
                        .map(|href| view! { <ProjectLink href icon="⌥" label="Source Code" /> })}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProjectLink(href: &'static str, icon: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            class="flex items-center text-teal-600 hover:text-teal-800 transition-colors"
        >
            <span class="mr-1">{icon}</span>
            <span class="text-sm font-medium">{label}</span>
        </a>
    }
}
