use leptos::{html, prelude::*};
use leptos_use::use_interval_fn;

use crate::carousel::Carousel;
use crate::content::TESTIMONIALS;
use crate::section::Section;

use super::common::{reveal_class, use_config, use_reveal, SectionHeading, REVEAL_BASE};

#[component]
pub fn Testimonials() -> impl IntoView {
    let carousel = match Carousel::for_items(TESTIMONIALS) {
        Ok(c) => RwSignal::new(c),
        Err(err) => {
            log::warn!("testimonials section skipped: {err}");
            return None;
        }
    };
    let interval_ms = use_config().carousel_interval_ms();
    let body = NodeRef::<html::Div>::new();
    let revealed = use_reveal(body);

    // Manual navigation below leaves this timer alone, so a tick can land
    // right after an arrow or dot click.
    use_interval_fn(
        move || {
            carousel.update(|c| {
                c.tick();
            })
        },
        interval_ms,
    );
    on_cleanup(move || {
        carousel.try_update_untracked(|c| c.teardown());
    });

    let current = move || TESTIMONIALS[carousel.with(|c| c.current())];

    Some(view! {
        <section
            id=Section::Testimonials.anchor()
            class="py-20 bg-gradient-to-b from-slate-800 to-slate-900 text-white"
        >
            <div class="container mx-auto px-4">
                <SectionHeading
                    title="Client Testimonials"
                    subtitle="What colleagues and clients say about my work and contributions"
                    dark=true
                />

                <div
                    node_ref=body
                    class=move || format!("max-w-4xl mx-auto {REVEAL_BASE} {}", reveal_class(revealed()))
                >
                    <div class="relative">
                        <div class="absolute -top-8 left-8 md:left-16 text-teal-500 opacity-30 text-8xl font-serif">
                            "“"
                        </div>

                        <div class="bg-slate-700/50 rounded-xl p-6 md:p-10 backdrop-blur-sm shadow-xl">
                            <div class="relative z-10">
                                <p class="text-lg md:text-xl text-gray-200 mb-8 italic">
                                    "\"" {move || current().text} "\""
                                </p>

                                <div class="flex items-center">
                                    <div class="w-16 h-16 rounded-full overflow-hidden mr-4">
                                        <img
                                            src=move || current().image
                                            alt=move || current().name
                                            class="w-full h-full object-cover"
                                        />
                                    </div>
                                    <div>
                                        <h4 class="font-bold text-lg text-white">
                                            {move || current().name}
                                        </h4>
                                        <p class="text-teal-400">
                                            {move || {
                                                let t = current();
                                                format!("{}, {}", t.position, t.company)
                                            }}
                                        </p>
                                    </div>
                                </div>
                            </div>
                        </div>

                        <div class="mt-8 flex justify-center gap-4">
                            <button
                                on:click=move |_| carousel.update(Carousel::retreat)
                                class="p-2 w-10 h-10 rounded-full bg-slate-700 hover:bg-teal-600 transition-colors duration-300"
                                aria-label="Previous testimonial"
                            >
                                "‹"
                            </button>

                            <div class="flex items-center gap-2">
                                {(0..TESTIMONIALS.len())
                                    .map(|index| view! { <Dot index carousel /> })
                                    .collect_view()}
                            </div>

                            <button
                                on:click=move |_| carousel.update(Carousel::advance)
                                class="p-2 w-10 h-10 rounded-full bg-slate-700 hover:bg-teal-600 transition-colors duration-300"
                                aria-label="Next testimonial"
                            >
                                "›"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    })
}

#[component]
fn Dot(index: usize, carousel: RwSignal<Carousel>) -> impl IntoView {
    let active = move || carousel.with(|c| c.current() == index);

    view! {
        <button
            on:click=move |_| {
                carousel
                    .update(|c| {
                        if let Err(err) = c.jump_to(index) {
                            log::warn!("testimonial dot ignored: {err}");
                        }
                    })
            }
            class=move || {
                if active() {
                    "w-3 h-3 rounded-full transition-all duration-300 bg-teal-500 scale-125"
                } else {
                    "w-3 h-3 rounded-full transition-all duration-300 bg-slate-600 hover:bg-slate-400"
                }
            }
            aria-label=format!("Go to testimonial {}", index + 1)
            aria-current=move || active().to_string()
        ></button>
    }
}
