use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};
use wasm_bindgen::JsValue;

use crate::config::SiteConfig;
use crate::reveal::Visibility;
use crate::section::Section;

/// Classes every revealable block carries on top of its own layout.
pub const REVEAL_BASE: &str = "transform transition-all duration-1000 ease-out";

pub fn use_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}

pub fn reveal_class(revealed: bool) -> &'static str {
    if revealed {
        "translate-y-0 opacity-100"
    } else {
        "translate-y-10 opacity-0"
    }
}

/// Watch `target` and flip to `true` once it is sufficiently on screen.
///
/// The observer is stopped as soon as the section reveals, and leptos-use
/// disconnects it when the owning view is disposed. Browsers without
/// `IntersectionObserver` get the section revealed on mount.
pub fn use_reveal(target: NodeRef<html::Div>) -> Signal<bool> {
    let threshold = use_config().reveal_threshold;
    let visibility = RwSignal::new(Visibility::default());

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            for entry in entries {
                let ratio = entry.intersection_ratio();
                if visibility.try_update(|v| v.observe(ratio, threshold)) == Some(true) {
                    log::debug!("section revealed at ratio {ratio:.2}");
                }
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![threshold]),
    );

    Effect::new(move |_| {
        if !intersection_observer_supported() {
            log::debug!("IntersectionObserver unavailable, revealing immediately");
            visibility.update(|v| {
                v.force();
            });
        }
    });

    Effect::new(move |_| {
        if visibility.get().is_revealed() {
            stop();
        }
    });

    Signal::derive(move || visibility.get().is_revealed())
}

fn intersection_observer_supported() -> bool {
    js_sys::Reflect::has(&window(), &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

/// Smooth-scroll to a section. A missing target is a silent no-op.
pub fn scroll_to_section(section: Section) -> bool {
    match document().get_element_by_id(section.anchor()) {
        Some(el) => {
            el.scroll_into_view();
            true
        }
        None => {
            log::debug!("no #{} element to scroll to", section.anchor());
            false
        }
    }
}

pub fn scroll_to_top() {
    window().scroll_to_with_x_and_y(0.0, 0.0);
}

#[component]
pub fn SectionHeading(
    title: &'static str,
    subtitle: &'static str,
    #[prop(optional)] dark: bool,
) -> impl IntoView {
    let (title_class, subtitle_class) = if dark {
        ("text-3xl md:text-4xl font-bold mb-4", "text-lg text-gray-300")
    } else {
        ("text-3xl md:text-4xl font-bold text-slate-900 mb-4", "text-lg text-gray-600")
    };
    view! {
        <div class="max-w-3xl mx-auto text-center mb-16">
            <h2 class=title_class>{title}</h2>
            <div class="h-1 w-20 bg-teal-500 mx-auto mb-8"></div>
            <p class=subtitle_class>{subtitle}</p>
        </div>
    }
}
