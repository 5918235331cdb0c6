use leptos::{html, prelude::*};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::contact::{ContactForm, Field};
use crate::content::CONTACT;
use crate::section::Section;

use super::common::{reveal_class, use_config, use_reveal, SectionHeading, REVEAL_BASE};

#[component]
pub fn Contact() -> impl IntoView {
    let config = use_config();
    let body = NodeRef::<html::Div>::new();
    let revealed = use_reveal(body);

    view! {
        <section id=Section::Contact.anchor() class="py-20 bg-white">
            <div class="container mx-auto px-4">
                <SectionHeading
                    title="Get In Touch"
                    subtitle="Have a project in mind or want to discuss quality assurance opportunities? I'd love to hear from you."
                />

                <div
                    node_ref=body
                    class=move || {
                        format!("max-w-5xl mx-auto grid md:grid-cols-2 gap-12 {REVEAL_BASE} {}", reveal_class(revealed()))
                    }
                >
                    <ContactInfo />
                    <div class="bg-white p-8 rounded-xl shadow-md">
                        <h3 class="text-2xl font-bold text-slate-800 mb-6">"Send A Message"</h3>
                        <MessageForm
                            submit_delay_ms=config.submit_delay_ms()
                            confirmation_ms=config.confirmation_visible_ms()
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    let phone_href = format!("tel:{}", CONTACT.phone.replace(' ', ""));

    view! {
        <div class="bg-slate-50 p-8 rounded-xl shadow-md">
            <h3 class="text-2xl font-bold text-slate-800 mb-6">"Contact Information"</h3>

            <div class="space-y-6 mb-8">
                <InfoRow icon="✉" heading="Email">
                    <a
                        href=format!("mailto:{}", CONTACT.email)
                        class="text-teal-600 hover:text-teal-800 transition-colors"
                    >
                        {CONTACT.email}
                    </a>
                </InfoRow>
                <InfoRow icon="☎" heading="Phone">
                    <a href=phone_href class="text-teal-600 hover:text-teal-800 transition-colors">
                        {CONTACT.phone}
                    </a>
                </InfoRow>
                <InfoRow icon="⌖" heading=CONTACT.city>
                    <p class="text-gray-600">{CONTACT.region}</p>
                </InfoRow>
            </div>

            <h3 class="text-xl font-bold text-slate-800 mb-4">"Connect With Me"</h3>
            <div class="flex space-x-4">
                {["LinkedIn", "GitHub", "Twitter"]
                    .into_iter()
                    .map(|network| {
                        view! {
                            <a
                                href="#"
                                class="px-4 py-2 bg-slate-200 hover:bg-teal-500 text-slate-700 hover:text-white rounded-full text-sm transition-colors duration-300"
                                aria-label=network
                            >
                                {network}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn InfoRow(icon: &'static str, heading: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="flex items-start">
            <div class="mt-1 mr-4 p-2 bg-teal-100 text-teal-600 rounded-lg w-9 text-center">
                {icon}
            </div>
            <div>
                <h4 class="font-semibold text-slate-700">{heading}</h4>
                {children()}
            </div>
        </div>
    }
}

/// The form swaps for a thank-you note while the confirmation is showing.
#[component]
fn MessageForm(submit_delay_ms: f64, confirmation_ms: f64) -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());

    let UseTimeoutFnReturn {
        start: start_hide, ..
    } = use_timeout_fn(
        move |_: ()| {
            form.update(|f| f.dismiss_confirmation());
        },
        confirmation_ms,
    );
    let UseTimeoutFnReturn {
        start: start_delivery,
        ..
    } = use_timeout_fn(
        move |_: ()| {
            form.update(|f| f.complete());
            log::info!("contact message accepted (simulated, nothing was sent)");
            start_hide(());
        },
        submit_delay_ms,
    );

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.try_update(|f| f.submit()) {
            Some(Ok(())) => {
                log::debug!("contact form submitting");
                start_delivery(());
            }
            Some(Err(err)) => log::debug!("contact form blocked: {err}"),
            None => {}
        }
    };

    let submitting = move || form.with(|f| f.is_submitting());

    view! {
        <Show
            when=move || !form.with(|f| f.is_submitted())
            fallback=|| {
                view! {
                    <div class="bg-green-50 border border-green-200 text-green-700 p-4 rounded-lg">
                        <p class="font-medium">"Thank you for your message!"</p>
                        <p class="text-sm mt-1">"I'll get back to you as soon as possible."</p>
                    </div>
                }
            }
        >
            <form on:submit=on_submit.clone()>
                {Field::ALL.into_iter().map(|field| view! { <FormField field form /> }).collect_view()}
                <button
                    type="submit"
                    disabled=submitting
                    class=move || {
                        if submitting() {
                            "w-full py-3 px-6 flex items-center justify-center rounded-lg font-medium transition-all duration-300 text-white bg-gray-400 cursor-not-allowed"
                        } else {
                            "w-full py-3 px-6 flex items-center justify-center rounded-lg font-medium transition-all duration-300 text-white bg-teal-600 hover:bg-teal-700 transform hover:scale-105"
                        }
                    }
                >
                    {move || {
                        if submitting() {
                            view! {
                                <span class="animate-spin -ml-1 mr-3 h-5 w-5 rounded-full border-2 border-white border-t-transparent"></span>
                                "Sending..."
                            }
                                .into_any()
                        } else {
                            view! {
                                <span class="mr-2">"➤"</span>
                                "Send Message"
                            }
                                .into_any()
                        }
                    }}
                </button>
            </form>
        </Show>
    }
}

#[component]
fn FormField(field: Field, form: RwSignal<ContactForm>) -> impl IntoView {
    let value = move || form.with(|f| f.value(field).to_string());
    let input_class = "w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-teal-500 focus:border-transparent transition-all duration-300";

    let wrapper_class = if field == Field::Message { "mb-6" } else { "mb-4" };

    view! {
        <div class=wrapper_class>
            <label for=field.id() class="block text-sm font-medium text-gray-700 mb-1">
                {field.label()}
            </label>
            {if field == Field::Message {
                view! {
                    <textarea
                        id=field.id()
                        name=field.id()
                        rows="5"
                        prop:value=value
                        on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
                        class=input_class
                        required=true
                    ></textarea>
                }
                    .into_any()
            } else {
                view! {
                    <input
                        type=field.input_type()
                        id=field.id()
                        name=field.id()
                        prop:value=value
                        on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
                        class=input_class
                        required=true
                    />
                }
                    .into_any()
            }}
        </div>
    }
}
