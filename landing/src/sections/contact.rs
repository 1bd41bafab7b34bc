use super::{Icon, Reveal, SectionHeader};
use crate::notify::BrowserNotifier;
use aquaflow_core::BUSINESS;
use aquaflow_core::content::{ContactMethod, contact_methods};
use aquaflow_core::form::{FIELDS, FormState};
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="contact">
            <div class="container">
                <SectionHeader eyebrow="GET IN TOUCH" title="Start Your Project" />
                <div class="contact-grid">
                    <Reveal motion="from-left">
                        <ContactMethods methods=contact_methods(&BUSINESS) />
                    </Reveal>
                    <Reveal motion="from-right">
                        <ContactForm />
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

/// Phone, email and location rows. Rows with a link render as anchors.
#[component]
pub fn ContactMethods(methods: Vec<ContactMethod>) -> impl IntoView {
    view! {
        <div class="contact-methods">
            {methods.into_iter().map(|method| {
                let value = match method.link {
                    Some(href) => view! {
                        <a href=href class="contact-value contact-link">{method.value}</a>
                    }.into_any(),
                    None => view! { <p class="contact-value">{method.value}</p> }.into_any(),
                };
                view! {
                    <div class="contact-row">
                        <div class="icon-tile-wrap">
                            <span class="glow"></span>
                            <div class="icon-tile">
                                <Icon kind=method.icon class="icon icon-md" />
                            </div>
                        </div>
                        <div>
                            <p class="contact-label">{method.label}</p>
                            {value}
                        </div>
                    </div>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}

/// Local-only contact form. Values live in a signal owned here; submitting logs
/// them, shows an acknowledgment and clears the form. Nothing is sent anywhere.
#[component]
fn ContactForm() -> impl IntoView {
    let (form, set_form) = signal(FormState::default());

    let on_submit = move |ev: ev::SubmitEvent| {
        // The browser has already enforced `required` and input types by now.
        ev.prevent_default();
        let outcome = set_form.try_update(|state| state.submit(&BrowserNotifier));
        if let Some(Err(err)) = outcome {
            tracing::warn!(%err, "submission acknowledgment failed; form was reset anyway");
        }
    };

    view! {
        <form class="contact-form card" on:submit=on_submit>
            <div class="contact-form-fields">
                {FIELDS.iter().map(|&field| {
                    let value = move || form.with(|state| state.get(field).to_string());
                    match field.input_type() {
                        Some(kind) => view! {
                            <input
                                type=kind
                                name=field.name()
                                placeholder=field.placeholder()
                                required=field.required()
                                class="form-input"
                                prop:value=value
                                on:input=move |ev| {
                                    let name = event_target::<web_sys::Element>(&ev)
                                        .get_attribute("name")
                                        .unwrap_or_default();
                                    record_input(set_form, &name, event_target_value(&ev));
                                }
                            />
                        }.into_any(),
                        None => view! {
                            <textarea
                                name=field.name()
                                placeholder=field.placeholder()
                                required=field.required()
                                rows="4"
                                class="form-input form-textarea"
                                prop:value=value
                                on:input=move |ev| {
                                    let name = event_target::<web_sys::Element>(&ev)
                                        .get_attribute("name")
                                        .unwrap_or_default();
                                    record_input(set_form, &name, event_target_value(&ev));
                                }
                            ></textarea>
                        }.into_any(),
                    }
                }).collect::<Vec<_>>()}
                <button type="submit" class="btn btn-primary btn-block">
                    "Send Message"
                </button>
            </div>
        </form>
    }
}

fn record_input(set_form: WriteSignal<FormState>, name: &str, value: String) {
    set_form.update(|state| {
        if let Err(err) = state.edit(name, value) {
            tracing::warn!(%err, "ignored input from unexpected form control");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn linked_rows_render_as_anchors() {
        let html = view! { <ContactMethods methods=contact_methods(&BUSINESS) /> }.to_html();

        assert_eq!(html.matches("contact-row").count(), 3);
        assert!(html.contains("href=\"tel:(555) 123-4567\""));
        assert!(html.contains("href=\"mailto:contact@aquaflow.com\""));
        assert!(html.contains("<p class=\"contact-value\">"));
        assert!(html.contains("Los Angeles, CA"));
    }

    #[test]
    fn form_renders_typed_required_controls() {
        let html = view! { <ContactForm /> }.to_html();

        assert_eq!(html.matches("<input").count(), 3);
        assert_eq!(html.matches("<textarea").count(), 1);
        for kind in ["text", "email", "tel"] {
            assert!(html.contains(&format!("type=\"{kind}\"")), "missing {kind} input");
        }
        for field in FIELDS {
            assert!(html.contains(&format!("name=\"{}\"", field.name())));
            assert!(html.contains(&format!("placeholder=\"{}\"", field.placeholder())));
        }
        assert_eq!(html.matches(" required").count(), 4);
        assert!(html.contains("type=\"submit\""));
    }

    #[test]
    fn no_rows_renders_empty_panel() {
        let html = view! { <ContactMethods methods=Vec::new() /> }.to_html();
        assert!(html.contains("contact-methods"));
        assert!(!html.contains("contact-row"));
    }
}
