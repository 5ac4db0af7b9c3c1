//! Contact section: social cards and the contact form.

use dioxus::prelude::*;
use folio_core::validate::{message_progress, MESSAGE_MIN_LEN};
use folio_core::{Field, Section, SubmissionStatus};

use crate::settings;
use crate::state::ContactState;

use super::{PageSection, SectionHeading};

#[component]
pub fn Contact() -> Element {
    let content = settings::portfolio()?;

    rsx! {
        PageSection {
            section: Section::Contact,
            variant: "contact".to_string(),

            SectionHeading {
                title: "Get In".to_string(),
                accent: "Touch".to_string(),
                subtitle: "Have a project in mind or just want to chat? I'd love to hear from you.".to_string(),
            }

            div {
                class: "contact-grid",

                div {
                    class: "contact-info",

                    div {
                        class: "glass-card",
                        h3 { "Let's Start a Conversation" }
                        ul {
                            class: "contact-facts",
                            li { "📍 Melbourne, Australia" }
                            li { "🕘 Available 9 AM - 6 PM (AEDT)" }
                            li { "☕ Always ready for coffee chats!" }
                        }
                    }

                    div {
                        class: "glass-card",
                        h3 { "Connect With Me" }
                        div {
                            class: "social-cards",
                            for social in content.socials.iter() {
                                a {
                                    key: "{social.name}",
                                    class: "social-card",
                                    href: "{social.url}",
                                    target: if social.opens_externally() { "_blank" } else { "_self" },
                                    span { class: "social-card-icon", "{social.icon}" }
                                    div {
                                        div { class: "social-card-name", "{social.name}" }
                                        div { class: "social-card-description", "{social.description}" }
                                    }
                                }
                            }
                        }
                    }
                }

                ContactForm {}
            }
        }
    }
}

/// The contact form with inline validation and submission banners.
#[component]
pub fn ContactForm() -> Element {
    let mut contact = use_hook(ContactState::new);
    let snapshot = contact.form.read().clone();
    let status = snapshot.status();
    let submitting = snapshot.is_submitting();

    rsx! {
        form {
            class: "glass-card contact-form",
            onsubmit: move |evt| {
                evt.prevent_default();
                contact.submit();
            },

            h3 { "Send Me a Message" }

            div {
                class: "form-row",
                FormField { contact, field: Field::Name }
                FormField { contact, field: Field::Email }
            }
            FormField { contact, field: Field::Subject }
            FormField { contact, field: Field::Message }

            button {
                r#type: "submit",
                class: "btn btn-primary btn-submit",
                disabled: !snapshot.can_submit(),
                if submitting {
                    span { class: "spinner" }
                    span { "Sending Message..." }
                } else {
                    span { "Send Message ➤" }
                }
            }

            {match status {
                SubmissionStatus::Success => rsx! {
                    div {
                        class: "form-banner banner-success",
                        p { class: "banner-title", "Message sent successfully!" }
                        p { "Thank you for reaching out. I'll get back to you soon!" }
                    }
                },
                SubmissionStatus::Error => rsx! {
                    div {
                        class: "form-banner banner-error",
                        p { class: "banner-title", "Failed to send message" }
                        p { "Please try again or contact me directly via email." }
                    }
                },
                SubmissionStatus::Idle | SubmissionStatus::Submitting => rsx! {},
            }}
        }
    }
}

/// One labelled input with its inline error.
#[component]
fn FormField(contact: ContactState, field: Field) -> Element {
    let mut form = contact.form;
    let snapshot = form.read();
    let value = snapshot.value(field).to_string();
    let error = snapshot.error(field);
    let focused = snapshot.is_focused(field);
    drop(snapshot);

    let mut class = String::from("form-field");
    if focused {
        class.push_str(" focused");
    }
    if error.is_some() {
        class.push_str(" has-error");
    }
    let id = format!("contact-{field}");

    rsx! {
        div {
            class: "{class}",
            label { r#for: "{id}", "{field.label()}" }

            if field == Field::Message {
                textarea {
                    id: "{id}",
                    name: "{field}",
                    rows: "5",
                    placeholder: "{field.placeholder()}",
                    value: "{value}",
                    oninput: move |evt| form.write().update_field(field, evt.value()),
                    onfocus: move |_| form.write().focus_field(field),
                    onblur: move |_| form.write().blur_field(field),
                }
                MessageCounter { value: value.clone() }
            } else {
                input {
                    id: "{id}",
                    name: "{field}",
                    r#type: field.input_type(),
                    placeholder: "{field.placeholder()}",
                    value: "{value}",
                    oninput: move |evt| form.write().update_field(field, evt.value()),
                    onfocus: move |_| form.write().focus_field(field),
                    onblur: move |_| form.write().blur_field(field),
                }
            }

            if let Some(message) = error {
                p { class: "field-error", "⚠ {message}" }
            }
        }
    }
}

/// "n/10 minimum" character counter under the message box.
#[component]
fn MessageCounter(value: String) -> Element {
    let (count, met) = message_progress(&value);

    rsx! {
        div {
            class: if met { "char-counter met" } else { "char-counter" },
            "{count}/{MESSAGE_MIN_LEN} minimum"
        }
    }
}
