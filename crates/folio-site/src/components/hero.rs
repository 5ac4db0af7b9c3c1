//! Landing section with the greeting and calls to action.

use dioxus::prelude::*;
use folio_core::Section;

use crate::settings;
use crate::state::use_page;

use super::PageSection;

#[component]
pub fn Hero() -> Element {
    let mut page = use_page();
    let content = settings::portfolio()?;
    let profile = &content.profile;

    rsx! {
        PageSection {
            section: Section::Home,
            variant: "hero".to_string(),

            div { class: "hero-glow" }

            div {
                class: "hero-content",

                span { class: "hero-badge", "👋 Welcome!" }

                h1 {
                    class: "hero-title",
                    "I'm "
                    span { class: "gradient-text glow-text", "{profile.first_name}" }
                }

                p { class: "hero-role", "{profile.role}" }
                p { class: "hero-tagline", "{profile.tagline}" }

                div {
                    class: "hero-actions",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| page.go_to(Section::Projects),
                        "View My Work ↗"
                    }
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| page.go_to(Section::Contact),
                        "Get In Touch"
                    }
                }

                div {
                    class: "hero-socials",
                    for social in content.socials.iter() {
                        a {
                            key: "{social.name}",
                            class: "social-icon",
                            href: "{social.url}",
                            title: "{social.name}",
                            target: if social.opens_externally() { "_blank" } else { "_self" },
                            "{social.icon}"
                        }
                    }
                }
            }

            button {
                class: "scroll-cue",
                onclick: move |_| page.go_to(Section::About),
                span { "Scroll Down" }
                span { class: "scroll-cue-arrow", "↓" }
            }
        }
    }
}
