//! Page footer with quick links, socials and a back-to-top button.

use chrono::Datelike;
use dioxus::prelude::*;
use folio_core::Section;

use crate::settings;
use crate::state::use_page;

#[component]
pub fn Footer() -> Element {
    let mut page = use_page();
    let content = settings::portfolio()?;
    let year = chrono::Local::now().year();
    let name = &content.profile.name;

    rsx! {
        footer {
            class: "site-footer",

            div {
                class: "footer-grid",

                div {
                    class: "footer-brand",
                    h3 { class: "gradient-text", "{name}" }
                    p {
                        "Passionate web developer crafting digital experiences with modern technologies. Always learning, always creating."
                    }
                    p { class: "footer-made-with", "Made with ♥ and ☕ using Rust" }
                }

                div {
                    class: "footer-links",
                    h4 { "Quick Links" }
                    for section in Section::all().iter().copied() {
                        button {
                            key: "{section.id()}",
                            class: "footer-link",
                            onclick: move |_| page.go_to(section),
                            "{section.label()}"
                        }
                    }
                }

                div {
                    class: "footer-socials",
                    h4 { "Let's Connect" }
                    div {
                        class: "footer-social-row",
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
            }

            div {
                class: "footer-bottom",
                span { "© {year} {name}. All rights reserved." }
                button {
                    class: "back-to-top",
                    title: "Back to Top",
                    onclick: move |_| page.scroll_to_top(),
                    "↑"
                }
            }
        }
    }
}
