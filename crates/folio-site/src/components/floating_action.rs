//! Floating action button with contact and social shortcuts.

use dioxus::prelude::*;
use folio_core::Section;

use crate::settings;
use crate::state::use_page;

#[component]
pub fn FloatingActionButton() -> Element {
    let mut page = use_page();
    let mut open = use_signal(|| false);
    let content = settings::portfolio()?;
    let show_scroll_top = page.nav.read().show_scroll_top;
    let is_open = *open.read();

    rsx! {
        div {
            class: "fab",

            if show_scroll_top && !is_open {
                button {
                    class: "fab-scroll-top",
                    title: "Back to Top",
                    onclick: move |_| page.scroll_to_top(),
                    "↑"
                }
            }

            if is_open {
                div {
                    class: "fab-actions",
                    button {
                        class: "fab-action",
                        title: "Contact",
                        onclick: move |_| {
                            open.set(false);
                            page.go_to(Section::Contact);
                        },
                        "✉"
                    }
                    for social in content.socials.iter() {
                        a {
                            key: "{social.name}",
                            class: "fab-action",
                            title: "{social.name}",
                            href: "{social.url}",
                            target: if social.opens_externally() { "_blank" } else { "_self" },
                            "{social.icon}"
                        }
                    }
                }
            }

            button {
                class: if is_open { "fab-main open" } else { "fab-main" },
                onclick: move |_| open.set(!is_open),
                if is_open { "✕" } else { "☰" }
            }
        }
    }
}
