//! Fixed navigation bar with desktop links and a mobile menu.

use dioxus::prelude::*;
use folio_core::Section;

use crate::settings;
use crate::state::use_page;

#[component]
pub fn Navigation() -> Element {
    let mut page = use_page();
    let nav = page.nav.read().clone();
    let brand = settings::portfolio()?.profile.name.clone();

    rsx! {
        nav {
            class: if nav.scrolled { "site-nav scrolled" } else { "site-nav" },

            div {
                class: "nav-inner",

                button {
                    class: "nav-brand gradient-text",
                    onclick: move |_| page.go_to(Section::Home),
                    "{brand}"
                }

                div {
                    class: "nav-links",
                    for section in Section::all().iter().copied() {
                        NavLink { key: "{section.id()}", section, active: nav.active == section }
                    }
                }

                button {
                    class: "nav-menu-toggle",
                    onclick: move |_| page.nav.write().toggle_menu(),
                    if nav.menu_open { "✕" } else { "☰" }
                }
            }

            if nav.menu_open {
                div {
                    class: "nav-mobile",
                    for section in Section::all().iter().copied() {
                        NavLink { key: "m-{section.id()}", section, active: nav.active == section }
                    }
                }
            }
        }
    }
}

/// One navigation link.
#[component]
fn NavLink(section: Section, active: bool) -> Element {
    let mut page = use_page();

    rsx! {
        button {
            class: if active { "nav-link active" } else { "nav-link" },
            onclick: move |_| page.go_to(section),
            span { class: "nav-link-icon", "{section.icon()}" }
            span { "{section.label()}" }
        }
    }
}
