//! Page section wrapper with reveal-on-scroll.

use dioxus::prelude::*;
use folio_core::Section;

use crate::state::use_page;

/// A top-level page section. Registers itself for measurement and gains
/// the `revealed` class the first time enough of it scrolls into view.
#[component]
pub fn PageSection(section: Section, variant: String, children: Element) -> Element {
    let mut page = use_page();
    let revealed = if page.is_revealed(section) { "revealed" } else { "" };

    rsx! {
        section {
            id: "{section.id()}",
            class: "page-section {variant} reveal {revealed}",
            onmounted: move |evt| page.register_section(section, evt.data()),
            {children}
        }
    }
}

/// Centered section title with a gradient underline.
#[component]
pub fn SectionHeading(title: String, accent: String, subtitle: String) -> Element {
    rsx! {
        div {
            class: "section-heading",
            h2 {
                class: "section-title",
                "{title} "
                span { class: "gradient-text", "{accent}" }
            }
            div { class: "section-rule" }
            p { class: "section-subtitle", "{subtitle}" }
        }
    }
}
