//! About section: personal story, current focus, highlights and stats.

use dioxus::prelude::*;
use folio_core::Section;

use crate::settings;

use super::{PageSection, SectionHeading};

#[component]
pub fn About() -> Element {
    let content = settings::portfolio()?;
    let profile = &content.profile;

    rsx! {
        PageSection {
            section: Section::About,
            variant: "about".to_string(),

            span { class: "section-badge", "🙋‍♂️ Get to know me" }
            SectionHeading {
                title: "About".to_string(),
                accent: "Me".to_string(),
                subtitle: "A passionate web developer on an exciting journey to master the art of creating immersive digital experiences".to_string(),
            }

            div {
                class: "about-grid",

                div {
                    class: "glass-card about-story",
                    h3 { "My Journey" }
                    for (i, paragraph) in profile.about.iter().enumerate() {
                        p { key: "{i}", "{paragraph}" }
                    }
                }

                div {
                    class: "glass-card about-mastering",
                    h4 { "Currently Mastering" }
                    div {
                        class: "tag-cloud",
                        for tech in profile.mastering.iter() {
                            span { key: "{tech}", class: "tag", "{tech}" }
                        }
                    }
                }
            }

            div {
                class: "highlight-grid",
                for highlight in content.highlights.iter() {
                    div {
                        key: "{highlight.title}",
                        class: "glass-card highlight-card",
                        div { class: "highlight-icon", "{highlight.icon}" }
                        h4 { "{highlight.title}" }
                        p { "{highlight.description}" }
                    }
                }
            }

            div {
                class: "stat-grid",
                for stat in content.stats.iter() {
                    StatCard {
                        key: "{stat.label}",
                        value: stat.value.clone(),
                        label: stat.label.clone(),
                        icon: stat.icon.clone(),
                    }
                }
            }
        }
    }
}

/// A single stat.
#[component]
fn StatCard(value: String, label: String, icon: String) -> Element {
    rsx! {
        div {
            class: "glass-card stat-card",
            div { class: "stat-icon", "{icon}" }
            div { class: "stat-value gradient-text", "{value}" }
            div { class: "stat-label", "{label}" }
        }
    }
}
