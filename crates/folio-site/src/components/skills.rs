//! Skills section: category tabs, proficiency bars and learning goals.

use dioxus::prelude::*;
use folio_core::content::Skill;
use folio_core::Section;

use crate::settings;

use super::{PageSection, SectionHeading};

#[component]
pub fn Skills() -> Element {
    // Content validation guarantees at least one category.
    let mut selected = use_signal(|| {
        settings::portfolio()
            .ok()
            .and_then(|c| c.skill_categories.first())
            .map(|c| c.id.clone())
            .unwrap_or_default()
    });
    let content = settings::portfolio()?;
    let selected_id = selected.read().clone();
    let category = content.skill_category(&selected_id)?;

    rsx! {
        PageSection {
            section: Section::Skills,
            variant: "skills".to_string(),

            SectionHeading {
                title: "Skills &".to_string(),
                accent: "Expertise".to_string(),
                subtitle: "Where I am today and what I'm working towards".to_string(),
            }

            div {
                class: "tab-bar",
                for cat in content.skill_categories.iter() {
                    {
                        let id = cat.id.clone();
                        rsx! {
                            button {
                                key: "{cat.id}",
                                class: if cat.id == selected_id { "tab-btn active" } else { "tab-btn" },
                                onclick: move |_| selected.set(id.clone()),
                                span { "{cat.icon}" }
                                span { "{cat.title}" }
                            }
                        }
                    }
                }
            }

            div {
                class: "skill-category-header",
                h3 { "{category.icon} {category.title}" }
                p { class: "skill-category-description", "{category.description}" }
            }

            div {
                class: "skill-grid",
                for skill in category.skills.iter() {
                    SkillBar { key: "{skill.name}", skill: skill.clone() }
                }
            }

            div {
                class: "glass-card learning-goals",
                h3 { "Learning Goals" }
                for goal in content.learning_goals.iter() {
                    div {
                        key: "{goal.goal}",
                        class: "goal-row",
                        div {
                            class: "goal-header",
                            span { "{goal.icon} {goal.goal}" }
                            span { class: "goal-progress", "{goal.progress}%" }
                        }
                        div {
                            class: "progress-track",
                            div { class: "progress-fill", style: "width: {goal.progress}%" }
                        }
                    }
                }
            }
        }
    }
}

/// Proficiency bar for one skill.
#[component]
fn SkillBar(skill: Skill) -> Element {
    let tier = skill.tier();

    rsx! {
        div {
            class: "glass-card skill-card",
            div {
                class: "skill-header",
                span { class: "skill-icon", "{skill.icon}" }
                span { class: "skill-name", "{skill.name}" }
                span { class: "tier-badge {tier.css_class()}", "{tier.label()}" }
            }
            div {
                class: "progress-track",
                div { class: "progress-fill {tier.css_class()}", style: "width: {skill.level}%" }
            }
            div {
                class: "skill-footer",
                span { "{skill.level}%" }
                if let Some(experience) = &skill.experience {
                    span { class: "skill-experience", "{experience}" }
                }
            }
        }
    }
}
