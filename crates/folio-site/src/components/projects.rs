//! Projects section with category filters and a project detail overlay.

use dioxus::prelude::*;
use folio_core::{filter_projects, Project, ProjectFilter, Section};

use crate::settings;

use super::{PageSection, SectionHeading};

#[component]
pub fn Projects() -> Element {
    let mut filter = use_signal(ProjectFilter::default);
    let mut selected = use_signal(|| None::<u32>);
    let content = settings::portfolio()?;
    let active = *filter.read();
    let visible = filter_projects(&content.projects, active);
    let github = content
        .socials
        .iter()
        .find(|s| s.name == "GitHub")
        .map(|s| s.url.clone());
    let selected_id = *selected.read();
    let open_project = selected_id
        .and_then(|id| content.projects.iter().find(|p| p.id == id))
        .cloned();

    rsx! {
        PageSection {
            section: Section::Projects,
            variant: "projects".to_string(),

            SectionHeading {
                title: "Featured".to_string(),
                accent: "Projects".to_string(),
                subtitle: "Things I've built while learning, from interactive 3D sites to everyday tools".to_string(),
            }

            div {
                class: "filter-bar",
                for option in ProjectFilter::options() {
                    button {
                        key: "{option.key()}",
                        class: if option == active { "filter-btn active" } else { "filter-btn" },
                        onclick: move |_| {
                            tracing::debug!(filter = option.key(), "Project filter changed");
                            filter.set(option);
                        },
                        "{option.label()}"
                    }
                }
            }

            div {
                class: "project-grid",
                for project in visible {
                    ProjectCard {
                        key: "{project.id}",
                        project: project.clone(),
                        onselect: move |id: u32| {
                            tracing::debug!(project = id, "Opened project details");
                            selected.set(Some(id));
                        },
                    }
                }
            }

            if let Some(url) = github {
                div {
                    class: "projects-footer",
                    a {
                        class: "btn btn-outline",
                        href: "{url}",
                        target: "_blank",
                        "View All Projects on GitHub"
                    }
                }
            }

            if let Some(project) = open_project {
                ProjectDetail {
                    project,
                    onclose: move |_| selected.set(None),
                }
            }
        }
    }
}

/// A single project card. Clicking it opens the detail overlay.
#[component]
fn ProjectCard(project: Project, onselect: EventHandler<u32>) -> Element {
    let id = project.id;

    rsx! {
        article {
            class: if project.featured { "glass-card project-card featured" } else { "glass-card project-card" },
            onclick: move |_| onselect.call(id),

            div {
                class: "project-banner",
                span { class: "project-emoji", "{project.emoji}" }
                if project.featured {
                    span { class: "featured-badge", "⭐ Featured" }
                }
                span {
                    class: "status-badge {project.status.css_class()}",
                    "{project.status.label()}"
                }
            }

            div {
                class: "project-body",
                h3 { class: "project-title", "{project.title}" }
                p { class: "project-description", "{project.description}" }
                div {
                    class: "tag-cloud",
                    for tag in project.tags.iter() {
                        span { key: "{tag}", class: "tag", "{tag}" }
                    }
                }
                div {
                    class: "project-links",
                    a {
                        class: "project-link",
                        href: "{project.live_url}",
                        target: "_blank",
                        onclick: move |evt| evt.stop_propagation(),
                        "Live Demo ↗"
                    }
                    a {
                        class: "project-link",
                        href: "{project.github_url}",
                        target: "_blank",
                        onclick: move |evt| evt.stop_propagation(),
                        "Code"
                    }
                }
            }
        }
    }
}

/// Full-screen overlay with a project's write-up, features, challenges and
/// technology groups. Clicking the backdrop closes it.
#[component]
fn ProjectDetail(project: Project, onclose: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "project-overlay",
            onclick: move |_| onclose.call(()),

            div {
                class: "glass-card project-detail",
                onclick: move |evt| evt.stop_propagation(),

                div {
                    class: "project-detail-header",
                    div {
                        h2 { "{project.emoji} {project.title}" }
                        div {
                            class: "project-meta",
                            span { "📅 {project.date}" }
                            span { "⏱ {project.duration}" }
                            span {
                                class: "status-badge {project.status.css_class()}",
                                "{project.status.label()}"
                            }
                        }
                    }
                    button {
                        class: "icon-btn project-detail-close",
                        title: "Close",
                        onclick: move |_| onclose.call(()),
                        "×"
                    }
                }

                p { class: "project-long-description", "{project.long_description}" }

                div {
                    class: "project-detail-grid",
                    div {
                        h3 { "Key Features" }
                        ul {
                            class: "detail-list",
                            for feature in project.features.iter() {
                                li { key: "{feature}", span { class: "detail-check", "✓" } " {feature}" }
                            }
                        }
                    }
                    div {
                        h3 { "Challenges Overcome" }
                        ul {
                            class: "detail-list",
                            for challenge in project.challenges.iter() {
                                li { key: "{challenge}", span { class: "detail-bolt", "⚡" } " {challenge}" }
                            }
                        }
                    }
                }

                h3 { "Technologies Used" }
                for group in project.technologies.iter() {
                    div {
                        key: "{group.area}",
                        class: "tech-group",
                        h4 { class: "tech-area", "{group.area}" }
                        div {
                            class: "tag-cloud",
                            for item in group.items.iter() {
                                span { key: "{item}", class: "tag", "{item}" }
                            }
                        }
                    }
                }

                div {
                    class: "project-detail-actions",
                    a {
                        class: "btn btn-primary",
                        href: "{project.live_url}",
                        target: "_blank",
                        "View Live ↗"
                    }
                    a {
                        class: "btn btn-outline",
                        href: "{project.github_url}",
                        target: "_blank",
                        "View Code"
                    }
                }
            }
        }
    }
}
