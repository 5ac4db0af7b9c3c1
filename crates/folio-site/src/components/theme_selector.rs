//! Floating theme selector panel.

use dioxus::prelude::*;
use folio_core::{ThemeId, ThemeRegistry, ThemeState};

use crate::theme::use_theme;

#[component]
pub fn ThemeSelector() -> Element {
    let mut theme = use_theme();
    let state = theme.state();
    let open = *theme.selector_open.read();
    let (theme_name, mode_line) = preview_caption(&state);

    rsx! {
        div {
            class: "theme-selector",

            if open {
                div {
                    class: "glass-card theme-panel",

                    div {
                        class: "theme-panel-header",
                        h4 { "Theme Settings" }
                        button {
                            class: "icon-btn",
                            onclick: move |_| theme.selector_open.set(false),
                            "✕"
                        }
                    }

                    div {
                        class: "theme-mode-row",
                        span { "Dark Mode" }
                        button {
                            class: if state.is_dark_mode { "mode-switch on" } else { "mode-switch" },
                            title: if state.is_dark_mode { "Switch to light mode" } else { "Switch to dark mode" },
                            onclick: move |_| {
                                theme.toggle_dark_mode();
                            },
                            span { class: "mode-switch-knob" }
                        }
                    }

                    div {
                        class: "theme-cards",
                        for (id, tokens) in ThemeRegistry::entries() {
                            ThemeCard {
                                key: "{id}",
                                id,
                                name: tokens.name.to_string(),
                                selected: id == state.theme_id,
                            }
                        }
                    }

                    div {
                        class: "theme-preview",
                        div { class: "theme-preview-swatch" }
                        div {
                            class: "theme-preview-text",
                            div { class: "theme-preview-name", "{theme_name}" }
                            span { "{mode_line}" }
                        }
                    }
                }
            }

            button {
                class: "theme-toggle-btn",
                title: "Theme Settings",
                onclick: move |_| {
                    let next = !*theme.selector_open.peek();
                    theme.selector_open.set(next);
                },
                "🎨"
            }
        }
    }
}

/// Selectable card for one registered theme.
#[component]
fn ThemeCard(id: ThemeId, name: String, selected: bool) -> Element {
    let mut theme = use_theme();
    let [from, to] = id.swatches();

    rsx! {
        button {
            class: if selected { "theme-card selected" } else { "theme-card" },
            onclick: move |_| {
                theme.change_theme(id.key());
            },
            div {
                class: "theme-card-swatches",
                span { class: "swatch", style: "background-color: {from}" }
                span { class: "swatch", style: "background-color: {to}" }
            }
            div {
                class: "theme-card-gradient",
                style: "background: linear-gradient(135deg, {from}, {to})",
            }
            span { class: "theme-card-name", "{name}" }
        }
    }
}

/// Theme name and mode line shown in the preview.
fn preview_caption(state: &ThemeState) -> (&'static str, &'static str) {
    let mode = if state.is_dark_mode {
        "Dark mode active"
    } else {
        "Light mode active"
    };
    (ThemeRegistry::get(state.theme_id).name, mode)
}
