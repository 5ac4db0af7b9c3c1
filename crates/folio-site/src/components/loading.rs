//! Loading screen shown while the page starts.

use dioxus::prelude::*;

use crate::settings;

#[component]
pub fn LoadingScreen() -> Element {
    let first_name = settings::portfolio()?.profile.first_name.clone();

    rsx! {
        div {
            class: "loading-screen",
            div {
                class: "loading-orbit",
                div { class: "loading-ring" }
                div { class: "loading-ring loading-ring-inner" }
            }
            h1 { class: "loading-name gradient-text", "{first_name}" }
            div {
                class: "loading-dots",
                for i in 0..3u32 {
                    span { key: "{i}", class: "loading-dot loading-dot-{i}" }
                }
            }
            p { class: "loading-label", "Loading" }
            div { class: "loading-bar", div { class: "loading-bar-fill" } }
        }
    }
}
