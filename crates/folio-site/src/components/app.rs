//! Root application component for the portfolio site.

use dioxus::prelude::*;

use crate::settings;
use crate::state::{PageContext, SCROLL_CONTAINER_ID};
use crate::theme::{ThemeProvider, ThemedRoot};

use super::{
    About, Contact, FloatingActionButton, FloatingShapes, Footer, Hero, LoadingScreen,
    Navigation, Projects, Skills, ThemeSelector,
};

/// Root application component.
#[component]
pub fn App() -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |_errors: ErrorContext| {
                tracing::error!("Render failed, showing fallback");
                rsx! { ErrorFallback {} }
            },
            ThemeProvider {
                ThemedRoot {
                    Site {}
                }
            }
        }
    }
}

/// Shows the loading screen for the configured delay, then the page.
#[component]
fn Site() -> Element {
    let mut loading = use_signal(|| true);

    use_future(move || async move {
        tokio::time::sleep(settings::site_config().loading_delay()).await;
        loading.set(false);
        tracing::debug!("Loading screen dismissed");
    });

    if *loading.read() {
        return rsx! { LoadingScreen {} };
    }

    rsx! { Page {} }
}

/// The scrollable page with every section and the floating controls.
#[component]
fn Page() -> Element {
    let mut page = use_context_provider(PageContext::new);

    rsx! {
        div {
            id: SCROLL_CONTAINER_ID,
            class: "page-scroll",
            onmounted: move |evt| {
                page.register_container(evt.data());
                // Measure once so sections already on screen are revealed.
                spawn(async move {
                    tokio::time::sleep(std::time::Duration::from_millis(100)).await;
                    page.refresh().await;
                });
            },
            onscroll: move |_| {
                spawn(page.refresh());
            },

            FloatingShapes {}

            div {
                class: "page-content",
                Navigation {}
                main {
                    Hero {}
                    About {}
                    Projects {}
                    Skills {}
                    Contact {}
                }
                Footer {}
            }
        }

        ThemeSelector {}
        FloatingActionButton {}
    }
}

/// Fallback shown when any section fails to render.
#[component]
fn ErrorFallback() -> Element {
    rsx! {
        div {
            class: "error-fallback",
            div {
                class: "error-card",
                h2 { "Something went wrong" }
                p { "Please refresh the page to try again" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        tracing::info!("Reloading after render failure");
                        document::eval("window.location.reload()");
                    },
                    "Refresh Page"
                }
            }
        }
    }
}
