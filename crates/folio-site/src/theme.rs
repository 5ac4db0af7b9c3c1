//! Theme system for the portfolio site.
//!
//! A single [`ThemeController`] lives in a signal provided through context.
//! Components read its state and call its two mutations; the controller
//! pushes every change to the document through [`DocumentStyleScope`].

use dioxus::prelude::*;
use folio_core::{AppliedStyle, FileStore, StyleSink, ThemeController, ThemeState};

use crate::settings;

/// Style sink writing the theme variables onto the live document.
#[derive(Debug, Default)]
pub struct DocumentStyleScope {
    applications: usize,
}

impl StyleSink for DocumentStyleScope {
    fn apply(&mut self, style: &AppliedStyle) {
        document::eval(&style.to_css_script());
        self.applications += 1;
        tracing::debug!(
            light_mode = style.light_mode,
            applications = self.applications,
            "Applied theme to document"
        );
    }
}

/// The controller type used by the site.
pub type SiteThemeController = ThemeController<FileStore, DocumentStyleScope>;

/// Shared theme state provided via Dioxus context.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub controller: Signal<SiteThemeController>,
    /// Whether the theme selector panel is expanded.
    pub selector_open: Signal<bool>,
}

impl ThemeContext {
    pub fn state(&self) -> ThemeState {
        self.controller.read().state()
    }

    pub fn applied(&self) -> AppliedStyle {
        self.controller.read().applied()
    }

    pub fn change_theme(&mut self, key: &str) -> bool {
        self.controller.write().change_theme(key)
    }

    pub fn toggle_dark_mode(&mut self) -> bool {
        self.controller.write().toggle_dark_mode()
    }
}

/// Returns the theme context provided by [`ThemeProvider`].
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}

/// Loads the stored preference, applies it, and provides [`ThemeContext`].
#[component]
pub fn ThemeProvider(children: Element) -> Element {
    use_context_provider(|| {
        let path = settings::site_config().resolved_preferences_path();
        let mut controller = ThemeController::new(FileStore::open(path), DocumentStyleScope::default());
        controller.initialize();
        ThemeContext {
            controller: Signal::new(controller),
            selector_open: Signal::new(false),
        }
    });

    rsx! {
        {children}
    }
}

/// Root wrapper carrying the current theme variables and mode class.
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    let theme = use_theme();
    let state = theme.state();
    let vars = theme.applied().to_inline_style();

    rsx! {
        div {
            class: if state.is_dark_mode { "themed-root" } else { "themed-root light-mode" },
            "data-theme": "{state.theme_id}",
            style: "{vars}",
            {children}
        }
    }
}
