//! Scroll-driven page state: active section, navigation styling and reveals.
//!
//! Sections and the scroll container register their mounted elements. Each
//! scroll event re-measures them and feeds the pure logic in
//! `folio_core::nav`.

use std::collections::HashMap;
use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::nav::{scroll_target, NavState, RevealTracker, Section, SectionBounds};

/// DOM id of the element that scrolls the whole page.
pub const SCROLL_CONTAINER_ID: &str = "page-scroll";

/// Shared page state provided via Dioxus context.
#[derive(Clone, Copy)]
pub struct PageContext {
    pub nav: Signal<NavState>,
    pub reveal: Signal<RevealTracker>,
    container: Signal<Option<Rc<MountedData>>>,
    sections: Signal<HashMap<Section, Rc<MountedData>>>,
}

impl PageContext {
    pub fn new() -> Self {
        Self {
            nav: Signal::new(NavState::default()),
            reveal: Signal::new(RevealTracker::new()),
            container: Signal::new(None),
            sections: Signal::new(HashMap::new()),
        }
    }

    pub fn register_container(&mut self, element: Rc<MountedData>) {
        self.container.set(Some(element));
    }

    pub fn register_section(&mut self, section: Section, element: Rc<MountedData>) {
        self.sections.write().insert(section, element);
    }

    pub fn is_revealed(&self, section: Section) -> bool {
        self.reveal.read().is_revealed(section)
    }

    /// Re-measures every registered section and updates navigation and
    /// reveal state. Signals are only written when something changed.
    pub async fn refresh(mut self) {
        let Some(container) = self.container.peek().clone() else {
            return;
        };
        let (offset, viewport) = match (
            container.get_scroll_offset().await,
            container.get_client_rect().await,
        ) {
            (Ok(offset), Ok(viewport)) => (offset, viewport),
            (Err(e), _) | (_, Err(e)) => {
                tracing::debug!(error = ?e, "Could not measure scroll container");
                return;
            }
        };

        let bounds = self.measure_sections(viewport.origin.y).await;

        let mut nav = self.nav.peek().clone();
        if nav.on_scroll(offset.y, &bounds) {
            if nav.active != self.nav.peek().active {
                tracing::debug!(section = %nav.active, "Active section changed");
            }
            self.nav.set(nav);
        }

        let mut reveal = self.reveal.peek().clone();
        let mut revealed_any = false;
        for (section, section_bounds) in &bounds {
            if reveal.observe(*section, *section_bounds, viewport.size.height) {
                tracing::debug!(section = %section, "Section revealed");
                revealed_any = true;
            }
        }
        if revealed_any {
            self.reveal.set(reveal);
        }
    }

    /// Smoothly scrolls so the section sits just below the navigation bar.
    pub async fn scroll_to(self, section: Section) {
        let Some(container) = self.container.peek().clone() else {
            return;
        };
        let Some(element) = self.sections.peek().get(&section).cloned() else {
            tracing::debug!(section = %section, "Section not mounted yet");
            return;
        };
        let (Ok(offset), Ok(viewport), Ok(rect)) = (
            container.get_scroll_offset().await,
            container.get_client_rect().await,
            element.get_client_rect().await,
        ) else {
            return;
        };
        let top = scroll_target(rect.origin.y - viewport.origin.y, offset.y);
        scroll_container_to(top);
    }

    /// Closes the mobile menu and starts scrolling to the section.
    pub fn go_to(&mut self, section: Section) {
        self.nav.write().close_menu();
        let page = *self;
        spawn(async move {
            page.scroll_to(section).await;
        });
    }

    pub fn scroll_to_top(&self) {
        scroll_container_to(0.0);
    }

    async fn measure_sections(&self, viewport_top: f64) -> Vec<(Section, SectionBounds)> {
        let elements: Vec<(Section, Rc<MountedData>)> = Section::all()
            .iter()
            .filter_map(|s| self.sections.peek().get(s).map(|e| (*s, Rc::clone(e))))
            .collect();

        let mut bounds = Vec::with_capacity(elements.len());
        for (section, element) in elements {
            match element.get_client_rect().await {
                Ok(rect) => {
                    let top = rect.origin.y - viewport_top;
                    bounds.push((section, SectionBounds::new(top, top + rect.size.height)));
                }
                Err(e) => tracing::debug!(section = %section, error = ?e, "Could not measure section"),
            }
        }
        bounds
    }
}

impl Default for PageContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the page context provided by the page root.
pub fn use_page() -> PageContext {
    use_context::<PageContext>()
}

fn scroll_container_to(top: f64) {
    document::eval(&format!(
        "document.getElementById('{SCROLL_CONTAINER_ID}')?.scrollTo({{top: {top}, behavior: 'smooth'}});"
    ));
}
