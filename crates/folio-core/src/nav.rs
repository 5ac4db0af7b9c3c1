//! Page sections, active-link tracking and reveal-on-scroll.
//!
//! All positions are CSS pixels relative to the top of the viewport, as
//! reported by the element's client rect.

use std::collections::HashSet;
use std::fmt;

/// Horizontal line the active section must cross.
pub const ACTIVE_LINE_Y: f64 = 100.0;

/// Scroll offset after which the navigation bar gets its backdrop.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

/// Scroll offset after which the scroll-to-top action appears.
pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;

/// Height reserved for the fixed navigation bar when jumping to a section.
pub const HEADER_OFFSET: f64 = 80.0;

/// Fraction of a section that must be on screen before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    About,
    Projects,
    Skills,
    Contact,
}

impl Section {
    /// DOM id of the section element.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Section::Home => "⌂",
            Section::About => "☺",
            Section::Projects => "▣",
            Section::Skills => "✦",
            Section::Contact => "✉",
        }
    }

    /// Sections in page order.
    pub fn all() -> &'static [Section] {
        &[
            Section::Home,
            Section::About,
            Section::Projects,
            Section::Skills,
            Section::Contact,
        ]
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Vertical extent of a section relative to the viewport top.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn height(&self) -> f64 {
        (self.bottom - self.top).max(0.0)
    }

    pub fn contains(&self, y: f64) -> bool {
        self.top <= y && self.bottom >= y
    }
}

/// First section (in the given order) spanning the activation line.
pub fn active_section(bounds: &[(Section, SectionBounds)]) -> Option<Section> {
    bounds
        .iter()
        .find(|(_, b)| b.contains(ACTIVE_LINE_Y))
        .map(|(s, _)| *s)
}

/// Document scroll offset that brings an element just below the header.
pub fn scroll_target(element_top: f64, page_offset: f64) -> f64 {
    (element_top + page_offset - HEADER_OFFSET).max(0.0)
}

/// Fraction of the section's height inside a viewport of the given height.
pub fn visible_fraction(bounds: SectionBounds, viewport_height: f64) -> f64 {
    let height = bounds.height();
    if height <= 0.0 {
        return 0.0;
    }
    let overlap = bounds.bottom.min(viewport_height) - bounds.top.max(0.0);
    (overlap.max(0.0) / height).min(1.0)
}

/// Navigation bar state, recomputed on every scroll event.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavState {
    pub active: Section,
    pub scrolled: bool,
    pub show_scroll_top: bool,
    pub menu_open: bool,
}

impl NavState {
    /// Updates from the current scroll offset and section bounds. The
    /// active section is kept when no section spans the activation line.
    /// Returns whether anything changed.
    pub fn on_scroll(&mut self, scroll_y: f64, bounds: &[(Section, SectionBounds)]) -> bool {
        let before = self.clone();
        self.scrolled = scroll_y > SCROLLED_THRESHOLD;
        self.show_scroll_top = scroll_y > SCROLL_TOP_THRESHOLD;
        if let Some(section) = active_section(bounds) {
            self.active = section;
        }
        *self != before
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

/// Reveals each section once, the first time enough of it is on screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealTracker {
    revealed: HashSet<Section>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if this observation newly revealed the section.
    pub fn observe(&mut self, section: Section, bounds: SectionBounds, viewport_height: f64) -> bool {
        if self.revealed.contains(&section) {
            return false;
        }
        if visible_fraction(bounds, viewport_height) >= REVEAL_THRESHOLD {
            self.revealed.insert(section);
            return true;
        }
        false
    }

    pub fn is_revealed(&self, section: Section) -> bool {
        self.revealed.contains(&section)
    }
}
