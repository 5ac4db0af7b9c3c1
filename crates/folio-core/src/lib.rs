//! Logic behind the folio portfolio site.
//!
//! Provides the theme registry and controller with its preference store,
//! contact form validation and submission, the typed portfolio content,
//! navigation and reveal tracking, and the decorative background math.
//! Nothing here depends on the UI framework.

pub mod background;
pub mod config;
pub mod contact;
pub mod content;
pub mod controller;
pub mod error;
pub mod nav;
pub mod prefs;
pub mod style;
pub mod theme;
pub mod validate;

pub use config::SiteConfig;
pub use contact::{
    deliver, ContactForm, ContactMessage, DismissTicket, FormCell, MessageSender, SimulatedSender,
    SubmissionStatus, SubmitRejected, SubmitTicket, DISMISS_DELAY,
};
pub use content::{
    filter_projects, PortfolioContent, Project, ProjectCategory, ProjectFilter, ProjectStatus,
    SkillTier, TechGroup,
};
pub use controller::{ThemeController, ThemeState};
pub use error::{ConfigError, ContentError, PrefsError, SendError};
pub use nav::{NavState, RevealTracker, Section, SectionBounds};
pub use prefs::{FileStore, MemoryStore, PreferenceStore, ThemePreference};
pub use style::{AppliedStyle, StyleSink, StyleVars};
pub use theme::{ThemeId, ThemeRegistry, ThemeTokens};
pub use validate::{validate, validate_all, validate_field, Field, FieldErrors, FormValues};
