//! UI components for the portfolio site.

mod about;
mod app;
mod background;
mod contact;
mod floating_action;
mod footer;
mod hero;
mod loading;
mod navigation;
mod projects;
mod section;
mod skills;
mod theme_selector;

pub use about::*;
pub use app::*;
pub use background::*;
pub use contact::*;
pub use floating_action::*;
pub use footer::*;
pub use hero::*;
pub use loading::*;
pub use navigation::*;
pub use projects::*;
pub use section::*;
pub use skills::*;
pub use theme_selector::*;
