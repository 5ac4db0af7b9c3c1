//! Portfolio site for Richie Kosasih
//!
//! A Dioxus desktop application rendering the portfolio sections over the
//! theme, contact form and content logic in `folio-core`.

pub mod components;
pub mod settings;
pub mod state;
pub mod theme;
