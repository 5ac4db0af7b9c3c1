//! State management for the portfolio site.

pub mod contact;
pub mod page;

pub use contact::*;
pub use page::*;
