//! UI components
//!
//! Dioxus components. Each page pulls what it shows from the site on every
//! render and turns it into markup through the `view` functions.

pub mod layout;
pub mod notice;
pub mod pages;
mod style;

pub use layout::Layout;
