//! Tragos Library
//!
//! Core library for the Tragos desktop application: a small drinks-review
//! site with local accounts, reviews, comments and a contact form, all kept
//! in a key-value store on disk.

pub mod app;
pub mod drink;
pub mod notice;
pub mod photo;
pub mod site;
pub mod storage;
pub mod types;
pub mod ui;
pub mod view;
