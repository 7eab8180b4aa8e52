//! Desktop onboarding journey stepper for Waymark
//!
//! This crate provides a Dioxus desktop view over `waymark-core`: progress
//! summary, flow diagram, step cards, recommendation panel and category
//! statistics, plus a plain-text summary for terminals.

pub mod components;
pub mod icons;
pub mod summary;
pub mod theme;
pub mod view;

/// CSS styles embedded at compile time.
pub const STYLES_CSS: &str = include_str!("../assets/styles.css");
