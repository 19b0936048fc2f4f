//! Theme system for starter-tui
//!
//! This module owns the light/dark preference, the toggle state machine
//! with its timed visual transition, the role-based color sets used by the
//! UI, and the on-disk persistence of the chosen preference.

pub mod loader;
pub mod models;
pub mod parser;
pub mod store;
pub mod switcher;

#[cfg(test)]
mod tests;

pub use loader::load_theme;
pub use models::{Theme, ThemePreference};
pub use switcher::{PendingFlip, ResetToken, ThemeSwitcher, TRANSITION_DURATION};
