//! Theme data models

use std::fmt::{self, Display};

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use super::parser::SerializableColor;

/// The two-valued display mode a user can select.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// The other member of the pair. The flip is total, no third state
    /// can be produced.
    pub fn opposite(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    /// Parse a preference from its lowercase name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "light" => Some(ThemePreference::Light),
            "dark" => Some(ThemePreference::Dark),
            _ => None,
        }
    }
}

impl Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemePreference::Light => write!(f, "light"),
            ThemePreference::Dark => write!(f, "dark"),
        }
    }
}

/// A named set of color roles the UI renders with.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme name for identification
    pub name: String,
    /// Semantic color role assignments
    pub roles: Roles,
}

/// Semantic color role assignments for UI elements
#[derive(Debug, Clone)]
pub struct Roles {
    pub background: SerializableColor,
    pub text_primary: SerializableColor,
    pub text_muted: SerializableColor,
    pub accent: SerializableColor,
    pub selection_bg: SerializableColor,
    pub selection_fg: SerializableColor,
    pub border: SerializableColor,
    pub border_transition: SerializableColor,
    pub title: SerializableColor,
    pub hint: SerializableColor,
}

/// Partial role assignments read from a user override file.
/// Any role left out keeps the built-in value for that preference.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RolesOverride {
    pub background: Option<SerializableColor>,
    pub text_primary: Option<SerializableColor>,
    pub text_muted: Option<SerializableColor>,
    pub accent: Option<SerializableColor>,
    pub selection_bg: Option<SerializableColor>,
    pub selection_fg: Option<SerializableColor>,
    pub border: Option<SerializableColor>,
    pub border_transition: Option<SerializableColor>,
    pub title: Option<SerializableColor>,
    pub hint: Option<SerializableColor>,
}

/// Shape of a theme override file on disk.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThemeFile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub roles: RolesOverride,
}

impl Roles {
    // Convenience methods to get Color values for UI usage
    pub fn background(&self) -> Color {
        self.background.0
    }
    pub fn text_primary(&self) -> Color {
        self.text_primary.0
    }
    pub fn text_muted(&self) -> Color {
        self.text_muted.0
    }
    pub fn accent(&self) -> Color {
        self.accent.0
    }
    pub fn selection_bg(&self) -> Color {
        self.selection_bg.0
    }
    pub fn selection_fg(&self) -> Color {
        self.selection_fg.0
    }
    pub fn border(&self) -> Color {
        self.border.0
    }
    pub fn border_transition(&self) -> Color {
        self.border_transition.0
    }
    pub fn title(&self) -> Color {
        self.title.0
    }
    pub fn hint(&self) -> Color {
        self.hint.0
    }

    /// Apply a partial override on top of these roles.
    pub fn merged(mut self, over: RolesOverride) -> Self {
        if let Some(c) = over.background {
            self.background = c;
        }
        if let Some(c) = over.text_primary {
            self.text_primary = c;
        }
        if let Some(c) = over.text_muted {
            self.text_muted = c;
        }
        if let Some(c) = over.accent {
            self.accent = c;
        }
        if let Some(c) = over.selection_bg {
            self.selection_bg = c;
        }
        if let Some(c) = over.selection_fg {
            self.selection_fg = c;
        }
        if let Some(c) = over.border {
            self.border = c;
        }
        if let Some(c) = over.border_transition {
            self.border_transition = c;
        }
        if let Some(c) = over.title {
            self.title = c;
        }
        if let Some(c) = over.hint {
            self.hint = c;
        }
        self
    }
}

impl Theme {
    /// Built-in role set for a preference.
    pub fn built_in(preference: ThemePreference) -> Self {
        match preference {
            ThemePreference::Light => Theme::light(),
            ThemePreference::Dark => Theme::dark(),
        }
    }

    fn light() -> Self {
        Self {
            name: "Light".to_string(),
            roles: Roles {
                background: SerializableColor(Color::White),
                text_primary: SerializableColor(Color::Black),
                text_muted: SerializableColor(Color::DarkGray),
                accent: SerializableColor(Color::Blue),
                selection_bg: SerializableColor(Color::Blue),
                selection_fg: SerializableColor(Color::White),
                border: SerializableColor(Color::DarkGray),
                border_transition: SerializableColor(Color::Yellow),
                title: SerializableColor(Color::Blue),
                hint: SerializableColor(Color::DarkGray),
            },
        }
    }

    fn dark() -> Self {
        Self {
            name: "Dark".to_string(),
            roles: Roles {
                background: SerializableColor(Color::Reset),
                text_primary: SerializableColor(Color::Gray),
                text_muted: SerializableColor(Color::DarkGray),
                accent: SerializableColor(Color::LightCyan),
                selection_bg: SerializableColor(Color::Yellow),
                selection_fg: SerializableColor(Color::Black),
                border: SerializableColor(Color::Reset),
                border_transition: SerializableColor(Color::Yellow),
                title: SerializableColor(Color::LightCyan),
                hint: SerializableColor(Color::Gray),
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::built_in(ThemePreference::default())
    }
}
