//! Theme loading functionality

use std::fs;
use std::path::Path;

use color_eyre::Result;
use log::{debug, info, warn};

use super::models::{Theme, ThemeFile, ThemePreference};

/// Load the role set for a preference, applying the user override file
/// for that preference when one exists. Falls back to the built-in role
/// set on any error.
pub fn load_theme(themes_dir: &Path, preference: ThemePreference) -> Theme {
    let path = themes_dir.join(format!("{preference}.yml"));
    if !path.exists() {
        debug!("No theme override at {}, using built-in", path.display());
        return Theme::built_in(preference);
    }
    match try_load_theme(&path, preference) {
        Ok(theme) => {
            info!("Loaded theme override: {}", theme.name);
            theme
        }
        Err(e) => {
            warn!(
                "Failed to load theme override {}: {e}. Using built-in {preference} theme.",
                path.display()
            );
            Theme::built_in(preference)
        }
    }
}

/// Attempt to load an override file, returning errors for handling
fn try_load_theme(path: &Path, preference: ThemePreference) -> Result<Theme> {
    let content = fs::read_to_string(path)?;
    let file: ThemeFile = serde_yaml::from_str(&content)?;

    let base = Theme::built_in(preference);
    Ok(Theme {
        name: file.name.unwrap_or(base.name),
        roles: base.roles.merged(file.roles),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;
    use std::io::Write;

    #[test]
    fn test_missing_override_uses_built_in() {
        let dir = tempfile::tempdir().unwrap();
        let theme = load_theme(dir.path(), ThemePreference::Dark);
        assert_eq!(theme.name, "Dark");
    }

    #[test]
    fn test_partial_override_keeps_built_in_roles() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = fs::File::create(dir.path().join("light.yml")).unwrap();
        writeln!(file, "name: \"Paper\"\nroles:\n  accent: \"#bd93f9\"").unwrap();

        let theme = load_theme(dir.path(), ThemePreference::Light);
        assert_eq!(theme.name, "Paper");
        assert_eq!(theme.roles.accent(), Color::Rgb(189, 147, 249));
        // Roles not overridden keep the built-in light values
        assert_eq!(theme.roles.background(), Color::White);
    }

    #[test]
    fn test_invalid_override_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = fs::File::create(dir.path().join("dark.yml")).unwrap();
        writeln!(file, "roles:\n  accent: \"not_a_color\"").unwrap();

        let theme = load_theme(dir.path(), ThemePreference::Dark);
        assert_eq!(theme.name, "Dark");
    }
}
