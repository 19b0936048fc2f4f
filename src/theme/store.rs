//! Preference persistence
//!
//! Persists the chosen theme preference between sessions so the next run
//! starts with the value the user last selected.

use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use color_eyre::eyre::Result;
use serde::{Deserialize, Serialize};

use super::models::ThemePreference;

/// On-disk record of the chosen preference
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredPreference {
    /// The preferred theme
    theme: ThemePreference,
    /// Unix timestamp when this record was written
    saved_at: u64,
}

/// Read the persisted preference, if any.
pub fn load_preference(path: &Path) -> Result<ThemePreference> {
    let content = fs::read_to_string(path)?;
    let stored: StoredPreference = serde_yaml::from_str(&content)?;
    Ok(stored.theme)
}

/// Write the preference to disk, creating the parent directory if needed.
pub fn save_preference(path: &Path, preference: ThemePreference) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_secs();
    let stored = StoredPreference {
        theme: preference,
        saved_at: now,
    };
    fs::write(path, serde_yaml::to_string(&stored)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preference.yml");

        save_preference(&path, ThemePreference::Dark).unwrap();
        assert_eq!(load_preference(&path).unwrap(), ThemePreference::Dark);

        save_preference(&path, ThemePreference::Light).unwrap();
        assert_eq!(load_preference(&path).unwrap(), ThemePreference::Light);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_preference(&dir.path().join("nope.yml")).is_err());
    }

    #[test]
    fn test_garbage_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preference.yml");
        fs::write(&path, "theme: plaid\n").unwrap();
        assert!(load_preference(&path).is_err());
    }
}
