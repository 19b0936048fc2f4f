// config.rs

//! Site configuration: the static metadata the shell renders, plus the
//! on-disk paths the application reads and writes.

use std::{
    fs,
    path::{Path, PathBuf},
};

use color_eyre::eyre::{eyre, Result};
use log::info;
use serde::{Deserialize, Serialize};

const SITE_FILE_NAME: &str = "site.yml";
const CONFIG_DIR: &str = ".config";
const APP_CONFIG_DIR: &str = "starter-tui";
const PREFERENCE_FILE_NAME: &str = "preference.yml";
const THEMES_DIR_NAME: &str = "themes";

/// Static site metadata, editable by the user in `site.yml`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub name: String,
    pub description: String,
    pub repository: String,
    pub author_name: String,
    pub author_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Starter TUI".to_string(),
            description: "A terminal starter with theming, localization and YAML configuration."
                .to_string(),
            repository: "https://github.com/yourusername/starter-tui".to_string(),
            author_name: "Your Name".to_string(),
            author_url: "https://yourwebsite.com".to_string(),
        }
    }
}

/// Locations of everything the application persists.
#[derive(Clone, Debug)]
pub struct ConfigPaths {
    pub site_file_path: PathBuf,
    pub preference_file_path: PathBuf,
    pub themes_dir: PathBuf,
}

/// Build the config directory layout under `$HOME/.config/starter-tui`,
/// creating directories on first run.
pub fn get_or_build_paths() -> Result<ConfigPaths> {
    match dirs::home_dir() {
        Some(home) => {
            let path = Path::new(&home);
            let home_config_dir = path.join(CONFIG_DIR);
            let app_config_dir = home_config_dir.join(APP_CONFIG_DIR);

            if !home_config_dir.exists() {
                fs::create_dir(&home_config_dir)?;
            }

            if !app_config_dir.exists() {
                fs::create_dir(&app_config_dir)?;
            }

            let themes_dir = app_config_dir.join(THEMES_DIR_NAME);
            if !themes_dir.exists() {
                fs::create_dir(&themes_dir)?;
            }

            Ok(ConfigPaths {
                site_file_path: app_config_dir.join(SITE_FILE_NAME),
                preference_file_path: app_config_dir.join(PREFERENCE_FILE_NAME),
                themes_dir,
            })
        }
        None => Err(eyre!("No $HOME directory found for site config")),
    }
}

/// Read the site config, writing the defaults on first run so the user
/// has a file to edit.
pub fn load_or_init_site(paths: &ConfigPaths) -> Result<SiteConfig> {
    if paths.site_file_path.exists() {
        let content = fs::read_to_string(&paths.site_file_path)?;
        let site: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(site)
    } else {
        let site = SiteConfig::default();
        fs::write(&paths.site_file_path, serde_yaml::to_string(&site)?)?;
        info!(
            "Wrote default site config to {}",
            paths.site_file_path.display()
        );
        Ok(site)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_paths(dir: &Path) -> ConfigPaths {
        ConfigPaths {
            site_file_path: dir.join(SITE_FILE_NAME),
            preference_file_path: dir.join(PREFERENCE_FILE_NAME),
            themes_dir: dir.join(THEMES_DIR_NAME),
        }
    }

    #[test]
    fn test_first_run_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let paths = temp_paths(dir.path());

        let site = load_or_init_site(&paths).unwrap();
        assert_eq!(site, SiteConfig::default());
        assert!(paths.site_file_path.exists());

        // Second load reads the file back unchanged
        let again = load_or_init_site(&paths).unwrap();
        assert_eq!(again, site);
    }

    #[test]
    fn test_partial_file_uses_defaults_for_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let paths = temp_paths(dir.path());
        fs::write(&paths.site_file_path, "name: \"My Site\"\n").unwrap();

        let site = load_or_init_site(&paths).unwrap();
        assert_eq!(site.name, "My Site");
        assert_eq!(site.description, SiteConfig::default().description);
    }
}
