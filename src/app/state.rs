// app/state.rs

use std::path::PathBuf;

use super::actions::{Action, Actions};
use super::cards::CardsList;
use crate::config::SiteConfig;
use crate::locales::{Catalog, Locale, LocaleSwitcher};
use crate::theme::{Theme, ThemePreference, ThemeSwitcher};

pub struct AppState {
    // App
    pub actions: Actions,
    is_loading: bool,

    // Site
    pub site: SiteConfig,

    // Theme
    pub switcher: ThemeSwitcher,
    pub theme: Theme,
    themes_dir: PathBuf,
    theme_override: Option<ThemePreference>,

    // Locale
    pub locales: LocaleSwitcher,

    // UI
    pub cards: CardsList,
    pub show_help: bool,
    pub show_logs: bool,
}

impl AppState {
    pub fn new(
        site: SiteConfig,
        themes_dir: PathBuf,
        theme_override: Option<ThemePreference>,
        locale: Locale,
    ) -> Self {
        AppState {
            actions: vec![
                Action::CycleLocale,
                Action::NextCard,
                Action::PreviousCard,
                Action::Quit,
                Action::ToggleHelp,
                Action::ToggleLogs,
                Action::ToggleTheme,
            ]
            .into(),
            is_loading: true,
            site,
            switcher: ThemeSwitcher::default(),
            theme: Theme::default(),
            themes_dir,
            theme_override,
            locales: LocaleSwitcher::new(locale),
            cards: CardsList::default(),
            show_help: true,
            show_logs: false,
        }
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn theme_override(&self) -> Option<ThemePreference> {
        self.theme_override
    }

    pub fn themes_dir(&self) -> &PathBuf {
        &self.themes_dir
    }

    /// The message catalog for the active locale.
    pub fn catalog(&self) -> &'static Catalog {
        self.locales.catalog()
    }
}
