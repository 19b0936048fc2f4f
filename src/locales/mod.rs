// locales/mod.rs

//! Locale switching and embedded message catalogs.
//!
//! Catalogs are flat key/value YAML files compiled into the binary. Lookup
//! falls back to the key itself so a missing message never breaks
//! rendering. Full message-resolution machinery (plurals, interpolation)
//! is deliberately not provided.

use std::collections::HashMap;
use std::fmt::{self, Display};
use std::sync::OnceLock;

use enum_iterator::{next_cycle, Sequence};
use log::error;
use serde::Deserialize;

const EN_CATALOG: &str = include_str!("../../locales/en.yml");
const FR_CATALOG: &str = include_str!("../../locales/fr.yml");

/// Locales the application ships catalogs for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Sequence)]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    /// BCP 47 style language code.
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }

    /// Parse a locale from its language code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Locale::En),
            "fr" => Some(Locale::Fr),
            _ => None,
        }
    }

    /// The message catalog for this locale, parsed once on first use.
    pub fn catalog(self) -> &'static Catalog {
        match self {
            Locale::En => {
                static CATALOG: OnceLock<Catalog> = OnceLock::new();
                CATALOG.get_or_init(|| Catalog::parse(EN_CATALOG))
            }
            Locale::Fr => {
                static CATALOG: OnceLock<Catalog> = OnceLock::new();
                CATALOG.get_or_init(|| Catalog::parse(FR_CATALOG))
            }
        }
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A flat key/value message catalog.
#[derive(Debug, Default, Deserialize)]
pub struct Catalog(HashMap<String, String>);

impl Catalog {
    fn parse(raw: &str) -> Self {
        serde_yaml::from_str(raw).unwrap_or_else(|e| {
            error!("Invalid embedded catalog: {e}");
            Catalog::default()
        })
    }

    /// Look up a message, falling back to the key when missing.
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.0.get(key).map(String::as_str).unwrap_or(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Owns the active locale and cycles through the available ones.
#[derive(Debug, Default)]
pub struct LocaleSwitcher {
    current: Locale,
}

impl LocaleSwitcher {
    pub fn new(initial: Locale) -> Self {
        Self { current: initial }
    }

    /// Switch to the next locale in declaration order, wrapping around.
    pub fn cycle(&mut self) -> Locale {
        self.current = next_cycle(&self.current);
        self.current
    }

    pub fn current(&self) -> Locale {
        self.current
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.current.catalog()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enum_iterator::all;

    #[test]
    fn test_embedded_catalogs_parse() {
        for locale in all::<Locale>() {
            assert!(
                !locale.catalog().is_empty(),
                "catalog for {locale} is empty"
            );
        }
    }

    #[test]
    fn test_all_locales_cover_the_same_keys() {
        let en = Locale::En.catalog();
        let fr = Locale::Fr.catalog();
        assert_eq!(en.len(), fr.len());
        for key in en.0.keys() {
            assert!(fr.0.contains_key(key), "fr catalog missing key {key}");
        }
    }

    #[test]
    fn test_missing_key_falls_back_to_key() {
        let catalog = Locale::En.catalog();
        assert_eq!(catalog.get("no_such_key"), "no_such_key");
    }

    #[test]
    fn test_cycle_wraps_around() {
        let mut switcher = LocaleSwitcher::new(Locale::En);
        assert_eq!(switcher.cycle(), Locale::Fr);
        assert_eq!(switcher.cycle(), Locale::En);
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Locale::from_code("fr"), Some(Locale::Fr));
        assert_eq!(Locale::from_code("de"), None);
    }
}
