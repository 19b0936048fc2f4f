// app/callbacks.rs

//! Callback functions called by the io thread (under locking)

use super::App;
use crate::theme::switcher::ResetToken;
use crate::theme::{load_theme, ThemePreference};

use log::*;

impl App {
    /// Establishes the initial theme preference once the io thread has
    /// resolved it from the CLI override or the preference store.
    pub(crate) fn cb_initialized(&mut self, preference: ThemePreference) {
        self.state.switcher.initialize(preference);
        self.state.theme = load_theme(self.state.themes_dir(), preference);
        info!("Initialized with {preference} theme");
    }

    /// Applies the deferred value flip of a toggle and swaps the active
    /// role set accordingly.
    pub(crate) fn cb_theme_applied(&mut self, next: ThemePreference) {
        self.state.switcher.apply(next);
        self.state.theme = load_theme(self.state.themes_dir(), next);
        debug!("Theme switched to {next}");
    }

    /// Lowers the transition flag when a toggle's reset timer fires.
    /// Stale timers from superseded toggles are ignored by the switcher.
    pub(crate) fn cb_transition_ended(&mut self, token: ResetToken) {
        self.state.switcher.end_transition(token);
        trace!("Theme transition ended");
    }
}
