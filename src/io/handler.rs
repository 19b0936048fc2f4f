// io/handler.rs

//! Handles events received from the `App` main thread.
//!
//! Callbacks to the `App` are made via mutex.

use std::sync::Arc;

use color_eyre::eyre::Result;
use log::*;
use tokio::time::sleep;

use super::IoEvent;
use crate::app::App;
use crate::config::ConfigPaths;
use crate::theme::{store, PendingFlip, ThemePreference, TRANSITION_DURATION};

/// In the io thread, we handle deferred work without blocking the UI thread.
pub struct IoAsyncHandler {
    app: Arc<tokio::sync::Mutex<App>>,
    paths: ConfigPaths,
}

impl IoAsyncHandler {
    pub fn new(app: Arc<tokio::sync::Mutex<App>>, paths: ConfigPaths) -> Self {
        Self { app, paths }
    }

    /// Handle an `IoEvent` dispatched by the App.
    pub async fn handle_io_event(&mut self, io_event: IoEvent) {
        {
            self.app.lock().await.state.set_loading(true);
        }
        if let Err(err) = match io_event {
            IoEvent::Initialize => self.do_initialize().await,
            IoEvent::ApplyTheme(flip) => self.do_apply_theme(flip).await,
        } {
            error!("Error handling io event: {}", err);
        }
        {
            self.app.lock().await.state.set_loading(false);
        }
    }

    /// Resolves the initial theme preference (CLI override, then the
    /// preference store, then the default) and calls back `cb_initialized`.
    async fn do_initialize(&mut self) -> Result<()> {
        let override_pref = { self.app.lock().await.state.theme_override() };
        let preference = match override_pref {
            Some(p) => p,
            None => match store::load_preference(&self.paths.preference_file_path) {
                Ok(p) => p,
                Err(e) => {
                    debug!("No persisted theme preference ({e}), using default");
                    ThemePreference::default()
                }
            },
        };
        self.app.lock().await.cb_initialized(preference);
        debug!("Initialization successful");
        Ok(())
    }

    /// Applies the deferred value flip of a toggle, informs the
    /// preference store, and schedules the transition-flag reset.
    async fn do_apply_theme(&mut self, flip: PendingFlip) -> Result<()> {
        {
            self.app.lock().await.cb_theme_applied(flip.next);
        }

        // Persistence failure must not fail the flip itself
        if let Err(e) = store::save_preference(&self.paths.preference_file_path, flip.next) {
            warn!("Could not persist theme preference: {}", e);
        }

        let app = Arc::clone(&self.app);
        let token = flip.token;
        tokio::spawn(async move {
            sleep(TRANSITION_DURATION).await;
            app.lock().await.cb_transition_ended(token);
        });
        Ok(())
    }
}
