// app/mod.rs

//! Controller used to handle user input and interaction with the io thread.

pub mod actions;
pub mod callbacks;
pub mod cards;
pub mod state;

use self::actions::Action;
use self::cards::CARDS;
use self::state::AppState;
use crate::inputs::key::Key;
use crate::io::IoEvent;

use crossterm::event::KeyEvent;
use log::*;

/// Return status indicating whether the app should exit or not.
#[derive(Debug, PartialEq, Eq)]
pub enum AppReturn {
    Exit,
    Continue,
}

/// `App` contains the state of the application and a tx channel to the io thread.
pub struct App {
    io_tx: tokio::sync::mpsc::UnboundedSender<IoEvent>,
    pub state: AppState,
}

impl App {
    /// Returns an app with the given state and channel to the io thread.
    pub fn new(io_tx: tokio::sync::mpsc::UnboundedSender<IoEvent>, state: AppState) -> Self {
        Self { io_tx, state }
    }

    /// Process a key event by executing the corresponding action, if any.
    pub fn process_key_event(&mut self, key_event: KeyEvent) -> AppReturn {
        self.do_action(Key::from(key_event))
    }

    /// Handle a user action
    fn do_action(&mut self, key: Key) -> AppReturn {
        if let Some(action) = self.state.actions.find(key) {
            debug!("Run action [{:?}]", action);
            match action {
                Action::CycleLocale => {
                    let locale = self.state.locales.cycle();
                    info!("Locale switched to {locale}");
                }
                Action::NextCard => {
                    self.state.cards.select_next(CARDS.len());
                }
                Action::PreviousCard => {
                    self.state.cards.select_previous(CARDS.len());
                }
                Action::Quit => return AppReturn::Exit,
                Action::ToggleHelp => {
                    self.state.show_help = !self.state.show_help;
                }
                Action::ToggleLogs => {
                    self.state.show_logs = !self.state.show_logs;
                }
                Action::ToggleTheme => {
                    self.toggle_theme();
                }
            }
        } else {
            warn!("No action associated with {} in this mode", key);
        }
        AppReturn::Continue
    }

    /// Start a theme toggle: the transition flag is raised synchronously,
    /// the value flip runs on the io thread's next turn, and the flag
    /// reset is scheduled after the transition delay.
    pub fn toggle_theme(&mut self) {
        let flip = self.state.switcher.begin_toggle();
        debug!("Toggling theme to {}", flip.next);
        self.dispatch_to_io(IoEvent::ApplyTheme(flip));
    }

    /// We could update the app or dispatch event on tick
    pub fn update_on_tick(&mut self) -> AppReturn {
        AppReturn::Continue
    }

    /// Send a command to the io thread
    /// Does not block
    pub fn dispatch_to_io(&self, event: IoEvent) {
        if let Err(e) = self.io_tx.send(event) {
            error!("Error from dispatch {}", e);
        };
    }
}
