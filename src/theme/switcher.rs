// theme/switcher.rs

//! Theme toggle state machine.
//!
//! `ThemeSwitcher` owns the current [`ThemePreference`] and the transient
//! transition flag. A toggle raises the flag synchronously, then hands the
//! caller a [`PendingFlip`]: the value to apply on the next scheduling
//! opportunity, and the token the delayed reset must present to lower the
//! flag again. Tokens from a superseded toggle no longer match, so a stale
//! reset timer cannot clobber a newer transition.

use std::time::Duration;

use super::models::ThemePreference;

/// How long the visual transition lasts before the flag resets.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(1000);

/// Work scheduled by a toggle: the value to apply on the next tick, and
/// the token for the matching delayed reset.
#[derive(Debug, Clone, Copy)]
pub struct PendingFlip {
    pub next: ThemePreference,
    pub token: ResetToken,
}

/// Identifies one toggle cycle. Only the most recent token can end the
/// transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetToken(u64);

#[derive(Debug, Default)]
pub struct ThemeSwitcher {
    current: ThemePreference,
    transitioning: bool,
    generation: u64,
}

impl ThemeSwitcher {
    /// Establish the first value from an external source (persisted
    /// preference or platform default). Idempotent: reassigns the value
    /// and clears the transition flag, nothing else.
    pub fn initialize(&mut self, initial: ThemePreference) {
        self.current = initial;
        self.transitioning = false;
    }

    /// Start a toggle: raise the transition flag and return the work to
    /// schedule. The value flip itself must be applied later via
    /// [`apply`](Self::apply), and the reset after [`TRANSITION_DURATION`]
    /// via [`end_transition`](Self::end_transition).
    pub fn begin_toggle(&mut self) -> PendingFlip {
        self.transitioning = true;
        self.generation += 1;
        PendingFlip {
            next: self.current.opposite(),
            token: ResetToken(self.generation),
        }
    }

    /// Apply the deferred value flip.
    pub fn apply(&mut self, next: ThemePreference) {
        self.current = next;
    }

    /// Lower the transition flag, unless a newer toggle has started since
    /// the token was issued.
    pub fn end_transition(&mut self, token: ResetToken) {
        if token == ResetToken(self.generation) {
            self.transitioning = false;
        }
    }

    pub fn current(&self) -> ThemePreference {
        self.current
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }
}
