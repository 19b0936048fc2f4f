// io/mod.rs

//! Deferred work: everything the main thread schedules instead of running
//! synchronously goes through this channel.

pub mod handler;

use crate::theme::PendingFlip;

/// Commands the main `App` can send to the io thread.
#[derive(Debug)]
pub enum IoEvent {
    Initialize,
    ApplyTheme(PendingFlip),
}
