//! Alert delivery through an optional interactive surface.

use sheetsync_core::{trying, SyncResult};
use std::cell::RefCell;

/// An interactive surface able to display a blocking message.
pub trait AlertSurface {
    /// Display `message` and wait for dismissal.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface cannot display the message.
    fn alert(&self, message: &str) -> SyncResult<()>;
}

impl<T: AlertSurface + ?Sized> AlertSurface for &T {
    fn alert(&self, message: &str) -> SyncResult<()> {
        (**self).alert(message)
    }
}

/// Log `message`, then show it on an interactive surface when one can be
/// acquired.
///
/// Acquisition failure is silent, so headless runs log the message and move
/// on. A failure from an acquired surface propagates.
///
/// # Errors
///
/// Returns an error if an acquired surface fails to display the message.
pub fn alert<S, F, E>(acquire_ui: F, message: &str) -> SyncResult<()>
where
    S: AlertSurface,
    F: FnOnce() -> Result<S, E>,
{
    tracing::info!("{message}");
    match trying(acquire_ui) {
        Some(ui) => ui.alert(message),
        None => Ok(()),
    }
}

/// Surface capturing messages for tests.
#[derive(Debug, Default)]
pub struct RecordingUi {
    messages: RefCell<Vec<String>>,
}

impl RecordingUi {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages shown so far.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl AlertSurface for RecordingUi {
    fn alert(&self, message: &str) -> SyncResult<()> {
        self.messages.borrow_mut().push(message.to_string());
        Ok(())
    }
}
