//! Application state definitions

use super::forms::{FormVariant, WaitlistForm};
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Hero content with the waitlist form
    #[default]
    Landing,
    /// Privacy notice
    Privacy,
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,
    pub form: WaitlistForm,
    /// Messages waiting to be shown in the error dialog, oldest first
    pub error_queue: VecDeque<String>,
}

impl AppState {
    pub fn new(variant: FormVariant) -> Self {
        Self {
            form: WaitlistForm::new(variant),
            ..Default::default()
        }
    }

    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    /// Error currently shown in the dialog
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }

    pub fn toggle_privacy(&mut self) {
        self.current_view = match self.current_view {
            View::Landing => View::Privacy,
            View::Privacy => View::Landing,
        };
    }
}
