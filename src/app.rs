//! Application state and core logic

use crate::api::{SubmissionError, WaitlistApi, WaitlistClient, WaitlistPayload};
use crate::config::TuiConfig;
use crate::state::{Advance, AppState, FormVariant, Lead, Retreat, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tracing::{debug, info, warn};

type SubmissionResult = Result<(), SubmissionError>;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Waitlist API used for submissions
    api: Arc<dyn WaitlistApi>,
    /// Whether the app should quit
    quit: bool,
    /// Receives the outcome of the in-flight submission, if any
    pending_submission: Option<oneshot::Receiver<SubmissionResult>>,
}

impl App {
    /// Create a new App instance talking to the configured API
    pub fn new(config: &TuiConfig) -> Result<Self> {
        let client = WaitlistClient::new(config)?;
        let endpoint = client.endpoint().to_string();
        let app = Self::with_api(
            Arc::new(client),
            FormVariant::from_collect_phone(config.collect_phone()),
        );
        info!(
            endpoint = %endpoint,
            variant = ?app.state.form.variant(),
            "Waitlist form ready"
        );

        Ok(app)
    }

    pub fn with_api(api: Arc<dyn WaitlistApi>, variant: FormVariant) -> Self {
        Self {
            state: AppState::new(variant),
            api,
            quit: false,
            pending_submission: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Whether a submission is waiting for the API
    pub fn is_submitting(&self) -> bool {
        self.pending_submission.is_some()
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // The error dialog captures input until dismissed
        if self.state.current_error().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return;
        }

        // Ctrl+P reaches the privacy notice from anywhere without eating a letter
        if key.code == KeyCode::Char('p') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.state.toggle_privacy();
            return;
        }

        match self.state.current_view {
            View::Privacy => self.handle_privacy_key(key),
            View::Landing if self.state.form.is_complete => self.handle_complete_key(key),
            View::Landing if self.state.form.is_open => self.handle_form_key(key),
            View::Landing => self.handle_landing_key(key),
        }
    }

    fn handle_privacy_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('v') => {
                self.state.current_view = View::Landing;
            }
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    fn handle_complete_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
            self.quit = true;
        }
    }

    /// Collapsed form: only the email prompt and the join button are visible.
    /// Every printable key belongs to the email.
    fn handle_landing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.state.form.open(),
            KeyCode::Esc => self.quit = true,
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.form.open();
                self.state.form.input_char(c);
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.advance(),
            KeyCode::Esc => self.retreat(),
            KeyCode::Backspace => self.state.form.backspace(),
            KeyCode::Up => self.state.form.select_prev(),
            KeyCode::Down => self.state.form.select_next(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.form.input_char(c);
            }
            _ => {}
        }
    }

    fn advance(&mut self) {
        match self.state.form.advance() {
            Advance::Blocked(error) => {
                let step = self.state.form.active_field().name();
                debug!(step, %error, "Step did not validate");
            }
            Advance::Moved(index) => debug!(index, "Advanced to step"),
            Advance::Submit(lead) => self.start_submission(&lead),
            Advance::Ignored => {}
        }
    }

    fn retreat(&mut self) {
        match self.state.form.retreat() {
            Retreat::Moved(index) => debug!(index, "Went back to step"),
            Retreat::Cancelled => debug!("Waitlist form cancelled"),
            Retreat::Ignored => {}
        }
    }

    /// Send the lead on a background task; the outcome is picked up by `poll_submission`
    fn start_submission(&mut self, lead: &Lead) {
        let payload = WaitlistPayload::from(lead);
        let api = Arc::clone(&self.api);
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let result = api.submit(&payload).await;
            // Receiver only goes away when the app has already exited
            let _ = tx.send(result);
        });

        self.pending_submission = Some(rx);
    }

    /// Apply the submission outcome if it has arrived; never blocks
    pub fn poll_submission(&mut self) {
        let Some(rx) = self.pending_submission.as_mut() else {
            return;
        };

        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Closed) => Err(SubmissionError::Interrupted),
        };

        self.pending_submission = None;
        self.finish_submission(result);
    }

    /// Wait for the in-flight submission, if any, and apply its outcome
    pub async fn wait_for_submission(&mut self) {
        if let Some(rx) = self.pending_submission.take() {
            let result = rx.await.unwrap_or(Err(SubmissionError::Interrupted));
            self.finish_submission(result);
        }
    }

    fn finish_submission(&mut self, result: SubmissionResult) {
        match result {
            Ok(()) => {
                info!("Joined the waitlist");
                self.state.form.submission_succeeded();
            }
            Err(err) => {
                warn!(status = err.status(), error = %err, "Waitlist submission failed");
                self.state.form.submission_failed();
                self.state.push_error(err.to_string());
            }
        }
    }
}
