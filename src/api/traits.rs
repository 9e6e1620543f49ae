//! Trait abstraction for the waitlist API to enable mocking in tests

use super::client::SubmissionError;
use super::payload::WaitlistPayload;
use async_trait::async_trait;

/// Waitlist API operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WaitlistApi: Send + Sync {
    /// Send one sign-up. A single attempt; callers decide what to show on failure.
    async fn submit(&self, payload: &WaitlistPayload) -> Result<(), SubmissionError>;
}
