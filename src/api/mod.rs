//! Waitlist API module for HTTP communication

mod client;
mod payload;
mod traits;

pub use client::{SubmissionError, WaitlistClient};
pub use payload::WaitlistPayload;
pub use traits::WaitlistApi;

#[cfg(test)]
pub use traits::MockWaitlistApi;
