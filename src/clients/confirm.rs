//! # Confirmation
//!
//! Destructive operations ask before they act. Whoever drives the client supplies the
//! asking: an interactive prompt, a scripted answer in tests, or a fixed `bool`.

use async_trait::async_trait;

/// Asked once before a destructive operation; `false` cancels it.
#[async_trait]
pub trait Confirm: Send {
    async fn confirm(&mut self, message: &str) -> bool;
}

/// A fixed answer, whatever the question.
#[async_trait]
impl Confirm for bool {
    async fn confirm(&mut self, _message: &str) -> bool {
        *self
    }
}
