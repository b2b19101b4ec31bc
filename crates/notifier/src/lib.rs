//! Notification delivery.
//!
//! The poller only knows the [`Notifier`] trait: "send this text to that
//! recipient". [`telegram::TelegramNotifier`] is the production channel.

pub mod telegram;

use std::future::Future;

use thiserror::Error;

pub use telegram::TelegramNotifier;

/// Delivery failures. Callers log these and move on.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Notification transport error: {0}")]
    Transport(String),

    #[error("Notification rejected (HTTP {status}): {description}")]
    Rejected { status: u16, description: String },
}

/// A channel able to deliver a plain-text message to a single recipient.
pub trait Notifier {
    fn send(
        &self,
        recipient: &str,
        text: &str,
    ) -> impl Future<Output = Result<(), NotifyError>> + Send;
}
