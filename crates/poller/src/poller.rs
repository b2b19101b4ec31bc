use std::time::Duration;

use chrono::Utc;

use herald_common::error::PollError;
use herald_notifier::Notifier;

use crate::client::StatusSource;
use crate::translator::parse_status;
use crate::validator::{check_response, current_date};

/// Sent once when the poller starts.
pub const STARTUP_MESSAGE: &str = "Запуск Бота";

/// Prefix of every error-report notification.
pub const ERROR_PREFIX: &str = "Сбой в работе бота: ";

/// Status poller that periodically asks the endpoint for homework status changes
/// and forwards them to a single recipient.
pub struct StatusPoller<S, N> {
    source: S,
    notifier: N,
    recipient: String,
    poll_interval: Duration,
    /// Unix timestamp sent as `from_date`. Only moves after a successful cycle.
    cursor: i64,
    /// Last text handed to the notifier, status change or error report alike.
    last_message: Option<String>,
}

impl<S: StatusSource, N: Notifier> StatusPoller<S, N> {
    pub fn new(source: S, notifier: N, recipient: String, poll_interval: Duration) -> Self {
        Self {
            source,
            notifier,
            recipient,
            poll_interval,
            cursor: Utc::now().timestamp(),
            last_message: None,
        }
    }

    /// Start polling from `cursor` instead of the current time.
    pub fn with_cursor(mut self, cursor: i64) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    pub fn last_message(&self) -> Option<&str> {
        self.last_message.as_deref()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Start the polling loop. Runs indefinitely until the task is cancelled.
    pub async fn run(&mut self) {
        tracing::info!(
            cursor = self.cursor,
            poll_interval_secs = self.poll_interval.as_secs(),
            "Status poller started"
        );
        self.notify(STARTUP_MESSAGE.to_string()).await;

        loop {
            if let Ok(notified) = self.run_cycle().await {
                tracing::debug!(notified, cursor = self.cursor, "Polling cycle finished");
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }

    /// Run one fetch → validate → translate → notify cycle.
    ///
    /// Returns how many notifications were handed to the notifier. A failed
    /// cycle has already been logged and reported when its error is returned.
    pub async fn run_cycle(&mut self) -> Result<usize, PollError> {
        let requested_at = Utc::now().timestamp();

        match self.poll_once(requested_at).await {
            Ok(notified) => Ok(notified),
            Err(e) => {
                tracing::error!(cursor = self.cursor, error = %e, "Polling cycle failed");
                self.notify(format!("{ERROR_PREFIX}{e}")).await;
                Err(e)
            }
        }
    }

    async fn poll_once(&mut self, requested_at: i64) -> Result<usize, PollError> {
        let payload = self.source.fetch(self.cursor).await?;
        let homeworks = check_response(&payload)?;

        if homeworks.is_empty() {
            tracing::debug!(from_date = self.cursor, "No new homework statuses");
        }

        // Server order is preserved; a bad entry aborts the rest of the batch.
        let mut notified = 0;
        for homework in homeworks {
            let message = parse_status(homework)?;
            if self.notify(message).await {
                notified += 1;
            }
        }

        let next_cursor = current_date(&payload).unwrap_or(requested_at);
        tracing::info!(
            previous = self.cursor,
            cursor = next_cursor,
            homeworks = homeworks.len(),
            "Cursor advanced"
        );
        self.cursor = next_cursor;

        Ok(notified)
    }

    /// Send `message` unless it repeats the previous one. Delivery failures are
    /// logged and swallowed. Returns `false` when the message was suppressed.
    async fn notify(&mut self, message: String) -> bool {
        if self.last_message.as_deref() == Some(message.as_str()) {
            tracing::debug!(message = %message, "Duplicate notification suppressed");
            return false;
        }

        match self.notifier.send(&self.recipient, &message).await {
            Ok(()) => tracing::info!(message = %message, "Notification sent"),
            Err(e) => tracing::warn!(
                error = %e,
                message = %message,
                "Failed to deliver notification"
            ),
        }

        self.last_message = Some(message);
        true
    }
}
