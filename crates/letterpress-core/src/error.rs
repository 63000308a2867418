//! Newsletter error types.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::publish::SendBlocker;

/// Errors that can occur while editing or publishing a newsletter.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NewsletterError {
    /// Section not found in the newsletter.
    #[error("Section not found: {0}")]
    SectionNotFound(String),

    /// Unrecognised section type name.
    #[error("Unknown section type: {0} (expected text, image, button or divider)")]
    UnknownSectionKind(String),

    /// Unrecognised status name.
    #[error("Unknown status: {0} (expected draft, scheduled or sent)")]
    UnknownStatus(String),

    /// Unrecognised move direction.
    #[error("Invalid direction: {0} (expected up or down)")]
    InvalidDirection(String),

    /// Schedule time is not in the future.
    #[error("Scheduled time {at} is not in the future (now: {now})")]
    ScheduleInPast {
        at: DateTime<Utc>,
        now: DateTime<Utc>,
    },

    /// Newsletter is missing something required before sending.
    #[error("Not ready to send: {}", join_blockers(.0))]
    NotReadyToSend(Vec<SendBlocker>),
}

fn join_blockers(blockers: &[SendBlocker]) -> String {
    blockers
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
