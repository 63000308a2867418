//! Draft, schedule and send transitions.
//!
//! These only change fields on the record. Scheduling is a label: nothing
//! runs at the scheduled time, and sending delivers nothing.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::NewsletterError;
use crate::newsletter::{NewsletterRecord, NewsletterStatus};

/// Something missing before a newsletter can be sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SendBlocker {
    MissingSubject,
    MissingContent,
}

impl fmt::Display for SendBlocker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSubject => f.write_str("Add a subject line"),
            Self::MissingContent => f.write_str("Add at least one content section"),
        }
    }
}

impl NewsletterRecord {
    /// Everything that prevents sending. Empty when ready.
    pub fn send_blockers(&self) -> Vec<SendBlocker> {
        let mut blockers = Vec::new();
        if self.subject.trim().is_empty() {
            blockers.push(SendBlocker::MissingSubject);
        }
        if self.sections.is_empty() {
            blockers.push(SendBlocker::MissingContent);
        }
        blockers
    }

    /// Whether the newsletter can be sent.
    pub fn can_send(&self) -> bool {
        self.send_blockers().is_empty()
    }

    /// Mark as draft. Clears any scheduled time.
    pub fn mark_draft(&mut self, now: DateTime<Utc>) {
        self.status = NewsletterStatus::Draft;
        self.scheduled_at = None;
        self.touch(now);
    }

    /// Mark as scheduled for `at`, which must be after `now`.
    pub fn mark_scheduled(
        &mut self,
        at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<(), NewsletterError> {
        validate_schedule(at, now)?;
        self.status = NewsletterStatus::Scheduled;
        self.scheduled_at = Some(at);
        self.touch(now);
        Ok(())
    }

    /// Mark as sent. Requires a subject and at least one section.
    pub fn mark_sent(&mut self, now: DateTime<Utc>) -> Result<(), NewsletterError> {
        let blockers = self.send_blockers();
        if !blockers.is_empty() {
            return Err(NewsletterError::NotReadyToSend(blockers));
        }
        self.status = NewsletterStatus::Sent;
        self.scheduled_at = None;
        self.touch(now);
        Ok(())
    }
}

/// Check that a schedule time lies strictly in the future.
pub fn validate_schedule(at: DateTime<Utc>, now: DateTime<Utc>) -> Result<(), NewsletterError> {
    if at <= now {
        return Err(NewsletterError::ScheduleInPast { at, now });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::SectionKind;
    use chrono::Duration;

    fn ready_record() -> NewsletterRecord {
        let mut record = NewsletterRecord::new("simple");
        record.subject = "Launch".to_string();
        record.add_section(SectionKind::Text);
        record
    }

    #[test]
    fn test_send_blockers_lists_everything_missing() {
        let mut record = NewsletterRecord::new("simple");
        record.subject = "   ".to_string();
        assert_eq!(
            record.send_blockers(),
            vec![SendBlocker::MissingSubject, SendBlocker::MissingContent]
        );
        assert!(!record.can_send());
    }

    #[test]
    fn test_send_rejected_without_content() {
        let mut record = NewsletterRecord::new("simple");
        record.subject = "Hi".to_string();
        let err = record.mark_sent(Utc::now()).unwrap_err();
        assert_eq!(
            err,
            NewsletterError::NotReadyToSend(vec![SendBlocker::MissingContent])
        );
        assert_eq!(record.status, NewsletterStatus::Draft);
    }

    #[test]
    fn test_send() {
        let mut record = ready_record();
        let now = Utc::now();
        record.mark_sent(now).unwrap();
        assert_eq!(record.status, NewsletterStatus::Sent);
        assert_eq!(record.updated_at, now);
    }

    #[test]
    fn test_schedule_in_future() {
        let mut record = ready_record();
        let now = Utc::now();
        let at = now + Duration::hours(2);
        record.mark_scheduled(at, now).unwrap();
        assert_eq!(record.status, NewsletterStatus::Scheduled);
        assert_eq!(record.scheduled_at, Some(at));
    }

    #[test]
    fn test_schedule_in_past_rejected() {
        let mut record = ready_record();
        let now = Utc::now();
        assert!(record.mark_scheduled(now, now).is_err());
        assert!(record
            .mark_scheduled(now - Duration::minutes(1), now)
            .is_err());
        assert_eq!(record.status, NewsletterStatus::Draft);
        assert_eq!(record.scheduled_at, None);
    }

    #[test]
    fn test_draft_clears_schedule() {
        let mut record = ready_record();
        let now = Utc::now();
        record.mark_scheduled(now + Duration::days(1), now).unwrap();
        record.mark_draft(now);
        assert_eq!(record.status, NewsletterStatus::Draft);
        assert_eq!(record.scheduled_at, None);
    }

    #[test]
    fn test_blocker_messages() {
        let err = NewsletterError::NotReadyToSend(vec![
            SendBlocker::MissingSubject,
            SendBlocker::MissingContent,
        ]);
        assert_eq!(
            err.to_string(),
            "Not ready to send: Add a subject line; Add at least one content section"
        );
    }
}
