//! Newsletter records and list summaries.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::NewsletterError;
use crate::ids::{NewsletterId, SectionId};
use crate::ordering;
use crate::section::{Direction, Section, SectionKind, SectionPatch};

/// Subject shown for newsletters that don't have one yet.
pub const UNTITLED_SUBJECT: &str = "Untitled Newsletter";

/// Lifecycle state of a newsletter.
///
/// A stored status this build does not know loads as `Draft`, so one odd
/// record cannot make the whole collection unreadable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsletterStatus {
    #[default]
    Draft,
    Scheduled,
    Sent,
}

impl NewsletterStatus {
    /// Stored name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Scheduled => "scheduled",
            Self::Sent => "sent",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Scheduled => "Scheduled",
            Self::Sent => "Sent",
        }
    }
}

impl fmt::Display for NewsletterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NewsletterStatus {
    type Err = NewsletterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "scheduled" => Ok(Self::Scheduled),
            "sent" => Ok(Self::Sent),
            other => Err(NewsletterError::UnknownStatus(other.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for NewsletterStatus {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(name.parse().unwrap_or_default())
    }
}

/// The persisted representation of one newsletter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterRecord {
    /// Assigned at creation, never changes.
    pub id: NewsletterId,
    /// Subject line.
    #[serde(default)]
    pub subject: String,
    /// Content sections.
    #[serde(default)]
    pub sections: Vec<Section>,
    /// Template used for rendering.
    pub template_id: String,
    /// Lifecycle state.
    #[serde(default)]
    pub status: NewsletterStatus,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Time of the last persisted change.
    pub updated_at: DateTime<Utc>,
    /// Scheduled send time. A label only; nothing is dispatched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<DateTime<Utc>>,
}

impl NewsletterRecord {
    /// Create an empty draft using the given template.
    pub fn new(template_id: impl Into<String>) -> Self {
        Self::new_at(template_id, Utc::now())
    }

    /// Create an empty draft with an explicit creation time.
    pub fn new_at(template_id: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: NewsletterId::generate(),
            subject: String::new(),
            sections: Vec::new(),
            template_id: template_id.into(),
            status: NewsletterStatus::Draft,
            created_at: now,
            updated_at: now,
            scheduled_at: None,
        }
    }

    /// Whether there is anything worth persisting: a subject or a section.
    pub fn has_content(&self) -> bool {
        !self.subject.is_empty() || !self.sections.is_empty()
    }

    /// Subject, or a placeholder when empty.
    pub fn display_subject(&self) -> &str {
        if self.subject.trim().is_empty() {
            UNTITLED_SUBJECT
        } else {
            &self.subject
        }
    }

    /// Mark the record as changed.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }

    /// Sections sorted by `order`.
    pub fn sorted_sections(&self) -> Vec<&Section> {
        ordering::sorted_by_order(&self.sections)
    }

    /// Look up a section.
    pub fn section(&self, id: &SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| &s.id == id)
    }

    /// Append an empty section.
    pub fn add_section(&mut self, kind: SectionKind) -> SectionId {
        ordering::add_section(&mut self.sections, kind)
    }

    /// Remove a section. Returns `false` if it wasn't there.
    pub fn remove_section(&mut self, id: &SectionId) -> bool {
        ordering::remove_section(&mut self.sections, id)
    }

    /// Move a section one step. Returns `false` at the boundaries.
    pub fn move_section(&mut self, id: &SectionId, direction: Direction) -> bool {
        ordering::move_section(&mut self.sections, id, direction)
    }

    /// Apply a partial update to a section.
    pub fn update_section(
        &mut self,
        id: &SectionId,
        patch: SectionPatch,
    ) -> Result<(), NewsletterError> {
        self.section_mut(id)?.apply(patch);
        Ok(())
    }

    /// Change a section's kind, keeping its content.
    pub fn set_section_kind(
        &mut self,
        id: &SectionId,
        kind: SectionKind,
    ) -> Result<(), NewsletterError> {
        self.section_mut(id)?.kind = kind;
        Ok(())
    }

    /// Repair section orders loaded from elsewhere.
    pub fn normalize_sections(&mut self) {
        ordering::normalize(&mut self.sections);
    }

    /// List projection.
    pub fn summary(&self) -> NewsletterSummary {
        NewsletterSummary::from(self)
    }

    fn section_mut(&mut self, id: &SectionId) -> Result<&mut Section, NewsletterError> {
        self.sections
            .iter_mut()
            .find(|s| &s.id == id)
            .ok_or_else(|| NewsletterError::SectionNotFound(id.to_string()))
    }
}

/// What the list view shows for each newsletter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterSummary {
    pub id: NewsletterId,
    pub subject: String,
    pub status: NewsletterStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<DateTime<Utc>>,
}

impl NewsletterSummary {
    /// Subject, or a placeholder when empty.
    pub fn display_subject(&self) -> &str {
        if self.subject.trim().is_empty() {
            UNTITLED_SUBJECT
        } else {
            &self.subject
        }
    }
}

impl From<&NewsletterRecord> for NewsletterSummary {
    fn from(record: &NewsletterRecord) -> Self {
        Self {
            id: record.id.clone(),
            subject: record.subject.clone(),
            status: record.status,
            created_at: record.created_at,
            updated_at: record.updated_at,
            scheduled_at: record.scheduled_at,
        }
    }
}

/// Sort summaries with the most recently updated first.
pub fn sort_by_recent(summaries: &mut [NewsletterSummary]) {
    summaries.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_new_record_is_empty_draft() {
        let record = NewsletterRecord::new_at("simple", at(100));
        assert_eq!(record.status, NewsletterStatus::Draft);
        assert_eq!(record.template_id, "simple");
        assert_eq!(record.created_at, record.updated_at);
        assert!(!record.has_content());
        assert_eq!(record.display_subject(), UNTITLED_SUBJECT);
    }

    #[test]
    fn test_has_content() {
        let mut record = NewsletterRecord::new("simple");
        record.subject = "Hello".to_string();
        assert!(record.has_content());

        let mut record = NewsletterRecord::new("simple");
        record.add_section(SectionKind::Divider);
        assert!(record.has_content());
    }

    #[test]
    fn test_update_missing_section() {
        let mut record = NewsletterRecord::new("simple");
        let result = record.update_section(&SectionId::new("nope"), SectionPatch::default());
        assert_eq!(
            result,
            Err(NewsletterError::SectionNotFound("nope".to_string()))
        );
    }

    #[test]
    fn test_set_section_kind_keeps_content() {
        let mut record = NewsletterRecord::new("simple");
        let id = record.add_section(SectionKind::Text);
        record
            .update_section(
                &id,
                SectionPatch {
                    content: Some("Hi".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        record.set_section_kind(&id, SectionKind::Button).unwrap();

        let section = record.section(&id).unwrap();
        assert_eq!(section.kind, SectionKind::Button);
        assert_eq!(section.content, "Hi");
    }

    #[test]
    fn test_stored_json_shape() {
        let mut record = NewsletterRecord::new_at("modern", at(1_700_000_000));
        record.subject = "Weekly".to_string();
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["templateId"], "modern");
        assert_eq!(value["status"], "draft");
        assert_eq!(value["createdAt"], "2023-11-14T22:13:20Z");
        assert!(value.get("scheduledAt").is_none());

        let back: NewsletterRecord = serde_json::from_value(value).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_parses_browser_dates() {
        let json = r#"{
            "id": "k3j2h1",
            "subject": "From the browser",
            "sections": [],
            "templateId": "simple",
            "status": "scheduled",
            "createdAt": "2025-01-02T03:04:05.678Z",
            "updatedAt": "2025-01-02T03:04:05.678Z",
            "scheduledAt": "2025-02-01T09:00:00.000Z"
        }"#;
        let record: NewsletterRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.status, NewsletterStatus::Scheduled);
        assert_eq!(
            record.scheduled_at,
            Some(Utc.with_ymd_and_hms(2025, 2, 1, 9, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_sort_by_recent() {
        let mut a = NewsletterRecord::new_at("simple", at(10));
        a.touch(at(30));
        let b = NewsletterRecord::new_at("simple", at(20));
        let mut c = NewsletterRecord::new_at("simple", at(5));
        c.touch(at(50));

        let mut summaries = vec![a.summary(), b.summary(), c.summary()];
        sort_by_recent(&mut summaries);
        assert_eq!(
            summaries.iter().map(|s| s.id.clone()).collect::<Vec<_>>(),
            vec![c.id, a.id, b.id]
        );
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!(
            "Sent".parse::<NewsletterStatus>().unwrap(),
            NewsletterStatus::Sent
        );
        assert!("archived".parse::<NewsletterStatus>().is_err());
    }

    #[test]
    fn test_unknown_stored_status_loads_as_draft() {
        let status: NewsletterStatus = serde_json::from_str("\"archived\"").unwrap();
        assert_eq!(status, NewsletterStatus::Draft);
        let status: NewsletterStatus = serde_json::from_str("\"sent\"").unwrap();
        assert_eq!(status, NewsletterStatus::Sent);
        assert!(serde_json::from_str::<NewsletterStatus>("3").is_err());
    }
}
