//! Section types: the ordered content blocks of a newsletter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NewsletterError;
use crate::ids::SectionId;

/// The kind of content a section holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// Markdown text.
    #[default]
    Text,
    /// Image, shown only when it has a URL.
    Image,
    /// Link styled as a button.
    Button,
    /// Horizontal rule.
    Divider,
    /// A type this build does not know. Kept so stored data still loads;
    /// renders nothing.
    #[serde(other)]
    Unknown,
}

impl SectionKind {
    /// The kinds an author can pick.
    pub const SELECTABLE: [SectionKind; 4] = [Self::Text, Self::Image, Self::Button, Self::Divider];

    /// Stored name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Button => "button",
            Self::Divider => "divider",
            Self::Unknown => "unknown",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Image => "Image",
            Self::Button => "Button",
            Self::Divider => "Divider",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionKind {
    type Err = NewsletterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "image" => Ok(Self::Image),
            "button" => Ok(Self::Button),
            "divider" => Ok(Self::Divider),
            other => Err(NewsletterError::UnknownSectionKind(other.to_string())),
        }
    }
}

/// Optional per-kind fields of a section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
}

/// One ordered content block of a newsletter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Unique section identifier.
    pub id: SectionId,
    /// Content kind.
    #[serde(rename = "type")]
    pub kind: SectionKind,
    /// Markdown for text sections, fallback label for buttons.
    #[serde(default)]
    pub content: String,
    /// Position within the newsletter, dense from 0.
    pub order: usize,
    /// Kind-specific fields.
    #[serde(default)]
    pub metadata: SectionMetadata,
}

impl Section {
    /// Create an empty section at the given position.
    pub fn new(kind: SectionKind, order: usize) -> Self {
        Self {
            id: SectionId::generate(),
            kind,
            content: String::new(),
            order,
            metadata: SectionMetadata::default(),
        }
    }

    /// Set the content.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Set the metadata.
    pub fn with_metadata(mut self, metadata: SectionMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Image URL, if one is set and non-empty.
    pub fn image_url(&self) -> Option<&str> {
        non_empty(self.metadata.image_url.as_deref())
    }

    /// Image alt text, if set and non-empty.
    pub fn image_alt(&self) -> Option<&str> {
        non_empty(self.metadata.image_alt.as_deref())
    }

    /// Button target, if set and non-empty.
    pub fn button_url(&self) -> Option<&str> {
        non_empty(self.metadata.button_url.as_deref())
    }

    /// Button label: `buttonText` when set, otherwise the content.
    pub fn button_label(&self) -> &str {
        non_empty(self.metadata.button_text.as_deref()).unwrap_or(&self.content)
    }

    /// Set the button label. Writes both the content and `buttonText`.
    pub fn set_button_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.metadata.button_text = Some(text.clone());
        self.content = text;
    }

    /// Apply a partial update.
    pub fn apply(&mut self, patch: SectionPatch) {
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(url) = patch.image_url {
            self.metadata.image_url = into_optional(url);
        }
        if let Some(alt) = patch.image_alt {
            self.metadata.image_alt = into_optional(alt);
        }
        if let Some(url) = patch.button_url {
            self.metadata.button_url = into_optional(url);
        }
        if let Some(text) = patch.button_text {
            self.set_button_text(text);
        }
    }
}

/// Partial update for a section. `None` fields are left alone; an empty
/// string clears a metadata field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionPatch {
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub image_alt: Option<String>,
    pub button_url: Option<String>,
    pub button_text: Option<String>,
}

impl SectionPatch {
    /// Whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Direction for moving a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl FromStr for Direction {
    type Err = NewsletterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            other => Err(NewsletterError::InvalidDirection(other.to_string())),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn into_optional(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parsing() {
        assert_eq!("Image".parse::<SectionKind>().unwrap(), SectionKind::Image);
        assert!("video".parse::<SectionKind>().is_err());
    }

    #[test]
    fn test_unknown_kind_deserializes() {
        let json = r#"{"id":"s1","type":"video","content":"x","order":0}"#;
        let section: Section = serde_json::from_str(json).unwrap();
        assert_eq!(section.kind, SectionKind::Unknown);
        assert_eq!(section.metadata, SectionMetadata::default());
    }

    #[test]
    fn test_stored_shape() {
        let section = Section {
            id: SectionId::new("s1"),
            kind: SectionKind::Button,
            content: "Go".to_string(),
            order: 2,
            metadata: SectionMetadata {
                button_url: Some("https://example.com".to_string()),
                ..Default::default()
            },
        };
        let value = serde_json::to_value(&section).unwrap();
        assert_eq!(value["type"], "button");
        assert_eq!(value["order"], 2);
        assert_eq!(value["metadata"]["buttonUrl"], "https://example.com");
        assert!(value["metadata"].get("imageUrl").is_none());
    }

    #[test]
    fn test_button_label_falls_back_to_content() {
        let mut section = Section::new(SectionKind::Button, 0).with_content("Read more");
        assert_eq!(section.button_label(), "Read more");

        section.metadata.button_text = Some(String::new());
        assert_eq!(section.button_label(), "Read more");

        section.metadata.button_text = Some("Open".to_string());
        assert_eq!(section.button_label(), "Open");
    }

    #[test]
    fn test_set_button_text_updates_content() {
        let mut section = Section::new(SectionKind::Button, 0);
        section.set_button_text("Subscribe");
        assert_eq!(section.content, "Subscribe");
        assert_eq!(section.metadata.button_text.as_deref(), Some("Subscribe"));
    }

    #[test]
    fn test_patch_clears_with_empty_string() {
        let mut section = Section::new(SectionKind::Image, 0);
        section.apply(SectionPatch {
            image_url: Some("https://example.com/a.png".to_string()),
            ..Default::default()
        });
        assert_eq!(section.image_url(), Some("https://example.com/a.png"));

        section.apply(SectionPatch {
            image_url: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(section.image_url(), None);
    }

    #[test]
    fn test_direction_parsing() {
        assert_eq!("UP".parse::<Direction>().unwrap(), Direction::Up);
        assert!("left".parse::<Direction>().is_err());
    }
}
