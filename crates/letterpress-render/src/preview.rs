//! Preview rendering with a sample for blank newsletters.

use std::borrow::Cow;

use letterpress_core::{NewsletterRecord, Section, SectionKind, SectionId, SectionMetadata};

use crate::options::RenderOptions;
use crate::templates::render_with;

/// Subject shown when previewing a blank newsletter.
pub const SAMPLE_SUBJECT: &str = "Welcome to Our Newsletter";

const SAMPLE_TEXT: &str = "# Welcome to Your Newsletter!\n\n\
This is a **sample newsletter** with *markdown formatting*. You can:\n\n\
- Add **bold** and *italic* text\n\
- Create [links](https://example.com)\n\
- Use headers and lists\n\
- Add images and buttons\n\n\
Start editing to see your content here!";

const SAMPLE_BUTTON: &str = "Get Started";
const SAMPLE_URL: &str = "https://example.com";

/// The record a preview actually renders.
///
/// A record with no subject and no sections is swapped for a sample that
/// keeps its id and template, so the preview shows what the template looks
/// like before anything is written.
pub fn preview_record(record: &NewsletterRecord) -> Cow<'_, NewsletterRecord> {
    if record.has_content() {
        return Cow::Borrowed(record);
    }

    let mut sample = record.clone();
    sample.subject = SAMPLE_SUBJECT.to_string();
    sample.sections = vec![
        Section {
            id: SectionId::new("placeholder-1"),
            kind: SectionKind::Text,
            content: SAMPLE_TEXT.to_string(),
            order: 0,
            metadata: SectionMetadata::default(),
        },
        Section {
            id: SectionId::new("placeholder-2"),
            kind: SectionKind::Button,
            content: SAMPLE_BUTTON.to_string(),
            order: 1,
            metadata: SectionMetadata {
                button_url: Some(SAMPLE_URL.to_string()),
                button_text: Some(SAMPLE_BUTTON.to_string()),
                ..Default::default()
            },
        },
    ];
    Cow::Owned(sample)
}

/// Render the record's own template, falling back to the sample for blank
/// records.
pub fn render_preview(record: &NewsletterRecord, options: &RenderOptions) -> String {
    let target = preview_record(record);
    render_with(&target.template_id, &target, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_record_uses_sample() {
        let record = NewsletterRecord::new("modern");
        let preview = preview_record(&record);
        assert!(matches!(preview, Cow::Owned(_)));
        assert_eq!(preview.subject, SAMPLE_SUBJECT);
        assert_eq!(preview.sections.len(), 2);
        assert_eq!(preview.template_id, "modern");
        assert_eq!(preview.id, record.id);

        let html = render_preview(&record, &RenderOptions::default());
        assert!(html.contains("Welcome to Your Newsletter!"));
        assert!(html.contains(r#"href="https://example.com""#));
        assert!(html.contains(">Get Started</a>"));
    }

    #[test]
    fn test_record_with_content_renders_as_is() {
        let mut record = NewsletterRecord::new("simple");
        record.subject = "Real subject".to_string();
        assert!(matches!(preview_record(&record), Cow::Borrowed(_)));

        let html = render_preview(&record, &RenderOptions::default());
        assert!(html.contains("Real subject"));
        assert!(!html.contains(SAMPLE_SUBJECT));
    }

    #[test]
    fn test_sections_without_subject_are_not_replaced() {
        let mut record = NewsletterRecord::new("simple");
        record.add_section(SectionKind::Divider);
        let preview = preview_record(&record);
        assert_eq!(preview.subject, "");
        assert_eq!(preview.sections.len(), 1);
    }

    #[test]
    fn test_unknown_template_preview_is_placeholder() {
        let record = NewsletterRecord::new("missing");
        assert_eq!(
            render_preview(&record, &RenderOptions::default()),
            crate::templates::TEMPLATE_NOT_FOUND_HTML
        );
    }
}
