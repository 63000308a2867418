//! Template registry.
//!
//! Templates are plain functions from a record to a complete HTML document.
//! The registry is fixed at compile time; ids are the stable `templateId`
//! values persisted with each newsletter.

mod modern;
mod professional;
mod simple;

use letterpress_core::NewsletterRecord;

use crate::error::RenderError;
use crate::options::RenderOptions;

/// Id of the template new newsletters start with.
pub const DEFAULT_TEMPLATE_ID: &str = "simple";

/// Document returned when a template id is not registered.
pub const TEMPLATE_NOT_FOUND_HTML: &str = "<p>Template not found</p>";

/// Signature every template implements.
pub type RenderFn = fn(&NewsletterRecord, &RenderOptions) -> String;

/// A registered email template.
#[derive(Clone, Copy)]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    render: RenderFn,
}

impl Template {
    /// Render a record with this template.
    pub fn render(&self, record: &NewsletterRecord, options: &RenderOptions) -> String {
        (self.render)(record, options)
    }
}

impl std::fmt::Debug for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Template")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

static TEMPLATES: [Template; 3] = [
    Template {
        id: "simple",
        name: "Simple & Clean",
        description: "A clean, minimal template perfect for text-focused newsletters",
        render: simple::render,
    },
    Template {
        id: "modern",
        name: "Modern Gradient",
        description: "Eye-catching template with gradient header and modern styling",
        render: modern::render,
    },
    Template {
        id: "newsletter",
        name: "Professional Newsletter",
        description: "Professional layout with header, structured content, and footer",
        render: professional::render,
    },
];

/// All registered templates, in display order.
pub fn templates() -> &'static [Template] {
    &TEMPLATES
}

/// Look up a template by id.
pub fn template_by_id(id: &str) -> Option<&'static Template> {
    TEMPLATES.iter().find(|t| t.id == id)
}

/// The template new newsletters use.
pub fn default_template() -> &'static Template {
    &TEMPLATES[0]
}

/// Render with the given template, failing on an unknown id.
pub fn try_render(
    template_id: &str,
    record: &NewsletterRecord,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    template_by_id(template_id)
        .map(|template| template.render(record, options))
        .ok_or_else(|| RenderError::UnknownTemplate(template_id.to_string()))
}

/// Render with default options. Unknown ids yield [`TEMPLATE_NOT_FOUND_HTML`].
pub fn render(template_id: &str, record: &NewsletterRecord) -> String {
    render_with(template_id, record, &RenderOptions::default())
}

/// Render with explicit options. Unknown ids yield [`TEMPLATE_NOT_FOUND_HTML`].
pub fn render_with(template_id: &str, record: &NewsletterRecord, options: &RenderOptions) -> String {
    match try_render(template_id, record, options) {
        Ok(html) => html,
        Err(e) => {
            tracing::warn!(template_id = %template_id, error = %e, "Rendering placeholder");
            TEMPLATE_NOT_FOUND_HTML.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use letterpress_core::{Section, SectionKind, SectionMetadata};

    fn record() -> NewsletterRecord {
        let now = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let mut record = NewsletterRecord::new_at("simple", now);
        record.subject = "Weekly <Digest>".to_string();
        record.sections = vec![
            Section::new(SectionKind::Text, 2).with_content("third"),
            Section::new(SectionKind::Text, 0).with_content("first"),
            Section::new(SectionKind::Text, 1).with_content("second"),
        ];
        record
    }

    #[test]
    fn test_registry() {
        let ids: Vec<_> = templates().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["simple", "modern", "newsletter"]);
        assert_eq!(default_template().id, DEFAULT_TEMPLATE_ID);
        assert_eq!(template_by_id("modern").unwrap().name, "Modern Gradient");
        assert!(template_by_id("fancy").is_none());
    }

    #[test]
    fn test_every_template_is_deterministic() {
        let record = record();
        let options = RenderOptions::default();
        for template in templates() {
            let first = template.render(&record, &options);
            let second = template.render(&record, &options);
            assert_eq!(first, second, "{} is not deterministic", template.id);
            assert!(first.starts_with("<!DOCTYPE html>"));
        }
    }

    #[test]
    fn test_sections_render_in_order() {
        let record = record();
        for template in templates() {
            let html = template.render(&record, &RenderOptions::default());
            let first = html.find("first").unwrap();
            let second = html.find("second").unwrap();
            let third = html.find("third").unwrap();
            assert!(first < second && second < third, "{} out of order", template.id);
        }
    }

    #[test]
    fn test_subject_is_escaped() {
        let html = render("modern", &record());
        assert!(html.contains("Weekly &lt;Digest&gt;"));
        assert!(!html.contains("<Digest>"));
    }

    #[test]
    fn test_image_without_url_renders_nothing() {
        let mut record = record();
        record.sections = vec![Section::new(SectionKind::Image, 0)];
        for template in templates() {
            let html = template.render(&record, &RenderOptions::default());
            assert_eq!(html.matches("<img").count(), 0);
        }

        record.sections[0].metadata = SectionMetadata {
            image_url: Some("https://example.com/a.png".to_string()),
            ..Default::default()
        };
        for template in templates() {
            let html = template.render(&record, &RenderOptions::default());
            assert_eq!(html.matches("<img").count(), 1);
        }
    }

    #[test]
    fn test_unknown_template() {
        let record = record();
        assert_eq!(render("fancy", &record), TEMPLATE_NOT_FOUND_HTML);
        assert_eq!(
            try_render("fancy", &record, &RenderOptions::default()),
            Err(RenderError::UnknownTemplate("fancy".to_string()))
        );
    }

    #[test]
    fn test_footer_uses_options() {
        let options = RenderOptions::default()
            .with_company("Acme & Co")
            .with_year(2031)
            .with_unsubscribe_url("https://acme.test/unsub");
        let html = render_with("newsletter", &record(), &options);
        assert!(html.contains("&copy; 2031 Acme &amp; Co"));
        assert!(html.contains(r#"href="https://acme.test/unsub""#));

        let html = render_with("simple", &record(), &options);
        assert!(html.contains("&copy; 2031 Acme &amp; Co. All rights reserved."));
    }
}
