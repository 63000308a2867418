//! Per-section HTML fragments.

use letterpress_core::{NewsletterRecord, Section, SectionKind};
use pulldown_cmark::{html, CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use crate::escape::html_escape;

/// Inline styles a template applies to section fragments.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Theme {
    pub paragraph: &'static str,
    pub h1: &'static str,
    pub h2: &'static str,
    pub h3: &'static str,
    pub image: &'static str,
    /// Block wrapping the image, if the template uses one.
    pub image_wrapper: Option<&'static str>,
    pub button_wrapper: &'static str,
    pub button: &'static str,
    pub divider: &'static str,
}

impl Theme {
    fn heading_style(&self, level: HeadingLevel) -> Option<&'static str> {
        match level {
            HeadingLevel::H1 => Some(self.h1),
            HeadingLevel::H2 => Some(self.h2),
            HeadingLevel::H3 => Some(self.h3),
            _ => None,
        }
    }
}

fn heading_tag(level: HeadingLevel) -> &'static str {
    match level {
        HeadingLevel::H1 => "h1",
        HeadingLevel::H2 => "h2",
        HeadingLevel::H3 => "h3",
        HeadingLevel::H4 => "h4",
        HeadingLevel::H5 => "h5",
        HeadingLevel::H6 => "h6",
    }
}

/// Render every section of a record, sorted by `order`.
pub(crate) fn render_sections(record: &NewsletterRecord, theme: &Theme) -> String {
    record
        .sorted_sections()
        .into_iter()
        .map(|section| render_section(section, theme))
        .collect()
}

/// Render one section. Returns an empty string for sections with no
/// visible output.
pub(crate) fn render_section(section: &Section, theme: &Theme) -> String {
    match section.kind {
        SectionKind::Text => render_markdown(&section.content, theme),
        SectionKind::Image => render_image(section, theme),
        SectionKind::Button => render_button(section, theme),
        SectionKind::Divider => format!("<hr style=\"{}\">\n", theme.divider),
        SectionKind::Unknown => String::new(),
    }
}

fn render_image(section: &Section, theme: &Theme) -> String {
    let Some(url) = section.image_url() else {
        return String::new();
    };

    let img = format!(
        r#"<img src="{}" alt="{}" style="{}">"#,
        html_escape(url),
        html_escape(section.image_alt().unwrap_or("Newsletter image")),
        theme.image
    );

    match theme.image_wrapper {
        Some(style) => format!("<div style=\"{}\">{}</div>\n", style, img),
        None => format!("{}\n", img),
    }
}

fn render_button(section: &Section, theme: &Theme) -> String {
    let href = section
        .button_url()
        .map(|url| format!(r#" href="{}""#, html_escape(url)))
        .unwrap_or_default();

    format!(
        "<div style=\"{}\"><a{} style=\"{}\">{}</a></div>\n",
        theme.button_wrapper,
        href,
        theme.button,
        html_escape(section.button_label())
    )
}

/// Markdown to HTML with the template's paragraph and heading styles.
///
/// Raw HTML in the source is emitted as escaped text.
pub(crate) fn render_markdown(source: &str, theme: &Theme) -> String {
    let options = Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES;

    let events = Parser::new_ext(source, options).map(|event| match event {
        Event::Start(Tag::Paragraph) => Event::Html(CowStr::from(format!(
            "<p style=\"{}\">",
            theme.paragraph
        ))),
        Event::End(TagEnd::Paragraph) => Event::Html("</p>\n".into()),
        Event::Start(Tag::Heading { level, .. }) if theme.heading_style(level).is_some() => {
            Event::Html(CowStr::from(format!(
                "<{} style=\"{}\">",
                heading_tag(level),
                theme.heading_style(level).unwrap_or_default()
            )))
        }
        Event::End(TagEnd::Heading(level)) if theme.heading_style(level).is_some() => {
            Event::Html(CowStr::from(format!("</{}>\n", heading_tag(level))))
        }
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::new();
    html::push_html(&mut out, events);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use letterpress_core::SectionMetadata;

    const THEME: Theme = Theme {
        paragraph: "P",
        h1: "H1",
        h2: "H2",
        h3: "H3",
        image: "IMG",
        image_wrapper: None,
        button_wrapper: "BW",
        button: "BTN",
        divider: "HR",
    };

    #[test]
    fn test_markdown_paragraph_and_headings() {
        let html = render_markdown("# Title\n\n## Sub\n\nHello **world**", &THEME);
        assert!(html.contains(r#"<h1 style="H1">Title</h1>"#));
        assert!(html.contains(r#"<h2 style="H2">Sub</h2>"#));
        assert!(html.contains(r#"<p style="P">Hello <strong>world</strong></p>"#));
    }

    #[test]
    fn test_markdown_links_and_lists() {
        let html = render_markdown("- [link](https://example.com)\n- *two*", &THEME);
        assert!(html.contains("<ul>"));
        assert!(html.contains(r#"<a href="https://example.com">link</a>"#));
        assert!(html.contains("<em>two</em>"));
    }

    #[test]
    fn test_markdown_escapes_raw_html() {
        let html = render_markdown("<script>alert(1)</script>\n\nhi <b>x</b>", &THEME);
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_deep_headings_unstyled() {
        let html = render_markdown("#### Small", &THEME);
        assert!(html.contains("<h4>Small</h4>"));
    }

    #[test]
    fn test_image_requires_url() {
        let section = Section::new(SectionKind::Image, 0);
        assert_eq!(render_section(&section, &THEME), "");

        let section = section.with_metadata(SectionMetadata {
            image_url: Some("https://example.com/cat.png".to_string()),
            ..Default::default()
        });
        let html = render_section(&section, &THEME);
        assert_eq!(html.matches("<img").count(), 1);
        assert!(html.contains(r#"src="https://example.com/cat.png""#));
        assert!(html.contains(r#"alt="Newsletter image""#));
    }

    #[test]
    fn test_button_label_and_href() {
        let section = Section::new(SectionKind::Button, 0)
            .with_content("Fallback")
            .with_metadata(SectionMetadata {
                button_url: Some("https://example.com/?a=1&b=2".to_string()),
                ..Default::default()
            });
        let html = render_section(&section, &THEME);
        assert!(html.contains(r#"href="https://example.com/?a=1&amp;b=2""#));
        assert!(html.contains(">Fallback</a>"));
    }

    #[test]
    fn test_button_without_url_has_no_href() {
        let section = Section::new(SectionKind::Button, 0).with_content("Click");
        let html = render_section(&section, &THEME);
        assert!(html.contains("<a style=\"BTN\">Click</a>"));
    }

    #[test]
    fn test_divider_and_unknown() {
        let divider = Section::new(SectionKind::Divider, 0);
        assert_eq!(render_section(&divider, &THEME), "<hr style=\"HR\">\n");

        let unknown = Section::new(SectionKind::Unknown, 0).with_content("ignored");
        assert_eq!(render_section(&unknown, &THEME), "");
    }
}
