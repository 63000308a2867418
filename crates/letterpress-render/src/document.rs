//! Email document shell.

use crate::escape::html_escape;

/// Head content for the email document.
#[derive(Debug, Clone, Default)]
pub(crate) struct HeadContent {
    /// Document title.
    pub title: Option<String>,
    /// Meta tags as (name, content).
    pub meta: Vec<(String, String)>,
}

impl HeadContent {
    /// Create head content with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Add a meta tag.
    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_string(), content.to_string()));
        self
    }

    /// Render head content to HTML.
    pub fn render(&self) -> String {
        let mut html = String::from("<meta charset=\"utf-8\">\n");

        for (name, content) in &self.meta {
            html.push_str(&format!(
                r#"<meta name="{}" content="{}">"#,
                html_escape(name),
                html_escape(content)
            ));
            html.push('\n');
        }

        if let Some(title) = &self.title {
            html.push_str(&format!("<title>{}</title>\n", html_escape(title)));
        }

        html
    }
}

/// A complete HTML email: doctype, head and a styled body.
#[derive(Debug, Clone)]
pub(crate) struct EmailDocument {
    head: HeadContent,
    body_style: &'static str,
}

impl EmailDocument {
    /// Create a document titled with the newsletter subject.
    pub fn new(subject: &str) -> Self {
        let head = HeadContent::new(subject)
            .with_meta("viewport", "width=device-width, initial-scale=1.0")
            .with_meta("x-apple-disable-message-reformatting", "");
        Self {
            head,
            body_style: "",
        }
    }

    /// Set the inline style of `<body>`.
    pub fn with_body_style(mut self, style: &'static str) -> Self {
        self.body_style = style;
        self
    }

    /// Wrap `body` in the document.
    pub fn render(&self, body: &str) -> String {
        let mut html = String::with_capacity(body.len() + 512);
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str(&self.head.render());
        html.push_str("</head>\n");
        html.push_str(&format!("<body style=\"{}\">\n", self.body_style));
        html.push_str(body);
        html.push_str("\n</body>\n</html>\n");
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_structure() {
        let html = EmailDocument::new("Hello & welcome")
            .with_body_style("margin:0")
            .render("<p>x</p>");

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Hello &amp; welcome</title>"));
        assert!(html.contains(r#"<body style="margin:0">"#));
        assert!(html.contains("<p>x</p>"));
        assert!(html.trim_end().ends_with("</html>"));
    }
}
