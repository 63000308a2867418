//! "Modern Gradient": gradient header band and a rounded content card.

use letterpress_core::NewsletterRecord;

use crate::document::EmailDocument;
use crate::escape::html_escape;
use crate::fragment::{render_sections, Theme};
use crate::options::RenderOptions;

const BODY: &str =
    "font-family:'Helvetica Neue',Helvetica,Arial,sans-serif;margin:0;padding:0;background-color:#f8fafc";
const CONTAINER: &str = "max-width:600px;margin:20px auto";
// Solid colour first for clients that drop gradients.
const HEADER: &str = "background-color:#667eea;background:linear-gradient(135deg,#667eea 0%,#764ba2 100%);padding:40px;border-radius:12px 12px 0 0;text-align:center";
const HEADER_HEADING: &str =
    "color:#ffffff;font-size:32px;font-weight:bold;margin:0;text-shadow:0 2px 4px rgba(0,0,0,0.1)";
const CONTENT: &str = "background-color:#ffffff;padding:40px;border-radius:0 0 12px 12px;box-shadow:0 4px 20px rgba(0,0,0,0.1)";
const FOOTER: &str = "padding:30px 40px;text-align:center";
const FOOTER_TEXT: &str = "font-size:14px;color:#8b8b8b;margin:0";
const FOOTER_SUBTEXT: &str = "font-size:12px;color:#b3b3b3;margin:10px 0 0 0";

const THEME: Theme = Theme {
    paragraph: "font-size:16px;line-height:1.6;color:#4a4a4a;margin-bottom:20px",
    h1: "font-size:22px;line-height:1.6;color:#4a4a4a;font-weight:bold;margin-bottom:12px",
    h2: "font-size:18px;line-height:1.6;color:#4a4a4a;font-weight:bold;margin-bottom:10px",
    h3: "font-size:16px;line-height:1.6;color:#4a4a4a;font-weight:bold;margin-bottom:8px",
    image: "max-width:100%;height:auto;border-radius:8px;box-shadow:0 4px 12px rgba(0,0,0,0.1)",
    image_wrapper: Some("margin:30px 0;text-align:center"),
    button_wrapper: "text-align:center;margin:30px 0",
    button: "display:inline-block;padding:16px 32px;background-color:#667eea;background:linear-gradient(135deg,#667eea 0%,#764ba2 100%);color:#ffffff;text-decoration:none;border-radius:8px;font-weight:bold;font-size:14px",
    divider: "border:none;height:2px;background:linear-gradient(90deg,#667eea,#764ba2);margin:30px 0;border-radius:1px",
};

pub(crate) fn render(record: &NewsletterRecord, options: &RenderOptions) -> String {
    let body = format!(
        r#"<div style="{container}">
<div style="{header}">
<h1 style="{header_heading}">{subject}</h1>
</div>
<div style="{content}">
{sections}</div>
<div style="{footer}">
<p style="{footer_text}">&copy; {year} {company}. All rights reserved.</p>
<p style="{footer_subtext}">You received this email because you subscribed to our newsletter.</p>
</div>
</div>"#,
        container = CONTAINER,
        header = HEADER,
        header_heading = HEADER_HEADING,
        subject = html_escape(&record.subject),
        content = CONTENT,
        sections = render_sections(record, &THEME),
        footer = FOOTER,
        footer_text = FOOTER_TEXT,
        footer_subtext = FOOTER_SUBTEXT,
        year = options.copyright_year,
        company = html_escape(&options.company_name),
    );

    EmailDocument::new(&record.subject)
        .with_body_style(BODY)
        .render(&body)
}
