//! "Professional Newsletter": brand band, subject, content and a two-column footer.

use letterpress_core::NewsletterRecord;

use crate::document::EmailDocument;
use crate::escape::html_escape;
use crate::fragment::{render_sections, Theme};
use crate::options::RenderOptions;

const BODY: &str = "font-family:'Inter',-apple-system,BlinkMacSystemFont,'Segoe UI',sans-serif;margin:0;padding:0;background-color:#f9fafb;line-height:1.6";
const CONTAINER: &str = "background-color:#ffffff;max-width:600px;margin:20px auto";
const BRAND_BAND: &str = "background-color:#1f2937;padding:32px;text-align:center";
const BRAND: &str = "color:#f9fafb;font-size:24px;font-weight:bold;margin:0";
const SUBJECT_BLOCK: &str = "padding:32px 32px 16px 32px";
const SUBJECT: &str =
    "color:#1f2937;font-size:24px;font-weight:bold;margin:0 0 24px 0;line-height:1.3";
const CONTENT: &str = "padding:0 32px 32px 32px";
const SEPARATOR: &str = "border:none;border-top:1px solid #e5e7eb;margin:0";
const FOOTER: &str = "padding:24px 32px";
const FOOTER_LEFT: &str = "width:50%";
const FOOTER_RIGHT: &str = "width:50%;text-align:right";
const FOOTER_TEXT: &str = "font-size:13px;color:#6b7280;margin:0";
const LINK: &str = "color:#2563eb;text-decoration:none";

const THEME: Theme = Theme {
    paragraph: "font-size:15px;line-height:1.6;color:#374151;margin-bottom:16px",
    h1: "font-size:20px;line-height:1.6;color:#374151;font-weight:bold;margin-bottom:12px",
    h2: "font-size:18px;line-height:1.6;color:#374151;font-weight:bold;margin-bottom:10px",
    h3: "font-size:16px;line-height:1.6;color:#374151;font-weight:bold;margin-bottom:8px",
    image: "max-width:100%;height:auto",
    image_wrapper: Some("margin:24px 0"),
    button_wrapper: "margin:24px 0",
    button: "display:inline-block;padding:14px 28px;background-color:#2563eb;color:#ffffff;text-decoration:none;border-radius:6px;font-weight:600;font-size:14px",
    divider: "border:none;border-top:1px solid #e5e7eb;margin:24px 0",
};

pub(crate) fn render(record: &NewsletterRecord, options: &RenderOptions) -> String {
    let body = format!(
        r#"<div style="{container}">
<div style="{brand_band}">
<p style="{brand}">&#128231; Newsletter</p>
</div>
<div style="{subject_block}">
<h1 style="{subject_style}">{subject}</h1>
</div>
<div style="{content}">
{sections}</div>
<hr style="{separator}">
<table role="presentation" width="100%" cellpadding="0" cellspacing="0" style="{footer}">
<tr>
<td style="{footer_left}"><p style="{footer_text}">&copy; {year} {company}</p></td>
<td style="{footer_right}"><p style="{footer_text}"><a href="{unsubscribe}" style="{link}">Unsubscribe</a></p></td>
</tr>
</table>
</div>"#,
        container = CONTAINER,
        brand_band = BRAND_BAND,
        brand = BRAND,
        subject_block = SUBJECT_BLOCK,
        subject_style = SUBJECT,
        subject = html_escape(&record.subject),
        content = CONTENT,
        sections = render_sections(record, &THEME),
        separator = SEPARATOR,
        footer = FOOTER,
        footer_left = FOOTER_LEFT,
        footer_right = FOOTER_RIGHT,
        footer_text = FOOTER_TEXT,
        year = options.copyright_year,
        company = html_escape(&options.company_name),
        unsubscribe = html_escape(&options.unsubscribe_url),
        link = LINK,
    );

    EmailDocument::new(&record.subject)
        .with_body_style(BODY)
        .render(&body)
}
