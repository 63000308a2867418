//! "Simple & Clean": single column, centered heading.

use letterpress_core::NewsletterRecord;

use crate::document::EmailDocument;
use crate::escape::html_escape;
use crate::fragment::{render_sections, Theme};
use crate::options::RenderOptions;

const BODY: &str = "font-family:'Arial',sans-serif;margin:0;padding:0;background-color:#f4f4f4";
const CONTAINER: &str = "background-color:#ffffff;padding:40px;max-width:600px;margin:20px auto";
const HEADING: &str =
    "color:#333333;font-size:28px;font-weight:bold;margin-bottom:20px;text-align:center;line-height:1.2";
const RULE: &str = "border:none;border-top:1px solid #eeeeee;margin:20px 0";
const FOOTER: &str = "font-size:12px;color:#666666;text-align:center;margin-top:20px";

const THEME: Theme = Theme {
    paragraph: "font-size:16px;line-height:1.5;color:#333333;margin-bottom:16px",
    h1: "font-size:24px;line-height:1.5;color:#333333;font-weight:bold;margin-bottom:12px",
    h2: "font-size:20px;line-height:1.5;color:#333333;font-weight:bold;margin-bottom:10px",
    h3: "font-size:18px;line-height:1.5;color:#333333;font-weight:bold;margin-bottom:8px",
    image: "max-width:100%;height:auto;margin:20px 0;display:block",
    image_wrapper: None,
    button_wrapper: "text-align:center;margin:20px 0",
    button: "display:inline-block;padding:12px 24px;background-color:#007bff;color:#ffffff;text-decoration:none;border-radius:4px;font-weight:bold;font-size:14px",
    divider: RULE,
};

pub(crate) fn render(record: &NewsletterRecord, options: &RenderOptions) -> String {
    let body = format!(
        r#"<div style="{container}">
<h1 style="{heading}">{subject}</h1>
<div>
{sections}</div>
<hr style="{rule}">
<p style="{footer}">&copy; {year} {company}. All rights reserved.</p>
</div>"#,
        container = CONTAINER,
        heading = HEADING,
        subject = html_escape(&record.subject),
        sections = render_sections(record, &THEME),
        rule = RULE,
        footer = FOOTER,
        year = options.copyright_year,
        company = html_escape(&options.company_name),
    );

    EmailDocument::new(&record.subject)
        .with_body_style(BODY)
        .render(&body)
}
