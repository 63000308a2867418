//! Show one newsletter.

use anyhow::Result;
use letterpress_core::SectionKind;

use super::IdArgs;
use crate::context::Context;
use crate::output::{format_time, status_badge, truncate};

/// Run the show command.
pub async fn run(args: IdArgs, ctx: &Context) -> Result<()> {
    let record = ctx.load_record(&args.id)?;

    if ctx.output.is_json() {
        ctx.output.json(&record);
        return Ok(());
    }

    ctx.output.header(record.display_subject());
    ctx.output.kv("ID", record.id.as_str());
    ctx.output.kv("Status", &status_badge(record.status));
    ctx.output.kv("Template", &record.template_id);
    ctx.output.kv("Created", &format_time(record.created_at));
    ctx.output.kv("Updated", &format_time(record.updated_at));
    if let Some(at) = record.scheduled_at {
        ctx.output.kv("Scheduled", &format_time(at));
    }

    ctx.output.header("Sections");
    let sections = record.sorted_sections();
    if sections.is_empty() {
        ctx.output.info("No sections yet");
    }
    for section in sections {
        let detail = match section.kind {
            SectionKind::Text => truncate(&section.content.replace('\n', " "), 60),
            SectionKind::Image => match section.image_url() {
                Some(url) => url.to_string(),
                None => "(no image URL)".to_string(),
            },
            SectionKind::Button => format!(
                "{} -> {}",
                section.button_label(),
                section.button_url().unwrap_or("(no link)")
            ),
            SectionKind::Divider => String::new(),
            SectionKind::Unknown => "(unsupported section)".to_string(),
        };
        ctx.output.list_item(&format!(
            "{}. [{}] {} {}",
            section.order + 1,
            section.id,
            section.kind.label(),
            detail
        ));
    }

    let blockers = record.send_blockers();
    if !blockers.is_empty() {
        ctx.output.info("");
        for blocker in blockers {
            ctx.output.warn(&blocker.to_string());
        }
    }

    Ok(())
}
