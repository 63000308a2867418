//! Subject and template changes, and the template catalogue.

use anyhow::{bail, Result};
use letterpress_render::{template_by_id, templates};
use serde::Serialize;

use super::{SubjectArgs, TemplateArgs};
use crate::context::Context;

/// Run the subject command.
pub async fn run_subject(args: SubjectArgs, ctx: &Context) -> Result<()> {
    let mut record = ctx.load_record(&args.id)?;
    record.subject = args.subject;
    ctx.save_record(&mut record)?;

    if ctx.output.is_json() {
        ctx.output.json(&record);
    } else {
        ctx.output
            .success(&format!("Subject set: {}", record.display_subject()));
    }
    Ok(())
}

/// Run the template command.
pub async fn run_template(args: TemplateArgs, ctx: &Context) -> Result<()> {
    let Some(template) = template_by_id(&args.template) else {
        bail!(
            "Unknown template: {}. Run `letterpress templates` to list them.",
            args.template
        );
    };

    let mut record = ctx.load_record(&args.id)?;
    record.template_id = template.id.to_string();
    ctx.save_record(&mut record)?;

    if ctx.output.is_json() {
        ctx.output.json(&record);
    } else {
        ctx.output.success(&format!("Template set: {}", template.name));
    }
    Ok(())
}

#[derive(Serialize)]
struct TemplateInfo {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    default: bool,
}

/// Run the templates command.
pub async fn run_list(ctx: &Context) -> Result<()> {
    let default_id = ctx.config.editor.default_template.as_str();
    let infos: Vec<_> = templates()
        .iter()
        .map(|t| TemplateInfo {
            id: t.id,
            name: t.name,
            description: t.description,
            default: t.id == default_id,
        })
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&infos);
        return Ok(());
    }

    ctx.output.header("Templates");
    for info in &infos {
        let marker = if info.default { " (default)" } else { "" };
        ctx.output
            .list_item(&format!("{}{}: {}", info.id, marker, info.name));
        ctx.output.kv("  ", info.description);
    }
    Ok(())
}
