//! Create a newsletter.

use anyhow::{bail, Result};
use letterpress_core::NewsletterRecord;
use letterpress_render::template_by_id;

use super::NewArgs;
use crate::context::Context;

/// Run the new command.
pub async fn run(args: NewArgs, ctx: &Context) -> Result<()> {
    let template_id = args
        .template
        .unwrap_or_else(|| ctx.config.editor.default_template.clone());
    if template_by_id(&template_id).is_none() {
        bail!("Unknown template: {}. Run `letterpress templates` to list them.", template_id);
    }

    let mut record = NewsletterRecord::new(template_id);
    if let Some(subject) = args.subject {
        record.subject = subject;
    }
    ctx.save_record(&mut record)?;

    if ctx.output.is_json() {
        ctx.output.json(&record);
        return Ok(());
    }

    ctx.output
        .success(&format!("Created newsletter {}", record.id));
    ctx.output.kv("Subject", record.display_subject());
    ctx.output.kv("Template", &record.template_id);

    Ok(())
}
