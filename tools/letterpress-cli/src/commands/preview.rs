//! Render a newsletter to HTML.

use anyhow::{bail, Context as _, Result};
use letterpress_render::{render_preview, template_by_id};

use super::PreviewArgs;
use crate::context::Context;

/// Run the preview command.
pub async fn run(args: PreviewArgs, ctx: &Context) -> Result<()> {
    let mut record = ctx.load_record(&args.id)?;
    if let Some(template) = args.template {
        if template_by_id(&template).is_none() {
            bail!("Unknown template: {}", template);
        }
        record.template_id = template;
    }

    let html = render_preview(&record, &ctx.config.render);

    match args.output {
        Some(path) => {
            let path = ctx.resolve_path(&path);
            std::fs::write(&path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            ctx.output
                .success(&format!("Wrote preview to {}", path.display()));
        }
        None => print!("{}", html),
    }
    Ok(())
}
