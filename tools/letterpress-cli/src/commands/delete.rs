//! Delete a newsletter.

use anyhow::{Context as _, Result};
use dialoguer::Confirm;
use letterpress_core::NewsletterId;

use super::DeleteArgs;
use crate::context::Context;

/// Run the delete command.
pub async fn run(args: DeleteArgs, ctx: &Context) -> Result<()> {
    let record = ctx.load_record(&args.id)?;

    if !args.yes {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Delete \"{}\"? This cannot be undone.",
                record.display_subject()
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Delete cancelled");
            return Ok(());
        }
    }

    ctx.store()
        .try_delete(&NewsletterId::new(&args.id))
        .context("Failed to delete newsletter")?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "deleted": args.id }));
    } else {
        ctx.output
            .success(&format!("Deleted {}", record.display_subject()));
    }
    Ok(())
}
