//! List newsletters.

use anyhow::{Context as _, Result};
use letterpress_core::NewsletterStatus;

use super::ListArgs;
use crate::context::Context;
use crate::output::{format_time, status_badge, truncate};

/// Run the list command.
pub async fn run(args: ListArgs, ctx: &Context) -> Result<()> {
    let status: Option<NewsletterStatus> = args
        .status
        .as_deref()
        .map(str::parse)
        .transpose()?;

    let summaries: Vec<_> = ctx
        .store()
        .try_summaries()
        .context("Failed to read newsletters")?
        .into_iter()
        .filter(|s| status.map_or(true, |status| s.status == status))
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&summaries);
        return Ok(());
    }

    ctx.output.header("Newsletters");

    if summaries.is_empty() {
        ctx.output.info("No newsletters yet");
        ctx.output.info("Create one with `letterpress new` or `letterpress edit`");
        return Ok(());
    }

    let widths = [14, 40, 10, 17, 17];
    ctx.output
        .table_row(&["ID", "SUBJECT", "STATUS", "UPDATED", "SCHEDULED"], &widths);
    for summary in &summaries {
        let subject = truncate(summary.display_subject(), widths[1]);
        let updated = format_time(summary.updated_at);
        let scheduled = summary.scheduled_at.map(format_time).unwrap_or_default();
        ctx.output.table_row(
            &[
                summary.id.as_str(),
                &subject,
                summary.status.label(),
                &updated,
                &scheduled,
            ],
            &widths,
        );
    }

    if let Some(status) = status {
        ctx.output.info(&format!(
            "{} newsletter(s) with status {}",
            summaries.len(),
            status_badge(status)
        ));
    } else {
        ctx.output
            .info(&format!("{} newsletter(s)", summaries.len()));
    }

    Ok(())
}
