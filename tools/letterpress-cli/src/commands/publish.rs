//! Draft, schedule and send.

use anyhow::{anyhow, Context as _, Result};
use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use letterpress_core::{NewsletterId, NewsletterRecord};
use letterpress_editor::EditorSession;

use super::{IdArgs, ScheduleArgs};
use crate::context::Context;
use crate::output::{format_time, status_badge};

const FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

/// Run the draft command.
pub async fn run_draft(args: IdArgs, ctx: &Context) -> Result<()> {
    let session = open(&args.id, ctx)?;
    let record = session.save_draft()?;
    report(&record, "Saved as draft", ctx);
    Ok(())
}

/// Run the schedule command.
pub async fn run_schedule(args: ScheduleArgs, ctx: &Context) -> Result<()> {
    let at = parse_local_datetime(&args.at)?;
    let session = open(&args.id, ctx)?;
    let record = session.schedule(at)?;
    report(&record, &format!("Scheduled for {}", format_time(at)), ctx);
    Ok(())
}

/// Run the send command.
pub async fn run_send(args: IdArgs, ctx: &Context) -> Result<()> {
    let session = open(&args.id, ctx)?;
    let record = session.send()?;
    report(&record, "Marked as sent", ctx);
    Ok(())
}

fn open(
    id: &str,
    ctx: &Context,
) -> Result<EditorSession<letterpress_store::FileBlobStore>> {
    EditorSession::open(ctx.store(), &NewsletterId::new(id), &ctx.config.editor)
        .with_context(|| format!("Failed to open newsletter {}", id))
}

fn report(record: &NewsletterRecord, msg: &str, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(record);
        return;
    }
    ctx.output.success(msg);
    ctx.output.kv("Subject", record.display_subject());
    ctx.output.kv("Status", &status_badge(record.status));
}

/// Parse "YYYY-MM-DD HH:MM[:SS]" in the local timezone, or RFC 3339.
pub fn parse_local_datetime(input: &str) -> Result<DateTime<Utc>> {
    let input = input.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(input) {
        return Ok(at.with_timezone(&Utc));
    }

    let naive = FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .ok_or_else(|| anyhow!("Invalid date-time: {} (expected YYYY-MM-DD HH:MM)", input))?;

    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|at| at.with_timezone(&Utc))
        .ok_or_else(|| anyhow!("{} does not exist in the local timezone", input))
}
