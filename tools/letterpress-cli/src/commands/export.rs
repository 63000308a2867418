//! Render every newsletter to a directory.

use anyhow::{Context as _, Result};
use letterpress_render::render_with;
use serde::Serialize;

use super::ExportArgs;
use crate::context::Context;

#[derive(Serialize)]
struct Exported {
    id: String,
    path: String,
}

/// Run the export command.
pub async fn run(args: ExportArgs, ctx: &Context) -> Result<()> {
    let records = ctx
        .store()
        .try_list()
        .context("Failed to read newsletters")?;
    let dir = ctx.resolve_path(&args.dir);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let pb = ctx
        .output
        .progress(records.len() as u64, "Rendering newsletters");
    let mut exported = Vec::with_capacity(records.len());

    let mut skipped = Vec::new();

    for record in &records {
        pb.set_message(record.display_subject().to_string());
        let Some(file_name) = export_file_name(record.id.as_str()) else {
            tracing::warn!(id = %record.id, "Skipping newsletter with an unsafe id");
            skipped.push(record.id.to_string());
            pb.inc(1);
            continue;
        };
        let html = render_with(&record.template_id, record, &ctx.config.render);
        let path = dir.join(file_name);
        std::fs::write(&path, html)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        exported.push(Exported {
            id: record.id.to_string(),
            path: path.display().to_string(),
        });
        pb.inc(1);
    }
    pb.finish_and_clear();

    for id in &skipped {
        ctx.output
            .warn(&format!("Skipped {:?}: id is not a safe file name", id));
    }

    if ctx.output.is_json() {
        ctx.output.json(&exported);
    } else {
        ctx.output.success(&format!(
            "Exported {} newsletter(s) to {}",
            exported.len(),
            dir.display()
        ));
    }
    Ok(())
}

/// `<id>.html`, or `None` when the id could escape the export directory.
fn export_file_name(id: &str) -> Option<String> {
    let safe = !id.is_empty()
        && !id.starts_with('.')
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.');
    safe.then(|| format!("{}.html", id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_file_name_accepts_generated_ids() {
        assert_eq!(export_file_name("k3x9a1").as_deref(), Some("k3x9a1.html"));
        assert_eq!(
            export_file_name("nl-123_v2").as_deref(),
            Some("nl-123_v2.html")
        );
    }

    #[test]
    fn test_export_file_name_rejects_path_tricks() {
        for id in ["", "../x", "a/b", "a\\b", "..", ".hidden", "/etc/passwd", "c:x"] {
            assert!(export_file_name(id).is_none(), "accepted {:?}", id);
        }
    }
}
