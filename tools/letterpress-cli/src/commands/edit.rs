//! Interactive editor.
//!
//! Edits are auto-saved after the configured quiet period and the preview
//! file, if any, is regenerated after its own shorter one. Pending work is
//! flushed on quit.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use dialoguer::{Confirm, Input, Select};
use letterpress_core::{Direction, NewsletterId, SectionId, SectionKind, SectionPatch};
use letterpress_editor::{EditorError, EditorSession, PreviewPane};
use letterpress_render::templates;
use letterpress_store::FileBlobStore;

use super::publish::parse_local_datetime;
use super::EditArgs;
use crate::context::Context;
use crate::output::{status_badge, truncate};

type Session = EditorSession<FileBlobStore>;

#[derive(Clone, Copy)]
enum Action {
    Subject,
    Template,
    AddSection,
    EditSection,
    MoveSection,
    RemoveSection,
    SaveDraft,
    Schedule,
    Send,
    Quit,
}

const ACTIONS: [(Action, &str); 10] = [
    (Action::Subject, "Edit subject"),
    (Action::Template, "Choose template"),
    (Action::AddSection, "Add section"),
    (Action::EditSection, "Edit section"),
    (Action::MoveSection, "Move section"),
    (Action::RemoveSection, "Remove section"),
    (Action::SaveDraft, "Save draft"),
    (Action::Schedule, "Schedule"),
    (Action::Send, "Send"),
    (Action::Quit, "Quit"),
];

/// Run the edit command.
pub async fn run(args: EditArgs, ctx: &Context) -> Result<()> {
    let id = args.id.as_deref().map(NewsletterId::new);
    let mut session = EditorSession::open_or_create(ctx.store(), id.as_ref(), &ctx.config.editor)
        .context("Failed to open editor")?;

    if let Some(path) = args.preview {
        let path = ctx.resolve_path(&path);
        session = session.with_preview(preview_pane(path.clone(), ctx));
        ctx.output
            .info(&format!("Live preview: {}", path.display()));
    }

    loop {
        print_summary(&session, ctx);

        let labels: Vec<_> = ACTIONS.iter().map(|(_, label)| *label).collect();
        let choice = Select::new()
            .with_prompt("What next?")
            .items(&labels)
            .default(0)
            .interact()?;

        let (action, _) = ACTIONS[choice];
        if let Action::Quit = action {
            break;
        }
        if let Err(e) = apply(action, &session, ctx) {
            ctx.output.error(&format!("{:#}", e));
        }
    }

    if session.flush() {
        ctx.output.success("Saved pending changes");
    }
    ctx.output.info(&format!("Newsletter id: {}", session.id()));
    Ok(())
}

fn preview_pane(path: PathBuf, ctx: &Context) -> PreviewPane {
    PreviewPane::new(ctx.config.editor.preview_delay(), ctx.config.render.clone()).with_sink(
        move |html| {
            if let Err(e) = std::fs::write(&path, html) {
                tracing::error!(path = %path.display(), error = %e, "Failed to write preview");
            }
        },
    )
}

fn print_summary(session: &Session, ctx: &Context) {
    let record = session.snapshot();
    ctx.output.header(record.display_subject());
    ctx.output.kv("Status", &status_badge(record.status));
    ctx.output.kv("Template", &record.template_id);
    for section in record.sorted_sections() {
        ctx.output.list_item(&format!(
            "{}. {} {}",
            section.order + 1,
            section.kind.label(),
            truncate(&section.content.replace('\n', " "), 50)
        ));
    }
}

fn apply(action: Action, session: &Session, ctx: &Context) -> Result<()> {
    match action {
        Action::Subject => {
            let subject: String = Input::new()
                .with_prompt("Subject")
                .with_initial_text(session.snapshot().subject)
                .allow_empty(true)
                .interact_text()?;
            session.set_subject(subject);
        }
        Action::Template => {
            let all = templates();
            let current = session.snapshot().template_id;
            let names: Vec<_> = all.iter().map(|t| format!("{}: {}", t.name, t.description)).collect();
            let index = Select::new()
                .with_prompt("Template")
                .items(&names)
                .default(all.iter().position(|t| t.id == current).unwrap_or(0))
                .interact()?;
            session.set_template(all[index].id)?;
        }
        Action::AddSection => {
            let kinds = SectionKind::SELECTABLE;
            let labels: Vec<_> = kinds.iter().map(|k| k.label()).collect();
            let index = Select::new()
                .with_prompt("Section type")
                .items(&labels)
                .default(0)
                .interact()?;
            let id = session.add_section(kinds[index]);
            edit_fields(session, &id)?;
        }
        Action::EditSection => {
            if let Some(id) = pick_section(session, "Edit which section?")? {
                edit_fields(session, &id)?;
            }
        }
        Action::MoveSection => {
            if let Some(id) = pick_section(session, "Move which section?")? {
                let direction = if Select::new()
                    .with_prompt("Direction")
                    .items(&["Up", "Down"])
                    .default(0)
                    .interact()?
                    == 0
                {
                    Direction::Up
                } else {
                    Direction::Down
                };
                if !session.move_section(&id, direction) {
                    ctx.output.warn("Section is already at the edge");
                }
            }
        }
        Action::RemoveSection => {
            if let Some(id) = pick_section(session, "Remove which section?")? {
                let confirmed = Confirm::new()
                    .with_prompt("Remove this section?")
                    .default(false)
                    .interact()?;
                if confirmed {
                    session.remove_section(&id);
                }
            }
        }
        Action::SaveDraft => {
            session.save_draft()?;
            ctx.output.success("Saved as draft");
        }
        Action::Schedule => {
            let input: String = Input::new()
                .with_prompt("Send at (YYYY-MM-DD HH:MM)")
                .interact_text()?;
            let at = parse_local_datetime(&input)?;
            session.schedule(at)?;
            ctx.output.success("Scheduled");
        }
        Action::Send => match session.send() {
            Ok(_) => ctx.output.success("Marked as sent"),
            Err(EditorError::Newsletter(letterpress_core::NewsletterError::NotReadyToSend(
                blockers,
            ))) => {
                for blocker in blockers {
                    ctx.output.warn(&blocker.to_string());
                }
            }
            Err(e) => return Err(e.into()),
        },
        Action::Quit => {}
    }
    Ok(())
}

fn pick_section(session: &Session, prompt: &str) -> Result<Option<SectionId>> {
    let record = session.snapshot();
    let sections = record.sorted_sections();
    if sections.is_empty() {
        return Ok(None);
    }

    let labels: Vec<_> = sections
        .iter()
        .map(|s| format!("{}. {} {}", s.order + 1, s.kind.label(), truncate(&s.content, 40)))
        .collect();
    let index = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(Some(sections[index].id.clone()))
}

fn edit_fields(session: &Session, id: &SectionId) -> Result<()> {
    let record = session.snapshot();
    let Some(section) = record.section(id) else {
        return Ok(());
    };

    let mut patch = SectionPatch::default();
    match section.kind {
        SectionKind::Text => {
            patch.content = Some(prompt("Markdown text", &section.content)?);
        }
        SectionKind::Image => {
            patch.image_url = Some(prompt("Image URL", section.image_url().unwrap_or_default())?);
            patch.image_alt = Some(prompt("Alt text", section.image_alt().unwrap_or_default())?);
        }
        SectionKind::Button => {
            patch.button_text = Some(prompt("Button text", section.button_label())?);
            patch.button_url = Some(prompt("Button URL", section.button_url().unwrap_or_default())?);
        }
        SectionKind::Divider | SectionKind::Unknown => return Ok(()),
    }

    session.update_section(id, patch)?;
    Ok(())
}

fn prompt(label: &str, initial: &str) -> Result<String> {
    Ok(Input::new()
        .with_prompt(label)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()?)
}
