//! Section editing.

use anyhow::{bail, Result};
use letterpress_core::{Direction, SectionId, SectionKind, SectionPatch};

use super::{SectionArgs, SectionCommand, SectionFields};
use crate::context::Context;

impl SectionFields {
    fn into_patch(self) -> SectionPatch {
        SectionPatch {
            content: self.content,
            image_url: self.image_url,
            image_alt: self.image_alt,
            button_url: self.button_url,
            button_text: self.button_text,
        }
    }
}

/// Run the section command.
pub async fn run(args: SectionArgs, ctx: &Context) -> Result<()> {
    match args.command {
        SectionCommand::Add { id, kind, fields } => add(&id, &kind, fields, ctx),
        SectionCommand::Update {
            id,
            section,
            kind,
            fields,
        } => update(&id, &section, kind.as_deref(), fields, ctx),
        SectionCommand::Move {
            id,
            section,
            direction,
        } => move_section(&id, &section, &direction, ctx),
        SectionCommand::Remove { id, section } => remove(&id, &section, ctx),
    }
}

fn add(id: &str, kind: &str, fields: SectionFields, ctx: &Context) -> Result<()> {
    let kind: SectionKind = kind.parse()?;
    let mut record = ctx.load_record(id)?;

    let section_id = record.add_section(kind);
    let patch = fields.into_patch();
    if !patch.is_empty() {
        record.update_section(&section_id, patch)?;
    }
    ctx.save_record(&mut record)?;

    if ctx.output.is_json() {
        ctx.output.json(&record.section(&section_id));
    } else {
        ctx.output
            .success(&format!("Added {} section {}", kind.label(), section_id));
    }
    Ok(())
}

fn update(
    id: &str,
    section: &str,
    kind: Option<&str>,
    fields: SectionFields,
    ctx: &Context,
) -> Result<()> {
    let section_id = SectionId::new(section);
    let kind: Option<SectionKind> = kind.map(str::parse).transpose()?;
    let patch = fields.into_patch();
    if kind.is_none() && patch.is_empty() {
        bail!("Nothing to update. Pass --kind or at least one field.");
    }

    let mut record = ctx.load_record(id)?;
    if let Some(kind) = kind {
        record.set_section_kind(&section_id, kind)?;
    }
    record.update_section(&section_id, patch)?;
    ctx.save_record(&mut record)?;

    if ctx.output.is_json() {
        ctx.output.json(&record.section(&section_id));
    } else {
        ctx.output.success(&format!("Updated section {}", section_id));
    }
    Ok(())
}

fn move_section(id: &str, section: &str, direction: &str, ctx: &Context) -> Result<()> {
    let section_id = SectionId::new(section);
    let direction: Direction = direction.parse()?;
    let mut record = ctx.load_record(id)?;

    if record.section(&section_id).is_none() {
        bail!("Section not found: {}", section);
    }
    if !record.move_section(&section_id, direction) {
        ctx.output.warn("Section is already at the edge; nothing moved");
        return Ok(());
    }
    ctx.save_record(&mut record)?;

    let position = record
        .section(&section_id)
        .map(|s| s.order + 1)
        .unwrap_or_default();
    ctx.output
        .success(&format!("Moved section {} to position {}", section_id, position));
    Ok(())
}

fn remove(id: &str, section: &str, ctx: &Context) -> Result<()> {
    let section_id = SectionId::new(section);
    let mut record = ctx.load_record(id)?;

    if !record.remove_section(&section_id) {
        bail!("Section not found: {}", section);
    }
    ctx.save_record(&mut record)?;

    ctx.output.success(&format!("Removed section {}", section_id));
    Ok(())
}
