//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Path => show_path(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    let config = &ctx.config;

    ctx.output.info("[storage]");
    ctx.output.kv("dir", &ctx.data_dir().display().to_string());
    ctx.output.kv("key", &config.storage.key);

    ctx.output.info("[editor]");
    ctx.output
        .kv("autosave_ms", &config.editor.autosave_ms.to_string());
    ctx.output.kv("preview_ms", &config.editor.preview_ms.to_string());
    ctx.output
        .kv("default_template", &config.editor.default_template);

    ctx.output.info("[render]");
    ctx.output.kv("company_name", &config.render.company_name);
    ctx.output
        .kv("copyright_year", &config.render.copyright_year.to_string());
    ctx.output
        .kv("unsubscribe_url", &config.render.unsubscribe_url);

    ctx.output.info("[logging]");
    ctx.output.kv("level", &config.logging.level);
    ctx.output
        .kv("format", &format!("{:?}", config.logging.format).to_lowercase());

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("letterpress.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let company = ctx
        .cwd
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("Your Company Name");

    fs::write(&config_path, generate_default_config(company))?;

    ctx.output.success(&format!("Created: {}", config_path.display()));
    Ok(())
}

fn show_path(ctx: &Context) -> Result<()> {
    let path = ctx
        .config_path
        .as_ref()
        .map(|p| p.display().to_string());

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "path": path }));
        return Ok(());
    }

    match path {
        Some(path) => println!("{}", path),
        None => ctx
            .output
            .info("No config file found; using defaults"),
    }
    Ok(())
}
