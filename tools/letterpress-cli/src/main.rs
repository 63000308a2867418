//! Letterpress CLI - write, preview and publish newsletters from the terminal.
//!
//! Commands:
//! - `letterpress new` - Create a newsletter
//! - `letterpress list` / `show` - Browse newsletters
//! - `letterpress subject` / `template` / `section` - Edit content
//! - `letterpress preview` / `export` - Render HTML
//! - `letterpress draft` / `schedule` / `send` - Publish
//! - `letterpress delete` - Delete a newsletter
//! - `letterpress edit` - Interactive editor with auto-save
//! - `letterpress config` - Manage configuration

mod commands;
mod config;
mod context;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    ConfigArgs, DeleteArgs, EditArgs, ExportArgs, IdArgs, ListArgs, NewArgs, PreviewArgs,
    ScheduleArgs, SectionArgs, SubjectArgs, TemplateArgs,
};

/// Letterpress - compose HTML email newsletters
#[derive(Parser)]
#[command(name = "letterpress")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a newsletter
    New(NewArgs),

    /// List newsletters, most recently updated first
    List(ListArgs),

    /// Show a newsletter and its sections
    Show(IdArgs),

    /// Set the subject line
    Subject(SubjectArgs),

    /// Choose the template
    Template(TemplateArgs),

    /// List available templates
    Templates,

    /// Add, update, move or remove sections
    Section(SectionArgs),

    /// Render a newsletter to HTML
    Preview(PreviewArgs),

    /// Render every newsletter to a directory
    Export(ExportArgs),

    /// Save as draft
    Draft(IdArgs),

    /// Schedule for a future date and time
    Schedule(ScheduleArgs),

    /// Mark as sent
    Send(IdArgs),

    /// Delete a newsletter
    Delete(DeleteArgs),

    /// Edit interactively with auto-save
    Edit(EditArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let ctx = match context::Context::load(cli.config.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };
    logging::init(&ctx.config.logging, cli.verbose);
    if let Some(path) = &ctx.config_path {
        ctx.output
            .debug(&format!("Using config {}", path.display()));
    }

    // Execute command
    let result = match cli.command {
        Commands::New(args) => commands::new::run(args, &ctx).await,
        Commands::List(args) => commands::list::run(args, &ctx).await,
        Commands::Show(args) => commands::show::run(args, &ctx).await,
        Commands::Subject(args) => commands::template::run_subject(args, &ctx).await,
        Commands::Template(args) => commands::template::run_template(args, &ctx).await,
        Commands::Templates => commands::template::run_list(&ctx).await,
        Commands::Section(args) => commands::section::run(args, &ctx).await,
        Commands::Preview(args) => commands::preview::run(args, &ctx).await,
        Commands::Export(args) => commands::export::run(args, &ctx).await,
        Commands::Draft(args) => commands::publish::run_draft(args, &ctx).await,
        Commands::Schedule(args) => commands::publish::run_schedule(args, &ctx).await,
        Commands::Send(args) => commands::publish::run_send(args, &ctx).await,
        Commands::Delete(args) => commands::delete::run(args, &ctx).await,
        Commands::Edit(args) => commands::edit::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_section_add() {
        let cli = Cli::try_parse_from([
            "letterpress",
            "section",
            "add",
            "abc",
            "--kind",
            "button",
            "--button-url",
            "https://example.com",
            "--json",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Section(args) => match args.command {
                commands::SectionCommand::Add { id, kind, fields } => {
                    assert_eq!(id, "abc");
                    assert_eq!(kind, "button");
                    assert_eq!(fields.button_url.as_deref(), Some("https://example.com"));
                }
                _ => panic!("expected section add"),
            },
            _ => panic!("expected section command"),
        }
    }

    #[test]
    fn test_parse_schedule() {
        let cli =
            Cli::try_parse_from(["letterpress", "schedule", "abc", "--at", "2030-01-01 09:00"])
                .unwrap();
        assert!(matches!(cli.command, Commands::Schedule(ref a) if a.at == "2030-01-01 09:00"));
    }
}
