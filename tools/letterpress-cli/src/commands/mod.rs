//! CLI command implementations.

pub mod config;
pub mod delete;
pub mod edit;
pub mod export;
pub mod list;
pub mod new;
pub mod preview;
pub mod publish;
pub mod section;
pub mod show;
pub mod template;

use clap::{Args, Subcommand};

/// Arguments for the new command.
#[derive(Args)]
pub struct NewArgs {
    /// Subject line.
    #[arg(short, long)]
    pub subject: Option<String>,

    /// Template id (default: from config).
    #[arg(short, long)]
    pub template: Option<String>,
}

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Only show newsletters with this status (draft, scheduled, sent).
    #[arg(short, long)]
    pub status: Option<String>,
}

/// Arguments for commands that take a single newsletter id.
#[derive(Args)]
pub struct IdArgs {
    /// Newsletter id.
    pub id: String,
}

/// Arguments for the subject command.
#[derive(Args)]
pub struct SubjectArgs {
    /// Newsletter id.
    pub id: String,

    /// New subject line.
    pub subject: String,
}

/// Arguments for the template command.
#[derive(Args)]
pub struct TemplateArgs {
    /// Newsletter id.
    pub id: String,

    /// Template id (see `letterpress templates`).
    pub template: String,
}

/// Section fields shared by `section add` and `section update`.
#[derive(Args, Default)]
pub struct SectionFields {
    /// Markdown text, or the label of a button.
    #[arg(long)]
    pub content: Option<String>,

    /// Image URL.
    #[arg(long)]
    pub image_url: Option<String>,

    /// Image alt text.
    #[arg(long)]
    pub image_alt: Option<String>,

    /// Button link.
    #[arg(long)]
    pub button_url: Option<String>,

    /// Button label.
    #[arg(long)]
    pub button_text: Option<String>,
}

/// Arguments for the section command.
#[derive(Args)]
pub struct SectionArgs {
    #[command(subcommand)]
    pub command: SectionCommand,
}

#[derive(Subcommand)]
pub enum SectionCommand {
    /// Append a section.
    Add {
        /// Newsletter id.
        id: String,

        /// Section type (text, image, button, divider).
        #[arg(short, long, default_value = "text")]
        kind: String,

        #[command(flatten)]
        fields: SectionFields,
    },
    /// Change a section's fields or type.
    Update {
        /// Newsletter id.
        id: String,

        /// Section id.
        section: String,

        /// New section type.
        #[arg(short, long)]
        kind: Option<String>,

        #[command(flatten)]
        fields: SectionFields,
    },
    /// Move a section up or down.
    Move {
        /// Newsletter id.
        id: String,

        /// Section id.
        section: String,

        /// Direction (up or down).
        direction: String,
    },
    /// Remove a section.
    Remove {
        /// Newsletter id.
        id: String,

        /// Section id.
        section: String,
    },
}

/// Arguments for the preview command.
#[derive(Args)]
pub struct PreviewArgs {
    /// Newsletter id.
    pub id: String,

    /// Render with this template instead of the saved one.
    #[arg(short, long)]
    pub template: Option<String>,

    /// Write HTML to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Arguments for the export command.
#[derive(Args)]
pub struct ExportArgs {
    /// Output directory.
    #[arg(short, long, default_value = "out")]
    pub dir: String,
}

/// Arguments for the schedule command.
#[derive(Args)]
pub struct ScheduleArgs {
    /// Newsletter id.
    pub id: String,

    /// Local date and time, "YYYY-MM-DD HH:MM[:SS]".
    #[arg(long)]
    pub at: String,
}

/// Arguments for the delete command.
#[derive(Args)]
pub struct DeleteArgs {
    /// Newsletter id.
    pub id: String,

    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the edit command.
#[derive(Args)]
pub struct EditArgs {
    /// Newsletter id (default: start a new one).
    pub id: Option<String>,

    /// Keep a live HTML preview in this file.
    #[arg(short, long)]
    pub preview: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Print the path of the config file in use.
    Path,
}
