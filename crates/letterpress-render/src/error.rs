//! Render error types.

use thiserror::Error;

/// Errors that can occur when rendering a newsletter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// No template is registered under this id.
    #[error("Unknown template: {0} (expected simple, modern or newsletter)")]
    UnknownTemplate(String),
}
