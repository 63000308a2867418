//! Editor error types.

use letterpress_core::NewsletterError;
use letterpress_render::RenderError;
use letterpress_store::StoreError;
use thiserror::Error;

/// Errors returned by an editing session.
#[derive(Error, Debug)]
pub enum EditorError {
    /// No stored newsletter has this id.
    #[error("Newsletter not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Newsletter(#[from] NewsletterError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
