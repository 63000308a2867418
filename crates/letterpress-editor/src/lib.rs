//! Interactive editing for Letterpress newsletters.
//!
//! An [`EditorSession`] owns one record while it is edited. Changes are
//! persisted by a debounced auto-save and mirrored into an optional
//! debounced [`PreviewPane`]. Both timers are [`Debouncer`]s on the tokio
//! runtime, so sessions must be driven from inside one.
//!
//! # Example
//!
//! ```rust,ignore
//! let store = Arc::new(NewsletterStore::new(FileBlobStore::new("data")));
//! let session = EditorSession::create(store, &EditorConfig::default())?;
//! session.set_subject("Launch week");
//! session.add_section(SectionKind::Text);
//! session.flush();
//! ```

mod config;
mod debounce;
mod error;
mod preview;
mod session;

pub use config::EditorConfig;
pub use debounce::Debouncer;
pub use error::EditorError;
pub use preview::PreviewPane;
pub use session::EditorSession;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Debouncer, EditorConfig, EditorError, EditorSession, PreviewPane};
}
