//! HTML email rendering for Letterpress newsletters.
//!
//! Every template is a pure function of the record and [`RenderOptions`]:
//! sections are emitted in `order`, Markdown text is converted with
//! inline styles, and all user text is escaped.
//!
//! # Example
//!
//! ```rust
//! use letterpress_core::prelude::*;
//! use letterpress_render::prelude::*;
//!
//! let mut record = NewsletterRecord::new("modern");
//! record.subject = "Launch week".to_string();
//! let intro = record.add_section(SectionKind::Text);
//! record
//!     .update_section(&intro, SectionPatch {
//!         content: Some("Hello **everyone**".to_string()),
//!         ..Default::default()
//!     })
//!     .unwrap();
//!
//! let html = render("modern", &record);
//! assert!(html.contains("<strong>everyone</strong>"));
//! ```

mod document;
mod escape;
mod fragment;

pub mod error;
pub mod options;
pub mod preview;
pub mod templates;

pub use error::RenderError;
pub use options::RenderOptions;
pub use preview::{preview_record, render_preview, SAMPLE_SUBJECT};
pub use templates::{
    default_template, render, render_with, template_by_id, templates, try_render, Template,
    DEFAULT_TEMPLATE_ID, TEMPLATE_NOT_FOUND_HTML,
};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::RenderError;
    pub use crate::options::RenderOptions;
    pub use crate::preview::render_preview;
    pub use crate::templates::{render, render_with, template_by_id, templates, Template};
}
