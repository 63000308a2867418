//! Newsletter domain types for Letterpress.
//!
//! - **Records**: `NewsletterRecord` with its subject, template and status
//! - **Sections**: ordered, typed content blocks kept densely indexed
//! - **Publishing**: draft / schedule / send transitions (status flips only)
//!
//! # Example
//!
//! ```rust
//! use letterpress_core::prelude::*;
//!
//! let mut record = NewsletterRecord::new("simple");
//! record.subject = "October update".to_string();
//! let intro = record.add_section(SectionKind::Text);
//! let cta = record.add_section(SectionKind::Button);
//!
//! record.move_section(&cta, Direction::Up);
//! assert_eq!(record.sorted_sections()[0].id, cta);
//! assert_eq!(record.sorted_sections()[1].id, intro);
//! ```

pub mod error;
pub mod ids;
pub mod newsletter;
pub mod ordering;
pub mod publish;
pub mod section;

pub use error::NewsletterError;
pub use ids::{NewsletterId, SectionId};
pub use newsletter::{
    sort_by_recent, NewsletterRecord, NewsletterStatus, NewsletterSummary, UNTITLED_SUBJECT,
};
pub use publish::{validate_schedule, SendBlocker};
pub use section::{Direction, Section, SectionKind, SectionMetadata, SectionPatch};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::NewsletterError;
    pub use crate::ids::{NewsletterId, SectionId};
    pub use crate::newsletter::{NewsletterRecord, NewsletterStatus, NewsletterSummary};
    pub use crate::publish::SendBlocker;
    pub use crate::section::{Direction, Section, SectionKind, SectionMetadata, SectionPatch};
}
