//! Newsletter persistence for Letterpress.
//!
//! The whole collection is one JSON array of camelCase records under a
//! single key (`newsletters` by default), the same blob the browser app
//! keeps in `localStorage`.
//!
//! # Example
//!
//! ```rust
//! use letterpress_core::NewsletterRecord;
//! use letterpress_store::{MemoryBlobStore, NewsletterStore};
//!
//! let store = NewsletterStore::new(MemoryBlobStore::new());
//! let mut record = NewsletterRecord::new("simple");
//! record.subject = "Hello".to_string();
//! store.upsert(&record);
//!
//! assert_eq!(store.get(&record.id).unwrap().subject, "Hello");
//! ```

mod backend;
mod error;
mod newsletters;

pub use backend::{BlobStore, FileBlobStore, MemoryBlobStore};
pub use error::StoreError;
pub use newsletters::{NewsletterStore, DEFAULT_KEY};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{BlobStore, FileBlobStore, MemoryBlobStore, NewsletterStore, StoreError};
}
