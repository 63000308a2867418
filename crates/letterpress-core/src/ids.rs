//! Newtype IDs for newsletters and their sections.
//!
//! Keeping the two apart stops a section id from being passed where a
//! newsletter id is expected.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate a new unique ID.
            pub fn generate() -> Self {
                Self(generate_id())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(NewsletterId);
define_id!(SectionId);

/// Generate a short lowercase alphanumeric id.
///
/// Uses the wall clock through chrono (which also works in the browser) and a
/// process-wide counter, scrambled with the splitmix64 finalizer.
fn generate_id() -> String {
    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default() as u64;
    let counter = COUNTER.fetch_add(1, Ordering::Relaxed);

    let mut x = nanos ^ counter.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^= x >> 31;

    to_base36(x)
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if value == 0 {
        return "0".to_string();
    }

    let mut buf = Vec::with_capacity(13);
    while value > 0 {
        buf.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    buf.reverse();
    String::from_utf8(buf).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_id_creation() {
        let id = NewsletterId::new("nl-123");
        assert_eq!(id.as_str(), "nl-123");
    }

    #[test]
    fn test_id_generation_is_unique() {
        let ids: HashSet<SectionId> = (0..1000).map(|_| SectionId::generate()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_generated_id_is_lowercase_alphanumeric() {
        let id = NewsletterId::generate();
        assert!(!id.as_str().is_empty());
        assert!(id
            .as_str()
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = SectionId::new("abc");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc\"");
    }

    #[test]
    fn test_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
    }
}
