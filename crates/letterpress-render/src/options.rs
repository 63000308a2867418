//! Render options shared by all templates.

use serde::{Deserialize, Serialize};

/// Values templates print in their footers.
///
/// Passed explicitly so rendering never reads the clock or the environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Company name in the copyright line.
    #[serde(default = "default_company_name")]
    pub company_name: String,

    /// Year in the copyright line.
    #[serde(default = "default_copyright_year")]
    pub copyright_year: i32,

    /// Target of the unsubscribe link.
    #[serde(default = "default_unsubscribe_url")]
    pub unsubscribe_url: String,
}

fn default_company_name() -> String {
    "Your Company Name".to_string()
}

fn default_copyright_year() -> i32 {
    2025
}

fn default_unsubscribe_url() -> String {
    "#".to_string()
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            company_name: default_company_name(),
            copyright_year: default_copyright_year(),
            unsubscribe_url: default_unsubscribe_url(),
        }
    }
}

impl RenderOptions {
    /// Set the company name.
    pub fn with_company(mut self, name: impl Into<String>) -> Self {
        self.company_name = name.into();
        self
    }

    /// Set the copyright year.
    pub fn with_year(mut self, year: i32) -> Self {
        self.copyright_year = year;
        self
    }

    /// Set the unsubscribe link.
    pub fn with_unsubscribe_url(mut self, url: impl Into<String>) -> Self {
        self.unsubscribe_url = url.into();
        self
    }
}
