//! # Remote URL Construction
//!
//! Turns a manifest locator into a clone URL. The rule is a simple join
//! against a configurable base URL; the default base is `https://github.com/`
//! so a bare `owner/repo` locator resolves the way Carthage's `github`
//! declarations do. Tests and enterprise setups override the base with
//! `--base-url` (a `file://` base works for local fixtures).

use url::Url;

use crate::error::Result;

/// Default base URL for locator resolution.
pub const DEFAULT_BASE_URL: &str = "https://github.com/";

/// A validated base URL that locators are resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteBase {
    base: Url,
}

impl RemoteBase {
    /// Parse and normalize a base URL.
    ///
    /// A trailing slash is appended when missing so the final path segment of
    /// the base survives the join.
    pub fn new(base: &str) -> Result<Self> {
        let normalized = if base.ends_with('/') {
            base.to_string()
        } else {
            format!("{}/", base)
        };
        Ok(Self {
            base: Url::parse(&normalized)?,
        })
    }

    /// Resolve a locator to its clone URL.
    pub fn url_for(&self, locator: &str) -> Result<Url> {
        Ok(self.base.join(locator.trim_start_matches('/'))?)
    }

    /// The base URL as a string.
    pub fn as_str(&self) -> &str {
        self.base.as_str()
    }
}

impl Default for RemoteBase {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL).expect("default base URL is valid")
    }
}
