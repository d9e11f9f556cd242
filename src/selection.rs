//! # Selection Filtering
//!
//! Intersects the parsed manifest with the locators the user asked for on
//! the command line. Matching is exact and case-sensitive, and the relative
//! order of manifest entries is preserved. An empty request selects nothing,
//! which is a normal outcome, not an error.

use crate::manifest::ManifestEntry;

/// Filter `entries` down to those whose locator appears in `requested`.
///
/// Requesting a locator more than once does not duplicate its entry; the
/// request is used purely as a membership set.
pub fn select(entries: &[ManifestEntry], requested: &[String]) -> Vec<ManifestEntry> {
    entries
        .iter()
        .filter(|entry| requested.iter().any(|locator| *locator == entry.locator))
        .cloned()
        .collect()
}
