//! # Manifest Parsing
//!
//! Parses a `Cartfile.resolved` style manifest: one pinned dependency per
//! line, `<kind> <locator> <version>`, each field optionally wrapped in
//! double quotes. Lines whose first character is `#` are comments. Parsing is
//! a pure transformation of text into [`ManifestEntry`] values; reading the
//! file is the only I/O and the only fatal failure here.
//!
//! A line that does not yield all three fields is recorded as a
//! [`MalformedLine`] and skipped, so one bad line never takes down the run.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Default manifest file name, relative to the project root.
pub const MANIFEST_FILE: &str = "Cartfile.resolved";

/// One pinned dependency declaration from the manifest.
///
/// Constructed once at parse time and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Declaration type, taken verbatim from the first token (e.g. "github").
    pub kind: String,
    /// Source identifier, used to build the clone URL and the directory name.
    pub locator: String,
    /// Pinned revision to check out after cloning (branch, tag or commit).
    pub version: String,
}

impl ManifestEntry {
    /// The directory name for this entry: the last `/`-separated segment of
    /// the locator (`"acme/widget"` -> `"widget"`,
    /// `"acme/widget.git"` -> `"widget.git"`).
    ///
    /// Trailing slashes are ignored, so `"acme/widget/"` also yields
    /// `"widget"`. A locator consisting only of slashes yields the empty
    /// string; the orchestrator rejects such entries before touching the
    /// filesystem.
    pub fn directory_name(&self) -> &str {
        let trimmed = self.locator.trim_end_matches('/');
        trimmed.rsplit('/').next().unwrap_or(trimmed)
    }
}

impl fmt::Display for ManifestEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}, version: {}",
            self.kind, self.locator, self.version
        )
    }
}

/// A manifest line that could not be tokenized into three fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedLine {
    /// 1-based line number in the manifest file.
    pub number: usize,
    /// The offending line, as it appeared in the file.
    pub content: String,
}

impl MalformedLine {
    /// Convert to the error variant used when reporting this line.
    pub fn to_error(&self) -> Error {
        Error::ManifestLine {
            number: self.number,
            content: self.content.clone(),
        }
    }
}

/// The parsed manifest: entries in file order plus any lines that were
/// skipped as malformed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    pub entries: Vec<ManifestEntry>,
    pub malformed: Vec<MalformedLine>,
}

impl Manifest {
    /// Read and parse a manifest file.
    ///
    /// A missing or unreadable file is the one fatal error in this module;
    /// it maps to [`Error::ManifestRead`] with the offending path.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&text))
    }

    /// Parse manifest text into entries, preserving file order.
    pub fn parse(text: &str) -> Self {
        let mut entries = Vec::new();
        let mut malformed = Vec::new();

        for (index, line) in text.lines().enumerate() {
            if line.starts_with('#') || line.trim().is_empty() {
                continue;
            }

            match parse_line(line) {
                Some(entry) => entries.push(entry),
                None => malformed.push(MalformedLine {
                    number: index + 1,
                    content: line.to_string(),
                }),
            }
        }

        Manifest { entries, malformed }
    }
}

/// Tokenize a single non-comment line into an entry.
///
/// Returns `None` when fewer than three whitespace-separated tokens are
/// present, or when any field is empty after stripping its quotes.
fn parse_line(line: &str) -> Option<ManifestEntry> {
    let mut tokens = line.split_whitespace().map(|token| token.trim_matches('"'));

    let kind = tokens.next()?;
    let locator = tokens.next()?;
    let version = tokens.next()?;

    if kind.is_empty() || locator.is_empty() || version.is_empty() {
        return None;
    }

    Some(ManifestEntry {
        kind: kind.to_string(),
        locator: locator.to_string(),
        version: version.to_string(),
    })
}
