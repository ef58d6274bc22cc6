//! Read-only signature sets shared by every concurrent probe.
//!
//! Both sets are built once at startup and never mutated afterwards, so they
//! are shared across tasks behind the run's `Arc<Config>` with no locking.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::{DEFAULT_PARKED_IPS, DEFAULT_PARKED_KEYWORDS};

/// Hosting IP addresses known to serve parked or for-sale placeholder pages.
///
/// Entries are literal address strings; membership is exact string equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownParkedIps {
    ips: HashSet<String>,
}

impl KnownParkedIps {
    /// Builds a set from any list of address strings (trimmed, blanks dropped).
    pub fn new<I, S>(ips: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ips = ips
            .into_iter()
            .map(|ip| ip.as_ref().trim().to_string())
            .filter(|ip| !ip.is_empty())
            .collect();
        Self { ips }
    }

    /// Loads a set from a file with one address per line.
    ///
    /// Blank lines and lines starting with `#` are ignored.
    pub fn from_file(path: &Path) -> Result<Self> {
        let entries = read_signature_lines(path)
            .with_context(|| format!("Failed to read parked IP list {}", path.display()))?;
        Ok(Self::new(entries))
    }

    /// Returns true if `ip` is a known parking address.
    pub fn contains(&self, ip: &str) -> bool {
        self.ips.contains(ip)
    }

    /// Returns true if any of the given addresses is a known parking address.
    pub fn any_parked<'a, I>(&self, ips: I) -> bool
    where
        I: IntoIterator<Item = &'a String>,
    {
        ips.into_iter().any(|ip| self.contains(ip))
    }

    pub fn len(&self) -> usize {
        self.ips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ips.is_empty()
    }
}

impl Default for KnownParkedIps {
    fn default() -> Self {
        Self::new(DEFAULT_PARKED_IPS)
    }
}

/// Ordered list of lowercase substrings that mark a page as parked.
///
/// Matching is case-insensitive: signatures are lower-cased on construction
/// and the haystack is lower-cased on every check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSignatures {
    keywords: Vec<String>,
}

impl KeywordSignatures {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let keywords = keywords
            .into_iter()
            .map(|kw| kw.as_ref().trim().to_lowercase())
            .filter(|kw| !kw.is_empty())
            .filter(|kw| seen.insert(kw.clone()))
            .collect();
        Self { keywords }
    }

    /// Loads signatures from a file with one keyword per line.
    ///
    /// Blank lines and lines starting with `#` are ignored.
    pub fn from_file(path: &Path) -> Result<Self> {
        let entries = read_signature_lines(path)
            .with_context(|| format!("Failed to read keyword list {}", path.display()))?;
        Ok(Self::new(entries))
    }

    /// Returns the first signature contained in `text`, if any.
    ///
    /// An empty `text` never matches.
    pub fn first_match(&self, text: &str) -> Option<&str> {
        if text.is_empty() {
            return None;
        }
        let haystack = text.to_lowercase();
        self.keywords
            .iter()
            .find(|kw| haystack.contains(kw.as_str()))
            .map(String::as_str)
    }

    pub fn matches(&self, text: &str) -> bool {
        self.first_match(text).is_some()
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

impl Default for KeywordSignatures {
    fn default() -> Self {
        Self::new(DEFAULT_PARKED_KEYWORDS)
    }
}

fn read_signature_lines(path: &Path) -> std::io::Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}
