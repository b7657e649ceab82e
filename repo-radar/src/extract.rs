//! Repository URL extraction.
//!
//! Scans free text (usually a Markdown reading list) for links of the shape
//! `https://github.com/<owner>/<name>` and collects them into an ordered,
//! de-duplicated [`RepositorySet`].

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// Prefix shared by every extracted reference.
pub const GITHUB_URL_PREFIX: &str = "https://github.com/";

/// Owner and repository name are limited to alphanumerics, `-`, `_` and `.`.
static REPOSITORY_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https://github\.com/([A-Za-z0-9_.-]+)/([A-Za-z0-9_.-]+)")
        .expect("Invalid repository URL regex")
});

/// A reference to a GitHub repository by owner and name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RepositoryRef {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub name: String,
}

impl RepositoryRef {
    /// Creates a reference from its parts.
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Parses a single `https://github.com/<owner>/<name>` URL.
    ///
    /// Anything after the repository name (a path, a query, punctuation) is
    /// ignored. Returns `None` if the text holds no repository URL.
    pub fn parse(url: &str) -> Option<Self> {
        let captures = REPOSITORY_URL.captures(url)?;
        Self::from_captures(&captures[1], &captures[2])
    }

    /// Full repository name in `owner/name` format.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    /// Canonical URL, the unique key of a repository within a run.
    pub fn url(&self) -> String {
        format!("{GITHUB_URL_PREFIX}{}/{}", self.owner, self.name)
    }

    fn from_captures(owner: &str, name: &str) -> Option<Self> {
        // A sentence-ending period is captured by the name class.
        let name = name.trim_end_matches('.');
        if name.is_empty() {
            return None;
        }
        Some(Self::new(owner, name))
    }
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{GITHUB_URL_PREFIX}{}/{}", self.owner, self.name)
    }
}

/// Ordered set of repository references.
///
/// Iteration follows first-seen order, which decides which references are
/// fetched when the run's fetch budget is smaller than the set.
#[derive(Debug, Clone, Default)]
pub struct RepositorySet {
    seen: HashSet<String>,
    items: Vec<RepositoryRef>,
}

impl RepositorySet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a reference, returning `false` if its URL was already present.
    pub fn insert(&mut self, reference: RepositoryRef) -> bool {
        if self.seen.insert(reference.url()) {
            self.items.push(reference);
            true
        } else {
            false
        }
    }

    /// Adds every reference found in `text`, returning how many were new.
    pub fn extend_from_text(&mut self, text: &str) -> usize {
        let mut added = 0;
        for captures in REPOSITORY_URL.captures_iter(text) {
            if let Some(reference) = RepositoryRef::from_captures(&captures[1], &captures[2]) {
                if self.insert(reference) {
                    added += 1;
                }
            }
        }
        added
    }

    /// Number of unique references.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if no references were found.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates in first-seen order.
    pub fn iter(&self) -> std::slice::Iter<'_, RepositoryRef> {
        self.items.iter()
    }

    /// Returns true if a reference with the same URL is present.
    pub fn contains(&self, reference: &RepositoryRef) -> bool {
        self.seen.contains(&reference.url())
    }
}

impl<'a> IntoIterator for &'a RepositorySet {
    type Item = &'a RepositoryRef;
    type IntoIter = std::slice::Iter<'a, RepositoryRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for RepositorySet {
    type Item = RepositoryRef;
    type IntoIter = std::vec::IntoIter<RepositoryRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Extracts every repository URL in `text`.
#[must_use]
pub fn extract_repository_urls(text: &str) -> RepositorySet {
    let mut set = RepositorySet::new();
    set.extend_from_text(text);
    set
}
