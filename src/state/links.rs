//! Link types and the per-type link accumulator
use std::collections::HashSet;
use std::fmt;

/// Whether a discovered link stays on the seed host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkType {
    /// Same host as the seed URL
    Internal,
    /// Any other host
    External,
}

impl LinkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Internal => "internal",
            Self::External => "external",
        }
    }
}

impl fmt::Display for LinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discovered links keyed by type
///
/// Each type keeps its URLs in discovery order and never holds the same URL
/// twice. The same URL string may appear under both types only if it was
/// recorded under each, which classification by host makes impossible in
/// practice.
#[derive(Debug, Clone, Default)]
pub struct LinkCollection {
    internal: Vec<String>,
    external: Vec<String>,
    index: HashSet<(LinkType, String)>,
}

impl LinkCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `url` under `link_type` unless it is already there
    ///
    /// Returns true if the URL was newly recorded.
    pub fn insert(&mut self, url: &str, link_type: LinkType) -> bool {
        if !self.index.insert((link_type, url.to_string())) {
            return false;
        }

        match link_type {
            LinkType::Internal => self.internal.push(url.to_string()),
            LinkType::External => self.external.push(url.to_string()),
        }
        true
    }

    pub fn contains(&self, url: &str, link_type: LinkType) -> bool {
        self.index.contains(&(link_type, url.to_string()))
    }

    /// Links of one type in discovery order
    pub fn get(&self, link_type: LinkType) -> &[String] {
        match link_type {
            LinkType::Internal => &self.internal,
            LinkType::External => &self.external,
        }
    }

    /// Internal links followed by external links, each in discovery order
    pub fn all(&self) -> Vec<String> {
        self.internal
            .iter()
            .chain(self.external.iter())
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.internal.len() + self.external.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.internal.clear();
        self.external.clear();
        self.index.clear();
    }
}
