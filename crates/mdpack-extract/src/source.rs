//! Source records and eligibility filters.

use std::path::{Path, PathBuf};

use regex::Regex;
use rustc_hash::FxHashSet;
use serde_json::{Map, Value};

/// A file the extractor claimed during a compilation run.
///
/// Ineligible sources (filtered out by a contributed [`SourceFilter`])
/// still appear in the list, but with empty attributes.
#[derive(Debug, Clone)]
pub struct Source {
    /// Absolute path of the source file.
    pub path: PathBuf,
    /// Attribute mapping parsed from the file's front-matter.
    pub attrs: Map<String, Value>,
}

impl Source {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            attrs: Map::new(),
        }
    }

    pub fn with_attrs(path: impl Into<PathBuf>, attrs: Map<String, Value>) -> Self {
        Self {
            path: path.into(),
            attrs,
        }
    }
}

/// Eligibility filter contributed by a registration plugin.
///
/// A filter covers the files it registered. A covered file is allowed
/// only if the filter's matcher (when present) matches its path; files
/// outside the covered set are unaffected.
#[derive(Debug, Clone)]
pub struct SourceFilter {
    files: FxHashSet<PathBuf>,
    matcher: Option<Regex>,
}

impl SourceFilter {
    pub fn new(files: impl IntoIterator<Item = PathBuf>, matcher: Option<Regex>) -> Self {
        Self {
            files: files.into_iter().collect(),
            matcher,
        }
    }

    /// Whether this filter has an opinion about `path` at all.
    pub fn covers(&self, path: &Path) -> bool {
        self.files.contains(path)
    }

    /// Whether `path` passes this filter's matcher.
    pub fn allows(&self, path: &Path) -> bool {
        match &self.matcher {
            Some(matcher) => matcher.is_match(&path.to_string_lossy()),
            None => true,
        }
    }
}

/// Shared extraction state: the source list plus contributed filters.
///
/// Filters are added at configure time; sources are rebuilt on every
/// compilation run and read afterwards.
#[derive(Debug, Default)]
pub struct ExtractState {
    /// Sources claimed during the last compilation run, in module
    /// order.
    pub sources: Vec<Source>,
    filters: Vec<SourceFilter>,
}

impl ExtractState {
    /// Contribute an eligibility filter.
    pub fn add_filter(&mut self, filter: SourceFilter) {
        self.filters.push(filter);
    }

    /// A path is eligible when every filter covering it allows it.
    pub fn eligible(&self, path: &Path) -> bool {
        self.filters
            .iter()
            .filter(|f| f.covers(path))
            .all(|f| f.allows(path))
    }
}
