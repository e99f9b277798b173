//! Entry points and loader chains.
//!
//! An entry is a root the host starts from; its loader chain describes
//! the transforms applied to the raw source before further processing.
//! The host itself only executes the built-in no-op loader - every
//! other loader name is declarative metadata for plugins, and hitting
//! one at read time is an error.

use std::path::PathBuf;

use rustc_hash::FxHashSet;

/// Name of the built-in pass-through loader.
///
/// Attaching it as the first loader of an entry suppresses the host's
/// default file-type handling without transforming the content.
pub const NOOP_LOADER: &str = "noop";

/// A named content-transformation step in an entry's loader chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loader {
    name: String,
}

impl Loader {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The built-in pass-through loader.
    pub fn noop() -> Self {
        Self::new(NOOP_LOADER)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_noop(&self) -> bool {
        self.name == NOOP_LOADER
    }
}

/// An entry point together with its loader chain.
///
/// Owned by the compilation once the entry-collection phase finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRecord {
    /// Absolute path of the entry's source file.
    pub resource: PathBuf,
    /// Loaders applied to the raw source, first loader first.
    pub loaders: Vec<Loader>,
}

/// Ordered, deduplicated set of entry records under construction.
///
/// Handed to each plugin's `build_entries` hook. Registration order is
/// preserved; re-registering a resource keeps the first record.
#[derive(Debug, Default)]
pub struct EntrySet {
    records: Vec<EntryRecord>,
    seen: FxHashSet<PathBuf>,
}

impl EntrySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entry point with its loader chain.
    ///
    /// Returns `true` if the resource was newly added.
    pub fn add(&mut self, resource: impl Into<PathBuf>, loaders: Vec<Loader>) -> bool {
        let resource = resource.into();
        if !self.seen.insert(resource.clone()) {
            tracing::debug!(resource = %resource.display(), "entry already registered, keeping first");
            return false;
        }
        self.records.push(EntryRecord { resource, loaders });
        true
    }

    pub fn records(&self) -> &[EntryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn into_records(self) -> Vec<EntryRecord> {
        self.records
    }
}
