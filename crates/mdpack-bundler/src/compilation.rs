//! The compilation object: entries, modules, and emitted assets.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

use crate::entry::{EntryRecord, Loader};
use crate::error::{BuildError, Result};

/// An entry whose source has been read and passed through its loader
/// chain.
#[derive(Debug, Clone)]
pub struct Module {
    /// Absolute path of the source file.
    pub resource: PathBuf,
    /// Loader chain the source went through, first loader first.
    pub loaders: Vec<Loader>,
    /// Source text after loaders ran.
    pub source: String,
}

/// Result of a compilation run.
///
/// Owned by the compiler; plugins receive it mutably in their
/// `process` hook to emit assets, and callers read it afterwards.
#[derive(Debug)]
pub struct Compilation {
    context: PathBuf,
    /// Entry records collected for this run, in registration order.
    pub entries: Vec<EntryRecord>,
    /// Loaded modules, one per entry, in entry order.
    pub modules: Vec<Module>,
    assets: FxHashMap<String, String>,
}

impl Compilation {
    pub(crate) fn new(context: PathBuf, entries: Vec<EntryRecord>) -> Self {
        Self {
            context,
            entries,
            modules: Vec::new(),
            assets: FxHashMap::default(),
        }
    }

    /// Base context directory of the compiler that produced this
    /// compilation.
    pub fn context(&self) -> &Path {
        &self.context
    }

    /// Emit an output asset under a unique name.
    pub fn emit_asset(&mut self, name: impl Into<String>, contents: impl Into<String>) -> Result<()> {
        let name = name.into();
        if self.assets.contains_key(&name) {
            return Err(BuildError::DuplicateAsset(name));
        }
        tracing::debug!(asset = %name, "emitting asset");
        self.assets.insert(name, contents.into());
        Ok(())
    }

    /// All emitted assets, keyed by file name.
    pub fn assets(&self) -> &FxHashMap<String, String> {
        &self.assets
    }

    /// Contents of a single emitted asset.
    pub fn asset(&self, name: &str) -> Option<&str> {
        self.assets.get(name).map(String::as_str)
    }
}
