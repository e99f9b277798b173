//! The compiler: plugin orchestration and the run loop.

use std::fs;
use std::path::{Path, PathBuf};

use crate::compilation::{Compilation, Module};
use crate::entry::{EntryRecord, EntrySet};
use crate::error::{BuildError, Result};
use crate::plugin::{Plugin, PluginContext, SharedPlugin};

/// File extensions the host handles without a loader chain.
const DEFAULT_EXTENSIONS: &[&str] = &["js", "mjs", "cjs", "json"];

/// Compiler configuration: a context directory plus an ordered plugin
/// list.
#[derive(Default)]
pub struct CompilerOptions {
    context: PathBuf,
    plugins: Vec<SharedPlugin>,
}

impl CompilerOptions {
    pub fn new(context: impl Into<PathBuf>) -> Self {
        Self {
            context: context.into(),
            plugins: Vec::new(),
        }
    }

    /// Append a plugin. Plugins run in registration order in every
    /// phase.
    pub fn plugin(mut self, plugin: SharedPlugin) -> Self {
        self.plugins.push(plugin);
        self
    }
}

/// A configured compiler.
///
/// Construction runs every plugin's `configure` hook; a hook failure
/// fails construction rather than deferring to the first run, so
/// misconfigured builds stop before any work happens.
pub struct Compiler {
    context: PathBuf,
    plugins: Vec<SharedPlugin>,
}

impl Compiler {
    pub fn new(options: CompilerOptions) -> Result<Self> {
        let ctx = PluginContext::new(&options.context);
        for plugin in &options.plugins {
            tracing::debug!(plugin = %plugin.name(), "configuring plugin");
            plugin
                .configure(&ctx)
                .map_err(|source| BuildError::PluginSetup {
                    plugin: plugin.name().into_owned(),
                    source,
                })?;
        }

        Ok(Self {
            context: options.context,
            plugins: options.plugins,
        })
    }

    /// Base directory that relative paths resolve against.
    pub fn context(&self) -> &Path {
        &self.context
    }

    /// Run a single compilation: collect entries, read module sources,
    /// then let plugins process the result.
    pub fn run(&self) -> Result<Compilation> {
        let ctx = PluginContext::new(&self.context);

        let mut entries = EntrySet::new();
        for plugin in &self.plugins {
            plugin
                .build_entries(&ctx, &mut entries)
                .map_err(|source| BuildError::PluginHook {
                    plugin: plugin.name().into_owned(),
                    hook: "build_entries",
                    source,
                })?;
        }

        let records = entries.into_records();
        tracing::info!(entries = records.len(), "entry collection finished");

        let mut compilation = Compilation::new(self.context.clone(), records.clone());
        for record in &records {
            compilation.modules.push(self.load_entry(record)?);
        }

        for plugin in &self.plugins {
            plugin
                .process(&ctx, &mut compilation)
                .map_err(|source| BuildError::PluginHook {
                    plugin: plugin.name().into_owned(),
                    hook: "process",
                    source,
                })?;
        }

        Ok(compilation)
    }

    /// Read an entry's source and run it through its loader chain.
    fn load_entry(&self, record: &EntryRecord) -> Result<Module> {
        if record.loaders.is_empty() && !has_default_handling(&record.resource) {
            return Err(BuildError::NoLoader(record.resource.clone()));
        }

        let raw = fs::read_to_string(&record.resource).map_err(|source| BuildError::EntryRead {
            path: record.resource.clone(),
            source,
        })?;

        // The noop loader is the only one the host executes; it leaves
        // the source untouched.
        for loader in &record.loaders {
            if !loader.is_noop() {
                return Err(BuildError::UnknownLoader {
                    loader: loader.name().to_string(),
                    path: record.resource.clone(),
                });
            }
        }

        Ok(Module {
            resource: record.resource.clone(),
            loaders: record.loaders.clone(),
            source: raw,
        })
    }
}

fn has_default_handling(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| DEFAULT_EXTENSIONS.contains(&ext))
}
