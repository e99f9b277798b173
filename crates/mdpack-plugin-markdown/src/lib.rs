//! # mdpack-plugin-markdown
//!
//! Registration plugin for the mdpack build host.
//!
//! Given a `files` selector (glob pattern or explicit path list), the
//! plugin resolves it to absolute paths when it attaches to a compiler
//! - failing loudly if a glob matches nothing - and registers every
//! resolved file as an entry point with the no-op loader first in its
//! chain, so the host applies no default handling to raw markdown.
//!
//! When composed with [`mdpack_extract::SourceExtractor`], the plugin
//! forwards its optional `match` filter to the extractor's shared
//! state: sources outside the filter still appear in the extractor's
//! source list, but with empty attributes and no emitted asset.
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use mdpack_bundler::{Compiler, CompilerOptions};
//! use mdpack_extract::SourceExtractor;
//! use mdpack_plugin_markdown::{MarkdownEntriesOptions, MarkdownEntriesPlugin};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = Arc::new(SourceExtractor::markdown());
//! let plugin = MarkdownEntriesPlugin::new(MarkdownEntriesOptions::glob("*.md"))
//!     .with_extractor(extractor.state());
//!
//! let compiler = Compiler::new(
//!     CompilerOptions::new("./docs")
//!         .plugin(Arc::new(plugin))
//!         .plugin(extractor),
//! )?;
//! let compilation = compiler.run()?;
//! # Ok(()) }
//! ```

use std::borrow::Cow;
use std::path::PathBuf;
use std::sync::OnceLock;

use mdpack_bundler::{EntrySet, Loader, Plugin, PluginContext};
use mdpack_extract::{SharedExtractState, SourceFilter};

mod config;
mod error;
mod resolve;

pub use config::{FileSelector, MarkdownEntriesOptions};
pub use error::{ConfigError, ResolveError};

/// Plugin that registers markdown files as no-op-loaded entry points.
pub struct MarkdownEntriesPlugin {
    options: MarkdownEntriesOptions,
    // Resolution happens once, in the configure hook; the list is
    // immutable afterwards.
    resolved: OnceLock<Vec<PathBuf>>,
    extract_state: Option<SharedExtractState>,
}

impl MarkdownEntriesPlugin {
    pub fn new(options: MarkdownEntriesOptions) -> Self {
        Self {
            options,
            resolved: OnceLock::new(),
            extract_state: None,
        }
    }

    /// Construct from an untyped config value, validating option
    /// shapes (see [`MarkdownEntriesOptions::from_value`]).
    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        Ok(Self::new(MarkdownEntriesOptions::from_value(value)?))
    }

    /// Compose with an extraction plugin: the `match` filter (when
    /// configured) is contributed to the extractor's shared state
    /// during configure.
    pub fn with_extractor(mut self, state: SharedExtractState) -> Self {
        self.extract_state = Some(state);
        self
    }

    /// The options this plugin was built with.
    pub fn options(&self) -> &MarkdownEntriesOptions {
        &self.options
    }

    /// Resolved file list, in registration order.
    ///
    /// Empty until the plugin has been attached to a compiler.
    pub fn files(&self) -> &[PathBuf] {
        self.resolved.get().map(Vec::as_slice).unwrap_or_default()
    }
}

impl Plugin for MarkdownEntriesPlugin {
    fn name(&self) -> Cow<'static, str> {
        "mdpack-markdown".into()
    }

    fn configure(&self, ctx: &PluginContext) -> anyhow::Result<()> {
        // Attaching the same plugin to several compilers keeps the
        // first resolution.
        if self.resolved.get().is_some() {
            return Ok(());
        }

        let files = resolve::resolve_selector(&self.options.files, ctx.context())?;
        tracing::debug!(
            count = files.len(),
            context = %ctx.context().display(),
            "resolved markdown entry files"
        );

        if let (Some(state), Some(matcher)) = (&self.extract_state, &self.options.match_filter) {
            state.lock().unwrap().add_filter(SourceFilter::new(
                files.iter().cloned(),
                Some(matcher.clone()),
            ));
        }

        let _ = self.resolved.set(files);
        Ok(())
    }

    fn build_entries(&self, _ctx: &PluginContext, entries: &mut EntrySet) -> anyhow::Result<()> {
        for path in self.files() {
            entries.add(path.clone(), vec![Loader::noop()]);
        }
        Ok(())
    }
}
