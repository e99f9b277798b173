//! The plugin trait and hook contexts.
//!
//! Plugins participate in three phases, all synchronous:
//!
//! 1. `configure` - once, when the compiler is constructed. Failing
//!    here fails compiler construction; use it for fail-fast work like
//!    resolving file selectors against the context directory.
//! 2. `build_entries` - once per run, to contribute entry points.
//! 3. `process` - once per run, after module sources are read, to
//!    inspect modules and emit assets.
//!
//! Hooks return `anyhow::Result` so plugin crates can carry their own
//! error types; the host wraps failures with the plugin name.

use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::compilation::Compilation;
use crate::entry::EntrySet;

/// A plugin shared with the compiler.
pub type SharedPlugin = Arc<dyn Plugin>;

/// Capability surface handed to every hook.
#[derive(Debug, Clone)]
pub struct PluginContext {
    context: PathBuf,
}

impl PluginContext {
    pub fn new(context: impl Into<PathBuf>) -> Self {
        Self {
            context: context.into(),
        }
    }

    /// Base directory that relative paths and glob patterns resolve
    /// against.
    pub fn context(&self) -> &Path {
        &self.context
    }
}

/// A build-host plugin.
///
/// All hooks have empty defaults; implement only the phases you need.
pub trait Plugin: Send + Sync {
    /// Plugin name for diagnostics and error wrapping.
    fn name(&self) -> Cow<'static, str>;

    /// Called once during compiler construction.
    fn configure(&self, _ctx: &PluginContext) -> anyhow::Result<()> {
        Ok(())
    }

    /// Contribute entry points for this compilation run.
    fn build_entries(&self, _ctx: &PluginContext, _entries: &mut EntrySet) -> anyhow::Result<()> {
        Ok(())
    }

    /// Post-process the compilation: inspect modules, emit assets.
    fn process(&self, _ctx: &PluginContext, _compilation: &mut Compilation) -> anyhow::Result<()> {
        Ok(())
    }
}
