//! Integration tests for the compiler lifecycle.

use std::borrow::Cow;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use mdpack_bundler::{
    BuildError, Compilation, Compiler, CompilerOptions, EntrySet, Loader, Plugin, PluginContext,
};
use tempfile::TempDir;

/// Plugin that registers a fixed entry and counts its hook invocations.
struct CountingPlugin {
    entry: PathBuf,
    loaders: Vec<Loader>,
    configured: AtomicUsize,
    processed: AtomicUsize,
}

impl CountingPlugin {
    fn new(entry: PathBuf, loaders: Vec<Loader>) -> Self {
        Self {
            entry,
            loaders,
            configured: AtomicUsize::new(0),
            processed: AtomicUsize::new(0),
        }
    }
}

impl Plugin for CountingPlugin {
    fn name(&self) -> Cow<'static, str> {
        "counting".into()
    }

    fn configure(&self, _ctx: &PluginContext) -> anyhow::Result<()> {
        self.configured.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn build_entries(&self, _ctx: &PluginContext, entries: &mut EntrySet) -> anyhow::Result<()> {
        entries.add(self.entry.clone(), self.loaders.clone());
        Ok(())
    }

    fn process(&self, _ctx: &PluginContext, compilation: &mut Compilation) -> anyhow::Result<()> {
        self.processed.fetch_add(1, Ordering::SeqCst);
        for module in &compilation.modules {
            assert!(!module.resource.as_os_str().is_empty());
        }
        Ok(())
    }
}

/// Plugin whose configure hook always fails.
struct BrokenSetupPlugin;

impl Plugin for BrokenSetupPlugin {
    fn name(&self) -> Cow<'static, str> {
        "broken-setup".into()
    }

    fn configure(&self, _ctx: &PluginContext) -> anyhow::Result<()> {
        anyhow::bail!("nothing to configure with")
    }
}

#[test]
fn test_configure_runs_once_at_construction() {
    let dir = TempDir::new().unwrap();
    let entry = dir.path().join("note.md");
    std::fs::write(&entry, "# hi").unwrap();

    let plugin = Arc::new(CountingPlugin::new(entry, vec![Loader::noop()]));
    let compiler = Compiler::new(
        CompilerOptions::new(dir.path()).plugin(plugin.clone()),
    )
    .unwrap();

    assert_eq!(plugin.configured.load(Ordering::SeqCst), 1);

    compiler.run().unwrap();
    compiler.run().unwrap();
    assert_eq!(plugin.configured.load(Ordering::SeqCst), 1);
    assert_eq!(plugin.processed.load(Ordering::SeqCst), 2);
}

#[test]
fn test_failed_configure_fails_construction() {
    let dir = TempDir::new().unwrap();
    let result = Compiler::new(CompilerOptions::new(dir.path()).plugin(Arc::new(BrokenSetupPlugin)));

    match result {
        Err(BuildError::PluginSetup { plugin, .. }) => assert_eq!(plugin, "broken-setup"),
        Err(other) => panic!("expected PluginSetup error, got {other:?}"),
        Ok(_) => panic!("expected construction to fail"),
    }
}

#[test]
fn test_run_reads_entry_sources() {
    let dir = TempDir::new().unwrap();
    let entry = dir.path().join("note.md");
    std::fs::write(&entry, "# hello").unwrap();

    let plugin = Arc::new(CountingPlugin::new(entry.clone(), vec![Loader::noop()]));
    let compiler = Compiler::new(CompilerOptions::new(dir.path()).plugin(plugin)).unwrap();
    let compilation = compiler.run().unwrap();

    assert_eq!(compilation.entries.len(), 1);
    assert_eq!(compilation.modules.len(), 1);
    assert_eq!(compilation.modules[0].resource, entry);
    assert_eq!(compilation.modules[0].source, "# hello");
    assert!(compilation.modules[0].loaders[0].is_noop());
}

#[test]
fn test_missing_entry_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    let entry = dir.path().join("gone.md");

    let plugin = Arc::new(CountingPlugin::new(entry.clone(), vec![Loader::noop()]));
    let compiler = Compiler::new(CompilerOptions::new(dir.path()).plugin(plugin)).unwrap();

    match compiler.run() {
        Err(BuildError::EntryRead { path, .. }) => assert_eq!(path, entry),
        other => panic!("expected EntryRead error, got {other:?}"),
    }
}

#[test]
fn test_unhandled_file_type_requires_a_loader() {
    let dir = TempDir::new().unwrap();
    let entry = dir.path().join("note.md");
    std::fs::write(&entry, "# hi").unwrap();

    let plugin = Arc::new(CountingPlugin::new(entry.clone(), vec![]));
    let compiler = Compiler::new(CompilerOptions::new(dir.path()).plugin(plugin)).unwrap();

    match compiler.run() {
        Err(BuildError::NoLoader(path)) => assert_eq!(path, entry),
        other => panic!("expected NoLoader error, got {other:?}"),
    }
}

#[test]
fn test_js_entries_need_no_loader() {
    let dir = TempDir::new().unwrap();
    let entry = dir.path().join("index.js");
    std::fs::write(&entry, "module.exports = 1;").unwrap();

    let plugin = Arc::new(CountingPlugin::new(entry, vec![]));
    let compiler = Compiler::new(CompilerOptions::new(dir.path()).plugin(plugin)).unwrap();
    let compilation = compiler.run().unwrap();

    assert_eq!(compilation.modules[0].source, "module.exports = 1;");
}

#[test]
fn test_unknown_loader_is_rejected() {
    let dir = TempDir::new().unwrap();
    let entry = dir.path().join("note.md");
    std::fs::write(&entry, "# hi").unwrap();

    let plugin = Arc::new(CountingPlugin::new(
        entry,
        vec![Loader::new("frobnicate")],
    ));
    let compiler = Compiler::new(CompilerOptions::new(dir.path()).plugin(plugin)).unwrap();

    match compiler.run() {
        Err(BuildError::UnknownLoader { loader, .. }) => assert_eq!(loader, "frobnicate"),
        other => panic!("expected UnknownLoader error, got {other:?}"),
    }
}
