//! Shared test utilities for mdpack-plugin-markdown tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use mdpack_bundler::{Compiler, CompilerOptions};
use mdpack_extract::{SharedExtractState, SourceExtractor};
use mdpack_plugin_markdown::{MarkdownEntriesOptions, MarkdownEntriesPlugin};

/// Get the path to the test fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Get the path to a specific fixture file
pub fn fixture_path(relative: &str) -> PathBuf {
    fixtures_dir().join(relative)
}

/// A plugin composed with a markdown extractor over the fixtures
/// directory.
pub struct TestBuild {
    pub plugin: Arc<MarkdownEntriesPlugin>,
    pub extract_state: SharedExtractState,
    pub compiler: Compiler,
}

/// Create a compiler over the fixtures directory with the given
/// options, composed with a markdown source extractor.
///
/// Mirrors production composition: the registration plugin runs before
/// the extractor and holds a handle to its shared state.
pub fn create_compiler(options: MarkdownEntriesOptions) -> mdpack_bundler::Result<TestBuild> {
    let extractor = Arc::new(SourceExtractor::markdown());
    let extract_state = extractor.state();

    let plugin = Arc::new(
        MarkdownEntriesPlugin::new(options).with_extractor(extractor.state()),
    );

    let compiler = Compiler::new(
        CompilerOptions::new(fixtures_dir())
            .plugin(plugin.clone())
            .plugin(extractor),
    )?;

    Ok(TestBuild {
        plugin,
        extract_state,
        compiler,
    })
}
