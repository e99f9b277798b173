//! # mdpack-extract
//!
//! Extraction plugin for the mdpack build host.
//!
//! The extractor claims compilation modules whose path matches its
//! file pattern, parses their front-matter into per-source attribute
//! maps, and emits one `<originalFilename>.js` asset per eligible
//! source. Other plugins can narrow eligibility by contributing
//! [`SourceFilter`]s to the shared [`ExtractState`]; filtered-out
//! files still show up in the source list, with empty attributes and
//! no emitted asset.
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use mdpack_bundler::{Compiler, CompilerOptions};
//! use mdpack_extract::SourceExtractor;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = Arc::new(SourceExtractor::markdown());
//! let state = extractor.state();
//!
//! let compiler = Compiler::new(CompilerOptions::new("./docs").plugin(extractor))?;
//! let compilation = compiler.run()?;
//!
//! for source in &state.lock().unwrap().sources {
//!     println!("{}: {} attrs", source.path.display(), source.attrs.len());
//! }
//! # Ok(()) }
//! ```

use std::borrow::Cow;
use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::Context;
use mdpack_bundler::{Compilation, Plugin, PluginContext};
use regex::Regex;

pub mod frontmatter;
mod source;

pub use frontmatter::Document;
pub use source::{ExtractState, Source, SourceFilter};

/// Shared handle to the extractor's state.
pub type SharedExtractState = Arc<Mutex<ExtractState>>;

/// Plugin that extracts front-matter attributes from matched sources.
#[derive(Debug)]
pub struct SourceExtractor {
    pattern: Regex,
    state: SharedExtractState,
}

impl SourceExtractor {
    /// Create an extractor claiming modules whose path matches
    /// `pattern`.
    pub fn new(pattern: Regex) -> Self {
        Self {
            pattern,
            state: Arc::new(Mutex::new(ExtractState::default())),
        }
    }

    /// Extractor for `.md` files.
    pub fn markdown() -> Self {
        Self::new(Regex::new(r"\.md$").expect("valid pattern"))
    }

    /// Shared handle to the extraction state.
    ///
    /// Hand this to registration plugins that contribute filters, and
    /// read `sources` from it after a compilation run.
    pub fn state(&self) -> SharedExtractState {
        Arc::clone(&self.state)
    }

    /// Snapshot of the sources claimed in the last run.
    pub fn sources(&self) -> Vec<Source> {
        self.state.lock().unwrap().sources.clone()
    }
}

impl Plugin for SourceExtractor {
    fn name(&self) -> Cow<'static, str> {
        "mdpack-extract".into()
    }

    fn process(&self, _ctx: &PluginContext, compilation: &mut Compilation) -> anyhow::Result<()> {
        let mut emissions: Vec<(String, String)> = Vec::new();

        {
            let mut state = self.state.lock().unwrap();
            state.sources.clear();

            for module in &compilation.modules {
                if !self.pattern.is_match(&module.resource.to_string_lossy()) {
                    continue;
                }

                if state.eligible(&module.resource) {
                    let doc = frontmatter::parse(&module.source).with_context(|| {
                        format!(
                            "failed to extract front-matter from {}",
                            module.resource.display()
                        )
                    })?;
                    emissions.push((asset_name(&module.resource)?, render_module(&doc)?));
                    tracing::debug!(
                        source = %module.resource.display(),
                        attrs = doc.attrs.len(),
                        "extracted source attributes"
                    );
                    state
                        .sources
                        .push(Source::with_attrs(module.resource.clone(), doc.attrs));
                } else {
                    tracing::debug!(
                        source = %module.resource.display(),
                        "source filtered out, keeping empty attributes"
                    );
                    state.sources.push(Source::new(module.resource.clone()));
                }
            }
        }

        for (name, contents) in emissions {
            compilation.emit_asset(name, contents)?;
        }

        Ok(())
    }
}

/// Asset name for a processed source: file name plus `.js`.
fn asset_name(path: &Path) -> anyhow::Result<String> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("source path has no usable file name: {}", path.display()))?;
    Ok(format!("{}.js", file_name))
}

/// Render the generated JS module for an extracted source.
fn render_module(doc: &Document) -> anyhow::Result<String> {
    let attrs = serde_json::to_string(&doc.attrs)?;
    let content = serde_json::to_string(&doc.body)?;
    Ok(format!(
        "module.exports = {{\n  attrs: {},\n  content: {}\n}};\n",
        attrs, content
    ))
}
