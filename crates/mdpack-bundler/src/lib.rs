//! # mdpack-bundler
//!
//! Minimal plugin-driven build host for markdown asset pipelines.
//!
//! The host owns a context directory, an ordered plugin list, and the
//! compilation lifecycle. Plugins contribute entry points (with loader
//! chains), then post-process the compilation: reading module sources,
//! extracting data, emitting assets. Everything is synchronous and
//! in-memory, so a compiler can be driven directly from tests.
//!
//! ## Lifecycle
//!
//! ```text
//! Compiler::new()  → configure() hook per plugin (fail-fast setup)
//! Compiler::run()  → build_entries() hooks → read entry sources
//!                  → process() hooks → Compilation (entries, modules, assets)
//! ```
//!
//! ## Quick start
//!
//! ```no_run
//! use mdpack_bundler::{Compiler, CompilerOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let compiler = Compiler::new(CompilerOptions::new("./docs"))?;
//! let compilation = compiler.run()?;
//! for (name, _contents) in compilation.assets() {
//!     println!("emitted {name}");
//! }
//! # Ok(()) }
//! ```

pub mod compilation;
pub mod compiler;
pub mod entry;
pub mod error;
pub mod plugin;

#[cfg(feature = "logging")]
pub mod logging;

pub use compilation::{Compilation, Module};
pub use compiler::{Compiler, CompilerOptions};
pub use entry::{EntryRecord, EntrySet, Loader, NOOP_LOADER};
pub use error::{BuildError, Result};
pub use plugin::{Plugin, PluginContext, SharedPlugin};
