//! Error types for the build host.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BuildError>;

#[derive(Debug, Error)]
pub enum BuildError {
    /// A plugin's configure hook failed during compiler construction.
    #[error("plugin `{plugin}` failed during setup: {source}")]
    PluginSetup {
        plugin: String,
        #[source]
        source: anyhow::Error,
    },

    /// A plugin hook failed during a compilation run.
    #[error("plugin `{plugin}` failed in `{hook}` hook: {source}")]
    PluginHook {
        plugin: String,
        hook: &'static str,
        #[source]
        source: anyhow::Error,
    },

    /// An entry's source could not be read from disk.
    #[error("failed to read entry {}: {source}", .path.display())]
    EntryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An entry has no loader chain and is not a module type the host
    /// handles by default.
    #[error("no loader configured for entry {} and no default handling for its file type", .0.display())]
    NoLoader(PathBuf),

    /// An entry references a loader the host cannot execute.
    #[error("unknown loader `{loader}` for entry {}", .path.display())]
    UnknownLoader { loader: String, path: PathBuf },

    /// Two plugins emitted an asset under the same name.
    #[error("asset `{0}` emitted more than once")]
    DuplicateAsset(String),
}
