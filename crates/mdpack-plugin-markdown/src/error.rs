//! Error types for plugin configuration and file resolution.
//!
//! Both kinds are fail-fast: configuration errors surface when options
//! are constructed, resolution errors when the plugin attaches to a
//! compiler. Neither is recoverable; the host build stops rather than
//! proceeding with a partial file set.

use std::path::PathBuf;

use thiserror::Error;

/// Configuration-shape errors, raised synchronously at construction.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required option `files`")]
    MissingFiles,

    #[error("invalid `files` option: expected a glob string or an array of paths, got {found}")]
    InvalidFiles { found: String },

    #[error("invalid `match` option: expected a regular expression string, got {found}")]
    InvalidMatchShape { found: String },

    #[error("invalid `match` pattern: {0}")]
    InvalidMatch(#[from] regex::Error),

    #[error("invalid plugin options: expected a mapping, got {found}")]
    NotAMapping { found: String },
}

/// File-resolution errors, raised synchronously when the plugin
/// attaches to a compiler context.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("invalid glob pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("no files matched `{pattern}` in {}", .context.display())]
    NoMatches { pattern: String, context: PathBuf },

    #[error("failed to scan {}: {source}", .context.display())]
    Scan {
        context: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}
