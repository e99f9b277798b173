//! Plugin options and the `files` selector.

use std::path::PathBuf;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ConfigError;

/// How the plugin locates its markdown files.
///
/// Deserializes untagged: a string is a glob pattern, a sequence is an
/// explicit path list, anything else fails. This replaces runtime
/// shape inspection with a decision made once at the config boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileSelector {
    /// Glob pattern expanded relative to the context directory.
    Glob(String),
    /// Explicit path list; relative entries resolve against the
    /// context directory, absolute entries pass through unchanged.
    List(Vec<PathBuf>),
}

impl FileSelector {
    pub fn glob(pattern: impl Into<String>) -> Self {
        Self::Glob(pattern.into())
    }

    pub fn list<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self::List(paths.into_iter().map(Into::into).collect())
    }
}

impl Default for FileSelector {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

/// Options for [`MarkdownEntriesPlugin`](crate::MarkdownEntriesPlugin).
///
/// The default configuration selects no files and applies no match
/// filter.
#[derive(Debug, Clone, Default)]
pub struct MarkdownEntriesOptions {
    /// Which files to register as entry points.
    pub files: FileSelector,
    /// Optional filter forwarded to the extraction plugin: only
    /// sources whose path matches stay eligible for attribute
    /// extraction and asset emission.
    pub match_filter: Option<Regex>,
}

impl MarkdownEntriesOptions {
    pub fn new(files: FileSelector) -> Self {
        Self {
            files,
            match_filter: None,
        }
    }

    /// Options selecting files by glob pattern.
    pub fn glob(pattern: impl Into<String>) -> Self {
        Self::new(FileSelector::glob(pattern))
    }

    /// Options selecting an explicit path list.
    pub fn list<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self::new(FileSelector::list(paths))
    }

    /// Attach a match filter.
    pub fn with_match(mut self, matcher: Regex) -> Self {
        self.match_filter = Some(matcher);
        self
    }

    /// Build options from an untyped config value.
    ///
    /// This is the construction-time validation path: `files` must be
    /// present and either a string or an array of strings, `match` (if
    /// present) must be a valid regular expression string. Unknown
    /// keys are ignored.
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        let Value::Object(map) = value else {
            return Err(ConfigError::NotAMapping {
                found: json_type_name(&value).to_string(),
            });
        };

        let files = match map.get("files") {
            None | Some(Value::Null) => return Err(ConfigError::MissingFiles),
            Some(Value::String(pattern)) => FileSelector::Glob(pattern.clone()),
            Some(Value::Array(items)) => {
                let mut paths = Vec::with_capacity(items.len());
                for item in items {
                    let Value::String(path) = item else {
                        return Err(ConfigError::InvalidFiles {
                            found: format!("an array containing {}", json_type_name(item)),
                        });
                    };
                    paths.push(PathBuf::from(path));
                }
                FileSelector::List(paths)
            }
            Some(other) => {
                return Err(ConfigError::InvalidFiles {
                    found: json_type_name(other).to_string(),
                });
            }
        };

        let match_filter = match map.get("match") {
            None | Some(Value::Null) => None,
            Some(Value::String(pattern)) => Some(Regex::new(pattern)?),
            Some(other) => {
                return Err(ConfigError::InvalidMatchShape {
                    found: json_type_name(other).to_string(),
                });
            }
        };

        Ok(Self {
            files,
            match_filter,
        })
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a mapping",
    }
}
