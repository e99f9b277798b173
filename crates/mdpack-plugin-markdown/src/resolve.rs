//! File selector resolution against a context directory.

use std::path::{Path, PathBuf};

use globset::GlobBuilder;
use path_clean::PathClean;
use rustc_hash::FxHashSet;
use walkdir::WalkDir;

use crate::config::FileSelector;
use crate::error::ResolveError;

/// Resolve a selector to an ordered, deduplicated list of absolute
/// paths.
///
/// Glob results come back sorted; explicit lists keep their input
/// order. Explicit entries are not checked for existence - the host
/// validates that when it reads them.
pub(crate) fn resolve_selector(
    selector: &FileSelector,
    context: &Path,
) -> Result<Vec<PathBuf>, ResolveError> {
    match selector {
        FileSelector::Glob(pattern) => resolve_glob(pattern, context),
        FileSelector::List(paths) => Ok(resolve_list(paths, context)),
    }
}

fn resolve_glob(pattern: &str, context: &Path) -> Result<Vec<PathBuf>, ResolveError> {
    // literal_separator keeps `*` from crossing directory boundaries,
    // so `*.md` only matches files directly under the context.
    let matcher = GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map_err(|source| ResolveError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?
        .compile_matcher();

    let mut matches = Vec::new();
    for entry in WalkDir::new(context).follow_links(false) {
        let entry = entry.map_err(|source| ResolveError::Scan {
            context: context.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry.path().strip_prefix(context).unwrap_or(entry.path());
        if matcher.is_match(relative) {
            matches.push(entry.into_path());
        }
    }

    matches.sort();
    matches.dedup();

    if matches.is_empty() {
        return Err(ResolveError::NoMatches {
            pattern: pattern.to_string(),
            context: context.to_path_buf(),
        });
    }

    Ok(matches)
}

fn resolve_list(paths: &[PathBuf], context: &Path) -> Vec<PathBuf> {
    let mut seen = FxHashSet::default();
    let mut resolved = Vec::with_capacity(paths.len());
    for path in paths {
        let absolute = if path.is_absolute() {
            path.clone()
        } else {
            context.join(path).clean()
        };
        if seen.insert(absolute.clone()) {
            resolved.push(absolute);
        }
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, "").unwrap();
        path
    }

    #[test]
    fn test_glob_matches_are_absolute_and_sorted() {
        let dir = TempDir::new().unwrap();
        let b = touch(&dir, "b.md");
        let a = touch(&dir, "a.md");
        touch(&dir, "ignored.txt");

        let resolved =
            resolve_selector(&FileSelector::glob("*.md"), dir.path()).unwrap();
        assert_eq!(resolved, vec![a, b]);
    }

    #[test]
    fn test_glob_does_not_cross_directories() {
        let dir = TempDir::new().unwrap();
        let top = touch(&dir, "top.md");
        let nested = touch(&dir, "sub/nested.md");

        let resolved =
            resolve_selector(&FileSelector::glob("*.md"), dir.path()).unwrap();
        assert_eq!(resolved, vec![top]);

        let resolved =
            resolve_selector(&FileSelector::glob("sub/*.md"), dir.path()).unwrap();
        assert_eq!(resolved, vec![nested]);
    }

    #[test]
    fn test_glob_with_no_matches_fails() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "note.txt");

        let err =
            resolve_selector(&FileSelector::glob("1/*.md"), dir.path()).unwrap_err();
        assert!(matches!(err, ResolveError::NoMatches { pattern, .. } if pattern == "1/*.md"));
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let dir = TempDir::new().unwrap();
        let err =
            resolve_selector(&FileSelector::glob("a{b"), dir.path()).unwrap_err();
        assert!(matches!(err, ResolveError::InvalidPattern { .. }));
    }

    #[test]
    fn test_list_preserves_order_and_resolves_relative_entries() {
        let dir = TempDir::new().unwrap();
        let absolute = dir.path().join("one.md");

        let selector = FileSelector::list([
            absolute.to_string_lossy().into_owned(),
            "./two.md".to_string(),
        ]);
        let resolved = resolve_selector(&selector, dir.path()).unwrap();

        assert_eq!(resolved, vec![absolute, dir.path().join("two.md")]);
    }

    #[test]
    fn test_list_skips_existence_checks_and_dedupes() {
        let dir = TempDir::new().unwrap();

        let selector = FileSelector::list(["missing.md", "./missing.md", "other.md"]);
        let resolved = resolve_selector(&selector, dir.path()).unwrap();

        assert_eq!(
            resolved,
            vec![dir.path().join("missing.md"), dir.path().join("other.md")]
        );
    }
}
