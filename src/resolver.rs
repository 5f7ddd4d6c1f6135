//! Declared path validation against the source tree
//!
//! A declared `rel_path` is joined onto the source tree root. Literal paths must exist
//! as-is; paths containing `*` are expanded against the real tree one component at a time
//! and must match at least one existing entry. Files and directories are treated alike.
//!
//! Expansion is non-recursive: `**` behaves like `*`, and wildcard components skip names
//! starting with `.` unless the component itself starts with `.`.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

use crate::error::{Result, manifest as manifest_error, resolve as resolve_error};

/// Character that turns a declared path into a glob pattern
pub const WILDCARD_CHAR: char = '*';

/// Characters that make a single component of a glob pattern match by pattern
pub const PATTERN_CHARS: &[char] = &['*', '?', '['];

/// wax metacharacters with no glob meaning here, matched literally
const LITERAL_CHARS: &[char] = &['{', '}', '<', '>', '(', ')'];

/// Check whether a declared path needs wildcard expansion
///
/// Only `*` triggers expansion; `?` and `[` in an otherwise literal path are part of
/// the file name.
pub fn has_wildcards(path: &str) -> bool {
    path.contains(WILDCARD_CHAR)
}

fn is_pattern_component(component: &str) -> bool {
    component.contains(PATTERN_CHARS)
}

/// wax expression for one path component: runs of `*` collapse to a single `*`
fn component_expression(component: &str) -> String {
    let mut expression = String::with_capacity(component.len());
    let mut previous = None;
    for c in component.chars() {
        if c == '*' && previous == Some('*') {
            continue;
        }
        if LITERAL_CHARS.contains(&c) {
            expression.push('\\');
        }
        expression.push(c);
        previous = Some(c);
    }
    expression
}

/// Validates declared paths relative to a source tree root
#[derive(Debug, Clone)]
pub struct PathResolver {
    root: PathBuf,
}

impl PathResolver {
    /// Create a resolver for the tree at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Source tree root this resolver checks against
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `root + "/" + rel_path`, without any normalization
    pub fn absolute_path(&self, rel_path: &str) -> PathBuf {
        let mut joined = OsString::from(self.root.as_os_str());
        joined.push("/");
        joined.push(rel_path);
        PathBuf::from(joined)
    }

    /// Candidate paths a declared `rel_path` stands for
    ///
    /// A literal path yields exactly its absolute form, whether or not it exists.
    /// A wildcard path yields the sorted matches found in the tree, possibly none.
    /// Matches that are dangling symlinks are kept so the existence check rejects them.
    pub fn candidates(&self, rel_path: &str) -> Result<Vec<PathBuf>> {
        if has_wildcards(rel_path) {
            self.expand(rel_path)
        } else {
            Ok(vec![self.absolute_path(rel_path)])
        }
    }

    /// Check that `rel_path` refers to at least one existing path
    ///
    /// Returns the checked candidates. Fails on the first candidate that does not exist,
    /// or with the absolute pattern itself when a wildcard expansion is empty.
    pub fn validate(&self, rel_path: &str) -> Result<Vec<PathBuf>> {
        let candidates = self.candidates(rel_path)?;

        if candidates.is_empty() {
            let pattern = self.absolute_path(rel_path);
            return Err(resolve_error::path_not_found(
                rel_path,
                pattern.display().to_string(),
            ));
        }

        if let Some(missing) = candidates.iter().find(|candidate| !candidate.exists()) {
            return Err(resolve_error::path_not_found(
                rel_path,
                missing.display().to_string(),
            ));
        }

        tracing::debug!(rel_path, matches = candidates.len(), "declared path exists");

        Ok(candidates)
    }

    /// Expand a wildcard `rel_path` against the tree, one component at a time
    fn expand(&self, rel_path: &str) -> Result<Vec<PathBuf>> {
        let dirs_only = rel_path.ends_with('/');
        let components: Vec<&str> = rel_path
            .split('/')
            .filter(|c| !c.is_empty() && *c != ".")
            .collect();
        let last = components.len().saturating_sub(1);

        let mut current = vec![self.root.clone()];
        for (depth, component) in components.iter().enumerate() {
            let is_last = depth == last;
            let need_dir = !is_last || dirs_only;

            current = if is_pattern_component(component) {
                let expression = component_expression(component);
                let glob = Glob::new(&expression)
                    .map_err(|e| manifest_error::invalid_pattern(rel_path, e.to_string()))?;
                let hidden_ok = component.starts_with('.');

                let mut next = Vec::new();
                for base in &current {
                    next.extend(list_matching(base, &glob, hidden_ok, need_dir));
                }
                next
            } else {
                current
                    .into_iter()
                    .map(|base| base.join(component))
                    .filter(|path| fs::symlink_metadata(path).is_ok())
                    .filter(|path| !(is_last && dirs_only) || path.is_dir())
                    .collect()
            };

            if current.is_empty() {
                break;
            }
        }

        current.sort();

        tracing::trace!(rel_path, matches = current.len(), "expanded wildcard path");

        Ok(current)
    }
}

/// Entries of `dir` whose names match `glob`
///
/// Symlinks are not followed while listing, so a dangling link is still returned.
fn list_matching(dir: &Path, glob: &Glob<'_>, hidden_ok: bool, need_dir: bool) -> Vec<PathBuf> {
    if !dir.is_dir() {
        return Vec::new();
    }

    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| {
            let name = entry.file_name().to_string_lossy();
            (hidden_ok || !name.starts_with('.'))
                && glob.matched(&CandidatePath::from(name.as_ref())).is_some()
        })
        .map(walkdir::DirEntry::into_path)
        .filter(|path| !need_dir || path.is_dir())
        .collect()
}
