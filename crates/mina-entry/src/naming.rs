//! Entry naming
//!
//! Maps a resolved file path to the unique, hierarchy-preserving entry name
//! the bundler files its output under. Names are derived from the path
//! relative to the project context; parent-directory segments are rewritten
//! so a name can never escape the output namespace.

use crate::reference::to_request;
use std::path::{Component, Path, PathBuf};

/// Filename without its extension; empty for degenerate paths.
pub fn file_stem_of(path: &Path) -> &str {
    path.file_stem().and_then(|s| s.to_str()).unwrap_or("")
}

/// Derive the entry name for `path` inside `context`.
///
/// The name is the context-relative path with every `..` occurrence
/// rewritten to `_`, converted to request form (`./`-prefixed, slash
/// separated) and re-extended with `out_ext`. Total and deterministic:
/// any input, including paths outside `context`, yields a syntactically
/// valid name free of traversal segments.
pub fn entry_name(context: &Path, path: &Path, out_ext: &str) -> String {
    let relative = relative_path(context, path);
    let sanitized = relative.to_string_lossy().replace("..", "_");
    let renamed = Path::new(&sanitized).with_extension(out_ext);
    to_request(&renamed.to_string_lossy())
}

/// Relative path from `base` to `target`, ascending with `..` segments
/// where the two diverge.
fn relative_path(base: &Path, target: &Path) -> PathBuf {
    let base_components: Vec<Component> = base.components().collect();
    let target_components: Vec<Component> = target.components().collect();
    let shared = base_components
        .iter()
        .zip(target_components.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut out = PathBuf::new();
    for _ in shared..base_components.len() {
        out.push("..");
    }
    for component in &target_components[shared..] {
        out.push(component.as_os_str());
    }
    out
}
