//! Reference classification and request conversion
//!
//! A reference is module-style iff it begins with the `~` marker; module
//! references are located through dependency directories rather than by
//! direct path join. The request form is what the bundler's module loader
//! accepts.

/// Marker prefix distinguishing module-style references.
pub const MODULE_MARKER: char = '~';

/// Whether a reference names a module rather than a path.
pub fn is_module_reference(reference: &str) -> bool {
    reference.starts_with(MODULE_MARKER)
}

/// Convert a reference into its module-request form.
///
/// Module references lose their marker; path references gain an explicit
/// `./` prefix unless they are already explicitly relative or absolute.
pub fn to_request(reference: &str) -> String {
    if let Some(stripped) = reference.strip_prefix(MODULE_MARKER) {
        return stripped.to_string();
    }
    if reference.is_empty() {
        return "./".to_string();
    }
    if reference.starts_with("./") || reference.starts_with("../") || reference.starts_with('/') {
        return reference.to_string();
    }
    format!("./{}", reference)
}
