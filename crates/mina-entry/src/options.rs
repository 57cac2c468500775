//! Plugin options
//!
//! Supplied by the host build configuration as data; every field has a
//! default so partial option objects deserialize cleanly.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EntryOptions {
    /// Name of the dependency directories searched for module-style
    /// references.
    pub module_dir: String,

    /// Extension of component files, appended to `pages` stems when
    /// deriving child references.
    pub component_ext: String,

    /// Extension of the generated entry names.
    pub target_ext: String,
}

impl Default for EntryOptions {
    fn default() -> Self {
        Self {
            module_dir: "node_modules".to_string(),
            component_ext: "mina".to_string(),
            target_ext: "js".to_string(),
        }
    }
}
