//! Module-style reference resolution
//!
//! Module references are located by searching dependency directories, not
//! by direct path join. The search base is always passed in explicitly;
//! resolution never depends on the process working directory.

use crate::error::EntryError;
use std::path::{Path, PathBuf};

/// Module-resolution collaborator. Failure is fatal to the run.
pub trait ModuleResolver: Send + Sync {
    fn resolve(&self, base_dir: &Path, request: &str) -> Result<PathBuf, EntryError>;
}

/// Default resolver: ascends from the base directory, probing
/// `<ancestor>/<dir_name>/<request>` until an existing file is found.
#[derive(Debug, Clone)]
pub struct DependencyDirResolver {
    dir_name: String,
}

impl DependencyDirResolver {
    pub fn new(dir_name: impl Into<String>) -> Self {
        Self {
            dir_name: dir_name.into(),
        }
    }
}

impl ModuleResolver for DependencyDirResolver {
    fn resolve(&self, base_dir: &Path, request: &str) -> Result<PathBuf, EntryError> {
        for dir in base_dir.ancestors() {
            let candidate = dir.join(&self.dir_name).join(request);
            if candidate.is_file() {
                return Ok(candidate);
            }
        }
        Err(EntryError::ModuleNotResolved {
            request: request.to_string(),
            base: base_dir.to_path_buf(),
        })
    }
}
