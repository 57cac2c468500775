//! Entry-discovery error types
//!
//! Every variant is fatal to the run that raised it: one failing branch
//! fails the whole resolution, and the error reaches the host once through
//! the plugin's completion result. The legitimate "no config block / no
//! pages" case is data, not an error.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EntryError {
    /// A present, non-empty config block holds invalid JSON.
    #[error("invalid config block in {}: {}", .path.display(), .source)]
    BlockDecode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A module-style reference was not found in any dependency directory
    /// above the base directory.
    #[error("cannot resolve module '{}' from {}", .request, .base.display())]
    ModuleNotResolved { request: String, base: PathBuf },

    /// Reading a component file failed (missing file, permissions, I/O).
    #[error("failed to read {}: {}", .path.display(), .source)]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
