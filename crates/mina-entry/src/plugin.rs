//! Plugin facade
//!
//! The surface the host bundler drives: one [`MinaEntryPlugin::rewrite`]
//! call at the start of a build and one at the start of every watch
//! rebuild. Each call resolves the whole reference tree from scratch and
//! registers the discovered entries; no state survives between runs. The
//! returned result is the run's single completion signal — `Ok` on
//! success, the first fatal error otherwise. The host is expected to
//! suppress its own default handling of the root entry.

use crate::block::MinaBlockParser;
use crate::entries::{build_entries, EntryRegistrar};
use crate::error::EntryError;
use crate::modules::DependencyDirResolver;
use crate::options::EntryOptions;
use crate::resolver::Resolver;
use std::path::Path;
use tracing::info;

pub struct MinaEntryPlugin {
    options: EntryOptions,
    parser: MinaBlockParser,
    modules: DependencyDirResolver,
}

impl MinaEntryPlugin {
    pub fn new(options: EntryOptions) -> Self {
        let modules = DependencyDirResolver::new(options.module_dir.clone());
        Self {
            options,
            parser: MinaBlockParser,
            modules,
        }
    }

    pub fn options(&self) -> &EntryOptions {
        &self.options
    }

    /// Resolve every component reachable from `entry` and register each one
    /// with `registrar`. Called per build / watch-rebuild trigger.
    pub async fn rewrite<R: EntryRegistrar>(
        &self,
        context: &Path,
        entry: &str,
        registrar: &mut R,
    ) -> Result<(), EntryError> {
        let resolver = Resolver::new(&self.parser, &self.modules, &self.options);
        let resolution = resolver.resolve(context, entry).await?;
        let registered = build_entries(context, resolution, &self.options.target_ext, registrar);
        info!(
            context = %context.display(),
            entries = registered.len(),
            "entry set rebuilt"
        );
        Ok(())
    }
}

impl Default for MinaEntryPlugin {
    fn default() -> Self {
        Self::new(EntryOptions::default())
    }
}
