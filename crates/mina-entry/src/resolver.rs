//! Recursive reference resolution
//!
//! The orchestrator: classify a reference, locate its file, read the pages
//! its config block declares, and recurse into each page. Sibling subtrees
//! resolve concurrently, but the output always follows declaration order —
//! children are joined by declared index, never by completion order.
//!
//! References are resolved independently at every occurrence; there is no
//! memoization across the graph, so a diamond-shaped reference graph does
//! redundant reads and a reference cycle does not terminate.

use crate::block::{extract_config, page_references, BlockParser};
use crate::error::EntryError;
use crate::modules::ModuleResolver;
use crate::options::EntryOptions;
use crate::reference::{is_module_reference, to_request};
use futures_util::future::{try_join_all, BoxFuture};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A reference resolved to a concrete file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntry {
    /// The reference as written in the parent's config block (or supplied
    /// as the root).
    pub reference: String,
    /// Module-request form of the reference.
    pub request: String,
    pub is_module: bool,
    /// Absolute location of the component file.
    pub path: PathBuf,
}

/// One node of the resolution graph.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub entry: ResolvedEntry,
    pub children: Vec<Resolution>,
}

impl Resolution {
    /// Pre-order flattening: the node itself, then each child subtree in
    /// declaration order.
    pub fn flatten(self) -> Vec<ResolvedEntry> {
        let mut out = Vec::new();
        self.flatten_into(&mut out);
        out
    }

    fn flatten_into(self, out: &mut Vec<ResolvedEntry>) {
        out.push(self.entry);
        for child in self.children {
            child.flatten_into(out);
        }
    }
}

/// Recursive reference resolver over pluggable grammar and module-lookup
/// collaborators.
pub struct Resolver<'a, P, M> {
    parser: &'a P,
    modules: &'a M,
    options: &'a EntryOptions,
}

impl<'a, P: BlockParser, M: ModuleResolver> Resolver<'a, P, M> {
    pub fn new(parser: &'a P, modules: &'a M, options: &'a EntryOptions) -> Self {
        Self {
            parser,
            modules,
            options,
        }
    }

    /// Resolve `reference` against `base_dir` and, transitively, every page
    /// it declares.
    ///
    /// The first failing branch fails the whole call; remaining sibling
    /// branches are dropped and their results discarded.
    pub async fn resolve(
        &self,
        base_dir: &Path,
        reference: &str,
    ) -> Result<Resolution, EntryError> {
        self.resolve_tree(base_dir, reference.to_string()).await
    }

    fn resolve_tree<'s>(
        &'s self,
        base_dir: &'s Path,
        reference: String,
    ) -> BoxFuture<'s, Result<Resolution, EntryError>> {
        Box::pin(async move {
            let is_module = is_module_reference(&reference);
            let request = to_request(&reference);
            let path = if is_module {
                self.modules.resolve(base_dir, &request)?
            } else {
                base_dir.join(&reference)
            };
            debug!(reference = %reference, path = %path.display(), "resolving component");

            let config = extract_config(self.parser, &path).await?;
            let pages = page_references(&config, &self.options.component_ext);

            let entry = ResolvedEntry {
                reference,
                request,
                is_module,
                path,
            };

            if pages.is_empty() {
                return Ok(Resolution {
                    entry,
                    children: Vec::new(),
                });
            }

            let children = try_join_all(
                pages
                    .into_iter()
                    .map(|page| self.resolve_tree(base_dir, page)),
            )
            .await?;

            Ok(Resolution { entry, children })
        })
    }
}
