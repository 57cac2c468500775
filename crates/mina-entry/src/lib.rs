//! Build-entry discovery for mina component trees
//!
//! A mina application is a tree of single-file components: the root
//! component's `<config>` block names further pages, each of which may name
//! pages of its own. Given the root reference of such a tree, this crate:
//!
//! - recursively resolves every reachable reference to a concrete file,
//!   handling both module-style references (`~pkg/page`, located through
//!   dependency directories) and path-style references (joined against the
//!   project context);
//! - flattens the resulting graph in declaration order; and
//! - derives a collision-safe entry name per file and registers each
//!   `(request, name)` pair with the host bundler's entry collaborator.
//!
//! The crate is a pure in-process library: the host bundler invokes
//! [`MinaEntryPlugin::rewrite`] per build or watch-rebuild and receives the
//! run's outcome as the returned `Result`. Referenced components are only
//! located and named, never validated or executed.

pub mod block;
pub mod entries;
pub mod error;
pub mod modules;
pub mod naming;
pub mod options;
pub mod plugin;
pub mod reference;
pub mod resolver;

pub use block::{extract_config, page_references, BlockParser, ConfigBlock, MinaBlockParser, RawBlock};
pub use entries::{build_entries, EntryRegistrar, EntryRequest};
pub use error::EntryError;
pub use modules::{DependencyDirResolver, ModuleResolver};
pub use naming::entry_name;
pub use options::EntryOptions;
pub use plugin::MinaEntryPlugin;
pub use reference::{is_module_reference, to_request};
pub use resolver::{Resolution, ResolvedEntry, Resolver};
