//! Entry-set building
//!
//! Flattens a resolution graph in declaration order, names every item, and
//! hands each `(request, name)` pair to the bundler's entry-registration
//! collaborator.

use crate::naming::entry_name;
use crate::resolver::Resolution;
use std::path::Path;
use tracing::debug;

/// Entry request forms accepted by the bundler's registration surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryRequest {
    Single(String),
    Multi(Vec<String>),
}

/// Bundler collaborator that accepts new build entry points.
///
/// Registration order matters: when two items derive the same entry name,
/// the later registration is expected to win downstream. The builder does
/// not deduplicate.
pub trait EntryRegistrar {
    fn add_entry(&mut self, context: &Path, request: EntryRequest, name: &str);
}

/// Flatten `resolution`, derive each item's entry name, and register every
/// `(request, name)` pair. Returns the pairs in registration order.
pub fn build_entries<R: EntryRegistrar>(
    context: &Path,
    resolution: Resolution,
    target_ext: &str,
    registrar: &mut R,
) -> Vec<(String, String)> {
    let mut registered = Vec::new();
    for item in resolution.flatten() {
        let name = entry_name(context, &item.path, target_ext);
        debug!(request = %item.request, name = %name, "registering entry");
        registrar.add_entry(context, EntryRequest::Single(item.request.clone()), &name);
        registered.push((item.request, name));
    }
    registered
}
