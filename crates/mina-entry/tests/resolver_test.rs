use mina_entry::{DependencyDirResolver, EntryError, EntryOptions, MinaBlockParser, Resolver};
use std::path::Path;
use tempfile::TempDir;

fn write_file(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, contents).unwrap();
}

fn leaf_component() -> &'static str {
    "<template>\n<view>leaf</view>\n</template>\n"
}

fn component_with_pages(pages: &[&str]) -> String {
    let list = pages
        .iter()
        .map(|p| format!("\"{}\"", p))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "<config>\n{{ \"pages\": [{}] }}\n</config>\n<template>\n<view/>\n</template>\n",
        list
    )
}

#[tokio::test]
async fn test_component_without_config_yields_single_item() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "app.mina", leaf_component());

    let options = EntryOptions::default();
    let modules = DependencyDirResolver::new(options.module_dir.clone());
    let resolver = Resolver::new(&MinaBlockParser, &modules, &options);

    let items = resolver
        .resolve(dir.path(), "./app.mina")
        .await
        .unwrap()
        .flatten();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].reference, "./app.mina");
    assert_eq!(items[0].request, "./app.mina");
    assert!(!items[0].is_module);
    assert_eq!(items[0].path, dir.path().join("app.mina"));
}

#[tokio::test]
async fn test_empty_pages_behaves_like_no_config() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "app.mina", &component_with_pages(&[]));

    let options = EntryOptions::default();
    let modules = DependencyDirResolver::new(options.module_dir.clone());
    let resolver = Resolver::new(&MinaBlockParser, &modules, &options);

    let items = resolver
        .resolve(dir.path(), "./app.mina")
        .await
        .unwrap()
        .flatten();
    assert_eq!(items.len(), 1);
}

#[tokio::test]
async fn test_whitespace_config_block_means_no_children() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "app.mina", "<config>   </config>\n<template/>\n");

    let options = EntryOptions::default();
    let modules = DependencyDirResolver::new(options.module_dir.clone());
    let resolver = Resolver::new(&MinaBlockParser, &modules, &options);

    let items = resolver
        .resolve(dir.path(), "./app.mina")
        .await
        .unwrap()
        .flatten();
    assert_eq!(items.len(), 1);
}

#[tokio::test]
async fn test_pages_resolve_in_declaration_order() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "app.mina", &component_with_pages(&["b", "a", "c"]));
    write_file(dir.path(), "b.mina", leaf_component());
    write_file(dir.path(), "a.mina", leaf_component());
    write_file(dir.path(), "c.mina", leaf_component());

    let options = EntryOptions::default();
    let modules = DependencyDirResolver::new(options.module_dir.clone());
    let resolver = Resolver::new(&MinaBlockParser, &modules, &options);

    let items = resolver
        .resolve(dir.path(), "./app.mina")
        .await
        .unwrap()
        .flatten();
    let refs: Vec<_> = items.iter().map(|i| i.reference.as_str()).collect();
    assert_eq!(refs, vec!["./app.mina", "b.mina", "a.mina", "c.mina"]);
}

#[tokio::test]
async fn test_nested_subtrees_flatten_preorder() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "app.mina",
        &component_with_pages(&["pages/parent", "leaf"]),
    );
    write_file(
        dir.path(),
        "pages/parent.mina",
        &component_with_pages(&["pages/child"]),
    );
    write_file(dir.path(), "pages/child.mina", leaf_component());
    write_file(dir.path(), "leaf.mina", leaf_component());

    let options = EntryOptions::default();
    let modules = DependencyDirResolver::new(options.module_dir.clone());
    let resolver = Resolver::new(&MinaBlockParser, &modules, &options);

    let items = resolver
        .resolve(dir.path(), "./app.mina")
        .await
        .unwrap()
        .flatten();
    let refs: Vec<_> = items.iter().map(|i| i.reference.as_str()).collect();
    assert_eq!(
        refs,
        vec!["./app.mina", "pages/parent.mina", "pages/child.mina", "leaf.mina"]
    );
}

#[tokio::test]
async fn test_module_reference_resolves_through_dependency_dir() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "app.mina", &component_with_pages(&["~pkg/page"]));
    write_file(dir.path(), "node_modules/pkg/page.mina", leaf_component());

    let options = EntryOptions::default();
    let modules = DependencyDirResolver::new(options.module_dir.clone());
    let resolver = Resolver::new(&MinaBlockParser, &modules, &options);

    let items = resolver
        .resolve(dir.path(), "./app.mina")
        .await
        .unwrap()
        .flatten();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].reference, "~pkg/page.mina");
    assert_eq!(items[1].request, "pkg/page.mina");
    assert!(items[1].is_module);
    assert_eq!(items[1].path, dir.path().join("node_modules/pkg/page.mina"));
}

#[tokio::test]
async fn test_duplicate_references_resolve_independently() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "app.mina",
        &component_with_pages(&["shared", "shared"]),
    );
    write_file(dir.path(), "shared.mina", leaf_component());

    let options = EntryOptions::default();
    let modules = DependencyDirResolver::new(options.module_dir.clone());
    let resolver = Resolver::new(&MinaBlockParser, &modules, &options);

    let items = resolver
        .resolve(dir.path(), "./app.mina")
        .await
        .unwrap()
        .flatten();
    assert_eq!(items.len(), 3);
    assert_eq!(items[1], items[2]);
}

#[tokio::test]
async fn test_malformed_config_is_fatal() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "app.mina", &component_with_pages(&["broken"]));
    write_file(dir.path(), "broken.mina", "<config>{bad json</config>\n");

    let options = EntryOptions::default();
    let modules = DependencyDirResolver::new(options.module_dir.clone());
    let resolver = Resolver::new(&MinaBlockParser, &modules, &options);

    let err = resolver.resolve(dir.path(), "./app.mina").await.unwrap_err();
    assert!(matches!(err, EntryError::BlockDecode { .. }));
}

#[tokio::test]
async fn test_unresolved_module_is_fatal() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "app.mina", &component_with_pages(&["~pkg/missing"]));

    let options = EntryOptions::default();
    let modules = DependencyDirResolver::new(options.module_dir.clone());
    let resolver = Resolver::new(&MinaBlockParser, &modules, &options);

    let err = resolver.resolve(dir.path(), "./app.mina").await.unwrap_err();
    assert!(matches!(err, EntryError::ModuleNotResolved { .. }));
}

#[tokio::test]
async fn test_missing_target_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "app.mina", &component_with_pages(&["absent"]));

    let options = EntryOptions::default();
    let modules = DependencyDirResolver::new(options.module_dir.clone());
    let resolver = Resolver::new(&MinaBlockParser, &modules, &options);

    let err = resolver.resolve(dir.path(), "./app.mina").await.unwrap_err();
    assert!(matches!(err, EntryError::FileAccess { .. }));
}

#[tokio::test]
async fn test_one_failing_branch_fails_the_run() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "app.mina",
        &component_with_pages(&["good", "absent", "also-good"]),
    );
    write_file(dir.path(), "good.mina", leaf_component());
    write_file(dir.path(), "also-good.mina", leaf_component());

    let options = EntryOptions::default();
    let modules = DependencyDirResolver::new(options.module_dir.clone());
    let resolver = Resolver::new(&MinaBlockParser, &modules, &options);

    let err = resolver.resolve(dir.path(), "./app.mina").await.unwrap_err();
    assert!(matches!(err, EntryError::FileAccess { .. }));
}
