//! Block-level grammar for mina single-file components
//!
//! A `.mina` file is a sequence of top-level tagged blocks (`<template>`,
//! `<script>`, `<style>`, plus custom blocks such as `<config>`), each
//! holding foreign content the block consumer interprets on its own.
//! This crate only splits a file into those blocks; it never interprets
//! block content.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Matches a block-opening tag and its raw attribute string
static OPEN_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<([a-zA-Z][a-zA-Z0-9-]*)([^>]*)>").unwrap());

/// Matches one attribute inside an opening tag: `name`, `name="v"`, `name='v'`, `name=v`
static ATTR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)([a-z0-9_-]+)(?:=(?:"([^"]*)"|'([^']*)'|([^>\s]+)))?"#).unwrap()
});

/// Block tags with a fixed meaning in the component format. Everything else
/// is a custom block.
pub const STANDARD_TAGS: [&str; 3] = ["template", "script", "style"];

/// One top-level block of a component file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Tag name, e.g. `template` or `config`.
    pub tag: String,
    /// Attributes from the opening tag; bare attributes map to `"true"`.
    pub attrs: HashMap<String, String>,
    /// Raw content between the opening and closing tag, untrimmed.
    pub content: String,
}

impl Block {
    /// Attribute value by name, if present.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Whether this block's tag has a fixed meaning in the format.
    pub fn is_standard(&self) -> bool {
        STANDARD_TAGS.contains(&self.tag.as_str())
    }
}

/// A parsed component file: its blocks in declaration order.
#[derive(Debug, Clone, Default)]
pub struct ComponentFile {
    pub blocks: Vec<Block>,
}

impl ComponentFile {
    /// Blocks whose tags are not part of the standard set, in declaration
    /// order.
    pub fn custom_blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().filter(|b| !b.is_standard())
    }

    /// First block with the given tag, if any.
    pub fn first_block(&self, tag: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.tag == tag)
    }
}

/// Split component source into its top-level blocks.
///
/// Total over arbitrary input: malformed markup yields fewer blocks, never
/// an error. An opening tag without a matching closing tag is skipped and
/// scanning continues after it, so a broken block cannot swallow the rest
/// of the file. Self-closing tags (`<config />`) produce empty-content
/// blocks.
pub fn parse(source: &str) -> ComponentFile {
    let mut blocks = Vec::new();
    let mut pos = 0;

    while let Some(caps) = OPEN_TAG_RE.captures(&source[pos..]) {
        let open = caps.get(0).unwrap();
        let tag = caps.get(1).unwrap().as_str();
        let attr_str = caps.get(2).unwrap().as_str();
        let open_end = pos + open.end();

        if attr_str.trim_end().ends_with('/') {
            blocks.push(Block {
                tag: tag.to_string(),
                attrs: parse_attrs(attr_str.trim_end().trim_end_matches('/')),
                content: String::new(),
            });
            pos = open_end;
            continue;
        }

        let close = format!("</{}>", tag);
        match source[open_end..].find(&close) {
            Some(rel) => {
                blocks.push(Block {
                    tag: tag.to_string(),
                    attrs: parse_attrs(attr_str),
                    content: source[open_end..open_end + rel].to_string(),
                });
                pos = open_end + rel + close.len();
            }
            None => {
                // Unterminated block: skip the opening tag only
                pos = open_end;
            }
        }
    }

    ComponentFile { blocks }
}

fn parse_attrs(attr_str: &str) -> HashMap<String, String> {
    let mut attrs = HashMap::new();
    for caps in ATTR_RE.captures_iter(attr_str) {
        if let Some(name) = caps.get(1) {
            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .or_else(|| caps.get(4))
                .map(|m| m.as_str().to_string())
                .unwrap_or_else(|| "true".to_string());
            attrs.insert(name.as_str().to_string(), value);
        }
    }
    attrs
}
