//! Config-block extraction
//!
//! Reads a component file and decodes the JSON content of its `<config>`
//! block. Absence of the block, an empty block, or a missing `pages` field
//! all mean "no children" and are not errors; malformed JSON inside a
//! present, non-empty block is fatal.

use crate::error::EntryError;
use serde::Deserialize;
use std::path::Path;

/// Tag of the recognized configuration block.
pub const CONFIG_TAG: &str = "config";

/// Decoded configuration block of a component file.
///
/// `pages` entries are reference stems without the component extension;
/// unknown fields are the component's own business and are ignored here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigBlock {
    #[serde(default)]
    pub pages: Vec<String>,
}

/// A foreign block as reported by the component grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBlock {
    pub tag: String,
    pub content: String,
}

/// Component-grammar collaborator: splits file text into its custom blocks,
/// in declaration order.
pub trait BlockParser: Send + Sync {
    fn parse(&self, source: &str) -> Vec<RawBlock>;
}

/// Default grammar, backed by the mina single-file-component scanner.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinaBlockParser;

impl BlockParser for MinaBlockParser {
    fn parse(&self, source: &str) -> Vec<RawBlock> {
        mina_component::parse(source)
            .custom_blocks()
            .map(|block| RawBlock {
                tag: block.tag.clone(),
                content: block.content.clone(),
            })
            .collect()
    }
}

/// Read the component at `path` and decode its config block.
///
/// The first block tagged `config` wins when the grammar yields several.
pub async fn extract_config<P: BlockParser>(
    parser: &P,
    path: &Path,
) -> Result<ConfigBlock, EntryError> {
    let source = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| EntryError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;

    let blocks = parser.parse(&source);
    let Some(block) = blocks.iter().find(|b| b.tag == CONFIG_TAG) else {
        return Ok(ConfigBlock::default());
    };

    let content = block.content.trim();
    if content.is_empty() {
        return Ok(ConfigBlock::default());
    }

    serde_json::from_str(content).map_err(|source| EntryError::BlockDecode {
        path: path.to_path_buf(),
        source,
    })
}

/// Child references declared by a config block: each `pages` stem with the
/// component extension appended, in declaration order.
pub fn page_references(config: &ConfigBlock, component_ext: &str) -> Vec<String> {
    config
        .pages
        .iter()
        .map(|page| format!("{}.{}", page, component_ext))
        .collect()
}
