//! Shared test doubles for the external editor interfaces, plus filesystem
//! helpers for io tests.


use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use crate::blocks::{Block, BlockSequence};
use crate::importer::{BlockImporter, BlockSerializer};

/// Stub importer: one opaque paragraph block per blank-line-separated
/// paragraph, and a record of every prose run it was handed.
#[derive(Default)]
pub struct ParagraphImporter {
    calls: Mutex<Vec<String>>,
}

impl ParagraphImporter {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BlockImporter for ParagraphImporter {
    async fn try_parse(&self, prose: &str) -> anyhow::Result<BlockSequence> {
        self.calls.lock().unwrap().push(prose.to_string());
        Ok(prose
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(|p| Block::prose(json!({ "type": "paragraph", "content": p })))
            .collect())
    }
}

/// Stub importer that rejects everything.
pub struct FailingImporter;

#[async_trait]
impl BlockImporter for FailingImporter {
    async fn try_parse(&self, _prose: &str) -> anyhow::Result<BlockSequence> {
        anyhow::bail!("stub importer rejects all input")
    }
}

pub fn create_test_content_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

pub fn create_test_file(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("failed to write test file");
    path
}

/// Stub serializer mimicking the external editor's lossy markdown output:
/// paragraph blocks print their content, code blocks come out with the
/// closing-fence newline missing, as the real serializer is prone to.
pub struct LossyStubSerializer;

#[async_trait]
impl BlockSerializer for LossyStubSerializer {
    async fn to_markdown_lossy(&self, blocks: &[Block]) -> anyhow::Result<String> {
        let mut parts = Vec::new();
        for block in blocks {
            match block {
                Block::Code(code) => {
                    parts.push(format!("```{}\n{}```", code.language, code.text));
                }
                Block::Prose(prose) => {
                    let content = prose.payload()["content"].as_str().unwrap_or_default();
                    parts.push(content.to_string());
                }
            }
        }
        Ok(parts.join("\n\n"))
    }
}
