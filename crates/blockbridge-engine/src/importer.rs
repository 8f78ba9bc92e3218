//! Capability interfaces over the external block editor.
//!
//! The editor itself is an external collaborator; the engine only depends on
//! these two traits and test code substitutes stubs for them.

use async_trait::async_trait;

use crate::blocks::{Block, BlockSequence};

/// Markdown importer exposed by the external block editor.
///
/// Must not fail for well-formed non-fenced markdown; may fail for malformed
/// input. The engine never hands fenced code to it.
#[async_trait]
pub trait BlockImporter: Send + Sync {
    /// Parse a run of non-fenced markdown into editor blocks.
    ///
    /// The returned blocks are spliced into the output sequence as-is, in
    /// order. Zero blocks is a valid answer.
    async fn try_parse(&self, prose: &str) -> anyhow::Result<BlockSequence>;
}

/// The external block-to-markdown serializer.
///
/// "Lossy" by contract: it gives no guarantee of byte-faithful fence
/// formatting, which is why its output is always routed through
/// [`crate::normalize::normalize_fenced_code`] before persistence.
#[async_trait]
pub trait BlockSerializer: Send + Sync {
    async fn to_markdown_lossy(&self, blocks: &[Block]) -> anyhow::Result<String>;
}
