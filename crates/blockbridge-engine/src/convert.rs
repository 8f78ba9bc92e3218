//! Round-trip conversion between stored markdown and editor blocks.
//!
//! Loading splits the document into prose and code segments, hands prose to
//! the external importer, and synthesizes code blocks directly. Saving runs
//! the external serializer and then repairs its fences. The two directions
//! are deliberately not symmetric inverses: the normalizer compensates for
//! defects the serializer introduces, not for anything the segmenter does.

use thiserror::Error;

use crate::blocks::{Block, BlockSequence, CodeBlock};
use crate::importer::{BlockImporter, BlockSerializer};
use crate::normalize::normalize_fenced_code;
use crate::segment::{Segment, segments, trim_outer_blank_lines};

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("block importer rejected a prose segment: {0}")]
    Importer(#[source] anyhow::Error),
    #[error("block serializer failed: {0}")]
    Serializer(#[source] anyhow::Error),
}

/// Convert a markdown document into an ordered block sequence for the editor.
///
/// Prose segments go through `importer`; each properly terminated fence
/// becomes exactly one [`CodeBlock`] without touching the importer. Importer
/// calls are awaited strictly in document order, one at a time. A rejected
/// prose segment aborts the whole conversion; no partial sequence is
/// returned.
pub async fn markdown_to_blocks(
    markdown: &str,
    importer: &dyn BlockImporter,
) -> Result<BlockSequence, ConvertError> {
    let mut blocks = BlockSequence::new();

    for segment in segments(markdown) {
        match segment {
            Segment::Prose(text) => {
                let text = text.trim();
                if text.is_empty() {
                    // Whitespace between fences; an importer call here would
                    // only synthesize spurious empty blocks.
                    continue;
                }
                let parsed = importer
                    .try_parse(text)
                    .await
                    .map_err(ConvertError::Importer)?;
                blocks.extend(parsed);
            }
            Segment::Code { language, body } => {
                blocks.push(Block::Code(CodeBlock::new(
                    language,
                    trim_outer_blank_lines(body),
                )));
            }
        }
    }

    Ok(blocks)
}

/// Serialize editor blocks back to markdown for persistence.
///
/// The serializer's output is always routed through
/// [`normalize_fenced_code`]; persisting un-normalized output would
/// mis-segment on the next load.
pub async fn blocks_to_markdown(
    blocks: &[Block],
    serializer: &dyn BlockSerializer,
) -> Result<String, ConvertError> {
    let markdown = serializer
        .to_markdown_lossy(blocks)
        .await
        .map_err(ConvertError::Serializer)?;
    Ok(normalize_fenced_code(&markdown))
}
