use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A fenced code region lifted out of a document.
///
/// Code blocks are synthesized directly by the segmenter and never routed
/// through the external importer, which would mangle the fence syntax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeBlock {
    /// Language token from the opening fence; empty when none was given.
    pub language: String,
    /// Fence body with its outermost blank lines removed. Interior
    /// indentation and blank lines are kept verbatim.
    pub text: String,
}

impl CodeBlock {
    pub fn new(language: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            text: text.into(),
        }
    }
}

/// An opaque block owned by the external editor.
///
/// The payload is whatever the importer produced for a prose run. The engine
/// never inspects, reorders, or rewrites it; it only splices it into the
/// output sequence in document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProseBlock(Value);

impl ProseBlock {
    pub fn new(payload: Value) -> Self {
        Self(payload)
    }

    pub fn payload(&self) -> &Value {
        &self.0
    }
}

/// The interchange unit with the external block editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    Code(CodeBlock),
    Prose(ProseBlock),
}

impl Block {
    pub fn code(language: impl Into<String>, text: impl Into<String>) -> Self {
        Block::Code(CodeBlock::new(language, text))
    }

    pub fn prose(payload: Value) -> Self {
        Block::Prose(ProseBlock::new(payload))
    }

    pub fn as_code(&self) -> Option<&CodeBlock> {
        match self {
            Block::Code(code) => Some(code),
            Block::Prose(_) => None,
        }
    }

    pub fn is_code(&self) -> bool {
        matches!(self, Block::Code(_))
    }
}

/// Ordered blocks for a whole document, in original document order.
pub type BlockSequence = Vec<Block>;
