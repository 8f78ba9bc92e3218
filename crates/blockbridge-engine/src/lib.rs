pub mod blocks;
pub mod convert;
pub mod importer;
pub mod io;
pub mod normalize;
pub mod segment;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use blocks::{Block, BlockSequence, CodeBlock, ProseBlock};
pub use convert::{ConvertError, blocks_to_markdown, markdown_to_blocks};
pub use importer::{BlockImporter, BlockSerializer};
pub use normalize::normalize_fenced_code;
pub use segment::{Segment, segments};
