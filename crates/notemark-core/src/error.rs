//! Errors raised when placing a selection.
//!
//! Editing itself never fails: unknown shortcuts and structural mismatches
//! fall back to plain text behavior. Only caller-supplied positions are
//! checked.

use thiserror::Error;

use crate::ast::BlockPath;

/// Errors from [`crate::Editor::select`] and friends.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// The path does not address any block.
    #[error("no block at index {index} (item {item:?})")]
    InvalidPath {
        /// Top-level index.
        index: usize,
        /// List item index.
        item: Option<usize>,
    },

    /// The path addresses a list container or a raw node.
    #[error("block at index {0} holds no text")]
    NotTextBlock(usize),

    /// The offset is past the end of the text or inside a character.
    #[error("offset {offset} is not a char boundary in a block of {len} bytes")]
    InvalidOffset {
        /// Requested offset.
        offset: usize,
        /// Length of the block's text.
        len: usize,
    },
}

impl EditError {
    pub(crate) fn invalid_path(path: BlockPath) -> Self {
        EditError::InvalidPath {
            index: path.index,
            item: path.item,
        }
    }
}

/// Result type for editor operations that can fail.
pub type Result<T> = std::result::Result<T, EditError>;
