//! Conversion between documents and stored note text.
//!
//! The text form is line oriented: one line per block, one line per list
//! item. It is lossy in one direction only: whitespace after the single
//! separator space is kept, but the text is not guaranteed to come back
//! byte-identical.

use tracing::trace;

use crate::ast::{Block, BlockKind, BulletedList, Document, ListItem, Text};
use crate::lexer::Lexer;
use crate::registry;

/// Render a document as note text.
pub fn to_text(document: &Document) -> String {
    let mut out = String::new();
    for (i, block) in document.blocks.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&registry::serialize(block));
    }
    out
}

/// Parse note text into a document.
///
/// `None` and empty input yield [`Document::empty`]. Consecutive list lines
/// are grouped into one bulleted list; a list line that does not directly
/// follow another starts a new list.
pub fn to_document(text: Option<&str>) -> Document {
    let input = match text {
        Some(s) if !s.is_empty() => s,
        _ => return Document::empty(),
    };

    let mut blocks: Vec<Block> = Vec::with_capacity(16);
    let mut lines = 0usize;

    for line in Lexer::new(input) {
        lines += 1;
        let token = line.first_token();
        let kind = registry::lookup_shortcut(token).unwrap_or(BlockKind::Paragraph);

        // a bare trigger has no "<trigger> " to strip and keeps the full line
        let body = match kind {
            BlockKind::Paragraph => line.text,
            _ => line.body_after(token).unwrap_or(line.text),
        };
        let props = registry::derive_properties(kind, token);
        let children = vec![Text::new(body)];

        if kind == BlockKind::ListItem {
            let item = ListItem { children };
            match blocks.last_mut() {
                Some(Block::BulletedList(list)) => list.children.push(item),
                _ => blocks.push(Block::BulletedList(BulletedList {
                    children: vec![item],
                })),
            }
        } else {
            blocks.push(Block::from_parts(kind, props, children));
        }
    }

    trace!(lines, blocks = blocks.len(), "parsed note text");
    Document::new(blocks)
}

/// Whether a document holds anything worth saving.
///
/// True when some text block has a run with non-whitespace text, or some
/// list has an item with runs. Raw nodes never count.
pub fn has_content(document: &Document) -> bool {
    document.blocks.iter().any(|block| match block {
        Block::BulletedList(list) => list.children.iter().any(|item| !item.children.is_empty()),
        Block::Raw(_) => false,
        _ => block
            .children()
            .is_some_and(|runs| runs.iter().any(|r| !r.text.trim().is_empty())),
    })
}

impl Document {
    /// Parse note text. See [`to_document`].
    pub fn from_markdown(text: &str) -> Document {
        to_document(Some(text))
    }

    /// Render as note text. See [`to_text`].
    pub fn to_markdown(&self) -> String {
        to_text(self)
    }

    /// See [`has_content`].
    pub fn has_content(&self) -> bool {
        has_content(self)
    }
}
