//! Shortcut triggers and line prefixes for each block kind.
//!
//! The registry is a fixed table built at compile time. Both the transcoder
//! and the shortcut engine read it; nothing writes to it.

use crate::ast::{Block, BlockKind, BlockProps};

/// Trigger token that marks a checked todo.
pub const CHECKED_TODO: &str = "[x]";
/// Trigger token that marks an unchecked todo.
pub const UNCHECKED_TODO: &str = "[]";

/// One trigger → kind mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    /// Literal token, matched exactly.
    pub trigger: &'static str,
    /// Block kind the trigger produces.
    pub kind: BlockKind,
}

const fn shortcut(trigger: &'static str, kind: BlockKind) -> Shortcut {
    Shortcut { trigger, kind }
}

/// Every recognized trigger.
pub static SHORTCUTS: &[Shortcut] = &[
    shortcut("-", BlockKind::ListItem),
    shortcut(UNCHECKED_TODO, BlockKind::Todo),
    shortcut(CHECKED_TODO, BlockKind::Todo),
    shortcut(">", BlockKind::BlockQuote),
    shortcut("#", BlockKind::Heading),
    shortcut("##", BlockKind::Heading),
    shortcut("###", BlockKind::Heading),
    shortcut("####", BlockKind::Heading),
    shortcut("#####", BlockKind::Heading),
    shortcut("######", BlockKind::Heading),
];

/// Side effect to run after a block has been rewritten to a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostConstruct {
    /// Wrap the item in a bulleted list, joining neighbouring lists.
    WrapInList,
}

/// Look up the kind for a trigger. Prefixes do not match.
#[inline]
pub fn lookup_shortcut(trigger: &str) -> Option<BlockKind> {
    SHORTCUTS
        .iter()
        .find(|s| s.trigger == trigger)
        .map(|s| s.kind)
}

/// Derive kind-specific fields from the trigger that produced the block.
pub fn derive_properties(kind: BlockKind, trigger: &str) -> BlockProps {
    match kind {
        BlockKind::Heading => BlockProps {
            level: Some(trigger.len().clamp(1, 6) as u8),
            done: None,
        },
        BlockKind::Todo => BlockProps {
            level: None,
            done: Some(trigger == CHECKED_TODO),
        },
        BlockKind::Paragraph
        | BlockKind::BlockQuote
        | BlockKind::BulletedList
        | BlockKind::ListItem => BlockProps::default(),
    }
}

/// Hook to run after rewriting a block to `kind`.
pub fn post_construct(kind: BlockKind) -> Option<PostConstruct> {
    match kind {
        BlockKind::ListItem => Some(PostConstruct::WrapInList),
        _ => None,
    }
}

/// Line prefix for a text block, without the separating space.
///
/// Paragraphs, lists and raw nodes have none.
pub fn prefix(block: &Block) -> Option<String> {
    match block {
        Block::Heading(h) => Some("#".repeat(h.level.clamp(1, 6) as usize)),
        Block::Quote(_) => Some(">".to_string()),
        Block::Todo(t) => Some(todo_trigger(t.done).to_string()),
        Block::ListItem(_) => Some("-".to_string()),
        Block::Paragraph(_) | Block::BulletedList(_) | Block::Raw(_) => None,
    }
}

#[inline]
fn todo_trigger(done: bool) -> &'static str {
    if done {
        CHECKED_TODO
    } else {
        UNCHECKED_TODO
    }
}

/// Render a block in its line form.
///
/// A bulleted list produces one `- ` line per item, joined by newlines.
pub fn serialize(block: &Block) -> String {
    match block {
        Block::Paragraph(_) => block.text(),
        Block::BulletedList(list) => {
            let mut out = String::new();
            for (i, item) in list.children.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                out.push_str("- ");
                for run in &item.children {
                    out.push_str(&run.text);
                }
            }
            out
        }
        Block::Raw(raw) => raw.text.clone().unwrap_or_default(),
        Block::Heading(_) | Block::Quote(_) | Block::Todo(_) | Block::ListItem(_) => {
            let mut out = prefix(block).unwrap_or_default();
            out.push(' ');
            out.push_str(&block.text());
            out
        }
    }
}
