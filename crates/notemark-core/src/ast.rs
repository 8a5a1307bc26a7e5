//! Document tree types for notes.
//!
//! This module contains the block and text node types that the transcoder
//! produces and the editor mutates. The tree is shallow:
//!
//! - **Block-level**: a document is a flat sequence of blocks; only a
//!   bulleted list nests (it holds list items)
//! - **Owned**: nodes own their text, since the editor rewrites them in place
//! - **Mark-free**: text runs carry plain strings, no inline formatting

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Type tag of a block, without its payload.
///
/// Tags are stable strings (`"paragraph"`, `"block-quote"`, ...) shared by
/// the registry, the JSON form of a document, and the CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum BlockKind {
    /// Plain text line.
    Paragraph,
    /// Heading with a level (1-6).
    Heading,
    /// Quoted line.
    BlockQuote,
    /// Checkbox line.
    Todo,
    /// Container of list items.
    BulletedList,
    /// One bullet.
    ListItem,
}

impl BlockKind {
    /// All kinds, in declaration order.
    pub const ALL: [BlockKind; 6] = [
        BlockKind::Paragraph,
        BlockKind::Heading,
        BlockKind::BlockQuote,
        BlockKind::Todo,
        BlockKind::BulletedList,
        BlockKind::ListItem,
    ];

    /// Stable string tag for this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            BlockKind::Paragraph => "paragraph",
            BlockKind::Heading => "heading",
            BlockKind::BlockQuote => "block-quote",
            BlockKind::Todo => "todo",
            BlockKind::BulletedList => "bulleted-list",
            BlockKind::ListItem => "list-item",
        }
    }

    /// Whether blocks of this kind hold text runs directly.
    pub const fn holds_text(self) -> bool {
        !matches!(self, BlockKind::BulletedList)
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extra fields a block kind may carry beyond its text.
///
/// Produced by [`crate::registry::derive_properties`] from a trigger; fields
/// that do not apply to the target kind are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlockProps {
    /// Heading level.
    pub level: Option<u8>,
    /// Todo checked state.
    pub done: Option<bool>,
}

/// A notes document.
///
/// The root of the tree. Block order is the only source of vertical
/// ordering; no node stores a position.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Document {
    /// Top-level blocks in document order.
    pub blocks: Vec<Block>,
}

/// Block-level nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "kebab-case"))]
pub enum Block {
    /// Plain text.
    Paragraph(Paragraph),
    /// Section heading.
    Heading(Heading),
    /// Quotation line.
    #[cfg_attr(feature = "serde", serde(rename = "block-quote"))]
    Quote(Quote),
    /// Checkbox item.
    Todo(Todo),
    /// Bulleted list container.
    BulletedList(BulletedList),
    /// List item outside of a list (transient while editing).
    ListItem(ListItem),
    /// Node with no recognized type (tolerated while editing).
    Raw(RawNode),
}

/// Plain paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Paragraph {
    /// Text runs.
    pub children: Vec<Text>,
}

/// Section heading.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Heading {
    /// Heading level (1-6).
    pub level: u8,
    /// Text runs.
    pub children: Vec<Text>,
}

/// Block quotation (a single line).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Quote {
    /// Text runs.
    pub children: Vec<Text>,
}

/// Checkbox item.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Todo {
    /// Whether the box is checked.
    pub done: bool,
    /// Text runs.
    pub children: Vec<Text>,
}

/// Bulleted list; never holds text itself.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BulletedList {
    /// List items in order.
    pub children: Vec<ListItem>,
}

/// A single bullet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ListItem {
    /// Text runs.
    pub children: Vec<Text>,
}

/// Partially typed node.
///
/// With `text` it is written out verbatim; without it, as an empty line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawNode {
    /// Leaf text, if the node has any.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub text: Option<String>,
}

/// A run of plain text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Text {
    /// The text content.
    pub text: String,
}

impl Text {
    /// Create a text run.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Concatenate the text of a run sequence.
pub fn runs_text(runs: &[Text]) -> String {
    let mut out = String::with_capacity(runs.iter().map(|r| r.text.len()).sum());
    for run in runs {
        out.push_str(&run.text);
    }
    out
}

impl Block {
    /// Build a block of `kind` around `children`.
    ///
    /// Missing properties default to level 1 and unchecked. A
    /// `BulletedList` kind yields a list holding one item with the runs.
    pub fn from_parts(kind: BlockKind, props: BlockProps, children: Vec<Text>) -> Block {
        match kind {
            BlockKind::Paragraph => Block::Paragraph(Paragraph { children }),
            BlockKind::Heading => Block::Heading(Heading {
                level: props.level.unwrap_or(1).clamp(1, 6),
                children,
            }),
            BlockKind::BlockQuote => Block::Quote(Quote { children }),
            BlockKind::Todo => Block::Todo(Todo {
                done: props.done.unwrap_or(false),
                children,
            }),
            BlockKind::BulletedList => Block::BulletedList(BulletedList {
                children: vec![ListItem { children }],
            }),
            BlockKind::ListItem => Block::ListItem(ListItem { children }),
        }
    }

    /// Paragraph holding a single run.
    pub fn paragraph(text: impl Into<String>) -> Block {
        Block::Paragraph(Paragraph {
            children: vec![Text::new(text)],
        })
    }

    /// Type tag, or `None` for raw nodes.
    pub fn kind(&self) -> Option<BlockKind> {
        match self {
            Block::Paragraph(_) => Some(BlockKind::Paragraph),
            Block::Heading(_) => Some(BlockKind::Heading),
            Block::Quote(_) => Some(BlockKind::BlockQuote),
            Block::Todo(_) => Some(BlockKind::Todo),
            Block::BulletedList(_) => Some(BlockKind::BulletedList),
            Block::ListItem(_) => Some(BlockKind::ListItem),
            Block::Raw(_) => None,
        }
    }

    /// Text runs of a text-bearing block.
    pub fn children(&self) -> Option<&[Text]> {
        match self {
            Block::Paragraph(b) => Some(&b.children),
            Block::Heading(b) => Some(&b.children),
            Block::Quote(b) => Some(&b.children),
            Block::Todo(b) => Some(&b.children),
            Block::ListItem(b) => Some(&b.children),
            Block::BulletedList(_) | Block::Raw(_) => None,
        }
    }

    /// Mutable text runs of a text-bearing block.
    pub fn children_mut(&mut self) -> Option<&mut Vec<Text>> {
        match self {
            Block::Paragraph(b) => Some(&mut b.children),
            Block::Heading(b) => Some(&mut b.children),
            Block::Quote(b) => Some(&mut b.children),
            Block::Todo(b) => Some(&mut b.children),
            Block::ListItem(b) => Some(&mut b.children),
            Block::BulletedList(_) | Block::Raw(_) => None,
        }
    }

    /// Take the runs out of a text-bearing block, leaving it empty.
    pub(crate) fn take_children(&mut self) -> Vec<Text> {
        self.children_mut().map(std::mem::take).unwrap_or_default()
    }

    /// Properties carried by this block.
    pub fn props(&self) -> BlockProps {
        match self {
            Block::Heading(h) => BlockProps {
                level: Some(h.level),
                done: None,
            },
            Block::Todo(t) => BlockProps {
                level: None,
                done: Some(t.done),
            },
            _ => BlockProps::default(),
        }
    }

    /// Concatenated text of the block's runs (empty for lists and raw nodes).
    pub fn text(&self) -> String {
        self.children().map(runs_text).unwrap_or_default()
    }
}

impl From<ListItem> for Block {
    fn from(item: ListItem) -> Self {
        Block::ListItem(item)
    }
}

/// Address of a text-bearing block.
///
/// `item` selects a child of the bulleted list at `index`; `None` addresses
/// the top-level block itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BlockPath {
    /// Top-level block index.
    pub index: usize,
    /// List item index within the block, for lists.
    pub item: Option<usize>,
}

impl BlockPath {
    /// Path to a top-level block.
    pub const fn top(index: usize) -> Self {
        Self { index, item: None }
    }

    /// Path to item `item` of the list at `index`.
    pub const fn nested(index: usize, item: usize) -> Self {
        Self {
            index,
            item: Some(item),
        }
    }
}

impl Document {
    /// Canonical minimum document: one paragraph with one empty run.
    pub fn empty() -> Self {
        Self {
            blocks: vec![Block::paragraph("")],
        }
    }

    /// Wrap a block sequence.
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Number of top-level blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether there are no blocks at all (never true for a valid document).
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Paths of every text-bearing block, in document order.
    pub fn text_paths(&self) -> Vec<BlockPath> {
        let mut paths = Vec::with_capacity(self.blocks.len());
        for (index, block) in self.blocks.iter().enumerate() {
            match block {
                Block::BulletedList(list) => {
                    paths.extend((0..list.children.len()).map(|item| BlockPath::nested(index, item)));
                }
                Block::Raw(_) => {}
                _ => paths.push(BlockPath::top(index)),
            }
        }
        paths
    }

    /// Runs of the text block at `path`.
    pub fn runs(&self, path: BlockPath) -> Option<&[Text]> {
        let block = self.blocks.get(path.index)?;
        match (block, path.item) {
            (Block::BulletedList(list), Some(item)) => {
                list.children.get(item).map(|i| i.children.as_slice())
            }
            (_, None) => block.children(),
            _ => None,
        }
    }

    /// Mutable runs of the text block at `path`.
    pub fn runs_mut(&mut self, path: BlockPath) -> Option<&mut Vec<Text>> {
        let block = self.blocks.get_mut(path.index)?;
        match (block, path.item) {
            (Block::BulletedList(list), Some(item)) => {
                list.children.get_mut(item).map(|i| &mut i.children)
            }
            (block, None) => block.children_mut(),
            _ => None,
        }
    }

    /// Concatenated text of the block at `path`.
    pub fn block_text(&self, path: BlockPath) -> Option<String> {
        self.runs(path).map(runs_text)
    }

    /// Kind of the text block at `path` (`ListItem` for nested items).
    pub fn kind_at(&self, path: BlockPath) -> Option<BlockKind> {
        match path.item {
            Some(_) => self.runs(path).map(|_| BlockKind::ListItem),
            None => {
                let block = self.blocks.get(path.index)?;
                block.children()?;
                block.kind()
            }
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::empty()
    }
}
