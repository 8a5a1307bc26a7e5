//! Editing session over a single owned document.
//!
//! The [`Editor`] is the only thing that mutates a live document. Its two
//! keystroke entry points, [`Editor::insert_text`] and
//! [`Editor::delete_backward`], go through the shortcut engine unless
//! shortcuts are disabled; everything else here is the plain editing
//! behavior the engine falls back to.
//!
//! After every edit the document is normalized: empty lists are dropped,
//! adjacent lists are joined, every text block keeps at least one run and
//! the document keeps at least one block.

use std::ops::Range;

use tracing::trace;

use crate::ast::{Block, BlockKind, BlockPath, BlockProps, BulletedList, Document, ListItem, Text};
use crate::composition::PendingInput;
use crate::error::{EditError, Result};
use crate::selection::{Point, Selection};
use crate::shortcuts;
use crate::transcode;

/// What an edit did to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Nothing changed (no selection, nothing to delete, ...).
    Unchanged,
    /// Text was inserted or deleted.
    Edited,
    /// A shortcut rewrote the current block to this kind.
    Rewritten(BlockKind),
    /// Backspace turned a block of this kind back into a paragraph.
    Demoted(BlockKind),
}

impl EditOutcome {
    /// Whether the document changed.
    pub fn changed(self) -> bool {
        !matches!(self, EditOutcome::Unchanged)
    }
}

/// A live editing session.
///
/// # Example
///
/// ```rust
/// use notemark_core::{BlockPath, Editor, Point};
///
/// let mut editor = Editor::from_markdown("");
/// editor.set_cursor(Point::start_of(BlockPath::top(0))).unwrap();
/// editor.insert_text("#");
/// editor.insert_text(" ");
/// editor.insert_text("Plan");
/// assert_eq!(editor.to_markdown(), "# Plan");
/// ```
#[derive(Debug, Clone)]
pub struct Editor {
    document: Document,
    selection: Option<Selection>,
    shortcuts: bool,
    pub(crate) pending: PendingInput,
}

impl Editor {
    /// Start a session on `document`. No selection is set.
    pub fn new(document: Document) -> Self {
        let mut editor = Self {
            document,
            selection: None,
            shortcuts: true,
            pending: PendingInput::default(),
        };
        editor.normalize();
        editor
    }

    /// Start a session on stored note text.
    pub fn from_markdown(text: &str) -> Self {
        Self::new(transcode::to_document(Some(text)))
    }

    /// Enable or disable shortcut handling (enabled by default).
    ///
    /// When disabled, [`insert_text`](Self::insert_text) and
    /// [`delete_backward`](Self::delete_backward) only do plain edits.
    pub fn with_shortcuts(mut self, enabled: bool) -> Self {
        self.shortcuts = enabled;
        self
    }

    /// Whether shortcut handling is enabled.
    pub fn shortcuts_enabled(&self) -> bool {
        self.shortcuts
    }

    /// The current document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// End the session, returning the document.
    pub fn into_document(self) -> Document {
        self.document
    }

    /// Render the current document as note text.
    pub fn to_markdown(&self) -> String {
        transcode::to_text(&self.document)
    }

    /// The current selection, if any.
    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// The focus point of the selection.
    pub fn cursor(&self) -> Option<Point> {
        self.selection.map(|s| s.focus)
    }

    /// Set the selection after validating both points.
    pub fn select(&mut self, selection: Selection) -> Result<()> {
        self.check_point(selection.anchor)?;
        self.check_point(selection.focus)?;
        self.selection = Some(selection);
        Ok(())
    }

    /// Place a collapsed cursor at `point`.
    pub fn set_cursor(&mut self, point: Point) -> Result<()> {
        self.select(Selection::collapsed(point))
    }

    /// Place the cursor at the end of the last text block.
    pub fn move_to_end(&mut self) {
        if let Some(path) = self.document.text_paths().last().copied() {
            let offset = self.document.block_text(path).map_or(0, |t| t.len());
            self.put_cursor(Point::new(path, offset));
        }
    }

    /// Clear the selection.
    pub fn deselect(&mut self) {
        self.selection = None;
    }

    fn check_point(&self, point: Point) -> Result<()> {
        let path = point.path;
        let block = self
            .document
            .blocks
            .get(path.index)
            .ok_or_else(|| EditError::invalid_path(path))?;

        let text = match (block, path.item) {
            (Block::BulletedList(_), None) | (Block::Raw(_), _) => {
                return Err(EditError::NotTextBlock(path.index));
            }
            _ => self
                .document
                .block_text(path)
                .ok_or_else(|| EditError::invalid_path(path))?,
        };

        if text.is_char_boundary(point.offset) {
            Ok(())
        } else {
            Err(EditError::InvalidOffset {
                offset: point.offset,
                len: text.len(),
            })
        }
    }

    // =========================================================================
    // Keystroke entry points
    // =========================================================================

    /// Insert typed text at the cursor, applying shortcuts.
    pub fn insert_text(&mut self, text: &str) -> EditOutcome {
        if self.shortcuts {
            shortcuts::on_insert_text(self, text)
        } else {
            self.insert_plain(text)
        }
    }

    /// Handle backspace, applying shortcut demotion.
    pub fn delete_backward(&mut self) -> EditOutcome {
        if self.shortcuts {
            shortcuts::on_delete_backward(self)
        } else {
            self.delete_backward_plain()
        }
    }

    // =========================================================================
    // Plain editing
    // =========================================================================

    /// Insert text at the cursor, replacing an expanded selection first.
    pub fn insert_plain(&mut self, text: &str) -> EditOutcome {
        let Some(selection) = self.selection else {
            return EditOutcome::Unchanged;
        };
        if text.is_empty() {
            return EditOutcome::Unchanged;
        }
        if !selection.is_collapsed() {
            self.delete_fragment();
        }
        let Some(point) = self.cursor() else {
            return EditOutcome::Unchanged;
        };

        if !self.insert_at(point, text) {
            return EditOutcome::Unchanged;
        }
        trace!(index = point.path.index, offset = point.offset, len = text.len(), "insert");
        self.put_cursor(Point::new(point.path, point.offset + text.len()));
        self.normalize();
        EditOutcome::Edited
    }

    /// Delete the character before the cursor, or merge into the previous
    /// block when the cursor is at a block start.
    pub fn delete_backward_plain(&mut self) -> EditOutcome {
        let Some(selection) = self.selection else {
            return EditOutcome::Unchanged;
        };
        if !selection.is_collapsed() {
            return self.delete_fragment();
        }

        let point = selection.focus;
        if point.offset == 0 {
            return self.merge_into_previous(point.path);
        }

        let Some(text) = self.document.block_text(point.path) else {
            return EditOutcome::Unchanged;
        };
        let Some(prev) = text.get(..point.offset).and_then(|t| t.chars().next_back()) else {
            return EditOutcome::Unchanged;
        };
        let start = point.offset - prev.len_utf8();
        self.delete_in_block(point.path, start..point.offset);
        trace!(index = point.path.index, offset = start, "delete backward");
        self.put_cursor(Point::new(point.path, start));
        self.normalize();
        EditOutcome::Edited
    }

    /// Delete the selected range, joining the blocks at either end.
    pub fn delete_fragment(&mut self) -> EditOutcome {
        let Some(selection) = self.selection else {
            return EditOutcome::Unchanged;
        };
        if selection.is_collapsed() {
            return EditOutcome::Unchanged;
        }

        let paths = self.document.text_paths();
        let (Some(a), Some(f)) = (
            paths.iter().position(|p| *p == selection.anchor.path),
            paths.iter().position(|p| *p == selection.focus.path),
        ) else {
            return EditOutcome::Unchanged;
        };

        let ((start_idx, start), (end_idx, end)) =
            if (a, selection.anchor.offset) <= (f, selection.focus.offset) {
                ((a, selection.anchor), (f, selection.focus))
            } else {
                ((f, selection.focus), (a, selection.anchor))
            };

        if start_idx == end_idx {
            self.delete_in_block(start.path, start.offset..end.offset);
        } else {
            let tail = self
                .document
                .block_text(end.path)
                .and_then(|t| t.get(end.offset..).map(str::to_string))
                .unwrap_or_default();
            let start_len = self.document.block_text(start.path).map_or(0, |t| t.len());
            self.delete_in_block(start.path, start.offset..start_len);

            let mut doomed: Vec<BlockPath> = paths[start_idx + 1..=end_idx].to_vec();
            for index in start.path.index + 1..end.path.index {
                if matches!(self.document.blocks.get(index), Some(Block::Raw(_))) {
                    doomed.push(BlockPath::top(index));
                }
            }
            doomed.sort_unstable_by(|x, y| y.cmp(x));
            for path in doomed {
                self.remove_text_block(path);
            }

            if let Some(runs) = self.document.runs_mut(start.path) {
                runs.push(Text::new(tail));
            }
        }

        trace!(from = start.offset, to = end.offset, "delete fragment");
        self.put_cursor(start);
        self.normalize();
        EditOutcome::Edited
    }

    /// Split the current block at the cursor.
    ///
    /// The new block takes the same kind and properties; a list item splits
    /// into a sibling item.
    pub fn insert_break(&mut self) -> EditOutcome {
        let Some(selection) = self.selection else {
            return EditOutcome::Unchanged;
        };
        if !selection.is_collapsed() {
            self.delete_fragment();
        }
        let Some(point) = self.cursor() else {
            return EditOutcome::Unchanged;
        };
        let Some(text) = self.document.block_text(point.path) else {
            return EditOutcome::Unchanged;
        };
        let tail = text.get(point.offset..).unwrap_or_default().to_string();
        self.delete_in_block(point.path, point.offset..text.len());

        let path = point.path;
        let new_path = match path.item {
            Some(item) => {
                let Some(Block::BulletedList(list)) = self.document.blocks.get_mut(path.index) else {
                    return EditOutcome::Unchanged;
                };
                list.children.insert(
                    item + 1,
                    ListItem {
                        children: vec![Text::new(tail)],
                    },
                );
                BlockPath::nested(path.index, item + 1)
            }
            None => {
                let Some(block) = self.document.blocks.get(path.index) else {
                    return EditOutcome::Unchanged;
                };
                let Some(kind) = block.kind() else {
                    return EditOutcome::Unchanged;
                };
                let sibling = Block::from_parts(kind, block.props(), vec![Text::new(tail)]);
                self.document.blocks.insert(path.index + 1, sibling);
                BlockPath::top(path.index + 1)
            }
        };

        trace!(index = path.index, offset = point.offset, "split block");
        self.put_cursor(Point::start_of(new_path));
        self.normalize();
        EditOutcome::Edited
    }

    fn merge_into_previous(&mut self, path: BlockPath) -> EditOutcome {
        let paths = self.document.text_paths();
        let Some(pos) = paths.iter().position(|p| *p == path) else {
            return EditOutcome::Unchanged;
        };
        if pos == 0 {
            return EditOutcome::Unchanged;
        }
        let prev = paths[pos - 1];
        let prev_len = self.document.block_text(prev).map_or(0, |t| t.len());

        let runs = self.document.runs_mut(path).map(std::mem::take).unwrap_or_default();
        self.remove_text_block(path);
        if let Some(target) = self.document.runs_mut(prev) {
            target.extend(runs);
        }

        trace!(into = prev.index, offset = prev_len, "merge blocks");
        self.put_cursor(Point::new(prev, prev_len));
        self.normalize();
        EditOutcome::Edited
    }

    // =========================================================================
    // Structural transforms
    // =========================================================================

    /// Change the kind of the text block at `path`, keeping its runs.
    ///
    /// A nested list item that becomes anything but a list item is lifted out
    /// of its list first. Returns the block's new path. Does not normalize.
    pub(crate) fn set_kind(
        &mut self,
        path: BlockPath,
        kind: BlockKind,
        props: BlockProps,
    ) -> Option<BlockPath> {
        if !kind.holds_text() {
            return None;
        }
        let path = match path.item {
            Some(_) if kind == BlockKind::ListItem => return Some(path),
            Some(_) => self.unwrap_list_item(path)?,
            None => path,
        };

        let block = self.document.blocks.get_mut(path.index)?;
        block.children()?;
        let children = block.take_children();
        *block = Block::from_parts(kind, props, children);
        Some(path)
    }

    /// Wrap a top-level list item into a bulleted list, joining a list right
    /// before and a list right after it. Returns the item's new path.
    pub(crate) fn wrap_in_list(&mut self, path: BlockPath) -> Option<BlockPath> {
        if path.item.is_some()
            || !matches!(self.document.blocks.get(path.index), Some(Block::ListItem(_)))
        {
            return None;
        }
        let blocks = &mut self.document.blocks;
        let item = match blocks.remove(path.index) {
            Block::ListItem(item) => item,
            other => {
                blocks.insert(path.index, other);
                return None;
            }
        };

        let mut index = path.index;
        let position = match index.checked_sub(1).and_then(|i| blocks.get_mut(i)) {
            Some(Block::BulletedList(prev)) => {
                prev.children.push(item);
                index -= 1;
                prev.children.len() - 1
            }
            _ => {
                blocks.insert(
                    index,
                    Block::BulletedList(BulletedList {
                        children: vec![item],
                    }),
                );
                0
            }
        };

        if matches!(blocks.get(index + 1), Some(Block::BulletedList(_))) {
            if let Block::BulletedList(next) = blocks.remove(index + 1) {
                if let Some(Block::BulletedList(list)) = blocks.get_mut(index) {
                    list.children.extend(next.children);
                }
            }
        }

        Some(BlockPath::nested(index, position))
    }

    /// Lift a nested list item out of its list, splitting the list around
    /// it. The item becomes a top-level list item; its new path is returned.
    ///
    /// Returns `None` (and changes nothing) if `path` is not a nested item.
    pub(crate) fn unwrap_list_item(&mut self, path: BlockPath) -> Option<BlockPath> {
        let item_index = path.item?;
        let blocks = &mut self.document.blocks;
        let Some(Block::BulletedList(list)) = blocks.get_mut(path.index) else {
            return None;
        };
        if item_index >= list.children.len() {
            return None;
        }

        let after = list.children.split_off(item_index + 1);
        let item = list.children.pop()?;
        let before_empty = list.children.is_empty();

        let at = if before_empty {
            blocks.remove(path.index);
            path.index
        } else {
            path.index + 1
        };

        let mut lifted = vec![Block::ListItem(item)];
        if !after.is_empty() {
            lifted.push(Block::BulletedList(BulletedList { children: after }));
        }
        blocks.splice(at..at, lifted);

        Some(BlockPath::top(at))
    }

    // =========================================================================
    // Internals
    // =========================================================================

    pub(crate) fn put_cursor(&mut self, point: Point) {
        self.selection = Some(Selection::collapsed(point));
    }

    /// Insert `text` at a block offset. Returns false if the point is invalid.
    pub(crate) fn insert_at(&mut self, point: Point, text: &str) -> bool {
        let Some(runs) = self.document.runs_mut(point.path) else {
            return false;
        };
        if runs.is_empty() {
            runs.push(Text::default());
        }

        let mut start = 0;
        for run in runs.iter_mut() {
            let end = start + run.text.len();
            if point.offset <= end {
                let local = point.offset - start;
                if !run.text.is_char_boundary(local) {
                    return false;
                }
                run.text.insert_str(local, text);
                return true;
            }
            start = end;
        }
        false
    }

    /// Delete a byte range of the block's concatenated text.
    pub(crate) fn delete_in_block(&mut self, path: BlockPath, range: Range<usize>) {
        if range.start >= range.end {
            return;
        }
        let Some(runs) = self.document.runs_mut(path) else {
            return;
        };

        let mut start = 0;
        for run in runs.iter_mut() {
            let end = start + run.text.len();
            let from = range.start.max(start);
            let to = range.end.min(end);
            if from < to {
                let (a, b) = (from - start, to - start);
                if run.text.is_char_boundary(a) && run.text.is_char_boundary(b) {
                    run.text.replace_range(a..b, "");
                }
            }
            start = end;
        }
    }

    /// Remove a text block. Empty lists are left for normalization.
    fn remove_text_block(&mut self, path: BlockPath) {
        match path.item {
            Some(item) => {
                if let Some(Block::BulletedList(list)) = self.document.blocks.get_mut(path.index) {
                    if item < list.children.len() {
                        list.children.remove(item);
                    }
                }
            }
            None => {
                if path.index < self.document.blocks.len() {
                    self.document.blocks.remove(path.index);
                }
            }
        }
    }

    /// Normalize the document, carrying the selection across.
    ///
    /// Normalization never reorders text blocks, so each point is tracked by
    /// its position among the text blocks.
    pub(crate) fn normalize(&mut self) {
        let locate = |doc: &Document, point: Point| {
            doc.text_paths()
                .iter()
                .position(|p| *p == point.path)
                .map(|i| (i, point.offset))
        };
        let saved = self.selection.map(|s| {
            (
                locate(&self.document, s.anchor),
                locate(&self.document, s.focus),
            )
        });

        self.document.normalize();

        let Some((anchor, focus)) = saved else {
            return;
        };
        let paths = self.document.text_paths();
        let restore = |slot: Option<(usize, usize)>| {
            let (index, offset) = slot?;
            let path = *paths.get(index)?;
            let len = self.document.block_text(path)?.len();
            Some(Point::new(path, offset.min(len)))
        };
        let fallback = paths.first().map(|p| Point::start_of(*p));

        self.selection = match (restore(anchor).or(fallback), restore(focus).or(fallback)) {
            (Some(anchor), Some(focus)) => Some(Selection::new(anchor, focus)),
            _ => None,
        };
    }
}

impl Document {
    /// Bring the tree into the shape the editor maintains.
    ///
    /// Drops empty lists, joins adjacent lists, drops empty runs (keeping one
    /// run per text block) and replaces an empty document with
    /// [`Document::empty`].
    pub fn normalize(&mut self) {
        let blocks = std::mem::take(&mut self.blocks);
        let mut out: Vec<Block> = Vec::with_capacity(blocks.len());

        for mut block in blocks {
            match &mut block {
                Block::BulletedList(list) => {
                    for item in &mut list.children {
                        normalize_runs(&mut item.children);
                    }
                    if list.children.is_empty() {
                        continue;
                    }
                }
                other => {
                    if let Some(runs) = other.children_mut() {
                        normalize_runs(runs);
                    }
                }
            }

            if let (Some(Block::BulletedList(prev)), Block::BulletedList(list)) =
                (out.last_mut(), &mut block)
            {
                prev.children.append(&mut list.children);
                continue;
            }
            out.push(block);
        }

        if out.is_empty() {
            out.push(Block::paragraph(""));
        }
        self.blocks = out;
    }
}

fn normalize_runs(runs: &mut Vec<Text>) {
    runs.retain(|r| !r.text.is_empty());
    if runs.is_empty() {
        runs.push(Text::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Heading, Paragraph};

    fn editor(text: &str) -> Editor {
        Editor::from_markdown(text).with_shortcuts(false)
    }

    fn at(index: usize, item: Option<usize>, offset: usize) -> Point {
        Point::new(BlockPath { index, item }, offset)
    }

    #[test]
    fn test_select_validates_points() {
        let mut ed = editor("héllo\n- a");
        assert!(ed.set_cursor(at(0, None, 0)).is_ok());
        assert!(ed.set_cursor(at(0, None, 6)).is_ok());
        assert_eq!(
            ed.set_cursor(at(0, None, 2)),
            Err(EditError::InvalidOffset { offset: 2, len: 6 })
        );
        assert_eq!(ed.set_cursor(at(1, None, 0)), Err(EditError::NotTextBlock(1)));
        assert_eq!(
            ed.set_cursor(at(1, Some(3), 0)),
            Err(EditError::InvalidPath {
                index: 1,
                item: Some(3)
            })
        );
        assert_eq!(
            ed.set_cursor(at(9, None, 0)),
            Err(EditError::InvalidPath {
                index: 9,
                item: None
            })
        );
    }

    #[test]
    fn test_insert_plain_without_selection_is_noop() {
        let mut ed = editor("abc");
        assert_eq!(ed.insert_plain("x"), EditOutcome::Unchanged);
        assert_eq!(ed.to_markdown(), "abc");
    }

    #[test]
    fn test_insert_plain_moves_cursor() {
        let mut ed = editor("ac");
        ed.set_cursor(at(0, None, 1)).unwrap();
        assert_eq!(ed.insert_plain("b"), EditOutcome::Edited);
        assert_eq!(ed.to_markdown(), "abc");
        assert_eq!(ed.cursor(), Some(at(0, None, 2)));
    }

    #[test]
    fn test_insert_across_runs() {
        let doc = Document::new(vec![Block::Paragraph(Paragraph {
            children: vec![Text::new("ab"), Text::new("cd")],
        })]);
        let mut ed = Editor::new(doc).with_shortcuts(false);
        ed.set_cursor(at(0, None, 3)).unwrap();
        ed.insert_plain("X");
        assert_eq!(ed.document().blocks[0].text(), "abcXd");
        assert_eq!(ed.document().blocks[0].children().map(|c| c.len()), Some(2));
    }

    #[test]
    fn test_delete_backward_removes_whole_char() {
        let mut ed = editor("naïve");
        ed.set_cursor(at(0, None, 4)).unwrap();
        ed.delete_backward_plain();
        assert_eq!(ed.to_markdown(), "nave");
        assert_eq!(ed.cursor(), Some(at(0, None, 2)));
    }

    #[test]
    fn test_delete_backward_merges_blocks() {
        let mut ed = editor("# Title\nbody");
        ed.set_cursor(at(1, None, 0)).unwrap();
        assert_eq!(ed.delete_backward_plain(), EditOutcome::Edited);
        assert_eq!(ed.to_markdown(), "# Titlebody");
        assert_eq!(ed.cursor(), Some(at(0, None, 5)));
    }

    #[test]
    fn test_delete_backward_at_document_start_is_noop() {
        let mut ed = editor("first");
        ed.set_cursor(at(0, None, 0)).unwrap();
        assert_eq!(ed.delete_backward_plain(), EditOutcome::Unchanged);
        assert_eq!(ed.to_markdown(), "first");
    }

    #[test]
    fn test_merge_paragraph_into_list_joins_lists() {
        let mut ed = editor("- a\nb\n- c");
        ed.set_cursor(at(1, None, 0)).unwrap();
        ed.delete_backward_plain();
        assert_eq!(ed.to_markdown(), "- ab\n- c");
        assert_eq!(ed.document().len(), 1);
        assert_eq!(ed.cursor(), Some(at(0, Some(0), 1)));
    }

    #[test]
    fn test_delete_fragment_across_blocks() {
        let mut ed = editor("one\n- two\n- three\nfour");
        ed.select(Selection::new(at(2, None, 2), at(0, None, 1)))
            .unwrap();
        assert_eq!(ed.delete_fragment(), EditOutcome::Edited);
        assert_eq!(ed.to_markdown(), "our");
        assert_eq!(ed.cursor(), Some(at(0, None, 1)));
    }

    #[test]
    fn test_delete_fragment_within_list() {
        let mut ed = editor("- alpha\n- beta\n- gamma");
        ed.select(Selection::new(at(0, Some(0), 2), at(0, Some(1), 2)))
            .unwrap();
        ed.delete_fragment();
        assert_eq!(ed.to_markdown(), "- alta\n- gamma");
    }

    #[test]
    fn test_insert_replaces_selection() {
        let mut ed = editor("hello world");
        ed.select(Selection::new(at(0, None, 6), at(0, None, 11)))
            .unwrap();
        ed.insert_plain("there");
        assert_eq!(ed.to_markdown(), "hello there");
    }

    #[test]
    fn test_insert_break_keeps_kind() {
        let mut ed = editor("## Heading text");
        ed.set_cursor(at(0, None, 7)).unwrap();
        ed.insert_break();
        assert_eq!(ed.to_markdown(), "## Heading\n##  text");
        assert_eq!(ed.cursor(), Some(at(1, None, 0)));
    }

    #[test]
    fn test_insert_break_in_list_adds_item() {
        let mut ed = editor("- ab");
        ed.set_cursor(at(0, Some(0), 1)).unwrap();
        ed.insert_break();
        assert_eq!(ed.to_markdown(), "- a\n- b");
        assert_eq!(ed.cursor(), Some(at(0, Some(1), 0)));
    }

    #[test]
    fn test_unwrap_splits_list() {
        let mut ed = editor("- a\n- b\n- c");
        let path = ed.unwrap_list_item(BlockPath::nested(0, 1));
        assert_eq!(path, Some(BlockPath::top(1)));
        let kinds: Vec<_> = ed.document().blocks.iter().map(|b| b.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                Some(BlockKind::BulletedList),
                Some(BlockKind::ListItem),
                Some(BlockKind::BulletedList)
            ]
        );
    }

    #[test]
    fn test_unwrap_first_item_replaces_list() {
        let mut ed = editor("- a\n- b");
        assert_eq!(ed.unwrap_list_item(BlockPath::nested(0, 0)), Some(BlockPath::top(0)));
        assert!(matches!(ed.document().blocks[0], Block::ListItem(_)));
        assert!(matches!(ed.document().blocks[1], Block::BulletedList(_)));
    }

    #[test]
    fn test_unwrap_top_level_is_noop() {
        let mut ed = editor("a");
        assert_eq!(ed.unwrap_list_item(BlockPath::top(0)), None);
        assert_eq!(ed.to_markdown(), "a");
    }

    #[test]
    fn test_wrap_joins_neighbours() {
        let mut ed = editor("- a\nb\n- c");
        let path = ed.set_kind(BlockPath::top(1), BlockKind::ListItem, BlockProps::default());
        assert_eq!(path, Some(BlockPath::top(1)));
        let wrapped = ed.wrap_in_list(BlockPath::top(1));
        assert_eq!(wrapped, Some(BlockPath::nested(0, 1)));
        assert_eq!(ed.document().len(), 1);
        assert_eq!(ed.to_markdown(), "- a\n- b\n- c");
    }

    #[test]
    fn test_set_kind_lifts_nested_item() {
        let mut ed = editor("- a\n- b");
        let props = BlockProps {
            level: Some(2),
            done: None,
        };
        let path = ed.set_kind(BlockPath::nested(0, 1), BlockKind::Heading, props);
        assert_eq!(path, Some(BlockPath::top(1)));
        assert_eq!(
            ed.document().blocks[1],
            Block::Heading(Heading {
                level: 2,
                children: vec![Text::new("b")]
            })
        );
    }

    #[test]
    fn test_normalize_keeps_minimum_document() {
        let mut doc = Document::new(Vec::new());
        doc.normalize();
        assert_eq!(doc, Document::empty());
    }
}
