//! Live autoformat: rewrite blocks as shortcuts are typed.
//!
//! Two rules, both only with a collapsed cursor:
//!
//! - Typing a space right after a trigger at the start of a block (`#`,
//!   `-`, `[]`, ...) turns the block into the matching kind. The trigger
//!   text and the space are consumed.
//! - Backspace at offset 0 of any block that is not a paragraph turns it
//!   back into a paragraph, once, instead of joining it with the block
//!   above. A list item is also lifted out of its list.
//!
//! Everything else falls through to plain editing.

use tracing::debug;

use crate::ast::{BlockKind, BlockProps};
use crate::editor::{EditOutcome, Editor};
use crate::registry::{self, PostConstruct};
use crate::selection::Point;

/// Handle typed text.
pub fn on_insert_text(editor: &mut Editor, text: &str) -> EditOutcome {
    match apply_shortcut(editor, text) {
        Some(outcome) => outcome,
        None => editor.insert_plain(text),
    }
}

/// Handle backspace.
pub fn on_delete_backward(editor: &mut Editor) -> EditOutcome {
    match demote_block(editor) {
        Some(outcome) => outcome,
        None => editor.delete_backward_plain(),
    }
}

/// The trigger a keystroke would complete, if any.
///
/// `before` is the block text from its start to the cursor.
pub fn completed_trigger(before: &str, text: &str) -> Option<(String, BlockKind)> {
    let typed = text.strip_suffix(' ')?;
    let mut candidate = String::with_capacity(before.len() + typed.len());
    candidate.push_str(before);
    candidate.push_str(typed);
    let kind = registry::lookup_shortcut(&candidate)?;
    Some((candidate, kind))
}

fn apply_shortcut(editor: &mut Editor, text: &str) -> Option<EditOutcome> {
    let selection = editor.selection()?;
    if !selection.is_collapsed() {
        return None;
    }
    let point = selection.anchor;
    let block_text = editor.document().block_text(point.path)?;
    let (trigger, kind) = completed_trigger(block_text.get(..point.offset)?, text)?;

    let props = registry::derive_properties(kind, &trigger);
    let mut path = editor.set_kind(point.path, kind, props)?;
    editor.delete_in_block(path, 0..point.offset);

    if let Some(hook) = registry::post_construct(kind) {
        path = match hook {
            PostConstruct::WrapInList => editor.wrap_in_list(path).unwrap_or(path),
        };
    }

    debug!(%kind, trigger = %trigger, index = path.index, "shortcut rewrite");
    editor.put_cursor(Point::start_of(path));
    editor.normalize();
    Some(EditOutcome::Rewritten(kind))
}

fn demote_block(editor: &mut Editor) -> Option<EditOutcome> {
    let selection = editor.selection()?;
    if !selection.is_collapsed() || selection.anchor.offset != 0 {
        return None;
    }
    let mut path = selection.anchor.path;
    let kind = editor.document().kind_at(path)?;
    if kind == BlockKind::Paragraph {
        return None;
    }

    if kind == BlockKind::ListItem {
        // top-level items have no list to leave
        if let Some(lifted) = editor.unwrap_list_item(path) {
            path = lifted;
        }
    }
    let path = editor.set_kind(path, BlockKind::Paragraph, BlockProps::default())?;

    debug!(%kind, index = path.index, "demote to paragraph");
    editor.put_cursor(Point::start_of(path));
    editor.normalize();
    Some(EditOutcome::Demoted(kind))
}
