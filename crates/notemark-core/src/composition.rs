//! Deferred shortcut detection for asynchronous input methods.
//!
//! Some input methods (composition, soft keyboards) report typed text as
//! pending diffs that are applied later in a batch. A trigger typed that way
//! would reach the shortcut engine too late, or not at all. The editor
//! therefore queues diffs as they are reported and, one tick later, checks
//! whether any of them completes a trigger at the start of a block. If so
//! it flushes the queue right away, so each diff goes through
//! [`Editor::insert_text`] and the usual rules apply.

use tracing::debug;

use crate::ast::{BlockPath, Document};
use crate::editor::{EditOutcome, Editor};
use crate::selection::{Point, Selection};
use crate::shortcuts::completed_trigger;

/// Text an input method has reported but not yet applied.
///
/// Replaces bytes `start..end` of text run `run` in the block at `path`
/// with `text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDiff {
    /// Block the diff applies to.
    pub path: BlockPath,
    /// Index of the text run within the block.
    pub run: usize,
    /// Start byte offset within the run.
    pub start: usize,
    /// End byte offset within the run (equal to `start` for insertions).
    pub end: usize,
    /// Replacement text.
    pub text: String,
}

impl PendingDiff {
    /// An insertion of `text` at `start` of a run.
    pub fn insert(path: BlockPath, run: usize, start: usize, text: impl Into<String>) -> Self {
        Self {
            path,
            run,
            start,
            end: start,
            text: text.into(),
        }
    }
}

/// Queue of pending diffs plus the deferred-check flag.
#[derive(Debug, Clone, Default)]
pub struct PendingInput {
    diffs: Vec<PendingDiff>,
    tick_scheduled: bool,
}

impl PendingInput {
    /// Queued diffs, oldest first.
    pub fn diffs(&self) -> &[PendingDiff] {
        &self.diffs
    }

    /// Number of queued diffs.
    pub fn len(&self) -> usize {
        self.diffs.len()
    }

    /// Whether nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.diffs.is_empty()
    }

    /// Whether a deferred check is waiting for the next tick.
    pub fn tick_scheduled(&self) -> bool {
        self.tick_scheduled
    }

    fn take(&mut self) -> Vec<PendingDiff> {
        self.tick_scheduled = false;
        std::mem::take(&mut self.diffs)
    }
}

/// Whether any pending diff completes a trigger at the start of its block.
///
/// A diff qualifies when its text ends in a space, the run's text before
/// `start` followed by the diff text (minus the space) is a known trigger,
/// and the run is the first one of its block.
pub fn needs_flush(document: &Document, diffs: &[PendingDiff]) -> bool {
    diffs.iter().any(|diff| {
        if diff.run != 0 {
            return false;
        }
        let Some(run) = document.runs(diff.path).and_then(|runs| runs.get(diff.run)) else {
            return false;
        };
        let Some(before) = run.text.get(..diff.start) else {
            return false;
        };
        completed_trigger(before, &diff.text).is_some()
    })
}

impl Editor {
    /// Record a diff reported by the input method and schedule a check for
    /// the next tick.
    pub fn on_before_input(&mut self, diff: PendingDiff) {
        self.pending.diffs.push(diff);
        self.pending.tick_scheduled = true;
    }

    /// Pending input state.
    pub fn pending(&self) -> &PendingInput {
        &self.pending
    }

    /// Run the deferred check scheduled by [`on_before_input`](Self::on_before_input).
    ///
    /// Returns `true` if the queue was flushed.
    pub fn run_deferred(&mut self) -> bool {
        if !self.pending.tick_scheduled {
            return false;
        }
        self.pending.tick_scheduled = false;
        if !needs_flush(self.document(), self.pending.diffs()) {
            return false;
        }
        debug!(diffs = self.pending.len(), "flushing pending input for shortcut");
        self.flush_pending();
        true
    }

    /// Apply every queued diff in order.
    ///
    /// Diffs whose location no longer exists are dropped.
    pub fn flush_pending(&mut self) -> Vec<EditOutcome> {
        let diffs = self.pending.take();
        diffs
            .into_iter()
            .filter_map(|diff| self.apply_diff(&diff))
            .collect()
    }

    fn apply_diff(&mut self, diff: &PendingDiff) -> Option<EditOutcome> {
        let runs = self.document().runs(diff.path)?;
        let run = runs.get(diff.run)?;
        if diff.start > diff.end
            || !run.text.is_char_boundary(diff.start)
            || !run.text.is_char_boundary(diff.end)
        {
            return None;
        }
        let base: usize = runs[..diff.run].iter().map(|r| r.text.len()).sum();
        let anchor = Point::new(diff.path, base + diff.start);
        let focus = Point::new(diff.path, base + diff.end);

        self.select(Selection::new(anchor, focus)).ok()?;
        if diff.text.is_empty() {
            return Some(self.delete_fragment());
        }
        Some(self.insert_text(&diff.text))
    }
}
