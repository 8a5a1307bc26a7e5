//! Cursor and selection positions inside a document.
//!
//! A [`Point`] addresses a byte offset into the concatenated text of one
//! text-bearing block. Offsets must fall on `char` boundaries; the editor
//! validates points before accepting them.

use crate::ast::BlockPath;

/// A position in a text block.
///
/// # Example
///
/// ```rust
/// use notemark_core::{BlockPath, Point};
///
/// let point = Point::new(BlockPath::top(0), 3);
/// assert_eq!(point.offset, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    /// Block holding the position.
    pub path: BlockPath,
    /// Byte offset into the block's text.
    pub offset: usize,
}

impl Point {
    /// Create a point.
    #[inline]
    pub const fn new(path: BlockPath, offset: usize) -> Self {
        Self { path, offset }
    }

    /// Offset 0 of the block at `path`.
    #[inline]
    pub const fn start_of(path: BlockPath) -> Self {
        Self { path, offset: 0 }
    }
}

/// An anchor/focus pair. The anchor may come after the focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    /// Where the selection started.
    pub anchor: Point,
    /// Where the selection ends (the cursor).
    pub focus: Point,
}

impl Selection {
    /// A caret at `point`.
    #[inline]
    pub const fn collapsed(point: Point) -> Self {
        Self {
            anchor: point,
            focus: point,
        }
    }

    /// A range from `anchor` to `focus`.
    #[inline]
    pub const fn new(anchor: Point, focus: Point) -> Self {
        Self { anchor, focus }
    }

    /// Whether anchor and focus coincide.
    #[inline]
    pub fn is_collapsed(&self) -> bool {
        self.anchor == self.focus
    }
}
