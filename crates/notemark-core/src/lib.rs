//! # notemark core
//!
//! Block-structured notes with a markdown-like storage format and live
//! autoformatting.
//!
//! A note is stored as plain text, one block per line (`# ` headings, `> `
//! quotes, `- ` list items, `[] ` / `[x] ` todos). This crate converts
//! between that text and a [`Document`] tree, and provides an [`Editor`]
//! session that turns typed shortcuts into structured blocks.
//!
//! ## Quick Start
//!
//! ```rust
//! use notemark_core::{to_document, to_text, Block};
//!
//! let doc = to_document(Some("# Standup\n- ship notes\n- fix bug\n[x] email"));
//! assert_eq!(doc.blocks.len(), 3);
//! assert!(matches!(doc.blocks[1], Block::BulletedList(_)));
//!
//! assert_eq!(to_text(&doc), "# Standup\n- ship notes\n- fix bug\n[x] email");
//! ```
//!
//! ## Live Shortcuts
//!
//! ```rust
//! use notemark_core::{BlockKind, BlockPath, EditOutcome, Editor, Point};
//!
//! let mut editor = Editor::from_markdown("");
//! editor.set_cursor(Point::start_of(BlockPath::top(0))).unwrap();
//!
//! editor.insert_text("-");
//! assert_eq!(editor.insert_text(" "), EditOutcome::Rewritten(BlockKind::ListItem));
//! editor.insert_text("milk");
//! assert_eq!(editor.to_markdown(), "- milk");
//!
//! // the list container holds no text; the item does
//! assert!(editor.set_cursor(Point::start_of(BlockPath::top(0))).is_err());
//! let item = BlockPath::nested(0, 0);
//!
//! // backspace at the start of the item turns it back into a paragraph
//! editor.set_cursor(Point::start_of(item)).unwrap();
//! editor.delete_backward();
//! assert_eq!(editor.to_markdown(), "milk");
//! ```

pub mod ast;
pub mod composition;
pub mod editor;
pub mod error;
pub mod lexer;
pub mod registry;
pub mod selection;
pub mod shortcuts;
pub mod transcode;

pub use ast::{Block, BlockKind, BlockPath, BlockProps, Document, Text};
pub use composition::{needs_flush, PendingDiff, PendingInput};
pub use editor::{EditOutcome, Editor};
pub use error::{EditError, Result};
pub use selection::{Point, Selection};
pub use transcode::{has_content, to_document, to_text};
