//! Python bindings for the notemark transcoder and shortcut engine.

use notemark_core::{
    ast::{Block, BlockKind, ListItem, Text},
    BlockPath, Document, EditError, EditOutcome, Editor, PendingDiff, Point,
};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyList;

fn value_error(e: EditError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

fn path(index: usize, item: Option<usize>) -> BlockPath {
    BlockPath { index, item }
}

// ============================================================================
// Enums
// ============================================================================

/// Kind of a block.
#[pyclass(frozen, eq, eq_int, name = "BlockKind")]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PyBlockKind {
    Paragraph,
    Heading,
    BlockQuote,
    Todo,
    BulletedList,
    ListItem,
}

impl From<BlockKind> for PyBlockKind {
    fn from(k: BlockKind) -> Self {
        match k {
            BlockKind::Paragraph => PyBlockKind::Paragraph,
            BlockKind::Heading => PyBlockKind::Heading,
            BlockKind::BlockQuote => PyBlockKind::BlockQuote,
            BlockKind::Todo => PyBlockKind::Todo,
            BlockKind::BulletedList => PyBlockKind::BulletedList,
            BlockKind::ListItem => PyBlockKind::ListItem,
        }
    }
}

// ============================================================================
// Block types
// ============================================================================

/// A run of text.
#[pyclass(frozen, get_all, name = "Text")]
pub struct PyText {
    pub text: String,
}

#[pymethods]
impl PyText {
    fn __repr__(&self) -> String {
        format!("Text({:?})", self.text)
    }
}

/// Plain paragraph.
#[pyclass(frozen, get_all, name = "Paragraph")]
pub struct PyParagraph {
    pub children: PyObject,
}

/// Heading, levels 1 to 6.
#[pyclass(frozen, get_all, name = "Heading")]
pub struct PyHeading {
    pub level: u8,
    pub children: PyObject,
}

/// Block quote.
#[pyclass(frozen, get_all, name = "BlockQuote")]
pub struct PyBlockQuote {
    pub children: PyObject,
}

/// Checkbox item.
#[pyclass(frozen, get_all, name = "Todo")]
pub struct PyTodo {
    pub done: bool,
    pub children: PyObject,
}

/// Item of a bulleted list.
#[pyclass(frozen, get_all, name = "ListItem")]
pub struct PyListItem {
    pub children: PyObject,
}

/// Bulleted list.
#[pyclass(frozen, get_all, name = "BulletedList")]
pub struct PyBulletedList {
    pub children: PyObject,
}

/// A node with no recognised type.
#[pyclass(frozen, get_all, name = "RawNode")]
pub struct PyRawNode {
    pub text: Option<String>,
}

fn convert_runs(py: Python<'_>, runs: &[Text]) -> PyResult<PyObject> {
    let list = PyList::empty(py);
    for run in runs {
        list.append(Py::new(
            py,
            PyText {
                text: run.text.clone(),
            },
        )?)?;
    }
    Ok(list.into())
}

fn convert_item(py: Python<'_>, item: &ListItem) -> PyResult<PyObject> {
    Ok(Py::new(
        py,
        PyListItem {
            children: convert_runs(py, &item.children)?,
        },
    )?
    .into_any())
}

fn convert_block(py: Python<'_>, block: &Block) -> PyResult<PyObject> {
    let obj = match block {
        Block::Paragraph(p) => Py::new(
            py,
            PyParagraph {
                children: convert_runs(py, &p.children)?,
            },
        )?
        .into_any(),
        Block::Heading(h) => Py::new(
            py,
            PyHeading {
                level: h.level,
                children: convert_runs(py, &h.children)?,
            },
        )?
        .into_any(),
        Block::Quote(q) => Py::new(
            py,
            PyBlockQuote {
                children: convert_runs(py, &q.children)?,
            },
        )?
        .into_any(),
        Block::Todo(t) => Py::new(
            py,
            PyTodo {
                done: t.done,
                children: convert_runs(py, &t.children)?,
            },
        )?
        .into_any(),
        Block::BulletedList(l) => {
            let items = PyList::empty(py);
            for item in &l.children {
                items.append(convert_item(py, item)?)?;
            }
            Py::new(
                py,
                PyBulletedList {
                    children: items.into(),
                },
            )?
            .into_any()
        }
        Block::ListItem(item) => convert_item(py, item)?,
        Block::Raw(r) => Py::new(
            py,
            PyRawNode {
                text: r.text.clone(),
            },
        )?
        .into_any(),
    };
    Ok(obj)
}

// ============================================================================
// PyDocument
// ============================================================================

/// A note document.
#[pyclass(frozen, name = "Document")]
pub struct PyDocument {
    inner: Document,
}

#[pymethods]
impl PyDocument {
    /// Top-level blocks, converted on access.
    #[getter]
    fn blocks(&self, py: Python<'_>) -> PyResult<PyObject> {
        let list = PyList::empty(py);
        for block in &self.inner.blocks {
            list.append(convert_block(py, block)?)?;
        }
        Ok(list.into())
    }

    /// Render as note text.
    fn to_text(&self) -> String {
        self.inner.to_markdown()
    }

    /// Whether the note holds anything worth saving.
    fn has_content(&self) -> bool {
        self.inner.has_content()
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "Document(blocks={}, has_content={})",
            self.inner.len(),
            self.inner.has_content()
        )
    }
}

// ============================================================================
// EditOutcome
// ============================================================================

/// What an edit did.
///
/// `action` is one of "unchanged", "edited", "rewritten" or "demoted";
/// `kind` is set for the last two.
#[pyclass(frozen, get_all, name = "EditOutcome")]
pub struct PyEditOutcome {
    pub action: String,
    pub kind: Option<PyBlockKind>,
}

#[pymethods]
impl PyEditOutcome {
    #[getter]
    fn changed(&self) -> bool {
        self.action != "unchanged"
    }

    fn __repr__(&self) -> String {
        match self.kind {
            Some(kind) => format!("EditOutcome({}, {:?})", self.action, kind),
            None => format!("EditOutcome({})", self.action),
        }
    }
}

impl From<EditOutcome> for PyEditOutcome {
    fn from(o: EditOutcome) -> Self {
        let (action, kind): (&str, Option<PyBlockKind>) = match o {
            EditOutcome::Unchanged => ("unchanged", None),
            EditOutcome::Edited => ("edited", None),
            EditOutcome::Rewritten(k) => ("rewritten", Some(k.into())),
            EditOutcome::Demoted(k) => ("demoted", Some(k.into())),
        };
        PyEditOutcome {
            action: action.to_string(),
            kind,
        }
    }
}

// ============================================================================
// Editor
// ============================================================================

/// Live editing session with shortcut handling.
///
/// Args:
///     text: Note text to start from (default: empty note)
///     shortcuts: Enable live shortcuts (default: True)
#[pyclass(name = "Editor")]
pub struct PyEditor {
    inner: Editor,
}

#[pymethods]
impl PyEditor {
    #[new]
    #[pyo3(signature = (text=None, shortcuts=true), text_signature = "(text=None, shortcuts=True)")]
    fn new(text: Option<&str>, shortcuts: bool) -> Self {
        PyEditor {
            inner: Editor::new(notemark_core::to_document(text)).with_shortcuts(shortcuts),
        }
    }

    /// Place the cursor. Raises ValueError if the point is not in a text block.
    #[pyo3(signature = (index, offset, item=None), text_signature = "(self, index, offset, item=None)")]
    fn set_cursor(&mut self, index: usize, offset: usize, item: Option<usize>) -> PyResult<()> {
        self.inner
            .set_cursor(Point::new(path(index, item), offset))
            .map_err(value_error)
    }

    /// Place the cursor at the end of the last text block.
    fn move_to_end(&mut self) {
        self.inner.move_to_end();
    }

    /// Cursor as (index, item, offset), or None.
    #[getter]
    fn cursor(&self) -> Option<(usize, Option<usize>, usize)> {
        self.inner
            .cursor()
            .map(|p| (p.path.index, p.path.item, p.offset))
    }

    /// Type text at the cursor.
    fn insert_text(&mut self, text: &str) -> PyEditOutcome {
        self.inner.insert_text(text).into()
    }

    /// Backspace.
    fn delete_backward(&mut self) -> PyEditOutcome {
        self.inner.delete_backward().into()
    }

    /// Split the current block at the cursor.
    fn insert_break(&mut self) -> PyEditOutcome {
        self.inner.insert_break().into()
    }

    /// Queue text reported by an input method.
    #[pyo3(
        signature = (index, run, start, end, text, item=None),
        text_signature = "(self, index, run, start, end, text, item=None)"
    )]
    fn on_before_input(
        &mut self,
        index: usize,
        run: usize,
        start: usize,
        end: usize,
        text: String,
        item: Option<usize>,
    ) {
        self.inner.on_before_input(PendingDiff {
            path: path(index, item),
            run,
            start,
            end,
            text,
        });
    }

    /// Run the check scheduled by on_before_input. Returns True if flushed.
    fn run_deferred(&mut self) -> bool {
        self.inner.run_deferred()
    }

    /// Apply all queued input.
    fn flush_pending(&mut self) -> Vec<PyEditOutcome> {
        self.inner
            .flush_pending()
            .into_iter()
            .map(PyEditOutcome::from)
            .collect()
    }

    /// Snapshot of the current document.
    #[getter]
    fn document(&self) -> PyDocument {
        PyDocument {
            inner: self.inner.document().clone(),
        }
    }

    /// Render the current document as note text.
    fn to_markdown(&self) -> String {
        self.inner.to_markdown()
    }

    fn __repr__(&self) -> String {
        format!(
            "Editor(blocks={}, shortcuts={})",
            self.inner.document().len(),
            self.inner.shortcuts_enabled()
        )
    }
}

// ============================================================================
// Module functions
// ============================================================================

/// Parse note text.
///
/// Args:
///     text: Note text, or None for an empty note
///
/// Returns:
///     Document: Parsed document
#[pyfunction]
#[pyo3(signature = (text=None), text_signature = "(text=None)")]
fn parse(text: Option<&str>) -> PyDocument {
    PyDocument {
        inner: notemark_core::to_document(text),
    }
}

/// Render a document as note text.
#[pyfunction]
fn to_text(document: PyRef<'_, PyDocument>) -> String {
    notemark_core::to_text(&document.inner)
}

/// Whether a document holds anything worth saving.
#[pyfunction]
fn has_content(document: PyRef<'_, PyDocument>) -> bool {
    notemark_core::has_content(&document.inner)
}

// ============================================================================
// Module
// ============================================================================

/// notemark - Block-structured notes with live markdown shortcuts.
#[pymodule]
fn pynm(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyBlockKind>()?;
    m.add_class::<PyDocument>()?;
    m.add_class::<PyEditor>()?;
    m.add_class::<PyEditOutcome>()?;
    m.add_class::<PyText>()?;
    m.add_class::<PyParagraph>()?;
    m.add_class::<PyHeading>()?;
    m.add_class::<PyBlockQuote>()?;
    m.add_class::<PyTodo>()?;
    m.add_class::<PyBulletedList>()?;
    m.add_class::<PyListItem>()?;
    m.add_class::<PyRawNode>()?;

    m.add_function(wrap_pyfunction!(parse, m)?)?;
    m.add_function(wrap_pyfunction!(to_text, m)?)?;
    m.add_function(wrap_pyfunction!(has_content, m)?)?;
    Ok(())
}
