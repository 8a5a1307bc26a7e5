//! Line splitter for stored note text.
//!
//! Notes are stored one block line per `\n`. The splitter borrows lines from
//! the input and uses `memchr` for newline scanning.
//!
//! Unlike `str::lines`, a trailing newline produces a final empty line: an
//! empty paragraph at the end of a note serializes to a trailing `\n` and
//! must come back as a block.
//!
//! A `\r` directly before a `\n` is dropped, so notes saved with CRLF line
//! endings load the same as LF notes. This departs from a plain split on
//! `\n`, which would keep the `\r` as body text; a lone `\r` at the very end
//! of the input is still kept.

use memchr::memchr;

/// A single line of note text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// The line text, without its newline (and without a CR before it).
    pub text: &'a str,
}

impl<'a> Line<'a> {
    /// The leading token: everything up to the first space.
    ///
    /// Tabs and other whitespace do not end the token.
    #[inline]
    pub fn first_token(&self) -> &'a str {
        match memchr(b' ', self.text.as_bytes()) {
            Some(pos) => &self.text[..pos],
            None => self.text,
        }
    }

    /// The text after `"<token> "`.
    ///
    /// Returns `None` if the line does not start with `token` followed by a
    /// space, including a line that is the bare token.
    #[inline]
    pub fn body_after(&self, token: &str) -> Option<&'a str> {
        self.text.strip_prefix(token)?.strip_prefix(' ')
    }
}

/// Iterator over the lines of a note.
pub struct Lexer<'a> {
    input: &'a str,
    offset: usize,
    done: bool,
}

impl<'a> Lexer<'a> {
    /// Create a splitter for `input`.
    #[inline]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            offset: 0,
            done: false,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Line<'a>> {
        if self.done {
            return None;
        }

        let bytes = self.input.as_bytes();
        let start = self.offset;
        let end = match memchr(b'\n', &bytes[start..]) {
            Some(pos) => start + pos,
            None => {
                self.done = true;
                bytes.len()
            }
        };

        // CRLF reads like LF
        let text_end = if !self.done && end > start && bytes[end - 1] == b'\r' {
            end - 1
        } else {
            end
        };

        self.offset = if self.done { end } else { end + 1 };

        Some(Line {
            text: &self.input[start..text_end],
        })
    }
}
