//! Logical-line tokenizer shared by the block parsers.

/// One logical line with its 1-based number in the input text.
///
/// `text` never contains the line terminator. Leading whitespace is kept
/// because V2000 fields are column-addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub number: usize,
    pub text: &'a str,
}

impl<'a> Line<'a> {
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Whether the line opens with `marker` as a whole token (`$RXN` matches
    /// `$RXN` and `$RXN V3000` but not `$RXNX`).
    pub fn has_marker(&self, marker: &str) -> bool {
        match self.text.strip_prefix(marker) {
            Some(rest) => rest.chars().next().is_none_or(char::is_whitespace),
            None => false,
        }
    }

    /// Text following `marker`, trimmed.
    pub fn marker_argument(&self, marker: &str) -> Option<&'a str> {
        if self.has_marker(marker) {
            Some(self.text[marker.len()..].trim())
        } else {
            None
        }
    }
}

/// Lazy iterator over the logical lines of a text block.
///
/// Accepts `\n` and `\r\n` terminators. Cloning the iterator restarts the
/// remaining sequence independently.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a str,
    number: usize,
}

pub fn lines(text: &str) -> Lines<'_> {
    Lines {
        rest: text,
        number: 0,
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let (raw, rest) = match self.rest.find('\n') {
            Some(pos) => (&self.rest[..pos], &self.rest[pos + 1..]),
            None => (self.rest, ""),
        };
        self.rest = rest;
        self.number += 1;

        Some(Line {
            number: self.number,
            text: raw.strip_suffix('\r').unwrap_or(raw),
        })
    }
}

/// Forward-only reader over a slice of tokenized lines.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'s, 'a> {
    lines: &'s [Line<'a>],
    pos: usize,
}

impl<'s, 'a> Cursor<'s, 'a> {
    pub fn new(lines: &'s [Line<'a>]) -> Self {
        Self { lines, pos: 0 }
    }

    pub fn peek(&self) -> Option<Line<'a>> {
        self.lines.get(self.pos).copied()
    }

    pub fn next_line(&mut self) -> Option<Line<'a>> {
        let line = self.peek()?;
        self.pos += 1;
        Some(line)
    }

    pub fn skip_blank(&mut self) {
        while self.peek().is_some_and(|l| l.is_blank()) {
            self.pos += 1;
        }
    }

    /// Line number to report when input ends unexpectedly.
    pub fn end_line(&self) -> usize {
        self.lines.last().map(|l| l.number).unwrap_or(1)
    }

    pub fn remaining(&self) -> &'s [Line<'a>] {
        &self.lines[self.pos.min(self.lines.len())..]
    }
}
