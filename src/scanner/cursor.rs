//! Position tracking for a single scan pass.
//!
//! The cursor wraps a winnow [`LocatingSlice`] so every consumed run is
//! addressed by byte offset. `start` marks the beginning of the lexeme being
//! scanned and `line` counts the newlines consumed so far.

use winnow::error::ContextError;
use winnow::prelude::*;
use winnow::stream::{LocatingSlice, Location};
use winnow::token::{any, literal, take_till, take_until, take_while};

use crate::scanner::token::Span;

type Input<'a> = LocatingSlice<&'a str>;

pub(crate) struct Cursor<'a> {
    source: &'a str,
    input: Input<'a>,
    start: usize,
    start_line: usize,
    line: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Self {
            source,
            input: LocatingSlice::new(source),
            start: 0,
            start_line: 1,
            line: 1,
        }
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.input.is_empty()
    }

    /// Byte offset of the next unconsumed character.
    pub(crate) fn offset(&self) -> usize {
        self.input.current_token_start()
    }

    pub(crate) fn line(&self) -> usize {
        self.line
    }

    /// Line on which the current lexeme began.
    pub(crate) fn start_line(&self) -> usize {
        self.start_line
    }

    pub(crate) fn begin_lexeme(&mut self) {
        self.start = self.offset();
        self.start_line = self.line;
    }

    pub(crate) fn lexeme(&self) -> &'a str {
        &self.source[self.start..self.offset()]
    }

    pub(crate) fn span(&self) -> Span {
        Span::new(self.start, self.offset() - self.start)
    }

    /// Consume one character. Newlines are not counted here; the dispatch
    /// loop decides whether a bare `\n` advances the line.
    pub(crate) fn advance(&mut self) -> Option<char> {
        any::<_, ContextError>.parse_next(&mut self.input).ok()
    }

    pub(crate) fn new_line(&mut self) {
        self.line += 1;
    }

    /// Consume `expected` if it is the next character.
    pub(crate) fn eat(&mut self, expected: char) -> bool {
        literal::<_, _, ContextError>(expected)
            .parse_next(&mut self.input)
            .is_ok()
    }

    /// Consume the longest run of characters matching `pred`.
    pub(crate) fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        take_while::<_, _, ContextError>(0.., pred)
            .parse_next(&mut self.input)
            .unwrap_or_default()
    }

    /// Consume everything up to, but not including, the next `terminator`
    /// (or to the end of input), counting newlines.
    pub(crate) fn eat_till(&mut self, terminator: char) -> &'a str {
        let text = take_till::<_, _, ContextError>(0.., terminator)
            .parse_next(&mut self.input)
            .unwrap_or_default();
        self.count_lines(text);
        text
    }

    /// Consume up to and including `terminator`, counting newlines.
    ///
    /// When `terminator` never appears the rest of the input is consumed and
    /// `None` is returned.
    pub(crate) fn eat_through(&mut self, terminator: &str) -> Option<&'a str> {
        match take_until::<_, _, ContextError>(0.., terminator).parse_next(&mut self.input) {
            Ok(text) => {
                self.count_lines(text);
                let closed = literal::<_, _, ContextError>(terminator).parse_next(&mut self.input);
                debug_assert!(closed.is_ok(), "take_until stops at the terminator");
                Some(text)
            }
            Err(_) => {
                let rest = self.eat_while(|_| true);
                self.count_lines(rest);
                None
            }
        }
    }

    /// Consume a fractional part (`.` followed by at least one digit).
    ///
    /// Leaves the input untouched when the `.` is not followed by a digit.
    pub(crate) fn eat_fraction(&mut self) -> bool {
        let checkpoint = self.input.checkpoint();
        let parsed: Result<(char, &str), ContextError> =
            ('.', take_while(1.., |c: char| c.is_ascii_digit())).parse_next(&mut self.input);
        if parsed.is_err() {
            self.input.reset(&checkpoint);
        }
        parsed.is_ok()
    }

    fn count_lines(&mut self, text: &str) {
        self.line += text.matches('\n').count();
    }
}
