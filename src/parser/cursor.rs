//! Character cursor over a single input line
//!
//! Every slice handed out borrows from the original line, so parsed commands
//! carry no copies of the user's text.

/// Forward-only scanner over a `&str`
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a str,
    position: usize, // byte offset, always on a char boundary
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Cursor { input, position: 0 }
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += ch.len_utf8();
        Some(ch)
    }

    /// Consume `expected` if it is the next character
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume the longest prefix whose characters all satisfy `pred`
    pub fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.position;
        while let Some(ch) = self.peek() {
            if !pred(ch) {
                break;
            }
            self.position += ch.len_utf8();
        }
        &self.input[start..self.position]
    }

    /// Consume everything up to (not including) `stop`.
    ///
    /// Returns `None` and leaves the cursor untouched when `stop` never occurs.
    pub fn take_until(&mut self, stop: char) -> Option<&'a str> {
        let offset = self.rest().find(stop)?;
        let taken = &self.input[self.position..self.position + offset];
        self.position += offset;
        Some(taken)
    }

    /// Skip whitespace, returning whether any was skipped
    pub fn skip_whitespace(&mut self) -> bool {
        !self.take_while(char::is_whitespace).is_empty()
    }

    /// Everything not yet consumed
    pub fn rest(&self) -> &'a str {
        &self.input[self.position..]
    }
}

/// Characters allowed in register names
pub fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}
