//! Primitives for parsing the values of reflected SVG attributes

use error::Error;
mod types;

pub mod error;

/// A parser holding the state of reading a single attribute value
pub struct Parser<'input> {
    input: &'input str,
    cursor: usize,
}

impl<'input> Parser<'input> {
    /// Create a new parser over the input
    pub fn new(input: &'input str) -> Self {
        Self { input, cursor: 0 }
    }

    /// Returns the byte position of the parser in the input
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Read the current character and move past it
    ///
    /// # Errors
    ///
    /// If the input has ended
    pub fn read(&mut self) -> Result<char, Error<'input>> {
        let current = self.current()?;
        self.cursor += current.len_utf8();
        Ok(current)
    }

    /// Move past the current character without reading it
    pub fn advance(&mut self) {
        if let Ok(current) = self.current() {
            self.cursor += current.len_utf8();
        }
    }

    /// Move backwards by `n` bytes
    pub fn rewind(&mut self, n: usize) {
        self.cursor = self.cursor.saturating_sub(n);
    }

    /// Run `f` against the parser, restoring the cursor if it fails
    ///
    /// # Errors
    ///
    /// If `f` fails
    pub fn try_parse<T, E, F: FnOnce(&mut Self) -> Result<T, E>>(&mut self, f: F) -> Result<T, E> {
        let cursor = self.cursor;
        let result = f(self);
        if result.is_err() {
            self.cursor = cursor;
        }
        result
    }

    /// The unread remainder of the input
    pub fn slice(&self) -> &'input str {
        &self.input[self.cursor..]
    }

    /// The input between `start` and the cursor
    pub fn slice_from(&self, start: usize) -> &'input str {
        let end = self.cursor.min(self.input.len());
        &self.input[start..end]
    }

    /// Number of unread bytes
    pub fn len(&self) -> usize {
        self.input.len() - self.cursor
    }

    /// Whether the whole input was read
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Peek at the current character
    ///
    /// # Errors
    ///
    /// If the input has ended
    pub fn current(&self) -> Result<char, Error<'input>> {
        self.slice().chars().next().ok_or(Error::EndOfInput)
    }

    /// Move forward while characters match `f`, returning what was skipped
    pub fn take_matches<F: FnMut(char) -> bool>(&mut self, f: F) -> &'input str {
        let cursor = self.cursor;
        self.skip_matches(f);
        self.slice_from(cursor)
    }

    /// Move forward while characters match `f`
    pub fn skip_matches<F: FnMut(char) -> bool>(&mut self, f: F) {
        let remaining = self.slice().trim_start_matches(f).len();
        self.cursor += self.len() - remaining;
    }

    /// Move forward past any whitespace
    pub fn skip_whitespace(&mut self) {
        self.skip_matches(char::is_whitespace);
    }

    /// Move forward past whitespace, at most one comma, then whitespace again
    ///
    /// This is the `comma-wsp` production used between list items and arguments.
    pub fn skip_comma_whitespace(&mut self) {
        self.skip_whitespace();
        if let Ok(',') = self.current() {
            self.advance();
        }
        self.skip_whitespace();
    }

    /// Asserts the whole input was read
    ///
    /// # Errors
    ///
    /// When there's trailing input
    pub fn expect_done(&self) -> Result<(), Error<'input>> {
        if self.cursor < self.input.len() {
            Err(Error::ExpectedDone)
        } else {
            Ok(())
        }
    }

    /// Read the next character, failing if it isn't `expected`
    ///
    /// # Errors
    ///
    /// If the input ended or the character doesn't match
    pub fn expect_char(&mut self, expected: char) -> Result<(), Error<'input>> {
        let received = self.read()?;
        if received == expected {
            Ok(())
        } else {
            Err(Error::ExpectedChar { expected, received })
        }
    }

    /// Read an ascii identifier, such as a function name or keyword
    ///
    /// # Errors
    ///
    /// If no identifier starts at the cursor
    pub fn expect_ident(&mut self) -> Result<&'input str, Error<'input>> {
        let ident = self.take_matches(|char| char.is_ascii_alphabetic() || char == '-');
        if ident.is_empty() {
            Err(Error::ExpectedIdent {
                expected: "an identifier",
                received: self.slice(),
            })
        } else {
            Ok(ident)
        }
    }
}

/// A trait for values that can be read from an attribute's string value.
pub trait Parse<'input>: Sized {
    /// Parse this value from an existing parser.
    ///
    /// # Errors
    /// If parsing fails
    fn parse(input: &mut Parser<'input>) -> Result<Self, Error<'input>>;

    /// Parse a value from a whole string, allowing surrounding whitespace
    ///
    /// # Errors
    /// If parsing fails or there's trailing content
    fn parse_string(input: &'input str) -> Result<Self, Error<'input>> {
        let parser = &mut Parser::new(input);
        parser.skip_whitespace();
        let result = Self::parse(parser)?;
        parser.skip_whitespace();
        parser.expect_done()?;
        Ok(result)
    }
}

#[test]
fn comma_whitespace() {
    let mut parser = Parser::new("  ,  1");
    parser.skip_comma_whitespace();
    assert_eq!(parser.slice(), "1");

    let mut parser = Parser::new(",,1");
    parser.skip_comma_whitespace();
    assert_eq!(parser.slice(), ",1");
}

#[test]
fn ident() {
    let mut parser = Parser::new("skewX(1)");
    assert_eq!(parser.expect_ident(), Ok("skewX"));
    assert_eq!(parser.expect_char('('), Ok(()));
    assert!(Parser::new("(1)").expect_ident().is_err());
}

#[test]
fn try_parse_restores() {
    let mut parser = Parser::new("abc");
    let result: Result<(), Error> = parser.try_parse(|p| {
        p.advance();
        p.expect_char('x')
    });
    assert!(result.is_err());
    assert_eq!(parser.cursor(), 0);
}
