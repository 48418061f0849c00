//! Error types that may occur while parsing a reflected attribute value

/// Parse errors that can be encountered by parsing
#[derive(Debug, Clone, PartialEq)]
pub enum Error<'input> {
    /// The end of an input was reached before parsing finished
    EndOfInput,
    /// An invalid number was parsed.
    InvalidNumber,
    /// Parsing is done but there is trailing input.
    ExpectedDone,
    /// A specific character was unmatched
    ExpectedChar {
        /// The expected character
        expected: char,
        /// The received character
        received: char,
    },
    /// A specific identifier was unmatched
    ExpectedIdent {
        /// The expected identifier(s)
        expected: &'static str,
        /// The received string
        received: &'input str,
    },
    /// A length was followed by a unit that isn't an SVG length unit
    UnknownUnit(&'input str),
    /// A transform function that isn't part of the SVG transform grammar
    UnknownFunction(&'input str),
}

impl std::fmt::Display for Error<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fmt = match self {
            Self::EndOfInput => "Unexpected end of input while parsing",
            Self::InvalidNumber => "Invalid number",
            Self::ExpectedDone => "Unexpected trailing content after parsing",
            Self::ExpectedChar { expected, received } => {
                return write!(f, "Expected '{expected}' but received '{received}' instead");
            }
            Self::ExpectedIdent { expected, received } => {
                return write!(f, "Expected {expected} but received `{received}` instead");
            }
            Self::UnknownUnit(unit) => return write!(f, "Unknown length unit `{unit}`"),
            Self::UnknownFunction(name) => {
                return write!(f, "Unknown transform function `{name}`");
            }
        };
        f.write_str(fmt)
    }
}
impl std::error::Error for Error<'_> {}
