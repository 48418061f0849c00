//! Error types.
use svgdom_serialize::error::PrinterError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
/// Errors raised by value wrappers, named after the DOM exceptions a browser would throw
///
/// [MDN | DOMException](https://developer.mozilla.org/en-US/docs/Web/API/DOMException#error_names)
pub enum DomError {
    /// An index is outside the bounds of a list
    #[error("index {index} is out of range for a list of {length} items")]
    IndexSize {
        /// The requested index
        index: usize,
        /// The length of the list
        length: usize,
    },
    /// A read-only (`animVal`) value was written to
    #[error("the animated value of `{0}` is read-only")]
    NoModificationAllowed(&'static str),
    /// A unit or conversion isn't supported
    #[error("{0}")]
    NotSupported(String),
    /// A string couldn't be parsed as the expected value
    #[error("failed to parse `{value}`: {reason}")]
    Syntax {
        /// The string that was written
        value: String,
        /// Why parsing failed
        reason: String,
    },
    /// A value was outside the set of legal values
    #[error("{0}")]
    Type(String),
    /// A value couldn't be serialized
    #[error(transparent)]
    Printer(#[from] PrinterError),
}

#[test]
fn display() {
    assert_eq!(
        DomError::IndexSize {
            index: 3,
            length: 1
        }
        .to_string(),
        "index 3 is out of range for a list of 1 items"
    );
    assert_eq!(
        DomError::NoModificationAllowed("x").to_string(),
        "the animated value of `x` is read-only"
    );
}
