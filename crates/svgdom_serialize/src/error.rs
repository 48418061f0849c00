//! Errors that may occur while serializing a value

#[derive(Debug, Clone, PartialEq, Eq)]
/// An error raised by the destination of a [`crate::Printer`]
pub struct PrinterError;

impl From<std::fmt::Error> for PrinterError {
    fn from(_: std::fmt::Error) -> Self {
        Self
    }
}

impl std::fmt::Display for PrinterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Failed to write value to destination")
    }
}
impl std::error::Error for PrinterError {}
