//! Error types for compression operations.

use thiserror::Error;

/// Result type alias for compression operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Compression error types.
///
/// Every variant is a structural contract violation, not a transient
/// condition: none are retried, and no partial output accompanies them.
#[derive(Debug, Error)]
pub enum Error {
    /// Input contained no symbols, so no code tree can be built.
    #[error("empty input: no symbols to build a code tree from")]
    EmptyInput,

    /// The packer met an input symbol with no assigned codeword.
    ///
    /// Indicates the code table was derived from a different input than the
    /// one being packed.
    #[error("incomplete code table: no codeword for symbol 0x{symbol:02x}")]
    IncompleteCodeTable { symbol: u8 },

    /// Buffer too small for output.
    #[error("buffer too small: need {required} bytes, got {provided}")]
    BufferTooSmall { required: usize, provided: usize },

    /// I/O error from the surrounding byte source or sink.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an incomplete code table error.
    pub fn incomplete_code_table(symbol: u8) -> Self {
        Error::IncompleteCodeTable { symbol }
    }

    /// Create a buffer too small error.
    pub fn buffer_too_small(required: usize, provided: usize) -> Self {
        Error::BufferTooSmall { required, provided }
    }

    /// Get error category for metrics.
    pub fn category(&self) -> &'static str {
        match self {
            Error::EmptyInput => "empty_input",
            Error::IncompleteCodeTable { .. } => "incomplete_code_table",
            Error::BufferTooSmall { .. } => "buffer_too_small",
            Error::Io(_) => "io_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::incomplete_code_table(0x41);
        assert_eq!(
            err.to_string(),
            "incomplete code table: no codeword for symbol 0x41"
        );

        let err = Error::buffer_too_small(100, 10);
        assert_eq!(err.to_string(), "buffer too small: need 100 bytes, got 10");
    }

    #[test]
    fn test_error_category() {
        assert_eq!(Error::EmptyInput.category(), "empty_input");
        assert_eq!(
            Error::incomplete_code_table(0).category(),
            "incomplete_code_table"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert_eq!(err.category(), "io_error");
    }
}
