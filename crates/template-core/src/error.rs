//! Parse errors for template documents.

/// Error type for template parsing.
///
/// All syntax variants carry the 1-based line and column where the
/// problem was found.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Error reading the template file
    #[error("Failed to read template file: {0}")]
    Io(#[from] std::io::Error),

    /// Unexpected character in the document
    #[error("Unexpected character '{ch}' at line {line}, column {column}")]
    UnexpectedCharacter { ch: char, line: u32, column: u32 },

    /// Unexpected token where another construct was required
    #[error("Expected {expected}, found {found} at line {line}, column {column}")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
        line: u32,
        column: u32,
    },

    /// String literal without a closing quote
    #[error("Unterminated string at line {line}, column {column}")]
    UnterminatedString { line: u32, column: u32 },

    /// Block comment without a closing `*/`
    #[error("Unterminated comment at line {line}, column {column}")]
    UnterminatedComment { line: u32, column: u32 },

    /// Number literal that could not be parsed
    #[error("Invalid number '{text}' at line {line}, column {column}")]
    InvalidNumber {
        text: String,
        line: u32,
        column: u32,
    },

    /// Invalid escape sequence in a string literal
    #[error("Invalid escape sequence '\\{ch}' at line {line}, column {column}")]
    InvalidEscape { ch: char, line: u32, column: u32 },

    /// A `{{...}}` token that does not follow the placeholder grammar
    #[error("Malformed placeholder at line {line}, column {column}: {detail}")]
    MalformedPlaceholder {
        detail: String,
        line: u32,
        column: u32,
    },

    /// A repeat marker somewhere other than the first element of an array
    #[error(
        "Misplaced repeat marker at line {line}, column {column}: \
         repeat() is only valid as the entire first element of an array"
    )]
    MisplacedRepeat { line: u32, column: u32 },

    /// Repeat bounds that are negative, non-integer, or inverted
    #[error("Invalid repeat bounds at line {line}, column {column}: {detail}")]
    InvalidRepeatBounds {
        detail: String,
        line: u32,
        column: u32,
    },

    /// A repeat marker with no element templates following it
    #[error(
        "Repeat marker without element templates at line {line}, column {column}"
    )]
    EmptyRepeat { line: u32, column: u32 },
}
