use thiserror::Error;

/// Conditions the converter refuses to coerce.
///
/// Everything else (malformed front matter, unterminated fences, unmatched
/// inline delimiters) degrades to a literal reading instead of erroring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },
    #[error("Heading level {0} is outside 1..=6")]
    InvalidHeadingLevel(u8),
}

impl From<std::str::Utf8Error> for ConvertError {
    fn from(err: std::str::Utf8Error) -> Self {
        ConvertError::InvalidInput {
            reason: format!("not valid UTF-8: {err}"),
        }
    }
}
