/// Errors produced while reading a puzzle input. Line numbers are 1-based.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Line {line}: expected a range like '3-5', got '{text}'")]
    MalformedRange { line: usize, text: String },
    #[error("Line {line}: range {start}-{end} ends before it starts")]
    InvertedRange { line: usize, start: i64, end: i64 },
    #[error("Line {line}: expected an ingredient id, got '{text}'")]
    MalformedId { line: usize, text: String },
    #[error("Line {line}, column {column}: '{found}' is not a digit")]
    InvalidDigit {
        line: usize,
        column: usize,
        found: char,
    },
    #[error("Line {line}: need {needed} digits, bank has only {found}")]
    TooFewDigits {
        line: usize,
        needed: usize,
        found: usize,
    },
    #[error("Can't pick {pick} digits, expected 1 to {max}")]
    InvalidPick { pick: usize, max: usize },
    #[error("Line {line}: total joltage no longer fits into 64 bits")]
    AnswerOverflow { line: usize },
}
