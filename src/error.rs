use thiserror::Error;

/// Errors produced while tokenizing, parsing or encoding bencode.
///
/// Tokenizer errors carry the byte `offset` into the input buffer; parser
/// errors carry the `index` of the offending token.
#[derive(Debug, Error)]
pub enum BencodeError {
    #[error("unexpected end of input at byte {offset}")]
    UnexpectedEof { offset: usize },

    #[error("string at byte {offset} declares {declared} bytes but only {available} remain")]
    TruncatedString {
        offset: usize,
        declared: usize,
        available: usize,
    },

    #[error("invalid string length at byte {offset}")]
    InvalidStringLength { offset: usize },

    #[error("invalid integer at byte {offset}: {reason}")]
    InvalidInteger { offset: usize, reason: String },

    #[error("unexpected byte {byte:#04x} at byte {offset}")]
    UnexpectedByte { byte: u8, offset: usize },

    #[error("end marker at token {index} has no matching list or dictionary")]
    UnmatchedEnd { index: usize },

    #[error("list or dictionary opened at token {index} is never closed")]
    Unterminated { index: usize },

    #[error("dictionary key at token {index} is not a byte string")]
    NonStringKey { index: usize },

    #[error("dictionary key at token {index} has no value")]
    OddDictionary { index: usize },

    #[error("dictionary key at token {index} is out of order or duplicated")]
    UnsortedKeys { index: usize },

    #[error("trailing data after value at token {index}")]
    TrailingData { index: usize },

    #[error("nesting too deep at token {index}")]
    NestingTooDeep { index: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
