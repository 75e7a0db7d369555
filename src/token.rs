use crate::constants::{DICT_START, END, INTEGER_START, LIST_START, STRING_SEPARATOR};
use crate::decode::DecodeOptions;
use crate::error::BencodeError;
use bytes::Bytes;
use std::fmt;

/// A lexical atom of bencode.
///
/// Open and end markers are unpaired: the tokenizer only classifies bytes and
/// never tracks nesting. Pairing them up is the parser's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A byte string payload, without its length prefix.
    Bytes(Bytes),
    /// The body of an `i...e` integer.
    Integer(i64),
    /// `l`
    ListStart,
    /// `d`
    DictStart,
    /// `e` closing a list or dictionary.
    End,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Bytes(b) => write!(f, "{}:{}", b.len(), b.escape_ascii()),
            Token::Integer(i) => write!(f, "i{}e", i),
            Token::ListStart => f.write_str("l"),
            Token::DictStart => f.write_str("d"),
            Token::End => f.write_str("e"),
        }
    }
}

/// Splits a buffer into a flat token stream.
///
/// Uses the lenient defaults of [`DecodeOptions`]. Every byte of the buffer
/// must belong to a well-formed token; there is no partial result.
///
/// # Examples
///
/// ```
/// use rbit_bencode::{tokenize, Token};
///
/// let tokens = tokenize(b"li42e4:spame").unwrap();
/// assert_eq!(
///     tokens,
///     vec![
///         Token::ListStart,
///         Token::Integer(42),
///         Token::Bytes("spam".into()),
///         Token::End,
///     ]
/// );
///
/// assert!(tokenize(b"5:ab").is_err());
/// ```
pub fn tokenize(data: &[u8]) -> Result<Vec<Token>, BencodeError> {
    Ok(tokenize_spanned(data, &DecodeOptions::default())?
        .into_iter()
        .map(|(_, token)| token)
        .collect())
}

/// Like [`tokenize`], but pairs each token with the byte offset it starts at
/// and applies the canonical-form checks of `options`.
pub fn tokenize_spanned(
    data: &[u8],
    options: &DecodeOptions,
) -> Result<Vec<(usize, Token)>, BencodeError> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < data.len() {
        let start = pos;
        let token = match data[pos] {
            b'0'..=b'9' => tokenize_bytes(data, &mut pos, options.strict)?,
            INTEGER_START => tokenize_integer(data, &mut pos, options.strict)?,
            LIST_START => {
                pos += 1;
                Token::ListStart
            }
            DICT_START => {
                pos += 1;
                Token::DictStart
            }
            END => {
                pos += 1;
                Token::End
            }
            byte => return Err(BencodeError::UnexpectedByte { byte, offset: pos }),
        };
        tokens.push((start, token));
    }

    tracing::trace!("tokenized {} bytes into {} tokens", data.len(), tokens.len());
    Ok(tokens)
}

fn tokenize_bytes(data: &[u8], pos: &mut usize, strict: bool) -> Result<Token, BencodeError> {
    let start = *pos;
    let colon = data[start..]
        .iter()
        .position(|&b| b == STRING_SEPARATOR)
        .map(|i| start + i)
        .ok_or(BencodeError::UnexpectedEof { offset: start })?;

    let digits = &data[start..colon];
    if !digits.iter().all(u8::is_ascii_digit) {
        return Err(BencodeError::InvalidStringLength { offset: start });
    }
    if strict && digits.len() > 1 && digits[0] == b'0' {
        return Err(BencodeError::InvalidStringLength { offset: start });
    }

    let len: usize = std::str::from_utf8(digits)
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or(BencodeError::InvalidStringLength { offset: start })?;

    let payload = colon + 1;
    let available = data.len() - payload;
    if len > available {
        return Err(BencodeError::TruncatedString {
            offset: start,
            declared: len,
            available,
        });
    }

    *pos = payload + len;
    Ok(Token::Bytes(Bytes::copy_from_slice(&data[payload..*pos])))
}

fn tokenize_integer(data: &[u8], pos: &mut usize, strict: bool) -> Result<Token, BencodeError> {
    let start = *pos;
    let body_start = start + 1;
    let end = data[body_start..]
        .iter()
        .position(|&b| b == END)
        .map(|i| body_start + i)
        .ok_or(BencodeError::UnexpectedEof { offset: data.len() })?;

    let invalid = |reason: &str| BencodeError::InvalidInteger {
        offset: start,
        reason: reason.into(),
    };

    let body = &data[body_start..end];
    let digits = body.strip_prefix(b"-").unwrap_or(body);
    if digits.is_empty() {
        return Err(invalid("no digits"));
    }
    if !digits.iter().all(u8::is_ascii_digit) {
        return Err(invalid("non-digit character"));
    }
    if strict {
        if body.starts_with(b"-0") {
            return Err(invalid("negative zero"));
        }
        if digits.len() > 1 && digits[0] == b'0' {
            return Err(invalid("leading zeros"));
        }
    }

    let value: i64 = std::str::from_utf8(body)
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| invalid("out of range"))?;

    *pos = end + 1;
    Ok(Token::Integer(value))
}
