use crate::constants::MAX_DEPTH;
use crate::error::BencodeError;
use crate::parse::parse_with;
use crate::token::{tokenize_spanned, Token};
use crate::value::Value;

/// Decoder settings.
///
/// The default is lenient: non-minimal integers and length prefixes (`i03e`,
/// `i-0e`, `03:abc`), unsorted or repeated dictionary keys (the last value
/// wins) and extra top-level values after the first are all accepted.
/// Structural errors are rejected in either mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Maximum number of nested lists and dictionaries.
    pub max_depth: usize,
    /// Reject anything that is not in canonical form.
    pub strict: bool,
}

impl DecodeOptions {
    /// Options that accept only canonical bencode, as produced by [`encode`](crate::encode).
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            strict: false,
        }
    }
}

/// Decodes the first bencode value in `data`.
///
/// Any further top-level values are parsed for well-formedness and then
/// discarded. Use [`decode_with`] with [`DecodeOptions::strict`] to reject them.
///
/// # Examples
///
/// ```
/// use rbit_bencode::{decode, Value};
///
/// let value = decode(b"d3:cow3:moo4:spam4:eggse").unwrap();
/// assert_eq!(value.get(b"cow").and_then(|v| v.as_str()), Some("moo"));
/// assert_eq!(value.get(b"spam").and_then(|v| v.as_str()), Some("eggs"));
///
/// assert!(decode(b"5:ab").is_err());
/// assert!(decode(b"").is_err());
/// ```
pub fn decode(data: &[u8]) -> Result<Value, BencodeError> {
    decode_with(data, &DecodeOptions::default())
}

/// Like [`decode`], with explicit limits and canonical-form checks.
///
/// ```
/// use rbit_bencode::{decode_with, BencodeError, DecodeOptions};
///
/// let strict = DecodeOptions::strict();
/// assert!(decode_with(b"d1:ai1e1:bi2ee", &strict).is_ok());
/// assert!(matches!(
///     decode_with(b"d1:bi1e1:ai2ee", &strict),
///     Err(BencodeError::UnsortedKeys { index: 3 })
/// ));
/// ```
pub fn decode_with(data: &[u8], options: &DecodeOptions) -> Result<Value, BencodeError> {
    let (offsets, tokens): (Vec<usize>, Vec<Token>) =
        tokenize_spanned(data, options)
            .inspect_err(|err| tracing::debug!("tokenize failed: {}", err))?
            .into_iter()
            .unzip();

    let values = parse_with(&tokens, options).inspect_err(|err| {
        match error_offset(err, &offsets) {
            Some(offset) => tracing::debug!("decode failed at byte {}: {}", offset, err),
            None => tracing::debug!("decode failed: {}", err),
        }
    })?;

    values
        .into_iter()
        .next()
        .ok_or(BencodeError::UnexpectedEof { offset: 0 })
}

/// Maps the token index carried by a parser error back to a byte offset.
fn error_offset(err: &BencodeError, offsets: &[usize]) -> Option<usize> {
    let index = match err {
        BencodeError::UnmatchedEnd { index }
        | BencodeError::Unterminated { index }
        | BencodeError::NonStringKey { index }
        | BencodeError::OddDictionary { index }
        | BencodeError::UnsortedKeys { index }
        | BencodeError::TrailingData { index }
        | BencodeError::NestingTooDeep { index } => *index,
        _ => return None,
    };
    offsets.get(index).copied()
}
