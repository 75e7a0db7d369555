use crate::decode::DecodeOptions;
use crate::error::BencodeError;
use crate::token::Token;
use crate::value::Value;
use std::collections::BTreeMap;

/// Reassembles a flat token stream into values.
///
/// Returns every top-level value in order. Fails if any list or dictionary is
/// left open, if an end marker has nothing to close, or if a dictionary body
/// is not a sequence of byte-string keys each followed by a value.
///
/// # Examples
///
/// ```
/// use rbit_bencode::{parse, tokenize, Value};
///
/// let tokens = tokenize(b"li1eei2e").unwrap();
/// let values = parse(&tokens).unwrap();
/// assert_eq!(values, vec![Value::List(vec![Value::Integer(1)]), Value::Integer(2)]);
/// ```
pub fn parse(tokens: &[Token]) -> Result<Vec<Value>, BencodeError> {
    parse_with(tokens, &DecodeOptions::default())
}

/// Like [`parse`], with explicit limits and canonical-form checks.
///
/// In strict mode a second top-level value is rejected as
/// [`BencodeError::TrailingData`], so at most one value is returned.
pub fn parse_with(tokens: &[Token], options: &DecodeOptions) -> Result<Vec<Value>, BencodeError> {
    let mut pos = 0;
    let mut values = Vec::new();

    while pos < tokens.len() {
        if options.strict && !values.is_empty() {
            return Err(BencodeError::TrailingData { index: pos });
        }
        values.push(parse_value(tokens, &mut pos, 0, options)?);
    }

    Ok(values)
}

/// Parses the value starting at `*pos` and leaves `*pos` one past its last
/// token. `depth` counts the containers enclosing this value.
fn parse_value(
    tokens: &[Token],
    pos: &mut usize,
    depth: usize,
    options: &DecodeOptions,
) -> Result<Value, BencodeError> {
    let index = *pos;
    let token = tokens
        .get(index)
        .ok_or(BencodeError::Unterminated { index })?;

    match token {
        Token::Bytes(b) => {
            *pos += 1;
            Ok(Value::Bytes(b.clone()))
        }
        Token::Integer(i) => {
            *pos += 1;
            Ok(Value::Integer(*i))
        }
        Token::ListStart | Token::DictStart => {
            if depth >= options.max_depth {
                return Err(BencodeError::NestingTooDeep { index });
            }
            if *token == Token::ListStart {
                parse_list(tokens, pos, depth + 1, options)
            } else {
                parse_dict(tokens, pos, depth + 1, options)
            }
        }
        Token::End => Err(BencodeError::UnmatchedEnd { index }),
    }
}

fn parse_list(
    tokens: &[Token],
    pos: &mut usize,
    depth: usize,
    options: &DecodeOptions,
) -> Result<Value, BencodeError> {
    let open = *pos;
    *pos += 1;
    let mut list = Vec::new();

    loop {
        match tokens.get(*pos) {
            None => return Err(BencodeError::Unterminated { index: open }),
            Some(Token::End) => {
                *pos += 1;
                return Ok(Value::List(list));
            }
            Some(_) => list.push(parse_value(tokens, pos, depth, options)?),
        }
    }
}

fn parse_dict(
    tokens: &[Token],
    pos: &mut usize,
    depth: usize,
    options: &DecodeOptions,
) -> Result<Value, BencodeError> {
    let open = *pos;
    *pos += 1;
    let mut dict = BTreeMap::new();

    loop {
        let key_index = *pos;
        let key = match tokens.get(key_index) {
            None => return Err(BencodeError::Unterminated { index: open }),
            Some(Token::End) => {
                *pos += 1;
                return Ok(Value::Dict(dict));
            }
            Some(Token::Bytes(b)) => b.clone(),
            Some(other) => {
                tracing::debug!("dictionary key at token {} is {}", key_index, other);
                return Err(BencodeError::NonStringKey { index: key_index });
            }
        };
        *pos += 1;

        match tokens.get(*pos) {
            None => return Err(BencodeError::Unterminated { index: open }),
            Some(Token::End) => return Err(BencodeError::OddDictionary { index: key_index }),
            Some(_) => {}
        }

        if options.strict {
            if let Some((last, _)) = dict.last_key_value() {
                if key <= *last {
                    return Err(BencodeError::UnsortedKeys { index: key_index });
                }
            }
        }

        let value = parse_value(tokens, pos, depth, options)?;
        dict.insert(key, value);
    }
}
