use crate::constants::{DICT_START, END, INTEGER_START, LIST_START, STRING_SEPARATOR};
use crate::error::BencodeError;
use crate::value::Value;
use std::io::Write;

/// Encodes a value to canonical bencode.
///
/// Dictionary entries are written in ascending raw-byte key order whatever
/// order they were inserted in, so equal trees always produce equal bytes.
///
/// # Errors
///
/// Encoding into a `Vec` cannot fail in practice; the `Result` mirrors
/// [`encode_to`].
///
/// # Examples
///
/// ```
/// use rbit_bencode::{encode, Value};
///
/// assert_eq!(encode(&Value::Integer(-42)).unwrap(), b"i-42e");
/// assert_eq!(encode(&Value::string("spam")).unwrap(), b"4:spam");
///
/// let list = Value::List(vec![1i64.into(), 2i64.into(), 3i64.into()]);
/// assert_eq!(encode(&list).unwrap(), b"li1ei2ei3ee");
///
/// let dict = Value::dict([("b", Value::Integer(1)), ("a", Value::Integer(2))]);
/// assert_eq!(encode(&dict).unwrap(), b"d1:ai2e1:bi1ee");
/// ```
pub fn encode(value: &Value) -> Result<Vec<u8>, BencodeError> {
    let mut buf = Vec::new();
    encode_to(value, &mut buf)?;
    Ok(buf)
}

/// Writes the canonical encoding of `value` into `writer`.
pub fn encode_to<W: Write>(value: &Value, writer: &mut W) -> Result<(), BencodeError> {
    match value {
        Value::Integer(i) => {
            write!(writer, "{}{}", INTEGER_START as char, i)?;
            writer.write_all(&[END])?;
        }
        Value::Bytes(b) => encode_bytes(b, writer)?,
        Value::List(l) => {
            writer.write_all(&[LIST_START])?;
            for item in l {
                encode_to(item, writer)?;
            }
            writer.write_all(&[END])?;
        }
        Value::Dict(d) => {
            writer.write_all(&[DICT_START])?;
            // BTreeMap iterates in ascending key order.
            for (key, val) in d {
                encode_bytes(key, writer)?;
                encode_to(val, writer)?;
            }
            writer.write_all(&[END])?;
        }
    }
    Ok(())
}

fn encode_bytes<W: Write>(bytes: &[u8], writer: &mut W) -> Result<(), BencodeError> {
    write!(writer, "{}{}", bytes.len(), STRING_SEPARATOR as char)?;
    writer.write_all(bytes)?;
    Ok(())
}
