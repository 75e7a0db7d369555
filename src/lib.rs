//! rbit-bencode - Bencode encoding and decoding ([BEP-3])
//!
//! Bencode is the serialization format BitTorrent uses for `.torrent` files,
//! tracker responses and DHT messages.
//!
//! # Data Types
//!
//! | Type | Format | Example |
//! |------|--------|---------|
//! | Integer | `i<number>e` | `i42e` → 42 |
//! | Byte String | `<length>:<data>` | `4:spam` → "spam" |
//! | List | `l<items>e` | `l4:spami42ee` → ["spam", 42] |
//! | Dictionary | `d<key><value>...e` | `d3:foo3:bare` → {"foo": "bar"} |
//!
//! # Pipeline
//!
//! Decoding runs in two stages that can also be called on their own:
//!
//! - [`tokenize`] slices the buffer into a flat stream of [`Token`]s. Open and
//!   end markers are left unpaired.
//! - [`parse`] pairs the markers up and builds [`Value`] trees.
//!
//! [`decode`] composes the two and returns the first top-level value.
//! [`encode`] goes the other way and always emits canonical bencode, with
//! dictionary keys in ascending byte order.
//!
//! # Examples
//!
//! ```
//! use rbit_bencode::{decode, encode, tokenize, Token, Value};
//!
//! let value = decode(b"d4:infod6:lengthi1024e4:name8:test.txtee").unwrap();
//! let info = value.get(b"info").unwrap();
//! assert_eq!(info.get(b"length").and_then(Value::as_integer), Some(1024));
//! assert_eq!(info.get(b"name").and_then(Value::as_str), Some("test.txt"));
//!
//! let tokens = tokenize(b"l4:spame").unwrap();
//! assert_eq!(tokens[0], Token::ListStart);
//!
//! let torrent = Value::dict([
//!     ("info", Value::dict([("piece length", Value::Integer(16384))])),
//!     ("announce", Value::string("http://tracker.example.com/announce")),
//! ]);
//! let bytes = encode(&torrent).unwrap();
//! assert!(bytes.starts_with(b"d8:announce"));
//! assert_eq!(decode(&bytes).unwrap(), torrent);
//! ```
//!
//! # Error Handling
//!
//! Malformed input never yields a partial value. Tokenizer errors such as
//! [`BencodeError::TruncatedString`] carry the byte offset of the bad token;
//! parser errors such as [`BencodeError::Unterminated`] carry its token index.
//!
//! Decoding is lenient by default. [`DecodeOptions::strict`] additionally
//! rejects non-canonical input:
//!
//! ```
//! use rbit_bencode::{decode, decode_with, DecodeOptions};
//!
//! assert!(decode(b"i03e").is_ok());
//! assert!(decode_with(b"i03e", &DecodeOptions::strict()).is_err());
//! ```
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

pub mod constants;
mod decode;
mod encode;
mod error;
mod parse;
mod token;
mod value;

pub use decode::{decode, decode_with, DecodeOptions};
pub use encode::{encode, encode_to};
pub use error::BencodeError;
pub use parse::{parse, parse_with};
pub use token::{tokenize, tokenize_spanned, Token};
pub use value::Value;
