//! RAML: dictionary codec for scripts with a small, repetitive vocabulary.
//!
//! Components:
//! 1. Tokenizer: split on a single delimiter byte, keeping the delimiter
//! 2. Dictionary: unique words ranked by descending frequency
//! 3. Width: byte width of the dictionary length fields
//! 4. Varint: self-terminating base-128 ranks for the index stream
//! 5. Container: header, dictionary section, index section

pub mod codec;
pub mod config;
pub mod container;
pub mod dictionary;
pub mod error;
pub mod tokenizer;
pub mod varint;
pub mod width;

pub use codec::{decode, decode_from, encode, encode_to, inspect, ContainerInfo, EncodeSummary};
pub use config::{CodecConfig, TieBreak};
pub use dictionary::{DictEntry, Dictionary};
pub use error::{CapacityError, CodecError, FormatError, Result};
pub use tokenizer::{tokenize, Tokens};
