//! Encode/decode entry points tying the components together.

use std::io::{Read, Write};

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::config::CodecConfig;
use crate::container::{self, Header};
use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::tokenizer::tokenize;

/// Statistics of one encode call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EncodeSummary {
    pub original_len: usize,
    pub encoded_len: usize,
    pub token_count: u64,
    pub unique_count: u64,
    pub wml: u8,
}

impl EncodeSummary {
    pub fn ratio(&self) -> f64 {
        if self.original_len == 0 { return 1.0; }
        self.encoded_len as f64 / self.original_len as f64
    }
}

/// Encode `input` into a complete container.
pub fn encode(input: &[u8], config: &CodecConfig) -> Result<Vec<u8>> {
    encode_with_header(input, config).map(|(buf, _)| buf)
}

fn encode_with_header(input: &[u8], config: &CodecConfig) -> Result<(Vec<u8>, Header)> {
    let tokens = tokenize(input, config.delimiter);
    let dict = Dictionary::build(tokens.clone(), config.tie_break)?;
    debug!(
        tokens = dict.token_count(),
        unique = dict.len(),
        max_word_len = dict.max_word_len(),
        wml = dict.width_class(),
        "built dictionary"
    );

    let mut buf = Vec::with_capacity(container::container_len(&dict));
    let header = container::write_container(&dict, tokens, &mut buf)?;
    debug!(input = input.len(), output = buf.len(), "encoded container");
    Ok((buf, header))
}

/// Encode `input` and write the container to `sink`. Nothing is written
/// unless encoding succeeds.
pub fn encode_to<W: Write>(input: &[u8], config: &CodecConfig, sink: &mut W) -> Result<EncodeSummary> {
    let (buf, header) = encode_with_header(input, config)?;
    sink.write_all(&buf)?;
    sink.flush()?;
    Ok(EncodeSummary {
        original_len: input.len(),
        encoded_len: buf.len(),
        token_count: header.token_count,
        unique_count: header.unique_count,
        wml: header.wml,
    })
}

/// Reconstruct the original text from a container.
pub fn decode(data: &[u8]) -> Result<Vec<u8>> {
    let raw = container::read_container(data)?;
    debug!(
        wml = raw.header.wml,
        tokens = raw.header.token_count,
        unique = raw.header.unique_count,
        "read container header"
    );
    let mut out = Vec::with_capacity(data.len());
    container::read_index(&raw, &mut out)?;
    Ok(out)
}

pub fn decode_from<R: Read>(source: &mut R) -> Result<Vec<u8>> {
    let data = container::read_all(source)?;
    decode(&data)
}

/// Header and dictionary facts of a container, without the index stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContainerInfo {
    pub wml: u8,
    pub token_count: u64,
    pub unique_count: u64,
    pub dictionary_bytes: usize,
    pub index_bytes: usize,
    /// Words in rank order, serialized as lossy UTF-8.
    #[serde(serialize_with = "lossy_words")]
    pub words: Vec<Vec<u8>>,
}

fn lossy_words<S: Serializer>(words: &[Vec<u8>], serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_seq(words.iter().map(|w| String::from_utf8_lossy(w)))
}

pub fn inspect(data: &[u8]) -> Result<ContainerInfo> {
    let raw = container::read_container(data)?;
    Ok(ContainerInfo {
        wml: raw.header.wml,
        token_count: raw.header.token_count,
        unique_count: raw.header.unique_count,
        dictionary_bytes: raw.dictionary_len,
        index_bytes: raw.index.len(),
        words: raw.words.iter().map(|w| w.to_vec()).collect(),
    })
}
