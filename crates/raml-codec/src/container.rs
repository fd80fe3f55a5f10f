//! On-disk layout.
//!
//! ```text
//! magic "RAML" | wml: u8 | token_count: u64 LE | unique_count: u64 LE
//! unique_count x { length: (wml+1) bytes BE | word bytes }
//! token_count x varint rank
//! ```

use std::io::{Cursor, Read, Write};

use byteorder::{BigEndian, LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::dictionary::Dictionary;
use crate::error::{CodecError, FormatError, Result};
use crate::{varint, width};

pub const MAGIC: [u8; 4] = *b"RAML";
pub const HEADER_LEN: usize = 4 + 1 + 8 + 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub wml: u8,
    pub token_count: u64,
    pub unique_count: u64,
}

impl Header {
    pub fn write<W: Write>(&self, out: &mut W) -> Result<()> {
        out.write_all(&MAGIC)?;
        out.write_u8(self.wml)?;
        out.write_u64::<LittleEndian>(self.token_count)?;
        out.write_u64::<LittleEndian>(self.unique_count)?;
        Ok(())
    }

    /// Parse and validate the fixed-size header at the start of `buf`.
    pub fn read(buf: &[u8]) -> Result<Self> {
        if buf.len() < HEADER_LEN {
            // a short buffer with the wrong magic is reported as bad magic
            if buf.len() >= MAGIC.len() && buf[..4] != MAGIC {
                return Err(bad_magic(&buf[..4]));
            }
            return Err(FormatError::TruncatedHeader {
                needed: HEADER_LEN,
                available: buf.len(),
            }
            .into());
        }
        if buf[..4] != MAGIC {
            return Err(bad_magic(&buf[..4]));
        }
        let mut cursor = Cursor::new(&buf[4..HEADER_LEN]);
        let wml = cursor.read_u8()?;
        if !width::is_valid(wml) {
            return Err(FormatError::InvalidWidthClass(wml).into());
        }
        let token_count = cursor.read_u64::<LittleEndian>()?;
        let unique_count = cursor.read_u64::<LittleEndian>()?;
        Ok(Self { wml, token_count, unique_count })
    }
}

fn bad_magic(found: &[u8]) -> CodecError {
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(found);
    FormatError::BadMagic { expected: MAGIC, found: bytes }.into()
}

/// Exact byte length of the container `write_container` produces for `dict`.
pub fn container_len(dict: &Dictionary<'_>) -> usize {
    let field = width::field_width(dict.width_class());
    let index: usize = dict
        .entries()
        .iter()
        .enumerate()
        .map(|(rank, e)| e.count as usize * varint::encoded_len(rank as u64))
        .sum();
    let words: usize = dict.entries().iter().map(|e| field + e.word.len()).sum();
    HEADER_LEN + words + index
}

/// Serialize a complete container. `tokens` must be the same sequence the
/// dictionary was built from.
pub fn write_container<'a, W, I>(dict: &Dictionary<'a>, tokens: I, out: &mut W) -> Result<Header>
where
    W: Write,
    I: IntoIterator<Item = &'a [u8]>,
{
    let header = Header {
        wml: dict.width_class(),
        token_count: dict.token_count(),
        unique_count: dict.len() as u64,
    };
    header.write(out)?;

    let field = width::field_width(header.wml);
    for entry in dict.entries() {
        let len = entry.word.len() as u64;
        debug_assert!(len <= width::max_len_for(header.wml));
        out.write_uint::<BigEndian>(len, field)?;
        out.write_all(entry.word)?;
    }

    let mut scratch = Vec::with_capacity(varint::MAX_LEN);
    for token in tokens {
        let rank = dict
            .rank_of(token)
            .ok_or(CodecError::UnknownToken { len: token.len() })?;
        scratch.clear();
        varint::encode(rank, &mut scratch);
        out.write_all(&scratch)?;
    }
    Ok(header)
}

/// A parsed container whose words borrow from the input buffer.
#[derive(Debug, Clone)]
pub struct RawContainer<'a> {
    pub header: Header,
    /// Words in rank order.
    pub words: Vec<&'a [u8]>,
    pub dictionary_len: usize,
    /// The index section, from its first byte to end of data.
    pub index: &'a [u8],
}

/// Parse the header and dictionary section; the index section is left raw.
pub fn read_container(buf: &[u8]) -> Result<RawContainer<'_>> {
    let header = Header::read(buf)?;
    let field = width::field_width(header.wml);

    let body = &buf[HEADER_LEN..];
    let mut cursor = Cursor::new(body);
    // every entry needs at least its length field
    let cap = (body.len() / field).min(header.unique_count as usize);
    let mut words = Vec::with_capacity(cap);

    for index in 0..header.unique_count {
        let truncated = |_| CodecError::from(FormatError::TruncatedEntry { index });
        let len = cursor.read_uint::<BigEndian>(field).map_err(truncated)?;
        let start = cursor.position() as usize;
        let remaining = (body.len() - start) as u64;
        if len > remaining {
            return Err(FormatError::TruncatedEntry { index }.into());
        }
        let end = start + len as usize;
        words.push(&body[start..end]);
        cursor.set_position(end as u64);
    }

    let dictionary_len = cursor.position() as usize;
    Ok(RawContainer {
        header,
        words,
        dictionary_len,
        index: &body[dictionary_len..],
    })
}

/// Resolve exactly `header.token_count` ranks and append their words to `out`.
pub fn read_index<W: Write>(container: &RawContainer<'_>, out: &mut W) -> Result<()> {
    let expected = container.header.token_count;
    let entries = container.words.len() as u64;
    let index = container.index;
    let base = HEADER_LEN + container.dictionary_len;

    let mut pos = 0usize;
    for found in 0..expected {
        if pos >= index.len() {
            return Err(FormatError::IndexUnderflow { expected, found }.into());
        }
        let (rank, used) = varint::decode(&index[pos..], base + pos)?;
        pos += used;
        let word = usize::try_from(rank)
            .ok()
            .and_then(|r| container.words.get(r))
            .ok_or(CodecError::Lookup { rank, entries })?;
        out.write_all(word)?;
    }

    if pos < index.len() {
        return Err(FormatError::TrailingBytes { count: index.len() - pos }.into());
    }
    Ok(())
}

/// Read a whole container from `source` into memory.
pub fn read_all<R: Read>(source: &mut R) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    source.read_to_end(&mut buf)?;
    Ok(buf)
}
