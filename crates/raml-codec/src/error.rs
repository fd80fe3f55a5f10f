use thiserror::Error;

/// Malformed or truncated container data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Bad magic code: expected {expected:02x?}, found {found:02x?}")]
    BadMagic { expected: [u8; 4], found: [u8; 4] },
    #[error("Truncated header: need {needed} bytes, have {available}")]
    TruncatedHeader { needed: usize, available: usize },
    #[error("Invalid width class: {0} (must be 0..=7)")]
    InvalidWidthClass(u8),
    #[error("Truncated dictionary entry {index}")]
    TruncatedEntry { index: u64 },
    #[error("Truncated varint at offset {offset}")]
    TruncatedVarint { offset: usize },
    #[error("Varint at offset {offset} overflows u64")]
    VarintOverflow { offset: usize },
    #[error("Index section underflow: expected {expected} ranks, found {found}")]
    IndexUnderflow { expected: u64, found: u64 },
    #[error("{count} trailing bytes after index section")]
    TrailingBytes { count: usize },
}

/// Input too large for the container's fixed-width fields.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CapacityError {
    #[error("Too many unique words: {count} exceeds the rank space")]
    TooManyWords { count: usize },
    #[error("Word of {len} bytes exceeds the 8-byte length field")]
    WordTooLong { len: usize },
}

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Format error: {0}")]
    Format(#[from] FormatError),
    #[error("Capacity error: {0}")]
    Capacity(#[from] CapacityError),
    #[error("Rank {rank} has no dictionary entry ({entries} entries)")]
    Lookup { rank: u64, entries: u64 },
    #[error("Token of {len} bytes is not in the dictionary")]
    UnknownToken { len: usize },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CodecError>;
