//! Self-terminating base-128 integers for the index stream.
//!
//! Groups of 7 bits, least significant first. The high bit marks the LAST
//! byte; a clear high bit means more bytes follow. Zero encodes as `0x80`.

use crate::error::{FormatError, Result};

const GROUP_MASK: u64 = 0x7f;
const TERMINAL: u8 = 0x80;

/// Longest encoding of a `u64`.
pub const MAX_LEN: usize = 10;

/// Append the encoding of `value` to `out`; returns bytes written.
pub fn encode(mut value: u64, out: &mut Vec<u8>) -> usize {
    let start = out.len();
    loop {
        let group = (value & GROUP_MASK) as u8;
        value >>= 7;
        if value == 0 {
            out.push(group | TERMINAL);
            break;
        }
        out.push(group);
    }
    out.len() - start
}

/// Bytes needed to encode `value`.
pub fn encoded_len(value: u64) -> usize {
    let bits = (u64::BITS - value.leading_zeros()).max(1) as usize;
    bits.div_ceil(7)
}

/// Decode one value from the front of `buf`. Returns the value and bytes
/// consumed. `offset` is only used to locate errors.
pub fn decode(buf: &[u8], offset: usize) -> Result<(u64, usize)> {
    let mut value: u64 = 0;
    for (i, &byte) in buf.iter().enumerate() {
        if i >= MAX_LEN {
            return Err(FormatError::VarintOverflow { offset }.into());
        }
        let group = u64::from(byte & GROUP_MASK as u8);
        let shift = 7 * i as u32;
        // the tenth byte only has room for bit 63
        if shift == 63 && group > 1 {
            return Err(FormatError::VarintOverflow { offset }.into());
        }
        value |= group << shift;
        if byte & TERMINAL != 0 {
            return Ok((value, i + 1));
        }
    }
    if buf.len() >= MAX_LEN {
        return Err(FormatError::VarintOverflow { offset }.into());
    }
    Err(FormatError::TruncatedVarint { offset }.into())
}
