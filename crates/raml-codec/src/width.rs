//! Width class (wml) of the dictionary length fields.
//!
//! A class of `w` means every length is stored in `w + 1` big-endian bytes.
//! Derived with integer bit lengths; no floating point.

/// Largest valid width class: an 8-byte length field.
pub const MAX_WIDTH_CLASS: u8 = 7;

/// Smallest class whose field can hold `max_len`.
pub fn width_class(max_len: u64) -> u8 {
    let bits = u64::BITS - max_len.leading_zeros();
    let bytes = bits.div_ceil(8).max(1);
    (bytes - 1) as u8
}

/// Bytes in a length field of the given class.
pub fn field_width(class: u8) -> usize {
    class as usize + 1
}

/// Largest length a field of the given class can store.
pub fn max_len_for(class: u8) -> u64 {
    match field_width(class) {
        n if n >= 8 => u64::MAX,
        n => (1u64 << (8 * n)) - 1,
    }
}

pub fn is_valid(class: u8) -> bool {
    class <= MAX_WIDTH_CLASS
}
