//! Packed (variable-length) unsigned integers.
//!
//! Network ids, player ids and client ids are written as *packed* integers:
//! seven value bits per byte, least significant group first, with the high
//! bit set on every byte except the last.
//!
//! ```text
//! 5        -> 05
//! 127      -> 7F
//! 128      -> 80 01
//! 300      -> AC 02
//! u32::MAX -> FF FF FF FF 0F
//! ```

/// Longest possible packed `u32` in bytes.
pub const MAX_PACKED_LEN: usize = 5;

/// Packs `value` into its shortest variable-length representation.
///
/// # Examples
///
/// ```rust
/// use among_core::protocol::pack::pack;
///
/// assert_eq!(pack(0), vec![0x00]);
/// assert_eq!(pack(300), vec![0xAC, 0x02]);
/// ```
pub fn pack(value: u32) -> Vec<u8> {
    let mut buf = Vec::with_capacity(packed_len(value));
    write_packed(&mut buf, value);
    buf
}

/// Appends the packed form of `value` to `buf`.
pub fn write_packed(buf: &mut Vec<u8>, mut value: u32) {
    loop {
        let mut byte = (value & 0x7F) as u8;
        value >>= 7;
        if value != 0 {
            byte |= 0x80;
        }
        buf.push(byte);
        if value == 0 {
            break;
        }
    }
}

/// Number of bytes [`pack`] produces for `value`, without allocating.
pub fn packed_len(value: u32) -> usize {
    match value {
        0..=0x7F => 1,
        0x80..=0x3FFF => 2,
        0x4000..=0x1F_FFFF => 3,
        0x20_0000..=0xFFF_FFFF => 4,
        _ => MAX_PACKED_LEN,
    }
}
