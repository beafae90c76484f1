//! HAProxy variable length integers.
//!
//! Values below 240 are a single byte. Larger values put their low nibble in
//! the first byte (high nibble forced to `0xF0`) and continue with 7 bit
//! groups, bit 7 flagging that another byte follows.

use crate::protocol::enums::codec_error::CodecError;

pub const SINGLE_BYTE_LIMIT: u64 = 0xF0;

/// No u64 needs more continuation bytes than this.
pub const MAX_CONTINUATION_BYTES: usize = 10;

pub fn encode(value: u64) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(10);
    encode_into(value, &mut bytes);
    bytes
}

pub fn encode_into(value: u64, bytes: &mut Vec<u8>) {
    if value < SINGLE_BYTE_LIMIT {
        bytes.push(value as u8);
        return;
    }

    bytes.push((value & 0xFF) as u8 | 0xF0);
    let mut rest = (value - SINGLE_BYTE_LIMIT) >> 4;
    while rest >= 0x80 {
        bytes.push((rest & 0x7F) as u8 | 0x80);
        rest = (rest - 0x80) >> 7;
    }
    bytes.push(rest as u8);
}

/// Returns `(consumed, value)`. `CodecError::Incomplete` means more bytes are
/// needed, the caller may retry once the buffer grew.
pub fn decode(buffer: &[u8]) -> Result<(usize, u64), CodecError> {
    let Some(&first) = buffer.first() else {
        return Err(CodecError::Incomplete);
    };
    if u64::from(first) < SINGLE_BYTE_LIMIT {
        return Ok((1, u64::from(first)));
    }

    let mut value = u128::from(first);
    for (index, byte) in buffer[1..].iter().enumerate() {
        if index >= MAX_CONTINUATION_BYTES {
            return Err(CodecError::VarintOverflow);
        }
        value += u128::from(*byte) << (4 + 7 * index);
        if byte & 0x80 == 0 {
            return u64::try_from(value)
                .map(|value| (index + 2, value))
                .map_err(|_| CodecError::VarintOverflow);
        }
    }

    Err(CodecError::Incomplete)
}
