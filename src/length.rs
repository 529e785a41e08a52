//! Fixed-width length fields.
//!
//! Every variable-length shape is self-describing: a fixed 8-byte
//! little-endian unsigned integer states the byte count (or element count) of
//! the payload that follows. The same field frames whole messages on a
//! stream. Keeping the width fixed means `encode_size` never depends on the
//! magnitude of a length, so sizes can be computed in a single pass.

use crate::Error;
use bytes::{Buf, BufMut};

/// Encoded width of a length field in bytes.
pub const SIZE: usize = 8;

/// Writes `len` as a fixed-width length field.
#[inline]
pub fn write(len: usize, buf: &mut impl BufMut) {
    buf.put_u64_le(len as u64);
}

/// Encodes `len` as a standalone length field.
#[inline]
pub fn encode(len: usize) -> [u8; SIZE] {
    (len as u64).to_le_bytes()
}

/// Reads a length field.
///
/// Values that cannot index memory on this host are rejected rather than
/// truncated.
#[inline]
pub fn read(buf: &mut impl Buf) -> Result<usize, Error> {
    if buf.remaining() < SIZE {
        return Err(Error::EndOfBuffer);
    }
    let raw = buf.get_u64_le();
    usize::try_from(raw).map_err(|_| Error::LengthOverflow(raw))
}
