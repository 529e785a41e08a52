//! Shared decoding helpers.

use crate::Error;
use bytes::Buf;

/// Ensures `buf` has at least `len` readable bytes before a fixed-width read.
#[inline]
pub fn at_least(buf: &mut impl Buf, len: usize) -> Result<(), Error> {
    if buf.remaining() < len {
        return Err(Error::EndOfBuffer);
    }
    Ok(())
}
