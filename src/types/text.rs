//! Codec implementation for text.
//!
//! A string encodes as a length field followed by its UTF-8 bytes. There is
//! no terminator: the length prefix alone is authoritative, so an empty
//! string is exactly one length field. Decoding validates UTF-8.

use crate::{length, Error, Read, Write};
use bytes::{Buf, BufMut};

impl Write for String {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        length::write(self.len(), buf);
        buf.put_slice(self.as_bytes());
    }
}

impl crate::EncodeSize for String {
    #[inline]
    fn encode_size(&self) -> usize {
        length::SIZE + self.len()
    }
}

impl Read for String {
    #[inline]
    fn read_cfg(buf: &mut impl Buf, _: ()) -> Result<Self, Error> {
        let len = length::read(buf)?;
        if len > buf.remaining() {
            return Err(Error::InvalidLength(len));
        }
        let mut bytes = vec![0u8; len];
        buf.copy_to_slice(&mut bytes);
        String::from_utf8(bytes).map_err(|err| Error::InvalidText(err.utf8_error()))
    }
}
