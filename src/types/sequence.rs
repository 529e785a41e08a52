//! Codec implementations for homogeneous sequences.
//!
//! A sequence encodes as an element count followed by each element's own
//! encoding in order. Elements may themselves be variable-length; the count
//! field only states how many there are, each element remains
//! self-describing. [`Bytes`] gets a dedicated implementation so byte
//! payloads copy in bulk instead of element-by-element.

use crate::{length, EncodeSize, Error, Read, Write};
use bytes::{Buf, BufMut, Bytes};

// Vec implementation
impl<T: Write> Write for Vec<T> {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        length::write(self.len(), buf);
        for item in self {
            item.write(buf);
        }
    }
}

impl<T: EncodeSize> EncodeSize for Vec<T> {
    #[inline]
    fn encode_size(&self) -> usize {
        length::SIZE + self.iter().map(EncodeSize::encode_size).sum::<usize>()
    }
}

impl<Cfg: Clone, T: Read<Cfg>> Read<Cfg> for Vec<T> {
    #[inline]
    fn read_cfg(buf: &mut impl Buf, cfg: Cfg) -> Result<Self, Error> {
        let len = length::read(buf)?;
        // Every element encodes to at least one byte, so a count beyond the
        // remaining input cannot be satisfied.
        if len > buf.remaining() {
            return Err(Error::InvalidLength(len));
        }
        let mut vec = Vec::with_capacity(len);
        for _ in 0..len {
            vec.push(T::read_cfg(buf, cfg.clone())?);
        }
        Ok(vec)
    }
}

// Bytes implementation
impl Write for Bytes {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        length::write(self.len(), buf);
        buf.put_slice(self);
    }
}

impl EncodeSize for Bytes {
    #[inline]
    fn encode_size(&self) -> usize {
        length::SIZE + self.len()
    }
}

impl Read for Bytes {
    #[inline]
    fn read_cfg(buf: &mut impl Buf, _: ()) -> Result<Self, Error> {
        let len = length::read(buf)?;
        if len > buf.remaining() {
            return Err(Error::InvalidLength(len));
        }
        Ok(buf.copy_to_bytes(len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DecodeExt, Encode};

    #[test]
    fn test_vec() {
        let values = [vec![], vec![1u8], vec![1u8, 2, 3]];
        for value in values {
            let encoded = value.encode();
            assert_eq!(encoded.size(), length::SIZE + value.len());
            let decoded = Vec::<u8>::decode(encoded).unwrap();
            assert_eq!(value, decoded);
        }
    }

    #[test]
    fn test_empty_is_count_field_only() {
        let encoded = Vec::<u8>::new().encode();
        assert_eq!(encoded.as_slice(), &[0u8; length::SIZE][..]);
    }

    #[test]
    fn test_nested() {
        let value = vec![vec![1u32, 2], vec![], vec![3]];
        let encoded = value.encode();
        let decoded = Vec::<Vec<u32>>::decode(encoded).unwrap();
        assert_eq!(value, decoded);
    }

    #[test]
    fn test_vec_of_text() {
        let value = vec!["x".to_string(), "y".to_string()];
        let encoded = value.encode();
        // count + 2 * (length field + 1 byte)
        assert_eq!(encoded.size(), length::SIZE + 2 * (length::SIZE + 1));
        let decoded = Vec::<String>::decode(encoded).unwrap();
        assert_eq!(value, decoded);
    }

    #[test]
    fn test_count_exceeds_input() {
        let mut bytes = Vec::new();
        length::write(10, &mut bytes);
        bytes.push(1u8);
        assert!(matches!(
            Vec::<u8>::decode(&bytes[..]),
            Err(Error::InvalidLength(10))
        ));
    }

    #[test]
    fn test_bytes() {
        let values = [
            Bytes::new(),
            Bytes::from_static(&[1, 2, 3]),
            Bytes::from(vec![0; 300]),
        ];
        for value in values {
            let encoded = value.encode();
            assert_eq!(encoded.size(), length::SIZE + value.len());
            let decoded = Bytes::decode(encoded).unwrap();
            assert_eq!(value, decoded);
        }
    }
}
