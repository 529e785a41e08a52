//! Codec implementations for scalar types.
//!
//! Scalars are fixed width and trivially copyable: their encoding is the raw
//! little-endian byte representation, so `Size`, `Encode`, and `Decode`
//! agree by construction. `bool` occupies one byte and only 0/1 decode.
//! Fixed-size byte arrays are included here because they behave like
//! scalars: width known at compile time, contents copied verbatim.

use crate::{util::at_least, Error, FixedSize, Read, ReadExt, Write};
use bytes::{Buf, BufMut};

// Numeric types implementation
macro_rules! impl_numeric {
    ($type:ty, $read_method:ident, $write_method:ident) => {
        impl Write for $type {
            #[inline]
            fn write(&self, buf: &mut impl BufMut) {
                buf.$write_method(*self);
            }
        }

        impl Read for $type {
            #[inline]
            fn read_cfg(buf: &mut impl Buf, _: ()) -> Result<Self, Error> {
                at_least(buf, std::mem::size_of::<$type>())?;
                Ok(buf.$read_method())
            }
        }

        impl FixedSize for $type {
            const SIZE: usize = std::mem::size_of::<$type>();
        }
    };
}

impl_numeric!(u8, get_u8, put_u8);
impl_numeric!(u16, get_u16_le, put_u16_le);
impl_numeric!(u32, get_u32_le, put_u32_le);
impl_numeric!(u64, get_u64_le, put_u64_le);
impl_numeric!(u128, get_u128_le, put_u128_le);
impl_numeric!(i8, get_i8, put_i8);
impl_numeric!(i16, get_i16_le, put_i16_le);
impl_numeric!(i32, get_i32_le, put_i32_le);
impl_numeric!(i64, get_i64_le, put_i64_le);
impl_numeric!(i128, get_i128_le, put_i128_le);
impl_numeric!(f32, get_f32_le, put_f32_le);
impl_numeric!(f64, get_f64_le, put_f64_le);

// Bool implementation
impl Write for bool {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        buf.put_u8(if *self { 1 } else { 0 });
    }
}

impl Read for bool {
    #[inline]
    fn read_cfg(buf: &mut impl Buf, _: ()) -> Result<Self, Error> {
        match u8::read(buf)? {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(Error::InvalidBool),
        }
    }
}

impl FixedSize for bool {
    const SIZE: usize = 1;
}

// Constant-size array implementation
impl<const N: usize> Write for [u8; N] {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        buf.put_slice(&self[..]);
    }
}

impl<const N: usize> Read for [u8; N] {
    #[inline]
    fn read_cfg(buf: &mut impl Buf, _: ()) -> Result<Self, Error> {
        at_least(buf, N)?;
        let mut dst = [0; N];
        buf.copy_to_slice(&mut dst);
        Ok(dst)
    }
}

impl<const N: usize> FixedSize for [u8; N] {
    const SIZE: usize = N;
}

#[cfg(test)]
mod tests {
    use crate::{DecodeExt, Encode, EncodeFixed, EncodeSize};
    use paste::paste;

    macro_rules! impl_num_test {
        ($type:ty, $size:expr) => {
            paste! {
                #[test]
                fn [<test_ $type>]() {
                    let expected_len = std::mem::size_of::<$type>();
                    let values: [$type; 5] =
                        [0 as $type, 1 as $type, 42 as $type, <$type>::MAX, <$type>::MIN];
                    for value in values.iter() {
                        let encoded = value.encode();
                        assert_eq!(encoded.size(), expected_len);
                        let decoded = <$type>::decode(encoded).unwrap();
                        assert_eq!(*value, decoded);
                        assert_eq!(value.encode_size(), expected_len);

                        let fixed: [u8; $size] = value.encode_fixed();
                        let decoded = <$type>::decode(&fixed[..]).unwrap();
                        assert_eq!(*value, decoded);
                    }
                }
            }
        };
    }
    impl_num_test!(u8, 1);
    impl_num_test!(u16, 2);
    impl_num_test!(u32, 4);
    impl_num_test!(u64, 8);
    impl_num_test!(u128, 16);
    impl_num_test!(i8, 1);
    impl_num_test!(i16, 2);
    impl_num_test!(i32, 4);
    impl_num_test!(i64, 8);
    impl_num_test!(i128, 16);
    impl_num_test!(f32, 4);
    impl_num_test!(f64, 8);

    #[test]
    fn test_bool() {
        let values = [true, false];
        for value in values.iter() {
            let encoded = value.encode();
            assert_eq!(encoded.size(), 1);
            let decoded = bool::decode(encoded).unwrap();
            assert_eq!(*value, decoded);
        }
        assert!(matches!(
            bool::decode(&[0x02u8][..]),
            Err(crate::Error::InvalidBool)
        ));
    }

    #[test]
    fn test_array() {
        let values = [1u8, 2, 3];
        let encoded = values.encode();
        let decoded = <[u8; 3]>::decode(encoded).unwrap();
        assert_eq!(values, decoded);
    }

    #[test]
    fn test_conformity() {
        // Bool
        assert_eq!(true.encode().as_slice(), &[0x01][..]);
        assert_eq!(false.encode().as_slice(), &[0x00][..]);

        // 8-bit integers
        assert_eq!(255u8.encode().as_slice(), &[0xFF][..]);
        assert_eq!((-1i8).encode().as_slice(), &[0xFF][..]);
        assert_eq!((-128i8).encode().as_slice(), &[0x80][..]);

        // Multi-byte integers are little-endian.
        assert_eq!(0xABCDu16.encode().as_slice(), &[0xCD, 0xAB][..]);
        assert_eq!(
            0xABCDEF01u32.encode().as_slice(),
            &[0x01, 0xEF, 0xCD, 0xAB][..]
        );
        assert_eq!(
            0x0123456789ABCDEFu64.encode().as_slice(),
            &[0xEF, 0xCD, 0xAB, 0x89, 0x67, 0x45, 0x23, 0x01][..]
        );
        assert_eq!(
            (-1i64).encode().as_slice(),
            &[0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF][..]
        );

        // Floats are their IEEE 754 representation, little-endian.
        assert_eq!(1.0f32.encode().as_slice(), &1.0f32.to_le_bytes()[..]);
        assert_eq!((-1.0f64).encode().as_slice(), &(-1.0f64).to_le_bytes()[..]);

        // Fixed-size array
        assert_eq!([1u8, 2, 3].encode().as_slice(), &[0x01, 0x02, 0x03][..]);
    }
}
