//! Core codec traits.
//!
//! Every supported shape implements three operations that must agree on byte
//! count: [`EncodeSize::encode_size`] states how many bytes a value encodes
//! to, [`Write::write`] produces exactly that many bytes, and
//! [`Read::read_cfg`] consumes exactly that many bytes (re-derived from the
//! encoded length fields, never from a live value).
//!
//! Dispatch is static: the caller always knows the type it is encoding or
//! decoding, so the wire carries no shape tag for the outer value.

use crate::{Buffer, Error};
use bytes::{Buf, BufMut};

/// Trait for types that can be written (encoded) to a buffer.
pub trait Write {
    /// Encodes this value by writing to a buffer.
    ///
    /// Implementations should panic if the buffer doesn't have enough
    /// capacity.
    fn write(&self, buf: &mut impl BufMut);
}

/// Trait for types that know their encoded length up front.
pub trait EncodeSize {
    /// Returns the encoded length of this value.
    ///
    /// This method MUST return the exact number of bytes that will be
    /// written by `write()`.
    fn encode_size(&self) -> usize;
}

/// Trait for types that can be read (decoded) from a buffer.
///
/// The `Cfg` type parameter allows threading configuration through nested
/// reads. All shapes provided by this crate use `()`.
pub trait Read<Cfg = ()>: Sized {
    /// Reads a value from the buffer, consuming the necessary bytes.
    ///
    /// Returns an error if decoding fails (truncated input, an invalid
    /// length field, malformed data).
    fn read_cfg(buf: &mut impl Buf, cfg: Cfg) -> Result<Self, Error>;
}

/// Trait for types that can be encoded to a buffer.
pub trait Encode: Write + EncodeSize {
    /// Encodes a value into a fresh [`Buffer`] sized by `encode_size()`,
    /// with the cursor rewound so the result is ready to read.
    ///
    /// Panics if the `write` implementation does not write the expected
    /// number of bytes.
    ///
    /// (Provided method).
    fn encode(&self) -> Buffer {
        let size = self.encode_size();
        let mut buffer = Buffer::new(size);
        self.write(&mut buffer);
        assert_eq!(
            buffer.offset(),
            size,
            "write() did not write expected bytes"
        );
        buffer.reset_offset(0);
        buffer
    }
}

// Automatically implement `Encode` for types that can size and write
// themselves.
impl<T: Write + EncodeSize> Encode for T {}

/// Trait for types that can be decoded from a buffer, ensuring the entire
/// buffer is consumed.
pub trait Decode<Cfg = ()>: Read<Cfg> {
    /// Decodes a value from a buffer, ensuring the buffer is fully consumed.
    ///
    /// (Provided method).
    fn decode_cfg(mut buf: impl Buf, cfg: Cfg) -> Result<Self, Error> {
        let result = Self::read_cfg(&mut buf, cfg)?;
        let remaining = buf.remaining();
        if remaining > 0 {
            return Err(Error::ExtraData(remaining));
        }
        Ok(result)
    }
}

// Automatically implement `Decode` for types that implement `Read`.
impl<Cfg, T: Read<Cfg>> Decode<Cfg> for T {}

/// Trait for types that can be encoded and decoded.
pub trait Codec<Cfg = ()>: Encode + Decode<Cfg> {}

// Automatically implement `Codec` for types that implement `Encode` and
// `Decode`.
impl<Cfg, T: Encode + Decode<Cfg>> Codec<Cfg> for T {}

/// Trait for types with a known, fixed encoded length.
pub trait FixedSize {
    /// The length of the encoded value.
    const SIZE: usize;
}

// For fixed-size types the encoded length is the constant.
impl<T: FixedSize> EncodeSize for T {
    #[inline]
    fn encode_size(&self) -> usize {
        Self::SIZE
    }
}

/// Trait for types that can be encoded to a fixed-size byte array.
pub trait EncodeFixed: Write + FixedSize {
    /// Encodes a value to a fixed-size byte array.
    ///
    /// The caller MUST ensure `N` is equal to `Self::SIZE`. Panics if the
    /// `write` implementation does not write exactly `N` bytes.
    ///
    /// (Provided method).
    fn encode_fixed<const N: usize>(&self) -> [u8; N] {
        // Ideally this is a compile-time check, but we can't do that in the
        // current Rust version without adding a new generic parameter to the
        // trait.
        assert_eq!(
            N,
            Self::SIZE,
            "Can't encode {} bytes into {} bytes",
            Self::SIZE,
            N
        );

        let mut array = [0u8; N];
        let mut buf = &mut array[..];
        self.write(&mut buf);
        assert_eq!(buf.len(), 0);
        array
    }
}

// Automatically implement `EncodeFixed` for types that implement `Write` and
// `FixedSize`.
impl<T: Write + FixedSize> EncodeFixed for T {}

/// Extension trait providing an ergonomic read method for types requiring no
/// configuration.
pub trait ReadExt: Read<()> {
    /// Reads a value using the default `()` config.
    fn read(buf: &mut impl Buf) -> Result<Self, Error> {
        <Self as Read<()>>::read_cfg(buf, ())
    }
}

// Automatically implement `ReadExt` for types that implement `Read` with no
// config.
impl<T: Read<()>> ReadExt for T {}

/// Extension trait providing an ergonomic decode method for types requiring
/// no configuration.
pub trait DecodeExt: Decode<()> {
    /// Decodes a value using the default `()` config.
    fn decode(buf: impl Buf) -> Result<Self, Error> {
        Self::decode_cfg(buf, ())
    }
}

// Automatically implement `DecodeExt` for types that implement `Decode` with
// no config.
impl<T: Decode<()>> DecodeExt for T {}
